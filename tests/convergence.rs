use perceptron_nn::{Dataset, Perceptron, PerceptronError, TrainConfig};
use rand::{rngs::StdRng, SeedableRng};

fn trained(seed: u64) -> Perceptron {
    let dataset = Dataset::toy();
    let mut model = Perceptron::new(TrainConfig::default());
    model.initialize(&dataset, &mut StdRng::seed_from_u64(seed));
    model.train(&dataset).unwrap();
    model
}

#[test]
fn separates_probe_inputs_for_any_seed() {
    for seed in 0..25 {
        let model = trained(seed);
        let negative = model.predict(&[0.0, 1.0, 0.0]).unwrap();
        let positive = model.predict(&[1.0, 0.0, 1.0]).unwrap();
        assert!(negative < 0.5, "seed {seed}: predict([0,1,0]) = {negative}");
        assert!(positive > 0.5, "seed {seed}: predict([1,0,1]) = {positive}");
    }
}

#[test]
fn training_reduces_loss_from_random_start() {
    let dataset = Dataset::toy();
    let mut model = Perceptron::new(TrainConfig::new(1000));
    model.initialize(&dataset, &mut StdRng::seed_from_u64(11));

    let before = model.loss(&dataset).unwrap();
    model.train(&dataset).unwrap();
    let after = model.loss(&dataset).unwrap();

    assert!(after < before);
    assert!(after < 0.1, "final loss {after}");
}

#[test]
fn fixed_start_gives_identical_runs() {
    let dataset = Dataset::toy();
    let start = Perceptron::with_parameters(vec![0.25, 0.5, 0.75], 0.0, TrainConfig::new(200));

    let mut a = start.clone();
    let mut b = start;
    a.train(&dataset).unwrap();
    b.train(&dataset).unwrap();

    assert_eq!(a, b);
}

#[test]
fn untrained_model_surfaces_dimension_mismatch() {
    let dataset = Dataset::toy();
    let mut model = Perceptron::new(TrainConfig::default());

    assert_eq!(
        model.train(&dataset),
        Err(PerceptronError::DimensionMismatch { expected: 0, found: 3 })
    );
}

#[test]
fn trained_parameters_serialize_to_json() {
    let model = trained(3);
    let json = serde_json::to_value(&model).unwrap();

    assert_eq!(json["weights"].as_array().map(|w| w.len()), Some(3));
    assert_eq!(json["config"]["epochs"], 1000);
    let restored: Perceptron = serde_json::from_value(json).unwrap();
    assert_eq!(restored.config(), model.config());
}
