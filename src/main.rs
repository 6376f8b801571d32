use std::error::Error;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::{rngs::StdRng, SeedableRng};
use tracing::{debug, info};

use perceptron_nn::{logging, Dataset, Perceptron, TrainConfig};

// Trains on the built-in dataset and prints the predictions for two probe
// inputs, one per line. Logs go to stderr.
fn main() -> Result<(), Box<dyn Error>> {
    logging::init_logging()?;

    let dataset = Dataset::toy();
    let mut model = Perceptron::new(TrainConfig::default());

    let seed = clock_seed();
    info!(seed, "seeding weight initialization from the clock");
    model.initialize(&dataset, &mut StdRng::seed_from_u64(seed));

    model.train(&dataset)?;

    let loss = model.loss(&dataset)?;
    debug!(loss, "final squared error");
    let snapshot = serde_json::to_string(&model)?;
    info!(parameters = %snapshot, "trained perceptron");

    println!("{}", model.predict(&[0.0, 1.0, 0.0])?);
    println!("{}", model.predict(&[1.0, 0.0, 1.0])?);

    Ok(())
}

/// Nanoseconds since the Unix epoch, truncated to 64 bits.
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}
