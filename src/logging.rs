use tracing::subscriber::SetGlobalDefaultError;

/// Installs a compact `fmt` subscriber as the global default.
///
/// Events go to stderr so stdout carries only program output. The level is
/// fixed at INFO; no environment variables are consulted.
pub fn init_logging() -> Result<(), SetGlobalDefaultError> {
    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
}
