use dotenvy::dotenv;
use eyre::Result;
use tracing_subscriber::EnvFilter;

pub fn load_env() -> Result<()> {
    dotenv().ok();
    Ok(())
}

/// Log to stderr so command output on stdout stays parseable.
///
/// `RUST_LOG` wins over `--debug`.
pub fn init_tracing(debug: bool) -> Result<()> {
    let default_directive = if debug { "warn,riskwatch=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(debug)
        .try_init()
        .map_err(|e| eyre::eyre!("failed to initialise logging: {e}"))
}
