use anyhow::Result;

use experiment_engine::logging::{init_logging, LoggingConfig};
use experiment_engine::window::{Runtime, RuntimeConfig};

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    Runtime::run(RuntimeConfig::default())?;

    log::debug!("window closed");
    Ok(())
}
