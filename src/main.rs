use anyhow::Result;

use sitepilot::config::Config;
use sitepilot::logger::{self, Logger};
use sitepilot::ui;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;

    let app_logger = Logger::from_config(config.logging.enabled)?;
    logger::install(app_logger.clone());

    ui::run_app(config, app_logger).await?;

    Ok(())
}
