//! Handler for the `run` command.

use tracing::{error, info};

use super::command::RunArgs;
use super::output;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;

/// Load configuration, apply CLI overrides and run the bot.
///
/// # Errors
///
/// Fails on invalid configuration, unusable asset directories, or when the
/// bot cannot start.
pub async fn execute(args: &RunArgs) -> Result<()> {
    let (mut config, found) = Config::load_or_default(&args.config)?;
    if !found {
        output::warning(&format!(
            "Config file {} not found, using defaults",
            args.config.display()
        ));
    }

    if let Some(level) = &args.log_level {
        config.logging.level.clone_from(level);
    }
    if args.json_logs {
        config.logging.format = "json".to_string();
    }
    config.init_logging();
    info!(config = %args.config.display(), "tarotbot starting");

    let service = bootstrap::build_service(&config)?;
    let result = start(&config, service).await;
    if let Err(e) = &result {
        error!(error = %e, "Fatal error");
    }
    info!("tarotbot stopped");
    result
}

#[cfg(feature = "telegram")]
async fn start(
    config: &Config,
    service: std::sync::Arc<crate::application::TarotService>,
) -> Result<()> {
    crate::adapter::inbound::telegram::bot::run(&config.telegram, service).await
}

#[cfg(not(feature = "telegram"))]
async fn start(
    _config: &Config,
    _service: std::sync::Arc<crate::application::TarotService>,
) -> Result<()> {
    Err(crate::error::ConfigError::InvalidValue {
        field: "telegram",
        reason: "built without the `telegram` feature".into(),
    }
    .into())
}
