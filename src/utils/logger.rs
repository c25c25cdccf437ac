use crate::config::LoggingConfig;
use crate::utils::error::{JsonError, Result};
use serde::{Deserialize, Serialize};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

fn env_filter(verbose: bool) -> EnvFilter {
    let default_directive = if verbose {
        "json_named_fields=debug,info"
    } else {
        "json_named_fields=info"
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// 安裝全域 tracing subscriber，`RUST_LOG` 優先於預設層級
pub fn init_logger(verbose: bool, format: LogFormat) -> Result<()> {
    let registry = tracing_subscriber::registry().with(env_filter(verbose));

    let installed = match format {
        LogFormat::Compact => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .compact(),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .json(),
            )
            .try_init(),
    };

    installed.map_err(|e| JsonError::LoggerError {
        message: e.to_string(),
    })
}

pub fn init_from_config(config: &LoggingConfig) -> Result<()> {
    init_logger(config.verbose, config.format)
}
