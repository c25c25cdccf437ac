pub mod selector_config;

pub use selector_config::{LoggingConfig, SelectorConfig};
