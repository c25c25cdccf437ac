use crate::core::mapper::MapperConfig;
use crate::domain::model::SelectorDeclaration;
use crate::utils::error::{JsonError, Result};
use crate::utils::logger::LogFormat;
use crate::utils::validation::{validate_field_names, validate_non_empty_string, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([^}]+)\}").expect("environment variable pattern is a valid regex")
});

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectorConfig {
    pub mapper: Option<MapperConfig>,
    pub logging: Option<LoggingConfig>,
    /// 以型別鍵分組的 selector 宣告，例如 `[[types.user]]`
    #[serde(default)]
    pub types: HashMap<String, Vec<SelectorDeclaration>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub verbose: bool,
    #[serde(default)]
    pub format: LogFormat,
}

impl SelectorConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(JsonError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| JsonError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SELECTOR_FIELDS})，未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn declarations(&self, key: &str) -> Option<&[SelectorDeclaration]> {
        self.types.get(key).map(Vec::as_slice)
    }

    pub fn mapper_config(&self) -> MapperConfig {
        self.mapper.clone().unwrap_or_default()
    }

    pub fn logging_config(&self) -> LoggingConfig {
        self.logging.clone().unwrap_or_default()
    }
}

impl SelectorConfig {
    /// 驗證單一型別鍵底下的 selector 宣告
    pub fn validate_type(&self, key: &str) -> Result<()> {
        validate_non_empty_string("types", key)?;

        let Some(declarations) = self.types.get(key) else {
            return Ok(());
        };

        for declaration in declarations {
            validate_non_empty_string(&format!("types.{}.name", key), &declaration.name)?;
            validate_field_names(
                &format!("types.{}.{}.fields", key, declaration.name),
                &declaration.fields,
            )?;

            if declaration.is_unrestricted() {
                tracing::warn!(
                    "Selector '{}' on '{}' lists no fields and will not filter anything",
                    declaration.name,
                    key
                );
            }
        }

        Ok(())
    }
}

impl Validate for SelectorConfig {
    fn validate(&self) -> Result<()> {
        self.types.keys().try_for_each(|key| self.validate_type(key))
    }
}
