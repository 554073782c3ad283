#[cfg(feature = "cli")]
pub mod cli;

use crate::core::wrap::{DEFAULT_MAX_CHARS_PER_LINE, HTML_LINE_BREAK, LINE_BREAK};
use crate::utils::error::{Result, StringToolsError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

const MAX_WRAP_WIDTH: usize = 10_000;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolsConfig {
    #[serde(default)]
    pub wrap: WrapConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WrapConfig {
    pub max_chars_per_line: usize,
    pub html_safe: bool,
    pub line_break: String,
    pub html_break: String,
}

impl Default for WrapConfig {
    fn default() -> Self {
        Self {
            max_chars_per_line: DEFAULT_MAX_CHARS_PER_LINE,
            html_safe: false,
            line_break: LINE_BREAK.to_string(),
            html_break: HTML_LINE_BREAK.to_string(),
        }
    }
}

impl ToolsConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(StringToolsError::IoError)?;
        tracing::debug!("Loaded config from {}", path.as_ref().display());
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        let config: ToolsConfig = toml::from_str(&processed_content)?;
        config.validate()?;
        Ok(config)
    }

    /// 替換環境變數 (例如 ${WRAP_WIDTH})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        use std::sync::LazyLock;

        static ENV_VAR: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is a valid regex")
        });

        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }
}

impl Validate for ToolsConfig {
    fn validate(&self) -> Result<()> {
        self.wrap.validate()
    }
}

impl Validate for WrapConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_range(
            "wrap.max_chars_per_line",
            self.max_chars_per_line,
            0,
            MAX_WRAP_WIDTH,
        )?;
        validation::validate_non_empty_string("wrap.line_break", &self.line_break)?;
        validation::validate_non_empty_string("wrap.html_break", &self.html_break)?;
        // HTML 模式下 \n 會被再次轉換
        validation::validate_excludes("wrap.html_break", &self.html_break, '\n')?;
        Ok(())
    }
}
