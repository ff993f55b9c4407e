use crate::domain::ports::ConfigProvider;
use crate::utils::error::{MenuError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_SESSION_FILE: &str = "./.menux-session.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub app: AppConfig,
    pub backend: BackendConfig,
    pub session: Option<SessionConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub name: String,
    pub description: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    pub url: String,
    pub anon_key: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    pub file: String,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(MenuError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| MenuError::InvalidConfigValueError {
            field: "toml_parsing".to_string(),
            value: "<config file>".to_string(),
            reason: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` references with environment values, so api
    /// keys can stay out of the config file. Unknown variables are left
    /// intact.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    pub fn validate_config(&self) -> Result<()> {
        crate::utils::validation::validate_url("backend.url", &self.backend.url)?;
        crate::utils::validation::validate_non_empty_string("backend.anon_key", &self.backend.anon_key)?;
        if let Some(session) = &self.session {
            crate::utils::validation::validate_path("session.file", &session.file)?;
        }
        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn backend_url(&self) -> &str {
        &self.backend.url
    }

    fn anon_key(&self) -> &str {
        &self.backend.anon_key
    }

    fn session_file(&self) -> &str {
        self.session
            .as_ref()
            .map(|s| s.file.as_str())
            .unwrap_or(DEFAULT_SESSION_FILE)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
