pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::ports::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_non_empty_string, validate_path, validate_url, Validate};

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "menux")]
#[command(about = "QR restaurant menu viewer")]
pub struct CliConfig {
    /// Base URL of the hosted backend project
    #[arg(long, default_value = "http://localhost:54321")]
    pub backend_url: String,

    /// The project's public (anon) api key
    #[arg(long, default_value = "")]
    pub anon_key: String,

    /// Where the active session is persisted
    #[arg(long, default_value = "./.menux-session.json")]
    pub session_file: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Show the landing page instead of the menu")]
    pub about: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn backend_url(&self) -> &str {
        &self.backend_url
    }

    fn anon_key(&self) -> &str {
        &self.anon_key
    }

    fn session_file(&self) -> &str {
        &self.session_file
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("backend_url", &self.backend_url)?;
        validate_non_empty_string("anon_key", &self.anon_key)?;
        validate_path("session_file", &self.session_file)
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    fn config() -> CliConfig {
        CliConfig {
            backend_url: "https://demo.supabase.co".to_string(),
            anon_key: "public-anon-key".to_string(),
            session_file: "./.menux-session.json".to_string(),
            verbose: false,
            about: false,
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn test_missing_anon_key_is_rejected() {
        let mut config = config();
        config.anon_key = "".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_backend_url_is_rejected() {
        let mut config = config();
        config.backend_url = "ftp://demo.supabase.co".to_string();
        assert!(config.validate().is_err());
    }
}
