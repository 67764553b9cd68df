pub mod env_file;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://sso.unila.ac.id/login";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "sso-login")]
#[command(about = "Log in to the Unila SSO captive portal")]
pub struct CliConfig {
    /// Credentials file [default: ~/.config/.sso_unila.env]
    #[arg(long)]
    pub env_file: Option<PathBuf>,

    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Verify the portal's TLS certificate (off by default)
    #[arg(long)]
    pub verify_tls: bool,

    /// Request timeout in seconds, no timeout when omitted
    #[arg(long)]
    pub timeout: Option<u64>,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Load credentials and show the target without sending anything
    #[arg(long)]
    pub dry_run: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            env_file: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            verify_tls: false,
            timeout: None,
            log_format: LogFormat::Compact,
            verbose: false,
            dry_run: false,
        }
    }
}

impl ConfigProvider for CliConfig {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn env_file(&self) -> Result<PathBuf> {
        match &self.env_file {
            Some(path) => Ok(path.clone()),
            None => env_file::default_env_path(),
        }
    }

    fn verify_tls(&self) -> bool {
        self.verify_tls
    }

    fn timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("endpoint", &self.endpoint)?;

        if let Some(path) = &self.env_file {
            validation::validate_path("env_file", path)?;
        }

        if let Some(seconds) = self.timeout {
            validation::validate_positive_number("timeout", seconds, 1)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::LoginError;

    #[test]
    fn test_default_config_is_valid() {
        let config = CliConfig::default();
        assert!(config.validate().is_ok());
        assert!(!config.verify_tls());
        assert_eq!(config.timeout(), None);
    }

    #[test]
    fn test_explicit_env_file_wins() {
        let config = CliConfig {
            env_file: Some(PathBuf::from("/etc/sso.env")),
            ..CliConfig::default()
        };
        assert_eq!(config.env_file().unwrap(), PathBuf::from("/etc/sso.env"));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = CliConfig {
            timeout: Some(0),
            ..CliConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(LoginError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_bad_endpoint_rejected() {
        let config = CliConfig {
            endpoint: "sso.unila.ac.id/login".to_string(),
            ..CliConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_cli_flags() {
        let config = CliConfig::parse_from([
            "sso-login",
            "--env-file",
            "/tmp/x.env",
            "--timeout",
            "10",
            "--log-format",
            "json",
            "--verify-tls",
        ]);
        assert_eq!(config.env_file, Some(PathBuf::from("/tmp/x.env")));
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout(), Some(Duration::from_secs(10)));
        assert_eq!(config.log_format, LogFormat::Json);
        assert!(config.verify_tls);
    }
}
