use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoginError {
    #[error("Could not determine the home directory")]
    HomeDirNotFound,

    #[error("Failed to load environment file {}: {}", .path.display(), .source)]
    EnvFileError {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },

    #[error("Missing credentials in environment file: {}", .keys.join(", "))]
    MissingCredentials { keys: Vec<String> },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("SSO server returned an error, {reason}")]
    CredentialsRejected { reason: String },

    #[error("Unknown response from SSO server")]
    UnknownResponse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Transport,
    Authentication,
}

/// Drives the process exit code in `main`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl LoginError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            LoginError::HomeDirNotFound
            | LoginError::EnvFileError { .. }
            | LoginError::MissingCredentials { .. }
            | LoginError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            LoginError::HttpError(_) => ErrorCategory::Transport,
            LoginError::CredentialsRejected { .. } | LoginError::UnknownResponse => {
                ErrorCategory::Authentication
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            LoginError::HomeDirNotFound => ErrorSeverity::Critical,
            LoginError::HttpError(_) => ErrorSeverity::Medium,
            _ => ErrorSeverity::High,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            LoginError::HomeDirNotFound => {
                "Set HOME or pass the file explicitly with --env-file".to_string()
            }
            LoginError::EnvFileError { path, .. } => format!(
                "Create {} with SSO_USERNAME=... and SSO_PASSWORD=... lines",
                path.display()
            ),
            LoginError::MissingCredentials { keys } => {
                format!("Add {} to the environment file", keys.join(" and "))
            }
            LoginError::InvalidConfigValueError { field, .. } => {
                format!("Check the value passed for {}", field)
            }
            LoginError::HttpError(e) if e.is_timeout() => {
                "The portal did not answer in time, try a larger --timeout".to_string()
            }
            LoginError::HttpError(_) => {
                "Check that you are connected to the campus network".to_string()
            }
            LoginError::CredentialsRejected { .. } => {
                "Verify SSO_USERNAME and SSO_PASSWORD".to_string()
            }
            LoginError::UnknownResponse => {
                "Run with --verbose to see the portal response".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            LoginError::HttpError(_) => format!("Could not reach the SSO portal: {}", self),
            LoginError::CredentialsRejected { .. } => {
                "Login rejected by the SSO portal, probably a credentials mismatch".to_string()
            }
            _ => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LoginError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_follow_severity() {
        assert_eq!(LoginError::HomeDirNotFound.exit_code(), 3);
        assert_eq!(LoginError::UnknownResponse.exit_code(), 1);
        assert_eq!(
            LoginError::MissingCredentials {
                keys: vec!["SSO_PASSWORD".to_string()]
            }
            .exit_code(),
            1
        );
    }

    #[test]
    fn test_categories() {
        assert_eq!(
            LoginError::HomeDirNotFound.category(),
            ErrorCategory::Configuration
        );
        assert_eq!(
            LoginError::CredentialsRejected {
                reason: "credentials mismatch probable".to_string()
            }
            .category(),
            ErrorCategory::Authentication
        );
    }

    #[test]
    fn test_missing_credentials_message_lists_keys() {
        let err = LoginError::MissingCredentials {
            keys: vec!["SSO_USERNAME".to_string(), "SSO_PASSWORD".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Missing credentials in environment file: SSO_USERNAME, SSO_PASSWORD"
        );
    }
}
