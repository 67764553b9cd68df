use crate::core::classifier::classify;
use crate::domain::model::{Credentials, LoginOutcome};
use crate::domain::ports::Portal;
use crate::utils::error::{LoginError, Result};
use std::path::{Path, PathBuf};

/// Runs one login attempt: load credentials, submit, classify.
pub struct LoginEngine<P: Portal> {
    portal: P,
    env_file: PathBuf,
}

impl<P: Portal> LoginEngine<P> {
    pub fn new(portal: P, env_file: impl Into<PathBuf>) -> Self {
        Self {
            portal,
            env_file: env_file.into(),
        }
    }

    pub fn env_file(&self) -> &Path {
        &self.env_file
    }

    pub fn load_credentials(&self) -> Result<Credentials> {
        tracing::debug!("Loading credentials from {}", self.env_file.display());
        let credentials = Credentials::from_env_file(&self.env_file)?;
        tracing::debug!("Loaded credentials for user {}", credentials.username());
        Ok(credentials)
    }

    /// Loads credentials and reports where they would be sent. Nothing is
    /// submitted.
    pub fn dry_run(&self) -> Result<Credentials> {
        tracing::info!("🔍 DRY RUN MODE - no request will be sent");
        let credentials = self.load_credentials()?;
        tracing::info!(
            "Would log in as {} at {} (credentials from {})",
            credentials.username(),
            self.portal.endpoint(),
            self.env_file().display()
        );
        Ok(credentials)
    }

    /// Returns `Success` or `AlreadyLoggedIn`; every other outcome is an error.
    pub async fn run(&self) -> Result<LoginOutcome> {
        let credentials = self.load_credentials()?;

        let body = self.portal.submit(&credentials).await?;

        match classify(&body) {
            LoginOutcome::Failure(reason) => Err(LoginError::CredentialsRejected { reason }),
            LoginOutcome::Unknown => Err(LoginError::UnknownResponse),
            outcome @ LoginOutcome::AlreadyLoggedIn => {
                tracing::info!("You are already logged in");
                Ok(outcome)
            }
            outcome @ LoginOutcome::Success => {
                tracing::info!("Login success");
                Ok(outcome)
            }
        }
    }
}
