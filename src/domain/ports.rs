use crate::domain::model::Credentials;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    /// Resolved location of the credentials file.
    fn env_file(&self) -> Result<PathBuf>;
    fn verify_tls(&self) -> bool;
    fn timeout(&self) -> Option<Duration>;
}

/// One login submission against the portal; returns the raw response body.
#[async_trait]
pub trait Portal: Send + Sync {
    fn endpoint(&self) -> &str;
    async fn submit(&self, credentials: &Credentials) -> Result<String>;
}
