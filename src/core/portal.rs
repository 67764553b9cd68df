use crate::domain::model::Credentials;
use crate::domain::ports::{ConfigProvider, Portal};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// HTTP client for the SSO login form.
pub struct SsoPortal {
    endpoint: String,
    client: Client,
}

impl SsoPortal {
    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let mut builder = Client::builder();

        // Off unless --verify-tls. Covered by construction only, no test
        // serves a self-signed certificate.
        if !config.verify_tls() {
            tracing::warn!("⚠️ TLS certificate verification is disabled for {}", config.endpoint());
            builder = builder.danger_accept_invalid_certs(true);
        }

        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            endpoint: config.endpoint().to_string(),
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl Portal for SsoPortal {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn submit(&self, credentials: &Credentials) -> Result<String> {
        tracing::debug!("Making login request to: {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .form(&credentials.form_fields())
            .send()
            .await?;

        tracing::debug!("Login response status: {}", response.status());

        let body = response.text().await?;
        tracing::debug!("Login response body ({} bytes): {}", body.len(), body);

        Ok(body)
    }
}
