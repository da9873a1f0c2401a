use crate::domain::ports::{ConfigProvider, ImageLoader};
use crate::utils::error::{LogoError, Result};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_USER_AGENT: &str = concat!("ticker-logo/", env!("CARGO_PKG_VERSION"));
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Loads a candidate with one GET. Any non-image answer counts as a failure.
#[derive(Debug, Clone)]
pub struct HttpImageLoader {
    client: Client,
}

impl HttpImageLoader {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(config.request_timeout(), config.user_agent())
    }
}

#[async_trait]
impl ImageLoader for HttpImageLoader {
    async fn load(&self, url: &str) -> Result<()> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| LogoError::load_failed(url, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LogoError::load_failed(url, format!("HTTP {}", status)));
        }

        if let Some(content_type) = response.headers().get(CONTENT_TYPE) {
            let content_type = content_type.to_str().unwrap_or_default();
            if !content_type.starts_with("image/") {
                return Err(LogoError::load_failed(
                    url,
                    format!("unexpected content type '{}'", content_type),
                ));
            }
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| LogoError::load_failed(url, e.to_string()))?;
        if body.is_empty() {
            return Err(LogoError::load_failed(url, "empty body"));
        }

        tracing::debug!("Loaded {} ({} bytes)", url, body.len());
        Ok(())
    }
}
