use crate::domain::model::{CacheEntry, ProviderTemplate, Ticker};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;

/// Fetches one candidate image. Yields exactly one outcome per call and never retries.
#[async_trait]
pub trait ImageLoader: Send + Sync {
    async fn load(&self, url: &str) -> Result<()>;
}

/// Session-wide store of resolution outcomes, shared by every resolver instance.
pub trait LogoCache: Send + Sync {
    fn get(&self, ticker: &Ticker) -> Option<CacheEntry>;

    /// First terminal write per ticker wins. Returns whether this call wrote.
    fn put(&self, ticker: &Ticker, entry: CacheEntry) -> bool;
}

pub trait ConfigProvider: Send + Sync {
    fn providers(&self) -> Vec<ProviderTemplate>;
    fn domain_overrides(&self) -> &HashMap<String, String>;
    fn color_overrides(&self) -> &HashMap<String, String>;
    fn default_color(&self) -> Option<&str>;
    fn request_timeout(&self) -> Duration;
    fn user_agent(&self) -> &str;
}
