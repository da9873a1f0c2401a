use crate::domain::model::{Domain, Ticker};
use std::collections::HashMap;

const KNOWN_DOMAINS: &[(&str, &str)] = &[
    ("AAPL", "apple.com"),
    ("MSFT", "microsoft.com"),
    ("GOOGL", "abc.xyz"),
    ("GOOG", "abc.xyz"),
    ("AMZN", "amazon.com"),
    ("META", "meta.com"),
    ("TSLA", "tesla.com"),
    ("NVDA", "nvidia.com"),
    ("NFLX", "netflix.com"),
    ("AMD", "amd.com"),
    ("INTC", "intel.com"),
    ("ADBE", "adobe.com"),
    ("CSCO", "cisco.com"),
];

/// Ticker to company domain. Total: unmapped tickers get `<ticker>.com`.
#[derive(Debug, Clone)]
pub struct DomainMap {
    domains: HashMap<String, String>,
}

impl DomainMap {
    pub fn new() -> Self {
        let domains = KNOWN_DOMAINS
            .iter()
            .map(|(ticker, domain)| (ticker.to_string(), domain.to_string()))
            .collect();
        Self { domains }
    }

    /// Built-in table plus `overrides`, which win on conflict. Override keys are
    /// normalized like tickers; blank keys are skipped.
    pub fn with_overrides(overrides: &HashMap<String, String>) -> Self {
        let mut map = Self::new();
        for (raw, domain) in overrides {
            match Ticker::parse(raw) {
                Some(ticker) => {
                    map.domains
                        .insert(ticker.as_str().to_string(), domain.trim().to_lowercase());
                }
                None => tracing::warn!("Ignoring domain override with blank ticker '{}'", raw),
            }
        }
        map
    }

    pub fn lookup(&self, ticker: &Ticker) -> Domain {
        match self.domains.get(ticker.as_str()) {
            Some(name) => Domain {
                name: name.clone(),
                known: true,
            },
            None => Domain {
                name: format!("{}.com", ticker.as_str().to_lowercase()),
                known: false,
            },
        }
    }
}

impl Default for DomainMap {
    fn default() -> Self {
        Self::new()
    }
}
