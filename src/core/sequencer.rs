use crate::core::domain_map::DomainMap;
use crate::domain::model::{ProviderTemplate, Ticker};
use crate::utils::error::{LogoError, Result};
use crate::utils::validation::validate_template;

/// Provider order is preference order: first-party logo APIs, then ticker-keyed services.
pub fn default_providers() -> Vec<ProviderTemplate> {
    vec![
        ProviderTemplate::new("clearbit", "https://logo.clearbit.com/{domain}", true),
        ProviderTemplate::new(
            "google-favicon",
            "https://www.google.com/s2/favicons?domain={domain}&sz=128",
            false,
        ),
        ProviderTemplate::new("eodhd", "https://eodhd.com/img/logos/US/{ticker}.png", false),
        ProviderTemplate::new(
            "fmp",
            "https://financialmodelingprep.com/image-stock/{ticker}.png",
            false,
        ),
    ]
}

/// Builds the ordered candidate URL list for a ticker.
#[derive(Debug, Clone)]
pub struct SourceSequencer {
    domains: DomainMap,
    providers: Vec<ProviderTemplate>,
}

impl SourceSequencer {
    /// Rejects provider lists that could produce an empty candidate list.
    pub fn new(domains: DomainMap, providers: Vec<ProviderTemplate>) -> Result<Self> {
        if providers.is_empty() {
            return Err(LogoError::MissingConfigError {
                field: "providers".to_string(),
            });
        }

        for (i, provider) in providers.iter().enumerate() {
            validate_template(&format!("providers[{}].template", i), &provider.template)?;
        }

        if providers.iter().all(|p| p.known_domain_only) {
            return Err(LogoError::ConfigValidationError {
                field: "providers".to_string(),
                message: "at least one provider must not be known_domain_only".to_string(),
            });
        }

        Ok(Self { domains, providers })
    }

    pub fn build(&self, ticker: &Ticker) -> Vec<String> {
        let domain = self.domains.lookup(ticker);
        self.providers
            .iter()
            .filter(|p| domain.known || !p.known_domain_only)
            .map(|p| p.expand(ticker, &domain))
            .collect()
    }

    pub fn domains(&self) -> &DomainMap {
        &self.domains
    }
}

impl Default for SourceSequencer {
    fn default() -> Self {
        Self {
            domains: DomainMap::new(),
            providers: default_providers(),
        }
    }
}
