use crate::adapters::http_loader::{DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
use crate::core::sequencer::default_providers;
use crate::domain::model::ProviderTemplate;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{LogoError, Result};
use crate::utils::validation::{
    validate_hex_color, validate_non_empty_string, validate_range, validate_template, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub loader: LoaderConfig,
    /// Empty means the built-in provider list.
    #[serde(default)]
    pub providers: Vec<ProviderTemplate>,
    #[serde(default)]
    pub domains: HashMap<String, String>,
    #[serde(default)]
    pub avatar: AvatarConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoaderConfig {
    pub timeout_seconds: Option<u64>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AvatarConfig {
    pub default_color: Option<String>,
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| LogoError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${LOGO_API_TOKEN})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| LogoError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(timeout) = self.loader.timeout_seconds {
            validate_range("loader.timeout_seconds", timeout, 1, 120)?;
        }

        if let Some(user_agent) = &self.loader.user_agent {
            validate_non_empty_string("loader.user_agent", user_agent)?;
        }

        for (i, provider) in self.providers.iter().enumerate() {
            validate_non_empty_string(&format!("providers[{}].name", i), &provider.name)?;
            validate_template(&format!("providers[{}].template", i), &provider.template)?;
        }

        if !self.providers.is_empty() && self.providers.iter().all(|p| p.known_domain_only) {
            return Err(LogoError::ConfigValidationError {
                field: "providers".to_string(),
                message: "at least one provider must not be known_domain_only".to_string(),
            });
        }

        for (ticker, domain) in &self.domains {
            validate_non_empty_string(&format!("domains.{}", ticker), domain)?;
        }

        if let Some(color) = &self.avatar.default_color {
            validate_hex_color("avatar.default_color", color)?;
        }
        for (ticker, color) in &self.avatar.colors {
            validate_hex_color(&format!("avatar.colors.{}", ticker), color)?;
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn providers(&self) -> Vec<ProviderTemplate> {
        if self.providers.is_empty() {
            default_providers()
        } else {
            self.providers.clone()
        }
    }

    fn domain_overrides(&self) -> &HashMap<String, String> {
        &self.domains
    }

    fn color_overrides(&self) -> &HashMap<String, String> {
        &self.avatar.colors
    }

    fn default_color(&self) -> Option<&str> {
        self.avatar.default_color.as_deref()
    }

    fn request_timeout(&self) -> Duration {
        self.loader
            .timeout_seconds
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT)
    }

    fn user_agent(&self) -> &str {
        self.loader.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config.providers().len(), 4);
        assert_eq!(config.request_timeout(), DEFAULT_TIMEOUT);
        assert_eq!(config.user_agent(), DEFAULT_USER_AGENT);
        assert!(config.default_color().is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r##"
[loader]
timeout_seconds = 3
user_agent = "earnings-dashboard/1.0"

[[providers]]
name = "clearbit"
template = "https://logo.clearbit.com/{domain}"
known_domain_only = true

[[providers]]
name = "eodhd"
template = "https://eodhd.com/img/logos/US/{ticker}.png"

[domains]
SHOP = "shopify.com"

[avatar]
default_color = "#111827"

[avatar.colors]
SHOP = "#95BF47"
"##;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config.request_timeout(), Duration::from_secs(3));
        assert_eq!(config.user_agent(), "earnings-dashboard/1.0");
        let providers = config.providers();
        assert_eq!(providers.len(), 2);
        assert!(providers[0].known_domain_only);
        assert!(!providers[1].known_domain_only);
        assert_eq!(config.domain_overrides().get("SHOP").unwrap(), "shopify.com");
        assert_eq!(config.color_overrides().get("SHOP").unwrap(), "#95BF47");
        assert_eq!(config.default_color(), Some("#111827"));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TICKER_LOGO_TEST_TOKEN", "pk_test_123");

        let toml_content = r#"
[[providers]]
name = "logo-dev"
template = "https://img.logo.dev/ticker/{ticker}?token=${TICKER_LOGO_TEST_TOKEN}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.providers[0].template,
            "https://img.logo.dev/ticker/{ticker}?token=pk_test_123"
        );

        std::env::remove_var("TICKER_LOGO_TEST_TOKEN");
    }

    #[test]
    fn test_config_validation_failures() {
        let bad_timeout = TomlConfig::from_toml_str("[loader]\ntimeout_seconds = 0\n").unwrap();
        assert!(bad_timeout.validate().is_err());

        let bad_color =
            TomlConfig::from_toml_str("[avatar.colors]\nAAPL = \"purple\"\n").unwrap();
        assert!(bad_color.validate().is_err());

        let only_domain_providers = TomlConfig::from_toml_str(
            r#"
[[providers]]
name = "clearbit"
template = "https://logo.clearbit.com/{domain}"
known_domain_only = true
"#,
        )
        .unwrap();
        assert!(only_domain_providers.validate().is_err());

        let bad_template = TomlConfig::from_toml_str(
            r#"
[[providers]]
name = "static"
template = "ftp://logos.example.com/{ticker}.png"
"#,
        )
        .unwrap();
        assert!(bad_template.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[loader\n").unwrap_err();
        assert!(matches!(err, LogoError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[domains]\nRIVN = \"rivian.com\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.domains.get("RIVN").unwrap(), "rivian.com");
    }
}
