use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalized stock symbol. Cache and lookup key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Ticker(String);

impl Ticker {
    /// Trims and uppercases `raw`. Returns `None` only for empty or whitespace-only input.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        Some(Self(trimmed.to_uppercase()))
    }

    pub fn from_optional(raw: Option<&str>) -> Option<Self> {
        raw.and_then(Self::parse)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn first_glyph(&self) -> char {
        // parse() guarantees a non-empty string
        self.0.chars().next().unwrap_or('?')
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Internet domain for a company. `known` is false when the domain was synthesized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Domain {
    pub name: String,
    pub known: bool,
}

/// One logo provider URL pattern. Placeholders: `{domain}`, `{ticker}`, `{ticker_lower}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderTemplate {
    pub name: String,
    pub template: String,
    /// Skip this provider when the domain was synthesized rather than looked up.
    #[serde(default)]
    pub known_domain_only: bool,
}

impl ProviderTemplate {
    pub fn new(name: &str, template: &str, known_domain_only: bool) -> Self {
        Self {
            name: name.to_string(),
            template: template.to_string(),
            known_domain_only,
        }
    }

    /// Substituted values are percent-encoded, so any ticker yields a well-formed URL.
    pub fn expand(&self, ticker: &Ticker, domain: &Domain) -> String {
        self.template
            .replace("{domain}", &encode_component(&domain.name))
            .replace(
                "{ticker_lower}",
                &encode_component(&ticker.as_str().to_lowercase()),
            )
            .replace("{ticker}", &encode_component(ticker.as_str()))
    }
}

fn encode_component(value: &str) -> String {
    // form encoding writes spaces as '+'; a literal '+' is already %2B
    url::form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "url", rename_all = "lowercase")]
pub enum CacheEntry {
    /// Never stored; exists so callers can describe an in-flight ticker.
    Pending,
    Resolved(String),
    Failed,
}

impl CacheEntry {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, CacheEntry::Pending)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptPhase {
    Idle,
    Loading(usize),
    Resolved(String),
    Exhausted,
}

impl AttemptPhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, AttemptPhase::Resolved(_) | AttemptPhase::Exhausted)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum SizeHint {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl SizeHint {
    pub fn pixels(self) -> u32 {
        match self {
            SizeHint::Sm => 32,
            SizeHint::Md => 40,
            SizeHint::Lg => 48,
            SizeHint::Xl => 64,
        }
    }
}

impl std::str::FromStr for SizeHint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sm" => Ok(SizeHint::Sm),
            "md" => Ok(SizeHint::Md),
            "lg" => Ok(SizeHint::Lg),
            "xl" => Ok(SizeHint::Xl),
            other => Err(format!("unknown size hint '{}', expected sm, md, lg or xl", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RenderState {
    Image {
        url: String,
        size_px: u32,
    },
    Placeholder {
        background_color: String,
        glyph: char,
        size_px: u32,
    },
}

impl RenderState {
    pub fn is_image(&self) -> bool {
        matches!(self, RenderState::Image { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticker_parse_normalizes() {
        assert_eq!(Ticker::parse(" aapl ").unwrap().as_str(), "AAPL");
        assert_eq!(Ticker::parse("brk.b").unwrap().as_str(), "BRK.B");
        assert_eq!(Ticker::parse("zzzz").unwrap().first_glyph(), 'Z');
    }

    #[test]
    fn test_ticker_parse_rejects_only_blank_input() {
        assert!(Ticker::parse("").is_none());
        assert!(Ticker::parse("   ").is_none());
        assert!(Ticker::from_optional(None).is_none());

        assert_eq!(Ticker::parse("^gspc").unwrap().first_glyph(), '^');
        assert_eq!(Ticker::parse("brk/b").unwrap().as_str(), "BRK/B");
        assert_eq!(Ticker::parse(" bf b ").unwrap().as_str(), "BF B");
    }

    #[test]
    fn test_expand_encodes_substituted_values() {
        let provider = ProviderTemplate::new(
            "eodhd",
            "https://eodhd.com/img/logos/US/{ticker}.png?alt={ticker_lower}",
            false,
        );
        let domain = |name: &str| Domain {
            name: name.to_string(),
            known: false,
        };

        let gspc = Ticker::parse("^GSPC").unwrap();
        assert_eq!(
            provider.expand(&gspc, &domain("^gspc.com")),
            "https://eodhd.com/img/logos/US/%5EGSPC.png?alt=%5Egspc"
        );

        let brk = Ticker::parse("BRK/B").unwrap();
        assert_eq!(
            provider.expand(&brk, &domain("brk/b.com")),
            "https://eodhd.com/img/logos/US/BRK%2FB.png?alt=brk%2Fb"
        );

        let bf = Ticker::parse("BF B").unwrap();
        assert_eq!(
            provider.expand(&bf, &domain("bf b.com")),
            "https://eodhd.com/img/logos/US/BF%20B.png?alt=bf%20b"
        );

        let favicon = ProviderTemplate::new(
            "google-favicon",
            "https://www.google.com/s2/favicons?domain={domain}&sz=128",
            false,
        );
        assert_eq!(
            favicon.expand(&gspc, &domain("^gspc.com")),
            "https://www.google.com/s2/favicons?domain=%5Egspc.com&sz=128"
        );
        let aapl = Ticker::parse("AAPL").unwrap();
        assert_eq!(
            favicon.expand(&aapl, &Domain { name: "apple.com".to_string(), known: true }),
            "https://www.google.com/s2/favicons?domain=apple.com&sz=128"
        );
    }

    #[test]
    fn test_size_hint() {
        assert_eq!(SizeHint::default().pixels(), 40);
        assert_eq!("XL".parse::<SizeHint>().unwrap(), SizeHint::Xl);
        assert!("huge".parse::<SizeHint>().is_err());
    }

    #[test]
    fn test_render_state_json_shape() {
        let image = RenderState::Image {
            url: "https://logo.clearbit.com/apple.com".to_string(),
            size_px: 40,
        };
        let json = serde_json::to_value(&image).unwrap();
        assert_eq!(json["kind"], "image");
        assert_eq!(json["url"], "https://logo.clearbit.com/apple.com");

        let placeholder = RenderState::Placeholder {
            background_color: "#10B981".to_string(),
            glyph: 'Z',
            size_px: 32,
        };
        let json = serde_json::to_value(&placeholder).unwrap();
        assert_eq!(json["kind"], "placeholder");
        assert_eq!(json["glyph"], "Z");
    }
}
