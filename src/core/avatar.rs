use crate::domain::model::{RenderState, SizeHint, Ticker};
use std::collections::HashMap;

pub const DEFAULT_COLOR: &str = "#10B981";
pub const NEUTRAL_GLYPH: char = '?';

const TICKER_COLORS: &[(&str, &str)] = &[
    ("AAPL", "#A855F7"),
    ("MSFT", "#3B82F6"),
    ("GOOGL", "#EF4444"),
    ("GOOG", "#EF4444"),
    ("AMZN", "#F97316"),
    ("META", "#2563EB"),
    ("TSLA", "#DC2626"),
    ("NVDA", "#16A34A"),
];

/// Deterministic placeholder for tickers with no usable logo.
#[derive(Debug, Clone)]
pub struct FallbackAvatar {
    colors: HashMap<String, String>,
    default_color: String,
}

impl FallbackAvatar {
    pub fn new() -> Self {
        Self {
            colors: TICKER_COLORS
                .iter()
                .map(|(t, c)| (t.to_string(), c.to_string()))
                .collect(),
            default_color: DEFAULT_COLOR.to_string(),
        }
    }

    pub fn with_overrides(overrides: &HashMap<String, String>, default_color: Option<&str>) -> Self {
        let mut avatar = Self::new();
        for (raw, color) in overrides {
            if let Some(ticker) = Ticker::parse(raw) {
                avatar.colors.insert(ticker.as_str().to_string(), color.clone());
            }
        }
        if let Some(color) = default_color {
            avatar.default_color = color.to_string();
        }
        avatar
    }

    pub fn render(&self, ticker: Option<&Ticker>, size: SizeHint) -> RenderState {
        let (background_color, glyph) = match ticker {
            Some(t) => (
                self.colors
                    .get(t.as_str())
                    .unwrap_or(&self.default_color)
                    .clone(),
                t.first_glyph().to_ascii_uppercase(),
            ),
            None => (self.default_color.clone(), NEUTRAL_GLYPH),
        };

        RenderState::Placeholder {
            background_color,
            glyph,
            size_px: size.pixels(),
        }
    }
}

impl Default for FallbackAvatar {
    fn default() -> Self {
        Self::new()
    }
}
