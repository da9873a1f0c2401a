use crate::utils::error::{LogoError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(LogoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(LogoError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(LogoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(LogoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(LogoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Accepts `#RRGGBB` only.
pub fn validate_hex_color(field_name: &str, value: &str) -> Result<()> {
    let valid = value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit());

    if !valid {
        return Err(LogoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Expected a color in #RRGGBB form".to_string(),
        });
    }
    Ok(())
}

/// A provider template must carry at least one placeholder and expand to an http(s) URL.
pub fn validate_template(field_name: &str, template: &str) -> Result<()> {
    let placeholders = ["{domain}", "{ticker}", "{ticker_lower}"];
    if !placeholders.iter().any(|p| template.contains(p)) {
        return Err(LogoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: template.to_string(),
            reason: format!(
                "Template must contain one of: {}",
                placeholders.join(", ")
            ),
        });
    }

    let sample = template
        .replace("{domain}", "example.com")
        .replace("{ticker_lower}", "abc")
        .replace("{ticker}", "ABC");
    validate_url(field_name, &sample)
}
