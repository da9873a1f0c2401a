// Application layer: wires configuration into concrete resolvers.

use crate::adapters::http_loader::HttpImageLoader;
use crate::core::avatar::FallbackAvatar;
use crate::core::cache::ResolutionCache;
use crate::core::domain_map::DomainMap;
use crate::core::resolver::LogoResolver;
use crate::core::sequencer::SourceSequencer;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use std::sync::Arc;

pub type HttpLogoResolver = LogoResolver<HttpImageLoader, ResolutionCache>;

pub fn build_sequencer<C: ConfigProvider>(config: &C) -> Result<SourceSequencer> {
    SourceSequencer::new(
        DomainMap::with_overrides(config.domain_overrides()),
        config.providers(),
    )
}

pub fn build_avatar<C: ConfigProvider>(config: &C) -> FallbackAvatar {
    FallbackAvatar::with_overrides(config.color_overrides(), config.default_color())
}

/// HTTP-backed resolver sharing `cache` with any other resolver built from it.
pub fn build_resolver<C: ConfigProvider>(
    config: &C,
    cache: Arc<ResolutionCache>,
) -> Result<HttpLogoResolver> {
    let loader = HttpImageLoader::from_config(config)?;
    Ok(LogoResolver::new(loader, cache)
        .with_sequencer(build_sequencer(config)?)
        .with_avatar(build_avatar(config)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::toml_config::TomlConfig;
    use crate::domain::model::{RenderState, SizeHint, Ticker};

    #[test]
    fn test_build_from_config_applies_overrides() {
        let config = TomlConfig::from_toml_str(
            r##"
[domains]
SHOP = "shopify.com"

[avatar]
default_color = "#111827"
"##,
        )
        .unwrap();

        let sequencer = build_sequencer(&config).unwrap();
        let shop = Ticker::parse("SHOP").unwrap();
        assert_eq!(
            sequencer.build(&shop)[0],
            "https://logo.clearbit.com/shopify.com"
        );

        let avatar = build_avatar(&config);
        assert!(matches!(
            avatar.render(Some(&shop), SizeHint::Md),
            RenderState::Placeholder { ref background_color, glyph: 'S', .. }
                if background_color == "#111827"
        ));
    }

    #[test]
    fn test_resolvers_share_cache() {
        let cache = Arc::new(ResolutionCache::new());
        let config = TomlConfig::default();
        let a = build_resolver(&config, Arc::clone(&cache)).unwrap();
        let b = build_resolver(&config, Arc::clone(&cache)).unwrap();
        assert!(Arc::ptr_eq(a.cache(), b.cache()));
    }
}
