pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::http_loader::HttpImageLoader;
pub use app::{build_resolver, HttpLogoResolver};
pub use config::toml_config::TomlConfig;
pub use core::{
    avatar::FallbackAvatar,
    cache::ResolutionCache,
    controller::LoadAttemptController,
    domain_map::DomainMap,
    resolver::{LogoResolver, MountedAvatar},
    sequencer::SourceSequencer,
};
pub use domain::model::{AttemptPhase, CacheEntry, RenderState, SizeHint, Ticker};
pub use domain::ports::{ConfigProvider, ImageLoader, LogoCache};
pub use utils::error::{LogoError, Result};
