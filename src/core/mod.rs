pub mod avatar;
pub mod cache;
pub mod controller;
pub mod domain_map;
pub mod resolver;
pub mod sequencer;

pub use crate::domain::model::{AttemptPhase, CacheEntry, RenderState, SizeHint, Ticker};
pub use crate::domain::ports::{ConfigProvider, ImageLoader, LogoCache};
pub use crate::utils::error::Result;
