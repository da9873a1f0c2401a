//! Per-instance logo load state machine.
//!
//! `Idle -> Loading(i) -> {Resolved, Exhausted}`. The transition logic lives in
//! [`transition`], a pure function, and the controller only applies its result
//! to its own phase and to the shared cache.

use crate::core::avatar::FallbackAvatar;
use crate::core::sequencer::SourceSequencer;
use crate::domain::model::{AttemptPhase, CacheEntry, RenderState, SizeHint, Ticker};
use crate::domain::ports::LogoCache;
use crate::utils::error::Result;
use std::sync::Arc;

/// Ask the loading primitive to fetch `url`, then report back with `index`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    pub index: usize,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub phase: AttemptPhase,
    pub request: Option<LoadRequest>,
    pub record: Option<CacheEntry>,
}

/// Next state after the load at `index` finished. `None` means the notification
/// is ignored: the phase is terminal or not waiting on `index`.
pub fn transition(
    phase: &AttemptPhase,
    candidates: &[String],
    index: usize,
    loaded: bool,
) -> Option<Transition> {
    match phase {
        AttemptPhase::Loading(current) if *current == index => {}
        _ => return None,
    }

    let url = candidates.get(index)?;

    if loaded {
        return Some(Transition {
            phase: AttemptPhase::Resolved(url.clone()),
            request: None,
            record: Some(CacheEntry::Resolved(url.clone())),
        });
    }

    let next = index + 1;
    match candidates.get(next) {
        Some(next_url) => Some(Transition {
            phase: AttemptPhase::Loading(next),
            request: Some(LoadRequest {
                index: next,
                url: next_url.clone(),
            }),
            record: None,
        }),
        None => Some(Transition {
            phase: AttemptPhase::Exhausted,
            request: None,
            record: Some(CacheEntry::Failed),
        }),
    }
}

pub struct LoadAttemptController<C: LogoCache> {
    ticker: Option<Ticker>,
    candidates: Vec<String>,
    phase: AttemptPhase,
    cache: Arc<C>,
}

impl<C: LogoCache> LoadAttemptController<C> {
    /// Consults the cache immediately; only builds candidates on a miss.
    pub fn new(ticker: Option<Ticker>, sequencer: &SourceSequencer, cache: Arc<C>) -> Self {
        let mut controller = Self {
            ticker,
            candidates: Vec::new(),
            phase: AttemptPhase::Idle,
            cache,
        };
        controller.initialize(sequencer);
        controller
    }

    fn initialize(&mut self, sequencer: &SourceSequencer) {
        let Some(ticker) = &self.ticker else {
            tracing::debug!("No ticker given, rendering placeholder");
            self.phase = AttemptPhase::Exhausted;
            return;
        };

        match self.cache.get(ticker) {
            Some(CacheEntry::Resolved(url)) => {
                tracing::debug!("Cache hit for {}: {}", ticker, url);
                self.phase = AttemptPhase::Resolved(url);
            }
            Some(CacheEntry::Failed) => {
                tracing::debug!("Negative cache hit for {}", ticker);
                self.phase = AttemptPhase::Exhausted;
            }
            Some(CacheEntry::Pending) | None => {
                self.candidates = sequencer.build(ticker);
                tracing::debug!(
                    "Resolving {} across {} candidates",
                    ticker,
                    self.candidates.len()
                );
                self.phase = if self.candidates.is_empty() {
                    AttemptPhase::Exhausted
                } else {
                    AttemptPhase::Loading(0)
                };
            }
        }
    }

    /// The outstanding load, if the controller is waiting on one.
    pub fn current_request(&self) -> Option<LoadRequest> {
        match self.phase {
            AttemptPhase::Loading(index) => self.candidates.get(index).map(|url| LoadRequest {
                index,
                url: url.clone(),
            }),
            _ => None,
        }
    }

    /// Applies one load notification and returns the next load to issue.
    pub fn on_load_result(&mut self, index: usize, outcome: Result<()>) -> Option<LoadRequest> {
        if let Err(e) = &outcome {
            tracing::debug!("Candidate {} failed: {}", index, e);
        }

        let Some(step) = transition(&self.phase, &self.candidates, index, outcome.is_ok()) else {
            tracing::debug!(
                "Ignoring load result for index {} in phase {:?}",
                index,
                self.phase
            );
            return None;
        };

        if let (Some(ticker), Some(entry)) = (&self.ticker, step.record) {
            if matches!(entry, CacheEntry::Failed) {
                tracing::warn!(
                    "All {} logo candidates failed for {}",
                    self.candidates.len(),
                    ticker
                );
            }
            self.cache.put(ticker, entry);
        }

        self.phase = step.phase;
        step.request
    }

    pub fn render(&self, avatar: &FallbackAvatar, size: SizeHint) -> RenderState {
        match &self.phase {
            AttemptPhase::Resolved(url) => RenderState::Image {
                url: url.clone(),
                size_px: size.pixels(),
            },
            _ => avatar.render(self.ticker.as_ref(), size),
        }
    }

    pub fn phase(&self) -> &AttemptPhase {
        &self.phase
    }

    pub fn ticker(&self) -> Option<&Ticker> {
        self.ticker.as_ref()
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }
}
