use crate::core::avatar::FallbackAvatar;
use crate::core::controller::LoadAttemptController;
use crate::core::sequencer::SourceSequencer;
use crate::domain::model::{RenderState, SizeHint, Ticker};
use crate::domain::ports::{ImageLoader, LogoCache};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Drives [`LoadAttemptController`]s against a loader, sharing one cache.
///
/// Every call runs its own attempt chain. Concurrent calls for the same ticker
/// are not merged; they converge through the cache's first-write-wins rule.
pub struct LogoResolver<L: ImageLoader, C: LogoCache> {
    loader: Arc<L>,
    cache: Arc<C>,
    sequencer: Arc<SourceSequencer>,
    avatar: Arc<FallbackAvatar>,
}

impl<L: ImageLoader, C: LogoCache> Clone for LogoResolver<L, C> {
    fn clone(&self) -> Self {
        Self {
            loader: Arc::clone(&self.loader),
            cache: Arc::clone(&self.cache),
            sequencer: Arc::clone(&self.sequencer),
            avatar: Arc::clone(&self.avatar),
        }
    }
}

impl<L: ImageLoader, C: LogoCache> LogoResolver<L, C> {
    pub fn new(loader: L, cache: Arc<C>) -> Self {
        Self {
            loader: Arc::new(loader),
            cache,
            sequencer: Arc::new(SourceSequencer::default()),
            avatar: Arc::new(FallbackAvatar::default()),
        }
    }

    pub fn with_sequencer(mut self, sequencer: SourceSequencer) -> Self {
        self.sequencer = Arc::new(sequencer);
        self
    }

    pub fn with_avatar(mut self, avatar: FallbackAvatar) -> Self {
        self.avatar = Arc::new(avatar);
        self
    }

    pub fn cache(&self) -> &Arc<C> {
        &self.cache
    }

    pub fn sequencer(&self) -> &SourceSequencer {
        &self.sequencer
    }

    pub fn controller(&self, ticker: Option<&str>) -> LoadAttemptController<C> {
        LoadAttemptController::new(
            Ticker::from_optional(ticker),
            &self.sequencer,
            Arc::clone(&self.cache),
        )
    }

    /// Always ends in a renderable state; load failures never reach the caller.
    pub async fn resolve_avatar(&self, ticker: Option<&str>, size: SizeHint) -> RenderState {
        let mut controller = self.controller(ticker);
        let mut request = controller.current_request();

        while let Some(req) = request {
            tracing::debug!("Loading candidate {}: {}", req.index, req.url);
            let outcome = self.loader.load(&req.url).await;
            request = controller.on_load_result(req.index, outcome);
        }

        controller.render(&self.avatar, size)
    }

    /// Like [`resolve_avatar`](Self::resolve_avatar), but stops without touching the
    /// controller again once `cancel` fires. Returns `None` when cancelled.
    pub async fn resolve_avatar_cancellable(
        &self,
        ticker: Option<&str>,
        size: SizeHint,
        cancel: &CancellationToken,
    ) -> Option<RenderState> {
        if cancel.is_cancelled() {
            return None;
        }

        let mut controller = self.controller(ticker);
        let mut request = controller.current_request();

        while let Some(req) = request {
            let outcome = tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    tracing::debug!(
                        "Resolution of {:?} cancelled while loading candidate {}",
                        controller.ticker(),
                        req.index
                    );
                    return None;
                }
                outcome = self.loader.load(&req.url) => outcome,
            };
            request = controller.on_load_result(req.index, outcome);
        }

        Some(controller.render(&self.avatar, size))
    }

    /// Resolves each ticker on its own chain, concurrently. Output order follows input.
    pub async fn resolve_many<S: AsRef<str>>(
        &self,
        tickers: &[S],
        size: SizeHint,
    ) -> Vec<RenderState> {
        futures::future::join_all(
            tickers
                .iter()
                .map(|t| self.resolve_avatar(Some(t.as_ref()), size)),
        )
        .await
    }
}

impl<L, C> LogoResolver<L, C>
where
    L: ImageLoader + 'static,
    C: LogoCache + 'static,
{
    /// Starts resolution on the runtime for one UI instance. Dropping the handle
    /// cancels the chain.
    pub fn mount(&self, ticker: Option<&str>, size: SizeHint) -> MountedAvatar {
        let resolver = self.clone();
        let ticker = ticker.map(str::to_string);
        let cancel = CancellationToken::new();
        let task_cancel = cancel.clone();

        let handle = tokio::spawn(async move {
            resolver
                .resolve_avatar_cancellable(ticker.as_deref(), size, &task_cancel)
                .await
        });

        MountedAvatar { cancel, handle }
    }
}

pub struct MountedAvatar {
    cancel: CancellationToken,
    handle: JoinHandle<Option<RenderState>>,
}

impl MountedAvatar {
    /// Terminal render, or `None` if the instance was cancelled first.
    pub async fn rendered(mut self) -> Option<RenderState> {
        match (&mut self.handle).await {
            Ok(state) => state,
            Err(e) => {
                tracing::warn!("Avatar task ended abnormally: {}", e);
                None
            }
        }
    }

    pub fn unmount(self) {
        self.cancel.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for MountedAvatar {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
