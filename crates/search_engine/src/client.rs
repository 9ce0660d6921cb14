use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use search_logging::{preview, search_debug};
use tokio::runtime::{Handle, Runtime};
use tokio_util::sync::CancellationToken;

use crate::fetch::{HttpSuggestionSource, SuggestionSource};
use crate::{FetchCompletion, SuggestionError};

/// Invoked exactly once per successful `fetch_suggestions` call.
pub type SuggestionCallback = Box<dyn FnOnce(FetchCompletion) + Send + 'static>;

static NEXT_HANDLE_ID: AtomicU64 = AtomicU64::new(1);

/// Cancellation token for one in-flight suggestion fetch.
///
/// Cancelling is cooperative: a completion racing the cancel still reports
/// [`FetchCompletion::Cancelled`], never a result or an error.
#[derive(Debug, Clone)]
pub struct PendingRequestHandle {
    id: u64,
    token: CancellationToken,
}

impl PendingRequestHandle {
    pub fn new() -> Self {
        Self {
            id: NEXT_HANDLE_ID.fetch_add(1, Ordering::Relaxed),
            token: CancellationToken::new(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    fn token(&self) -> CancellationToken {
        self.token.clone()
    }
}

impl Default for PendingRequestHandle {
    fn default() -> Self {
        Self::new()
    }
}

pub trait SuggestionClient: Send + Sync {
    /// Starts a fetch for `text`. Only URL construction fails synchronously;
    /// every other outcome goes through `on_complete`.
    fn fetch_suggestions(
        &self,
        text: &str,
        on_complete: SuggestionCallback,
    ) -> Result<PendingRequestHandle, SuggestionError>;

    fn cancel(&self, handle: &PendingRequestHandle) {
        handle.cancel();
    }
}

/// Runs each fetch of a [`SuggestionSource`] as a tokio task.
///
/// Callbacks run on the runtime's worker threads; callers that own
/// single-threaded state must forward the completion themselves.
pub struct RuntimeSuggestionClient<S> {
    source: Arc<S>,
    handle: Handle,
    _runtime: Option<Runtime>,
}

pub type HttpSuggestionClient = RuntimeSuggestionClient<HttpSuggestionSource>;

impl<S: SuggestionSource + 'static> RuntimeSuggestionClient<S> {
    /// Creates a client with its own single-worker runtime.
    pub fn new(source: S) -> Result<Self, SuggestionError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("suggestion-fetch")
            .enable_all()
            .build()
            .map_err(|err| SuggestionError::TransportFailure {
                message: format!("failed to start fetch runtime: {err}"),
            })?;
        let handle = runtime.handle().clone();
        Ok(Self {
            source: Arc::new(source),
            handle,
            _runtime: Some(runtime),
        })
    }

    /// Creates a client that spawns onto an existing runtime.
    pub fn with_handle(source: S, handle: Handle) -> Self {
        Self {
            source: Arc::new(source),
            handle,
            _runtime: None,
        }
    }
}

impl<S: SuggestionSource + 'static> SuggestionClient for RuntimeSuggestionClient<S> {
    fn fetch_suggestions(
        &self,
        text: &str,
        on_complete: SuggestionCallback,
    ) -> Result<PendingRequestHandle, SuggestionError> {
        let url = self.source.request_url(text)?;
        let pending = PendingRequestHandle::new();
        let token = pending.token();
        let source = Arc::clone(&self.source);
        search_debug!(
            "Fetching suggestions handle={} text={:?}",
            pending.id(),
            preview(text)
        );

        self.handle.spawn(async move {
            let completion = tokio::select! {
                biased;
                _ = token.cancelled() => FetchCompletion::Cancelled,
                result = source.fetch(url) => match result {
                    Ok(result) => FetchCompletion::Ready(result),
                    Err(err) => FetchCompletion::Failed(err),
                },
            };
            // A cancel that lands after the fetch finished still wins.
            if token.is_cancelled() {
                on_complete(FetchCompletion::Cancelled);
            } else {
                on_complete(completion);
            }
        });

        Ok(pending)
    }
}
