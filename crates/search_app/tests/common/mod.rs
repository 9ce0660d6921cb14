#![allow(dead_code)]

use std::sync::{Arc, Mutex, Once};
use std::thread;

use search_engine::{
    FetchCompletion, PendingRequestHandle, SuggestionCallback, SuggestionClient, SuggestionError,
    SuggestionResult,
};

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(search_logging::initialize_for_tests);
}

pub fn ready(query: &str, suggestions: &[&str]) -> FetchCompletion {
    FetchCompletion::Ready(SuggestionResult {
        query: query.to_string(),
        suggestions: suggestions.iter().map(ToString::to_string).collect(),
    })
}

type Responder = Arc<dyn Fn(&str) -> FetchCompletion + Send + Sync>;

struct MockRequest {
    text: String,
    handle: PendingRequestHandle,
    callback: Option<SuggestionCallback>,
}

#[derive(Default)]
struct MockInner {
    requests: Vec<MockRequest>,
    reject_urls: bool,
    responder: Option<Responder>,
}

/// Records every fetch and lets the test decide when and how it completes.
///
/// Completions ignore cancellation on purpose, like a transport that
/// delivers a late response anyway.
#[derive(Clone, Default)]
pub struct MockSuggestionClient {
    inner: Arc<Mutex<MockInner>>,
}

impl MockSuggestionClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every fetch fails synchronously with `InvalidQueryUrl`.
    pub fn rejecting_urls() -> Self {
        let client = Self::new();
        client.inner.lock().unwrap().reject_urls = true;
        client
    }

    /// Every fetch completes right away on a separate thread.
    pub fn responding(responder: impl Fn(&str) -> FetchCompletion + Send + Sync + 'static) -> Self {
        let client = Self::new();
        client.inner.lock().unwrap().responder = Some(Arc::new(responder));
        client
    }

    pub fn requested_texts(&self) -> Vec<String> {
        let inner = self.inner.lock().unwrap();
        inner.requests.iter().map(|r| r.text.clone()).collect()
    }

    pub fn request_count(&self) -> usize {
        self.inner.lock().unwrap().requests.len()
    }

    pub fn handle(&self, index: usize) -> PendingRequestHandle {
        self.inner.lock().unwrap().requests[index].handle.clone()
    }

    /// Requests neither cancelled nor completed.
    pub fn live_requests(&self) -> usize {
        let inner = self.inner.lock().unwrap();
        inner
            .requests
            .iter()
            .filter(|r| r.callback.is_some() && !r.handle.is_cancelled())
            .count()
    }

    /// Completes request `index` from a different thread and waits for it.
    pub fn complete(&self, index: usize, completion: FetchCompletion) {
        let callback = self.inner.lock().unwrap().requests[index]
            .callback
            .take()
            .expect("request already completed");
        thread::spawn(move || callback(completion))
            .join()
            .expect("completion thread");
    }
}

impl SuggestionClient for MockSuggestionClient {
    fn fetch_suggestions(
        &self,
        text: &str,
        on_complete: SuggestionCallback,
    ) -> Result<PendingRequestHandle, SuggestionError> {
        let mut inner = self.inner.lock().unwrap();
        if inner.reject_urls {
            return Err(SuggestionError::InvalidQueryUrl {
                url: "mock://suggest".to_string(),
            });
        }

        let handle = PendingRequestHandle::new();
        if let Some(responder) = inner.responder.clone() {
            inner.requests.push(MockRequest {
                text: text.to_string(),
                handle: handle.clone(),
                callback: None,
            });
            let text = text.to_string();
            thread::spawn(move || on_complete(responder(&text)));
        } else {
            inner.requests.push(MockRequest {
                text: text.to_string(),
                handle: handle.clone(),
                callback: Some(on_complete),
            });
        }
        Ok(handle)
    }
}
