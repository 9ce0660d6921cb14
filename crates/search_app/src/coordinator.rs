use std::collections::VecDeque;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use search_core::{update, Effect, Msg, RequestId, SearchState, SearchViewModel};
use search_engine::{FetchCompletion, PendingRequestHandle, SuggestionCallback, SuggestionClient};
use search_logging::search_debug;

use crate::output::{OutputSink, SearchOutput};

struct InFlight {
    request_id: RequestId,
    handle: PendingRequestHandle,
}

/// Drives [`search_core::update`] for one search session.
///
/// The coordinator is single-threaded: it must be used from the thread that
/// owns the UI. Fetch completions arrive on the client's threads and are
/// queued in an inbox; they only touch state when [`Self::process_pending`]
/// or [`Self::wait_for_pending`] runs on the owning thread.
pub struct SearchCoordinator<C, O> {
    state: SearchState,
    client: C,
    sink: O,
    in_flight: Option<InFlight>,
    inbox_tx: mpsc::Sender<Msg>,
    inbox_rx: mpsc::Receiver<Msg>,
}

impl<C: SuggestionClient, O: OutputSink> SearchCoordinator<C, O> {
    pub fn new(state: SearchState, client: C, sink: O) -> Self {
        let (inbox_tx, inbox_rx) = mpsc::channel();
        Self {
            state,
            client,
            sink,
            in_flight: None,
            inbox_tx,
            inbox_rx,
        }
    }

    pub fn on_text_changed(&mut self, text: impl Into<String>) {
        self.dispatch(Msg::TextChanged(text.into()));
    }

    pub fn on_submit(&mut self, text: impl Into<String>) {
        self.dispatch(Msg::SubmitQuery(text.into()));
    }

    pub fn on_suggestion_row_selected(&mut self, text: impl Into<String>) {
        self.dispatch(Msg::SuggestionRowSelected(text.into()));
    }

    /// Applies every completion that has arrived so far. Never blocks.
    pub fn process_pending(&mut self) -> usize {
        let mut inbox = Vec::new();
        while let Ok(msg) = self.inbox_rx.try_recv() {
            inbox.push(msg);
        }
        let processed = inbox.len();
        for msg in inbox {
            self.receive(msg);
        }
        processed
    }

    /// Blocks up to `timeout` for one completion, then drains the rest.
    pub fn wait_for_pending(&mut self, timeout: Duration) -> usize {
        match self.inbox_rx.recv_timeout(timeout) {
            Ok(msg) => {
                self.receive(msg);
                1 + self.process_pending()
            }
            Err(_) => 0,
        }
    }

    /// Keeps applying completions until the current fetch has settled or
    /// `timeout` runs out. Superseded completions do not end the wait.
    pub fn wait_until_settled(&mut self, timeout: Duration) -> usize {
        let deadline = Instant::now() + timeout;
        let mut processed = 0;
        while self.has_in_flight() {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                break;
            }
            match self.wait_for_pending(remaining) {
                0 => break,
                count => processed += count,
            }
        }
        processed
    }

    pub fn view(&self) -> SearchViewModel {
        self.state.view()
    }

    pub fn has_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn sink(&self) -> &O {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut O {
        &mut self.sink
    }

    fn receive(&mut self, msg: Msg) {
        let settled = match &msg {
            Msg::SuggestionsReady { request_id, .. } | Msg::SuggestionsFailed { request_id, .. } => {
                Some(*request_id)
            }
            _ => None,
        };
        if let Some(request_id) = settled {
            if self
                .in_flight
                .as_ref()
                .is_some_and(|in_flight| in_flight.request_id == request_id)
            {
                search_debug!("Suggestion fetch settled request_id={}", request_id);
                self.in_flight = None;
            }
        }
        self.dispatch(msg);
    }

    fn dispatch(&mut self, msg: Msg) {
        let mut queue = VecDeque::from([msg]);
        while let Some(msg) = queue.pop_front() {
            let state = std::mem::take(&mut self.state);
            let (state, effects) = update(state, msg);
            self.state = state;
            for effect in effects {
                if let Some(follow_up) = self.run_effect(effect) {
                    queue.push_back(follow_up);
                }
            }
        }
    }

    fn run_effect(&mut self, effect: Effect) -> Option<Msg> {
        match effect {
            Effect::FetchSuggestions { request_id, text } => {
                return self.start_fetch(request_id, &text);
            }
            Effect::CancelFetch { request_id } => {
                if self
                    .in_flight
                    .as_ref()
                    .is_some_and(|in_flight| in_flight.request_id == request_id)
                {
                    self.cancel_in_flight();
                }
            }
            Effect::ShowError { message } => self.sink.emit(SearchOutput::Error(message)),
            Effect::SetSuggestionPanelVisible(visible) => {
                self.sink.emit(SearchOutput::SuggestionPanelVisibility(visible))
            }
            Effect::PublishSuggestions(suggestions) => {
                self.sink.emit(SearchOutput::SuggestionsUpdated(suggestions))
            }
            Effect::SetSearchFieldText(text) => {
                self.sink.emit(SearchOutput::SearchFieldTextSet(text))
            }
            Effect::LoadUrl(url) => self.sink.emit(SearchOutput::Navigate(url)),
        }
        None
    }

    fn start_fetch(&mut self, request_id: RequestId, text: &str) -> Option<Msg> {
        // Cancel-then-replace keeps a single fetch in flight.
        self.cancel_in_flight();

        let inbox = self.inbox_tx.clone();
        let on_complete: SuggestionCallback = Box::new(move |completion: FetchCompletion| {
            let msg = match completion {
                FetchCompletion::Ready(result) => Msg::SuggestionsReady {
                    request_id,
                    query: result.query,
                    suggestions: result.suggestions,
                },
                FetchCompletion::Failed(err) => Msg::SuggestionsFailed {
                    request_id,
                    message: err.to_string(),
                },
                FetchCompletion::Cancelled => return,
            };
            // The receiver is gone once the coordinator is dropped.
            let _ = inbox.send(msg);
        });

        match self.client.fetch_suggestions(text, on_complete) {
            Ok(handle) => {
                self.in_flight = Some(InFlight { request_id, handle });
                None
            }
            Err(err) => Some(Msg::SuggestionsFailed {
                request_id,
                message: err.to_string(),
            }),
        }
    }

    fn cancel_in_flight(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            search_debug!(
                "Cancelling suggestion fetch request_id={} handle={}",
                in_flight.request_id,
                in_flight.handle.id()
            );
            self.client.cancel(&in_flight.handle);
        }
    }
}

impl<C, O> Drop for SearchCoordinator<C, O> {
    fn drop(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            search_debug!(
                "Dropping coordinator with fetch in flight request_id={}",
                in_flight.request_id
            );
            in_flight.handle.cancel();
        }
    }
}
