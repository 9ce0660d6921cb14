use std::sync::mpsc;

/// Everything the coordinator asks the UI layer to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutput {
    Error(String),
    SuggestionPanelVisibility(bool),
    SuggestionsUpdated(Vec<String>),
    SearchFieldTextSet(String),
    Navigate(String),
}

/// Receives coordinator outputs on the coordinator's own thread.
pub trait OutputSink {
    fn emit(&mut self, output: SearchOutput);
}

impl OutputSink for Vec<SearchOutput> {
    fn emit(&mut self, output: SearchOutput) {
        self.push(output);
    }
}

impl OutputSink for mpsc::Sender<SearchOutput> {
    fn emit(&mut self, output: SearchOutput) {
        // A closed receiver means the UI is gone; nothing left to notify.
        let _ = self.send(output);
    }
}

type Callback<T> = Box<dyn FnMut(T)>;

/// One optional callback per output channel. Unset channels are dropped.
#[derive(Default)]
pub struct OutputCallbacks {
    on_error: Option<Callback<String>>,
    on_suggestion_panel_visibility: Option<Callback<bool>>,
    on_suggestions_updated: Option<Callback<Vec<String>>>,
    on_search_field_text_set: Option<Callback<String>>,
    on_navigate: Option<Callback<String>>,
}

impl OutputCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_error(mut self, callback: impl FnMut(String) + 'static) -> Self {
        self.on_error = Some(Box::new(callback));
        self
    }

    pub fn on_suggestion_panel_visibility(mut self, callback: impl FnMut(bool) + 'static) -> Self {
        self.on_suggestion_panel_visibility = Some(Box::new(callback));
        self
    }

    pub fn on_suggestions_updated(
        mut self,
        callback: impl FnMut(Vec<String>) + 'static,
    ) -> Self {
        self.on_suggestions_updated = Some(Box::new(callback));
        self
    }

    pub fn on_search_field_text_set(mut self, callback: impl FnMut(String) + 'static) -> Self {
        self.on_search_field_text_set = Some(Box::new(callback));
        self
    }

    pub fn on_navigate(mut self, callback: impl FnMut(String) + 'static) -> Self {
        self.on_navigate = Some(Box::new(callback));
        self
    }
}

impl OutputSink for OutputCallbacks {
    fn emit(&mut self, output: SearchOutput) {
        match output {
            SearchOutput::Error(message) => call(&mut self.on_error, message),
            SearchOutput::SuggestionPanelVisibility(visible) => {
                call(&mut self.on_suggestion_panel_visibility, visible)
            }
            SearchOutput::SuggestionsUpdated(suggestions) => {
                call(&mut self.on_suggestions_updated, suggestions)
            }
            SearchOutput::SearchFieldTextSet(text) => {
                call(&mut self.on_search_field_text_set, text)
            }
            SearchOutput::Navigate(url) => call(&mut self.on_navigate, url),
        }
    }
}

fn call<T>(callback: &mut Option<Callback<T>>, value: T) {
    if let Some(callback) = callback.as_mut() {
        callback(value);
    }
}
