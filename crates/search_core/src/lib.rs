//! Search core: pure coordinator state machine and view-model helpers.
mod effect;
mod msg;
mod navigation;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use navigation::{NavigationError, NavigationUrlBuilder, DEFAULT_SEARCH_ENDPOINT};
pub use state::{CoordinatorState, RequestId, SearchState};
pub use update::update;
pub use view_model::SearchViewModel;
