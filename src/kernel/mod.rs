//! Headless search core (state/action/effect).

pub mod action;
pub mod effect;
pub mod search;
pub mod services;
pub mod store;

pub use action::Action;
pub use effect::Effect;
pub use search::{ResultsView, SearchState, DEBOUNCE_DELAY};
pub use store::{DispatchResult, Store};
