//! View layer: renders kernel state into a results surface.

pub mod search;

pub use search::SearchView;
