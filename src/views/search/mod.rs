pub mod pagination;
pub mod search_view;

pub use pagination::{page_controls, PageControl, PAGE_WINDOW};
pub use search_view::{action_href, SearchView};
