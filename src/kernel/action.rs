use crate::kernel::services::ports::{SearchError, SearchResultPage};

#[derive(Debug, Clone)]
pub enum Action {
    /// Raw value of the query input after an input event.
    QueryChanged(String),
    InputFocused,
    ClickedOutside,
    DebounceElapsed {
        token: u64,
    },
    PageRequested {
        page: u32,
    },
    SearchFinished {
        seq: u64,
        outcome: Result<SearchResultPage, SearchError>,
    },
}
