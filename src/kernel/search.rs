use crate::kernel::services::ports::{SearchError, SearchRequest, SearchResultPage};
use std::time::Duration;

/// Quiet period between the last keystroke and the request it triggers.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResultsView {
    #[default]
    Hidden,
    Loading,
    Error(SearchError),
    Empty {
        suggestions: Vec<String>,
    },
    Results(SearchResultPage),
}

#[derive(Debug, Clone)]
pub struct SearchState {
    pub query: String,
    pub page: u32,
    pub visible: bool,
    pub view: ResultsView,
    pub pending_debounce: Option<u64>,
    pub latest_request: Option<u64>,
    pub apply_stale_responses: bool,
    next_token: u64,
    next_seq: u64,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: 1,
            visible: false,
            view: ResultsView::Hidden,
            pending_debounce: None,
            latest_request: None,
            apply_stale_responses: false,
            next_token: 0,
            next_seq: 0,
        }
    }
}

impl SearchState {
    pub fn with_stale_responses(apply_stale_responses: bool) -> Self {
        Self {
            apply_stale_responses,
            ..Self::default()
        }
    }

    /// Stores the trimmed query and rewinds to page 1. Returns true if the text changed.
    pub fn set_query(&mut self, raw: &str) -> bool {
        let trimmed = raw.trim();
        let changed = self.query != trimmed;
        if changed {
            self.query.clear();
            self.query.push_str(trimmed);
        }
        self.page = 1;
        if !self.apply_stale_responses {
            self.latest_request = None;
        }
        changed
    }

    pub fn take_pending_debounce(&mut self) -> Option<u64> {
        self.pending_debounce.take()
    }

    pub fn arm_debounce(&mut self) -> u64 {
        self.next_token += 1;
        self.pending_debounce = Some(self.next_token);
        self.next_token
    }

    /// Consumes the pending debounce if `token` is the live one.
    pub fn fire_debounce(&mut self, token: u64) -> bool {
        if self.pending_debounce != Some(token) {
            return false;
        }
        self.pending_debounce = None;
        true
    }

    pub fn hide(&mut self) -> bool {
        let changed = self.visible || self.view != ResultsView::Hidden;
        self.visible = false;
        self.view = ResultsView::Hidden;
        changed
    }

    pub fn begin_request(&mut self, page: u32) -> Option<SearchRequest> {
        if self.query.is_empty() {
            return None;
        }

        self.next_seq += 1;
        self.page = page.max(1);
        self.latest_request = Some(self.next_seq);
        self.view = ResultsView::Loading;
        self.visible = true;

        Some(SearchRequest {
            seq: self.next_seq,
            query: self.query.clone(),
            page: self.page,
        })
    }

    pub fn is_current(&self, seq: u64) -> bool {
        self.apply_stale_responses || self.latest_request == Some(seq)
    }

    pub fn apply_outcome(
        &mut self,
        seq: u64,
        outcome: Result<SearchResultPage, SearchError>,
    ) -> bool {
        if !self.is_current(seq) {
            return false;
        }

        self.visible = true;
        self.view = match outcome {
            Ok(page) if page.is_empty() => ResultsView::Empty {
                suggestions: page.suggestions,
            },
            Ok(page) => {
                self.page = page.current_page.max(1);
                ResultsView::Results(page)
            }
            Err(err) => ResultsView::Error(err),
        };
        true
    }

    pub fn show_on_focus(&mut self) -> bool {
        if self.query.is_empty() || self.visible {
            return false;
        }
        self.visible = true;
        true
    }

    pub fn hide_on_click_outside(&mut self) -> bool {
        if !self.visible {
            return false;
        }
        self.visible = false;
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/search.rs"]
mod tests;
