use super::search::DEBOUNCE_DELAY;
use super::{Action, Effect, SearchState};

#[derive(Debug, Default)]
pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

pub struct Store {
    state: SearchState,
}

impl Store {
    pub fn new(state: SearchState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::QueryChanged(raw) => self.reduce_query_changed(&raw),
            Action::InputFocused => DispatchResult {
                effects: Vec::new(),
                state_changed: self.state.show_on_focus(),
            },
            Action::ClickedOutside => DispatchResult {
                effects: Vec::new(),
                state_changed: self.state.hide_on_click_outside(),
            },
            Action::DebounceElapsed { token } => {
                if !self.state.fire_debounce(token) {
                    return DispatchResult::default();
                }
                // A query change always restarts at page 1, whatever page was shown since.
                self.issue(1)
            }
            Action::PageRequested { page } => self.issue(page),
            Action::SearchFinished { seq, outcome } => {
                let state_changed = self.state.apply_outcome(seq, outcome);
                if !state_changed {
                    tracing::debug!(seq, latest = ?self.state.latest_request, "stale search response dropped");
                }
                DispatchResult {
                    effects: Vec::new(),
                    state_changed,
                }
            }
        }
    }

    fn reduce_query_changed(&mut self, raw: &str) -> DispatchResult {
        self.state.set_query(raw);

        let mut effects = Vec::new();
        if let Some(token) = self.state.take_pending_debounce() {
            effects.push(Effect::CancelScheduledSearch { token });
        }

        if self.state.query.is_empty() {
            return DispatchResult {
                effects,
                state_changed: self.state.hide(),
            };
        }

        let token = self.state.arm_debounce();
        effects.push(Effect::ScheduleSearch {
            token,
            delay: DEBOUNCE_DELAY,
        });
        DispatchResult {
            effects,
            state_changed: false,
        }
    }

    fn issue(&mut self, page: u32) -> DispatchResult {
        match self.state.begin_request(page) {
            Some(request) => DispatchResult {
                effects: vec![Effect::IssueSearch(request)],
                state_changed: true,
            },
            None => DispatchResult::default(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
