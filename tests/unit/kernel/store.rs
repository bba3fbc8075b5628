use super::*;
use crate::kernel::services::ports::{SearchError, SearchRequest, SearchResultPage};
use crate::kernel::ResultsView;

fn new_store() -> Store {
    Store::new(SearchState::default())
}

fn scheduled_token(result: &DispatchResult) -> u64 {
    result
        .effects
        .iter()
        .find_map(|e| match e {
            Effect::ScheduleSearch { token, .. } => Some(*token),
            _ => None,
        })
        .expect("search scheduled")
}

fn issued(result: &DispatchResult) -> SearchRequest {
    result
        .effects
        .iter()
        .find_map(|e| match e {
            Effect::IssueSearch(req) => Some(req.clone()),
            _ => None,
        })
        .expect("search issued")
}

#[test]
fn test_typing_schedules_debounced_search() {
    let mut store = new_store();
    let result = store.dispatch(Action::QueryChanged(" mar ".to_string()));
    assert!(!result.state_changed);
    assert_eq!(
        result.effects,
        vec![Effect::ScheduleSearch {
            token: 1,
            delay: DEBOUNCE_DELAY
        }]
    );
    assert_eq!(store.state().query, "mar");
}

#[test]
fn test_next_keystroke_cancels_pending_timer() {
    let mut store = new_store();
    let first = scheduled_token(&store.dispatch(Action::QueryChanged("m".to_string())));
    let result = store.dispatch(Action::QueryChanged("ma".to_string()));

    assert_eq!(result.effects[0], Effect::CancelScheduledSearch { token: first });
    let second = scheduled_token(&result);
    assert_ne!(first, second);

    let stale = store.dispatch(Action::DebounceElapsed { token: first });
    assert!(stale.effects.is_empty());

    let fired = store.dispatch(Action::DebounceElapsed { token: second });
    assert!(fired.state_changed);
    let req = issued(&fired);
    assert_eq!(req.query, "ma");
    assert_eq!(req.page, 1);
    assert_eq!(store.state().view, ResultsView::Loading);
}

#[test]
fn test_blank_query_hides_immediately() {
    let mut store = new_store();
    let token = scheduled_token(&store.dispatch(Action::QueryChanged("ma".to_string())));
    store.dispatch(Action::DebounceElapsed { token });

    let result = store.dispatch(Action::QueryChanged("   ".to_string()));
    assert!(result.state_changed);
    assert!(result.effects.is_empty());
    assert_eq!(store.state().view, ResultsView::Hidden);
    assert!(!store.state().visible);
}

#[test]
fn test_blank_query_cancels_pending_timer() {
    let mut store = new_store();
    let token = scheduled_token(&store.dispatch(Action::QueryChanged("ma".to_string())));
    let result = store.dispatch(Action::QueryChanged(String::new()));
    assert_eq!(result.effects, vec![Effect::CancelScheduledSearch { token }]);

    let late = store.dispatch(Action::DebounceElapsed { token });
    assert!(late.effects.is_empty());
    assert!(!late.state_changed);
}

#[test]
fn test_page_request_keeps_query() {
    let mut store = new_store();
    let token = scheduled_token(&store.dispatch(Action::QueryChanged("ana".to_string())));
    store.dispatch(Action::DebounceElapsed { token });

    let req = issued(&store.dispatch(Action::PageRequested { page: 3 }));
    assert_eq!(req.query, "ana");
    assert_eq!(req.page, 3);
}

#[test]
fn test_debounced_search_after_page_click_starts_at_page_one() {
    let mut store = new_store();
    let token = scheduled_token(&store.dispatch(Action::QueryChanged("an".to_string())));
    let first = issued(&store.dispatch(Action::DebounceElapsed { token }));
    store.dispatch(Action::SearchFinished {
        seq: first.seq,
        outcome: Ok(SearchResultPage {
            current_page: 1,
            total_pages: 5,
            has_next: true,
            ..SearchResultPage::single(Vec::new())
        }),
    });

    let token = scheduled_token(&store.dispatch(Action::QueryChanged("ana".to_string())));
    let clicked = issued(&store.dispatch(Action::PageRequested { page: 3 }));
    assert_eq!(clicked.page, 3);

    let fired = issued(&store.dispatch(Action::DebounceElapsed { token }));
    assert_eq!(fired.query, "ana");
    assert_eq!(fired.page, 1);
}

#[test]
fn test_page_request_without_query_is_ignored() {
    let mut store = new_store();
    let result = store.dispatch(Action::PageRequested { page: 2 });
    assert!(result.effects.is_empty());
    assert!(!result.state_changed);
}

#[test]
fn test_stale_finish_is_ignored() {
    let mut store = new_store();
    let token = scheduled_token(&store.dispatch(Action::QueryChanged("ana".to_string())));
    let first = issued(&store.dispatch(Action::DebounceElapsed { token }));
    let second = issued(&store.dispatch(Action::PageRequested { page: 2 }));

    let late = store.dispatch(Action::SearchFinished {
        seq: first.seq,
        outcome: Err(SearchError::Transport("timeout".to_string())),
    });
    assert!(!late.state_changed);
    assert_eq!(store.state().view, ResultsView::Loading);

    let current = store.dispatch(Action::SearchFinished {
        seq: second.seq,
        outcome: Ok(SearchResultPage::single(Vec::new())),
    });
    assert!(current.state_changed);
    assert!(matches!(store.state().view, ResultsView::Empty { .. }));
}

#[test]
fn test_focus_reshows_after_click_outside() {
    let mut store = new_store();
    let token = scheduled_token(&store.dispatch(Action::QueryChanged("ana".to_string())));
    store.dispatch(Action::DebounceElapsed { token });

    assert!(store.dispatch(Action::ClickedOutside).state_changed);
    assert!(!store.state().visible);
    assert_eq!(store.state().view, ResultsView::Loading);

    assert!(store.dispatch(Action::InputFocused).state_changed);
    assert!(store.state().visible);
}
