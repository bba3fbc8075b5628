use crate::kernel::services::ports::SearchRequest;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    ScheduleSearch { token: u64, delay: Duration },
    CancelScheduledSearch { token: u64 },
    IssueSearch(SearchRequest),
}
