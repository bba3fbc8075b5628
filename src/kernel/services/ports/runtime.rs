use std::future::Future;
use std::pin::Pin;

use super::search::{RawResponse, Result as SearchResult};

pub type BoxFuture = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

pub type BoxResponseFuture = Pin<Box<dyn Future<Output = SearchResult<RawResponse>> + Send + 'static>>;

pub trait AsyncExecutor: Send + Sync {
    fn spawn(&self, task: BoxFuture) -> TaskHandle;
}

/// Abort handle for a spawned task. Dropping it does not abort the task.
pub struct TaskHandle {
    abort: Box<dyn Fn() + Send + Sync>,
}

impl TaskHandle {
    pub fn new(abort: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            abort: Box::new(abort),
        }
    }

    pub fn abort(&self) {
        (self.abort)();
    }
}

impl std::fmt::Debug for TaskHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskHandle").finish_non_exhaustive()
    }
}
