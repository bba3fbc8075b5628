//! Service ports: traits + data contracts.

pub mod runtime;
pub mod search;
pub mod settings;

pub use runtime::{AsyncExecutor, BoxFuture, BoxResponseFuture, TaskHandle};
pub use search::{
    Backend, RawResponse, RecordKind, ResultRecord, SearchError, SearchRequest, SearchResultPage,
    SearchTransport,
};
pub use settings::{ElementIds, Settings};
