//! Async runtime adapter: owns the tokio runtime and spawns timer/request tasks.

mod async_runtime;

pub use async_runtime::{AsyncRuntime, TokioExecutor};
