//! 搜索请求服务
//!
//! 每个请求在 executor 上独立运行，结果以 `Action::SearchFinished` 回到 bus。

use super::validate::validate_response;
use crate::kernel::services::bus::KernelBusSender;
use crate::kernel::services::ports::{AsyncExecutor, Backend, SearchRequest, SearchTransport};
use crate::kernel::Action;
use std::sync::Arc;

pub struct SearchService {
    transport: Arc<dyn SearchTransport>,
    executor: Arc<dyn AsyncExecutor>,
    bus: KernelBusSender,
    backend: Backend,
}

impl SearchService {
    pub fn new(
        transport: Arc<dyn SearchTransport>,
        executor: Arc<dyn AsyncExecutor>,
        bus: KernelBusSender,
        backend: Backend,
    ) -> Self {
        Self {
            transport,
            executor,
            bus,
            backend,
        }
    }

    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Fire-and-forget: in-flight requests are never cancelled.
    pub fn start(&self, request: SearchRequest) {
        let SearchRequest { seq, query, page } = request;
        let response = self.transport.get(&query, page);
        let backend = self.backend;
        let bus = self.bus.clone();

        tracing::debug!(seq, %query, page, "search request issued");

        let _detached = self.executor.spawn(Box::pin(async move {
            let outcome = match response.await {
                Ok(raw) => validate_response(raw, backend, page),
                Err(e) => Err(e),
            };

            match &outcome {
                Ok(result) => tracing::debug!(
                    seq,
                    results = result.results.len(),
                    total_pages = result.total_pages,
                    "search request completed"
                ),
                Err(e) => tracing::warn!(seq, error = %e, "search request failed"),
            }

            if bus
                .send_action(Action::SearchFinished { seq, outcome })
                .is_err()
            {
                tracing::debug!(seq, "search controller gone, response dropped");
            }
        }));
    }
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/search/service.rs"]
mod tests;
