//! Single-shot debounce timer: arming a new timer aborts the previous one.

use crate::kernel::services::bus::KernelBusSender;
use crate::kernel::services::ports::{AsyncExecutor, TaskHandle};
use crate::kernel::Action;
use std::sync::Arc;
use std::time::Duration;

pub struct DebounceTimer {
    executor: Arc<dyn AsyncExecutor>,
    bus: KernelBusSender,
    pending: Option<(u64, TaskHandle)>,
}

impl DebounceTimer {
    pub fn new(executor: Arc<dyn AsyncExecutor>, bus: KernelBusSender) -> Self {
        Self {
            executor,
            bus,
            pending: None,
        }
    }

    pub fn pending_token(&self) -> Option<u64> {
        self.pending.as_ref().map(|(token, _)| *token)
    }

    pub fn schedule(&mut self, token: u64, delay: Duration) {
        if let Some((prev, handle)) = self.pending.take() {
            tracing::trace!(token = prev, "debounce superseded");
            handle.abort();
        }

        let bus = self.bus.clone();
        let handle = self.executor.spawn(Box::pin(async move {
            tokio::time::sleep(delay).await;
            let _ = bus.send_action(Action::DebounceElapsed { token });
        }));
        self.pending = Some((token, handle));
    }

    pub fn cancel(&mut self, token: u64) {
        match self.pending.take() {
            Some((pending, handle)) if pending == token => handle.abort(),
            other => self.pending = other,
        }
    }
}

impl Drop for DebounceTimer {
    fn drop(&mut self) {
        if let Some((_, handle)) = self.pending.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/debounce.rs"]
mod tests;
