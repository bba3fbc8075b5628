use crate::kernel::services::adapters::{DebounceTimer, HttpTransport, SearchService};
use crate::kernel::services::bus::{kernel_bus, KernelBusReceiver, KernelMessage};
use crate::kernel::services::ports::{AsyncExecutor, SearchTransport, Settings};
use crate::kernel::{Action, Effect, SearchState, Store};
use crate::ui::backend::ResultsSurface;
use crate::ui::core::element::Element;
use crate::views::SearchView;
use std::sync::Arc;
use tokio::sync::mpsc::error::TryRecvError;

const MAX_BUS_DRAIN_PER_TICK: usize = 256;

/// One search box bound to one results surface.
pub struct SearchController<S: ResultsSurface> {
    store: Store,
    view: SearchView,
    surface: S,
    search: SearchService,
    debounce: DebounceTimer,
    rx: KernelBusReceiver,
}

impl<S: ResultsSurface> SearchController<S> {
    /// Binds to `surface`. Returns `None` (after logging) if any configured element is missing.
    pub fn attach(
        surface: S,
        settings: &Settings,
        transport: Arc<dyn SearchTransport>,
        executor: Arc<dyn AsyncExecutor>,
    ) -> Option<Self> {
        let missing: Vec<&str> = settings
            .elements
            .all()
            .into_iter()
            .filter(|id| !surface.has_element(id))
            .collect();
        if !missing.is_empty() {
            tracing::warn!(?missing, "search elements not found, search box disabled");
            return None;
        }

        let (bus, rx) = kernel_bus();
        let search = SearchService::new(
            transport,
            Arc::clone(&executor),
            bus.clone(),
            settings.backend,
        );
        let debounce = DebounceTimer::new(executor, bus);
        let state = SearchState::with_stale_responses(settings.apply_stale_responses);

        tracing::info!(
            endpoint = %settings.endpoint,
            backend = ?settings.backend,
            "search box attached"
        );

        Some(Self {
            store: Store::new(state),
            view: SearchView::new(),
            surface,
            search,
            debounce,
            rx,
        })
    }

    /// `attach` with the HTTP transport built from `settings`.
    pub fn attach_http(
        surface: S,
        settings: &Settings,
        executor: Arc<dyn AsyncExecutor>,
    ) -> Option<Self> {
        let transport = match HttpTransport::from_settings(settings) {
            Ok(transport) => transport,
            Err(e) => {
                tracing::error!(error = %e, "failed to build search transport");
                return None;
            }
        };
        Self::attach(surface, settings, Arc::new(transport), executor)
    }

    pub fn state(&self) -> &SearchState {
        self.store.state()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn input(&mut self, value: &str) -> bool {
        self.dispatch(Action::QueryChanged(value.to_string()))
    }

    pub fn focus(&mut self) -> bool {
        self.dispatch(Action::InputFocused)
    }

    pub fn click_outside(&mut self) -> bool {
        self.dispatch(Action::ClickedOutside)
    }

    pub fn activate_page(&mut self, page: u32) -> bool {
        self.dispatch(Action::PageRequested { page })
    }

    /// Activates a rendered pagination control (any element carrying `data-page`).
    pub fn activate_control(&mut self, control: &Element) -> bool {
        let Some(page) = control
            .get_attr("data-page")
            .and_then(|page| page.parse::<u32>().ok())
        else {
            return false;
        };
        self.activate_page(page)
    }

    /// Applies whatever timers and requests have already reported back.
    pub fn tick(&mut self) -> bool {
        let mut changed = false;
        for _ in 0..MAX_BUS_DRAIN_PER_TICK {
            match self.rx.try_recv() {
                Ok(KernelMessage::Action(action)) => changed |= self.dispatch(action),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        changed
    }

    /// Waits for the next timer or request to report back and applies it.
    pub async fn step(&mut self) -> bool {
        match self.rx.recv().await {
            Some(KernelMessage::Action(action)) => self.dispatch(action),
            None => false,
        }
    }

    fn dispatch(&mut self, action: Action) -> bool {
        let result = self.store.dispatch(action);
        for effect in result.effects {
            self.run_effect(effect);
        }
        if result.state_changed {
            self.view.render(self.store.state(), &mut self.surface);
        }
        result.state_changed
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::ScheduleSearch { token, delay } => self.debounce.schedule(token, delay),
            Effect::CancelScheduledSearch { token } => self.debounce.cancel(token),
            Effect::IssueSearch(request) => self.search.start(request),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/controller.rs"]
mod tests;
