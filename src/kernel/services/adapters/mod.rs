//! Service adapters: runtime specific implementations (timers, HTTP, settings files).

pub mod debounce;
pub mod http;
pub mod runtime;
pub mod search;
pub mod settings;

pub use debounce::DebounceTimer;
pub use http::HttpTransport;
pub use runtime::{AsyncRuntime, TokioExecutor};
pub use search::{validate_response, SearchService};
pub use settings::{
    ensure_settings_file, get_settings_path, load_settings, SettingsError,
};
