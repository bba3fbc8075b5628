//! livesearch - 增量搜索控制器
//!
//! 模块结构：
//! - kernel: 搜索状态、Action/Effect 与 Store（纯逻辑，无 I/O）
//! - kernel::services: ports（数据契约）与 adapters（tokio、reqwest、设置）
//! - ui: 元素树与结果面板（ResultsSurface）
//! - views: 搜索结果与分页渲染
//! - app: SearchController，把宿主事件接到 Store 上
//! - logging: tracing 初始化

pub mod app;
pub mod kernel;
pub mod logging;
pub mod ui;
pub mod views;

pub use app::SearchController;
pub use kernel::services::ports::{Backend, SearchError, Settings};
pub use ui::backend::html::HtmlSurface;
