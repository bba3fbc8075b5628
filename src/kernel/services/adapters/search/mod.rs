//! 搜索服务模块
//!
//! - validate: HTTP 响应校验 + JSON 解码 (paginated / legacy 两种后端)
//! - SearchService: 异步发起搜索请求，结果回传 kernel bus

mod service;
mod validate;

pub use service::SearchService;
pub use validate::validate_response;
