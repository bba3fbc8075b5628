//! 应用层：把宿主页面事件接到 kernel store 上

mod controller;

pub use controller::SearchController;
