//! HTTP 请求处理器
//!
//! handler 只负责提取参数并调用服务层，返回值直接序列化为 JSON

pub mod badge;
pub mod community;
pub mod user;
