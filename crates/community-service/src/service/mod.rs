//! 服务层
//!
//! 协调仓储层，组装对外的 DTO。
//!
//! ## 模块结构
//!
//! - `community_service`: 社区、成员、用户维度查询与可见性更新
//! - `badge_service`: 按类型查询徽章、创建徽章

pub mod badge_service;
pub mod community_service;

pub use badge_service::BadgeService;
pub use community_service::CommunityService;

use std::future::Future;
use std::time::Instant;

use community_shared::observability::metrics;

use crate::error::Result;

/// 执行一次服务操作并记录耗时与结果分类
pub(crate) async fn observed<T>(
    operation: &'static str,
    fut: impl Future<Output = Result<T>>,
) -> Result<T> {
    let start = Instant::now();
    let result = fut.await;

    let outcome = match &result {
        Ok(_) => "ok",
        Err(e) if e.is_not_found() => "not_found",
        Err(_) => "error",
    };
    metrics::record_community_query(operation, outcome, start.elapsed().as_secs_f64());

    result
}
