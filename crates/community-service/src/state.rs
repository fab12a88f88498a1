//! 应用状态定义
//!
//! 包含 Axum 路由共享的应用状态

use sqlx::PgPool;
use std::sync::Arc;

use crate::repository::{
    BadgeRepository, CommunityRepository, MemberRepository, UserBadgeRepository,
};
use crate::service::{BadgeService, CommunityService};

/// Axum 应用共享状态
///
/// 服务实例通过 Arc 在 handler 间共享
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL 连接池
    pub pool: PgPool,
    pub community_service: Arc<CommunityService>,
    pub badge_service: Arc<BadgeService>,
}

impl AppState {
    /// 基于连接池装配 Postgres 仓储和服务
    pub fn new(pool: PgPool) -> Self {
        let community_repo = Arc::new(CommunityRepository::new(pool.clone()));
        let member_repo = Arc::new(MemberRepository::new(pool.clone()));
        let badge_repo = Arc::new(BadgeRepository::new(pool.clone()));
        let user_badge_repo = Arc::new(UserBadgeRepository::new(pool.clone()));

        let community_service = CommunityService::new(
            community_repo,
            member_repo,
            badge_repo.clone(),
            user_badge_repo,
        );
        let badge_service = BadgeService::new(badge_repo);

        Self::with_services(pool, community_service, badge_service)
    }

    /// 使用已构建的服务创建状态
    pub fn with_services(
        pool: PgPool,
        community_service: CommunityService,
        badge_service: BadgeService,
    ) -> Self {
        Self {
            pool,
            community_service: Arc::new(community_service),
            badge_service: Arc::new(badge_service),
        }
    }
}
