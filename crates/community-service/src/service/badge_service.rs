//! 徽章服务
//!
//! 按类型查询徽章，以及创建新徽章

use std::sync::Arc;

use tracing::{info, instrument};
use validator::Validate;

use super::observed;
use crate::dto::{CommunityBadgeDto, CreateBadgeRequest};
use crate::error::{AppError, Result};
use crate::models::NewBadge;
use crate::repository::BadgeRepositoryTrait;

#[derive(Clone)]
pub struct BadgeService {
    badge_repo: Arc<dyn BadgeRepositoryTrait>,
}

impl BadgeService {
    pub fn new(badge_repo: Arc<dyn BadgeRepositoryTrait>) -> Self {
        Self { badge_repo }
    }

    /// 查询指定类型的所有徽章
    #[instrument(skip(self))]
    pub async fn find_badges_by_type(&self, badge_type: &str) -> Result<Vec<CommunityBadgeDto>> {
        observed("find_badges_by_type", async {
            let badges = self.badge_repo.list_by_type(badge_type).await?;

            if badges.is_empty() {
                return Err(AppError::BadgeTypeNotFound(badge_type.to_string()));
            }

            Ok(badges.into_iter().map(CommunityBadgeDto::from).collect())
        })
        .await
    }

    /// 创建徽章
    #[instrument(skip(self, req), fields(name = %req.name, community_address = %req.contract_address))]
    pub async fn create_badge(&self, req: CreateBadgeRequest) -> Result<CommunityBadgeDto> {
        observed("create_badge", async {
            req.validate()?;

            let new_badge = NewBadge::from(req);
            let badge = self.badge_repo.create(&new_badge).await?;

            info!(badge_id = %badge.id, badge_type = %badge.badge_type, "Badge created");

            Ok(CommunityBadgeDto::from(badge))
        })
        .await
    }
}
