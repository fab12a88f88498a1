//! 用户徽章仓储

use async_trait::async_trait;
use sqlx::PgPool;

use super::traits::UserBadgeRepositoryTrait;
use crate::error::Result;
use crate::models::UserBadge;

const USER_BADGE_COLUMNS: &str = "id, user_address, issuer, community_address, name, created_at, \
     badge_id, community_id, community_member_id";

/// 用户徽章仓储
pub struct UserBadgeRepository {
    pool: PgPool,
}

impl UserBadgeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserBadgeRepositoryTrait for UserBadgeRepository {
    async fn list_by_user(&self, user_address: &str) -> Result<Vec<UserBadge>> {
        let sql = format!("SELECT {USER_BADGE_COLUMNS} FROM user_badge WHERE user_address = $1");
        let badges = sqlx::query_as::<_, UserBadge>(&sql)
            .bind(user_address)
            .fetch_all(&self.pool)
            .await?;

        Ok(badges)
    }

    async fn list_by_user_and_community(
        &self,
        user_address: &str,
        community_address: &str,
    ) -> Result<Vec<UserBadge>> {
        let sql = format!(
            "SELECT {USER_BADGE_COLUMNS} FROM user_badge \
             WHERE user_address = $1 AND community_address = $2"
        );
        let badges = sqlx::query_as::<_, UserBadge>(&sql)
            .bind(user_address)
            .bind(community_address)
            .fetch_all(&self.pool)
            .await?;

        Ok(badges)
    }
}
