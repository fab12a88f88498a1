//! 徽章仓储
//!
//! 提供社区徽章定义的读取和创建

use async_trait::async_trait;
use sqlx::PgPool;

use super::traits::BadgeRepositoryTrait;
use crate::error::Result;
use crate::models::{Badge, NewBadge};

/// 徽章仓储
pub struct BadgeRepository {
    pool: PgPool,
}

impl BadgeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BadgeRepositoryTrait for BadgeRepository {
    async fn list_by_community(&self, community_address: &str) -> Result<Vec<Badge>> {
        let badges = sqlx::query_as::<_, Badge>(
            r#"
            SELECT id, issuer, community_address, name, score, "type", created_at, removed_at
            FROM badge
            WHERE community_address = $1
            ORDER BY created_at DESC NULLS LAST
            "#,
        )
        .bind(community_address)
        .fetch_all(&self.pool)
        .await?;

        Ok(badges)
    }

    async fn list_by_type(&self, badge_type: &str) -> Result<Vec<Badge>> {
        let badges = sqlx::query_as::<_, Badge>(
            r#"
            SELECT id, issuer, community_address, name, score, "type", created_at, removed_at
            FROM badge
            WHERE "type" = $1
            "#,
        )
        .bind(badge_type)
        .fetch_all(&self.pool)
        .await?;

        Ok(badges)
    }

    async fn create(&self, badge: &NewBadge) -> Result<Badge> {
        let id = uuid::Uuid::now_v7().to_string();
        let created_at = chrono::Utc::now().timestamp_millis();

        let row = sqlx::query_as::<_, Badge>(
            r#"
            INSERT INTO badge (id, issuer, community_address, name, score, "type", created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, issuer, community_address, name, score, "type", created_at, removed_at
            "#,
        )
        .bind(&id)
        .bind(&badge.issuer)
        .bind(&badge.community_address)
        .bind(&badge.name)
        .bind(badge.score)
        .bind(&badge.badge_type)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }
}
