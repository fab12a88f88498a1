//! 社区成员仓储

use async_trait::async_trait;
use sqlx::PgPool;

use super::traits::MemberRepositoryTrait;
use crate::error::Result;
use crate::models::CommunityMember;

/// 社区成员仓储
pub struct MemberRepository {
    pool: PgPool,
}

impl MemberRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberRepositoryTrait for MemberRepository {
    async fn count_by_community(&self, community_address: &str) -> Result<i64> {
        let count: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM community_member WHERE community_address = $1")
                .bind(community_address)
                .fetch_one(&self.pool)
                .await?;

        Ok(count.0)
    }

    async fn list_manager_addresses(&self, community_address: &str) -> Result<Vec<String>> {
        let rows: Vec<(String,)> = sqlx::query_as(
            r#"
            SELECT user_address
            FROM community_member
            WHERE community_address = $1 AND is_manager = TRUE
            "#,
        )
        .bind(community_address)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|(addr,)| addr).collect())
    }

    async fn is_member(&self, community_address: &str, user_address: &str) -> Result<bool> {
        let exists: (bool,) = sqlx::query_as(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM community_member
                WHERE community_address = $1 AND user_address = $2
            )
            "#,
        )
        .bind(community_address)
        .bind(user_address)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists.0)
    }

    async fn list_by_community(&self, community_address: &str) -> Result<Vec<CommunityMember>> {
        let members = sqlx::query_as::<_, CommunityMember>(
            r#"
            SELECT id, user_address, community_address, is_manager, is_creator,
                   points, last_indexed_at
            FROM community_member
            WHERE community_address = $1
            ORDER BY points DESC
            "#,
        )
        .bind(community_address)
        .fetch_all(&self.pool)
        .await?;

        Ok(members)
    }

    async fn list_community_addresses_for_user(&self, user_address: &str) -> Result<Vec<String>> {
        let rows: Vec<(String,)> =
            sqlx::query_as("SELECT community_address FROM community_member WHERE user_address = $1")
                .bind(user_address)
                .fetch_all(&self.pool)
                .await?;

        Ok(rows.into_iter().map(|(addr,)| addr).collect())
    }

    async fn points_for(
        &self,
        user_address: &str,
        community_address: &str,
    ) -> Result<Option<i32>> {
        let row: Option<(i32,)> = sqlx::query_as(
            r#"
            SELECT points
            FROM community_member
            WHERE user_address = $1 AND community_address = $2
            ORDER BY last_indexed_at DESC
            LIMIT 1
            "#,
        )
        .bind(user_address)
        .bind(community_address)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|(points,)| points))
    }
}
