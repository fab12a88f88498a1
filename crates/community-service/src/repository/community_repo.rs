//! 社区仓储
//!
//! 提供社区记录的读取和可见性更新

use async_trait::async_trait;
use sqlx::PgPool;

use super::traits::CommunityRepositoryTrait;
use crate::error::Result;
use crate::models::Community;

const COMMUNITY_COLUMNS: &str = "id, community_address, factory_address, name, description, icon, \
     creator_address, is_hidden, blocktimestamp, total_badges, last_indexed_at";

/// 社区仓储
pub struct CommunityRepository {
    pool: PgPool,
}

impl CommunityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommunityRepositoryTrait for CommunityRepository {
    async fn list_visible(&self) -> Result<Vec<Community>> {
        let sql = format!(
            "SELECT {COMMUNITY_COLUMNS} FROM community \
             WHERE is_hidden = FALSE \
             ORDER BY last_indexed_at DESC"
        );
        let rows = sqlx::query_as::<_, Community>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    async fn find_by_address(&self, community_address: &str) -> Result<Vec<Community>> {
        let sql = format!(
            "SELECT {COMMUNITY_COLUMNS} FROM community \
             WHERE community_address = $1 \
             ORDER BY last_indexed_at DESC"
        );
        let rows = sqlx::query_as::<_, Community>(&sql)
            .bind(community_address)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    async fn list_by_creator(&self, creator_address: &str) -> Result<Vec<Community>> {
        let sql = format!(
            "SELECT {COMMUNITY_COLUMNS} FROM community \
             WHERE creator_address = $1 \
             ORDER BY last_indexed_at DESC"
        );
        let rows = sqlx::query_as::<_, Community>(&sql)
            .bind(creator_address)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    async fn list_hidden_by_creator(&self, creator_address: &str) -> Result<Vec<Community>> {
        let sql = format!(
            "SELECT {COMMUNITY_COLUMNS} FROM community \
             WHERE creator_address = $1 AND is_hidden = TRUE \
             ORDER BY last_indexed_at DESC"
        );
        let rows = sqlx::query_as::<_, Community>(&sql)
            .bind(creator_address)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    async fn list_by_addresses(&self, community_addresses: &[String]) -> Result<Vec<Community>> {
        if community_addresses.is_empty() {
            return Ok(vec![]);
        }

        let sql = format!(
            "SELECT {COMMUNITY_COLUMNS} FROM community \
             WHERE community_address = ANY($1) \
             ORDER BY last_indexed_at DESC"
        );
        let rows = sqlx::query_as::<_, Community>(&sql)
            .bind(community_addresses)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    async fn set_hidden(&self, community_address: &str, is_hidden: bool) -> Result<u64> {
        let result = sqlx::query("UPDATE community SET is_hidden = $2 WHERE community_address = $1")
            .bind(community_address)
            .bind(is_hidden)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
