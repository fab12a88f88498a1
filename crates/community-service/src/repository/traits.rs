//! 仓储 Trait 定义
//!
//! 定义仓储接口，便于服务层依赖抽象而非具体实现，支持 mock 测试

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Badge, Community, CommunityMember, NewBadge, UserBadge};

/// 社区仓储接口
///
/// 所有列表查询按 last_indexed_at 降序返回，同一地址的多个版本都会返回
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommunityRepositoryTrait: Send + Sync {
    async fn list_visible(&self) -> Result<Vec<Community>>;
    async fn find_by_address(&self, community_address: &str) -> Result<Vec<Community>>;
    async fn list_by_creator(&self, creator_address: &str) -> Result<Vec<Community>>;
    async fn list_hidden_by_creator(&self, creator_address: &str) -> Result<Vec<Community>>;
    async fn list_by_addresses(&self, community_addresses: &[String]) -> Result<Vec<Community>>;
    /// 更新该地址下所有版本的可见性，返回受影响行数
    async fn set_hidden(&self, community_address: &str, is_hidden: bool) -> Result<u64>;
}

/// 社区成员仓储接口
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MemberRepositoryTrait: Send + Sync {
    async fn count_by_community(&self, community_address: &str) -> Result<i64>;
    async fn list_manager_addresses(&self, community_address: &str) -> Result<Vec<String>>;
    async fn is_member(&self, community_address: &str, user_address: &str) -> Result<bool>;
    /// 按积分降序
    async fn list_by_community(&self, community_address: &str) -> Result<Vec<CommunityMember>>;
    async fn list_community_addresses_for_user(&self, user_address: &str) -> Result<Vec<String>>;
    /// 用户在社区中的积分（存在多条成员记录时取最新索引的一条）
    async fn points_for(&self, user_address: &str, community_address: &str)
    -> Result<Option<i32>>;
}

/// 徽章仓储接口
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BadgeRepositoryTrait: Send + Sync {
    /// 按创建时间降序
    async fn list_by_community(&self, community_address: &str) -> Result<Vec<Badge>>;
    async fn list_by_type(&self, badge_type: &str) -> Result<Vec<Badge>>;
    async fn create(&self, badge: &NewBadge) -> Result<Badge>;
}

/// 用户徽章仓储接口
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserBadgeRepositoryTrait: Send + Sync {
    async fn list_by_user(&self, user_address: &str) -> Result<Vec<UserBadge>>;
    async fn list_by_user_and_community(
        &self,
        user_address: &str,
        community_address: &str,
    ) -> Result<Vec<UserBadge>>;
}
