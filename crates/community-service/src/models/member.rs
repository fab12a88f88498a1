//! 社区成员实体定义

use serde::{Deserialize, Serialize};

/// 社区成员
///
/// 用户地址与社区的关联关系，带角色标记和积分
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct CommunityMember {
    pub id: String,
    pub user_address: String,
    pub community_address: String,
    pub is_manager: bool,
    pub is_creator: bool,
    pub points: i32,
    pub last_indexed_at: i64,
}
