//! 徽章相关实体定义
//!
//! 包含社区徽章定义和用户持有的徽章

use serde::{Deserialize, Serialize};

/// 社区徽章定义
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Badge {
    pub id: String,
    /// 发行者地址
    pub issuer: String,
    pub community_address: String,
    pub name: String,
    pub score: i32,
    /// 徽章类型（如 Custom、Stellar）
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub badge_type: String,
    /// 创建时间（毫秒）
    pub created_at: Option<i64>,
    /// 移除时间（毫秒）
    pub removed_at: Option<i64>,
}

/// 新建徽章
#[derive(Debug, Clone, PartialEq)]
pub struct NewBadge {
    pub issuer: String,
    pub community_address: String,
    pub name: String,
    pub score: i32,
    pub badge_type: String,
}

/// 用户持有的徽章
///
/// 以 (name, issuer) 对应社区徽章定义
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserBadge {
    pub id: String,
    pub user_address: String,
    pub issuer: String,
    pub community_address: String,
    pub name: String,
    pub created_at: Option<i64>,
    pub badge_id: Option<String>,
    pub community_id: Option<String>,
    pub community_member_id: Option<String>,
}

impl UserBadge {
    /// 是否对应给定的社区徽章
    pub fn matches(&self, badge: &Badge) -> bool {
        self.name == badge.name && self.issuer == badge.issuer
    }
}
