//! 响应 DTO 定义
//!
//! 索引器的毫秒时间戳在这里统一转换为 RFC 3339 时间

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Badge, Community, CommunityMember, UserBadge, millis_to_datetime};

/// 社区详情
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunityDto {
    pub community_address: String,
    pub factory_address: String,
    pub name: String,
    pub description: String,
    pub creator_address: String,
    pub is_hidden: bool,
    pub blocktimestamp: DateTime<Utc>,
    pub total_badges: i32,
    pub total_members: i64,
    pub managers: Vec<String>,
    pub is_joined: bool,
}

impl CommunityDto {
    /// 由社区记录和成员聚合信息组装
    pub fn from_parts(
        community: Community,
        total_members: i64,
        managers: Vec<String>,
        is_joined: bool,
    ) -> Self {
        Self {
            community_address: community.community_address,
            factory_address: community.factory_address.unwrap_or_default(),
            name: community.name,
            description: community.description.unwrap_or_default(),
            creator_address: community.creator_address,
            is_hidden: community.is_hidden,
            blocktimestamp: millis_to_datetime(community.blocktimestamp),
            total_badges: community.total_badges,
            total_members,
            managers,
            is_joined,
        }
    }
}

/// 社区成员
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberDto {
    pub user_address: String,
    pub is_manager: bool,
    pub is_creator: bool,
    pub community_address: String,
    pub points: i32,
    pub last_indexed_at: DateTime<Utc>,
}

impl From<CommunityMember> for MemberDto {
    fn from(member: CommunityMember) -> Self {
        Self {
            user_address: member.user_address,
            is_manager: member.is_manager,
            is_creator: member.is_creator,
            community_address: member.community_address,
            points: member.points,
            last_indexed_at: millis_to_datetime(member.last_indexed_at),
        }
    }
}

/// 社区徽章
///
/// user_has 仅在请求携带用户地址时输出
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunityBadgeDto {
    pub issuer: String,
    pub community_address: String,
    pub name: String,
    pub score: i32,
    #[serde(rename = "type")]
    pub badge_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub removed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_has: Option<bool>,
}

impl From<Badge> for CommunityBadgeDto {
    fn from(badge: Badge) -> Self {
        Self {
            issuer: badge.issuer,
            community_address: badge.community_address,
            name: badge.name,
            score: badge.score,
            badge_type: badge.badge_type,
            created_at: badge.created_at.map(millis_to_datetime),
            removed_at: badge.removed_at.map(millis_to_datetime),
            user_has: None,
        }
    }
}

/// 社区徽章列表
///
/// badges_count / users_points 仅在请求携带用户地址时输出
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunityBadgesDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badges_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users_points: Option<i32>,
    pub total_badges: usize,
    pub community_badges: Vec<CommunityBadgeDto>,
}

/// 用户已加入的社区
///
/// 社区原始字段 + 用户在该社区的徽章数量与积分
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinedCommunityDto {
    #[serde(flatten)]
    pub community: Community,
    pub users_badges_count: i64,
    pub users_points: i32,
}

/// 用户持有的徽章
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserBadgeDto {
    pub user_address: String,
    pub issuer: String,
    pub community_address: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    pub badge_id: Option<String>,
    pub community_id: Option<String>,
    pub community_member_id: Option<String>,
}

impl From<UserBadge> for UserBadgeDto {
    fn from(badge: UserBadge) -> Self {
        Self {
            user_address: badge.user_address,
            issuer: badge.issuer,
            community_address: badge.community_address,
            name: badge.name,
            created_at: badge.created_at.map(millis_to_datetime),
            badge_id: badge.badge_id,
            community_id: badge.community_id,
            community_member_id: badge.community_member_id,
        }
    }
}

/// 用户在某社区的徽章数量与积分
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserBadgeStats {
    pub badges_count: i64,
    pub points: i32,
}
