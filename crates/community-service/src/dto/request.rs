//! 请求 DTO 定义
//!
//! 字段名沿用 snake_case，同时兼容前端的 camelCase 写法

use serde::Deserialize;
use validator::Validate;

use crate::models::NewBadge;

/// 可选的用户地址查询参数
///
/// 提供时用于计算 is_joined、user_has 等用户相关字段
#[derive(Debug, Default, Deserialize)]
pub struct UserAddressQuery {
    #[serde(alias = "userAddress")]
    pub user_address: Option<String>,
}

impl UserAddressQuery {
    /// 空字符串视为未提供
    pub fn into_option(self) -> Option<String> {
        self.user_address.filter(|s| !s.trim().is_empty())
    }
}

/// 更新社区可见性请求
#[derive(Debug, Deserialize)]
pub struct UpdateVisibilityRequest {
    #[serde(alias = "isHidden")]
    pub is_hidden: bool,
}

fn default_badge_type() -> String {
    "Custom".to_string()
}

/// 创建徽章请求
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBadgeRequest {
    #[validate(length(min = 1, message = "issuer must not be empty"))]
    pub issuer: String,
    #[serde(alias = "contractAddress")]
    #[validate(length(min = 1, message = "contract address must not be empty"))]
    pub contract_address: String,
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: String,
    pub score: i32,
    #[serde(rename = "type", default = "default_badge_type")]
    #[validate(length(min = 1, message = "type must not be empty"))]
    pub badge_type: String,
}

impl From<CreateBadgeRequest> for NewBadge {
    fn from(req: CreateBadgeRequest) -> Self {
        Self {
            issuer: req.issuer,
            community_address: req.contract_address,
            name: req.name,
            score: req.score,
            badge_type: req.badge_type,
        }
    }
}
