//! 社区服务错误类型定义
//!
//! 错误到 HTTP 状态码、错误码的映射集中在此处

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// 社区服务错误类型
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // 资源不存在
    #[error("Community with contract address {0} not found")]
    CommunityNotFound(String),
    #[error("No members found for community {0}")]
    MembersNotFound(String),
    #[error("No badges found for community {0}")]
    CommunityBadgesNotFound(String),
    #[error("No badges found for user {0}")]
    UserBadgesNotFound(String),
    #[error("No badges found with type {0}")]
    BadgeTypeNotFound(String),

    // 验证错误
    #[error("Validation failed: {0}")]
    Validation(String),

    // 系统错误
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AppError {
    /// 返回对应的 HTTP 状态码
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::CommunityNotFound(_)
            | Self::MembersNotFound(_)
            | Self::CommunityBadgesNotFound(_)
            | Self::UserBadgesNotFound(_)
            | Self::BadgeTypeNotFound(_) => StatusCode::NOT_FOUND,

            Self::Validation(_) => StatusCode::BAD_REQUEST,

            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 返回错误码（用于 API 响应）
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::CommunityNotFound(_) => "COMMUNITY_NOT_FOUND",
            Self::MembersNotFound(_) => "MEMBERS_NOT_FOUND",
            Self::CommunityBadgesNotFound(_) => "COMMUNITY_BADGES_NOT_FOUND",
            Self::UserBadgesNotFound(_) => "USER_BADGES_NOT_FOUND",
            Self::BadgeTypeNotFound(_) => "BADGE_TYPE_NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
        }
    }

    /// 是否为资源不存在类错误
    pub fn is_not_found(&self) -> bool {
        self.status_code() == StatusCode::NOT_FOUND
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // 系统级错误只返回通用提示，详细信息仅记录日志
        let message = match &self {
            Self::Database(e) => {
                tracing::error!(error = %e, "Database operation failed");
                "Internal server error, please retry later".to_string()
            }
            other => other.to_string(),
        };

        let body = json!({
            "success": false,
            "code": self.error_code(),
            "message": message,
            "data": serde_json::Value::Null
        });

        (status, axum::Json(body)).into_response()
    }
}

/// 从 validator 错误转换
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

/// 请求体解析失败统一按验证错误返回
impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

/// 服务层 Result 类型别名
pub type Result<T> = std::result::Result<T, AppError>;
