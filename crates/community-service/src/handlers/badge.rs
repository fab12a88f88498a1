//! 徽章 API 处理器

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::{
    dto::{CommunityBadgeDto, CreateBadgeRequest},
    error::AppError,
    state::AppState,
};

/// 按类型查询徽章
///
/// GET /badges/type/{badge_type}
pub async fn list_badges_by_type(
    State(state): State<AppState>,
    Path(badge_type): Path<String>,
) -> Result<Json<Vec<CommunityBadgeDto>>, AppError> {
    let badges = state.badge_service.find_badges_by_type(&badge_type).await?;

    Ok(Json(badges))
}

/// 创建徽章
///
/// POST /badges
pub async fn create_badge(
    State(state): State<AppState>,
    payload: Result<Json<CreateBadgeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CommunityBadgeDto>), AppError> {
    let Json(req) = payload?;
    let badge = state.badge_service.create_badge(req).await?;

    Ok((StatusCode::CREATED, Json(badge)))
}
