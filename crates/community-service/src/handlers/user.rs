//! 用户维度 API 处理器

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    dto::{JoinedCommunityDto, UserBadgeDto},
    error::AppError,
    models::Community,
    state::AppState,
};

/// GET /users/{user_address}/communities/created
pub async fn list_created_communities(
    State(state): State<AppState>,
    Path(user_address): Path<String>,
) -> Result<Json<Vec<Community>>, AppError> {
    let communities = state
        .community_service
        .find_created_communities(&user_address)
        .await?;

    Ok(Json(communities))
}

/// GET /users/{user_address}/communities/hidden
pub async fn list_hidden_communities(
    State(state): State<AppState>,
    Path(user_address): Path<String>,
) -> Result<Json<Vec<Community>>, AppError> {
    let communities = state
        .community_service
        .find_hidden_communities(&user_address)
        .await?;

    Ok(Json(communities))
}

/// GET /users/{user_address}/communities/joined
pub async fn list_joined_communities(
    State(state): State<AppState>,
    Path(user_address): Path<String>,
) -> Result<Json<Vec<JoinedCommunityDto>>, AppError> {
    let communities = state
        .community_service
        .find_joined_communities(&user_address)
        .await?;

    Ok(Json(communities))
}

/// GET /users/{user_address}/badges
pub async fn list_user_badges(
    State(state): State<AppState>,
    Path(user_address): Path<String>,
) -> Result<Json<Vec<UserBadgeDto>>, AppError> {
    let badges = state
        .community_service
        .find_user_badges(&user_address)
        .await?;

    Ok(Json(badges))
}
