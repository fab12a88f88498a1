//! 社区 API 处理器
//!
//! 社区列表、详情、可见性、成员与徽章查询

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
};
use tracing::info;

use crate::{
    dto::{CommunityBadgesDto, CommunityDto, MemberDto, UpdateVisibilityRequest, UserAddressQuery},
    error::AppError,
    state::AppState,
};

/// 获取所有可见社区
///
/// GET /communities
pub async fn list_communities(
    State(state): State<AppState>,
    Query(query): Query<UserAddressQuery>,
) -> Result<Json<Vec<CommunityDto>>, AppError> {
    let user_address = query.into_option();
    let communities = state
        .community_service
        .find_all(user_address.as_deref())
        .await?;

    Ok(Json(communities))
}

/// 获取社区详情
///
/// GET /communities/{contract_address}
pub async fn get_community(
    State(state): State<AppState>,
    Path(contract_address): Path<String>,
    Query(query): Query<UserAddressQuery>,
) -> Result<Json<CommunityDto>, AppError> {
    let user_address = query.into_option();
    let community = state
        .community_service
        .find_one(&contract_address, user_address.as_deref())
        .await?;

    Ok(Json(community))
}

/// 更新社区可见性
///
/// PATCH /communities/{contract_address}/visibility
pub async fn update_visibility(
    State(state): State<AppState>,
    Path(contract_address): Path<String>,
    payload: Result<Json<UpdateVisibilityRequest>, JsonRejection>,
) -> Result<Json<CommunityDto>, AppError> {
    let Json(req) = payload?;

    let community = state
        .community_service
        .update_visibility(&contract_address, req.is_hidden)
        .await?;

    info!(
        contract_address = %contract_address,
        is_hidden = req.is_hidden,
        "Community visibility changed"
    );

    Ok(Json(community))
}

/// 获取社区成员
///
/// GET /communities/{contract_address}/members
pub async fn list_members(
    State(state): State<AppState>,
    Path(contract_address): Path<String>,
) -> Result<Json<Vec<MemberDto>>, AppError> {
    let members = state
        .community_service
        .find_members(&contract_address)
        .await?;

    Ok(Json(members))
}

/// 获取社区徽章
///
/// GET /communities/{contract_address}/badges
pub async fn list_community_badges(
    State(state): State<AppState>,
    Path(contract_address): Path<String>,
    Query(query): Query<UserAddressQuery>,
) -> Result<Json<CommunityBadgesDto>, AppError> {
    let user_address = query.into_option();
    let badges = state
        .community_service
        .find_badges(&contract_address, user_address.as_deref())
        .await?;

    Ok(Json(badges))
}
