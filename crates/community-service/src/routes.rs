//! 路由配置模块
//!
//! 定义所有 REST API 端点的路由映射

use axum::{
    Router,
    routing::{get, patch, post},
};

use crate::{handlers, state::AppState};

/// 构建社区相关的路由
pub fn community_routes() -> Router<AppState> {
    Router::new()
        .route("/communities", get(handlers::community::list_communities))
        .route(
            "/communities/{contract_address}",
            get(handlers::community::get_community),
        )
        .route(
            "/communities/{contract_address}/visibility",
            patch(handlers::community::update_visibility),
        )
        .route(
            "/communities/{contract_address}/members",
            get(handlers::community::list_members),
        )
        .route(
            "/communities/{contract_address}/badges",
            get(handlers::community::list_community_badges),
        )
}

/// 构建用户维度的路由
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users/{user_address}/communities/created",
            get(handlers::user::list_created_communities),
        )
        .route(
            "/users/{user_address}/communities/hidden",
            get(handlers::user::list_hidden_communities),
        )
        .route(
            "/users/{user_address}/communities/joined",
            get(handlers::user::list_joined_communities),
        )
        .route(
            "/users/{user_address}/badges",
            get(handlers::user::list_user_badges),
        )
}

/// 构建徽章相关的路由
pub fn badge_routes() -> Router<AppState> {
    Router::new()
        .route("/badges", post(handlers::badge::create_badge))
        .route(
            "/badges/type/{badge_type}",
            get(handlers::badge::list_badges_by_type),
        )
}

/// 构建完整的 API 路由
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(community_routes())
        .merge(user_routes())
        .merge(badge_routes())
}
