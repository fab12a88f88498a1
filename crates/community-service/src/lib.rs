//! 社区奖励服务
//!
//! 为区块链社区奖励应用提供社区、成员、徽章的 REST API。
//!
//! ## 核心功能
//!
//! - **社区查询**：可见社区列表、社区详情，每个地址只返回最新索引版本
//! - **可见性管理**：创建者隐藏或恢复社区
//! - **成员与徽章**：成员积分排行、社区徽章及用户持有状态
//! - **用户维度**：用户创建、隐藏、加入的社区与持有的徽章
//!
//! ## 模块结构
//!
//! - `models`: 与数据库表对应的实体模型
//! - `repository`: 数据访问层（trait + Postgres 实现）
//! - `service`: 业务服务层
//! - `dto`: 请求和响应的数据传输对象
//! - `error`: 错误类型定义
//! - `handlers`: HTTP 请求处理器
//! - `routes`: 路由配置
//! - `state`: 应用状态
//!
//! ## 技术栈
//!
//! - Web 框架：Axum
//! - 数据库：SQLx (PostgreSQL)
//! - 数据验证：validator

pub mod dto;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod routes;
pub mod service;
pub mod state;

// 重新导出核心类型
pub use dto::{
    CommunityBadgeDto, CommunityBadgesDto, CommunityDto, CreateBadgeRequest, JoinedCommunityDto,
    MemberDto, UpdateVisibilityRequest, UserBadgeDto, UserBadgeStats,
};
pub use error::{AppError, Result};
pub use models::{Badge, Community, CommunityMember, NewBadge, UserBadge, latest_per_address};
pub use service::{BadgeService, CommunityService};
