//! 数据库仓储层
//!
//! 提供社区、成员、徽章、用户徽章的数据访问接口，封装 SQL 操作细节。
//!
//! ## 设计原则
//!
//! - 仓储只负责数据读取与持久化，不包含业务逻辑
//! - 使用 SQLx 进行数据库操作
//! - 定义 trait 接口以支持 mock 测试

mod badge_repo;
mod community_repo;
mod member_repo;
mod traits;
mod user_badge_repo;

pub use badge_repo::BadgeRepository;
pub use community_repo::CommunityRepository;
pub use member_repo::MemberRepository;
pub use traits::*;
pub use user_badge_repo::UserBadgeRepository;
