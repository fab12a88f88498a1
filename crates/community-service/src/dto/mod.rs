//! 数据传输对象模块
//!
//! 包含所有请求和响应的数据传输对象

pub mod request;
pub mod response;

pub use request::{CreateBadgeRequest, UpdateVisibilityRequest, UserAddressQuery};
pub use response::{
    CommunityBadgeDto, CommunityBadgesDto, CommunityDto, JoinedCommunityDto, MemberDto,
    UserBadgeDto, UserBadgeStats,
};
