//! 实体模型模块
//!
//! 与数据库表一一对应的行结构，以及索引器时间戳的转换工具

mod badge;
mod community;
mod latest;
mod member;

pub use badge::{Badge, NewBadge, UserBadge};
pub use community::Community;
pub use latest::{Indexed, latest_per_address};
pub use member::CommunityMember;

use chrono::{DateTime, Utc};

/// 将索引器写入的毫秒时间戳转换为 UTC 时间
///
/// 超出 chrono 可表示范围的值回退到 UNIX 纪元
pub fn millis_to_datetime(millis: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(millis).unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}
