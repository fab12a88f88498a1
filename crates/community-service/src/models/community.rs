//! 社区实体定义

use serde::{Deserialize, Serialize};

use super::latest::Indexed;

/// 社区
///
/// 索引器每次同步都会写入一行新版本，community_address 相同的多行代表同一社区的不同版本
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Community {
    pub id: String,
    /// 社区合约地址
    pub community_address: String,
    /// 工厂合约地址
    pub factory_address: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    /// 创建者钱包地址
    pub creator_address: String,
    pub is_hidden: bool,
    /// 创建区块时间（毫秒）
    pub blocktimestamp: i64,
    pub total_badges: i32,
    /// 索引时间（毫秒），用于挑选最新版本
    pub last_indexed_at: i64,
}

impl Indexed for Community {
    fn community_address(&self) -> &str {
        &self.community_address
    }

    fn last_indexed_at(&self) -> i64 {
        self.last_indexed_at
    }
}
