//! 按社区地址取最新版本
//!
//! 索引器会为同一社区地址写入多个版本，对外只暴露 last_indexed_at 最大的一行

use std::collections::HashMap;

/// 带索引时间的社区级记录
pub trait Indexed {
    fn community_address(&self) -> &str;
    fn last_indexed_at(&self) -> i64;
}

/// 每个社区地址只保留 last_indexed_at 最大的记录
///
/// 时间戳相同时后出现的记录胜出；输出顺序为各地址首次出现的位置
pub fn latest_per_address<T: Indexed>(rows: Vec<T>) -> Vec<T> {
    let mut positions: HashMap<String, usize> = HashMap::with_capacity(rows.len());
    let mut latest: Vec<T> = Vec::with_capacity(rows.len());

    for row in rows {
        match positions.get(row.community_address()) {
            Some(&idx) => {
                if row.last_indexed_at() >= latest[idx].last_indexed_at() {
                    latest[idx] = row;
                }
            }
            None => {
                positions.insert(row.community_address().to_string(), latest.len());
                latest.push(row);
            }
        }
    }

    latest
}
