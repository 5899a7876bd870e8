use crate::models::Receipt;
use dashmap::DashMap;
use uuid::Uuid;

/// 收据存储 - 基于 DashMap 的并发安全内存 KV
///
/// 仅按单 key 读写, 不需要跨 key 事务; 进程存活期间数据常驻内存。
#[derive(Debug, Default)]
pub struct ReceiptStore {
    receipts: DashMap<String, Receipt>,
}

impl ReceiptStore {
    pub fn new() -> Self {
        Self {
            receipts: DashMap::new(),
        }
    }

    /// 无条件写入, 同 ID 覆盖
    pub fn save(&self, id: String, receipt: Receipt) {
        self.receipts.insert(id, receipt);
    }

    /// 按 ID 精确查找, 克隆返回
    pub fn get(&self, id: &str) -> Option<Receipt> {
        self.receipts.get(id).map(|entry| entry.value().clone())
    }

    pub fn len(&self) -> usize {
        self.receipts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.receipts.is_empty()
    }
}

/// 生成收据唯一标识 (UUID v4)
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}
