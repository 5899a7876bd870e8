use serde::{Deserialize, Serialize};

/// 收据 (提交后不可变, 金额字段以字符串为准)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub retailer: String,
    pub purchase_date: String,
    pub purchase_time: String,
    pub items: Vec<Item>,
    pub total: String,
}

/// 收据明细行
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub short_description: String,
    pub price: String,
}
