use crate::models::Receipt;
use chrono::{NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;

// 字符类显式限定 ASCII: Rust regex 的 \w/\s/\d 默认是 Unicode 语义,
// 这里保持与 Go regexp 一致 (\w = [0-9A-Za-z_], \s = [\t\n\f\r ])

/// 商户名: 字母数字下划线 / 空白 / 连字符 / &
static RETAILER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9A-Za-z_\t\n\f\r \-&]+$").unwrap());

/// 金额: 一位以上数字 + 小数点 + 恰好两位小数 (无符号, 无千分位)
static MONEY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+\.[0-9]{2}$").unwrap());

/// 商品描述: 与商户名一致, 但不允许 &
static DESCRIPTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9A-Za-z_\t\n\f\r \-]+$").unwrap());

/// 日期形状: 固定宽度 YYYY-MM-DD
static DATE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap());

/// 时间形状: 固定宽度 HH:MM
static TIME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{2}:[0-9]{2}$").unwrap());

/// 收据整体校验: 所有规则全部通过才接受, 任一失败即整体拒绝
pub fn validate(receipt: &Receipt) -> bool {
    if !RETAILER_RE.is_match(&receipt.retailer) {
        return false;
    }

    if !MONEY_RE.is_match(&receipt.total) {
        return false;
    }

    // 先锚定固定宽度形状 (chrono 解析接受未补零的位数),
    // 再由 chrono 判断是否为真实日历日期 / 24 小时制时刻
    if !DATE_RE.is_match(&receipt.purchase_date)
        || NaiveDate::parse_from_str(&receipt.purchase_date, "%Y-%m-%d").is_err()
    {
        return false;
    }

    if !TIME_RE.is_match(&receipt.purchase_time)
        || NaiveTime::parse_from_str(&receipt.purchase_time, "%H:%M").is_err()
    {
        return false;
    }

    if receipt.items.is_empty() {
        return false;
    }

    receipt
        .items
        .iter()
        .all(|item| DESCRIPTION_RE.is_match(&item.short_description) && MONEY_RE.is_match(&item.price))
}
