use crate::error::ScoreError;
use crate::models::{Item, Receipt};
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

/// 计算收据积分: 七条规则独立计分后求和
///
/// 仅对通过校验的收据有定义; 金额/日期/时间此时仍解析失败视为
/// 内部一致性故障, 以 ScoreError 上抛。
pub fn score(receipt: &Receipt) -> Result<i64, ScoreError> {
    let mut points: i64 = 0;

    points += retailer_points(&receipt.retailer);
    points += total_points(&receipt.total)?;
    points += item_pair_points(&receipt.items);
    points += description_points(&receipt.items)?;
    points += purchase_date_points(&receipt.purchase_date)?;
    points += purchase_time_points(&receipt.purchase_time)?;

    Ok(points)
}

/// 规则1: 商户名中每个字母或数字计 1 分
fn retailer_points(retailer: &str) -> i64 {
    retailer.chars().filter(|c| c.is_ascii_alphanumeric()).count() as i64
}

/// 规则2: 总额为整元 +50 分; 规则3: 总额为 0.25 的倍数 +25 分
///
/// 两条规则叠加计分, 整元金额同时命中两条。
fn total_points(total: &str) -> Result<i64, ScoreError> {
    let value: f64 = total
        .parse()
        .map_err(|_| ScoreError::Amount(total.to_string()))?;

    let mut points = 0;
    if value % 1.0 == 0.0 {
        points += 50;
    }
    if value % 0.25 == 0.0 {
        points += 25;
    }
    Ok(points)
}

/// 规则4: 每两件商品 +5 分
fn item_pair_points(items: &[Item]) -> i64 {
    (items.len() as i64 / 2) * 5
}

/// 规则5: 描述去首尾空白后长度为 3 的非零倍数时,
/// 加 ceil(单价 * 0.2) 分
fn description_points(items: &[Item]) -> Result<i64, ScoreError> {
    let mut points = 0;
    for item in items {
        let desc = item.short_description.trim();
        if !desc.is_empty() && desc.len() % 3 == 0 {
            let price: f64 = item
                .price
                .parse()
                .map_err(|_| ScoreError::Amount(item.price.clone()))?;
            points += (price * 0.2).ceil() as i64;
        }
    }
    Ok(points)
}

/// 规则6: 购买日为奇数 +6 分
fn purchase_date_points(date: &str) -> Result<i64, ScoreError> {
    let purchase_date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| ScoreError::Date(date.to_string()))?;

    Ok(if purchase_date.day() % 2 == 1 { 6 } else { 0 })
}

/// 规则7: 购买时刻严格晚于 14:00 且严格早于 16:00 时 +10 分
fn purchase_time_points(time: &str) -> Result<i64, ScoreError> {
    let purchase_time = NaiveTime::parse_from_str(time, "%H:%M")
        .map_err(|_| ScoreError::Time(time.to_string()))?;

    let minute_of_day = purchase_time.hour() * 60 + purchase_time.minute();
    Ok(if minute_of_day > 14 * 60 && minute_of_day < 16 * 60 {
        10
    } else {
        0
    })
}
