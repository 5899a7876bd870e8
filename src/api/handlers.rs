use crate::error::ApiError;
use crate::models::Receipt;
use crate::service;
use crate::store::{self, ReceiptStore};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, State};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

/// 提交响应体
#[derive(Debug, Serialize)]
pub struct ProcessResponse {
    pub id: String,
}

/// 积分查询响应体
#[derive(Debug, Serialize)]
pub struct PointsResponse {
    pub points: i64,
}

/// 健康检查
pub async fn health_check() -> &'static str {
    "OK"
}

/// 收据提交接口: 解码 -> 校验 -> 生成 ID -> 入库
pub async fn process_receipt(
    State(receipt_store): State<Arc<ReceiptStore>>,
    payload: Result<Json<Receipt>, JsonRejection>,
) -> Result<Json<ProcessResponse>, ApiError> {
    let Json(receipt) = payload.map_err(|rejection| ApiError::MalformedInput(rejection.body_text()))?;

    if !service::validate(&receipt) {
        warn!("Receipt from retailer {:?} rejected by validation", receipt.retailer);
        return Err(ApiError::InvalidReceipt);
    }

    let id = store::generate_id();
    receipt_store.save(id.clone(), receipt);
    info!("Receipt {} stored", id);

    Ok(Json(ProcessResponse { id }))
}

/// 积分查询接口: 查库 -> 计分
pub async fn get_points(
    State(receipt_store): State<Arc<ReceiptStore>>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, ApiError> {
    let receipt = receipt_store.get(&id).ok_or(ApiError::NotFound)?;

    let points = service::score(&receipt)?;
    Ok(Json(PointsResponse { points }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Item;

    fn store() -> Arc<ReceiptStore> {
        Arc::new(ReceiptStore::new())
    }

    fn valid_receipt() -> Receipt {
        Receipt {
            retailer: "Target".to_string(),
            purchase_date: "2022-01-01".to_string(),
            purchase_time: "13:01".to_string(),
            items: vec![Item {
                short_description: "Mountain Dew 12PK".to_string(),
                price: "6.49".to_string(),
            }],
            total: "6.49".to_string(),
        }
    }

    #[tokio::test]
    async fn process_then_get_points_round_trip() {
        let receipt_store = store();

        let Json(resp) = process_receipt(State(Arc::clone(&receipt_store)), Ok(Json(valid_receipt())))
            .await
            .unwrap();
        assert!(!resp.id.is_empty());

        let Json(points) = get_points(State(receipt_store), Path(resp.id)).await.unwrap();
        // Target=6 + 奇数日=6
        assert_eq!(points.points, 12);
    }

    #[tokio::test]
    async fn invalid_receipt_is_rejected_and_not_stored() {
        let receipt_store = store();
        let mut receipt = valid_receipt();
        receipt.total = "6.4".to_string();

        let err = process_receipt(State(Arc::clone(&receipt_store)), Ok(Json(receipt)))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidReceipt));
        assert!(receipt_store.is_empty());
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let err = get_points(State(store()), Path("missing".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }
}
