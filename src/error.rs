use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// 接口错误分类
///
/// MalformedInput 与 InvalidReceipt 对外返回相同的 400 文案,
/// 内部保持为不同变体以便区分测试。
#[derive(Debug, Error)]
pub enum ApiError {
    /// 请求体无法解析为收据结构 (携带解码细节, 仅记日志)
    #[error("The receipt is invalid.")]
    MalformedInput(String),

    /// 结构正确但未通过字段校验
    #[error("The receipt is invalid.")]
    InvalidReceipt,

    /// ID 无对应收据
    #[error("No receipt found for that ID.")]
    NotFound,

    /// 校验通过的收据在计分阶段解析失败 (校验与计分契约不一致)
    #[error("Error calculating points")]
    Internal(#[from] ScoreError),
}

/// 计分阶段的内部错误, 正常情况下不应出现
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("invalid amount: {0}")]
    Amount(String),
    #[error("invalid purchase date: {0}")]
    Date(String),
    #[error("invalid purchase time: {0}")]
    Time(String),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    message: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MalformedInput(_) | ApiError::InvalidReceipt => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::MalformedInput(detail) => {
                tracing::warn!("Receipt payload rejected: {}", detail)
            }
            ApiError::Internal(fault) => tracing::error!("Points calculation failed: {}", fault),
            _ => {}
        }

        let body = ErrorBody {
            message: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
