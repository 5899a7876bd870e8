pub mod handlers;

use crate::store::ReceiptStore;
use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower::ServiceBuilder;
use tracing::info;

/// 构建路由
pub fn router(store: Arc<ReceiptStore>) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/receipts/process", post(handlers::process_receipt))
        .route("/receipts/:id/points", get(handlers::get_points))
        .with_state(store)
        .layer(ServiceBuilder::new().layer(middleware::from_fn(log_request)))
}

/// 请求日志中间件
async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    info!("{} {} -> {}", method, path, response.status());
    response
}
