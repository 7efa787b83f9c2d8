use std::sync::Arc;

use axum::{middleware::from_fn, routing::get, Extension, Router};

use crate::{handlers::users::users_handler, middleware::logging_middleware, AppState};

// -- 配置所有路由
pub fn create_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(health_check))
        .merge(users_handler())
        .layer(from_fn(logging_middleware))
        .layer(Extension(app_state))
}

// -- 健康检查接口
async fn health_check() -> &'static str {
    "Hello, Axum!"
}
