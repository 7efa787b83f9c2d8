use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::dtos::{self, FieldErrors};

// -- 应用层错误分类：字段校验失败 / 记录不存在 / 存储等内部故障
// -- 所有处理函数都返回 Result<_, HttpError>，由 IntoResponse 统一转成 HTTP 响应
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    #[error("validation failed")]
    Validation(FieldErrors),
    #[error("resource not found")]
    NotFound,
    #[error("{0}")]
    ServerError(String),
}

impl HttpError {
    pub fn validation(errors: FieldErrors) -> Self {
        Self::Validation(errors)
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn server_error(message: impl Into<String>) -> Self {
        Self::ServerError(message.into())
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        match self {
            // -- 400：响应体就是 字段名 -> 错误消息列表 的映射
            Self::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(errors)).into_response()
            }
            // -- 404：空响应体
            Self::NotFound => StatusCode::NOT_FOUND.into_response(),
            // -- 500：记录日志后返回通用错误结构
            Self::ServerError(message) => {
                tracing::error!(target: "request", error = %message, "内部错误");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(dtos::Response {
                        status: "error",
                        message,
                    }),
                )
                    .into_response()
            }
        }
    }
}
