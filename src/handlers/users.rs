use std::sync::Arc;

use axum::{
    extract::Path,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use serde_json::Value;

use crate::{
    db::UserExt,
    dtos::{SaveUserDto, UserDto},
    error::HttpError,
    AppState,
};

// -- 路径刻意带结尾斜杠，与对外约定保持一致：
// --   GET    /users/           列出全部用户
// --   POST   /users/create     创建用户
// --   GET    /users/{id}/      查询单个用户
// --   PUT    /users/{id}/      整体更新
// --   DELETE /users/{id}/      删除
pub fn users_handler() -> Router {
    Router::new()
        .route("/users/", get(get_users))
        .route("/users/create", post(create_user))
        .route(
            "/users/{user_id}/",
            get(get_user_detail).put(update_user).delete(delete_user),
        )
}

/// 返回全部用户 -- 按 id 升序排列的 JSON 数组
///
/// 没有任何记录时返回空数组，状态码始终是 200。
pub async fn get_users(
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let users = app_state
        .db_client
        .get_users()
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let users: Vec<UserDto> = users.into_iter().map(UserDto::from).collect();

    Ok(Json(users))
}

/// 处理创建用户请求 -- 校验通过后落库并返回完整记录
///
/// # 参数
/// - `app_state` -- 应用程序状态，包含数据库连接等共享资源
/// - `body` -- 原始 JSON 请求体，期望包含 name 和 age 字段
///
/// # 返回
/// - `Ok(201)` -- 创建成功，响应体为含生成 id 的完整用户记录
/// - `Err(HttpError)` -- 创建失败
///   - `Validation` -- 400，字段名到错误消息列表的映射，不产生任何写入
///   - `ServerError` -- 500，存储层故障
pub async fn create_user(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, HttpError> {
    // -- 逐字段校验请求体，任何字段出错都直接返回 400
    let dto = SaveUserDto::from_value(&body).map_err(HttpError::validation)?;

    let user = app_state
        .db_client
        .save_user(&dto.name, dto.age)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok((StatusCode::CREATED, Json(UserDto::from(user))))
}

/// 查询单个用户 -- 不存在时返回 404 空响应体
pub async fn get_user_detail(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(user_id): Path<i64>,
) -> Result<impl IntoResponse, HttpError> {
    let user = app_state
        .db_client
        .get_user(user_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or_else(HttpError::not_found)?;

    Ok(Json(UserDto::from(user)))
}

/// 处理整体更新请求 -- 校验通过后原地覆盖全部字段
///
/// # 参数
/// - `app_state` -- 应用程序状态，包含数据库连接等共享资源
/// - `user_id` -- 路径参数，目标用户 id
/// - `body` -- 原始 JSON 请求体，与创建接口共用同一份校验契约
///
/// # 返回
/// - `Ok(200)` -- 更新成功，响应体为更新后的完整记录
/// - `Err(HttpError)` -- 更新失败
///   - `Validation` -- 400，字段错误映射，记录保持原样
///   - `NotFound` -- 404，目标 id 不存在
///   - `ServerError` -- 500，存储层故障
pub async fn update_user(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(user_id): Path<i64>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, HttpError> {
    // -- 先确认记录存在，保证校验失败的 400 与 id 不存在的 404 语义分明
    app_state
        .db_client
        .get_user(user_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or_else(HttpError::not_found)?;

    let dto = SaveUserDto::from_value(&body).map_err(HttpError::validation)?;

    let user = app_state
        .db_client
        .update_user(user_id, &dto.name, dto.age)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        // -- 查询和更新之间记录可能已被并发删除
        .ok_or_else(HttpError::not_found)?;

    Ok(Json(UserDto::from(user)))
}

/// 删除单个用户 -- 成功返回 204 空响应体
///
/// 对同一 id 的第二次删除返回 404，因为记录已经不存在。
pub async fn delete_user(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(user_id): Path<i64>,
) -> Result<impl IntoResponse, HttpError> {
    let deleted = app_state
        .db_client
        .delete_user(user_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    if deleted == 0 {
        return Err(HttpError::not_found());
    }

    Ok(StatusCode::NO_CONTENT)
}
