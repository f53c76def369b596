//! 用户处理器
//!
//! 每个处理器只调用一次存储操作，结果要么是用户 JSON，要么是 [`ApiError`]。

use axum::{extract::State, response::Json};
use tracing::{debug, info, warn};

use super::{
    extract::{JsonPayload, UserId},
    model::{User, UserPayload},
};
use crate::app::AppState;
use crate::core::error::ApiError;

pub async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    let users = state.store.list();
    debug!(count = users.len(), "获取用户列表");
    Json(users)
}

pub async fn get_user(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> Result<Json<User>, ApiError> {
    match state.store.find_by_id(&id) {
        Some(user) => Ok(Json(user)),
        None => {
            warn!(%id, "用户不存在");
            Err(ApiError::NotFound)
        }
    }
}

/// 创建用户，客户端提供的 id 被忽略
pub async fn create_user(
    State(state): State<AppState>,
    JsonPayload(payload): JsonPayload<UserPayload>,
) -> Json<User> {
    let user = state.store.insert(payload.name, payload.age);
    info!(id = %user.id, name = %user.name, "用户已创建");
    Json(user)
}

/// 按请求体中的 id 更新 name 和 age
pub async fn update_user(
    State(state): State<AppState>,
    JsonPayload(payload): JsonPayload<UserPayload>,
) -> Result<Json<User>, ApiError> {
    match state.store.update(&payload.id, payload.name, payload.age) {
        Some(user) => {
            info!(id = %user.id, "用户已更新");
            Ok(Json(user))
        }
        None => {
            warn!(id = %payload.id, "更新的用户不存在");
            Err(ApiError::NotFound)
        }
    }
}

pub async fn delete_user(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> Result<Json<User>, ApiError> {
    match state.store.remove(&id) {
        Some(user) => {
            info!(%id, "用户已删除");
            Ok(Json(user))
        }
        None => {
            warn!(%id, "删除的用户不存在");
            Err(ApiError::NotFound)
        }
    }
}
