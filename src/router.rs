//! 路由表
//!
//! 匹配顺序：
//!
//! | 方法   | 路径               | 处理器        |
//! |--------|--------------------|---------------|
//! | GET    | `/api/users`       | `list_users`  |
//! | GET    | `/api/users/{id}`  | `get_user`    |
//! | POST   | `/api/users`       | `create_user` |
//! | PUT    | `/api/users`       | `update_user` |
//! | DELETE | `/api/users/{id}`  | `delete_user` |
//! | 其他   | 任意               | 兜底页面      |
//!
//! `{id}` 必须是 UUID 格式，否则同样落到兜底页面。
//! HEAD 显式交给兜底页面，不由 GET 处理器应答。

use axum::{
    middleware,
    routing::{get, MethodFilter},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::app::{
    landing::serve_landing,
    users::handler::{create_user, delete_user, get_user, list_users, update_user},
    AppState,
};
use crate::config::HttpConfig;
use crate::core::middleware::request_logging_middleware;

pub const USERS_PATH: &str = "/api/users";
pub const USER_PATH: &str = "/api/users/:id";

pub fn build_router(state: AppState, http: &HttpConfig) -> Router {
    let router = Router::new()
        .route(
            USERS_PATH,
            get(list_users)
                .post(create_user)
                .put(update_user)
                .on(MethodFilter::HEAD, serve_landing)
                .fallback(serve_landing),
        )
        .route(
            USER_PATH,
            get(get_user)
                .delete(delete_user)
                .on(MethodFilter::HEAD, serve_landing)
                .fallback(serve_landing),
        )
        .fallback(serve_landing);

    let router = if http.enable_cors {
        router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
    } else {
        router
    };

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(request_logging_middleware)),
        )
        .with_state(state)
}
