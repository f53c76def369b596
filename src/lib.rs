//! # 内存用户 CRUD 服务
//!
//! 一个进程内的用户列表，通过 HTTP/JSON 进行增删改查：
//! - `app`：用户存储、处理器和兜底页面
//! - `router`：方法 + 路径到处理器的路由表
//! - `core`：错误类型、响应体、请求日志中间件
//! - `config` / `infrastructure`：配置加载和日志初始化
//!
//! 数据不持久化，每次启动都重新写入三个示例用户。

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;
pub mod router;

pub use app::{landing::LandingPage, users::UserStore, AppState};
pub use config::{Config, ConfigError};
pub use crate::core::error::ApiError;
pub use router::build_router;
