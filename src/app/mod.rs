//! 应用层

pub mod landing;
pub mod users;

use std::sync::Arc;

use landing::LandingPage;
use users::UserStore;

/// 所有处理器共享的状态
///
/// 存储在 `main` 中创建一次，通过 `Arc` 在请求间共享。
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<UserStore>,
    pub landing: LandingPage,
}

impl AppState {
    pub fn new(store: UserStore, landing: LandingPage) -> Self {
        Self {
            store: Arc::new(store),
            landing,
        }
    }
}
