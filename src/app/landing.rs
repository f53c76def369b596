//! 兜底页面
//!
//! 任何未匹配 API 路由的请求（包括 id 格式不对的用户路径）都返回这个页面。

use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
};
use std::{path::Path, sync::Arc};
use tracing::{info, warn};

use super::AppState;

const EMBEDDED_INDEX: &str = include_str!("../../html/index.html");

#[derive(Debug, Clone)]
pub struct LandingPage {
    html: Arc<str>,
}

impl LandingPage {
    /// 启动时读取页面文件，读取失败则使用内置页面
    pub async fn load(path: &Path) -> Self {
        match tokio::fs::read_to_string(path).await {
            Ok(html) => {
                info!("兜底页面: {}", path.display());
                Self::from_html(html)
            }
            Err(err) => {
                warn!(error = %err, "无法读取 {}，使用内置页面", path.display());
                Self::embedded()
            }
        }
    }

    pub fn embedded() -> Self {
        Self::from_html(EMBEDDED_INDEX)
    }

    pub fn from_html(html: impl Into<Arc<str>>) -> Self {
        Self { html: html.into() }
    }

    pub fn html(&self) -> &str {
        &self.html
    }
}

impl IntoResponse for LandingPage {
    fn into_response(self) -> Response {
        Html(self.html.to_string()).into_response()
    }
}

pub async fn serve_landing(State(state): State<AppState>) -> LandingPage {
    state.landing
}
