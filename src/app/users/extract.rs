//! 用户路由的请求提取器

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{header::CONTENT_TYPE, request::Parts, HeaderMap},
};
use regex::Regex;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::OnceLock;
use tracing::{debug, warn};

use crate::app::{landing::LandingPage, AppState};
use crate::core::error::ApiError;

/// 8-4-4-4-12 位十六进制，大小写不敏感
const UUID_SHAPE: &str =
    r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$";

fn uuid_shape() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(UUID_SHAPE).expect("UUID 正则必须合法"))
}

/// 判断路径段是否符合规范 UUID 文本格式
pub fn is_uuid_shaped(segment: &str) -> bool {
    uuid_shape().is_match(segment)
}

/// 路径中的用户 id
///
/// 格式不符时拒绝并返回兜底页面，而不是 404。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserId(pub String);

#[async_trait]
impl FromRequestParts<AppState> for UserId {
    type Rejection = LandingPage;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| state.landing.clone())?;

        if is_uuid_shaped(&id) {
            Ok(UserId(id))
        } else {
            debug!(id = %id, "路径 id 不是 UUID 格式，返回兜底页面");
            Err(state.landing.clone())
        }
    }
}

/// JSON 请求体
///
/// 与 `axum::Json` 不同，任何读取或解析失败都统一为 [`ApiError::BadRequest`]。
#[derive(Debug)]
pub struct JsonPayload<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonPayload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !has_json_content_type(req.headers()) {
            warn!("请求体不是 JSON 类型");
            return Err(ApiError::BadRequest);
        }

        let body = Bytes::from_request(req, state).await.map_err(|err| {
            warn!(error = %err, "读取请求体失败");
            ApiError::BadRequest
        })?;

        parse_payload(&body).map(JsonPayload)
    }
}

/// 解析 JSON 请求体，空体、`null`、类型不符都视为错误请求
///
/// 顶层对象的属性名先转成小写，`{"Name": ..}` 与 `{"name": ..}` 等价。
pub fn parse_payload<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice::<Value>(body)
        .map(lowercase_keys)
        .and_then(serde_json::from_value)
        .map_err(|err| {
            warn!(error = %err, "请求体解析失败");
            ApiError::BadRequest
        })
}

fn lowercase_keys(value: Value) -> Value {
    match value {
        Value::Object(fields) => Value::Object(
            fields
                .into_iter()
                .map(|(key, field)| (key.to_lowercase(), field))
                .collect(),
        ),
        other => other,
    }
}

/// `application/json` 或任意 `+json` 后缀类型
fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}
