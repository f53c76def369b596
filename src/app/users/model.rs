//! 用户数据模型

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub age: i32,
}

/// 创建/更新请求体
///
/// 缺失或为 `null` 的 `id`/`name` 取空串，缺失的 `age` 取 0；`age` 也接受数字字符串。
/// 创建时 `id` 被忽略，更新时按 `id` 查找用户。
/// 属性名大小写不敏感，由 [`super::extract::parse_payload`] 先统一为小写。
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UserPayload {
    #[serde(deserialize_with = "null_as_empty")]
    pub id: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(deserialize_with = "number_or_numeric_string")]
    pub age: i32,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn number_or_numeric_string<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Age {
        Number(i32),
        Text(String),
    }

    match Age::deserialize(deserializer)? {
        Age::Number(age) => Ok(age),
        Age::Text(text) => text
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("age 不是整数: {text:?}"))),
    }
}
