//! 核心响应处理模块

use serde::{Deserialize, Serialize};

/// 错误响应体，只携带一条固定消息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
