//! 服务配置
//!
//! 配置文件为 TOML，所有段和字段都可以省略，缺省值即默认行为：
//! 监听 `127.0.0.1:5000`，info 级别控制台日志，不写日志文件。

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 未指定配置文件时依次查找的位置
const CONFIG_CANDIDATES: [&str; 2] = ["config.toml", "./config/config.toml"];

const VALID_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// 用户服务配置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP 服务配置
    pub http: HttpConfig,
    /// 日志配置
    pub logging: LoggingConfig,
    /// 兜底页面配置
    pub landing: LandingConfig,
}

/// HTTP 服务配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// 绑定地址
    pub bind_address: String,
    /// HTTP 服务端口
    pub port: u16,
    /// 是否允许跨域请求
    pub enable_cors: bool,
}

/// 日志配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别 (trace, debug, info, warn, error)，`RUST_LOG` 优先
    pub level: String,
    /// 是否启用控制台输出
    pub console_output: bool,
    /// 日志目录，未设置时不写文件
    pub log_dir: Option<PathBuf>,
    /// 日志文件名前缀
    pub file_prefix: String,
}

/// 兜底页面配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    /// 未匹配任何 API 路由时返回的 HTML 文件
    pub index_file: PathBuf,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 5000,
            enable_cors: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            console_output: true,
            log_dir: None,
            file_prefix: "user_api".to_string(),
        }
    }
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            index_file: PathBuf::from("html/index.html"),
        }
    }
}

impl Config {
    /// 从配置文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::FileRead(e.to_string()))?;

        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// 确定要读取的配置文件
    ///
    /// 显式指定的路径原样返回（即使不存在，读取时再报错）；
    /// 否则返回第一个存在的候选文件。
    pub fn locate(explicit: Option<PathBuf>) -> Option<PathBuf> {
        explicit.or_else(|| {
            CONFIG_CANDIDATES
                .iter()
                .map(PathBuf::from)
                .find(|path| path.exists())
        })
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http.port == 0 {
            return Err(ConfigError::Validation("HTTP端口必须大于0".to_string()));
        }
        if self.http.bind_address.trim().is_empty() {
            return Err(ConfigError::Validation("绑定地址不能为空".to_string()));
        }

        if !VALID_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "无效的日志级别: {}，有效值: {:?}",
                self.logging.level, VALID_LEVELS
            )));
        }
        if self.logging.log_dir.is_some() && self.logging.file_prefix.is_empty() {
            return Err(ConfigError::Validation("日志文件名前缀不能为空".to_string()));
        }

        Ok(())
    }

    /// 监听地址，仅用于日志输出
    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.http.bind_address, self.http.port)
    }
}

/// 配置错误类型
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("文件读取错误: {0}")]
    FileRead(String),
    #[error("配置解析错误: {0}")]
    Parse(String),
    #[error("配置验证错误: {0}")]
    Validation(String),
}
