//! 配置基础设施
//!
//! 配置来自 TOML 文件，查找顺序：`STOREFRONT_CONFIG` 环境变量、
//! `config.toml`、`./config/config.toml`，都不存在时使用默认值。

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::StoreError;

/// 店面配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP 服务配置
    pub http: HttpConfig,
    /// 日志配置
    pub logging: LoggingConfig,
    /// 店面展示配置
    pub store: StoreConfig,
    /// 商品目录配置
    pub catalog: CatalogConfig,
}

/// HTTP 服务配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// 绑定地址
    pub bind_address: String,
    /// HTTP 服务端口
    pub port: u16,
    /// 请求超时时间（秒）
    pub timeout_seconds: u64,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别 (trace, debug, info, warn, error)
    pub level: String,
}

/// 店面展示配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// 页面标题
    pub title: String,
    /// 页面描述
    pub description: String,
    /// 店面根地址，购物车用它拼接商品页地址
    pub store_url: String,
    /// 图片加载失败时替换的占位图
    pub fallback_image: String,
    /// 购物车组件配置，缺省时页面不加载购物车脚本
    pub cart: Option<CartConfig>,
}

/// 购物车组件配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartConfig {
    /// 公钥
    pub public_key: String,
    /// 脚本版本
    #[serde(default = "default_cart_version")]
    pub version: String,
}

/// 商品目录配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// 外部 JSON 目录文件，缺省时使用内置目录
    pub path: Option<PathBuf>,
}

fn default_cart_version() -> String {
    "3.7.1".to_string()
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 3000,
            timeout_seconds: 30,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            title: "SellBuddy Store".to_string(),
            description: "Trending products at unbeatable prices".to_string(),
            store_url: "https://nazmulaminashiq-coder.github.io/SellBuddy/store".to_string(),
            fallback_image: "https://via.placeholder.com/400x400?text=Product".to_string(),
            cart: None,
        }
    }
}

impl HttpConfig {
    /// 监听地址，形如 `127.0.0.1:3000`
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

impl Config {
    /// 从配置文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            StoreError::Config(format!("读取 {} 失败: {}", path.as_ref().display(), e))
        })?;

        toml::from_str(&content).map_err(|e| StoreError::Config(format!("解析失败: {}", e)))
    }

    /// 用环境变量覆盖文件中的值
    pub fn apply_env_overrides(&mut self) -> Result<(), StoreError> {
        if let Ok(port) = std::env::var("STOREFRONT_PORT") {
            self.http.port = port
                .parse()
                .map_err(|_| StoreError::Config(format!("无效的 STOREFRONT_PORT: {}", port)))?;
        }
        Ok(())
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.http.port == 0 {
            return Err(StoreError::Config("HTTP端口必须大于0".to_string()));
        }
        if self.http.bind_address.is_empty() {
            return Err(StoreError::Config("绑定地址不能为空".to_string()));
        }
        if self.http.timeout_seconds == 0 {
            return Err(StoreError::Config("请求超时必须大于0".to_string()));
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(StoreError::Config(format!(
                "无效的日志级别: {}，有效值: {:?}",
                self.logging.level, valid_levels
            )));
        }

        if !self.store.store_url.starts_with("http") {
            return Err(StoreError::Config(format!(
                "店面地址必须是 http(s) URL: {}",
                self.store.store_url
            )));
        }
        if self.store.store_url.ends_with('/') {
            return Err(StoreError::Config("店面地址不能以 / 结尾".to_string()));
        }
        if let Some(cart) = &self.store.cart {
            if cart.public_key.trim().is_empty() {
                return Err(StoreError::Config("购物车公钥不能为空".to_string()));
            }
        }

        Ok(())
    }
}

/// 从文件或默认值加载配置，并应用环境变量覆盖
///
/// 返回配置及其来源文件；日志在此时尚未初始化，由调用方记录来源。
pub fn load_config() -> Result<(Config, Option<PathBuf>), StoreError> {
    let source = match std::env::var_os("STOREFRONT_CONFIG") {
        Some(path) => Some(PathBuf::from(path)),
        None => find_config_file(),
    };

    let mut config = match &source {
        Some(path) => Config::load_from_file(path)?,
        None => Config::default(),
    };

    config.apply_env_overrides()?;
    config.validate()?;
    Ok((config, source))
}

fn find_config_file() -> Option<PathBuf> {
    ["config.toml", "./config/config.toml"]
        .iter()
        .map(PathBuf::from)
        .find(|path| path.exists())
}
