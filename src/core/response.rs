//! 核心响应处理模块

use serde::Serialize;
use uuid::Uuid;

/// API 响应结构
#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    pub count: Option<usize>,
    pub request_id: String,
    pub timestamp: String,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data,
            count: None,
            request_id: Uuid::new_v4().to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// 列表响应，附带条目数
    pub fn list(data: T, count: usize) -> Self {
        Self {
            count: Some(count),
            ..Self::success(data)
        }
    }
}
