//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// 库层错误类型
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("无效参数: {0}")]
    InvalidArgument(String),
    #[error("商品目录错误: {0}")]
    Catalog(String),
    #[error("模板错误: {0}")]
    Template(String),
    #[error("配置错误: {0}")]
    Config(String),
    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),
}

impl From<minijinja::Error> for StoreError {
    fn from(err: minijinja::Error) -> Self {
        StoreError::Template(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// HTTP 层错误类型
#[derive(Debug)]
pub enum CoreError {
    BadRequest(String),
    NotFound(String),
    InternalServerError(String),
}

/// 错误响应结构
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub code: u16,
    pub timestamp: String,
}

impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::InvalidArgument(msg) => CoreError::BadRequest(msg),
            other => CoreError::InternalServerError(other.to_string()),
        }
    }
}

impl CoreError {
    fn status(&self) -> StatusCode {
        match self {
            CoreError::BadRequest(_) => StatusCode::BAD_REQUEST,
            CoreError::NotFound(_) => StatusCode::NOT_FOUND,
            CoreError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn into_body(self) -> ErrorResponse {
        let status = self.status();
        let message = match self {
            CoreError::BadRequest(msg)
            | CoreError::NotFound(msg)
            | CoreError::InternalServerError(msg) => msg,
        };

        ErrorResponse {
            // BAD_REQUEST / NOT_FOUND / INTERNAL_SERVER_ERROR
            error: status
                .canonical_reason()
                .unwrap_or("UNKNOWN")
                .to_uppercase()
                .replace(' ', "_"),
            message,
            code: status.as_u16(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = self.into_body();

        if status.is_server_error() {
            tracing::error!(code = body.code, message = %body.message, "请求处理失败");
        } else {
            tracing::debug!(code = body.code, message = %body.message, "请求被拒绝");
        }

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_maps_to_bad_request() {
        let err: CoreError = StoreError::InvalidArgument("rating".to_string()).into();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_template_error_maps_to_internal() {
        let err: CoreError = StoreError::Template("boom".to_string()).into();
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_error_body_fields() {
        let response = CoreError::InternalServerError("模板错误: boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"], "INTERNAL_SERVER_ERROR");
        assert_eq!(json["code"], 500);
        assert_eq!(json["message"], "模板错误: boom");
    }

    #[test]
    fn test_error_codes() {
        let body = CoreError::BadRequest("x".to_string()).into_body();
        assert_eq!(body.error, "BAD_REQUEST");
        assert_eq!(body.code, 400);
        let body = CoreError::NotFound("x".to_string()).into_body();
        assert_eq!(body.error, "NOT_FOUND");
    }

    #[test]
    fn test_not_found_status() {
        let response = CoreError::NotFound("missing".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
