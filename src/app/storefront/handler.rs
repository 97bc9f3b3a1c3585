//! 店面页面处理器

use axum::{
    extract::State,
    response::{Html, Json},
};

use crate::app::AppState;
use crate::core::error::CoreError;

/// 完整店面页面
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, CoreError> {
    Ok(Html(state.render_storefront()?))
}

/// 仅商品网格片段
pub async fn grid(State(state): State<AppState>) -> Result<Html<String>, CoreError> {
    Ok(Html(state.renderer.render(state.catalog.list())?))
}

/// 健康检查
pub async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "products": state.catalog.len(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
