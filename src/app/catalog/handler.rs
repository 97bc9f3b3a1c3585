//! 商品目录 JSON 接口

use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde::Deserialize;

use super::model::Product;
use crate::app::AppState;
use crate::core::{error::CoreError, response::ApiResponse};

#[derive(Debug, Deserialize)]
pub struct ProductQuery {
    #[serde(default)]
    pub category: Option<String>,
}

pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> Json<ApiResponse<Vec<Product>>> {
    let products = match query.category.as_deref() {
        Some(category) => state.catalog.by_category(category),
        None => state.catalog.list().to_vec(),
    };
    let count = products.len();
    Json(ApiResponse::list(products, count))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Product>>, CoreError> {
    let product = state
        .catalog
        .get(&id)
        .cloned()
        .ok_or_else(|| CoreError::NotFound(format!("商品 {} 不存在", id)))?;
    Ok(Json(ApiResponse::success(product)))
}

pub async fn list_categories(State(state): State<AppState>) -> Json<ApiResponse<Vec<String>>> {
    let categories: Vec<String> = state
        .catalog
        .categories()
        .into_iter()
        .map(str::to_string)
        .collect();
    let count = categories.len();
    Json(ApiResponse::list(categories, count))
}
