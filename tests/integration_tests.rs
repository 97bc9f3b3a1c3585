use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use storefront::app::{self, AppState};
use storefront::infrastructure::Config;
use storefront::render::GRID_CONTAINER_ID;
use storefront::CatalogService;
use tower::ServiceExt;

fn state() -> AppState {
    let config = Config::default();
    let catalog = CatalogService::builtin().unwrap();
    AppState::new(&config, catalog).unwrap()
}

fn router() -> Router {
    app::router(state(), 30)
}

async fn get(path: &str) -> (StatusCode, String) {
    let response = router()
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_index_renders_full_catalog() {
    let (status, body) = get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.starts_with("<!DOCTYPE html>"));
    assert!(body.contains(&format!("id=\"{}\"", GRID_CONTAINER_ID)));
    assert_eq!(body.matches("class=\"product-card\"").count(), 8);
    assert_eq!(body.matches("snipcart-add-item").count(), 8);

    let first = body
        .find("data-product-id=\"galaxy-star-projector-pro\"")
        .unwrap();
    let last = body.find("data-product-id=\"ice-roller-face\"").unwrap();
    assert!(first < last);

    assert!(body.contains("<span class=\"stars\">★★★★½</span>"));
    assert!(body.contains("4.8 (2,847)"));
    assert!(body.contains("$34.99"));
    assert!(body.contains("$59.99"));
    assert!(body.contains("42% OFF"));
}

#[tokio::test]
async fn test_repeated_requests_do_not_accumulate() {
    let router = router();
    for _ in 0..2 {
        let response = router
            .clone()
            .oneshot(Request::builder().uri("/grid").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert_eq!(html.matches("class=\"product-card\"").count(), 8);
    }
}

#[tokio::test]
async fn test_list_products_api() {
    let (status, body) = get("/api/products").await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["count"], 8);
    assert_eq!(json["data"][0]["id"], "galaxy-star-projector-pro");
    assert_eq!(json["data"][0]["badge"], "BESTSELLER");
    assert_eq!(json["data"][0]["price"], 34.99);
    assert_eq!(json["data"][0]["originalPrice"], 59.99);
}

#[tokio::test]
async fn test_list_products_by_category() {
    let (status, body) = get("/api/products?category=Smart%20Home").await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["count"], 3);
    for product in json["data"].as_array().unwrap() {
        assert_eq!(product["category"], "Smart Home");
    }
}

#[tokio::test]
async fn test_get_product_and_not_found() {
    let (status, body) = get("/api/products/ice-roller-face").await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["data"]["discount"], 50);

    let (status, body) = get("/api/products/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["error"], "NOT_FOUND");
    assert_eq!(json["code"], 404);
}

#[tokio::test]
async fn test_categories_and_health() {
    let (status, body) = get("/api/categories").await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["data"][0], "Smart Home");
    assert_eq!(json["count"], 6);

    let (status, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["products"], 8);
}

#[test]
fn test_export_writes_page() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dist").join("index.html");

    let written = state().export_storefront(&path).unwrap();
    let html = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, html.len());
    assert_eq!(html.matches("class=\"product-card\"").count(), 8);
}

#[test]
fn test_catalog_path_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("products.json");
    std::fs::write(
        &path,
        r#"[{
            "id": "solo",
            "name": "Solo",
            "category": "Kitchen",
            "description": "Only item",
            "price": 24.9,
            "originalPrice": 30,
            "discount": 17,
            "image": "https://images.example.com/solo.jpg",
            "rating": 4.0,
            "reviews": 12
        }]"#,
    )
    .unwrap();

    let mut config = Config::default();
    config.catalog.path = Some(path);
    let catalog = app::load_catalog(&config).unwrap();
    let state = AppState::new(&config, catalog).unwrap();

    let html = state.render_storefront().unwrap();
    assert_eq!(html.matches("class=\"product-card\"").count(), 1);
    assert!(html.contains("$24.90"));
    assert!(html.contains("$30.00"));
    assert!(html.contains("★★★★☆"));
    assert!(!html.contains("product-badge"));
}
