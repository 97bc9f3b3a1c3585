//! 应用层：共享状态与路由

pub mod catalog;
pub mod storefront;

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use axum::{middleware, routing::get, Router};
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;

use crate::core::{error::StoreError, middleware::request_logging_middleware};
use crate::infrastructure::config::Config;
use crate::render::{render_page, GridOptions, GridRenderer, Page, PageShell, Templates};
use catalog::CatalogService;

/// 所有处理器共享的只读状态
#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogService,
    pub templates: Arc<Templates>,
    pub renderer: GridRenderer,
    pub shell: PageShell,
}

impl AppState {
    pub fn new(config: &Config, catalog: CatalogService) -> Result<Self, StoreError> {
        let templates = Arc::new(Templates::new()?);
        let renderer = GridRenderer::new(templates.clone(), GridOptions::from(&config.store));

        Ok(Self {
            catalog,
            templates,
            renderer,
            shell: PageShell::from(&config.store),
        })
    }

    /// 渲染完整页面：新建页面、挂载网格、套上外壳
    pub fn render_storefront(&self) -> Result<String, StoreError> {
        let mut page = Page::storefront();
        self.renderer.render_into(&mut page, self.catalog.list())?;
        render_page(&self.templates, &self.shell, &page)
    }

    /// 把完整页面写入静态文件，返回写入的字节数
    pub fn export_storefront(&self, path: &Path) -> Result<usize, StoreError> {
        let html = self.render_storefront()?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, &html)?;

        info!(path = %path.display(), bytes = html.len(), "店面页面已导出");
        Ok(html.len())
    }
}

/// 按配置加载商品目录：配置了路径则读文件，否则使用内置目录
pub fn load_catalog(config: &Config) -> Result<CatalogService, StoreError> {
    match &config.catalog.path {
        Some(path) => CatalogService::load_from_file(path),
        None => CatalogService::builtin(),
    }
}

pub fn router(state: AppState, timeout_seconds: u64) -> Router {
    Router::new()
        .route("/", get(storefront::handler::index))
        .route("/grid", get(storefront::handler::grid))
        .route("/health", get(storefront::handler::health_check))
        .route("/api/products", get(catalog::handler::list_products))
        .route("/api/products/:id", get(catalog::handler::get_product))
        .route("/api/categories", get(catalog::handler::list_categories))
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TimeoutLayer::new(Duration::from_secs(timeout_seconds)))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
