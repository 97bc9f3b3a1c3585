//! 完整页面外壳

use minijinja::context;

use super::mount::{Page, GRID_CONTAINER_ID};
use super::templates::{Templates, PAGE_TEMPLATE};
use crate::core::error::StoreError;
use crate::infrastructure::config::{CartConfig, StoreConfig};

#[derive(Debug, Clone)]
pub struct PageShell {
    pub title: String,
    pub description: String,
    pub store_url: String,
    pub cart: Option<CartConfig>,
}

impl From<&StoreConfig> for PageShell {
    fn from(store: &StoreConfig) -> Self {
        Self {
            title: store.title.clone(),
            description: store.description.clone(),
            store_url: store.store_url.clone(),
            cart: store.cart.clone(),
        }
    }
}

/// 输出完整 HTML 文档，网格容器的内容取自 `page`
pub fn render_page(
    templates: &Templates,
    shell: &PageShell,
    page: &Page,
) -> Result<String, StoreError> {
    templates.render(
        PAGE_TEMPLATE,
        context! {
            title => &shell.title,
            description => &shell.description,
            store_url => &shell.store_url,
            cart => shell.cart.as_ref(),
            grid_id => GRID_CONTAINER_ID,
            grid => page.container(GRID_CONTAINER_ID).unwrap_or_default(),
        },
    )
}
