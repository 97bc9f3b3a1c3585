//! 商品网格渲染
//!
//! 渲染本身是纯函数：商品列表进，HTML 片段出。写入页面由 [`MountTarget`] 完成。
//! 每张卡片上的 `snipcart-add-item` 按钮携带购物车组件读取的 `data-item-*` 属性。

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use super::format;
use super::mount::{MountTarget, GRID_CONTAINER_ID};
use super::rating::check_rating;
use super::templates::{Templates, CARD_TEMPLATE};
use crate::app::catalog::model::Product;
use crate::core::error::StoreError;
use crate::infrastructure::config::StoreConfig;

/// 卡片渲染需要的店面参数
#[derive(Debug, Clone)]
pub struct GridOptions {
    /// 店面根地址，不带结尾的 `/`
    pub store_url: String,
    /// 图片加载失败时的占位图
    pub fallback_image: String,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self::from(&StoreConfig::default())
    }
}

impl From<&StoreConfig> for GridOptions {
    fn from(store: &StoreConfig) -> Self {
        Self {
            store_url: store.store_url.clone(),
            fallback_image: store.fallback_image.clone(),
        }
    }
}

impl GridOptions {
    /// 购物车使用的商品页地址
    pub fn item_url(&self) -> String {
        format!("{}/index.html", self.store_url)
    }
}

/// 单张卡片的模板上下文；星级、分组和价格由模板过滤器格式化
#[derive(Debug, Serialize)]
struct CardView<'a> {
    id: &'a str,
    name: &'a str,
    badge: Option<&'a str>,
    image: &'a str,
    fallback_image: &'a str,
    category: &'a str,
    description: &'a str,
    rating: f64,
    rating_text: String,
    reviews: u64,
    price: String,
    original_price: String,
    discount: u8,
    item_url: &'a str,
}

impl<'a> CardView<'a> {
    fn build(
        product: &'a Product,
        fallback_image: &'a str,
        item_url: &'a str,
    ) -> Result<Self, StoreError> {
        check_rating(product.rating)?;

        Ok(Self {
            id: &product.id,
            name: &product.name,
            badge: product.badge.as_deref().filter(|b| !b.is_empty()),
            image: &product.image,
            fallback_image,
            category: &product.category,
            description: &product.description,
            rating: product.rating,
            rating_text: format::rating(product.rating),
            reviews: product.reviews,
            price: product.price.normalize().to_string(),
            original_price: product.original_price.normalize().to_string(),
            discount: product.discount,
            item_url,
        })
    }
}

#[derive(Debug, Clone)]
pub struct GridRenderer {
    templates: Arc<Templates>,
    options: GridOptions,
    item_url: String,
}

impl GridRenderer {
    pub fn new(templates: Arc<Templates>, options: GridOptions) -> Self {
        let item_url = options.item_url();
        Self {
            templates,
            options,
            item_url,
        }
    }

    /// 渲染单张卡片
    pub fn render_card(&self, product: &Product) -> Result<String, StoreError> {
        let card = CardView::build(product, &self.options.fallback_image, &self.item_url)?;
        self.templates
            .render(CARD_TEMPLATE, minijinja::context! { card => card })
    }

    /// 按输入顺序渲染所有卡片；空列表得到空片段
    pub fn render(&self, products: &[Product]) -> Result<String, StoreError> {
        let cards = products
            .iter()
            .map(|p| self.render_card(p))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(cards.join("\n"))
    }

    /// 渲染并整体替换网格容器的内容
    ///
    /// 容器不存在时不渲染，返回 `Ok(false)`。
    pub fn render_into<M: MountTarget>(
        &self,
        target: &mut M,
        products: &[Product],
    ) -> Result<bool, StoreError> {
        if !target.has_container(GRID_CONTAINER_ID) {
            debug!(id = GRID_CONTAINER_ID, "未找到网格容器");
            return Ok(false);
        }

        let fragment = self.render(products)?;
        debug!(cards = products.len(), bytes = fragment.len(), "商品网格已渲染");
        Ok(target.mount(GRID_CONTAINER_ID, fragment))
    }
}

/// 一次性渲染，内部构建模板环境
pub fn render_grid(products: &[Product], options: &GridOptions) -> Result<String, StoreError> {
    let templates = Arc::new(Templates::new()?);
    GridRenderer::new(templates, options.clone()).render(products)
}
