//! # SellBuddy 店面
//!
//! 把只读的商品目录渲染为商品网格页面，并为第三方购物车组件输出
//! `snipcart-add-item` 按钮及其 `data-item-*` 属性。包括：
//! - 星级评分格式化
//! - 商品网格渲染与挂载
//! - 页面外壳、JSON 目录接口和静态导出

pub mod app;
pub mod core;
pub mod infrastructure;
pub mod render;

pub use app::catalog::{CatalogService, Product};
pub use crate::core::error::{Result, StoreError};
