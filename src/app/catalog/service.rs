//! 商品目录服务
//!
//! 目录在启动时构建一次，之后只读，通过 `Arc` 在各处理器之间共享。

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, warn};

use super::model::Product;
use crate::core::error::StoreError;

const BUILTIN_CATALOG: &str = include_str!("../../../catalog/products.json");

#[derive(Debug, Clone)]
pub struct CatalogService {
    products: Arc<[Product]>,
}

impl CatalogService {
    /// 校验并构建目录：id 唯一，每个商品通过字段校验
    pub fn from_products(products: Vec<Product>) -> Result<Self, StoreError> {
        validate_products(&products)?;

        debug!(count = products.len(), "商品目录已构建");
        Ok(Self {
            products: products.into(),
        })
    }

    /// 解析 JSON 格式的商品列表
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let products: Vec<Product> = serde_json::from_str(json)
            .map_err(|e| StoreError::Catalog(format!("目录解析失败: {}", e)))?;
        Self::from_products(products)
    }

    /// 内置目录
    pub fn builtin() -> Result<Self, StoreError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// 从外部 JSON 文件加载目录
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    pub fn list(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// 按分类筛选，保持目录顺序；分类名比较忽略大小写
    pub fn by_category(&self, category: &str) -> Vec<Product> {
        self.products
            .iter()
            .filter(|p| p.category.eq_ignore_ascii_case(category))
            .cloned()
            .collect()
    }

    /// 所有分类，按首次出现的顺序去重
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.products
            .iter()
            .map(|p| p.category.as_str())
            .filter(|c| seen.insert(*c))
            .collect()
    }
}

fn validate_products(products: &[Product]) -> Result<(), StoreError> {
    let mut seen = HashSet::with_capacity(products.len());

    for product in products {
        product.check()?;

        if !seen.insert(product.id.as_str()) {
            return Err(StoreError::Catalog(format!("重复的商品 id: {}", product.id)));
        }

        let derived = product.derived_discount();
        if derived.abs_diff(product.discount) > 1 {
            warn!(
                id = %product.id,
                stored = product.discount,
                derived,
                "折扣与价格不一致"
            );
        }
    }
    Ok(())
}
