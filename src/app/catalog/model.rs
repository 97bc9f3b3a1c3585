//! 商品数据模型

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::error::StoreError;

/// 商品目录条目，启动后只读
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(length(min = 1))]
    pub name: String,
    pub category: String,
    pub description: String,
    /// JSON 中以数字出现
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub original_price: Decimal,
    /// 折扣百分比，与两个价格独立存储，不做强制校验
    #[validate(range(max = 100))]
    pub discount: u8,
    #[validate(url)]
    pub image: String,
    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: f64,
    pub reviews: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
}

impl Product {
    /// 字段级校验加上价格关系校验
    pub fn check(&self) -> Result<(), StoreError> {
        self.validate()
            .map_err(|e| StoreError::Catalog(format!("商品 {} 校验失败: {}", self.id, e)))?;

        if !self.rating.is_finite() {
            return Err(StoreError::Catalog(format!("商品 {} 的评分无效", self.id)));
        }
        if self.price.is_sign_negative() {
            return Err(StoreError::Catalog(format!(
                "商品 {} 的价格不能为负: {}",
                self.id, self.price
            )));
        }
        if self.original_price < self.price {
            return Err(StoreError::Catalog(format!(
                "商品 {} 的原价 {} 低于现价 {}",
                self.id, self.original_price, self.price
            )));
        }
        Ok(())
    }

    /// 由原价和现价推算的折扣百分比（四舍五入）
    pub fn derived_discount(&self) -> u8 {
        if self.original_price.is_zero() {
            return 0;
        }
        let ratio = (self.original_price - self.price) / self.original_price;
        (ratio * Decimal::ONE_HUNDRED)
            .round()
            .to_u8()
            .unwrap_or(0)
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::product;
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_valid_product_passes() {
        assert!(product("a").check().is_ok());
    }

    #[test]
    fn test_rating_out_of_range_rejected() {
        let mut p = product("a");
        p.rating = 5.5;
        assert!(matches!(p.check(), Err(StoreError::Catalog(_))));
    }

    #[test]
    fn test_original_price_below_price_rejected() {
        let mut p = product("a");
        p.original_price = Decimal::from_str("10.00").unwrap();
        assert!(p.check().is_err());
    }

    #[test]
    fn test_bad_image_url_rejected() {
        let mut p = product("a");
        p.image = "not a url".to_string();
        assert!(p.check().is_err());
    }

    #[test]
    fn test_derived_discount() {
        let mut p = product("a");
        p.price = Decimal::from_str("34.99").unwrap();
        p.original_price = Decimal::from_str("59.99").unwrap();
        assert_eq!(p.derived_discount(), 42);

        p.original_price = Decimal::ZERO;
        p.price = Decimal::ZERO;
        assert_eq!(p.derived_discount(), 0);
    }

    #[test]
    fn test_deserialize_original_field_names() {
        let json = r#"{
            "id": "ice-roller-face",
            "name": "Ice Roller Face Massager",
            "category": "Beauty Tools",
            "description": "Depuff",
            "price": 14.99,
            "originalPrice": 29.99,
            "discount": 50,
            "image": "https://images.example.com/roller.jpg",
            "rating": 4.7,
            "reviews": 4521
        }"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.original_price, Decimal::from_str("29.99").unwrap());
        assert!(p.badge.is_none());
        assert!(p.features.is_empty());
    }

    #[test]
    fn test_prices_serialize_as_numbers() {
        let value = serde_json::to_value(product("a")).unwrap();
        assert_eq!(value["price"], 24.9);
        assert_eq!(value["originalPrice"], 44.99);
    }
}
