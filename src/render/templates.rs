//! 内嵌的 HTML 模板
//!
//! 模板名以 `.html` 结尾，minijinja 会对插值自动做 HTML 转义。
//! 注册的过滤器：`stars`（星级串）、`grouped`（千位分组）、`money`（两位小数）。

use std::str::FromStr;

use minijinja::{Environment, Error, ErrorKind, UndefinedBehavior, Value};
use rust_decimal::Decimal;
use serde::Serialize;

use super::format;
use super::rating::render_stars_clamped;
use crate::core::error::StoreError;

pub const CARD_TEMPLATE: &str = "card.html";
pub const PAGE_TEMPLATE: &str = "page.html";

#[derive(Debug)]
pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    pub fn new() -> Result<Self, StoreError> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_undefined_behavior(UndefinedBehavior::Strict);

        env.add_filter("stars", render_stars_clamped);
        env.add_filter("grouped", format::grouped);
        env.add_filter("money", money);

        env.add_template(CARD_TEMPLATE, include_str!("../../templates/card.html"))?;
        env.add_template(PAGE_TEMPLATE, include_str!("../../templates/page.html"))?;

        Ok(Self { env })
    }

    pub fn render<S: Serialize>(&self, name: &str, ctx: S) -> Result<String, StoreError> {
        let template = self.env.get_template(name)?;
        Ok(template.render(ctx)?)
    }
}

/// 数字或数字字符串 -> 两位小数的价格
fn money(value: Value) -> Result<String, Error> {
    let text = value.to_string();
    let amount = Decimal::from_str(&text).map_err(|e| {
        Error::new(
            ErrorKind::InvalidOperation,
            format!("无法解析价格 {}: {}", text, e),
        )
    })?;
    Ok(format::price(amount))
}
