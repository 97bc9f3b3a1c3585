//! 卡片上的数字格式

use rust_decimal::{Decimal, RoundingStrategy};

/// 价格固定两位小数，例如 24.9 -> "24.90"
pub fn price(amount: Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded.to_string()
}

/// 千位分组，例如 2847 -> "2,847"
pub fn grouped(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// 评分文本，与页面脚本里数字的默认显示一致：4.8 -> "4.8"，5.0 -> "5"
pub fn rating(value: f64) -> String {
    value.to_string()
}
