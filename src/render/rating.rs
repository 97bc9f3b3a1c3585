//! 星级评分格式化

use crate::core::error::StoreError;

pub const STAR_SLOTS: usize = 5;
pub const FULL_STAR: char = '★';
pub const HALF_STAR: char = '½';
pub const EMPTY_STAR: char = '☆';

const MAX_RATING: f64 = STAR_SLOTS as f64;

/// 把 [0, 5] 区间内的评分转换为固定 5 个字符的星级串
///
/// 整数部分为实心星，小数部分 >= 0.5 时追加一个半星，其余用空心星补齐。
/// 区间外或非有限的输入返回 [`StoreError::InvalidArgument`]。
pub fn render_stars(rating: f64) -> Result<String, StoreError> {
    check_rating(rating)?;

    let full = rating.floor() as usize;
    let half = rating.fract() >= 0.5;
    let empty = STAR_SLOTS - full - usize::from(half);

    let mut stars = String::with_capacity(STAR_SLOTS * FULL_STAR.len_utf8());
    stars.extend(std::iter::repeat(FULL_STAR).take(full));
    if half {
        stars.push(HALF_STAR);
    }
    stars.extend(std::iter::repeat(EMPTY_STAR).take(empty));
    Ok(stars)
}

/// 评分必须是 [0, 5] 区间内的有限值
pub fn check_rating(rating: f64) -> Result<(), StoreError> {
    if !rating.is_finite() || !(0.0..=MAX_RATING).contains(&rating) {
        return Err(StoreError::InvalidArgument(format!(
            "评分必须在 [0, {}] 区间内: {}",
            STAR_SLOTS, rating
        )));
    }
    Ok(())
}

/// 模板里 `stars` 过滤器的实现：先截断到 [0, 5] 再格式化，NaN 视为 0
pub fn render_stars_clamped(rating: f64) -> String {
    let clamped = if rating.is_nan() {
        0.0
    } else {
        rating.clamp(0.0, MAX_RATING)
    };
    // clamped 一定在区间内
    render_stars(clamped).unwrap_or_default()
}
