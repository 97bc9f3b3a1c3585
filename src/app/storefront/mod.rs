//! HTML 店面

pub mod handler;
