//! 渲染层：星级、卡片、网格、挂载和页面外壳

pub mod format;
pub mod grid;
pub mod mount;
pub mod page;
pub mod rating;
pub mod templates;

pub use grid::{render_grid, GridOptions, GridRenderer};
pub use mount::{MountTarget, Page, GRID_CONTAINER_ID};
pub use page::{render_page, PageShell};
pub use rating::{render_stars, render_stars_clamped};
pub use templates::Templates;
