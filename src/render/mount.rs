//! 挂载适配层
//!
//! `Page` 是页面的进程内表示：一组以元素 id 命名的容器。
//! 挂载总是整体替换容器内容，目标不存在时什么也不做。

use std::collections::HashMap;

use tracing::debug;

/// 商品网格容器的固定 id
pub const GRID_CONTAINER_ID: &str = "productsGrid";

/// 可挂载 HTML 片段的目标
pub trait MountTarget {
    fn has_container(&self, id: &str) -> bool;

    /// 用 `fragment` 替换容器内容，返回容器是否存在
    fn mount(&mut self, id: &str, fragment: String) -> bool;
}

#[derive(Debug, Clone, Default)]
pub struct Page {
    containers: HashMap<String, String>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加一个空容器
    pub fn with_container(mut self, id: impl Into<String>) -> Self {
        self.containers.insert(id.into(), String::new());
        self
    }

    /// 带商品网格容器的店面页面
    pub fn storefront() -> Self {
        Self::new().with_container(GRID_CONTAINER_ID)
    }

    pub fn container(&self, id: &str) -> Option<&str> {
        self.containers.get(id).map(String::as_str)
    }
}

impl MountTarget for Page {
    fn has_container(&self, id: &str) -> bool {
        self.containers.contains_key(id)
    }

    fn mount(&mut self, id: &str, fragment: String) -> bool {
        match self.containers.get_mut(id) {
            Some(slot) => {
                *slot = fragment;
                true
            }
            None => {
                debug!(id, "挂载目标不存在，跳过");
                false
            }
        }
    }
}
