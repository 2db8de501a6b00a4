//! LocalStorage 封装模块
//!
//! 使用 `web_sys::Storage` 实现核心库的 [`KeyValueStore`]，会话存储由此落盘。

use proyectalia::session::KeyValueStore;

/// 浏览器 LocalStorage
///
/// 无状态句柄，每次操作时重新获取 `window.localStorage`。
/// 隐私模式等不可用的情况下读取返回 `None`，写入返回 `false`。
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> bool {
        Self::storage()
            .and_then(|s| s.set_item(key, value).ok())
            .is_some()
    }

    fn remove(&self, key: &str) -> bool {
        Self::storage()
            .and_then(|s| s.remove_item(key).ok())
            .is_some()
    }
}
