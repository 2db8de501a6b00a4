//! 定时器封装模块
//!
//! 使用 `web_sys` 的原生 `setTimeout`，用于搜索输入防抖。

use wasm_bindgen::prelude::*;

/// 一次性定时器
///
/// 封装 `setTimeout` API。当 `Timeout` 被 drop 时，如果尚未触发则自动取消，
/// 因此重新赋值即可实现防抖。
pub struct Timeout {
    handle: Option<i32>,
    _closure: Closure<dyn FnMut()>,
}

impl Timeout {
    /// 创建新的一次性定时器
    ///
    /// 无法获取 window 或设置失败时返回 `None`，回调不会执行。
    pub fn new<F>(millis: u32, callback: F) -> Option<Self>
    where
        F: FnOnce() + 'static,
    {
        let mut callback = Some(callback);
        let closure = Closure::<dyn FnMut()>::new(move || {
            if let Some(cb) = callback.take() {
                cb();
            }
        });

        let handle = web_sys::window()?
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                millis as i32,
            )
            .ok()?;

        Some(Self {
            handle: Some(handle),
            _closure: closure,
        })
    }

    /// 取消定时器
    pub fn cancel(&mut self) {
        if let (Some(handle), Some(window)) = (self.handle.take(), web_sys::window()) {
            window.clear_timeout_with_handle(handle);
        }
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        self.cancel();
    }
}
