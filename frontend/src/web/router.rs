//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，实现高内聚：
//! 所有对 window.history 的操作都集中在此模块。
//! 实现了"监听 -> 验证 -> 处理 -> 加载"的导航流程，验证交给 [`RouteGuard`]。

use leptos::prelude::*;
use proyectalia::guard::{AuthStatus, GuardDecision, RouteGuard};
use tracing::{debug, info};
use wasm_bindgen::prelude::*;

use super::route::AppRoute;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 推送 History 状态（内部工具函数）
fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 替换 History 状态（内部工具函数，用于重定向）
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

fn write_history(path: &str, use_push: bool) {
    if use_push {
        push_history_state(path);
    } else {
        replace_history_state(path);
    }
}

/// 路由器服务
///
/// 封装所有路由操作，通过 Signal 驱动界面更新。
/// 通过注入认证状态信号实现与认证系统的解耦。
#[derive(Clone, Copy)]
pub struct RouterService {
    /// 当前路由（只读信号）
    current_route: ReadSignal<AppRoute>,
    /// 设置当前路由（写入信号）
    set_route: WriteSignal<AppRoute>,
    /// 认证状态（注入的信号，实现解耦）
    auth_status: Signal<AuthStatus>,
}

impl RouterService {
    fn new(auth_status: Signal<AuthStatus>) -> Self {
        // 初始化当前路由（从 URL 解析）
        let initial_route = AppRoute::from_path(&current_path());
        let (current_route, set_route) = signal(initial_route);

        Self {
            current_route,
            set_route,
            auth_status,
        }
    }

    /// 获取当前路由信号
    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// **核心方法：导航与守卫**
    pub fn navigate(&self, path: &str) {
        self.navigate_to_route(AppRoute::from_path(path), true);
    }

    pub fn go(&self, route: AppRoute) {
        self.navigate_to_route(route, true);
    }

    /// 导航到指定路由
    ///
    /// 会话仍在加载时先放行，由 `ProtectedRoute` 显示占位内容，
    /// 加载完成后认证监听会再次执行守卫。
    fn navigate_to_route(&self, target: AppRoute, use_push: bool) {
        let status = self.auth_status.get_untracked();

        let resolved = match RouteGuard::evaluate(status, target.access()) {
            GuardDecision::Redirect(to) => {
                let redirect = AppRoute::redirect(to);
                info!(from = %target, to = %redirect, "route guard redirect");
                redirect
            }
            GuardDecision::Allow | GuardDecision::Pending => target,
        };

        write_history(&resolved.to_path(), use_push);
        self.set_route.set(resolved);
        scroll_to_top();
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let router = *self;

        let closure = Closure::<dyn Fn()>::new(move || {
            let target = AppRoute::from_path(&current_path());
            debug!(route = %target, "popstate");
            router.navigate_to_route(target, false);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 设置认证状态变化时的自动重定向
    ///
    /// 覆盖首次加载完成、登录和注销三种情况。
    fn setup_auth_redirect(&self) {
        let current_route = self.current_route;
        let set_route = self.set_route;
        let auth_status = self.auth_status;

        Effect::new(move |_| {
            let status = auth_status.get();
            let route = current_route.get_untracked();

            if let GuardDecision::Redirect(to) = RouteGuard::evaluate(status, route.access()) {
                let redirect = AppRoute::redirect(to);
                info!(from = %route, to = %redirect, "auth state changed, redirecting");
                replace_history_state(&redirect.to_path());
                set_route.set(redirect);
            }
        });
    }
}

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// 提供路由服务到 Context 并初始化
fn provide_router(auth_status: Signal<AuthStatus>) -> RouterService {
    let router = RouterService::new(auth_status);

    router.init_popstate_listener();
    router.setup_auth_redirect();

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
///
/// 提供路由上下文，应在 App 根部使用。
#[component]
pub fn Router(
    /// 认证状态信号
    auth_status: Signal<AuthStatus>,
    /// 子组件
    children: Children,
) -> impl IntoView {
    provide_router(auth_status);

    children()
}

/// 路由出口组件
///
/// 根据当前路由状态渲染对应的组件。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}

/// 站内链接
///
/// 拦截点击改用路由服务导航，保留 `href` 以便新标签页打开。
#[component]
pub fn Link(
    /// 目标路由
    to: AppRoute,
    #[prop(optional, into)] class: String,
    /// 子内容
    children: Children,
) -> impl IntoView {
    let router = use_router();

    let on_click = move |ev: web_sys::MouseEvent| {
        if ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.button() != 0 {
            return;
        }
        ev.prevent_default();
        router.go(to);
    };

    view! {
        <a href=to.to_path() class=class on:click=on_click>
            {children()}
        </a>
    }
}
