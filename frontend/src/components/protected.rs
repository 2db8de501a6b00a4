//! 受保护页面包装组件

use crate::auth::use_auth;
use crate::components::feedback::LoadingMessage;
use crate::web::router::use_router;
use crate::web::route::AppRoute;
use leptos::prelude::*;
use proyectalia::guard::{Access, GuardDecision, RouteGuard};

/// 会话加载中显示占位；未登录跳转到登录页且不渲染任何内容。
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let status = auth.status_signal();
    let decision = Memo::new(move |_| RouteGuard::evaluate(status.get(), Access::Protected));

    Effect::new(move |_| {
        if let GuardDecision::Redirect(to) = decision.get() {
            router.go(AppRoute::redirect(to));
        }
    });

    move || match decision.get() {
        GuardDecision::Pending => view! { <LoadingMessage /> }.into_any(),
        GuardDecision::Redirect(_) => ().into_any(),
        GuardDecision::Allow => children().into_any(),
    }
}
