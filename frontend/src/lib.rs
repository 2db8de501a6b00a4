//! ProyectaLia Hub 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route`: 路由定义（领域模型）
//! - `web::router`: 路由服务（核心引擎）
//! - `auth`: 会话状态管理
//! - `hooks`: 数据获取
//! - `components`: 可复用 UI 组件
//! - `pages`: 页面

mod auth;
mod components {
    pub mod feedback;
    pub mod icons;
    pub mod navbar;
    pub mod project_card;
    pub mod project_form;
    pub mod protected;
}
mod hooks;
pub mod logging;
mod pages {
    pub mod applications;
    pub mod explore;
    pub mod login;
    pub mod my_applications;
    pub mod my_projects;
    pub mod profile;
    pub mod profile_edit;
    pub mod project_detail;
    pub mod project_editor;
    pub mod register;
}

use crate::auth::{AuthContext, build_config, init_auth};
use crate::components::feedback::{ToastHost, provide_toaster};
use crate::components::navbar::Layout;
use crate::pages::applications::ApplicationsPage;
use crate::pages::explore::ExplorePage;
use crate::pages::login::LoginPage;
use crate::pages::my_applications::MyApplicationsPage;
use crate::pages::my_projects::MyProjectsPage;
use crate::pages::profile::ProfilePage;
use crate::pages::profile_edit::EditProfilePage;
use crate::pages::project_detail::ProjectDetailPage;
use crate::pages::project_editor::{CreateProjectPage, EditProjectPage};
use crate::pages::register::RegisterPage;

use leptos::prelude::*;

// 原生 Web API 封装模块
// 此模块提供对浏览器原生 API 的轻量级封装，替代 gloo-* 系列 crate，
// 以减小 WASM 二进制体积。
pub(crate) mod web {
    mod http;
    pub mod route;
    pub mod router;
    mod storage;
    mod timer;

    pub use http::FetchHttpClient;
    pub use storage::BrowserStorage;
    pub use timer::Timeout;
}

use web::route::AppRoute;
use web::router::{Link, Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Explore => view! { <ExplorePage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::ProjectDetail(id) => view! { <ProjectDetailPage id=id /> }.into_any(),
        AppRoute::EditProject(id) => view! { <EditProjectPage id=id /> }.into_any(),
        AppRoute::Applications(id) => view! { <ApplicationsPage id=id /> }.into_any(),
        AppRoute::CreateProject => view! { <CreateProjectPage /> }.into_any(),
        AppRoute::MyProjects => view! { <MyProjectsPage /> }.into_any(),
        AppRoute::MyApplications => view! { <MyApplicationsPage /> }.into_any(),
        AppRoute::Profile(id) => view! { <ProfilePage id=id /> }.into_any(),
        AppRoute::EditProfile => view! { <EditProfilePage /> }.into_any(),
        AppRoute::NotFound => view! {
            <Layout>
                <div class="text-center py-16">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                    <Link to=AppRoute::Explore class="btn btn-primary mt-6">"Back to projects"</Link>
                </div>
            </Layout>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 创建认证上下文
    let auth_ctx = AuthContext::new(build_config());
    provide_context(auth_ctx);

    // 2. 从 LocalStorage 恢复会话
    init_auth(&auth_ctx);

    // 3. 全局通知
    provide_toaster();

    // 4. 认证状态信号注入路由服务，路由不依赖 auth 模块
    let auth_status = auth_ctx.status_signal();

    view! {
        <Router auth_status=auth_status>
            <RouterOutlet matcher=route_matcher />
        </Router>
        <ToastHost />
    }
}
