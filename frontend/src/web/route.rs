//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由及其访问级别。

use proyectalia::guard::{Access, RedirectTarget};
use proyectalia_shared::Id;
use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 项目探索页 (首页)
    #[default]
    Explore,
    Login,
    Register,
    ProjectDetail(Id),
    EditProject(Id),
    /// 项目收到的申请 (仅创建者)
    Applications(Id),
    CreateProject,
    MyProjects,
    MyApplications,
    Profile(Id),
    EditProfile,
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    ///
    /// 查询串和末尾斜杠会被忽略。
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Self::Explore,
            ["login"] => Self::Login,
            ["register"] => Self::Register,
            ["create-project"] => Self::CreateProject,
            ["my-projects"] => Self::MyProjects,
            ["my-applications"] => Self::MyApplications,
            ["profile", "edit"] => Self::EditProfile,
            ["profile", id] => Self::with_id(id, Self::Profile),
            ["projects", id] => Self::with_id(id, Self::ProjectDetail),
            ["projects", id, "edit"] => Self::with_id(id, Self::EditProject),
            ["projects", id, "applications"] => Self::with_id(id, Self::Applications),
            _ => Self::NotFound,
        }
    }

    fn with_id(raw: &str, route: fn(Id) -> Self) -> Self {
        raw.parse().map(route).unwrap_or(Self::NotFound)
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> String {
        match self {
            Self::Explore => "/".to_string(),
            Self::Login => "/login".to_string(),
            Self::Register => "/register".to_string(),
            Self::ProjectDetail(id) => format!("/projects/{id}"),
            Self::EditProject(id) => format!("/projects/{id}/edit"),
            Self::Applications(id) => format!("/projects/{id}/applications"),
            Self::CreateProject => "/create-project".to_string(),
            Self::MyProjects => "/my-projects".to_string(),
            Self::MyApplications => "/my-applications".to_string(),
            Self::Profile(id) => format!("/profile/{id}"),
            Self::EditProfile => "/profile/edit".to_string(),
            Self::NotFound => "/404".to_string(),
        }
    }

    /// **核心守卫逻辑：定义该路由的访问级别**
    pub fn access(&self) -> Access {
        match self {
            Self::CreateProject
            | Self::EditProject(_)
            | Self::Applications(_)
            | Self::MyProjects
            | Self::MyApplications
            | Self::EditProfile => Access::Protected,
            Self::Login | Self::Register => Access::GuestOnly,
            _ => Access::Public,
        }
    }

    /// 守卫重定向目标对应的路由
    pub fn redirect(target: RedirectTarget) -> Self {
        match target {
            RedirectTarget::Login => Self::Login,
            RedirectTarget::Home => Self::Explore,
        }
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip() {
        let routes = [
            AppRoute::Explore,
            AppRoute::Login,
            AppRoute::Register,
            AppRoute::ProjectDetail(4),
            AppRoute::EditProject(4),
            AppRoute::Applications(4),
            AppRoute::CreateProject,
            AppRoute::MyProjects,
            AppRoute::MyApplications,
            AppRoute::Profile(9),
            AppRoute::EditProfile,
        ];
        for route in routes {
            assert_eq!(AppRoute::from_path(&route.to_path()), route);
        }
    }

    #[test]
    fn unknown_or_malformed_paths() {
        assert_eq!(AppRoute::from_path("/projects/abc"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/dashboard"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/projects/3/"), AppRoute::ProjectDetail(3));
        assert_eq!(AppRoute::from_path("/?search=eco"), AppRoute::Explore);
    }

    #[test]
    fn protected_pages() {
        assert_eq!(AppRoute::MyApplications.access(), Access::Protected);
        assert_eq!(AppRoute::EditProfile.access(), Access::Protected);
        assert_eq!(AppRoute::ProjectDetail(1).access(), Access::Public);
        assert_eq!(AppRoute::Profile(1).access(), Access::Public);
        assert_eq!(AppRoute::Register.access(), Access::GuestOnly);
    }
}
