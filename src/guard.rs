//! 路由守卫 - 纯决策逻辑
//!
//! 不依赖 DOM：路由服务和 `ProtectedRoute` 组件都只把当前认证状态
//! 和目标页面的访问级别交给 [`RouteGuard::evaluate`]，再执行返回的决定。

/// 页面访问级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Access {
    /// 任何人可访问
    #[default]
    Public,
    /// 需要登录
    Protected,
    /// 仅未登录用户（登录 / 注册页）
    GuestOnly,
}

/// Snapshot of the session as the guard sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AuthStatus {
    pub loading: bool,
    pub authenticated: bool,
}

impl AuthStatus {
    pub const LOADING: Self = Self {
        loading: true,
        authenticated: false,
    };
    pub const SIGNED_IN: Self = Self {
        loading: false,
        authenticated: true,
    };
    pub const SIGNED_OUT: Self = Self {
        loading: false,
        authenticated: false,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectTarget {
    /// 认证失败时的目标
    Login,
    /// 已登录用户离开登录页时的目标
    Home,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// 会话仍在加载，显示占位内容
    Pending,
    Allow,
    Redirect(RedirectTarget),
}

pub struct RouteGuard;

impl RouteGuard {
    /// **核心守卫逻辑**
    ///
    /// Public pages render right away, even while the session loads.
    pub fn evaluate(status: AuthStatus, access: Access) -> GuardDecision {
        match access {
            Access::Public => GuardDecision::Allow,
            _ if status.loading => GuardDecision::Pending,
            Access::Protected if !status.authenticated => GuardDecision::Redirect(RedirectTarget::Login),
            Access::GuestOnly if status.authenticated => GuardDecision::Redirect(RedirectTarget::Home),
            _ => GuardDecision::Allow,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(AuthStatus::LOADING, Access::Public, GuardDecision::Allow)]
    #[case(AuthStatus::SIGNED_OUT, Access::Public, GuardDecision::Allow)]
    #[case(AuthStatus::SIGNED_IN, Access::Public, GuardDecision::Allow)]
    #[case(AuthStatus::LOADING, Access::Protected, GuardDecision::Pending)]
    #[case(AuthStatus::SIGNED_OUT, Access::Protected, GuardDecision::Redirect(RedirectTarget::Login))]
    #[case(AuthStatus::SIGNED_IN, Access::Protected, GuardDecision::Allow)]
    #[case(AuthStatus::LOADING, Access::GuestOnly, GuardDecision::Pending)]
    #[case(AuthStatus::SIGNED_OUT, Access::GuestOnly, GuardDecision::Allow)]
    #[case(AuthStatus::SIGNED_IN, Access::GuestOnly, GuardDecision::Redirect(RedirectTarget::Home))]
    fn decision_table(#[case] status: AuthStatus, #[case] access: Access, #[case] expected: GuardDecision) {
        assert_eq!(RouteGuard::evaluate(status, access), expected);
    }

    #[test]
    fn session_store_feeds_the_guard() {
        use crate::config::StorageKeys;
        use crate::session::{MemoryStore, SessionStore};

        let mut session = SessionStore::new(MemoryStore::new(), StorageKeys::default());
        assert_eq!(RouteGuard::evaluate(session.status(), Access::Protected), GuardDecision::Pending);

        session.init();
        assert_eq!(
            RouteGuard::evaluate(session.status(), Access::Protected),
            GuardDecision::Redirect(RedirectTarget::Login)
        );
    }
}
