//! 认证模块
//!
//! 将核心库的 [`SessionStore`] 包装为信号，通过 Context 在组件间共享。
//! 路由服务通过注入的认证状态信号检查访问权限，与本模块解耦。

use crate::web::{BrowserStorage, FetchHttpClient};
use leptos::prelude::*;
use proyectalia::config::{ClientConfig, ENV_API_URL, ENV_TOKEN_KEY, ENV_USER_KEY};
use proyectalia::guard::AuthStatus;
use proyectalia::session::SessionStore;
use proyectalia::{ApiClient, ApiResult};
use proyectalia_shared::{Credentials, Registration, User};

/// 构建期配置
///
/// 由 `option_env!` 在编译时读取，未设置时使用默认值。
pub fn build_config() -> ClientConfig {
    ClientConfig::from_lookup(|key| {
        let value = match key {
            ENV_API_URL => option_env!("PROYECTALIA_API_URL"),
            ENV_TOKEN_KEY => option_env!("PROYECTALIA_TOKEN_KEY"),
            ENV_USER_KEY => option_env!("PROYECTALIA_USER_KEY"),
            _ => None,
        };
        value.map(str::to_string)
    })
}

/// 认证上下文
///
/// 包含会话信号和客户端配置，`Copy` 以便在闭包间传递。
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// 会话状态（唯一写入者为本模块的方法）
    pub session: RwSignal<SessionStore<BrowserStorage>>,
    config: StoredValue<ClientConfig>,
}

impl AuthContext {
    /// 创建新的认证上下文，会话处于加载状态直到 [`init_auth`]
    pub fn new(config: ClientConfig) -> Self {
        let store = SessionStore::new(BrowserStorage, config.storage_keys.clone());
        Self {
            session: RwSignal::new(store),
            config: StoredValue::new(config),
        }
    }

    /// 获取认证状态信号（用于路由服务注入）
    pub fn status_signal(&self) -> Signal<AuthStatus> {
        let session = self.session;
        Signal::derive(move || session.with(|s| s.status()))
    }

    /// 当前用户（响应式）
    pub fn user(&self) -> Option<User> {
        self.session.with(|s| s.user().cloned())
    }

    pub fn user_id(&self) -> Option<i64> {
        self.session.with(|s| s.user().map(|u| u.id))
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(|s| s.is_authenticated())
    }

    /// API 客户端，带上当前令牌（非响应式读取）
    pub fn api(&self) -> ApiClient<FetchHttpClient> {
        let token = self.session.with_untracked(|s| s.token().map(str::to_string));
        self.config
            .with_value(|config| ApiClient::new(FetchHttpClient, config))
            .with_token(token)
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 初始化认证状态
///
/// 从 LocalStorage 恢复会话；数据缺失或损坏时静默清除。
pub fn init_auth(ctx: &AuthContext) {
    ctx.session.update(|s| s.init());
}

/// 登录并保存会话
///
/// 失败时返回可直接展示的错误信息。
pub async fn login(ctx: &AuthContext, credentials: Credentials) -> Result<(), String> {
    let auth = ctx
        .api()
        .login(&credentials)
        .await
        .map_err(|e| e.user_message("Invalid email or password."))?;
    ctx.session.update(|s| s.login(auth.user, auth.token));
    Ok(())
}

/// 注册后直接进入登录状态
pub async fn register(ctx: &AuthContext, registration: Registration) -> Result<(), String> {
    let auth = ctx
        .api()
        .register(&registration)
        .await
        .map_err(|e| e.user_message("Could not create the account."))?;
    ctx.session.update(|s| s.login(auth.user, auth.token));
    Ok(())
}

/// 保存资料修改，并用返回的用户记录替换会话中的用户
pub async fn update_profile(ctx: &AuthContext, update: proyectalia_shared::ProfileUpdate) -> ApiResult<User> {
    let user = ctx.api().update_profile(&update).await?;
    ctx.session.update(|s| s.update_user(user.clone()));
    Ok(user)
}

/// 注销并清除状态
///
/// 导航将由路由服务的认证状态监听自动处理。
pub fn logout(ctx: &AuthContext) {
    ctx.session.update(|s| s.logout());
}
