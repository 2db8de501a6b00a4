//! 数据获取 Hooks
//!
//! 每个 hook 返回一个 [`Fetch`] 句柄，内部是核心库的 [`FetchState`]。
//! 参数变化时重新请求；只有最新一次请求的结果会被写入。

use crate::auth::{AuthContext, use_auth};
use crate::web::{FetchHttpClient, Timeout};
use leptos::prelude::*;
use leptos::task::spawn_local;
use proyectalia::{ApiClient, ApiResult, ErrorText, FetchState};
use proyectalia_shared::{CollaborationRequest, Id, Project, ProjectFilter};
use std::future::Future;

/// 搜索输入防抖时长
const SEARCH_DEBOUNCE_MS: u32 = 400;

/// 数据获取句柄
pub struct Fetch<T: Send + Sync + 'static> {
    pub state: RwSignal<FetchState<T>>,
    version: RwSignal<u32>,
}

impl<T: Send + Sync + 'static> Clone for Fetch<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for Fetch<T> {}

impl<T: Send + Sync + 'static> Fetch<T> {
    /// 强制重新请求（参数不变）
    pub fn reload(&self) {
        self.version.update(|v| *v = v.wrapping_add(1));
    }

    pub fn loading(&self) -> bool {
        self.state.with(|s| s.loading)
    }

    pub fn error(&self) -> Option<String> {
        self.state.with(|s| s.error.clone())
    }

    pub fn data(&self) -> Option<T>
    where
        T: Clone,
    {
        self.state.with(|s| s.data.clone())
    }

    /// 本地修改已加载的数据（如接受申请后更新列表）
    pub fn mutate(&self, f: impl FnOnce(&mut T)) {
        self.state.update(|s| {
            if let Some(data) = s.data.as_mut() {
                f(data);
            }
        });
    }
}

/// 通用获取逻辑
///
/// `params` 返回 `None` 时 hook 处于禁用状态，未完成的请求结果会被丢弃。
fn use_fetch<T, P, Fut>(
    params: impl Fn() -> Option<P> + 'static,
    run: impl Fn(ApiClient<FetchHttpClient>, P) -> Fut + 'static,
    text: ErrorText,
) -> Fetch<T>
where
    T: Send + Sync + 'static,
    P: 'static,
    Fut: Future<Output = ApiResult<T>> + 'static,
{
    let auth = use_auth();
    let fetch = Fetch {
        state: RwSignal::new(FetchState::new()),
        version: RwSignal::new(0),
    };
    let state = fetch.state;
    let version = fetch.version;

    Effect::new(move |_| {
        version.track();
        let Some(params) = params() else {
            state.update(|s| s.cancel());
            return;
        };

        let Some(ticket) = state.try_update(|s| s.begin()) else {
            return;
        };
        let request = run(auth.api(), params);
        spawn_local(async move {
            let result = request.await;
            // 视图已卸载时信号已释放，结果直接丢弃
            state.try_update(|s| s.resolve_api(ticket, result, text));
        });
    });

    fetch
}

/// 防抖信号：源信号停止变化 `millis` 毫秒后才更新
pub fn use_debounced<T>(source: Signal<T>, millis: u32) -> ReadSignal<T>
where
    T: Clone + Send + Sync + 'static,
{
    let (debounced, set_debounced) = signal(source.get_untracked());
    let pending = StoredValue::new_local(None::<Timeout>);

    Effect::new(move |prev: Option<()>| {
        let value = source.get();
        if prev.is_none() {
            return;
        }
        // 覆盖旧的定时器即取消它
        pending.set_value(Timeout::new(millis, move || set_debounced.set(value)));
    });

    debounced
}

// ============================================================================
// 页面 Hooks
// ============================================================================

/// 项目探索列表，搜索词经过防抖
pub fn use_projects(filter: Signal<ProjectFilter>) -> Fetch<Vec<Project>> {
    let search = use_debounced(Signal::derive(move || filter.with(|f| f.search.clone())), SEARCH_DEBOUNCE_MS);
    // 只在区域或技能变化时通知；输入搜索词不会触发请求
    let immediate = Memo::new(move |_| filter.with(ProjectFilter::without_search));
    use_fetch(
        move || Some(immediate.get().with_search(search.get())),
        |api, filter| async move { api.list_projects(&filter).await },
        ErrorText::Fixed("Could not load projects. Please try again."),
    )
}

pub fn use_project_detail(id: Signal<Id>) -> Fetch<Project> {
    use_fetch(
        move || Some(id.get()),
        |api, id| async move { api.get_project(id).await },
        ErrorText::PreferBackend("Error loading the project."),
    )
}

/// 我创建的项目与参与的项目；任一请求失败时对应列表为空
pub fn use_my_projects(auth: AuthContext) -> Fetch<(Vec<Project>, Vec<Project>)> {
    use_fetch(
        move || auth.user_id(),
        |api, _| async move { Ok(api.my_project_lists().await) },
        ErrorText::Fixed("Could not load your projects."),
    )
}

pub fn use_project_requests(project_id: Signal<Id>) -> Fetch<Vec<CollaborationRequest>> {
    use_fetch(
        move || Some(project_id.get()),
        |api, id| async move { api.project_requests(id).await },
        ErrorText::PreferBackend("Error loading applications."),
    )
}

/// 我发出的申请；未登录时禁用
pub fn use_my_applications(auth: AuthContext) -> Fetch<Vec<CollaborationRequest>> {
    use_fetch(
        move || auth.user_id(),
        |api, _| async move { api.my_applications().await },
        ErrorText::Fixed("Error loading your applications."),
    )
}
