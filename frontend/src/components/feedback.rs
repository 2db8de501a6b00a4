//! 通用反馈组件：加载中、错误、空状态与通知

use leptos::prelude::*;
use std::time::Duration;

const TOAST_DURATION: Duration = Duration::from_secs(3);

#[component]
pub fn LoadingMessage(#[prop(into, default = "Loading...".to_string())] message: String) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-12 gap-3">
            <span class="loading loading-spinner loading-lg text-primary"></span>
            <span class="text-lg text-base-content/70">{message}</span>
        </div>
    }
}

#[component]
pub fn ErrorMessage(
    #[prop(into, default = "Error".to_string())] title: String,
    #[prop(into)] description: String,
) -> impl IntoView {
    view! {
        <div role="alert" class="alert alert-error max-w-lg mx-auto my-8">
            <svg xmlns="http://www.w3.org/2000/svg" class="stroke-current shrink-0 h-6 w-6" fill="none" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M10 14l2-2m0 0l2-2m-2 2l-2-2m2 2l2 2m7-2a9 9 0 11-18 0 9 9 0 0118 0z" /></svg>
            <div>
                <h3 class="font-bold">{title}</h3>
                <div class="text-sm">{description}</div>
            </div>
        </div>
    }
}

#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
    /// 操作按钮
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-16 bg-base-100 rounded-box shadow text-center">
            <h3 class="text-xl font-semibold mb-2">{title}</h3>
            {description.map(|d| view! { <p class="text-base-content/70 mb-6 max-w-md">{d}</p> })}
            {children.map(|c| view! { <div class="mt-2">{c()}</div> })}
        </div>
    }
}

// ============================================================================
// 通知 (Toast)
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
struct Toast {
    id: u64,
    message: String,
    is_error: bool,
}

/// 通知服务，3 秒后自动消失
#[derive(Clone, Copy)]
pub struct Toaster {
    current: RwSignal<Option<Toast>>,
    next_id: StoredValue<u64>,
}

impl Toaster {
    fn show(&self, message: String, is_error: bool) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.current.set(Some(Toast { id, message, is_error }));

        // 只清除自己这一条，后来的通知不受影响
        let current = self.current;
        set_timeout(
            move || {
                if current.with_untracked(|t| t.as_ref().is_some_and(|t| t.id == id)) {
                    current.set(None);
                }
            },
            TOAST_DURATION,
        );
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(message.into(), false);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(message.into(), true);
    }
}

pub fn provide_toaster() -> Toaster {
    let toaster = Toaster {
        current: RwSignal::new(None),
        next_id: StoredValue::new(0),
    };
    provide_context(toaster);
    toaster
}

pub fn use_toaster() -> Toaster {
    use_context::<Toaster>().expect("Toaster should be provided")
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toaster = use_toaster();

    move || {
        toaster.current.get().map(|toast| {
            let class = if toast.is_error {
                "alert alert-error shadow-lg"
            } else {
                "alert alert-success shadow-lg"
            };
            view! {
                <div class="toast toast-top toast-end z-50">
                    <div class=class>
                        <span>{toast.message}</span>
                    </div>
                </div>
            }
        })
    }
}
