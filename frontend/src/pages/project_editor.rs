//! 创建与编辑项目
//!
//! 两个页面共用 [`ProjectFields`]；编辑页先加载项目再填充表单。

use crate::auth::use_auth;
use crate::components::feedback::{ErrorMessage, LoadingMessage, use_toaster};
use crate::components::icons::{ArrowLeft, Trash};
use crate::components::navbar::Layout;
use crate::components::project_form::ProjectFields;
use crate::components::project_form::form_state::ProjectFormState;
use crate::components::protected::ProtectedRoute;
use crate::hooks::use_project_detail;
use crate::web::route::AppRoute;
use crate::web::router::{Link, use_router};
use leptos::prelude::*;
use leptos::task::spawn_local;
use proyectalia::can_edit;
use proyectalia_shared::Id;

#[component]
pub fn CreateProjectPage() -> impl IntoView {
    view! {
        <ProtectedRoute>
            <Layout>
                <ProjectEditor id=None />
            </Layout>
        </ProtectedRoute>
    }
}

#[component]
pub fn EditProjectPage(id: Id) -> impl IntoView {
    view! {
        <ProtectedRoute>
            <Layout>
                <ProjectEditor id=Some(id) />
            </Layout>
        </ProtectedRoute>
    }
}

#[component]
fn ProjectEditor(id: Option<Id>) -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let toaster = use_toaster();
    let state = ProjectFormState::new();

    let (is_submitting, set_is_submitting) = signal(false);
    let (is_deleting, set_is_deleting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    // 编辑模式：加载完成后填充一次
    let existing = id.map(|id| use_project_detail(Signal::stored(id)));
    if let Some(existing) = existing {
        Effect::new(move |loaded: Option<bool>| {
            if loaded == Some(true) {
                return true;
            }
            match existing.data() {
                Some(project) => {
                    state.load(&project);
                    true
                }
                None => false,
            }
        });
    }

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = match state.to_draft() {
            Ok(draft) => draft,
            Err(message) => {
                set_error_msg.set(Some(message));
                return;
            }
        };

        set_is_submitting.set(true);
        set_error_msg.set(None);

        spawn_local(async move {
            let api = auth.api();
            let result = match id {
                Some(id) => api.update_project(id, draft).await,
                None => api.create_project(draft).await,
            };
            set_is_submitting.set(false);
            match result {
                Ok(project) => {
                    if id.is_some() {
                        toaster.success("Project updated.");
                        router.go(AppRoute::MyProjects);
                    } else {
                        toaster.success("Project created.");
                        router.go(AppRoute::ProjectDetail(project.id));
                    }
                }
                Err(e) => set_error_msg.set(Some(e.user_message("Could not save the project."))),
            }
        });
    };

    let on_delete = move |_: leptos::ev::MouseEvent| {
        let Some(id) = id else {
            return;
        };
        let confirmed = window()
            .confirm_with_message("Delete this project? This cannot be undone.")
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        set_is_deleting.set(true);
        spawn_local(async move {
            let result = auth.api().delete_project(id).await;
            set_is_deleting.set(false);
            match result {
                Ok(()) => {
                    toaster.success("Project deleted.");
                    router.go(AppRoute::MyProjects);
                }
                Err(e) => toaster.error(e.user_message("Could not delete the project.")),
            }
        });
    };

    let form = move || {
        view! {
            <form class="card bg-base-100 shadow" on:submit=on_submit>
                <div class="card-body gap-4">
                    <Show when=move || error_msg.get().is_some()>
                        <div role="alert" class="alert alert-error text-sm py-2">
                            <span>{move || error_msg.get().unwrap_or_default()}</span>
                        </div>
                    </Show>

                    <ProjectFields state=state />

                    <div class="card-actions justify-between mt-4">
                        {id.map(|_| view! {
                            <button type="button" class="btn btn-error btn-outline"
                                disabled=move || is_deleting.get()
                                on:click=on_delete
                            >
                                <Trash attr:class="h-4 w-4" />
                                "Delete project"
                            </button>
                        })}
                        <button type="submit" class="btn btn-primary ml-auto" disabled=move || is_submitting.get()>
                            {move || match (is_submitting.get(), id.is_some()) {
                                (true, _) => view! { <span class="loading loading-spinner"></span> "Saving..." }.into_any(),
                                (false, true) => "Save changes".into_any(),
                                (false, false) => "Publish project".into_any(),
                            }}
                        </button>
                    </div>
                </div>
            </form>
        }
    };

    view! {
        <div class="max-w-3xl mx-auto">
            <div class="mb-6">
                <Link to=id.map(AppRoute::ProjectDetail).unwrap_or(AppRoute::MyProjects) class="link link-primary flex items-center gap-2">
                    <ArrowLeft attr:class="h-4 w-4" />
                    "Back"
                </Link>
            </div>
            <h1 class="text-3xl font-bold mb-6">
                {if id.is_some() { "Edit project" } else { "Create a new project" }}
            </h1>

            {move || match existing {
                None => form().into_any(),
                Some(existing) => {
                    if existing.loading() && existing.data().is_none() {
                        return view! { <LoadingMessage message="Loading project..." /> }.into_any();
                    }
                    match existing.data() {
                        Some(project) if can_edit(auth.user().as_ref(), &project) => form().into_any(),
                        Some(_) => view! {
                            <ErrorMessage title="Not allowed" description="Only the creator can edit this project." />
                        }
                        .into_any(),
                        None => view! {
                            <ErrorMessage description=existing.error().unwrap_or_else(|| "Project not found.".to_string()) />
                        }
                        .into_any(),
                    }
                }
            }}
        </div>
    }
}
