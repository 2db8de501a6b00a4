//! 项目申请管理（仅项目创建者）

use crate::auth::use_auth;
use crate::components::feedback::{EmptyState, ErrorMessage, LoadingMessage, use_toaster};
use crate::components::icons::{ArrowLeft, Check, MessageSquare, X};
use crate::components::navbar::Layout;
use crate::components::protected::ProtectedRoute;
use crate::hooks::{Fetch, use_project_detail, use_project_requests};
use crate::web::route::AppRoute;
use crate::web::router::Link;
use leptos::prelude::*;
use leptos::task::spawn_local;
use proyectalia_shared::date::display_optional_date;
use proyectalia_shared::{CollaborationRequest, Id, RequestStatus};

#[component]
pub fn ApplicationsPage(id: Id) -> impl IntoView {
    view! {
        <ProtectedRoute>
            <Layout>
                <Applications id=id />
            </Layout>
        </ProtectedRoute>
    }
}

#[component]
fn Applications(id: Id) -> impl IntoView {
    let project = use_project_detail(Signal::stored(id));
    let requests = use_project_requests(Signal::stored(id));

    let title = move || {
        project
            .state
            .with(|s| s.data.as_ref().map(|p| p.title.clone()))
            .unwrap_or_default()
    };

    view! {
        <div class="mb-6">
            <Link to=AppRoute::ProjectDetail(id) class="link link-primary flex items-center gap-2">
                <ArrowLeft attr:class="h-4 w-4" />
                "Back to project"
            </Link>
        </div>
        <h1 class="text-3xl font-bold">"Applications"</h1>
        <p class="text-base-content/70 mb-8">{title}</p>

        {move || {
            if requests.loading() && requests.data().is_none() {
                return view! { <LoadingMessage message="Loading applications..." /> }.into_any();
            }
            if let Some(error) = requests.error() {
                return view! { <ErrorMessage description=error /> }.into_any();
            }
            let list = requests.data().unwrap_or_default();
            if list.is_empty() {
                return view! {
                    <EmptyState
                        title="No applications yet"
                        description="When students apply to this project they will show up here."
                    />
                }
                .into_any();
            }
            view! {
                <div class="space-y-4">
                    {list
                        .into_iter()
                        .map(|request| view! { <RequestCard request=request requests=requests /> })
                        .collect_view()}
                </div>
            }
            .into_any()
        }}
    }
}

#[component]
fn RequestCard(request: CollaborationRequest, requests: Fetch<Vec<CollaborationRequest>>) -> impl IntoView {
    let auth = use_auth();
    let toaster = use_toaster();
    let (busy, set_busy) = signal(false);
    let request_id = request.id;
    let colors = request.status.colors();
    let pending = request.status == RequestStatus::Pending;

    let decide = move |status: RequestStatus| {
        set_busy.set(true);
        spawn_local(async move {
            let result = auth.api().update_request_status(request_id, status.clone()).await;
            set_busy.set(false);
            match result {
                Ok(()) => {
                    let accepted = status == RequestStatus::Accepted;
                    // 本地更新状态，无需重新请求
                    requests.mutate(|list| {
                        if let Some(r) = list.iter_mut().find(|r| r.id == request_id) {
                            r.status = status;
                        }
                    });
                    if accepted {
                        toaster.success("Request accepted. The student joined the team.");
                    } else {
                        toaster.success("Request rejected.");
                    }
                }
                Err(e) => toaster.error(e.user_message("Could not update the request.")),
            }
        });
    };

    let applicant = request.applicant.clone();

    view! {
        <div class=format!("card bg-base-100 shadow border-l-4 {}", colors.border)>
            <div class="card-body">
                <div class="flex flex-col md:flex-row md:items-center md:justify-between gap-4">
                    <div class="flex items-center gap-3">
                        {applicant.map(|a| view! {
                            <div class="avatar placeholder">
                                <div class="bg-primary/10 text-primary rounded-full w-10">
                                    <span>{a.initials()}</span>
                                </div>
                            </div>
                            <div>
                                <Link to=AppRoute::Profile(a.id) class="link link-hover font-semibold">
                                    {a.name.clone()}
                                </Link>
                                <p class="text-sm text-base-content/60">
                                    {display_optional_date(request.created_at.as_deref())}
                                </p>
                            </div>
                        })}
                    </div>
                    <span class=format!("badge {}", colors.badge)>{request.status.label()}</span>
                </div>

                {(!request.message.trim().is_empty()).then(|| view! {
                    <div class="flex items-start gap-2 bg-base-200 rounded-box p-3 mt-2">
                        <MessageSquare attr:class="h-4 w-4 mt-1 shrink-0" />
                        <p class="whitespace-pre-line">{request.message.clone()}</p>
                    </div>
                })}

                {pending.then(|| view! {
                    <div class="card-actions justify-end mt-2">
                        <button class="btn btn-success btn-sm" disabled=move || busy.get()
                            on:click=move |_| decide(RequestStatus::Accepted)
                        >
                            <Check attr:class="h-4 w-4" />
                            "Accept"
                        </button>
                        <button class="btn btn-error btn-outline btn-sm" disabled=move || busy.get()
                            on:click=move |_| decide(RequestStatus::Rejected)
                        >
                            <X attr:class="h-4 w-4" />
                            "Reject"
                        </button>
                    </div>
                })}
            </div>
        </div>
    }
}
