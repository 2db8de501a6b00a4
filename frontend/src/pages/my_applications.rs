use crate::auth::use_auth;
use crate::components::feedback::{EmptyState, ErrorMessage, LoadingMessage};
use crate::components::icons::Calendar;
use crate::components::navbar::Layout;
use crate::components::protected::ProtectedRoute;
use crate::hooks::use_my_applications;
use crate::web::route::AppRoute;
use crate::web::router::Link;
use leptos::prelude::*;
use proyectalia_shared::date::display_optional_date;
use proyectalia_shared::{CollaborationRequest, RequestFilter, RequestStatus};

const TABS: [RequestFilter; 4] = [
    RequestFilter::All,
    RequestFilter::Status(RequestStatus::Pending),
    RequestFilter::Status(RequestStatus::Accepted),
    RequestFilter::Status(RequestStatus::Rejected),
];

#[component]
pub fn MyApplicationsPage() -> impl IntoView {
    view! {
        <ProtectedRoute>
            <Layout>
                <MyApplications />
            </Layout>
        </ProtectedRoute>
    }
}

#[component]
fn MyApplications() -> impl IntoView {
    let auth = use_auth();
    let applications = use_my_applications(auth);
    let filter = RwSignal::new(RequestFilter::All);

    let count = move |f: &RequestFilter| {
        applications
            .state
            .with(|s| s.data.as_ref().map(|list| f.apply(list).len()).unwrap_or(0))
    };

    view! {
        <h1 class="text-3xl font-bold">"My applications"</h1>
        <p class="text-base-content/70 mb-8">"Track the requests you sent to other projects."</p>

        <div role="tablist" class="tabs tabs-boxed mb-6 w-fit">
            {TABS
                .into_iter()
                .map(|tab| {
                    let label = tab.label();
                    let active = tab.clone();
                    let counted = tab.clone();
                    view! {
                        <a
                            role="tab"
                            class=move || if filter.with(|f| *f == active) { "tab tab-active" } else { "tab" }
                            on:click=move |_| filter.set(tab.clone())
                        >
                            {move || format!("{label} ({})", count(&counted))}
                        </a>
                    }
                })
                .collect_view()}
        </div>

        {move || {
            if applications.loading() && applications.state.with(|s| s.data.is_none()) {
                return view! { <LoadingMessage message="Loading your applications..." /> }.into_any();
            }
            if let Some(error) = applications.error() {
                return view! { <ErrorMessage description=error /> }.into_any();
            }
            let list = applications.data().unwrap_or_default();
            let shown: Vec<CollaborationRequest> = filter.with(|f| f.apply(&list).into_iter().cloned().collect());
            if shown.is_empty() {
                return view! {
                    <EmptyState title="No applications here" description="Apply to a project to see it in this list.">
                        <Link to=AppRoute::Explore class="btn btn-outline btn-primary">"Explore projects"</Link>
                    </EmptyState>
                }
                .into_any();
            }
            view! {
                <div class="space-y-4">
                    {shown.into_iter().map(|request| view! { <ApplicationRow request=request /> }).collect_view()}
                </div>
            }
            .into_any()
        }}
    }
}

#[component]
fn ApplicationRow(request: CollaborationRequest) -> impl IntoView {
    let colors = request.status.colors();
    let project = request.project.clone();

    view! {
        <div class=format!("card bg-base-100 shadow border-l-4 {}", colors.border)>
            <div class="card-body">
                <div class="flex flex-col md:flex-row md:items-center md:justify-between gap-2">
                    <div>
                        {match project {
                            Some(p) => view! {
                                <Link to=AppRoute::ProjectDetail(p.id) class="link link-hover text-lg font-semibold">
                                    {p.title.clone()}
                                </Link>
                                {p.area_theme.map(|area| view! { <span class="badge badge-outline ml-2">{area}</span> })}
                            }
                            .into_any(),
                            None => view! { <span class="text-lg font-semibold">"Deleted project"</span> }.into_any(),
                        }}
                        <p class="flex items-center gap-1 text-sm text-base-content/60 mt-1">
                            <Calendar attr:class="h-4 w-4" />
                            {display_optional_date(request.created_at.as_deref())}
                        </p>
                    </div>
                    <span class=format!("badge {}", colors.badge)>{request.status.label()}</span>
                </div>
                {(!request.message.trim().is_empty()).then(|| view! {
                    <p class="bg-base-200 rounded-box p-3 mt-2 whitespace-pre-line">{request.message.clone()}</p>
                })}
            </div>
        </div>
    }
}
