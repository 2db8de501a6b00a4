//! 项目详情页
//!
//! 申请按钮是否出现由 [`ApplicationGate`] 决定；提交本身始终交给后端判断。

use crate::auth::{AuthContext, use_auth};
use crate::components::feedback::{ErrorMessage, LoadingMessage, use_toaster};
use crate::components::icons::{ArrowLeft, Calendar, Pencil, Users};
use crate::components::navbar::Layout;
use crate::hooks::{use_my_applications, use_project_detail};
use crate::web::route::AppRoute;
use crate::web::router::Link;
use leptos::prelude::*;
use leptos::task::spawn_local;
use proyectalia::{ApplicationGate, ApplyDecision, can_edit};
use proyectalia_shared::date::display_optional_date;
use proyectalia_shared::{Id, Project, UserSummary};

/// 每行一个目标，忽略空行
fn objective_lines(objectives: &str) -> Vec<String> {
    objectives
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

#[component]
pub fn ProjectDetailPage(id: Id) -> impl IntoView {
    let project = use_project_detail(Signal::stored(id));

    view! {
        <Layout>
            <div class="mb-6">
                <Link to=AppRoute::Explore class="link link-primary flex items-center gap-2">
                    <ArrowLeft attr:class="h-4 w-4" />
                    "Back to projects"
                </Link>
            </div>
            {move || {
                if project.loading() && project.data().is_none() {
                    return view! { <LoadingMessage message="Loading project..." /> }.into_any();
                }
                match (project.data(), project.error()) {
                    (Some(p), None) => view! { <ProjectView project=p /> }.into_any(),
                    (_, error) => view! {
                        <ErrorMessage description=error.unwrap_or_else(|| "Project not found.".to_string()) />
                    }
                    .into_any(),
                }
            }}
        </Layout>
    }
}

#[component]
fn ProjectView(project: Project) -> impl IntoView {
    let auth = use_auth();
    let owner = can_edit(auth.user().as_ref(), &project);
    let created = display_optional_date(project.created_at.as_deref());
    let objectives = objective_lines(&project.objectives);
    let creator = project.creator.clone();
    let team = project.collaborators.clone();
    let skills = project.skill_list();
    let id = project.id;

    view! {
        <div class="card bg-base-100 shadow-lg mb-8">
            <div class="card-body">
                <div class="flex flex-col md:flex-row md:items-start md:justify-between gap-6">
                    <div>
                        <div class="flex items-center gap-2 mb-3">
                            <span class=project.status.badge_class()>{project.status.label()}</span>
                            <span class="badge badge-outline">{project.area_theme.clone()}</span>
                        </div>
                        <h1 class="text-3xl md:text-4xl font-bold mb-4">{project.title.clone()}</h1>
                        <div class="flex items-center gap-4 text-base-content/70">
                            {creator.clone().map(|c| view! {
                                <Link to=AppRoute::Profile(c.id) class="link link-hover link-primary font-medium">
                                    {c.name}
                                </Link>
                            })}
                            <span class="flex items-center gap-1">
                                <Calendar attr:class="h-4 w-4" />
                                {created}
                            </span>
                        </div>
                    </div>

                    <div class="flex flex-wrap gap-3">
                        {if owner {
                            view! {
                                <Link to=AppRoute::EditProject(id) class="btn btn-outline btn-primary">
                                    <Pencil attr:class="h-4 w-4" />
                                    "Edit project"
                                </Link>
                                <Link to=AppRoute::Applications(id) class="btn btn-primary">
                                    <Users attr:class="h-4 w-4" />
                                    "View applications"
                                </Link>
                            }
                            .into_any()
                        } else {
                            view! { <ApplyPanel auth=auth project=project.clone() /> }.into_any()
                        }}
                    </div>
                </div>
            </div>
        </div>

        <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
            <div class="lg:col-span-2 space-y-8">
                <section class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title">"Description"</h2>
                        <p class="whitespace-pre-line">{project.description.clone()}</p>
                    </div>
                </section>

                <section class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title">"Objectives"</h2>
                        <ul class="space-y-3">
                            {objectives
                                .into_iter()
                                .enumerate()
                                .map(|(i, objective)| view! {
                                    <li class="flex items-start gap-3">
                                        <span class="badge badge-primary badge-outline">{i + 1}</span>
                                        <span>{objective}</span>
                                    </li>
                                })
                                .collect_view()}
                        </ul>
                    </div>
                </section>

                <section class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title">"Team"</h2>
                        <div class="space-y-3">
                            {creator.map(|c| view! { <Member member=c role="Creator" /> })}
                            {team
                                .into_iter()
                                .map(|c| view! { <Member member=c role="Collaborator" /> })
                                .collect_view()}
                        </div>
                    </div>
                </section>
            </div>

            <aside class="space-y-6">
                <section class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title">"Required skills"</h2>
                        <div class="flex flex-wrap gap-2">
                            {skills.into_iter().map(|s| view! { <span class="badge badge-ghost">{s}</span> }).collect_view()}
                        </div>
                    </div>
                </section>
                <section class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title">"Collaborators"</h2>
                        <p>
                            {format!(
                                "{} of {} positions filled",
                                project.collaborators.len(),
                                project.collaborators_needed
                            )}
                        </p>
                    </div>
                </section>
            </aside>
        </div>
    }
}

#[component]
fn Member(member: UserSummary, role: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-center justify-between p-3 bg-base-200 rounded-box">
            <div class="flex items-center gap-3">
                <div class="avatar placeholder">
                    <div class="bg-primary/10 text-primary rounded-full w-10">
                        <span>{member.initials()}</span>
                    </div>
                </div>
                <Link to=AppRoute::Profile(member.id) class="link link-hover font-medium">
                    {member.name.clone()}
                </Link>
            </div>
            <span class="badge badge-outline">{role}</span>
        </div>
    }
}

/// 申请区：按钮、表单或不可申请的原因
#[component]
fn ApplyPanel(auth: AuthContext, project: Project) -> impl IntoView {
    let toaster = use_toaster();
    let my_requests = use_my_applications(auth);
    let project = StoredValue::new(project);

    let (open, set_open) = signal(false);
    let (message, set_message) = signal(String::new());
    let (sending, set_sending) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let decision = Memo::new(move |_| {
        let user = auth.user();
        let requests = my_requests.state.with(|s| s.data.clone());
        project.with_value(|p| ApplicationGate::evaluate_loaded(user.as_ref(), p, requests.as_deref()))
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_sending.set(true);
        set_error_msg.set(None);
        let project_id = project.with_value(|p| p.id);
        let text = message.get_untracked();
        spawn_local(async move {
            match auth.api().apply(project_id, text).await {
                Ok(_) => {
                    set_open.set(false);
                    set_message.set(String::new());
                    toaster.success("Your request was sent.");
                    my_requests.reload();
                }
                Err(e) => set_error_msg.set(Some(e.user_message("Could not send the request."))),
            }
            set_sending.set(false);
        });
    };

    move || match decision.get() {
        ApplyDecision::Checking => match my_requests.error() {
            Some(e) => view! {
                <div class="alert alert-error text-sm max-w-sm">
                    <span>{e}</span>
                    <button class="btn btn-sm" on:click=move |_| my_requests.reload()>"Retry"</button>
                </div>
            }
            .into_any(),
            None => view! { <span class="loading loading-spinner"></span> }.into_any(),
        },
        ApplyDecision::SignInRequired => view! {
            <Link to=AppRoute::Login class="btn btn-primary">"Sign in to apply"</Link>
        }
        .into_any(),
        ApplyDecision::Allowed if !open.get() => view! {
            <button class="btn btn-primary" on:click=move |_| set_open.set(true)>
                "Apply to this project"
            </button>
        }
        .into_any(),
        ApplyDecision::Allowed => view! {
            <form class="space-y-2 w-full md:w-80" on:submit=on_submit>
                <textarea
                    class="textarea textarea-bordered w-full"
                    rows="3"
                    placeholder="Motivation message (optional)"
                    prop:value=message
                    on:input=move |ev| set_message.set(event_target_value(&ev))
                ></textarea>
                <div class="flex gap-2">
                    <button type="submit" class="btn btn-primary" disabled=move || sending.get()>"Send"</button>
                    <button type="button" class="btn btn-ghost" on:click=move |_| set_open.set(false)>"Cancel"</button>
                </div>
                {move || error_msg.get().map(|e| view! { <p class="text-error text-sm">{e}</p> })}
            </form>
        }
        .into_any(),
        other => other
            .message()
            .map(|text| view! { <div class="alert text-sm max-w-sm">{text}</div> })
            .into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn objectives_split_per_line() {
        let lines = objective_lines("Medir huella\n\n  Reducir residuos  \n");
        assert_eq!(lines, vec!["Medir huella".to_string(), "Reducir residuos".to_string()]);
    }
}
