//! 个人资料页
//!
//! 只能查看自己的资料；其他用户的 id 显示未授权。

use crate::auth::use_auth;
use crate::components::feedback::{ErrorMessage, LoadingMessage};
use crate::components::icons::{ExternalLink, Github, Linkedin, Pencil, Twitter};
use crate::components::navbar::Layout;
use crate::components::project_card::ProjectCard;
use crate::hooks::use_my_projects;
use crate::web::route::AppRoute;
use crate::web::router::Link;
use leptos::prelude::*;
use proyectalia_shared::{Id, Project, User};

#[component]
pub fn ProfilePage(id: Id) -> impl IntoView {
    let auth = use_auth();

    view! {
        <Layout>
            {move || {
                if auth.session.with(|s| s.is_loading()) {
                    return view! { <LoadingMessage message="Loading profile..." /> }.into_any();
                }
                match auth.user() {
                    Some(user) if user.id == id => view! { <OwnProfile user=user /> }.into_any(),
                    _ => view! { <ErrorMessage title="Not authorized" description="You can only view your own profile." /> }.into_any(),
                }
            }}
        </Layout>
    }
}

/// 外部链接按钮，空字段不显示
fn social_link(url: Option<String>, label: &'static str, icon: AnyView) -> Option<AnyView> {
    let url = url.filter(|u| !u.trim().is_empty())?;
    Some(view! {
        <a href=url target="_blank" rel="noopener noreferrer" class="btn btn-outline btn-sm">
            {icon}
            {label}
        </a>
    }
    .into_any())
}

#[component]
fn OwnProfile(user: User) -> impl IntoView {
    let auth = use_auth();
    let lists = use_my_projects(auth);
    let skills = user.skill_list();
    let interests = user.interest_list();

    view! {
        <div class="card bg-base-100 shadow-lg overflow-hidden">
            <div class="h-32 bg-gradient-to-r from-primary to-secondary relative">
                <Link to=AppRoute::EditProfile class="btn btn-circle btn-sm absolute top-4 right-4">
                    <Pencil attr:class="h-4 w-4" />
                </Link>
            </div>
            <div class="card-body">
                <div class="flex flex-col md:flex-row md:items-end gap-4 -mt-16">
                    <div class="avatar placeholder">
                        <div class="bg-base-100 text-primary rounded-full w-28 ring ring-base-100 text-3xl">
                            <span>{user.initials()}</span>
                        </div>
                    </div>
                    <div class="flex-1">
                        <h1 class="text-3xl font-bold">{user.name.clone()}</h1>
                        <p class="text-base-content/70">{user.headline()}</p>
                    </div>
                    <div class="flex flex-wrap gap-2">
                        {social_link(user.portfolio.clone(), "Portfolio", view! { <ExternalLink attr:class="h-4 w-4" /> }.into_any())}
                        {social_link(user.github.clone(), "GitHub", view! { <Github attr:class="h-4 w-4" /> }.into_any())}
                        {social_link(user.linkedin.clone(), "LinkedIn", view! { <Linkedin attr:class="h-4 w-4" /> }.into_any())}
                        {social_link(user.twitter.clone(), "Twitter", view! { <Twitter attr:class="h-4 w-4" /> }.into_any())}
                    </div>
                </div>

                <section class="mt-6">
                    <h2 class="text-xl font-semibold mb-2">"About"</h2>
                    <p class="whitespace-pre-line">{user.bio.clone().unwrap_or_default()}</p>
                </section>

                <div class="mt-6 grid grid-cols-1 md:grid-cols-2 gap-6">
                    <TagList title="Skills" tags=skills />
                    <TagList title="Interests" tags=interests />
                </div>
            </div>
        </div>

        {move || {
            if lists.loading() && lists.state.with(|s| s.data.is_none()) {
                return view! { <LoadingMessage message="Loading projects..." /> }.into_any();
            }
            let (created, collaborating) = lists.data().unwrap_or_default();
            view! {
                <ProjectSection title="My projects" projects=created />
                <ProjectSection title="Collaborations" projects=collaborating />
            }
            .into_any()
        }}
    }
}

#[component]
fn TagList(title: &'static str, tags: Vec<String>) -> impl IntoView {
    view! {
        <section>
            <h2 class="text-xl font-semibold mb-2">{title}</h2>
            <div class="flex flex-wrap gap-2">
                {if tags.is_empty() {
                    view! { <span class="text-base-content/60">"Nothing added yet"</span> }.into_any()
                } else {
                    tags.into_iter().map(|t| view! { <span class="badge badge-primary badge-outline">{t}</span> }).collect_view().into_any()
                }}
            </div>
        </section>
    }
}

#[component]
fn ProjectSection(title: &'static str, projects: Vec<Project>) -> impl IntoView {
    view! {
        <section class="mt-8">
            <h2 class="text-2xl font-bold mb-4">{format!("{title} ({})", projects.len())}</h2>
            {if projects.is_empty() {
                view! { <p class="text-base-content/60">"No projects yet."</p> }.into_any()
            } else {
                view! {
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                        {projects.into_iter().map(|p| view! { <ProjectCard project=p /> }).collect_view()}
                    </div>
                }
                .into_any()
            }}
        </section>
    }
}
