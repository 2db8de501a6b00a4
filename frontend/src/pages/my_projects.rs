use crate::auth::use_auth;
use crate::components::feedback::{EmptyState, LoadingMessage};
use crate::components::icons::{Folder, Plus, Users};
use crate::components::navbar::Layout;
use crate::components::project_card::ProjectCard;
use crate::components::protected::ProtectedRoute;
use crate::hooks::use_my_projects;
use crate::web::route::AppRoute;
use crate::web::router::Link;
use leptos::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Created,
    Collaborating,
}

#[component]
pub fn MyProjectsPage() -> impl IntoView {
    view! {
        <ProtectedRoute>
            <Layout>
                <MyProjects />
            </Layout>
        </ProtectedRoute>
    }
}

#[component]
fn MyProjects() -> impl IntoView {
    let auth = use_auth();
    let lists = use_my_projects(auth);
    let tab = RwSignal::new(Tab::Created);

    let counts = move || lists.state.with(|s| s.data.as_ref().map(|(a, b)| (a.len(), b.len())).unwrap_or_default());
    let tab_class = move |t: Tab| if tab.get() == t { "tab tab-active" } else { "tab" };

    view! {
        <div class="flex flex-col md:flex-row md:items-center md:justify-between gap-4 mb-8">
            <div>
                <h1 class="text-3xl font-bold">"My projects"</h1>
                <p class="text-base-content/70">"Projects you created and projects you collaborate on."</p>
            </div>
            <Link to=AppRoute::CreateProject class="btn btn-primary">
                <Plus attr:class="h-4 w-4" />
                "New project"
            </Link>
        </div>

        <div role="tablist" class="tabs tabs-boxed mb-6 w-fit">
            <a role="tab" class=move || tab_class(Tab::Created) on:click=move |_| tab.set(Tab::Created)>
                <Folder attr:class="h-4 w-4 mr-1" />
                {move || format!("Created ({})", counts().0)}
            </a>
            <a role="tab" class=move || tab_class(Tab::Collaborating) on:click=move |_| tab.set(Tab::Collaborating)>
                <Users attr:class="h-4 w-4 mr-1" />
                {move || format!("Collaborating ({})", counts().1)}
            </a>
        </div>

        {move || {
            if lists.loading() && lists.state.with(|s| s.data.is_none()) {
                return view! { <LoadingMessage message="Loading your projects..." /> }.into_any();
            }
            let (created, collaborating) = lists.data().unwrap_or_default();
            let (projects, empty_title, empty_text) = match tab.get() {
                Tab::Created => (created, "You have not created any projects", "Publish your first idea and find collaborators."),
                Tab::Collaborating => (collaborating, "You are not collaborating on any project", "Explore projects and apply to the ones you like."),
            };
            if projects.is_empty() {
                return view! {
                    <EmptyState title=empty_title description=empty_text>
                        <Link to=AppRoute::Explore class="btn btn-outline btn-primary">"Explore projects"</Link>
                    </EmptyState>
                }
                .into_any();
            }
            let owned = tab.get() == Tab::Created;
            view! {
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {projects
                        .into_iter()
                        .map(|project| {
                            let id = project.id;
                            if owned {
                                view! {
                                    <ProjectCard project=project>
                                        <Link to=AppRoute::EditProject(id) class="btn btn-ghost btn-sm">"Edit"</Link>
                                        <Link to=AppRoute::Applications(id) class="btn btn-primary btn-sm">"Applications"</Link>
                                    </ProjectCard>
                                }
                                .into_any()
                            } else {
                                view! { <ProjectCard project=project /> }.into_any()
                            }
                        })
                        .collect_view()}
                </div>
            }
            .into_any()
        }}
    }
}
