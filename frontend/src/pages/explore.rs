use crate::components::feedback::{EmptyState, ErrorMessage, LoadingMessage};
use crate::components::icons::Search;
use crate::components::navbar::Layout;
use crate::components::project_card::ProjectCard;
use crate::hooks::use_projects;
use leptos::prelude::*;
use proyectalia_shared::{AREAS, Project, ProjectFilter, SKILLS};

#[component]
pub fn ExplorePage() -> impl IntoView {
    let filter = RwSignal::new(ProjectFilter::default());
    let projects = use_projects(filter.into());

    // 后端已按查询过滤；这里再按当前输入做一次即时的显示过滤
    let visible = move || -> Option<Vec<Project>> {
        let list = projects.data()?;
        filter.with(|f| Some(list.into_iter().filter(|p| f.matches(p)).collect()))
    };

    let on_area = move |ev: leptos::ev::Event| {
        let area = event_target_value(&ev);
        filter.update(|f| f.area = area);
    };

    view! {
        <Layout>
            <div class="mb-8">
                <h1 class="text-3xl font-bold">"Explore projects"</h1>
                <p class="text-base-content/70 mt-1">
                    "Find a student project that matches your skills and interests."
                </p>
            </div>

            <div class="card bg-base-100 shadow mb-8">
                <div class="card-body gap-4">
                    <div class="flex flex-col md:flex-row gap-3">
                        <label class="input input-bordered flex items-center gap-2 flex-1">
                            <Search attr:class="h-4 w-4 opacity-60" />
                            <input
                                type="text"
                                class="grow"
                                placeholder="Search by title or description..."
                                prop:value=move || filter.with(|f| f.search.clone())
                                on:input=move |ev| {
                                    let search = event_target_value(&ev);
                                    filter.update(|f| f.search = search);
                                }
                            />
                        </label>
                        <select class="select select-bordered md:w-64" on:change=on_area>
                            <option value="" selected=move || filter.with(|f| f.area.is_empty())>
                                "All areas"
                            </option>
                            {AREAS
                                .iter()
                                .map(|area| view! {
                                    <option value=*area selected=move || filter.with(|f| f.area == *area)>
                                        {*area}
                                    </option>
                                })
                                .collect_view()}
                        </select>
                        <Show when=move || filter.with(|f| !f.is_empty())>
                            <button class="btn btn-ghost" on:click=move |_| filter.set(ProjectFilter::default())>
                                "Clear filters"
                            </button>
                        </Show>
                    </div>

                    <div class="flex flex-wrap gap-2">
                        {SKILLS
                            .iter()
                            .map(|skill| {
                                let active = move || filter.with(|f| f.skills.iter().any(|s| s == skill));
                                view! {
                                    <button
                                        type="button"
                                        class=move || if active() { "badge badge-primary cursor-pointer" } else { "badge badge-outline cursor-pointer" }
                                        on:click=move |_| filter.update(|f| f.toggle_skill(skill))
                                    >
                                        {*skill}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>

            {move || {
                if projects.loading() && projects.data().is_none() {
                    return view! { <LoadingMessage message="Loading projects..." /> }.into_any();
                }
                if let Some(error) = projects.error() {
                    return view! { <ErrorMessage description=error /> }.into_any();
                }
                match visible() {
                    Some(list) if !list.is_empty() => view! {
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                            {list.into_iter().map(|project| view! { <ProjectCard project=project /> }).collect_view()}
                        </div>
                    }
                    .into_any(),
                    _ => view! {
                        <EmptyState
                            title="No projects found"
                            description="Try other keywords or clear the filters."
                        />
                    }
                    .into_any(),
                }
            }}
        </Layout>
    }
}
