use crate::components::icons::Users;
use crate::web::route::AppRoute;
use crate::web::router::Link;
use leptos::prelude::*;
use proyectalia_shared::Project;

/// 卡片上最多显示的技能数
const MAX_SKILLS: usize = 3;

#[component]
pub fn ProjectCard(
    project: Project,
    /// 卡片底部的额外操作
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let skills = project.skill_list();
    let hidden = skills.len().saturating_sub(MAX_SKILLS);
    let creator = project.creator.clone();
    let area = if project.area_theme.is_empty() {
        "No area".to_string()
    } else {
        project.area_theme.clone()
    };

    view! {
        <div class="card bg-base-100 shadow hover:shadow-lg transition-shadow">
            <div class="card-body gap-3">
                <div class="flex items-center justify-between gap-2">
                    <span class=project.status.badge_class()>{project.status.label()}</span>
                    <span class="badge badge-outline">{area}</span>
                </div>

                <h2 class="card-title">
                    <Link to=AppRoute::ProjectDetail(project.id) class="link link-hover">
                        {project.title.clone()}
                    </Link>
                </h2>
                <p class="text-base-content/70 line-clamp-3">{project.description.clone()}</p>

                <div class="flex flex-wrap gap-1">
                    {skills
                        .into_iter()
                        .take(MAX_SKILLS)
                        .map(|skill| view! { <span class="badge badge-ghost">{skill}</span> })
                        .collect_view()}
                    {(hidden > 0).then(|| view! { <span class="badge badge-ghost">{format!("+{hidden} more")}</span> })}
                </div>

                <div class="flex items-center justify-between text-sm text-base-content/60">
                    {creator.map(|c| view! {
                        <span class="flex items-center gap-2">
                            <span class="avatar placeholder">
                                <span class="bg-primary/10 text-primary rounded-full w-6 text-xs">{c.initials()}</span>
                            </span>
                            {c.name}
                        </span>
                    })}
                    <span class="flex items-center gap-1">
                        <Users attr:class="h-4 w-4" />
                        {format!("{} collaborators, {} needed", project.collaborators.len(), project.collaborators_needed)}
                    </span>
                </div>

                {children.map(|c| view! { <div class="card-actions justify-end">{c()}</div> })}
            </div>
        </div>
    }
}
