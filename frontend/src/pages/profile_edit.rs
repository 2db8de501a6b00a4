//! 编辑个人资料
//!
//! 保存前需要确认；成功后用后端返回的用户记录替换会话中的用户。

use crate::auth::{update_profile, use_auth};
use crate::components::feedback::{LoadingMessage, use_toaster};
use crate::components::navbar::Layout;
use crate::components::project_form::tag_input::TagInput;
use crate::components::protected::ProtectedRoute;
use crate::web::route::AppRoute;
use crate::web::router::{Link, use_router};
use leptos::prelude::*;
use leptos::task::spawn_local;
use proyectalia_shared::{AREAS, ProfileUpdate, SKILLS, User, join_list};
use std::time::Duration;

/// 保存成功后停留的时间，让用户看到通知
const REDIRECT_DELAY: Duration = Duration::from_millis(1200);

#[derive(Clone, Copy)]
struct ProfileForm {
    name: RwSignal<String>,
    career: RwSignal<String>,
    university: RwSignal<String>,
    bio: RwSignal<String>,
    skills: RwSignal<Vec<String>>,
    interests: RwSignal<Vec<String>>,
    portfolio: RwSignal<String>,
    github: RwSignal<String>,
    linkedin: RwSignal<String>,
    twitter: RwSignal<String>,
}

impl ProfileForm {
    fn new(user: &User) -> Self {
        let update = ProfileUpdate::from(user);
        Self {
            name: RwSignal::new(update.name),
            career: RwSignal::new(update.career),
            university: RwSignal::new(update.university),
            bio: RwSignal::new(update.bio),
            skills: RwSignal::new(user.skill_list()),
            interests: RwSignal::new(user.interest_list()),
            portfolio: RwSignal::new(update.portfolio),
            github: RwSignal::new(update.github),
            linkedin: RwSignal::new(update.linkedin),
            twitter: RwSignal::new(update.twitter),
        }
    }

    fn to_update(self) -> ProfileUpdate {
        let text = |s: RwSignal<String>| s.get_untracked().trim().to_string();
        ProfileUpdate {
            name: text(self.name),
            career: text(self.career),
            university: text(self.university),
            bio: text(self.bio),
            skills: join_list(&self.skills.get_untracked()),
            interests: join_list(&self.interests.get_untracked()),
            portfolio: text(self.portfolio),
            github: text(self.github),
            linkedin: text(self.linkedin),
            twitter: text(self.twitter),
        }
    }
}

#[component]
pub fn EditProfilePage() -> impl IntoView {
    let auth = use_auth();

    view! {
        <ProtectedRoute>
            <Layout>
                {move || match auth.session.with_untracked(|s| s.user().cloned()) {
                    Some(user) => view! { <ProfileEditor user=user /> }.into_any(),
                    None => view! { <LoadingMessage message="Loading profile..." /> }.into_any(),
                }}
            </Layout>
        </ProtectedRoute>
    }
}

#[component]
fn ProfileEditor(user: User) -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let toaster = use_toaster();
    let form = ProfileForm::new(&user);
    let user_id = user.id;
    let (is_saving, set_is_saving) = signal(false);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if form.name.get_untracked().trim().is_empty() {
            toaster.error("Your name cannot be empty.");
            return;
        }
        let confirmed = window()
            .confirm_with_message("Save the changes to your profile?")
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        set_is_saving.set(true);
        let update = form.to_update();
        spawn_local(async move {
            let result = update_profile(&auth, update).await;
            set_is_saving.set(false);
            match result {
                Ok(_) => {
                    toaster.success("Profile updated.");
                    set_timeout(move || router.go(AppRoute::Profile(user_id)), REDIRECT_DELAY);
                }
                Err(e) => toaster.error(e.user_message("Could not save the profile.")),
            }
        });
    };

    let text_field = move |label: &'static str, kind: &'static str, value: RwSignal<String>| {
        view! {
            <div class="form-control">
                <label class="label">
                    <span class="label-text">{label}</span>
                </label>
                <input
                    type=kind
                    on:input=move |ev| value.set(event_target_value(&ev))
                    prop:value=value
                    class="input input-bordered w-full"
                />
            </div>
        }
    };

    view! {
        <div class="max-w-3xl mx-auto">
            <h1 class="text-3xl font-bold mb-6">"Edit profile"</h1>
            <form class="card bg-base-100 shadow" on:submit=on_submit>
                <div class="card-body gap-4">
                    {text_field("Full name", "text", form.name)}
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        {text_field("Career", "text", form.career)}
                        {text_field("University", "text", form.university)}
                    </div>

                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">"About you"</span>
                        </label>
                        <textarea
                            rows="4"
                            class="textarea textarea-bordered w-full"
                            on:input=move |ev| form.bio.set(event_target_value(&ev))
                            prop:value=form.bio
                        ></textarea>
                    </div>

                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">"Skills"</span>
                        </label>
                        <TagInput tags=form.skills suggestions=SKILLS placeholder="Add a skill" />
                    </div>

                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">"Interests"</span>
                        </label>
                        <TagInput tags=form.interests suggestions=AREAS placeholder="Add an interest" />
                    </div>

                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        {text_field("Portfolio", "url", form.portfolio)}
                        {text_field("GitHub", "url", form.github)}
                        {text_field("LinkedIn", "url", form.linkedin)}
                        {text_field("Twitter", "url", form.twitter)}
                    </div>

                    <div class="card-actions justify-end mt-4">
                        <Link to=AppRoute::Profile(user_id) class="btn btn-ghost">"Cancel"</Link>
                        <button type="submit" class="btn btn-primary" disabled=move || is_saving.get()>
                            {move || if is_saving.get() {
                                view! { <span class="loading loading-spinner"></span> "Saving..." }.into_any()
                            } else {
                                "Save changes".into_any()
                            }}
                        </button>
                    </div>
                </div>
            </form>
        </div>
    }
}
