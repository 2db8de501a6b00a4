//! 项目表单组件
//!
//! 创建与编辑页共用的输入字段，纯粹的表单渲染，提交由页面处理。

pub mod form_state;
pub mod tag_input;

use leptos::prelude::*;
use proyectalia_shared::{AREAS, SKILLS};

use form_state::ProjectFormState;
use tag_input::TagInput;

#[component]
pub fn ProjectFields(state: ProjectFormState) -> impl IntoView {
    view! {
        <div class="form-control">
            <label for="title" class="label">
                <span class="label-text">"Project title"</span>
            </label>
            <input id="title" required
                type="text"
                placeholder="e.g. EcoTrack, a sustainability app"
                on:input=move |ev| state.title.set(event_target_value(&ev))
                prop:value=move || state.title.get()
                class="input input-bordered w-full"
            />
        </div>

        <div class="form-control">
            <label for="description" class="label">
                <span class="label-text">"Description"</span>
            </label>
            <textarea id="description" required
                rows="6"
                placeholder="Purpose, scope and anything collaborators should know..."
                on:input=move |ev| state.description.set(event_target_value(&ev))
                prop:value=move || state.description.get()
                class="textarea textarea-bordered w-full"
            ></textarea>
        </div>

        <div class="form-control">
            <label for="objectives" class="label">
                <span class="label-text">"Objectives"</span>
            </label>
            <textarea id="objectives"
                rows="4"
                placeholder="One objective per line"
                on:input=move |ev| state.objectives.set(event_target_value(&ev))
                prop:value=move || state.objectives.get()
                class="textarea textarea-bordered w-full"
            ></textarea>
        </div>

        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
            <div class="form-control">
                <label class="label">
                    <span class="label-text">"Thematic area"</span>
                </label>
                <select
                    class="select select-bordered w-full"
                    on:change=move |ev| state.area.set(event_target_value(&ev))
                >
                    <option value="" disabled selected=move || state.area.get().is_empty()>
                        "Select an area"
                    </option>
                    {AREAS
                        .iter()
                        .map(|area| {
                            view! {
                                <option value=*area selected=move || state.area.get() == *area>
                                    {*area}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>

            <div class="form-control">
                <label for="collaborators" class="label">
                    <span class="label-text">"Collaborators needed"</span>
                </label>
                <input id="collaborators" required
                    type="number"
                    min="1"
                    on:input=move |ev| state.collaborators_needed.set(event_target_value(&ev))
                    prop:value=move || state.collaborators_needed.get()
                    class="input input-bordered w-full"
                />
            </div>
        </div>

        <div class="form-control">
            <label class="label">
                <span class="label-text">"Required skills"</span>
            </label>
            <TagInput tags=state.skills suggestions=SKILLS placeholder="Add a skill (React, Python, UX design...)" />
        </div>
    }
}
