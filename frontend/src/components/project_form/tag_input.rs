//! 标签输入组件
//!
//! 用于技能和兴趣：已选标签可删除，可从建议中点选，也可自由输入。

use crate::components::icons::{Plus, X};
use leptos::prelude::*;
use proyectalia_shared::list::push_unique;

#[component]
pub fn TagInput(
    /// 已选标签
    tags: RwSignal<Vec<String>>,
    /// 建议选项
    #[prop(optional)]
    suggestions: &'static [&'static str],
    #[prop(into)] placeholder: String,
) -> impl IntoView {
    let (draft, set_draft) = signal(String::new());

    let add = move |value: String| {
        tags.update(|list| {
            push_unique(list, &value);
        });
        set_draft.set(String::new());
    };

    view! {
        <div class="space-y-2">
            <div class="flex flex-wrap gap-2 min-h-8">
                <For
                    each=move || tags.get()
                    key=|tag| tag.clone()
                    children=move |tag| {
                        let removed = tag.clone();
                        view! {
                            <span class="badge badge-primary badge-outline gap-1 py-3">
                                {tag}
                                <button
                                    type="button"
                                    class="btn btn-ghost btn-xs btn-circle"
                                    on:click=move |_| tags.update(|list| list.retain(|t| t != &removed))
                                >
                                    <X attr:class="h-3 w-3" />
                                </button>
                            </span>
                        }
                    }
                />
            </div>

            <div class="join w-full">
                <input
                    type="text"
                    class="input input-bordered join-item w-full"
                    placeholder=placeholder
                    prop:value=draft
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            add(draft.get_untracked());
                        }
                    }
                />
                <button type="button" class="btn join-item" on:click=move |_| add(draft.get_untracked())>
                    <Plus attr:class="h-4 w-4" />
                </button>
            </div>

            {(!suggestions.is_empty()).then(|| view! {
                <div class="flex flex-wrap gap-1">
                    {suggestions
                        .iter()
                        .map(|s| {
                            let value = s.to_string();
                            view! {
                                <button
                                    type="button"
                                    class=move || {
                                        if tags.with(|list| list.iter().any(|t| t == s)) {
                                            "badge badge-primary cursor-pointer"
                                        } else {
                                            "badge badge-ghost cursor-pointer"
                                        }
                                    }
                                    on:click=move |_| add(value.clone())
                                >
                                    {*s}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            })}
        </div>
    }
}
