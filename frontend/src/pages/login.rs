use crate::auth::{login, use_auth};
use crate::web::route::AppRoute;
use crate::web::router::{Link, use_router};
use leptos::prelude::*;
use leptos::task::spawn_local;
use proyectalia_shared::Credentials;

/// 登录/注册页共用的卡片外壳
#[component]
pub fn AuthCard(
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
    error_msg: ReadSignal<Option<String>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <div class="flex flex-col items-center gap-2">
                        <Link to=AppRoute::Explore class="badge badge-primary badge-lg font-bold">"PH"</Link>
                        <h1 class="text-3xl font-bold">{title}</h1>
                        <p class="text-base-content/70">{subtitle}</p>
                    </div>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <div class="card-body">
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>
                        {children()}
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let credentials = Credentials {
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };
        if credentials.email.is_empty() || credentials.password.is_empty() {
            set_error_msg.set(Some("Please fill in all fields".to_string()));
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        spawn_local(async move {
            let result = login(&auth, credentials).await;
            set_is_submitting.set(false);
            match result {
                Ok(()) => router.go(AppRoute::Explore),
                Err(message) => set_error_msg.set(Some(message)),
            }
        });
    };

    view! {
        <AuthCard title="Welcome back" subtitle="Sign in to find and join student projects" error_msg=error_msg>
            <form on:submit=on_submit>
                <div class="form-control">
                    <label class="label" for="email">
                        <span class="label-text">"Email"</span>
                    </label>
                    <input
                        id="email"
                        type="email"
                        placeholder="you@university.edu"
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                        prop:value=email
                        class="input input-bordered"
                        required
                    />
                </div>
                <div class="form-control">
                    <label class="label" for="password">
                        <span class="label-text">"Password"</span>
                    </label>
                    <input
                        id="password"
                        type="password"
                        placeholder="••••••••"
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        prop:value=password
                        class="input input-bordered"
                        required
                    />
                </div>
                <div class="form-control mt-6">
                    <button class="btn btn-primary" disabled=move || is_submitting.get()>
                        {move || if is_submitting.get() {
                            view! { <span class="loading loading-spinner"></span> "Signing in..." }.into_any()
                        } else {
                            "Sign in".into_any()
                        }}
                    </button>
                </div>
            </form>
            <p class="text-center text-sm mt-2">
                "No account yet? "
                <Link to=AppRoute::Register class="link link-primary">"Create one"</Link>
            </p>
        </AuthCard>
    }
}
