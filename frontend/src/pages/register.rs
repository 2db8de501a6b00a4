use crate::auth::{register, use_auth};
use crate::pages::login::AuthCard;
use crate::web::route::AppRoute;
use crate::web::router::{Link, use_router};
use leptos::prelude::*;
use leptos::task::spawn_local;
use proyectalia_shared::Registration;

/// 最短密码长度
const MIN_PASSWORD_LEN: usize = 6;

fn validate(registration: &Registration) -> Result<(), String> {
    if registration.name.trim().is_empty() || registration.email.trim().is_empty() {
        return Err("Name and email are required.".to_string());
    }
    if registration.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!("The password must have at least {MIN_PASSWORD_LEN} characters."));
    }
    Ok(())
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let career = RwSignal::new(String::new());
    let university = RwSignal::new(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let registration = Registration {
            name: name.get_untracked().trim().to_string(),
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
            career: career.get_untracked().trim().to_string(),
            university: university.get_untracked().trim().to_string(),
        };
        if let Err(message) = validate(&registration) {
            set_error_msg.set(Some(message));
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        spawn_local(async move {
            let result = register(&auth, registration).await;
            set_is_submitting.set(false);
            match result {
                Ok(()) => router.go(AppRoute::Explore),
                Err(message) => set_error_msg.set(Some(message)),
            }
        });
    };

    let field = move |id: &'static str, label: &'static str, kind: &'static str, value: RwSignal<String>, required: bool| {
        view! {
            <div class="form-control">
                <label class="label" for=id>
                    <span class="label-text">{label}</span>
                </label>
                <input
                    id=id
                    type=kind
                    on:input=move |ev| value.set(event_target_value(&ev))
                    prop:value=value
                    class="input input-bordered"
                    required=required
                />
            </div>
        }
    };

    view! {
        <AuthCard title="Create your account" subtitle="Publish projects and collaborate with other students" error_msg=error_msg>
            <form on:submit=on_submit>
                {field("name", "Full name", "text", name, true)}
                {field("email", "Email", "email", email, true)}
                {field("password", "Password", "password", password, true)}
                {field("career", "Career", "text", career, false)}
                {field("university", "University", "text", university, false)}
                <div class="form-control mt-6">
                    <button class="btn btn-primary" disabled=move || is_submitting.get()>
                        {move || if is_submitting.get() {
                            view! { <span class="loading loading-spinner"></span> "Creating account..." }.into_any()
                        } else {
                            "Sign up".into_any()
                        }}
                    </button>
                </div>
            </form>
            <p class="text-center text-sm mt-2">
                "Already registered? "
                <Link to=AppRoute::Login class="link link-primary">"Sign in"</Link>
            </p>
        </AuthCard>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration(name: &str, password: &str) -> Registration {
        Registration {
            name: name.to_string(),
            email: "ana@uni.edu".to_string(),
            password: password.to_string(),
            career: String::new(),
            university: String::new(),
        }
    }

    #[test]
    fn short_password_is_rejected() {
        assert!(validate(&registration("Ana", "12345")).is_err());
        assert!(validate(&registration("Ana", "123456")).is_ok());
    }

    #[test]
    fn blank_name_is_rejected() {
        assert!(validate(&registration("  ", "secret123")).is_err());
    }
}
