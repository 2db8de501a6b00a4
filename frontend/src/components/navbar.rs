use crate::auth::{logout, use_auth};
use crate::components::icons::LogOut;
use crate::web::route::AppRoute;
use crate::web::router::{Link, use_router};
use leptos::prelude::*;

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let nav_class = move |route: AppRoute| {
        if router.current_route().get() == route {
            "btn btn-ghost btn-sm text-primary font-semibold"
        } else {
            "btn btn-ghost btn-sm"
        }
    };

    let on_logout = move |_| {
        logout(&auth);
        router.go(AppRoute::Login);
    };

    view! {
        <header class="navbar bg-base-100 shadow sticky top-0 z-40 px-4">
            <div class="flex-1 gap-2">
                <Link to=AppRoute::Explore class="btn btn-ghost text-xl gap-2">
                    <span class="badge badge-primary font-bold">"PH"</span>
                    "ProyectaLia Hub"
                </Link>
                <nav class="hidden md:flex gap-1">
                    <span class=move || nav_class(AppRoute::Explore)>
                        <Link to=AppRoute::Explore>"Explore"</Link>
                    </span>
                    <Show when=move || auth.is_authenticated()>
                        <span class=move || nav_class(AppRoute::CreateProject)>
                            <Link to=AppRoute::CreateProject>"Create project"</Link>
                        </span>
                        <span class=move || nav_class(AppRoute::MyProjects)>
                            <Link to=AppRoute::MyProjects>"My projects"</Link>
                        </span>
                    </Show>
                </nav>
            </div>

            <div class="flex-none">
                {move || match auth.user() {
                    Some(user) => view! {
                        <div class="dropdown dropdown-end">
                            <div tabindex="0" role="button" class="btn btn-ghost btn-circle avatar placeholder">
                                <div class="bg-primary/10 text-primary rounded-full w-9">
                                    <span class="text-sm">{user.initials()}</span>
                                </div>
                            </div>
                            <ul tabindex="0" class="dropdown-content z-[1] menu p-2 shadow bg-base-100 rounded-box w-56">
                                <li class="menu-title">{user.name.clone()}</li>
                                <li><Link to=AppRoute::Profile(user.id)>"View profile"</Link></li>
                                <li><Link to=AppRoute::EditProfile>"Edit profile"</Link></li>
                                <li><Link to=AppRoute::MyApplications>"My applications"</Link></li>
                                <li>
                                    <a on:click=on_logout class="text-error">
                                        <LogOut attr:class="h-4 w-4" />
                                        "Sign out"
                                    </a>
                                </li>
                            </ul>
                        </div>
                    }
                    .into_any(),
                    None => view! {
                        <div class="flex gap-2">
                            <Link to=AppRoute::Login class="btn btn-ghost btn-sm">"Sign in"</Link>
                            <Link to=AppRoute::Register class="btn btn-primary btn-sm">"Sign up"</Link>
                        </div>
                    }
                    .into_any(),
                }}
            </div>
        </header>
    }
}

/// 页面外壳：导航栏加居中的主内容区
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-base-200">
            <Navbar />
            <main class="max-w-6xl mx-auto px-4 py-8">{children()}</main>
        </div>
    }
}
