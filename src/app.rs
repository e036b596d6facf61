//! Taskboard App
//!
//! Root component: provides state, renders the layout for the current route.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{
    AuthView, ChangePasswordView, ContactView, CreateProjectView, DashboardView, EditProjectView,
    NotFoundView, ProfileView, ProjectDetailsView, TeamView, Toasts,
};
use crate::config::ClientConfig;
use crate::context::AppContext;
use crate::router::{self, Link};
use crate::routes::Route;
use crate::store::AppState;

#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    let ctx = AppContext::new(config, router::browser_location());
    router::bind_popstate(ctx.location);

    // Provide context to all children
    provide_context(ctx);
    provide_context(Store::new(AppState::default()));

    // Re-render only when the path changes, not on overlay parameters
    let route = Memo::new(move |_| ctx.route());
    Effect::new(move |_| {
        tracing::info!(path = %route.get().path(), "route");
    });

    let page = move || match route.get() {
        Route::Dashboard => view! { <DashboardView /> }.into_any(),
        Route::Contact => view! { <ContactView /> }.into_any(),
        Route::ProjectCreate => view! { <CreateProjectView /> }.into_any(),
        Route::ProjectDetail(id) => view! { <ProjectDetailsView project_id=id /> }.into_any(),
        Route::ProjectEdit(id) => view! { <EditProjectView project_id=id /> }.into_any(),
        Route::ProjectTeam(id) => view! { <TeamView project_id=id /> }.into_any(),
        Route::Profile => view! { <ProfileView /> }.into_any(),
        Route::ProfilePassword => view! { <ChangePasswordView /> }.into_any(),
        Route::NotFound => view! { <NotFoundView /> }.into_any(),
        auth => view! { <AuthView route=auth /> }.into_any(),
    };

    view! {
        <Show
            when=move || route.with(|r| r.is_public())
            fallback=move || view! {
                <div class="app-layout">
                    <header class="app-header">
                        <Link href=Route::Dashboard.path() class="logo">"Taskboard"</Link>
                        <nav class="app-nav">
                            <Link href=Route::Dashboard.path()>"My projects"</Link>
                            <Link href=Route::Profile.path()>"My profile"</Link>
                            <Link href=Route::Contact.path()>"Contact"</Link>
                        </nav>
                    </header>
                    <main class="main-content">{page}</main>
                    <footer class="app-footer">"Taskboard"</footer>
                </div>
            }
        >
            <main class="public-content">{page}</main>
        </Show>
        <Toasts />
    }
}
