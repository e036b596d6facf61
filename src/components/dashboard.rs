//! Dashboard View
//!
//! Project listing with links to the board and, for managers, edit/delete.

use leptos::prelude::*;

use crate::cache::{QueryKey, QueryState};
use crate::components::DeleteProjectModal;
use crate::context::use_app_context;
use crate::models::{DashboardProject, User};
use crate::overlay::DELETE_PROJECT;
use crate::policies::is_manager;
use crate::query::use_query;
use crate::router::Link;
use crate::routes::Route;

#[component]
pub fn DashboardView() -> impl IntoView {
    let projects = use_query(
        || Some((QueryKey::Projects, ())),
        |api, ()| async move { api.list_projects().await },
    );
    let user = use_query(
        || Some((QueryKey::User, ())),
        |api, ()| async move { api.current_user().await },
    );
    let user_id = Signal::derive(move || user.with(|u| u.data().map(|u: &User| u.id.clone())));

    view! {
        <h1>"My projects"</h1>
        <p class="lead">"Manage and administer your projects"</p>
        <nav class="page-actions">
            <Link href=Route::ProjectCreate.path() class="button">"New project"</Link>
        </nav>

        {move || match projects.get() {
            QueryState::Ready(list) if !list.is_empty() => view! {
                <ul class="project-list">
                    <For
                        each=move || list.clone()
                        key=|project: &DashboardProject| project.id.clone()
                        children=move |project| view! { <ProjectRow project=project user_id=user_id /> }
                    />
                </ul>
            }
            .into_any(),
            QueryState::Ready(_) | QueryState::Empty => view! {
                <p class="empty">
                    "No projects yet. "
                    <Link href=Route::ProjectCreate.path()>"Create one"</Link>
                </p>
            }
            .into_any(),
            QueryState::Failed(e) => view! { <p class="error">{e.message().to_string()}</p> }.into_any(),
            QueryState::Loading | QueryState::Idle => view! { <p class="loading">"Loading..."</p> }.into_any(),
        }}

        <DeleteProjectModal />
    }
}

#[component]
fn ProjectRow(project: DashboardProject, user_id: Signal<Option<String>>) -> impl IntoView {
    let ctx = use_app_context();
    let id = StoredValue::new(project.id.clone());
    let manager = project.manager.clone();
    let owns = move || user_id.with(|u| u.as_deref().is_some_and(|u| is_manager(&manager, u)));

    view! {
        <li class="project-row">
            <div class="project-info">
                <Show when=owns.clone()>
                    <span class="badge manager">"Manager"</span>
                </Show>
                <Link href=Route::ProjectDetail(project.id.clone()).path() class="project-name">
                    {project.name.clone()}
                </Link>
                <p class="client">"Client: " {project.client_name}</p>
                <p class="description">{project.description}</p>
            </div>
            <div class="project-menu">
                <Link href=Route::ProjectDetail(project.id.clone()).path()>"View"</Link>
                <Show when=owns>
                    <Link href=id.with_value(|id| Route::ProjectEdit(id.clone()).path())>"Edit"</Link>
                    <button
                        class="danger"
                        on:click=move |_| id.with_value(|id| ctx.open_overlay(DELETE_PROJECT, id))
                    >
                        "Delete"
                    </button>
                </Show>
            </div>
        </li>
    }
}
