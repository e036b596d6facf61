//! Project Details View
//!
//! Project header, the task board and the task overlays.

use leptos::prelude::*;

use crate::cache::QueryKey;
use crate::components::{AddTaskModal, EditTaskModal, TaskBoard, TaskDetailsModal};
use crate::context::use_app_context;
use crate::models::Project;
use crate::overlay::NEW_TASK;
use crate::policies::is_manager;
use crate::query::use_query;
use crate::router::Link;
use crate::routes::Route;

#[component]
pub fn ProjectDetailsView(project_id: String) -> impl IntoView {
    let ctx = use_app_context();
    let project_id = StoredValue::new(project_id);

    let project = use_query(
        move || {
            let id = project_id.get_value();
            Some((QueryKey::Project(id.clone()), id))
        },
        |api, id: String| async move { api.get_full_project(&id).await },
    );
    let user = use_query(
        || Some((QueryKey::User, ())),
        |api, ()| async move { api.current_user().await },
    );

    Effect::new(move |_| {
        if project.with(|p| p.is_error()) {
            tracing::warn!(project = %project_id.get_value(), "project not available");
            ctx.redirect(&Route::NotFound);
        }
    });

    let can_edit = Signal::derive(move || {
        project.with(|p| {
            user.with(|u| match (p.data(), u.data()) {
                (Some(p), Some(u)) => is_manager(&p.manager, &u.id),
                _ => false,
            })
        })
    });
    let tasks = Signal::derive(move || {
        project.with(|p| p.data().map(|p: &Project| p.tasks.clone()).unwrap_or_default())
    });
    let header = move || project.with(|p| p.data().map(|p: &Project| (p.name.clone(), p.description.clone())));

    view! {
        <div class="project-details">
            {move || match header() {
                Some((name, description)) => view! {
                    <h1>{name}</h1>
                    <p class="lead">{description}</p>
                }
                .into_any(),
                None => view! { <p class="loading">"Loading project..."</p> }.into_any(),
            }}

            <Show when=move || can_edit.get()>
                <nav class="page-actions">
                    <button class="button" on:click=move |_| ctx.open_overlay(NEW_TASK, "true")>
                        "Add task"
                    </button>
                    <Link href=project_id.with_value(|id| Route::ProjectTeam(id.clone()).path()) class="button">
                        "Team"
                    </Link>
                </nav>
            </Show>

            <h2>"Tasks"</h2>
            <TaskBoard project_id=project_id tasks=tasks can_edit=can_edit />

            <AddTaskModal project_id=project_id />
            <EditTaskModal project_id=project_id />
            <TaskDetailsModal project_id=project_id />
        </div>
    }
}
