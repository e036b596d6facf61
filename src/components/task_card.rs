//! Task Card Component
//!
//! Draggable board card with view, edit and delete actions.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::cache::QueryKey;
use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::models::TaskSummary;
use crate::mutation::MutationOutcome;
use crate::overlay::{EDIT_TASK, VIEW_TASK};
use crate::store::{store_invalidate, store_notify, use_app_store};

use leptos_dragdrop::*;

#[component]
pub fn TaskCard(
    task: TaskSummary,
    project_id: StoredValue<String>,
    dnd: DndSignals,
    can_edit: Signal<bool>,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let task_id = StoredValue::new(task.id.clone());

    let on_mousedown = make_on_mousedown(dnd, task.id.clone());
    let is_dragging = move || task_id.with_value(|id| dnd.dragging_id_read.get().as_deref() == Some(id.as_str()));
    let card_class = move || {
        let mut c = String::from("task-card");
        if is_dragging() { c.push_str(" dragging"); }
        c
    };

    let delete_task = move |_: ()| {
        let api = ctx.api();
        let (project, task) = (project_id.get_value(), task_id.get_value());
        spawn_local(async move {
            let outcome: MutationOutcome = api.delete_task(&project, &task).await.into();
            if store_notify(&store, &outcome) {
                store_invalidate(&store, &[QueryKey::Project(project)]);
            }
        });
    };

    view! {
        <li class=card_class on:mousedown=on_mousedown>
            // Not a button: presses on buttons never start a drag
            <h4
                class="task-name"
                on:click=move |_| {
                    // A drag that ends on the card must not open it
                    if dnd.drag_just_ended_read.get_untracked() { return; }
                    task_id.with_value(|id| ctx.open_overlay(VIEW_TASK, id));
                }
            >
                {task.name}
            </h4>
            <p class="task-description">{task.description}</p>
            <Show when=move || can_edit.get()>
                <div class="task-actions">
                    <button on:click=move |_| task_id.with_value(|id| ctx.open_overlay(EDIT_TASK, id))>
                        "Edit"
                    </button>
                    <DeleteConfirmButton label="Delete" on_confirm=delete_task />
                </div>
            </Show>
        </li>
    }
}
