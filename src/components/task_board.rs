//! Task Board Component
//!
//! Five status columns with drag-and-drop between them.
//! Uses leptos-dragdrop; each column is a droppable keyed by its status.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::board::group_by_status;
use crate::components::TaskCard;
use crate::context::use_app_context;
use crate::models::{TaskStatus, TaskSummary};
use crate::store::{store_apply_optimistic, store_commit_status, use_app_store};
use crate::sync::{self, ChangeOrigin};

use leptos_dragdrop::*;

/// Board with DnD status changes
#[component]
pub fn TaskBoard(
    project_id: StoredValue<String>,
    tasks: Signal<Vec<TaskSummary>>,
    can_edit: Signal<bool>,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let dnd = create_dnd_signals();

    bind_global_mouseup(dnd, move |event: DragEnd| {
        let Some(change) = sync::resolve_drop(&project_id.get_value(), &event) else { return };
        let api = ctx.api();
        let pending = change.clone();
        spawn_local(async move {
            store_commit_status(&store, &api, &pending, ChangeOrigin::Board).await;
        });
        // Patch without waiting for the server
        store_apply_optimistic(&store, &change);
    });

    let columns = Memo::new(move |_| tasks.with(|tasks| group_by_status(tasks)));

    view! {
        <div class="task-board">
            {TaskStatus::ALL
                .into_iter()
                .map(|status| {
                    let column_tasks = Signal::derive(move || columns.with(|c| c.tasks(status).to_vec()));
                    view! {
                        <StatusColumn
                            status=status
                            tasks=column_tasks
                            project_id=project_id
                            dnd=dnd
                            can_edit=can_edit
                        />
                    }
                })
                .collect_view()}
        </div>
    }
}

/// One droppable status column
#[component]
fn StatusColumn(
    status: TaskStatus,
    tasks: Signal<Vec<TaskSummary>>,
    project_id: StoredValue<String>,
    dnd: DndSignals,
    can_edit: Signal<bool>,
) -> impl IntoView {
    let on_mouseenter = make_on_droppable_mouseenter(dnd, status.key().to_string());
    let on_mouseleave = make_on_mouseleave(dnd);

    let is_over = move || dnd.over_id_read.get().as_deref() == Some(status.key());
    let column_class = move || {
        let mut c = format!("board-column {}", status.css_class());
        if is_over() { c.push_str(" drop-target"); }
        c
    };

    view! {
        <section class=column_class on:mouseenter=on_mouseenter on:mouseleave=on_mouseleave>
            <h3 class="column-title">{status.label()}</h3>
            <ul class="task-list">
                <Show when=move || tasks.with(|t| t.is_empty())>
                    <li class="no-tasks">"No tasks"</li>
                </Show>
                <For
                    each=move || tasks.get()
                    key=|task: &TaskSummary| (task.id.clone(), task.status, task.name.clone(), task.description.clone())
                    children=move |task| view! {
                        <TaskCard task=task project_id=project_id dnd=dnd can_edit=can_edit />
                    }
                />
            </ul>
        </section>
    }
}
