//! Task Overlays
//!
//! New, edit and detail dialogs for tasks, opened through the location's
//! query parameters.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::cache::QueryKey;
use crate::components::Modal;
use crate::context::{use_app_context, AppContext};
use crate::forms::{validate_task, FieldErrors};
use crate::models::{Task, TaskFormData, TaskStatus};
use crate::mutation::MutationOutcome;
use crate::overlay::{new_task_open, overlay_target, overlay_view, OverlayView, EDIT_TASK, VIEW_TASK};
use crate::query::use_query;
use crate::store::{store_commit_status, store_error, store_invalidate, store_notify, use_app_store};
use crate::sync::{ChangeOrigin, StatusChange};

/// Name and description inputs
#[component]
fn TaskFields(
    form: ReadSignal<TaskFormData>,
    set_form: WriteSignal<TaskFormData>,
    errors: ReadSignal<FieldErrors>,
) -> impl IntoView {
    view! {
        <label for="task-name">"Task name"</label>
        <input
            id="task-name"
            type="text"
            placeholder="Task name"
            prop:value=move || form.with(|f| f.name.clone())
            on:input=move |ev| set_form.update(|f| f.name = event_target_value(&ev))
        />
        {move || errors.with(|e| e.get("name")).map(|msg| view! { <p class="field-error">{msg}</p> })}

        <label for="task-description">"Description"</label>
        <textarea
            id="task-description"
            placeholder="Task description"
            prop:value=move || form.with(|f| f.description.clone())
            on:input=move |ev| set_form.update(|f| f.description = event_target_value(&ev))
        />
        {move || errors.with(|e| e.get("description")).map(|msg| view! { <p class="field-error">{msg}</p> })}
    }
}

/// Fetch the task named by an overlay parameter
fn use_overlay_task(ctx: AppContext, project_id: StoredValue<String>, param: &'static str) -> Memo<OverlayView<Task>> {
    let target = Memo::new(move |_| ctx.location.with(|location| overlay_target(location, param)));
    let task = use_query(
        move || target.get().map(|id| (QueryKey::Task(id.clone()), (project_id.get_value(), id))),
        |api, (project, task): (String, String)| async move { api.get_task(&project, &task).await },
    );

    let overlay = Memo::new(move |_| overlay_view(target.get().as_deref(), task.get()));
    Effect::new(move |_| {
        if let OverlayView::Redirect(route) = overlay.get() {
            tracing::warn!(param, "task overlay target not found");
            ctx.redirect(&route);
        }
    });
    overlay
}

#[component]
pub fn AddTaskModal(project_id: StoredValue<String>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let open = Memo::new(move |_| ctx.location.with(new_task_open));
    let (form, set_form) = signal(TaskFormData::default());
    let (errors, set_errors) = signal(FieldErrors::default());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let data = form.get_untracked();
        if let Err(e) = validate_task(&data) {
            set_errors.set(e);
            return;
        }
        set_errors.set(FieldErrors::default());

        let api = ctx.api();
        let project = project_id.get_value();
        spawn_local(async move {
            let outcome: MutationOutcome = api.create_task(&project, &data).await.into();
            if store_notify(&store, &outcome) {
                set_form.set(TaskFormData::default());
                ctx.close_overlay();
                store_invalidate(&store, &[QueryKey::Project(project)]);
            }
        });
    };

    view! {
        <Show when=move || open.get()>
            <Modal title="New task" on_close=move |_: ()| ctx.close_overlay()>
                <p class="modal-lead">"Fill in the form to add a task"</p>
                <form class="task-form" novalidate on:submit=submit>
                    <TaskFields form=form set_form=set_form errors=errors />
                    <button type="submit">"Save task"</button>
                </form>
            </Modal>
        </Show>
    }
}

#[component]
pub fn EditTaskModal(project_id: StoredValue<String>) -> impl IntoView {
    let ctx = use_app_context();
    let overlay = use_overlay_task(ctx, project_id, EDIT_TASK);

    move || match overlay.get() {
        OverlayView::Show(task) => view! { <EditTaskForm project_id=project_id task=task /> }.into_any(),
        OverlayView::Loading => view! {
            <Modal title="Edit task" on_close=move |_: ()| ctx.close_overlay()>
                <p class="loading">"Loading..."</p>
            </Modal>
        }
        .into_any(),
        OverlayView::Hidden | OverlayView::Redirect(_) => ().into_any(),
    }
}

#[component]
fn EditTaskForm(project_id: StoredValue<String>, task: Task) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let task_id = StoredValue::new(task.id.clone());
    let (form, set_form) = signal(TaskFormData::from(&task));
    let (errors, set_errors) = signal(FieldErrors::default());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let data = form.get_untracked();
        if let Err(e) = validate_task(&data) {
            set_errors.set(e);
            return;
        }
        set_errors.set(FieldErrors::default());

        let api = ctx.api();
        let (project, task) = (project_id.get_value(), task_id.get_value());
        spawn_local(async move {
            let outcome: MutationOutcome = api.update_task(&project, &task, &data).await.into();
            if store_notify(&store, &outcome) {
                ctx.close_overlay();
                store_invalidate(&store, &[QueryKey::Project(project), QueryKey::Task(task)]);
            }
        });
    };

    view! {
        <Modal title="Edit task" on_close=move |_: ()| ctx.close_overlay()>
            <form class="task-form" novalidate on:submit=submit>
                <TaskFields form=form set_form=set_form errors=errors />
                <button type="submit">"Save changes"</button>
            </form>
        </Modal>
    }
}

#[component]
pub fn TaskDetailsModal(project_id: StoredValue<String>) -> impl IntoView {
    let ctx = use_app_context();
    let overlay = use_overlay_task(ctx, project_id, VIEW_TASK);

    move || match overlay.get() {
        OverlayView::Show(task) => view! { <TaskDetails project_id=project_id task=task /> }.into_any(),
        OverlayView::Loading => view! {
            <Modal title="Task" on_close=move |_: ()| ctx.close_overlay()>
                <p class="loading">"Loading..."</p>
            </Modal>
        }
        .into_any(),
        OverlayView::Hidden | OverlayView::Redirect(_) => ().into_any(),
    }
}

#[component]
fn TaskDetails(project_id: StoredValue<String>, task: Task) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let task_id = StoredValue::new(task.id.clone());
    let current = task.status;

    let on_status = move |ev: web_sys::Event| {
        let status = match event_target_value(&ev).parse::<TaskStatus>() {
            Ok(status) => status,
            Err(e) => {
                store_error(&store, e.to_string());
                return;
            }
        };
        let change = StatusChange { project_id: project_id.get_value(), task_id: task_id.get_value(), status };
        let api = ctx.api();
        spawn_local(async move {
            store_commit_status(&store, &api, &change, ChangeOrigin::TaskDetail).await;
        });
    };

    let has_history = !task.completed_by.is_empty();

    view! {
        <Modal title=task.name.clone() on_close=move |_: ()| ctx.close_overlay()>
            <p class="task-dates">
                "Created: " {task.created_at.format("%d/%m/%Y").to_string()}
                " · Last update: " {task.updated_at.format("%d/%m/%Y").to_string()}
            </p>
            <p class="task-description">{task.description.clone()}</p>

            <Show when=move || has_history>
                <h3>"Change history"</h3>
            </Show>
            <ul class="status-history">
                {task
                    .completed_by
                    .iter()
                    .map(|entry| view! {
                        <li>
                            <span class="history-status">{entry.status.label()}</span>
                            " by "
                            {entry.user.name.clone()}
                        </li>
                    })
                    .collect_view()}
            </ul>

            <label for="task-status">"Current status"</label>
            <select id="task-status" on:change=on_status>
                {TaskStatus::ALL
                    .into_iter()
                    .map(|status| view! {
                        <option value=status.key() selected={status == current}>
                            {status.label()}
                        </option>
                    })
                    .collect_view()}
            </select>
        </Modal>
    }
}
