//! Project Form Views
//!
//! Create and edit forms sharing one set of fields.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::cache::{QueryKey, QueryState};
use crate::context::use_app_context;
use crate::forms::{validate_project, FieldErrors};
use crate::models::ProjectFormData;
use crate::mutation::MutationOutcome;
use crate::query::use_query;
use crate::router::Link;
use crate::routes::Route;
use crate::store::{store_invalidate, store_notify, use_app_store};

/// Project name, client and description inputs
#[component]
fn ProjectFields(
    form: ReadSignal<ProjectFormData>,
    set_form: WriteSignal<ProjectFormData>,
    errors: ReadSignal<FieldErrors>,
) -> impl IntoView {
    let error = move |field: &'static str| {
        move || errors.with(|e| e.get(field)).map(|msg| view! { <p class="field-error">{msg}</p> })
    };

    view! {
        <label for="projectName">"Project name"</label>
        <input
            id="projectName"
            type="text"
            placeholder="Project name"
            prop:value=move || form.with(|f| f.project_name.clone())
            on:input=move |ev| set_form.update(|f| f.project_name = event_target_value(&ev))
        />
        {error("projectName")}

        <label for="clientName">"Client name"</label>
        <input
            id="clientName"
            type="text"
            placeholder="Client name"
            prop:value=move || form.with(|f| f.client_name.clone())
            on:input=move |ev| set_form.update(|f| f.client_name = event_target_value(&ev))
        />
        {error("clientName")}

        <label for="description">"Description"</label>
        <textarea
            id="description"
            placeholder="Project description"
            prop:value=move || form.with(|f| f.description.clone())
            on:input=move |ev| set_form.update(|f| f.description = event_target_value(&ev))
        />
        {error("description")}
    }
}

#[component]
pub fn CreateProjectView() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (form, set_form) = signal(ProjectFormData::default());
    let (errors, set_errors) = signal(FieldErrors::default());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let data = form.get_untracked();
        if let Err(e) = validate_project(&data) {
            set_errors.set(e);
            return;
        }
        set_errors.set(FieldErrors::default());

        let api = ctx.api();
        spawn_local(async move {
            let outcome: MutationOutcome = api.create_project(&data).await.into();
            if store_notify(&store, &outcome) {
                store_invalidate(&store, &[QueryKey::Projects]);
                ctx.go_to(&Route::Dashboard);
            }
        });
    };

    view! {
        <h1>"Create project"</h1>
        <p class="lead">"Fill in the form to create a project"</p>
        <nav class="page-actions">
            <Link href=Route::Dashboard.path() class="button">"Back to projects"</Link>
        </nav>
        <form class="project-form" novalidate on:submit=submit>
            <ProjectFields form=form set_form=set_form errors=errors />
            <button type="submit">"Create project"</button>
        </form>
    }
}

#[component]
pub fn EditProjectView(project_id: String) -> impl IntoView {
    let ctx = use_app_context();
    let project_id = StoredValue::new(project_id);

    let project = use_query(
        move || {
            let id = project_id.get_value();
            Some((QueryKey::EditProject(id.clone()), id))
        },
        |api, id: String| async move { api.get_project(&id).await },
    );

    Effect::new(move |_| {
        if project.with(|p| p.is_error()) {
            ctx.redirect(&Route::NotFound);
        }
    });

    view! {
        <h1>"Edit project"</h1>
        <p class="lead">"Update the project details"</p>
        <nav class="page-actions">
            <Link href=Route::Dashboard.path() class="button">"Back to projects"</Link>
        </nav>
        {move || match project.get() {
            QueryState::Ready(data) => view! { <EditProjectForm project_id=project_id data=data /> }.into_any(),
            QueryState::Loading => view! { <p class="loading">"Loading..."</p> }.into_any(),
            _ => ().into_any(),
        }}
    }
}

#[component]
fn EditProjectForm(project_id: StoredValue<String>, data: ProjectFormData) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (form, set_form) = signal(data);
    let (errors, set_errors) = signal(FieldErrors::default());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let data = form.get_untracked();
        if let Err(e) = validate_project(&data) {
            set_errors.set(e);
            return;
        }
        set_errors.set(FieldErrors::default());

        let api = ctx.api();
        let id = project_id.get_value();
        spawn_local(async move {
            let outcome: MutationOutcome = api.update_project(&id, &data).await.into();
            if store_notify(&store, &outcome) {
                ctx.go_to(&Route::Dashboard);
                store_invalidate(&store, &[QueryKey::Projects, QueryKey::EditProject(id)]);
            }
        });
    };

    view! {
        <form class="project-form" novalidate on:submit=submit>
            <ProjectFields form=form set_form=set_form errors=errors />
            <button type="submit">"Save changes"</button>
        </form>
    }
}
