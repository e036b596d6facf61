//! Delete Project Overlay
//!
//! Confirmation dialog opened by `?deleteProject={id}` on the dashboard.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::cache::QueryKey;
use crate::components::Modal;
use crate::context::use_app_context;
use crate::mutation::MutationOutcome;
use crate::overlay::{overlay_target, DELETE_PROJECT};
use crate::store::{store_invalidate, store_notify, use_app_store, AppStateStoreFields};
use crate::models::DashboardProject;

#[component]
pub fn DeleteProjectModal() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let target = Memo::new(move |_| ctx.location.with(|location| overlay_target(location, DELETE_PROJECT)));
    let (deleting, set_deleting) = signal(false);

    // Name from the dashboard listing when it is cached
    let project_name = move || {
        let id = target.get()?;
        store.cache().with(|cache| {
            cache
                .get::<Vec<DashboardProject>>(&QueryKey::Projects)
                .and_then(|projects| projects.into_iter().find(|p| p.id == id))
                .map(|p| p.name)
        })
    };

    let confirm = move |_: web_sys::MouseEvent| {
        let Some(id) = target.get_untracked() else { return };
        set_deleting.set(true);
        let api = ctx.api();
        spawn_local(async move {
            let outcome: MutationOutcome = api.delete_project(&id).await.into();
            set_deleting.try_set(false);
            if store_notify(&store, &outcome) {
                ctx.close_overlay();
                store_invalidate(&store, &[QueryKey::Projects]);
            }
        });
    };

    view! {
        <Show when=move || target.get().is_some()>
            <Modal title="Delete project" on_close=move |_: ()| ctx.close_overlay()>
                <p class="modal-lead">
                    {move || match project_name() {
                        Some(name) => format!("Delete \"{}\" and all of its tasks?", name),
                        None => "Delete this project and all of its tasks?".to_string(),
                    }}
                </p>
                <div class="modal-actions">
                    <button class="danger" disabled=move || deleting.get() on:click=confirm>
                        "Delete project"
                    </button>
                    <button on:click=move |_| ctx.close_overlay()>"Cancel"</button>
                </div>
            </Modal>
        </Show>
    }
}
