//! Team View
//!
//! Project members with lookup by email, add and remove.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::cache::{QueryKey, QueryState};
use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::forms::{validate_member, FieldErrors};
use crate::models::{TeamMember, TeamMemberForm};
use crate::mutation::MutationOutcome;
use crate::query::use_query;
use crate::router::Link;
use crate::routes::Route;
use crate::store::{store_invalidate, store_notify, store_take_success, use_app_store};

#[component]
pub fn TeamView(project_id: String) -> impl IntoView {
    let ctx = use_app_context();
    let project_id = StoredValue::new(project_id);

    let team = use_query(
        move || {
            let id = project_id.get_value();
            Some((QueryKey::Team(id.clone()), id))
        },
        |api, id: String| async move { api.list_team(&id).await },
    );

    Effect::new(move |_| {
        if team.with(|t| t.is_error()) {
            ctx.redirect(&Route::NotFound);
        }
    });

    view! {
        <h1>"Team"</h1>
        <p class="lead">"Manage the people working on this project"</p>
        <nav class="page-actions">
            <Link href=project_id.with_value(|id| Route::ProjectDetail(id.clone()).path()) class="button">
                "Back to project"
            </Link>
        </nav>

        <AddMemberForm project_id=project_id />

        <h2>"Current members"</h2>
        {move || match team.get() {
            QueryState::Ready(members) if !members.is_empty() => view! {
                <ul class="team-list">
                    <For
                        each=move || members.clone()
                        key=|member: &TeamMember| member.id.clone()
                        children=move |member| view! { <MemberRow project_id=project_id member=member /> }
                    />
                </ul>
            }
            .into_any(),
            QueryState::Ready(_) | QueryState::Empty => view! { <p class="empty">"No members yet"</p> }.into_any(),
            QueryState::Loading => view! { <p class="loading">"Loading..."</p> }.into_any(),
            _ => ().into_any(),
        }}
    }
}

#[component]
fn MemberRow(project_id: StoredValue<String>, member: TeamMember) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let member_id = StoredValue::new(member.id.clone());

    let remove = move |_: ()| {
        let api = ctx.api();
        let (project, user) = (project_id.get_value(), member_id.get_value());
        spawn_local(async move {
            let outcome: MutationOutcome = api.remove_member(&project, &user).await.into();
            if store_notify(&store, &outcome) {
                store_invalidate(&store, &[QueryKey::Team(project)]);
            }
        });
    };

    view! {
        <li class="member-row">
            <div class="member-info">
                <span class="member-name">{member.name}</span>
                <span class="member-email">{member.email}</span>
            </div>
            <DeleteConfirmButton label="Remove from project" on_confirm=remove />
        </li>
    }
}

/// Find a user by email, then add them
#[component]
fn AddMemberForm(project_id: StoredValue<String>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (form, set_form) = signal(TeamMemberForm::default());
    let (errors, set_errors) = signal(FieldErrors::default());
    let (found, set_found) = signal(None::<TeamMember>);
    let (searching, set_searching) = signal(false);

    let search = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let data = form.get_untracked();
        if let Err(e) = validate_member(&data) {
            set_errors.set(e);
            return;
        }
        set_errors.set(FieldErrors::default());
        set_found.set(None);
        set_searching.set(true);

        let api = ctx.api();
        let project = project_id.get_value();
        spawn_local(async move {
            let outcome: MutationOutcome<TeamMember> = api.find_user_by_email(&project, &data).await.into();
            set_searching.try_set(false);
            set_found.try_set(store_take_success(&store, outcome));
        });
    };

    let add = move |_: web_sys::MouseEvent| {
        let Some(member) = found.get_untracked() else { return };
        let api = ctx.api();
        let project = project_id.get_value();
        spawn_local(async move {
            let outcome: MutationOutcome = api.add_member(&project, &member.id).await.into();
            if store_notify(&store, &outcome) {
                set_found.try_set(None);
                set_form.try_set(TeamMemberForm::default());
                store_invalidate(&store, &[QueryKey::Team(project)]);
            }
        });
    };

    view! {
        <form class="member-form" novalidate on:submit=search>
            <label for="member-email">"User email"</label>
            <input
                id="member-email"
                type="email"
                placeholder="Email of the user to add"
                prop:value=move || form.with(|f| f.email.clone())
                on:input=move |ev| set_form.update(|f| f.email = event_target_value(&ev))
            />
            {move || errors.with(|e| e.get("email")).map(|msg| view! { <p class="field-error">{msg}</p> })}
            <button type="submit" disabled=move || searching.get()>"Find user"</button>
        </form>

        {move || found.get().map(|member| view! {
            <div class="search-result">
                <p>"Result:"</p>
                <span class="member-name">{member.name}</span>
                <button on:click=add>"Add to project"</button>
            </div>
        })}
    }
}
