//! Static Pages
//!
//! Profile, auth, contact and not-found shells.

use leptos::prelude::*;

use crate::cache::{QueryKey, QueryState};
use crate::query::use_query;
use crate::router::Link;
use crate::routes::Route;

#[component]
pub fn PageShell(
    #[prop(into)] title: String,
    #[prop(into)] lead: String,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <h1>{title}</h1>
        <p class="lead">{lead}</p>
        {children.map(|c| c())}
    }
}

#[component]
pub fn ProfileView() -> impl IntoView {
    let user = use_query(
        || Some((QueryKey::User, ())),
        |api, ()| async move { api.current_user().await },
    );

    view! {
        <PageShell title="My profile" lead="Your account details">
            {move || match user.get() {
                QueryState::Ready(user) => view! {
                    <dl class="profile">
                        <dt>"Name"</dt>
                        <dd>{user.name}</dd>
                        <dt>"Email"</dt>
                        <dd>{user.email}</dd>
                    </dl>
                }
                .into_any(),
                QueryState::Loading => view! { <p class="loading">"Loading..."</p> }.into_any(),
                _ => view! { <p class="empty">"Profile unavailable"</p> }.into_any(),
            }}
            <nav class="page-actions">
                <Link href=Route::ProfilePassword.path()>"Change password"</Link>
            </nav>
        </PageShell>
    }
}

#[component]
pub fn ChangePasswordView() -> impl IntoView {
    view! {
        <PageShell title="Change password" lead="Use this form to change your password">
            <Link href=Route::Profile.path()>"Back to profile"</Link>
        </PageShell>
    }
}

#[component]
pub fn ContactView() -> impl IntoView {
    view! { <PageShell title="Contact" lead="Questions or feedback about your projects" /> }
}

/// Sign-in and account pages; their flows live on the server
#[component]
pub fn AuthView(route: Route) -> impl IntoView {
    let (title, lead) = match route {
        Route::Login => ("Sign in", "Start planning your projects"),
        Route::Register => ("Create account", "Fill in the form to create your account"),
        Route::ConfirmAccount => ("Confirm your account", "Enter the code you received by email"),
        Route::RequestCode => ("Request a new code", "Enter your email to receive a new code"),
        Route::ForgotPassword => ("Reset password", "Forgot your password? Enter your email"),
        Route::NewPassword => ("New password", "Enter the code you received and a new password"),
        _ => ("Account", ""),
    };

    view! {
        <div class="auth-page">
            <PageShell title=title lead=lead>
                <nav class="auth-links">
                    <Link href=Route::Login.path()>"Sign in"</Link>
                    <Link href=Route::Register.path()>"Create account"</Link>
                    <Link href=Route::ForgotPassword.path()>"Forgot password?"</Link>
                </nav>
            </PageShell>
        </div>
    }
}

#[component]
pub fn NotFoundView() -> impl IntoView {
    view! {
        <div class="not-found">
            <PageShell title="Page not found" lead="The page you are looking for does not exist">
                <Link href=Route::Dashboard.path()>"Back to projects"</Link>
            </PageShell>
        </div>
    }
}
