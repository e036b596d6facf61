//! Toast Notifications
//!
//! Renders the notice queue; each toast dismisses itself after the
//! configured lifetime or on click.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::notify::{Notice, NoticeKind};
use crate::store::{store_dismiss, use_app_store, AppStateStoreFields};

#[component]
pub fn Toasts() -> impl IntoView {
    let store = use_app_store();
    let ttl_ms = use_app_context().config().toast_ttl_ms;

    view! {
        <div class="toasts">
            <For
                each=move || store.notices().with(|notices| notices.items().to_vec())
                key=|notice: &Notice| notice.id
                children=move |notice: Notice| {
                    let id = notice.id;
                    spawn_local(async move {
                        TimeoutFuture::new(ttl_ms).await;
                        store_dismiss(&store, id);
                    });

                    let class = match notice.kind {
                        NoticeKind::Success => "toast toast-success",
                        NoticeKind::Error => "toast toast-error",
                    };
                    view! {
                        <div class=class role="status" on:click=move |_| store_dismiss(&store, id)>
                            {notice.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
