//! Modal Shell
//!
//! Backdrop and dialog frame shared by the overlays.

use leptos::prelude::*;

/// Dialog with a title and a close button
#[component]
pub fn Modal(
    #[prop(into)] title: String,
    #[prop(into)] on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=|ev| ev.stop_propagation()>
                <header class="modal-header">
                    <h2>{title}</h2>
                    <button class="modal-close" on:click=move |_| on_close.run(())>"×"</button>
                </header>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}
