//! Browser Router
//!
//! Keeps a `Location` signal in step with the History API.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;

use crate::routes::Location;

/// Location the page was loaded at
pub fn browser_location() -> Location {
    let Some(win) = web_sys::window() else { return Location::default() };
    let location = win.location();
    let path = location.pathname().unwrap_or_else(|_| "/".to_string());
    let search = location.search().unwrap_or_default();
    Location::parse(&format!("{}{}", path, search))
}

/// Push (or replace) a history entry and update the location signal
pub fn navigate(location: RwSignal<Location>, href: &str, replace: bool) {
    let next = Location::parse(href);
    if location.get_untracked() == next {
        return;
    }

    if let Some(history) = web_sys::window().and_then(|win| win.history().ok()) {
        let result = if replace {
            history.replace_state_with_url(&JsValue::NULL, "", Some(href))
        } else {
            history.push_state_with_url(&JsValue::NULL, "", Some(href))
        };
        if let Err(e) = result {
            tracing::warn!(href, error = ?e, "history update failed");
        }
    }

    tracing::debug!(href, replace, "navigate");
    location.set(next);
}

/// Follow back/forward buttons
pub fn bind_popstate(location: RwSignal<Location>) {
    let on_popstate = Closure::<dyn FnMut(web_sys::PopStateEvent)>::new(move |_ev: web_sys::PopStateEvent| {
        location.try_set(browser_location());
    });

    if let Some(win) = web_sys::window() {
        let _ = win.add_event_listener_with_callback("popstate", on_popstate.as_ref().unchecked_ref());
    }
    on_popstate.forget();
}

/// In-app link; plain clicks navigate without a page load
#[component]
pub fn Link(
    #[prop(into)] href: String,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let ctx = crate::context::use_app_context();
    let target = href.clone();

    let on_click = move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 || ev.ctrl_key() || ev.meta_key() || ev.shift_key() {
            return;
        }
        ev.prevent_default();
        ctx.navigate(&target);
    };

    view! {
        <a href=href class=class on:click=on_click>
            {children()}
        </a>
    }
}
