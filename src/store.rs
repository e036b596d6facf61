//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::{ApiClient, Transport};
use crate::cache::{QueryCache, QueryKey};
use crate::mutation::MutationOutcome;
use crate::notify::Notices;
use crate::sync::{self, ChangeOrigin, StatusChange};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Server data by query key
    pub cache: QueryCache,
    /// Visible toasts
    pub notices: Notices,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Invalidate cache entries so active queries re-fetch
pub fn store_invalidate(store: &AppStore, keys: &[QueryKey]) {
    store.cache().update(|cache| {
        for key in keys {
            cache.invalidate(key);
        }
    });
}

/// Toast the outcome of a message-returning mutation; true on success
pub fn store_notify(store: &AppStore, outcome: &MutationOutcome) -> bool {
    let mut succeeded = false;
    store.notices().update(|notices| succeeded = outcome.notify(notices));
    succeeded
}

/// Error toast for a failure, success value otherwise
pub fn store_take_success<T>(store: &AppStore, outcome: MutationOutcome<T>) -> Option<T> {
    let mut value = None;
    store.notices().update(|notices| value = outcome.into_success(notices));
    value
}

pub fn store_error(store: &AppStore, message: impl Into<String>) {
    let message = message.into();
    store.notices().update(|notices| {
        notices.error(message);
    });
}

pub fn store_dismiss(store: &AppStore, id: u32) {
    store.notices().update(|notices| notices.dismiss(id));
}

/// Patch the cached board for a status change
pub fn store_apply_optimistic(store: &AppStore, change: &StatusChange) -> bool {
    let mut applied = false;
    store.cache().update(|cache| applied = sync::apply_optimistic(cache, change));
    applied
}

/// Settle a status change: toast and invalidate
pub fn store_reconcile(store: &AppStore, change: &StatusChange, origin: ChangeOrigin, outcome: &MutationOutcome) {
    let mut notices = store.notices().get_untracked();
    store.cache().update(|cache| sync::reconcile(cache, &mut notices, change, origin, outcome));
    store.notices().set(notices);
}

/// Send a status change and settle it
pub async fn store_commit_status<T: Transport>(
    store: &AppStore,
    api: &ApiClient<T>,
    change: &StatusChange,
    origin: ChangeOrigin,
) -> MutationOutcome {
    let outcome = sync::commit(api, change).await;
    store_reconcile(store, change, origin, &outcome);
    outcome
}
