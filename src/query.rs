//! Cached Queries
//!
//! `use_query` binds a view to a cache key: it fetches when the key is
//! missing or stale, retries an empty or failed result when a view
//! subscribes again, and exposes the slot as a signal. A `None` input
//! disables the query.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{Api, ApiResult};
use crate::cache::{Cached, QueryKey, QueryState};
use crate::context::use_app_context;
use crate::store::{store_invalidate, use_app_store, AppStateStoreFields, AppStore};

/// Subscribe to a cached query
///
/// `input` yields the key and whatever arguments `fetch` needs for it.
pub fn use_query<T, A, Fut>(
    input: impl Fn() -> Option<(QueryKey, A)> + Send + Sync + 'static,
    fetch: impl Fn(Api, A) -> Fut + 'static,
) -> Signal<QueryState<T>>
where
    T: Cached + Send + Sync + 'static,
    A: Clone + PartialEq + Send + Sync + 'static,
    Fut: Future<Output = ApiResult<T>> + 'static,
{
    let store = use_app_store();
    let ctx = use_app_context();
    let input = Memo::new(move |_| input());

    Effect::new(move |prev: Option<Option<QueryKey>>| {
        let (key, args) = input.get()?;
        let subscribed = prev.flatten().as_ref() != Some(&key);

        if begin_query(&store, &key, subscribed) {
            tracing::debug!(key = %key, "query fetch");
            let request = fetch(ctx.api(), args);
            let pending = key.clone();
            spawn_local(async move {
                settle_query(&store, pending, request.await);
            });
        }
        Some(key)
    });

    Signal::derive(move || match input.get() {
        None => QueryState::Idle,
        Some((key, _)) => query_state(&store, Some(&key)),
    })
}

/// Claim a fetch for `key`; true when the caller should start one
///
/// `subscribed` is set on the first run for a key (mount or key change): a
/// previous empty or failed result is dropped so it is retried.
pub fn begin_query(store: &AppStore, key: &QueryKey, subscribed: bool) -> bool {
    if subscribed && store.cache().with_untracked(|cache| cache.settled_without_data(key)) {
        store_invalidate(store, std::slice::from_ref(key));
    }
    // Tracked so invalidation re-runs the calling effect
    if !store.cache().with(|cache| cache.needs_fetch(key)) {
        return false;
    }

    let mut claimed = false;
    store.cache().update(|cache| claimed = cache.begin_fetch(key));
    claimed
}

/// Store a finished fetch
pub fn settle_query<T: Cached>(store: &AppStore, key: QueryKey, result: ApiResult<T>) {
    store.cache().update(|cache| cache.settle(key, result));
}

/// What a view sees for `key`; `None` is a disabled query
pub fn query_state<T: Cached>(store: &AppStore, key: Option<&QueryKey>) -> QueryState<T> {
    match key {
        None => QueryState::Idle,
        Some(key) => store.cache().with(|cache| cache.state::<T>(key)),
    }
}
