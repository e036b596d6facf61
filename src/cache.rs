//! Query Cache
//!
//! Keyed store of server-fetched entities. Views go through `read`,
//! `invalidate` and the fetch bookkeeping (`begin_fetch` / `settle`);
//! the optimistic board patch is the only caller of `replace`.
//! Writes are last-writer-wins per key.

use std::collections::HashMap;
use std::fmt;

use crate::api::{ApiError, ApiResult};
use crate::models::{DashboardProject, Project, ProjectFormData, Task, TeamMember, User};

/// Cache key, one per server-side query
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Projects,
    /// Full project with board tasks
    Project(String),
    /// Project fields for the edit form
    EditProject(String),
    Task(String),
    Team(String),
    User,
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryKey::Projects => write!(f, "projects"),
            QueryKey::Project(id) => write!(f, "project/{}", id),
            QueryKey::EditProject(id) => write!(f, "editProject/{}", id),
            QueryKey::Task(id) => write!(f, "task/{}", id),
            QueryKey::Team(id) => write!(f, "team/{}", id),
            QueryKey::User => write!(f, "user"),
        }
    }
}

/// Cached payload
#[derive(Debug, Clone, PartialEq)]
pub enum CacheEntry {
    Projects(Vec<DashboardProject>),
    Project(Project),
    EditProject(ProjectFormData),
    Task(Task),
    Team(Vec<TeamMember>),
    User(User),
}

/// Payload types that can live in the cache
pub trait Cached: Clone + Sized {
    fn into_entry(self) -> CacheEntry;
    fn from_entry(entry: &CacheEntry) -> Option<Self>;
}

macro_rules! cached {
    ($ty:ty, $variant:ident) => {
        impl Cached for $ty {
            fn into_entry(self) -> CacheEntry {
                CacheEntry::$variant(self)
            }

            fn from_entry(entry: &CacheEntry) -> Option<Self> {
                match entry {
                    CacheEntry::$variant(value) => Some(value.clone()),
                    _ => None,
                }
            }
        }
    };
}

cached!(Vec<DashboardProject>, Projects);
cached!(Project, Project);
cached!(ProjectFormData, EditProject);
cached!(Task, Task);
cached!(Vec<TeamMember>, Team);
cached!(User, User);

/// Per-key state
#[derive(Debug, Clone, PartialEq)]
pub enum Slot {
    Fetching,
    Ready(CacheEntry),
    /// Invalidated; still served until the re-fetch settles
    Stale(CacheEntry),
    /// Stale entry with a re-fetch in flight
    Refreshing(CacheEntry),
    /// Fetch finished without data
    Empty,
    Failed(ApiError),
}

impl Slot {
    fn entry(&self) -> Option<&CacheEntry> {
        match self {
            Slot::Ready(entry) | Slot::Stale(entry) | Slot::Refreshing(entry) => Some(entry),
            _ => None,
        }
    }
}

/// What a view sees for a query
#[derive(Debug, Clone, PartialEq)]
pub enum QueryState<T> {
    /// Query disabled (no key)
    Idle,
    Loading,
    Ready(T),
    /// Finished with no data: failure without a server message, or a payload
    /// that did not match
    Empty,
    Failed(ApiError),
}

impl<T> QueryState<T> {
    pub fn data(&self) -> Option<&T> {
        match self {
            QueryState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, QueryState::Failed(_))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryCache {
    slots: HashMap<QueryKey, Slot>,
}

impl QueryCache {
    /// Cached payload for `key`, stale or not
    pub fn read(&self, key: &QueryKey) -> Option<&CacheEntry> {
        self.slots.get(key).and_then(Slot::entry)
    }

    /// Typed read
    pub fn get<T: Cached>(&self, key: &QueryKey) -> Option<T> {
        self.read(key).and_then(T::from_entry)
    }

    /// Typed view of the key's state; a missing slot reads as loading
    pub fn state<T: Cached>(&self, key: &QueryKey) -> QueryState<T> {
        match self.slots.get(key) {
            None | Some(Slot::Fetching) => QueryState::Loading,
            Some(Slot::Empty) => QueryState::Empty,
            Some(Slot::Failed(e)) => QueryState::Failed(e.clone()),
            Some(slot) => match slot.entry().and_then(T::from_entry) {
                Some(value) => QueryState::Ready(value),
                None => QueryState::Empty,
            },
        }
    }

    /// Mark stale; the payload stays readable and the next active query
    /// re-fetches. Slots without a payload are dropped.
    pub fn invalidate(&mut self, key: &QueryKey) -> bool {
        let Some(slot) = self.slots.remove(key) else {
            return false;
        };
        if let Slot::Ready(entry) | Slot::Stale(entry) | Slot::Refreshing(entry) = slot {
            self.slots.insert(key.clone(), Slot::Stale(entry));
        }
        tracing::debug!(key = %key, "cache invalidated");
        true
    }

    /// True when `key` is missing or stale
    pub fn needs_fetch(&self, key: &QueryKey) -> bool {
        matches!(self.slots.get(key), None | Some(Slot::Stale(_)))
    }

    /// Fetch finished without data (empty or failed)
    pub fn settled_without_data(&self, key: &QueryKey) -> bool {
        matches!(self.slots.get(key), Some(Slot::Empty | Slot::Failed(_)))
    }

    /// Claim the fetch for `key`; false when a fetch is running or fresh data is present
    pub fn begin_fetch(&mut self, key: &QueryKey) -> bool {
        match self.slots.remove(key) {
            None => {
                self.slots.insert(key.clone(), Slot::Fetching);
                true
            }
            Some(Slot::Stale(entry)) => {
                self.slots.insert(key.clone(), Slot::Refreshing(entry));
                true
            }
            Some(slot) => {
                self.slots.insert(key.clone(), slot);
                false
            }
        }
    }

    /// Record the result of a fetch
    pub fn settle<T: Cached>(&mut self, key: QueryKey, result: ApiResult<T>) {
        let slot = match result {
            Ok(Some(value)) => Slot::Ready(value.into_entry()),
            Ok(None) => Slot::Empty,
            Err(e) => Slot::Failed(e),
        };
        self.slots.insert(key, slot);
    }

    /// Replace a cached payload by key, keeping its freshness; refused when
    /// no payload is cached
    pub fn replace(&mut self, key: &QueryKey, entry: CacheEntry) -> bool {
        match self.slots.get_mut(key) {
            Some(Slot::Ready(current) | Slot::Stale(current) | Slot::Refreshing(current)) => {
                *current = entry;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User { id: "u1".into(), name: "Ana".into(), email: "ana@example.com".into() }
    }

    #[test]
    fn test_fetch_lifecycle() {
        let mut cache = QueryCache::default();
        assert_eq!(cache.state::<User>(&QueryKey::User), QueryState::Loading);

        assert!(cache.begin_fetch(&QueryKey::User));
        assert!(!cache.begin_fetch(&QueryKey::User));

        cache.settle(QueryKey::User, Ok(Some(user())));
        assert_eq!(cache.state::<User>(&QueryKey::User), QueryState::Ready(user()));
        assert_eq!(cache.get::<User>(&QueryKey::User), Some(user()));
        assert!(!cache.begin_fetch(&QueryKey::User));
    }

    #[test]
    fn test_invalidate_keeps_stale_data_until_refetch() {
        let mut cache = QueryCache::default();
        cache.settle(QueryKey::User, Ok(Some(user())));
        assert!(!cache.needs_fetch(&QueryKey::User));

        assert!(cache.invalidate(&QueryKey::User));
        assert!(cache.needs_fetch(&QueryKey::User));
        assert_eq!(cache.state::<User>(&QueryKey::User), QueryState::Ready(user()));

        assert!(cache.begin_fetch(&QueryKey::User));
        assert!(!cache.needs_fetch(&QueryKey::User));
        assert!(!cache.begin_fetch(&QueryKey::User));
        assert_eq!(cache.get::<User>(&QueryKey::User), Some(user()));

        let renamed = User { name: "Ana M.".into(), ..user() };
        cache.settle(QueryKey::User, Ok(Some(renamed.clone())));
        assert_eq!(cache.get::<User>(&QueryKey::User), Some(renamed));
        assert!(!cache.invalidate(&QueryKey::Projects));
    }

    #[test]
    fn test_invalidate_drops_unsuccessful_slots() {
        let mut cache = QueryCache::default();
        cache.settle::<Task>(QueryKey::Task("t1".into()), Ok(None));

        assert!(cache.invalidate(&QueryKey::Task("t1".into())));
        assert!(!cache.settled_without_data(&QueryKey::Task("t1".into())));
        assert!(cache.needs_fetch(&QueryKey::Task("t1".into())));
    }

    #[test]
    fn test_failed_fetch_can_be_retried() {
        let mut cache = QueryCache::default();
        let key = QueryKey::Task("t1".into());
        cache.settle::<Task>(key.clone(), Err(ApiError::Request("Task not found".into())));
        assert!(cache.settled_without_data(&key));
        assert!(!cache.needs_fetch(&key));

        cache.invalidate(&key);
        assert!(cache.begin_fetch(&key));
        assert!(!cache.settled_without_data(&key));

        cache.settle(QueryKey::User, Ok(Some(user())));
        assert!(!cache.settled_without_data(&QueryKey::User));
    }

    #[test]
    fn test_empty_and_failed_results() {
        let mut cache = QueryCache::default();
        cache.settle::<Task>(QueryKey::Task("t1".into()), Ok(None));
        cache.settle::<Task>(QueryKey::Task("t2".into()), Err(ApiError::Request("Task not found".into())));

        assert_eq!(cache.state::<Task>(&QueryKey::Task("t1".into())), QueryState::Empty);
        assert!(cache.state::<Task>(&QueryKey::Task("t2".into())).is_error());
    }

    #[test]
    fn test_replace_requires_cached_value() {
        let mut cache = QueryCache::default();
        let entry = CacheEntry::User(user());
        assert!(!cache.replace(&QueryKey::User, entry.clone()));

        cache.begin_fetch(&QueryKey::User);
        assert!(!cache.replace(&QueryKey::User, entry.clone()));

        cache.settle(QueryKey::User, Ok(Some(user())));
        let renamed = User { name: "Ana M.".into(), ..user() };
        assert!(cache.replace(&QueryKey::User, CacheEntry::User(renamed.clone())));
        assert_eq!(cache.get::<User>(&QueryKey::User), Some(renamed));

        cache.invalidate(&QueryKey::User);
        assert!(cache.replace(&QueryKey::User, CacheEntry::User(user())));
        assert!(cache.needs_fetch(&QueryKey::User));
        assert_eq!(cache.get::<User>(&QueryKey::User), Some(user()));
    }

    #[test]
    fn test_wrong_type_reads_as_absent() {
        let mut cache = QueryCache::default();
        cache.settle(QueryKey::User, Ok(Some(user())));
        assert_eq!(cache.get::<Task>(&QueryKey::User), None);
    }

    #[test]
    fn test_key_display() {
        assert_eq!(QueryKey::Project("p1".into()).to_string(), "project/p1");
        assert_eq!(QueryKey::EditProject("p1".into()).to_string(), "editProject/p1");
    }
}
