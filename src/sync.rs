//! Board Synchronization
//!
//! Turns a finished drag into a status change, patches the cached project
//! before the server answers, and reconciles once it does. A failed request
//! does not roll the patch back: the board keeps the dropped placement until
//! the project is invalidated and fetched again.

use leptos_dragdrop::DragEnd;

use crate::api::{ApiClient, Transport};
use crate::cache::{CacheEntry, QueryCache, QueryKey};
use crate::models::{Project, TaskStatus};
use crate::mutation::MutationOutcome;
use crate::notify::Notices;

/// A requested status change for one task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusChange {
    pub project_id: String,
    pub task_id: String,
    pub status: TaskStatus,
}

/// Where the change was made; decides which cache entries are invalidated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeOrigin {
    /// Dropped on a board column
    Board,
    /// Picked in the task detail overlay
    TaskDetail,
}

/// Interpret a drag end; `None` when nothing valid was under the pointer
pub fn resolve_drop(project_id: &str, event: &DragEnd) -> Option<StatusChange> {
    let over = event.over.as_deref()?;
    match over.parse::<TaskStatus>() {
        Ok(status) => Some(StatusChange {
            project_id: project_id.to_string(),
            task_id: event.active.clone(),
            status,
        }),
        Err(e) => {
            tracing::debug!(error = %e, "drop target is not a status column");
            None
        }
    }
}

/// Copy of `project` with one task's status replaced
pub fn patch_task_status(project: &Project, task_id: &str, status: TaskStatus) -> Project {
    let tasks = project
        .tasks
        .iter()
        .map(|task| {
            if task.id == task_id {
                let mut task = task.clone();
                task.status = status;
                task
            } else {
                task.clone()
            }
        })
        .collect();

    Project { tasks, ..project.clone() }
}

/// Optimistically rewrite the cached project; false when there is nothing to patch
pub fn apply_optimistic(cache: &mut QueryCache, change: &StatusChange) -> bool {
    let key = QueryKey::Project(change.project_id.clone());
    let Some(project) = cache.get::<Project>(&key) else {
        tracing::debug!(key = %key, "no cached project to patch");
        return false;
    };
    if !project.tasks.iter().any(|task| task.id == change.task_id) {
        tracing::debug!(task = %change.task_id, "dragged task not in cached project");
        return false;
    }

    let patched = patch_task_status(&project, &change.task_id, change.status);
    cache.replace(&key, CacheEntry::Project(patched))
}

/// Send the status update
pub async fn commit<T: Transport>(api: &ApiClient<T>, change: &StatusChange) -> MutationOutcome {
    tracing::info!(
        project = %change.project_id,
        task = %change.task_id,
        status = change.status.key(),
        "updating task status"
    );
    api.update_status(&change.project_id, &change.task_id, change.status)
        .await
        .into()
}

/// Apply the server's answer: notify, and on success mark the entries stale
/// so active queries fetch authoritative state while the board keeps showing
/// the patched copy
pub fn reconcile(
    cache: &mut QueryCache,
    notices: &mut Notices,
    change: &StatusChange,
    origin: ChangeOrigin,
    outcome: &MutationOutcome,
) {
    if outcome.notify(notices) {
        cache.invalidate(&QueryKey::Project(change.project_id.clone()));
        if origin == ChangeOrigin::TaskDetail {
            cache.invalidate(&QueryKey::Task(change.task_id.clone()));
        }
    } else if *outcome == MutationOutcome::Silent {
        tracing::warn!(task = %change.task_id, "status update finished without a result; cache left as is");
    }
}
