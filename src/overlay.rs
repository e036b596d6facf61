//! Detail Overlays
//!
//! Which modal is open is derived from the location's query parameters;
//! there is no separate visibility flag.

use crate::cache::QueryState;
use crate::routes::{Location, Route};

pub const NEW_TASK: &str = "newTask";
pub const EDIT_TASK: &str = "editTask";
pub const VIEW_TASK: &str = "viewTask";
pub const DELETE_PROJECT: &str = "deleteProject";

/// Target id of an id-carrying overlay; `None` keeps it closed and its query disabled
pub fn overlay_target(location: &Location, param: &str) -> Option<String> {
    location.param(param)
}

pub fn new_task_open(location: &Location) -> bool {
    location.param(NEW_TASK).as_deref() == Some("true")
}

/// What an overlay renders for its target and query state
#[derive(Debug, Clone, PartialEq)]
pub enum OverlayView<T> {
    Hidden,
    Loading,
    Show(T),
    Redirect(Route),
}

pub fn overlay_view<T>(target: Option<&str>, state: QueryState<T>) -> OverlayView<T> {
    if target.is_none() {
        return OverlayView::Hidden;
    }
    match state {
        QueryState::Ready(value) => OverlayView::Show(value),
        QueryState::Failed(_) => OverlayView::Redirect(Route::NotFound),
        QueryState::Loading => OverlayView::Loading,
        // No data and no error: nothing to show
        QueryState::Idle | QueryState::Empty => OverlayView::Hidden,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::RecordingTransport;
    use crate::api::ApiError;
    use crate::cache::{QueryCache, QueryKey};
    use crate::models::Task;

    #[test]
    fn test_targets_from_query() {
        let location = Location::parse("/projects/p1?viewTask=t2");
        assert_eq!(overlay_target(&location, VIEW_TASK), Some("t2".into()));
        assert_eq!(overlay_target(&location, EDIT_TASK), None);
        assert!(!new_task_open(&location));

        assert!(new_task_open(&Location::parse("/projects/p1?newTask=true")));
        assert_eq!(overlay_target(&Location::parse("/?deleteProject="), DELETE_PROJECT), None);
    }

    #[test]
    fn test_overlay_view_states() {
        assert_eq!(overlay_view::<u8>(None, QueryState::Ready(1)), OverlayView::Hidden);
        assert_eq!(overlay_view::<u8>(Some("t1"), QueryState::Loading), OverlayView::Loading);
        assert_eq!(overlay_view::<u8>(Some("t1"), QueryState::Ready(1)), OverlayView::Show(1));
        assert_eq!(overlay_view::<u8>(Some("t1"), QueryState::Empty), OverlayView::Hidden);
        assert_eq!(
            overlay_view::<u8>(Some("t1"), QueryState::Failed(ApiError::Request("x".into()))),
            OverlayView::Redirect(Route::NotFound)
        );
    }

    #[tokio::test]
    async fn test_missing_task_redirects_to_not_found() {
        let transport = RecordingTransport::default();
        transport.respond(404, r#"{"error":"Task not found"}"#);
        let api = transport.client();
        let mut cache = QueryCache::default();

        let location = Location::parse("/projects/P?viewTask=T2");
        let target = overlay_target(&location, VIEW_TASK);
        let key = QueryKey::Task("T2".into());

        assert!(cache.begin_fetch(&key));
        cache.settle(key.clone(), api.get_task("P", "T2").await);

        let view = overlay_view(target.as_deref(), cache.state::<Task>(&key));
        assert_eq!(view, OverlayView::Redirect(Route::NotFound));
    }
}
