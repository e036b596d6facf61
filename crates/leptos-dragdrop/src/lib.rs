//! Leptos DragDrop Utilities
//!
//! Simple drag-and-drop for Leptos using mouse events.
//! Draggables and droppables are identified by opaque string ids; on mouseup
//! the caller receives the dragged id and the droppable under the pointer, if any.
//! Uses movement threshold to distinguish click from drag.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Result of a finished drag gesture
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragEnd {
    /// Id of the dragged element
    pub active: String,
    /// Id of the droppable under the pointer at release
    pub over: Option<String>,
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_id_read: ReadSignal<Option<String>>,
    pub dragging_id_write: WriteSignal<Option<String>>,
    pub over_id_read: ReadSignal<Option<String>>,
    pub over_id_write: WriteSignal<Option<String>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending draggable id (mousedown but not yet dragging)
    pub pending_id_read: ReadSignal<Option<String>>,
    pub pending_id_write: WriteSignal<Option<String>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_id_read, dragging_id_write) = signal(None::<String>);
    let (over_id_read, over_id_write) = signal(None::<String>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_id_read, pending_id_write) = signal(None::<String>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_id_read,
        dragging_id_write,
        over_id_read,
        over_id_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_id_read,
        pending_id_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// Whether the pointer moved far enough from the press point to count as a drag
pub fn passed_threshold(start: (i32, i32), current: (i32, i32)) -> bool {
    let dx = (current.0 - start.0).abs();
    let dy = (current.1 - start.1).abs();
    dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX
}

/// Build the drag-end event; `None` when the press never became a drag
pub fn resolve_drag_end(dragging: Option<String>, over: Option<String>) -> Option<DragEnd> {
    dragging.map(|active| DragEnd { active, over })
}

/// Settle the gesture on mouseup
///
/// A press that never crossed the threshold only clears the pending state and
/// yields `None`, leaving `drag_just_ended` untouched so the click handler
/// still runs. A real drag is reset and flagged.
pub fn finish_gesture(dnd: &DndSignals) -> Option<DragEnd> {
    // Signals are gone once the owning view unmounts
    let dragging_id = dnd.dragging_id_read.try_get_untracked()?;
    let over_id = dnd.over_id_read.get_untracked();
    dnd.pending_id_write.set(None);

    let event = resolve_drag_end(dragging_id, over_id)?;
    dnd.dragging_id_write.set(None);
    dnd.over_id_write.set(None);
    dnd.drag_just_ended_write.set(true);
    Some(event)
}

/// Clear `drag_just_ended` after the click that follows the mouseup
fn schedule_drag_flag_reset(dnd: &DndSignals) {
    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended_write;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.try_set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), 100);
        cb.forget();
    }
}

/// Whether a press on an element with this tag may start a drag
///
/// Form controls inside a draggable keep their own behavior.
pub fn starts_drag(tag_name: &str) -> bool {
    !matches!(tag_name.to_ascii_uppercase().as_str(), "BUTTON" | "INPUT" | "SELECT" | "TEXTAREA")
}

/// Create mousedown handler for draggable elements
/// Records pending drag with start position
pub fn make_on_mousedown(dnd: DndSignals, drag_id: String) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            if let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) {
                if !starts_drag(&target.tag_name()) { return; }
            }
            dnd.pending_id_write.set(Some(drag_id.clone()));
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
        }
    }
}

/// Bind document mousemove - starts drag if moved enough
pub fn bind_global_mousemove(dnd: DndSignals) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        // Signals are gone once the owning view unmounts
        let Some(pending) = dnd.pending_id_read.try_get_untracked() else { return };
        let Some(dragging) = dnd.dragging_id_read.try_get_untracked() else { return };

        if pending.is_some() && dragging.is_none() {
            let start = (dnd.start_x_read.get_untracked(), dnd.start_y_read.get_untracked());
            if passed_threshold(start, (ev.client_x(), ev.client_y())) {
                dnd.dragging_id_write.set(pending);
            }
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Create mouseenter handler for droppable areas
pub fn make_on_droppable_mouseenter(dnd: DndSignals, drop_id: String) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.over_id_write.set(Some(drop_id.clone()));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.over_id_write.set(None);
        }
    }
}

/// Bind global mouseup handler for drop detection
///
/// `on_drag_end` runs for every completed drag, including drops outside any
/// droppable (`over == None`). Plain clicks do not reach it.
pub fn bind_global_mouseup<F>(dnd: DndSignals, on_drag_end: F)
where
    F: Fn(DragEnd) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        if let Some(event) = finish_gesture(&dnd) {
            schedule_drag_flag_reset(&dnd);
            on_drag_end(event);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    // Also bind global mousemove
    bind_global_mousemove(dnd);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_movement_is_a_click() {
        assert!(!passed_threshold((10, 10), (14, 15)));
        assert!(!passed_threshold((10, 10), (5, 5)));
    }

    #[test]
    fn test_movement_beyond_threshold_starts_drag() {
        assert!(passed_threshold((10, 10), (16, 10)));
        assert!(passed_threshold((10, 10), (10, 4)));
    }

    #[test]
    fn test_resolve_drag_end() {
        assert_eq!(resolve_drag_end(None, Some("inProgress".into())), None);
        assert_eq!(
            resolve_drag_end(Some("t1".into()), None),
            Some(DragEnd { active: "t1".into(), over: None })
        );
        assert_eq!(
            resolve_drag_end(Some("t1".into()), Some("completed".into())),
            Some(DragEnd { active: "t1".into(), over: Some("completed".into()) })
        );
    }

    #[test]
    fn test_form_controls_do_not_start_drag() {
        assert!(!starts_drag("BUTTON"));
        assert!(!starts_drag("input"));
        assert!(!starts_drag("SELECT"));
        assert!(starts_drag("H4"));
        assert!(starts_drag("LI"));
        assert!(starts_drag("P"));
    }

    #[test]
    fn test_click_release_does_not_flag_drag() {
        let owner = Owner::new();
        owner.with(|| {
            let dnd = create_dnd_signals();
            dnd.pending_id_write.set(Some("t1".into()));

            assert_eq!(finish_gesture(&dnd), None);
            assert!(!dnd.drag_just_ended_read.get_untracked());
            assert_eq!(dnd.pending_id_read.get_untracked(), None);
        });
    }

    #[test]
    fn test_drag_release_flags_and_resets() {
        let owner = Owner::new();
        owner.with(|| {
            let dnd = create_dnd_signals();
            dnd.pending_id_write.set(Some("t1".into()));
            dnd.dragging_id_write.set(Some("t1".into()));
            dnd.over_id_write.set(Some("completed".into()));

            assert_eq!(
                finish_gesture(&dnd),
                Some(DragEnd { active: "t1".into(), over: Some("completed".into()) })
            );
            assert!(dnd.drag_just_ended_read.get_untracked());
            assert_eq!(dnd.dragging_id_read.get_untracked(), None);
            assert_eq!(dnd.over_id_read.get_untracked(), None);
            assert_eq!(dnd.pending_id_read.get_untracked(), None);
        });
    }
}
