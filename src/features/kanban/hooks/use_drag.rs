use leptos::ev;
use leptos::prelude::*;

use crate::core::models::Task;
use crate::core::services::{DragEnd, DragGesture, DragStart, Point, TaskStore};

const DROP_TARGET_ATTR: &str = "data-column-id";

#[derive(Clone, Copy)]
pub struct DragHook {
    pub gesture: ReadSignal<DragGesture>,
    /// Snapshot of the lifted task, taken when the drag starts.
    pub active_task: ReadSignal<Option<Task>>,
    /// `(task_id, pointer, grab offset)` from a card's pointerdown.
    pub press: Callback<(String, Point, Point)>,
}

// Pointer tracking for card drags; `on_drop` receives `(task_id, drop_target_id)`
pub fn use_drag(
    store: ReadSignal<TaskStore>,
    activation_distance: f64,
    on_drop: Callback<(String, String)>,
) -> DragHook {
    let gesture = RwSignal::new(DragGesture::new(activation_distance));
    let active_task = RwSignal::new(None::<Task>);

    let press = Callback::new(move |(task_id, point, grab): (String, Point, Point)| {
        gesture.update(|g| g.pointer_down(task_id, point, grab));
    });

    let move_handle = window_event_listener(ev::pointermove, move |ev| {
        let point = Point::new(ev.client_x() as f64, ev.client_y() as f64);
        // Only notify subscribers once the card is actually moving
        let mut started: Option<DragStart> = None;
        gesture.maybe_update(|g| {
            let was_dragging = g.is_dragging();
            started = g.pointer_move(point);
            was_dragging || started.is_some()
        });

        // Threshold crossed: snapshot the task so the overlay survives store updates
        if let Some(start) = started {
            tracing::debug!(task_id = %start.active_id, "drag started");
            let snapshot = store.with_untracked(|s| s.get(&start.active_id).cloned());
            active_task.set(snapshot);
        }
    });

    let up_handle = window_event_listener(ev::pointerup, move |ev| {
        // Resolve the column under the pointer, if any
        let over_id = drop_target_at(ev.client_x(), ev.client_y());
        let mut ended: Option<DragEnd> = None;
        gesture.maybe_update(|g| {
            let was_dragging = g.is_dragging();
            ended = g.pointer_up(over_id);
            was_dragging
        });

        if let Some(end) = ended {
            active_task.set(None);
            // Released outside every column: the gesture is abandoned
            if let Some(over_id) = end.over_id {
                on_drop.run((end.active_id, over_id));
            }
        }
    });

    let cancel_handle = window_event_listener(ev::pointercancel, move |_| {
        gesture.update(|g| g.cancel());
        active_task.set(None);
    });

    // A release outside the window never reaches us as pointerup
    let blur_handle = window_event_listener(ev::blur, move |_| {
        gesture.update(|g| g.cancel());
        active_task.set(None);
    });

    on_cleanup(move || {
        move_handle.remove();
        up_handle.remove();
        cancel_handle.remove();
        blur_handle.remove();
    });

    DragHook {
        gesture: gesture.read_only(),
        active_task: active_task.read_only(),
        press,
    }
}

fn drop_target_at(x: i32, y: i32) -> Option<String> {
    let element = document().element_from_point(x as f32, y as f32)?;
    let target = element
        .closest(&format!("[{}]", DROP_TARGET_ATTR))
        .ok()
        .flatten()?;
    target.get_attribute(DROP_TARGET_ATTR)
}
