use leptos::prelude::*;

use crate::features::kanban::components::TaskCard;
use crate::features::kanban::hooks::DragHook;

// Copy of the lifted card that follows the pointer
#[component]
pub fn DragOverlay(drag: DragHook) -> impl IntoView {
    let position = move || {
        drag.gesture
            .with(|g| g.overlay_position())
            .map(|p| format!("transform: translate({}px, {}px);", p.x, p.y))
            .unwrap_or_default()
    };

    move || {
        drag.active_task.get().map(|task| {
            view! {
                <div class="drag-overlay" style=position>
                    <TaskCard task=task />
                </div>
            }
        })
    }
}
