use leptos::prelude::*;

use crate::components::use_toasts;
use crate::core::models::Column;
use crate::core::services::BrowserHues;
use crate::core::BoardConfig;
use crate::features::kanban::components::{DragOverlay, KanbanColumn, TaskModal};
use crate::features::kanban::hooks::{use_board, use_drag, use_task_dialog};

#[component]
pub fn KanbanBoard() -> impl IntoView {
    let config = use_context::<BoardConfig>().unwrap_or_default();
    let dialog = use_task_dialog();

    let board = use_board(config.color_scheme(), BrowserHues, use_toasts());
    let drag = use_drag(board.store, config.drag_activation_distance, board.move_task);
    let add_task = board.add_task;
    let store = board.store;

    view! {
        <div class="kanban-board" class:dragging=move || drag.gesture.with(|g| g.is_dragging())>
            {Column::all()
                .into_iter()
                .map(|column| {
                    let column_id = column.id;
                    let on_add = Callback::new(move |_: ()| dialog.open(column_id));
                    view! { <KanbanColumn column=column store=store drag=drag on_add=on_add /> }
                })
                .collect_view()}
        </div>
        <DragOverlay drag=drag />
        {move || {
            dialog.open_for().map(|column_id| {
                view! {
                    <TaskModal
                        column_id=column_id
                        on_create=add_task
                        on_close=Callback::new(move |_: ()| dialog.close())
                    />
                }
            })
        }}
    }
}
