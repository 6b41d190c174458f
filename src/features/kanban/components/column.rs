use leptos::prelude::*;

use crate::core::models::{Column, Task};
use crate::core::services::TaskStore;
use crate::features::kanban::components::TaskCard;
use crate::features::kanban::hooks::DragHook;

#[component]
pub fn KanbanColumn(
    column: Column,
    store: ReadSignal<TaskStore>,
    drag: DragHook,
    on_add: Callback<()>,
) -> impl IntoView {
    let column_id = column.id;
    let column_tasks = move || {
        store.with(|store| {
            store
                .tasks_in(column_id)
                .into_iter()
                .cloned()
                .collect::<Vec<Task>>()
        })
    };

    view! {
        <div class="kanban-column" data-column-id=column_id.as_str()>
            <div class="column-header">
                <h3>{column.title}</h3>
                <span class="task-count">
                    {move || store.with(|store| store.column_count(column_id))}
                </span>
            </div>
            <div class="column-content">
                <For
                    each=column_tasks
                    key=|task| task.id.clone()
                    children=move |task: Task| {
                        let task_id = task.id.clone();
                        let lifted = Signal::derive(move || {
                            drag.gesture.with(|g| g.active_id() == Some(task_id.as_str()))
                        });
                        view! { <TaskCard task=task on_press=drag.press lifted=lifted /> }
                    }
                />
                <button type="button" class="add-task-btn" on:click=move |_| on_add.run(())>
                    "+ Add task"
                </button>
            </div>
        </div>
    }
}
