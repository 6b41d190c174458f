use leptos::prelude::*;

use crate::core::models::ColumnId;
use crate::features::kanban::{use_task_dialog, KanbanBoard};

#[component]
pub fn Kanban() -> impl IntoView {
    let dialog = use_task_dialog();

    view! {
        <div class="kanban-page">
            <header class="kanban-header">
                <div>
                    <h1>"My Tasks"</h1>
                    <p class="kanban-subtitle">"Manage your projects and tasks"</p>
                </div>
                <div class="kanban-actions">
                    <button class="btn-primary" on:click=move |_| dialog.open(ColumnId::Todo)>
                        "+ New Task"
                    </button>
                </div>
            </header>
            <KanbanBoard />
        </div>
    }
}
