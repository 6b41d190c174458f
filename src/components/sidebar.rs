use leptos::prelude::*;

use crate::core::models::ColumnId;
use crate::features::kanban::use_task_dialog;

#[component]
pub fn Sidebar(collapsed: RwSignal<bool>) -> impl IntoView {
    let dialog = use_task_dialog();

    view! {
        <aside class="sidebar" class:collapsed=move || collapsed.get()>
            <div class="sidebar-header">
                <h2 class="sidebar-title">"Kanban"</h2>
                <button
                    type="button"
                    class="sidebar-toggle"
                    title=move || if collapsed.get() { "Expand sidebar" } else { "Collapse sidebar" }
                    on:click=move |_| collapsed.update(|c| *c = !*c)
                >
                    "❮"
                </button>
            </div>
            <nav class="sidebar-nav">
                <button type="button" class="sidebar-link active" title="Dashboard">
                    <span class="sidebar-icon">"▦"</span>
                    <span class="sidebar-label">"Dashboard"</span>
                </button>
                <button
                    type="button"
                    class="sidebar-link"
                    title="New Task"
                    on:click=move |_| dialog.open(ColumnId::Todo)
                >
                    <span class="sidebar-icon">"+"</span>
                    <span class="sidebar-label">"New Task"</span>
                </button>
            </nav>
        </aside>
    }
}
