use leptos::prelude::*;

use crate::components::{provide_toasts, Sidebar, Toaster};
use crate::core::BoardConfig;
use crate::features::kanban::provide_task_dialog;
use crate::pages::Kanban;

#[component]
pub fn App(config: BoardConfig) -> impl IntoView {
    let collapsed = RwSignal::new(false);

    provide_toasts(config.toast_duration_ms);
    provide_task_dialog();
    provide_context(config);

    view! {
        <div class="app">
            <Sidebar collapsed=collapsed />
            <main class="app-main" class:sidebar-collapsed=move || collapsed.get()>
                <Kanban />
            </main>
            <Toaster />
        </div>
    }
}
