use leptos::prelude::*;
use leptos::ev;
use wasm_bindgen::JsCast;

use crate::core::models::{ColumnId, Priority, Task};
use crate::core::services::Point;
use crate::features::kanban::services::format_due_date;

pub fn priority_class(priority: Priority) -> &'static str {
    match priority {
        Priority::Low => "badge priority-low",
        Priority::Medium => "badge priority-medium",
        Priority::High => "badge priority-high",
    }
}

pub fn status_class(status: &str) -> &'static str {
    match ColumnId::from_id(status) {
        Some(ColumnId::Todo) => "badge status-todo",
        Some(ColumnId::InProgress) => "badge status-in-progress",
        Some(ColumnId::Done) => "badge status-done",
        None => "badge",
    }
}

// Read-only card; the whole surface is the drag handle when `on_press` is set
#[component]
pub fn TaskCard(
    #[prop(into)] task: Task,
    #[prop(optional)] on_press: Option<Callback<(String, Point, Point)>>,
    #[prop(into, default = MaybeSignal::Static(false))] lifted: MaybeSignal<bool>,
) -> impl IntoView {
    let task_id = task.id.clone();
    let handle_pointer_down = move |ev: ev::PointerEvent| {
        let Some(on_press) = on_press else { return };
        if ev.button() != 0 {
            return;
        }
        let point = Point::new(ev.client_x() as f64, ev.client_y() as f64);
        let grab = ev
            .current_target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
            .map(|card| {
                let rect = card.get_bounding_client_rect();
                Point::new(point.x - rect.left(), point.y - rect.top())
            })
            .unwrap_or_default();
        on_press.run((task_id.clone(), point, grab));
    };

    let color = task.color.clone().unwrap_or_default();
    let card_style = format!("--task-color: {};", color);
    let tags: Vec<String> = task
        .tags
        .clone()
        .unwrap_or_default()
        .into_iter()
        .filter(|tag| !tag.is_empty())
        .collect();

    view! {
        <div
            class="task-card"
            class:lifted=move || lifted.get()
            style=card_style
            data-task-id=task.id.clone()
            on:pointerdown=handle_pointer_down
        >
            <div class="task-card-header">
                <h4>{task.title.clone()}</h4>
                <div class="task-card-badges">
                    {task.priority.map(|p| view! { <span class=priority_class(p)>{p.as_str()}</span> })}
                    {task.status.clone().map(|s| view! { <span class=status_class(&s)>{s.clone()}</span> })}
                </div>
            </div>
            <div class="task-card-body">
                {task.description.clone().map(|d| view! { <p class="task-description">{d}</p> })}
                {task.project.clone().map(|p| view! { <p class="task-project">{p}</p> })}
                {task.due_date.map(|d| view! { <p class="task-due">{format!("Due {}", format_due_date(d))}</p> })}
                {(!tags.is_empty()).then(|| view! {
                    <div class="task-tags">
                        {tags.into_iter().map(|tag| view! { <span class="badge tag">{tag}</span> }).collect_view()}
                    </div>
                })}
                {task.progress.map(|p| view! { <p class="task-progress">{format!("Progress: {}%", p)}</p> })}
            </div>
        </div>
    }
}
