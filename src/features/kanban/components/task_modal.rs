use leptos::prelude::*;
use leptos::{ev, html::Dialog};

use crate::core::models::{Column, ColumnId, Priority, TaskDraft};
use crate::features::kanban::services::{TaskForm, CATEGORIES, PROJECTS};

// Mounted fresh on every open, so the fields never carry over between tasks
#[component]
pub fn TaskModal(
    column_id: ColumnId,
    on_create: Callback<TaskDraft>,
    on_close: Callback<()>,
) -> impl IntoView {
    let dialog_ref: NodeRef<Dialog> = NodeRef::new();
    let initial = TaskForm::for_column(column_id);

    let (title, set_title) = signal(initial.title);
    let (description, set_description) = signal(initial.description);
    let (priority, set_priority) = signal(initial.priority);
    let (due_date, set_due_date) = signal(initial.due_date);
    let (category, set_category) = signal(initial.category);
    let (project, set_project) = signal(initial.project);
    let (tags, set_tags) = signal(initial.tags);
    let (progress, set_progress) = signal(initial.progress);
    let (status, set_status) = signal(initial.status);

    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if !dialog.open() {
                let _ = dialog.show_modal();
            }
        }
    });

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        // Collect the current field values into one form
        let form = TaskForm {
            title: title.get_untracked(),
            description: description.get_untracked(),
            priority: priority.get_untracked(),
            due_date: due_date.get_untracked(),
            category: category.get_untracked(),
            project: project.get_untracked(),
            tags: tags.get_untracked(),
            progress: progress.get_untracked(),
            status: status.get_untracked(),
        };

        match form.into_draft() {
            Ok(draft) => {
                // Hand the draft to the board, then close; on_close unmounts the modal
                on_create.run(draft);
                if let Some(dialog) = dialog_ref.get() {
                    dialog.close();
                }
            }
            // Keep the dialog open so the input can be corrected
            Err(e) => tracing::warn!(error = %e, "task form rejected"),
        }
    };

    let close_modal = move |_| {
        if let Some(dialog) = dialog_ref.get() {
            dialog.close();
        }
    };

    view! {
        <dialog node_ref=dialog_ref class="task-modal" on:close=move |_| on_close.run(())>
            <div class="modal-content">
                <div class="modal-header">
                    <h3>"CREATE TASK"</h3>
                    <button type="button" class="modal-close" on:click=close_modal>"×"</button>
                </div>
                <form on:submit=handle_submit>
                    <div class="form-group">
                        <label for="task-title">"TITLE"</label>
                        <input
                            id="task-title"
                            type="text"
                            placeholder="Task title..."
                            on:input=move |ev| set_title.set(event_target_value(&ev))
                            prop:value=move || title.get()
                            required
                        />
                    </div>
                    <div class="form-group">
                        <label for="task-description">"DESCRIPTION"</label>
                        <textarea
                            id="task-description"
                            placeholder="Task description..."
                            rows="3"
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                            prop:value=move || description.get()
                        ></textarea>
                    </div>
                    <div class="form-group">
                        <label for="task-priority">"PRIORITY"</label>
                        <select
                            id="task-priority"
                            class=move || format!("priority-select priority-{}", priority.get().as_str())
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                set_priority.set(Priority::from_value(&value).unwrap_or_default());
                            }
                            prop:value=move || priority.get().as_str()
                        >
                            {Priority::all()
                                .into_iter()
                                .map(|p| view! { <option value=p.as_str()>{p.label()}</option> })
                                .collect_view()}
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="task-due-date">"DUE DATE"</label>
                        <input
                            id="task-due-date"
                            type="date"
                            on:input=move |ev| set_due_date.set(event_target_value(&ev))
                            prop:value=move || due_date.get()
                        />
                    </div>
                    <div class="form-group">
                        <label for="task-category">"CATEGORY"</label>
                        <select
                            id="task-category"
                            on:change=move |ev| set_category.set(event_target_value(&ev))
                            prop:value=move || category.get()
                        >
                            <option value="">"Select a category"</option>
                            {CATEGORIES
                                .into_iter()
                                .map(|(value, label)| view! { <option value=value>{label}</option> })
                                .collect_view()}
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="task-project">"PROJECT"</label>
                        <select
                            id="task-project"
                            on:change=move |ev| set_project.set(event_target_value(&ev))
                            prop:value=move || project.get()
                        >
                            <option value="">"Select a project"</option>
                            {PROJECTS
                                .into_iter()
                                .map(|(value, label)| view! { <option value=value>{label}</option> })
                                .collect_view()}
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="task-tags">"TAGS"</label>
                        <input
                            id="task-tags"
                            type="text"
                            placeholder="Comma separated tags..."
                            on:input=move |ev| set_tags.set(event_target_value(&ev))
                            prop:value=move || tags.get()
                        />
                    </div>
                    <div class="form-group">
                        <label for="task-progress">"PROGRESS"</label>
                        <input
                            id="task-progress"
                            type="range"
                            min="0"
                            max="100"
                            step="1"
                            on:input=move |ev| {
                                let value = event_target_value(&ev).parse::<u8>().unwrap_or(0).min(100);
                                set_progress.set(value);
                            }
                            prop:value=move || progress.get().to_string()
                        />
                        <p class="progress-value">{move || format!("{}%", progress.get())}</p>
                    </div>
                    <div class="form-group">
                        <label for="task-status">"STATUS"</label>
                        <select
                            id="task-status"
                            on:change=move |ev| set_status.set(event_target_value(&ev))
                            prop:value=move || status.get()
                        >
                            {Column::all()
                                .into_iter()
                                .map(|c| view! { <option value=c.id.as_str()>{c.title}</option> })
                                .collect_view()}
                        </select>
                    </div>
                    <div class="modal-actions">
                        <button type="button" class="btn-secondary" on:click=close_modal>"CANCEL"</button>
                        <button type="submit" class="btn-primary">"CREATE"</button>
                    </div>
                </form>
            </div>
        </dialog>
    }
}
