use leptos::prelude::*;

use crate::core::models::ColumnId;

/// Open state of the task creation dialog, shared by every "new task" button.
#[derive(Clone, Copy)]
pub struct TaskDialog {
    open_for: RwSignal<Option<ColumnId>>,
}

impl TaskDialog {
    /// Opens the form with `column_id` preselected as status.
    pub fn open(&self, column_id: ColumnId) {
        self.open_for.set(Some(column_id));
    }

    pub fn close(&self) {
        self.open_for.set(None);
    }

    pub fn open_for(&self) -> Option<ColumnId> {
        self.open_for.get()
    }
}

pub fn provide_task_dialog() -> TaskDialog {
    let dialog = TaskDialog {
        open_for: RwSignal::new(None),
    };
    provide_context(dialog);
    dialog
}

pub fn use_task_dialog() -> TaskDialog {
    use_context::<TaskDialog>().expect("task dialog context")
}
