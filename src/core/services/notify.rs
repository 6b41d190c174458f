use crate::core::models::ColumnId;

/// Fire-and-forget receiver for user-facing notifications.
pub trait NotificationSink {
    fn notify(&self, title: &str, description: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn task_created(column_id: ColumnId) -> Self {
        Self {
            title: "Task created".to_string(),
            description: format!("New task added to {}", column_id.title()),
        }
    }

    pub fn task_moved(column_id: ColumnId) -> Self {
        Self {
            title: "Task moved".to_string(),
            description: format!("Task moved to {}", column_id.title()),
        }
    }

    pub fn send(&self, sink: &impl NotificationSink) {
        sink.notify(&self.title, &self.description);
    }
}
