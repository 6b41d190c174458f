use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::error::{BoardError, Result};
use crate::core::models::ColumnId;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    pub fn from_value(value: &str) -> Option<Priority> {
        match value {
            "low" => Some(Priority::Low),
            "medium" => Some(Priority::Medium),
            "high" => Some(Priority::High),
            _ => None,
        }
    }

    pub fn all() -> [Priority; 3] {
        [Priority::Low, Priority::Medium, Priority::High]
    }
}

/// A checklist entry attached to a task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskAction {
    pub id: String,
    pub name: String,
    pub completed: bool,
    pub tag: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub column_id: ColumnId,
    pub due_date: Option<NaiveDate>,
    pub category: Option<String>,
    pub project: Option<String>,
    pub tags: Option<Vec<String>>,
    pub color: Option<String>,
    pub progress: Option<u8>,
    pub status: Option<String>,
    pub actions: Option<Vec<TaskAction>>,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Builds a task from a draft, generating its id and creation time.
    pub fn new(draft: TaskDraft, column_id: ColumnId, color: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: draft.title,
            description: draft.description,
            priority: draft.priority,
            column_id,
            due_date: draft.due_date,
            category: draft.category,
            project: draft.project,
            tags: draft.tags,
            color: Some(color),
            progress: draft.progress,
            status: draft.status,
            actions: draft.actions,
            created_at: Utc::now(),
        }
    }

    /// Same task placed in another column.
    pub fn with_column(&self, column_id: ColumnId) -> Self {
        Self {
            column_id,
            ..self.clone()
        }
    }
}

/// Field set collected before a task gets its id, column and color.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDraft {
    title: String,
    description: Option<String>,
    priority: Option<Priority>,
    due_date: Option<NaiveDate>,
    category: Option<String>,
    project: Option<String>,
    tags: Option<Vec<String>>,
    progress: Option<u8>,
    status: Option<String>,
    actions: Option<Vec<TaskAction>>,
}

impl TaskDraft {
    /// Only the empty string is refused; a title of spaces is still a title.
    pub fn new(title: impl Into<String>) -> Result<Self> {
        let title = title.into();
        if title.is_empty() {
            return Err(BoardError::EmptyTitle);
        }
        Ok(Self {
            title,
            description: None,
            priority: None,
            due_date: None,
            category: None,
            project: None,
            tags: None,
            progress: None,
            status: None,
            actions: None,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn progress(mut self, progress: u8) -> Result<Self> {
        if progress > 100 {
            return Err(BoardError::ProgressOutOfRange(progress));
        }
        self.progress = Some(progress);
        Ok(self)
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn actions(mut self, actions: Vec<TaskAction>) -> Self {
        self.actions = Some(actions);
        self
    }

    /// Column the task starts in: its status when that names a column, else `todo`.
    pub fn initial_column(&self) -> ColumnId {
        self.status
            .as_deref()
            .and_then(ColumnId::from_id)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_rejects_only_empty_titles() {
        assert_eq!(TaskDraft::new(""), Err(BoardError::EmptyTitle));
        assert_eq!(TaskDraft::new("   ").unwrap().title(), "   ");
    }

    #[test]
    fn draft_rejects_progress_above_hundred() {
        let draft = TaskDraft::new("Write report").unwrap();
        assert_eq!(draft.clone().progress(101), Err(BoardError::ProgressOutOfRange(101)));
        assert_eq!(draft.progress(100).unwrap().progress, Some(100));
    }

    #[test]
    fn rejected_progress_never_reaches_the_task() {
        let draft = TaskDraft::new("Write report").unwrap().progress(30).unwrap();
        assert!(draft.clone().progress(250).is_err());

        let task = Task::new(draft, ColumnId::Todo, "hsl(0, 70%, 80%)".to_string());
        assert_eq!(task.progress, Some(30));
    }

    #[test]
    fn initial_column_follows_known_status() {
        let draft = TaskDraft::new("Ship it").unwrap().status("in-progress");
        assert_eq!(draft.initial_column(), ColumnId::InProgress);
    }

    #[test]
    fn initial_column_defaults_to_todo() {
        let draft = TaskDraft::new("Ship it").unwrap();
        assert_eq!(draft.initial_column(), ColumnId::Todo);

        let draft = draft.status("blocked");
        assert_eq!(draft.initial_column(), ColumnId::Todo);
    }

    #[test]
    fn with_column_keeps_every_other_field() {
        let draft = TaskDraft::new("Plan sprint")
            .unwrap()
            .description("two weeks")
            .priority(Priority::High)
            .tags(vec!["team".to_string()]);
        let task = Task::new(draft, ColumnId::Todo, "hsl(10, 70%, 80%)".to_string());

        let moved = task.with_column(ColumnId::Done);
        assert_eq!(moved.column_id, ColumnId::Done);
        assert_eq!(moved.with_column(ColumnId::Todo), task);
    }

    #[test]
    fn priority_values_round_trip_through_form_values() {
        for priority in Priority::all() {
            assert_eq!(Priority::from_value(priority.as_str()), Some(priority));
        }
        assert_eq!(Priority::from_value("urgent"), None);
    }
}
