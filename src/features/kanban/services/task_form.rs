use chrono::NaiveDate;

use crate::core::error::{BoardError, Result};
use crate::core::models::{ColumnId, Priority, TaskDraft};

pub const CATEGORIES: [(&str, &str); 3] = [
    ("work", "Work"),
    ("personal", "Personal"),
    ("shopping", "Shopping"),
];

pub const PROJECTS: [(&str, &str); 3] = [
    ("website", "Website"),
    ("mobile-app", "Mobile App"),
    ("marketing", "Marketing"),
];

/// Raw input of the task creation form.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    /// ISO `YYYY-MM-DD`, as produced by `<input type="date">`.
    pub due_date: String,
    pub category: String,
    pub project: String,
    pub tags: String,
    pub progress: u8,
    pub status: String,
}

impl Default for TaskForm {
    fn default() -> Self {
        Self::for_column(ColumnId::Todo)
    }
}

impl TaskForm {
    pub fn for_column(column_id: ColumnId) -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            priority: Priority::Low,
            due_date: String::new(),
            category: String::new(),
            project: String::new(),
            tags: String::new(),
            progress: 0,
            status: column_id.as_str().to_string(),
        }
    }

    pub fn into_draft(self) -> Result<TaskDraft> {
        let mut draft = TaskDraft::new(self.title)?
            .priority(self.priority)
            .tags(parse_tags(&self.tags))
            .progress(self.progress)?
            .status(self.status);

        // Blank optional inputs stay unset
        if let Some(description) = non_empty(self.description) {
            draft = draft.description(description);
        }
        if let Some(category) = non_empty(self.category) {
            draft = draft.category(category);
        }
        if let Some(project) = non_empty(self.project) {
            draft = draft.project(project);
        }
        if let Some(due_date) = parse_due_date(&self.due_date)? {
            draft = draft.due_date(due_date);
        }
        Ok(draft)
    }
}

/// Splits on commas and trims each piece. Empty input yields one empty tag.
pub fn parse_tags(input: &str) -> Vec<String> {
    input.split(',').map(|tag| tag.trim().to_string()).collect()
}

pub fn parse_due_date(input: &str) -> Result<Option<NaiveDate>> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| BoardError::InvalidDueDate(input.to_string()))
}

/// `Mar 05, 2026` style label for cards.
pub fn format_due_date(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Task;
    use crate::core::services::TaskStore;

    fn submit(form: TaskForm) -> Task {
        let draft = form.into_draft().unwrap();
        let column_id = draft.initial_column();
        Task::new(draft, column_id, "hsl(0, 70%, 80%)".to_string())
    }

    fn filled() -> TaskForm {
        TaskForm {
            title: "Launch page".to_string(),
            description: "Landing copy".to_string(),
            priority: Priority::High,
            due_date: "2026-11-02".to_string(),
            category: "work".to_string(),
            project: "website".to_string(),
            tags: "seo, copy ,design".to_string(),
            progress: 40,
            status: "in-progress".to_string(),
        }
    }

    #[test]
    fn defaults_match_a_fresh_form() {
        let form = TaskForm::default();
        assert_eq!(form.priority, Priority::Low);
        assert_eq!(form.progress, 0);
        assert_eq!(form.status, "todo");
    }

    #[test]
    fn column_button_preselects_status() {
        assert_eq!(TaskForm::for_column(ColumnId::Done).status, "done");
    }

    #[test]
    fn filled_form_packages_every_field() {
        let task = submit(filled());
        assert_eq!(task.title, "Launch page");
        assert_eq!(task.description.as_deref(), Some("Landing copy"));
        assert_eq!(task.priority, Some(Priority::High));
        assert_eq!(task.due_date, NaiveDate::from_ymd_opt(2026, 11, 2));
        assert_eq!(task.category.as_deref(), Some("work"));
        assert_eq!(task.project.as_deref(), Some("website"));
        assert_eq!(
            task.tags,
            Some(vec!["seo".to_string(), "copy".to_string(), "design".to_string()])
        );
        assert_eq!(task.progress, Some(40));
        assert_eq!(task.column_id, ColumnId::InProgress);
    }

    #[test]
    fn blank_optional_fields_become_none() {
        let task = submit(TaskForm {
            title: "Only a title".to_string(),
            ..TaskForm::default()
        });
        assert_eq!(task.description, None);
        assert_eq!(task.category, None);
        assert_eq!(task.project, None);
        assert_eq!(task.due_date, None);
    }

    #[test]
    fn empty_tag_input_yields_single_empty_tag() {
        assert_eq!(parse_tags(""), vec![String::new()]);
        let task = submit(TaskForm {
            title: "x".to_string(),
            ..TaskForm::default()
        });
        assert_eq!(task.tags, Some(vec![String::new()]));
    }

    #[test]
    fn whitespace_title_still_creates_a_task() {
        let draft = TaskForm {
            title: "   ".to_string(),
            ..TaskForm::default()
        }
        .into_draft()
        .unwrap();

        let mut store = TaskStore::new();
        store.add_task(draft, &mut || 90);
        assert_eq!(store.len(), 1);
        assert_eq!(store.tasks()[0].title, "   ");
    }

    #[test]
    fn empty_title_is_rejected() {
        assert_eq!(TaskForm::default().into_draft(), Err(BoardError::EmptyTitle));
    }

    #[test]
    fn bad_due_date_is_rejected() {
        let form = TaskForm {
            due_date: "02/11/2026".to_string(),
            ..filled()
        };
        assert_eq!(
            form.into_draft(),
            Err(BoardError::InvalidDueDate("02/11/2026".to_string()))
        );
    }

    #[test]
    fn due_date_label() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 5).unwrap();
        assert_eq!(format_due_date(date), "Mar 05, 2026");
    }
}
