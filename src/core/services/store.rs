use crate::core::error::{BoardError, Result};
use crate::core::models::{Column, ColumnId, Task, TaskDraft};
use crate::core::services::color::{ColorScheme, HueSource};

/// In-memory task list for the current session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskStore {
    tasks: Vec<Task>,
    scheme: ColorScheme,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scheme(scheme: ColorScheme) -> Self {
        Self {
            tasks: Vec::new(),
            scheme,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, task_id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == task_id)
    }

    /// Appends a task built from `draft` with a fresh id and color.
    pub fn add_task(&mut self, draft: TaskDraft, hues: &mut impl HueSource) -> &Task {
        let column_id = draft.initial_column();
        let color = self.scheme.color_for(hues);
        let task = Task::new(draft, column_id, color);
        tracing::info!(task_id = %task.id, column = column_id.as_str(), "task created");
        self.tasks.push(task);
        &self.tasks[self.tasks.len() - 1]
    }

    /// Places a task in the column named by `target`.
    ///
    /// The task is replaced by a new value, every field but the column
    /// unchanged. Unknown columns or tasks leave the store as it was.
    pub fn move_task(&mut self, task_id: &str, target: &str) -> Result<&Task> {
        let column_id =
            ColumnId::from_id(target).ok_or_else(|| BoardError::UnknownColumn(target.to_string()))?;
        let index = self
            .tasks
            .iter()
            .position(|t| t.id == task_id)
            .ok_or_else(|| BoardError::UnknownTask(task_id.to_string()))?;

        let task = self.tasks[index].with_column(column_id);
        self.tasks[index] = task;
        tracing::info!(task_id, column = column_id.as_str(), "task moved");
        Ok(&self.tasks[index])
    }

    pub fn tasks_in(&self, column_id: ColumnId) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.column_id == column_id).collect()
    }

    pub fn column_count(&self, column_id: ColumnId) -> usize {
        self.tasks.iter().filter(|t| t.column_id == column_id).count()
    }

    /// Tasks grouped by column, columns in board order, store order within each.
    pub fn partition(&self) -> Vec<(Column, Vec<Task>)> {
        Column::all()
            .into_iter()
            .map(|column| {
                let tasks = self.tasks_in(column.id).into_iter().cloned().collect();
                (column, tasks)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Priority;

    fn draft(title: &str) -> TaskDraft {
        TaskDraft::new(title).unwrap()
    }

    fn store_with(titles_and_status: &[(&str, &str)]) -> TaskStore {
        let mut store = TaskStore::new();
        for (title, status) in titles_and_status {
            store.add_task(draft(title).status(*status), &mut || 42);
        }
        store
    }

    #[test]
    fn buy_milk_lands_in_todo() {
        let mut store = TaskStore::new();
        let task = store
            .add_task(draft("Buy milk").status("todo"), &mut || 30)
            .clone();

        assert_eq!(store.len(), 1);
        assert!(!task.id.is_empty());
        assert_eq!(task.column_id, ColumnId::Todo);
        assert_eq!(task.color.as_deref(), Some("hsl(30, 70%, 80%)"));
    }

    #[test]
    fn add_task_seeds_column_from_status() {
        let store = store_with(&[
            ("a", "todo"),
            ("b", "in-progress"),
            ("c", "done"),
            ("d", "archive"),
            ("e", ""),
        ]);
        let columns: Vec<ColumnId> = store.tasks().iter().map(|t| t.column_id).collect();
        assert_eq!(
            columns,
            vec![
                ColumnId::Todo,
                ColumnId::InProgress,
                ColumnId::Done,
                ColumnId::Todo,
                ColumnId::Todo,
            ]
        );
    }

    #[test]
    fn add_task_without_status_defaults_to_todo() {
        let mut store = TaskStore::new();
        let task = store.add_task(draft("Call plumber"), &mut || 0);
        assert_eq!(task.column_id, ColumnId::Todo);
        assert_eq!(task.status, None);
    }

    #[test]
    fn ids_are_unique() {
        let mut store = TaskStore::new();
        for i in 0..50 {
            store.add_task(draft(&format!("task {i}")), &mut || 1);
        }
        let mut ids: Vec<&str> = store.tasks().iter().map(|t| t.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn move_changes_only_the_column() {
        let mut store = store_with(&[("A", "todo"), ("B", "todo")]);
        store.tasks[0].priority = Some(Priority::High);
        let before = store.clone();
        let a_id = store.tasks()[0].id.clone();

        let moved = store.move_task(&a_id, "done").unwrap().clone();

        assert_eq!(moved.column_id, ColumnId::Done);
        assert_eq!(moved.with_column(ColumnId::Todo), before.tasks()[0]);
        assert_eq!(store.tasks()[1], before.tasks()[1]);
        assert_eq!(store.len(), before.len());
    }

    #[test]
    fn move_to_unknown_column_is_a_no_op() {
        let mut store = store_with(&[("A", "todo")]);
        let before = store.clone();
        let a_id = store.tasks()[0].id.clone();

        let result = store.move_task(&a_id, "archive");

        assert_eq!(result, Err(BoardError::UnknownColumn("archive".to_string())));
        assert_eq!(store, before);
        assert_eq!(store.get(&a_id).map(|t| t.column_id), Some(ColumnId::Todo));
    }

    #[test]
    fn move_of_unknown_task_is_a_no_op() {
        let mut store = store_with(&[("A", "todo")]);
        let before = store.clone();

        let result = store.move_task("missing", "done");

        assert!(matches!(result, Err(BoardError::UnknownTask(id)) if id == "missing"));
        assert_eq!(store, before);
    }

    #[test]
    fn move_into_the_same_column_succeeds() {
        let mut store = store_with(&[("A", "in-progress")]);
        let before = store.clone();
        let id = store.tasks()[0].id.clone();

        assert!(store.move_task(&id, "in-progress").is_ok());
        assert_eq!(store, before);
    }

    #[test]
    fn partition_keeps_every_task_once() {
        let mut store = store_with(&[
            ("a", "done"),
            ("b", "todo"),
            ("c", "in-progress"),
            ("d", "todo"),
            ("e", "done"),
        ]);
        let c_id = store.tasks()[2].id.clone();
        store.move_task(&c_id, "todo").unwrap();

        let partition = store.partition();
        let mut flattened: Vec<String> = partition
            .iter()
            .flat_map(|(_, tasks)| tasks.iter().map(|t| t.id.clone()))
            .collect();
        let mut original: Vec<String> = store.tasks().iter().map(|t| t.id.clone()).collect();
        flattened.sort();
        original.sort();
        assert_eq!(flattened, original);
    }

    #[test]
    fn partition_preserves_insertion_order_within_columns() {
        let store = store_with(&[("a", "todo"), ("b", "done"), ("c", "todo"), ("d", "todo")]);
        let partition = store.partition();

        let (todo, todo_tasks) = &partition[0];
        assert_eq!(todo.id, ColumnId::Todo);
        let titles: Vec<&str> = todo_tasks.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "c", "d"]);
        assert!(partition[1].1.is_empty());
        assert_eq!(store.column_count(ColumnId::Done), 1);
    }

    #[test]
    fn store_uses_its_color_scheme() {
        let mut store = TaskStore::with_scheme(ColorScheme {
            saturation: 50,
            lightness: 60,
        });
        let task = store.add_task(draft("Paint"), &mut || 99);
        assert_eq!(task.color.as_deref(), Some("hsl(99, 50%, 60%)"));
    }
}
