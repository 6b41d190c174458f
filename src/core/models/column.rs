use serde::{Deserialize, Serialize};

/// Identifier of one of the three fixed board columns.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnId {
    #[default]
    Todo,
    InProgress,
    Done,
}

impl ColumnId {
    /// The id used in drop targets and in a task's `status` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnId::Todo => "todo",
            ColumnId::InProgress => "in-progress",
            ColumnId::Done => "done",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ColumnId::Todo => "To Do",
            ColumnId::InProgress => "In Progress",
            ColumnId::Done => "Done",
        }
    }

    pub fn from_id(id: &str) -> Option<ColumnId> {
        match id {
            "todo" => Some(ColumnId::Todo),
            "in-progress" => Some(ColumnId::InProgress),
            "done" => Some(ColumnId::Done),
            _ => None,
        }
    }

    pub fn all() -> [ColumnId; 3] {
        [ColumnId::Todo, ColumnId::InProgress, ColumnId::Done]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub id: ColumnId,
    pub title: &'static str,
}

impl Column {
    pub fn all() -> Vec<Column> {
        ColumnId::all().into_iter().map(Column::from).collect()
    }
}

impl From<ColumnId> for Column {
    fn from(id: ColumnId) -> Self {
        Column { id, title: id.title() }
    }
}
