pub mod column;
pub mod task;

pub use column::{Column, ColumnId};
pub use task::{Priority, Task, TaskAction, TaskDraft};
