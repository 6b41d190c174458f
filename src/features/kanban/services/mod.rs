pub mod task_form;

pub use task_form::*;
