pub mod sidebar;
pub mod toaster;

pub use sidebar::Sidebar;
pub use toaster::{provide_toasts, use_toasts, Toaster, Toasts};
