pub mod color;
pub mod drag;
pub mod notify;
pub mod store;

pub use color::{color_for, BrowserHues, ColorScheme, HueSource};
pub use drag::{DragEnd, DragGesture, DragStart, Point};
pub use notify::{Notice, NotificationSink};
pub use store::TaskStore;
