#![doc = include_str!("../README.md")]

#[cfg(feature = "tracing")]
macro_rules! log_trace {
    ($($arg:tt)*) => { ::tracing::trace!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! log_trace {
    ($($arg:tt)*) => {};
}

pub(crate) mod list;
pub(crate) mod runner;
pub(crate) mod task;
pub mod theme;
pub mod view;
pub mod widgets;
pub(crate) mod writer;

#[cfg(feature = "tracing")]
pub(crate) mod tracing;


/// Re-exports of all public types and traits.
pub mod prelude {
    pub use crate::list::{SPIN_INTERVAL, TaskList};
    pub use crate::runner::RenderLoop;
    pub use crate::task::{DisplayMode, Task, TaskId, TaskSnapshot, TaskStatus};
    #[cfg(feature = "color")]
    pub use crate::theme::AnsiTheme;
    pub use crate::theme::{Emphasis, PlainTheme, Theme};
    #[cfg(feature = "tracing")]
    pub use crate::tracing::{
        DefaultMapper, EventFields, TaskListLayer, TraceMapper, task_list_layer,
    };
    pub use crate::writer::FrameWriter;
}

pub use crate::prelude::*;
