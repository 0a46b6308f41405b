//! Line layout for a rendered task list.
//!
//! Each task becomes one line: a status icon, the task name truncated to the
//! name budget, and an optional trailing segment (message or progress bar)
//! sized to whatever width the name leaves over.

use crate::task::{DisplayMode, TaskSnapshot, TaskStatus};
use crate::theme::{Emphasis, Theme};
use crate::widgets::{ProgressBar, truncate};

/// Columns reserved next to the name (icon and separators).
pub const NAME_PADDING: usize = 4;
/// The name budget never drops below this, even on narrow widths.
pub const MIN_NAME_WIDTH: usize = 10;
/// Columns kept free beside a progress bar for the icon and percentage.
pub const PROGRESS_RESERVE: usize = 10;
/// Columns kept free beside a message.
pub const MESSAGE_RESERVE: usize = 6;

pub const PENDING_ICON: &str = "●";
pub const SUCCEEDED_ICON: &str = "✓";
pub const FAILED_ICON: &str = "✗";

/// Width budget for task names.
pub fn name_width(max_width: usize) -> usize {
    max_width.saturating_sub(NAME_PADDING).max(MIN_NAME_WIDTH)
}

/// Cell count for a progress bar next to a name of `name_len` chars, or
/// `None` when there is no room for one.
pub fn progress_width(max_width: usize, name_len: usize) -> Option<usize> {
    remaining(max_width, name_len, PROGRESS_RESERVE)
}

/// Char budget for a message next to a name of `name_len` chars, or `None`
/// when there is no room for one.
pub fn message_width(max_width: usize, name_len: usize) -> Option<usize> {
    remaining(max_width, name_len, MESSAGE_RESERVE)
}

fn remaining(max_width: usize, name_len: usize, reserve: usize) -> Option<usize> {
    max_width
        .checked_sub(name_len + reserve)
        .filter(|width| *width > 0)
}

/// Emphasis for a message, chosen by the task's status.
pub fn message_emphasis(status: TaskStatus) -> Emphasis {
    match status {
        TaskStatus::Succeeded => Emphasis::Success,
        TaskStatus::Failed => Emphasis::Error,
        TaskStatus::Pending | TaskStatus::Active => Emphasis::Dim,
    }
}

/// Lays out single task lines for a fixed width and theme.
pub(crate) struct LineLayout<'a> {
    pub max_width: usize,
    pub theme: &'a dyn Theme,
}

impl LineLayout<'_> {
    /// Renders one task line without a trailing newline.
    ///
    /// `spinner` supplies the frame for active tasks and is only called for
    /// them, so the spinner clock is consulted lazily.
    pub fn line(
        &self, name: &str, task: &TaskSnapshot, spinner: impl FnOnce() -> &'static str,
    ) -> String {
        let (icon, emphasis) = match task.status {
            TaskStatus::Pending => (PENDING_ICON, Emphasis::Dim),
            TaskStatus::Active => (spinner(), Emphasis::Active),
            TaskStatus::Succeeded => (SUCCEEDED_ICON, Emphasis::Success),
            TaskStatus::Failed => (FAILED_ICON, Emphasis::Error),
        };

        let name = truncate(name, name_width(self.max_width));
        let mut line = format!("{} {}", self.theme.paint(emphasis, icon), name);

        if let Some(segment) = self.trailing(name.chars().count(), task) {
            line.push(' ');
            line.push_str(&segment);
        }
        line
    }

    fn trailing(&self, name_len: usize, task: &TaskSnapshot) -> Option<String> {
        match task.mode {
            DisplayMode::Progress => {
                let width = progress_width(self.max_width, name_len)?;
                let bar = ProgressBar::new(task.progress, task.total).width(width);
                Some(self.theme.paint(Emphasis::Dim, &bar.to_string()))
            }
            DisplayMode::Text if task.message.is_empty() => None,
            DisplayMode::Text => {
                let width = message_width(self.max_width, name_len)?;
                let message = truncate(&task.message, width);
                Some(self.theme.paint(message_emphasis(task.status), &message))
            }
        }
    }
}
