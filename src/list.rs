use std::sync::{Mutex, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::{Duration, Instant};

use indexmap::IndexMap;

use crate::task::{Task, TaskId};
use crate::theme::{Emphasis, PlainTheme, Theme};
use crate::view::LineLayout;
use crate::widgets::{Spinner, SpinnerClock};

/// Minimum time between two spinner frames.
pub const SPIN_INTERVAL: Duration = Duration::from_millis(100);

struct ListState {
    tasks: IndexMap<TaskId, Task>,
    max_width: usize,
}

/// An ordered, append-only list of tasks rendered as a block of text.
///
/// The list can be shared between threads (typically behind an `Arc`):
/// workers mutate their [`Task`] handles while a render loop calls
/// [`TaskList::view`] whenever it needs a fresh frame.
///
/// ```rust,ignore
/// let list = TaskList::new("Build Process", 80);
/// let deps = list.add_task("Install dependencies");
/// deps.update_status(TaskStatus::Active);
/// deps.update_progress(65, 100);
/// print!("{}", list.view());
/// ```
///
/// # Locking
///
/// The list lock guards the task sequence and width. Each task has its own
/// lock. Rendering holds the list's read lock for the whole pass and reads
/// each task briefly, one at a time. The spinner clock sits behind a
/// separate mutex that is taken after the list lock and never while a task
/// lock is held.
pub struct TaskList {
    title: String,
    state: RwLock<ListState>,
    spinner: Mutex<SpinnerClock>,
    theme: Box<dyn Theme>,
}

impl TaskList {
    /// Creates an empty list. An empty `title` renders no header.
    pub fn new(title: impl Into<String>, max_width: usize) -> Self {
        Self {
            title: title.into(),
            state: RwLock::new(ListState {
                tasks: IndexMap::new(),
                max_width,
            }),
            spinner: Mutex::new(SpinnerClock::new(Spinner::dots(), SPIN_INTERVAL)),
            theme: Box::new(PlainTheme),
        }
    }

    /// Replaces the theme used to paint icons, messages and bars.
    pub fn with_theme(mut self, theme: impl Theme + 'static) -> Self {
        self.theme = Box::new(theme);
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Appends a pending task and returns a handle to it.
    pub fn add_task(&self, name: impl Into<String>) -> Task {
        let task = Task::new(name);
        self.write().tasks.insert(task.id(), task.clone());
        log_trace!(id = %task.id(), name = task.name(), "task added");
        task
    }

    /// Looks up a task by identifier.
    pub fn task(&self, id: &TaskId) -> Option<Task> {
        self.read().tasks.get(id).cloned()
    }

    /// Looks up a task by the exact text [`TaskId`] displays as.
    ///
    /// Other spellings of the same UUID (uppercase, unhyphenated, `urn:`)
    /// were never issued and find nothing.
    pub fn task_by_str(&self, id: &str) -> Option<Task> {
        let parsed = id
            .parse::<TaskId>()
            .ok()
            .filter(|parsed| parsed.to_string() == id)?;
        self.task(&parsed)
    }

    /// A snapshot of the tasks in insertion order.
    ///
    /// Tasks added afterwards do not appear in a snapshot already taken.
    pub fn tasks(&self) -> Vec<Task> {
        self.read().tasks.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.read().tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().tasks.is_empty()
    }

    /// Sets the width used by subsequent renders.
    pub fn set_max_width(&self, width: usize) {
        let previous = std::mem::replace(&mut self.write().max_width, width);
        if previous != width {
            log_trace!(previous, width, "max width changed");
        }
    }

    pub fn max_width(&self) -> usize {
        self.read().max_width
    }

    /// Renders the list as of now. See [`TaskList::view_at`].
    pub fn view(&self) -> String {
        self.view_at(Instant::now())
    }

    /// Renders the list, advancing the spinner relative to `now`.
    ///
    /// Output is the title (if any) followed by a blank line, then one line
    /// per task. Every line ends with `\n`. Besides reading task state, the
    /// only effect is the spinner moving to its next frame when an active
    /// task is drawn at least [`SPIN_INTERVAL`] after its previous step.
    pub fn view_at(&self, now: Instant) -> String {
        let state = self.read();
        let layout = LineLayout {
            max_width: state.max_width,
            theme: self.theme.as_ref(),
        };

        let mut output = String::new();
        if !self.title.is_empty() {
            output.push_str(&self.theme.paint(Emphasis::Title, &self.title));
            output.push_str("\n\n");
        }

        for task in state.tasks.values() {
            let snapshot = task.snapshot();
            let line = layout.line(task.name(), &snapshot, || self.spin(now));
            output.push_str(&line);
            output.push('\n');
        }
        output
    }

    fn spin(&self, now: Instant) -> &'static str {
        self.spinner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .frame_at(now)
    }

    fn read(&self) -> RwLockReadGuard<'_, ListState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ListState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for TaskList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.read();
        f.debug_struct("TaskList")
            .field("title", &self.title)
            .field("max_width", &state.max_width)
            .field("tasks", &state.tasks.values().collect::<Vec<_>>())
            .finish()
    }
}
