use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use uuid::Uuid;

/// Opaque, unique identifier assigned to a task when it is added to a list.
///
/// Displays as a hyphenated UUID and parses back from that form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(Uuid);

impl TaskId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl std::str::FromStr for TaskId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Lifecycle state of a task, which selects its status icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TaskStatus {
    #[default]
    Pending,
    Active,
    Succeeded,
    Failed,
}

impl TaskStatus {
    /// Returns `true` for [`TaskStatus::Succeeded`] and [`TaskStatus::Failed`].
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }
}

/// Which trailing segment a task line shows after its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DisplayMode {
    /// The task's message, if it has one.
    #[default]
    Text,
    /// A progress bar built from `progress / total`.
    Progress,
}

/// A consistent copy of a task's mutable fields, read under one lock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskSnapshot {
    pub status: TaskStatus,
    pub message: String,
    pub mode: DisplayMode,
    pub progress: i64,
    pub total: i64,
}

impl Default for TaskSnapshot {
    fn default() -> Self {
        Self {
            status: TaskStatus::Pending,
            message: String::new(),
            mode: DisplayMode::Text,
            progress: 0,
            total: 100,
        }
    }
}

struct TaskInner {
    id: TaskId,
    name: String,
    state: RwLock<TaskSnapshot>,
}

/// Shared handle to a task owned by a [`crate::TaskList`].
///
/// Cloning is cheap and every clone addresses the same task. All mutators
/// take the task's own write lock, so two tasks never contend with each
/// other and a single task's fields are never observed half-written.
///
/// ```rust,ignore
/// let task = list.add_task("Install dependencies");
/// task.update_status(TaskStatus::Active);
/// task.update_progress(65, 100);
/// ```
#[derive(Clone)]
pub struct Task {
    inner: Arc<TaskInner>,
}

impl Task {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(TaskInner {
                id: TaskId::generate(),
                name: name.into(),
                state: RwLock::new(TaskSnapshot::default()),
            }),
        }
    }

    pub fn id(&self) -> TaskId {
        self.inner.id
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Sets the status. Does not touch the display mode.
    pub fn update_status(&self, status: TaskStatus) {
        let previous = std::mem::replace(&mut self.write().status, status);
        if previous != status {
            log_trace!(id = %self.id(), ?previous, ?status, "task status changed");
        }
    }

    /// Stores `current` and `total` as given and switches to progress mode.
    ///
    /// Values are not clamped here; the progress bar clamps when rendering.
    pub fn update_progress(&self, current: i64, total: i64) {
        let mut state = self.write();
        state.progress = current;
        state.total = total;
        state.mode = DisplayMode::Progress;
    }

    /// Adds `delta` to the current progress, keeping the total, and switches
    /// to progress mode.
    pub fn advance(&self, delta: i64) {
        let mut state = self.write();
        state.progress = state.progress.saturating_add(delta);
        state.mode = DisplayMode::Progress;
    }

    /// Stores the message and switches to text mode.
    pub fn set_message(&self, message: impl Into<String>) {
        let mut state = self.write();
        state.message = message.into();
        state.mode = DisplayMode::Text;
    }

    pub fn set_progress_mode(&self) {
        self.write().mode = DisplayMode::Progress;
    }

    pub fn set_text_mode(&self) {
        self.write().mode = DisplayMode::Text;
    }

    pub fn status(&self) -> TaskStatus {
        self.read().status
    }

    pub fn message(&self) -> String {
        self.read().message.clone()
    }

    pub fn mode(&self) -> DisplayMode {
        self.read().mode
    }

    /// Returns `(current, total)`.
    pub fn progress(&self) -> (i64, i64) {
        let state = self.read();
        (state.progress, state.total)
    }

    /// Copies all mutable fields at once.
    pub fn snapshot(&self) -> TaskSnapshot {
        self.read().clone()
    }

    // Every write is a plain field assignment, so a panic while holding the
    // lock cannot leave the state inconsistent and poisoning is ignored.
    fn read(&self) -> RwLockReadGuard<'_, TaskSnapshot> {
        self.inner.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, TaskSnapshot> {
        self.inner.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl PartialEq for Task {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Task {}

impl std::fmt::Debug for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Task")
            .field("id", &self.inner.id)
            .field("name", &self.inner.name)
            .field("state", &*self.read())
            .finish()
    }
}
