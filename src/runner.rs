use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use crate::TaskList;
use crate::writer::FrameWriter;

/// Repaints a shared [`TaskList`] on a fixed interval.
///
/// Workers hold clones of the `Arc` (or of individual [`crate::Task`]
/// handles) and mutate tasks while the loop redraws.
///
/// # Example
///
/// ```rust,ignore
/// let list = Arc::new(TaskList::new("Build", 80));
/// let task = list.add_task("compile");
///
/// let worker = std::thread::spawn(move || {
///     task.update_status(TaskStatus::Active);
///     // ...
///     task.update_status(TaskStatus::Succeeded);
/// });
///
/// RenderLoop::new(list, std::io::stderr())
///     .interval(Duration::from_millis(80))
///     .run_until(|| worker.is_finished())?;
/// ```
pub struct RenderLoop<W: Write> {
    list: Arc<TaskList>,
    frame: FrameWriter<W>,
    interval: Duration,
}

impl<W: Write> RenderLoop<W> {
    /// Create a loop repainting every 100 ms.
    pub fn new(list: Arc<TaskList>, writer: W) -> Self {
        Self {
            list,
            frame: FrameWriter::new(writer),
            interval: Duration::from_millis(100),
        }
    }

    /// Set the repaint interval.
    pub fn interval(mut self, d: Duration) -> Self {
        self.interval = d;
        self
    }

    /// Redraw once.
    pub fn tick(&mut self) -> Result<(), std::io::Error> {
        self.frame.redraw(&self.list.view())
    }

    /// Redraw every interval until `stop` returns `true`, then draw one
    /// final frame so the last state of every task is on screen.
    ///
    /// Blocks the calling thread.
    pub fn run_until(mut self, stop: impl Fn() -> bool) -> Result<W, std::io::Error> {
        while !stop() {
            self.tick()?;
            std::thread::sleep(self.interval);
        }
        self.tick()?;
        Ok(self.frame.into_inner())
    }
}
