use tracing::field::{Field, Visit};
use tracing::span::Attributes;

use crate::{Task, TaskStatus};

mod layer;

pub use layer::{TaskListLayer, task_list_layer};

/// Decides how spans become tasks and how events update them.
///
/// Both methods have defaults; implement only the one you want to change.
///
/// ```rust,ignore
/// struct Verbose;
///
/// impl TraceMapper for Verbose {
///     fn task_name(attrs: &tracing::span::Attributes<'_>) -> String {
///         format!("{}::{}", attrs.metadata().target(), attrs.metadata().name())
///     }
/// }
///
/// let layer = TaskListLayer::<Verbose>::new(list.clone());
/// ```
pub trait TraceMapper: 'static {
    /// Name of the task created for a new span.
    ///
    /// Defaults to the span's `message` field when it has one, otherwise the
    /// span name.
    fn task_name(attrs: &Attributes<'_>) -> String {
        let mut fields = EventFields::default();
        attrs.record(&mut fields);
        fields
            .message
            .unwrap_or_else(|| attrs.metadata().name().to_string())
    }

    /// Applies an event recorded inside the task's span.
    ///
    /// Defaults: a `progress` field (with an optional `total`, keeping the
    /// task's current total otherwise) updates the progress bar, otherwise
    /// the `message` field becomes the task message. `ERROR` events mark the
    /// task failed.
    fn apply_event(task: &Task, event: &tracing::Event<'_>) {
        let mut fields = EventFields::default();
        event.record(&mut fields);

        if let Some(progress) = fields.progress {
            let total = fields.total.unwrap_or_else(|| task.progress().1);
            task.update_progress(progress, total);
        } else if let Some(message) = fields.message {
            task.set_message(message);
        }
        if *event.metadata().level() == tracing::Level::ERROR {
            task.update_status(TaskStatus::Failed);
        }
    }
}

/// Maps spans and events with the default [`TraceMapper`] behavior.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultMapper;

impl TraceMapper for DefaultMapper {}

/// Collects the fields the default mapper understands.
#[derive(Debug, Default)]
pub struct EventFields {
    pub message: Option<String>,
    pub progress: Option<i64>,
    pub total: Option<i64>,
}

impl Visit for EventFields {
    fn record_i64(&mut self, field: &Field, value: i64) {
        match field.name() {
            "progress" => self.progress = Some(value),
            "total" => self.total = Some(value),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.record_i64(field, i64::try_from(value).unwrap_or(i64::MAX));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{:?}", value));
        }
    }
}
