use std::marker::PhantomData;
use std::sync::Arc;

use tracing::Subscriber;
use tracing::span::{Attributes, Id};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::{LookupSpan, SpanRef};

use super::{DefaultMapper, TraceMapper};
use crate::{Task, TaskList, TaskStatus};

const OWN_TARGET: &str = env!("CARGO_CRATE_NAME");

/// Events from this crate's own logging never drive tasks.
fn is_own(target: &str) -> bool {
    target
        .strip_prefix(OWN_TARGET)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with("::"))
}

/// A `tracing` [`Layer`] that turns spans into tasks on a shared [`TaskList`].
///
/// - a new span adds a pending task,
/// - entering the span marks it active,
/// - events inside the span go through [`TraceMapper::apply_event`],
/// - closing the span marks it succeeded unless it already finished.
///
/// Rendering is left to the caller, e.g. a [`crate::RenderLoop`] over the
/// same list.
pub struct TaskListLayer<M = DefaultMapper> {
    list: Arc<TaskList>,
    _mapper: PhantomData<fn() -> M>,
}

impl<M: TraceMapper> TaskListLayer<M> {
    pub fn new(list: Arc<TaskList>) -> Self {
        Self {
            list,
            _mapper: PhantomData,
        }
    }

    fn task<S>(span: &SpanRef<'_, S>) -> Option<Task>
    where
        S: Subscriber + for<'a> LookupSpan<'a>,
    {
        span.extensions().get::<TaskExt>().map(|ext| ext.0.clone())
    }
}

impl<M> Clone for TaskListLayer<M> {
    fn clone(&self) -> Self {
        Self {
            list: self.list.clone(),
            _mapper: PhantomData,
        }
    }
}

/// Creates a [`TaskListLayer`] with the default mapper.
///
/// ```rust,ignore
/// let list = Arc::new(TaskList::new("Build", 80));
/// tracing_subscriber::registry()
///     .with(task_list_layer(list.clone()))
///     .init();
/// ```
pub fn task_list_layer(list: Arc<TaskList>) -> TaskListLayer {
    TaskListLayer::new(list)
}

impl<S, M> Layer<S> for TaskListLayer<M>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    M: TraceMapper,
{
    fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
        if is_own(attrs.metadata().target()) {
            return;
        }
        let task = self.list.add_task(M::task_name(attrs));
        if let Some(span) = ctx.span(id) {
            span.extensions_mut().insert(TaskExt(task));
        }
    }

    fn on_enter(&self, id: &Id, ctx: Context<'_, S>) {
        if let Some(task) = ctx.span(id).and_then(|span| Self::task(&span))
            && task.status() == TaskStatus::Pending
        {
            task.update_status(TaskStatus::Active);
        }
    }

    fn on_event(&self, event: &tracing::Event<'_>, ctx: Context<'_, S>) {
        if is_own(event.metadata().target()) {
            return;
        }
        if let Some(task) = ctx.event_span(event).and_then(|span| Self::task(&span)) {
            M::apply_event(&task, event);
        }
    }

    fn on_close(&self, id: Id, ctx: Context<'_, S>) {
        if let Some(task) = ctx.span(&id).and_then(|span| Self::task(&span))
            && !task.status().is_finished()
        {
            task.update_status(TaskStatus::Succeeded);
        }
    }
}

struct TaskExt(Task);
