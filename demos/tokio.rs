//! Async workers with a tokio `select!` redraw loop.
//!
//! Tasks are plain handles, so async workers update them directly; the
//! render side only needs an interval and a way to know when to stop.

use std::sync::Arc;
use std::time::Duration;

use task_tally::*;
use tokio::sync::mpsc;

async fn download(task: Task, size: i64) {
    task.update_status(TaskStatus::Active);
    task.update_progress(0, size);
    let mut interval = tokio::time::interval(Duration::from_millis(40));
    for _ in 0..size {
        interval.tick().await;
        task.advance(1);
    }
    task.update_status(TaskStatus::Succeeded);
    task.set_message(format!("{size} KiB"));
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let list = Arc::new(TaskList::new("Downloads", 70).with_theme(AnsiTheme));
    let (done_tx, mut done_rx) = mpsc::channel::<()>(1);

    for (name, size) in [("serde", 30), ("tokio", 80), ("tracing", 45), ("indexmap", 20)] {
        let task = list.add_task(name);
        let done_tx = done_tx.clone();
        tokio::spawn(async move {
            download(task, size).await;
            drop(done_tx);
        });
    }
    drop(done_tx);

    let mut frame = FrameWriter::new(std::io::stderr());
    let mut interval = tokio::time::interval(Duration::from_millis(80));
    loop {
        tokio::select! {
            _ = interval.tick() => frame.redraw(&list.view())?,
            // Every sender dropped: all downloads finished.
            None = done_rx.recv() => break,
        }
    }
    frame.redraw(&list.view())?;
    Ok(())
}
