//! Driving a task list from `tracing` spans.
//!
//! Every span becomes a task. Entering it marks the task active, `progress`
//! fields fill its bar, messages replace its text, an `error!` fails it and
//! closing the span completes it.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use task_tally::*;
use tracing::{error, info, info_span};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn step(name: &str, units: i64, fail_at: Option<i64>) {
    let span = info_span!("step", message = name);
    let _guard = span.enter();
    info!("preparing");
    std::thread::sleep(Duration::from_millis(300));
    for done in 1..=units {
        std::thread::sleep(Duration::from_millis(50));
        if Some(done) == fail_at {
            error!("failed after {done} of {units}");
            return;
        }
        info!(progress = done, total = units);
    }
    info!("{units} done");
}

fn main() -> std::io::Result<()> {
    let list = Arc::new(TaskList::new("Release", 72).with_theme(AnsiTheme));
    tracing_subscriber::registry()
        .with(task_list_layer(list.clone()))
        .init();

    let finished = Arc::new(AtomicBool::new(false));
    let render = {
        let (list, finished) = (list.clone(), finished.clone());
        std::thread::spawn(move || {
            RenderLoop::new(list, std::io::stderr())
                .run_until(|| finished.load(Ordering::Relaxed))
                .map(drop)
        })
    };

    step("Bump version", 5, None);
    step("Build artifacts", 30, None);
    step("Sign artifacts", 12, Some(9));
    step("Publish", 20, None);

    finished.store(true, Ordering::Relaxed);
    render.join().expect("render thread panicked")
}
