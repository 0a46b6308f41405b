//! Worker threads updating tasks while a render loop redraws in place.
//!
//! Each worker owns a `Task` handle; the main thread owns the `RenderLoop`
//! and stops it once every worker has finished.

use std::sync::Arc;
use std::time::Duration;

use task_tally::*;

struct Step {
    name: &'static str,
    units: i64,
    delay: Duration,
    fails: bool,
}

const STEPS: &[Step] = &[
    Step {
        name: "Resolve dependencies",
        units: 12,
        delay: Duration::from_millis(60),
        fails: false,
    },
    Step {
        name: "Download crates",
        units: 40,
        delay: Duration::from_millis(35),
        fails: false,
    },
    Step {
        name: "Compile build scripts",
        units: 20,
        delay: Duration::from_millis(90),
        fails: false,
    },
    Step {
        name: "Run integration tests",
        units: 25,
        delay: Duration::from_millis(70),
        fails: true,
    },
];

fn main() -> std::io::Result<()> {
    let list = Arc::new(TaskList::new("cargo build", 72).with_theme(AnsiTheme));

    let workers: Vec<_> = STEPS
        .iter()
        .map(|step| {
            let task = list.add_task(step.name);
            std::thread::spawn(move || {
                task.update_status(TaskStatus::Active);
                task.set_message("starting");
                std::thread::sleep(step.delay * 5);

                task.update_progress(0, step.units);
                for done in 1..=step.units {
                    std::thread::sleep(step.delay);
                    task.update_progress(done, step.units);
                    if step.fails && done == step.units / 2 {
                        task.update_status(TaskStatus::Failed);
                        task.set_message(format!("{done} of {} passed, 1 failed", step.units));
                        return;
                    }
                }
                task.update_status(TaskStatus::Succeeded);
                task.set_message(format!("{} units", step.units));
            })
        })
        .collect();

    RenderLoop::new(list, std::io::stderr())
        .interval(Duration::from_millis(80))
        .run_until(|| workers.iter().all(|w| w.is_finished()))?;
    Ok(())
}
