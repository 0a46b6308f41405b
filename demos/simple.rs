//! Printing snapshots from a linear script.
//!
//! No render loop: the list is mutated step by step and `view()` is printed
//! whenever a fresh snapshot is wanted.

use std::time::Duration;

use task_tally::*;

fn main() {
    let list = TaskList::new("Build Process", 80).with_theme(AnsiTheme);

    let init = list.add_task("Initialize project");
    let deps = list.add_task("Install dependencies");
    let compile = list.add_task("Compile source code");
    let tests = list.add_task("Run tests");
    list.add_task("Package application");

    init.update_status(TaskStatus::Succeeded);
    init.set_message("Project initialized successfully");

    deps.update_status(TaskStatus::Active);
    deps.update_progress(65, 100);

    tests.update_status(TaskStatus::Failed);
    tests.set_message("Test suite failed: 3 failures");

    println!("Initial state:");
    print!("{}", list.view());

    println!("\nAfter some progress:");
    for _ in 0..10 {
        deps.advance(3);
        std::thread::sleep(Duration::from_millis(100));
    }
    deps.update_status(TaskStatus::Succeeded);
    deps.set_message("All dependencies installed");

    compile.update_status(TaskStatus::Active);
    compile.update_progress(50, 100);
    print!("{}", list.view());

    println!("\nWith truncation (smaller width):");
    list.set_max_width(40);
    let long = list.add_task("This is a very long task name that should be truncated");
    long.set_message("This is also a very long message that should be truncated");
    print!("{}", list.view());
}
