//! Building blocks the task list renders with.
//!
//! # Progress bar
//!
//! [`ProgressBar`] renders a bar of a fixed cell count followed by the
//! integer percentage:
//!
//! ```rust,ignore
//! let bar = ProgressBar::new(45, 100).width(20);
//! println!("{bar}");
//! // => █████████░░░░░░░░░░░ 45%
//! ```
//!
//! # Spinner
//!
//! [`Spinner`] cycles through animation frames on each [`tick`](Spinner::tick).
//! [`SpinnerClock`] wraps one and only ticks it once per interval, however
//! often it is asked for a frame:
//!
//! ```rust,ignore
//! let mut clock = SpinnerClock::new(Spinner::dots(), Duration::from_millis(100));
//! let frame = clock.frame_at(Instant::now()); // ⠙
//! ```
//!
//! # Truncation
//!
//! [`truncate`] shortens text to a maximum char count, ending in `...`
//! when there is room for it:
//!
//! ```rust,ignore
//! assert_eq!(truncate("Compile source code", 10), "Compile...");
//! ```

mod progress_bar;
mod spinner;
mod truncate;

pub use progress_bar::*;
pub use spinner::*;
pub use truncate::*;
