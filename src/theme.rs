//! Visual emphasis applied to rendered text.
//!
//! The layout engine never emits escape codes itself. It asks a [`Theme`]
//! to paint each segment with an [`Emphasis`] class, so the same layout can
//! be printed plain, colored, or styled by a host application's own
//! styling layer.

/// The emphasis classes a task list asks a [`Theme`] to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Emphasis {
    Title,
    Success,
    Error,
    /// Used for the spinner of active tasks.
    Active,
    Dim,
    Plain,
}

/// Paints text for terminal display.
///
/// ```rust,ignore
/// struct Brackets;
///
/// impl Theme for Brackets {
///     fn paint(&self, emphasis: Emphasis, text: &str) -> String {
///         match emphasis {
///             Emphasis::Plain => text.to_string(),
///             _ => format!("[{text}]"),
///         }
///     }
/// }
/// ```
pub trait Theme: Send + Sync {
    fn paint(&self, emphasis: Emphasis, text: &str) -> String;
}

/// Returns text unchanged. The default theme.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTheme;

impl Theme for PlainTheme {
    fn paint(&self, _emphasis: Emphasis, text: &str) -> String {
        text.to_string()
    }
}

/// ANSI colors via `owo-colors`.
#[cfg(feature = "color")]
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiTheme;

#[cfg(feature = "color")]
impl Theme for AnsiTheme {
    fn paint(&self, emphasis: Emphasis, text: &str) -> String {
        use owo_colors::OwoColorize;

        match emphasis {
            Emphasis::Title => text.bright_blue().bold().to_string(),
            Emphasis::Success => text.bright_green().to_string(),
            Emphasis::Error => text.bright_red().to_string(),
            Emphasis::Active => text.bright_yellow().to_string(),
            Emphasis::Dim => text.bright_black().to_string(),
            Emphasis::Plain => text.to_string(),
        }
    }
}

impl<T: Theme + ?Sized> Theme for Box<T> {
    fn paint(&self, emphasis: Emphasis, text: &str) -> String {
        (**self).paint(emphasis, text)
    }
}

impl<T: Theme + ?Sized> Theme for std::sync::Arc<T> {
    fn paint(&self, emphasis: Emphasis, text: &str) -> String {
        (**self).paint(emphasis, text)
    }
}
