/// A progress bar of `width` cells followed by the integer percentage.
///
/// ```rust,ignore
/// let bar = ProgressBar::new(65, 100).width(10);
/// assert_eq!(bar.to_string(), "██████░░░░ 65%");
/// ```
///
/// A zero `total` renders an empty bar at ` 0%`, and a zero `width` renders
/// nothing at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressBar {
    current: i64,
    total: i64,
    width: usize,
}

impl ProgressBar {
    pub const FILLED: char = '█';
    pub const EMPTY: char = '░';

    pub fn new(current: i64, total: i64) -> Self {
        Self {
            current,
            total,
            width: 20,
        }
    }

    pub fn width(mut self, w: usize) -> Self {
        self.width = w;
        self
    }

    /// Completed fraction in `0.0..=1.0`, or `None` when `total` is zero.
    pub fn ratio(&self) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        Some((self.current as f64 / self.total as f64).clamp(0.0, 1.0))
    }

    /// Number of filled cells. Never exceeds the bar width.
    pub fn filled(&self) -> usize {
        match self.ratio() {
            Some(ratio) => ((ratio * self.width as f64).floor() as usize).min(self.width),
            None => 0,
        }
    }

    /// The integer percentage shown after the bar.
    pub fn percent(&self) -> u8 {
        self.ratio().map_or(0, |ratio| (ratio * 100.0) as u8)
    }
}

impl std::fmt::Display for ProgressBar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.width == 0 {
            return Ok(());
        }
        let filled = self.filled();
        write!(
            f,
            "{}{} {}%",
            std::iter::repeat_n(Self::FILLED, filled).collect::<String>(),
            std::iter::repeat_n(Self::EMPTY, self.width - filled).collect::<String>(),
            self.percent(),
        )
    }
}
