//! Progress bar styling options.
//!
//! # Examples
//!
//! ```rust
//! use pb_pool::{BarStyle, Units};
//!
//! let style = BarStyle::default()
//!     .width(30)
//!     .progress_chars(BarStyle::CHARS_FINE)
//!     .units(Units::Bytes)
//!     .show_elapsed(false);
//! assert_eq!(style.bar_width(), 30);
//! ```

/// How the counters of a [`ProgressBar`](crate::ProgressBar) are displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Units {
    /// Plain numbers: `120 / 200`.
    #[default]
    Default,
    /// Human readable byte sizes: `1.17 KiB / 2.00 KiB`.
    Bytes,
}

/// Define the look of a [`ProgressBar`](crate::ProgressBar).
#[derive(Debug, Clone)]
pub struct BarStyle {
    /// Number of cells of the bar itself.
    width: usize,
    /// Progression characters set.
    ///
    /// There must be at least 3 characters for the following states:
    /// "filled", "current", and "to do". Extra characters in the middle are
    /// used as a gradient for the partially filled cell.
    progress_chars: Vec<char>,
    pub(crate) units: Units,
    pub(crate) show_counters: bool,
    pub(crate) show_percent: bool,
    pub(crate) show_elapsed: bool,
}

impl Default for BarStyle {
    fn default() -> Self {
        Self {
            width: 40,
            progress_chars: BarStyle::CHARS_DEFAULT.chars().collect(),
            units: Units::Default,
            show_counters: true,
            show_percent: true,
            show_elapsed: true,
        }
    }
}

impl BarStyle {
    /// Classic ASCII bar: `[=====>----]`.
    pub const CHARS_DEFAULT: &'static str = "=>-";
    /// Use fine blocks as progress characters: `"█▉▊▋▌▍▎▏  "`.
    pub const CHARS_FINE: &'static str = "█▉▊▋▌▍▎▏  ";
    /// Use a line as progress characters: `"━╾╴─"`.
    pub const CHARS_LINE: &'static str = "━╾╴─";
    /// Use rough blocks as progress characters: `"█  "`.
    pub const CHARS_ROUGH: &'static str = "█  ";

    /// Set the width of the bar, in cells.
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Set the progression characters.
    ///
    /// Sets with fewer than 3 characters are ignored and the current set is kept.
    pub fn progress_chars(mut self, chars: &str) -> Self {
        let chars: Vec<char> = chars.chars().collect();
        if chars.len() >= 3 {
            self.progress_chars = chars;
        }
        self
    }

    /// Set how counters are displayed.
    pub fn units(mut self, units: Units) -> Self {
        self.units = units;
        self
    }

    /// Show or hide the `current / total` counters.
    pub fn show_counters(mut self, show: bool) -> Self {
        self.show_counters = show;
        self
    }

    /// Show or hide the percentage.
    pub fn show_percent(mut self, show: bool) -> Self {
        self.show_percent = show;
        self
    }

    /// Show or hide the elapsed time.
    pub fn show_elapsed(mut self, show: bool) -> Self {
        self.show_elapsed = show;
        self
    }

    /// Get the width of the bar.
    pub fn bar_width(&self) -> usize {
        self.width
    }

    /// Draw the bar cells for a completion ratio in `[0, 1]`.
    pub(crate) fn draw(&self, ratio: f64) -> String {
        let ratio = ratio.clamp(0.0, 1.0);
        let filled_char = self.progress_chars[0];
        let empty_char = self.progress_chars[self.progress_chars.len() - 1];
        let gradient = &self.progress_chars[1..self.progress_chars.len() - 1];

        let cells = ratio * self.width as f64;
        let filled = (cells.floor() as usize).min(self.width);

        let mut out = String::with_capacity(self.width * 4);
        out.extend(std::iter::repeat(filled_char).take(filled));
        if filled < self.width {
            let fraction = cells - filled as f64;
            let idx = ((1.0 - fraction) * gradient.len() as f64) as usize;
            out.push(gradient[idx.min(gradient.len() - 1)]);
            out.extend(std::iter::repeat(empty_char).take(self.width - filled - 1));
        }
        out
    }
}
