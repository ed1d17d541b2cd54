//! Frame construction.
//!
//! A frame is one complete snapshot of every indicator in a pool: an optional
//! cursor-up prefix that moves back over the previous frame, followed by one
//! line per indicator. Frames are built under the pool lock and written to the
//! sink after the lock is released.
//!
//! ```rust
//! use pb_pool::{Frame, ProgressBar};
//!
//! let bars = vec![ProgressBar::new(10), ProgressBar::new(10)];
//! let first = Frame::render(None, &bars);
//! assert_eq!(first.lines(), 2);
//! assert!(!first.text().starts_with('\x1b'));
//!
//! let next = Frame::render(Some(first.lines()), &bars);
//! assert!(next.text().starts_with("\x1b[2A"));
//! ```

use crate::Indicator;

/// ANSI sequence moving the cursor up `lines` lines.
///
/// Empty for zero: terminals treat `ESC [ 0 A` as a one-line move.
pub fn cursor_up(lines: usize) -> String {
    if lines == 0 {
        return String::new();
    }
    format!("\x1b[{lines}A")
}

/// One rendered snapshot of a pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    text: String,
    lines: usize,
    all_finished: bool,
}

impl Frame {
    /// Render `indicators` as a frame.
    ///
    /// `previous` is the line count of the last written frame, or `None` when
    /// nothing has been written yet, in which case no cursor prefix is emitted.
    pub fn render<T: Indicator>(previous: Option<usize>, indicators: &[T]) -> Self {
        let mut text = previous.map(cursor_up).unwrap_or_default();
        let mut all_finished = !indicators.is_empty();
        for indicator in indicators {
            if !indicator.is_finished() {
                all_finished = false;
            }
            text.push('\r');
            text.push_str(&indicator.render());
            text.push('\n');
        }
        Self {
            text,
            lines: indicators.len(),
            all_finished,
        }
    }

    /// The bytes to write to the sink.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of indicator lines in the frame.
    pub fn lines(&self) -> usize {
        self.lines
    }

    /// Whether every indicator was finished when the frame was taken.
    ///
    /// Always `false` for an empty frame.
    pub fn all_finished(&self) -> bool {
        self.all_finished
    }
}
