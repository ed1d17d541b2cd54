//! A thread-safe counter-based progress bar.

use super::style::{BarStyle, Units};
use super::Indicator;
use crate::error::Result;

use indicatif::{HumanBytes, HumanDuration};
use parking_lot::Mutex;
use std::fmt;
use std::io::Write;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;

/// Progress bar counting up to a total.
///
/// Counters are atomics, so a bar can be shared behind an [`Arc`](std::sync::Arc)
/// and updated from any thread while a [`Pool`](crate::Pool) renders it.
///
/// ```rust
/// use pb_pool::{Indicator, ProgressBar};
///
/// let bar = ProgressBar::new(3);
/// bar.inc();
/// bar.inc();
/// assert_eq!(bar.position(), 2);
/// assert!(!bar.is_finished());
/// bar.finish();
/// assert!(bar.is_finished());
/// ```
pub struct ProgressBar {
    current: AtomicU64,
    total: AtomicU64,
    finished: AtomicBool,
    started: OnceLock<Instant>,
    prefix: Mutex<String>,
    style: BarStyle,
}

impl fmt::Debug for ProgressBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProgressBar")
            .field("current", &self.position())
            .field("total", &self.total())
            .field("finished", &self.is_finished())
            .field("prefix", &*self.prefix.lock())
            .field("style", &self.style)
            .finish()
    }
}

impl ProgressBar {
    /// Create a new bar counting up to `total`.
    pub fn new(total: u64) -> Self {
        Self {
            current: AtomicU64::new(0),
            total: AtomicU64::new(total),
            finished: AtomicBool::new(false),
            started: OnceLock::new(),
            prefix: Mutex::new(String::new()),
            style: BarStyle::default(),
        }
    }

    /// Set the text rendered in front of the bar.
    pub fn with_prefix(self, prefix: impl Into<String>) -> Self {
        *self.prefix.lock() = prefix.into();
        self
    }

    /// Set the bar style.
    pub fn with_style(mut self, style: BarStyle) -> Self {
        self.style = style;
        self
    }

    /// Replace the prefix of a bar that is already shared.
    pub fn set_prefix(&self, prefix: impl Into<String>) {
        *self.prefix.lock() = prefix.into();
    }

    /// Increment the counter by one.
    pub fn inc(&self) {
        self.add(1);
    }

    /// Increment the counter by `delta`.
    pub fn add(&self, delta: u64) {
        self.current.fetch_add(delta, Ordering::Relaxed);
    }

    /// Set the counter to `position`.
    pub fn set(&self, position: u64) {
        self.current.store(position, Ordering::Relaxed);
    }

    /// Change the total.
    pub fn set_total(&self, total: u64) {
        self.total.store(total, Ordering::Relaxed);
    }

    /// Current counter value.
    pub fn position(&self) -> u64 {
        self.current.load(Ordering::Relaxed)
    }

    /// Current total.
    pub fn total(&self) -> u64 {
        self.total.load(Ordering::Relaxed)
    }

    /// Mark the bar as finished. Further calls have no effect.
    pub fn finish(&self) {
        self.finished.store(true, Ordering::Release);
    }

    /// Render the bar on its own line into `writer`.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        writeln!(writer, "{self}")?;
        Ok(())
    }

    fn ratio(&self, current: u64, total: u64, finished: bool) -> f64 {
        if total == 0 {
            return if finished { 1.0 } else { 0.0 };
        }
        current.min(total) as f64 / total as f64
    }
}

impl fmt::Display for ProgressBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let current = self.position();
        let total = self.total();
        let finished = self.is_finished();
        let ratio = self.ratio(current, total, finished);

        f.write_str(&self.prefix.lock())?;
        if self.style.show_counters {
            match self.style.units {
                Units::Default => write!(f, "{current} / {total} ")?,
                Units::Bytes => write!(f, "{} / {} ", HumanBytes(current), HumanBytes(total))?,
            }
        }
        write!(f, "[{}]", self.style.draw(ratio))?;
        if self.style.show_percent {
            write!(f, " {:.2}%", ratio * 100.0)?;
        }
        if self.style.show_elapsed {
            let elapsed = self.started.get().map(Instant::elapsed).unwrap_or_default();
            write!(f, " {}", HumanDuration(elapsed))?;
        }
        Ok(())
    }
}

impl Indicator for ProgressBar {
    fn start(&self) {
        self.started.get_or_init(Instant::now);
    }

    fn render(&self) -> String {
        self.to_string()
    }

    fn is_finished(&self) -> bool {
        self.finished.load(Ordering::Acquire)
    }
}
