//! Progress indicators rendered by a [`Pool`](crate::Pool).
//!
//! The pool only needs three things from an indicator: a start hook, a
//! single-line rendering of its current state and a "finished" flag. Those are
//! captured by the [`Indicator`] trait. Counting and formatting are left
//! entirely to the implementor.
//!
//! The module also ships [`ProgressBar`], a thread-safe counter-based indicator
//! styled through [`BarStyle`].
//!
//! # Examples
//!
//! ## Implementing a custom indicator
//!
//! ```rust
//! use pb_pool::Indicator;
//! use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
//!
//! struct Counter {
//!     seen: AtomicU64,
//!     done: AtomicBool,
//! }
//!
//! impl Indicator for Counter {
//!     fn render(&self) -> String {
//!         format!("seen {} records", self.seen.load(Ordering::Relaxed))
//!     }
//!
//!     fn is_finished(&self) -> bool {
//!         self.done.load(Ordering::Acquire)
//!     }
//! }
//! ```
//!
//! ## Using the bundled progress bar
//!
//! ```rust
//! use pb_pool::{BarStyle, Indicator, ProgressBar};
//!
//! let bar = ProgressBar::new(200)
//!     .with_prefix("fetch ")
//!     .with_style(BarStyle::default().width(20));
//! bar.start();
//! bar.add(50);
//! assert!(bar.render().contains("50 / 200"));
//! ```

pub(crate) mod bar;
pub(crate) mod style;

pub use bar::ProgressBar;
pub use style::{BarStyle, Units};

use std::sync::Arc;

/// The capability contract a [`Pool`](crate::Pool) consumes.
///
/// Indicators are owned by the caller and shared with the pool; the pool only
/// ever reads from them. Mutation happens on the caller's side, so
/// implementations must be safe to read from the render thread while other
/// threads update them.
pub trait Indicator: Send + Sync {
    /// Initialise the indicator when it is registered with a pool.
    ///
    /// Must be idempotent. The default implementation does nothing.
    fn start(&self) {}

    /// Current state as a single line of text, without a trailing line break.
    fn render(&self) -> String;

    /// Whether the indicator has completed.
    ///
    /// Once this returns `true` it must keep returning `true`.
    fn is_finished(&self) -> bool;
}

impl<T: Indicator + ?Sized> Indicator for Arc<T> {
    fn start(&self) {
        (**self).start();
    }

    fn render(&self) -> String {
        (**self).render()
    }

    fn is_finished(&self) -> bool {
        (**self).is_finished()
    }
}

impl<T: Indicator + ?Sized> Indicator for Box<T> {
    fn start(&self) {
        (**self).start();
    }

    fn render(&self) -> String {
        (**self).render()
    }

    fn is_finished(&self) -> bool {
        (**self).is_finished()
    }
}
