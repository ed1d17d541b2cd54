//! pb-pool renders several progress indicators as one stable block of lines,
//! redrawn in place by a background thread.
//!
//! # Quick Start
//!
//! ```rust
//! use pb_pool::{Pool, ProgressBar};
//! use std::sync::Arc;
//! use std::thread;
//!
//! # fn main() -> Result<(), pb_pool::Error> {
//! let bars: Vec<_> = (0..3).map(|_| Arc::new(ProgressBar::new(200))).collect();
//! let pool = Pool::start_with(bars.iter().cloned())?;
//!
//! let handles: Vec<_> = bars
//!     .iter()
//!     .cloned()
//!     .map(|bar| {
//!         thread::spawn(move || {
//!             for _ in 0..200 {
//!                 bar.inc();
//!             }
//!             bar.finish();
//!         })
//!     })
//!     .collect();
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//!
//! // Returns once the final frame has been written.
//! pool.stop()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`pool`] - The [`Pool`] orchestrator, its builder, configuration and frames
//! - [`indicator`] - The [`Indicator`] contract and the bundled [`ProgressBar`]
//! - [`error`] - Centralized error handling with the `Error` enum

pub mod error;
pub mod indicator;
pub mod pool;

pub use error::{Error, Result};
pub use indicator::{BarStyle, Indicator, ProgressBar, Units};
pub use pool::{Frame, Pool, PoolBuilder, PoolConfig};
