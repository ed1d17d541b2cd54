//! Pool module containing the render orchestrator, its builder and configuration.
//!
//! A [`Pool`] owns an append-only list of indicators and a background thread
//! that redraws all of them as one block of lines every refresh cycle. Each
//! frame after the first starts with a cursor-up sequence sized to the
//! previous frame, so the block is overwritten in place.
//!
//! # Overview
//!
//! - `pool` - The Pool itself: registration, render worker and shutdown
//! - `builder` - PoolBuilder for flexible configuration using the builder pattern
//! - `config` - Configuration structure and defaults
//! - `frame` - Frame construction and cursor control
//!
//! # Examples
//!
//! ## Start and stop
//!
//! ```rust
//! use pb_pool::{Pool, ProgressBar};
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), pb_pool::Error> {
//! let first = Arc::new(ProgressBar::new(10));
//! let second = Arc::new(ProgressBar::new(10));
//! let pool = Pool::new([Arc::clone(&first), Arc::clone(&second)]);
//! pool.start()?;
//!
//! first.set(10);
//! first.finish();
//! second.set(10);
//! second.finish();
//!
//! pool.stop()?;
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod frame;
#[allow(clippy::module_inception)]
pub mod pool;
pub(crate) mod signal;

pub use builder::PoolBuilder;
pub use config::{Output, PoolConfig};
pub use frame::{cursor_up, Frame};
pub use pool::Pool;
