//! Builder pattern implementation for creating Pool instances.
//!
//! # Examples
//!
//! ## Basic Builder Usage
//!
//! ```rust
//! use pb_pool::{PoolBuilder, ProgressBar};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! let bar = Arc::new(ProgressBar::new(100));
//! let pool = PoolBuilder::new()
//!     .refresh_rate(Duration::from_millis(50))
//!     .indicator(Arc::clone(&bar))
//!     .build();
//! assert_eq!(pool.len(), 1);
//! ```
//!
//! ## Writing frames somewhere else
//!
//! ```rust
//! use pb_pool::PoolBuilder;
//!
//! let pool = PoolBuilder::new().output(std::io::stderr()).build();
//! ```
//!
//! ## Hidden Output
//!
//! ```rust
//! use pb_pool::PoolBuilder;
//!
//! // Frames are rendered but discarded.
//! let pool = PoolBuilder::hidden().build();
//! ```

use super::{config::PoolConfig, pool::Pool};
use crate::error::Result;
use crate::Indicator;

use std::io::{self, Write};
use std::time::Duration;

/// A builder used to create a [`Pool`].
#[derive(Default)]
pub struct PoolBuilder {
    config: PoolConfig,
    indicators: Vec<Box<dyn Indicator>>,
}

impl std::fmt::Debug for PoolBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PoolBuilder")
            .field("config", &self.config)
            .field("indicators", &self.indicators.len())
            .finish()
    }
}

impl PoolBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        PoolBuilder::default()
    }

    /// Convenience function to discard every frame.
    pub fn hidden() -> Self {
        PoolBuilder::default().output(io::sink())
    }

    /// Set the delay between two refresh cycles.
    pub fn refresh_rate(mut self, refresh_rate: Duration) -> Self {
        self.config.refresh_rate = refresh_rate;
        self
    }

    /// Set where frames are written.
    pub fn output<W: Write + Send + 'static>(mut self, output: W) -> Self {
        self.config.output = Box::new(output);
        self
    }

    /// Add one indicator to register when the pool is built.
    pub fn indicator<T: Indicator + 'static>(mut self, indicator: T) -> Self {
        self.indicators.push(Box::new(indicator));
        self
    }

    /// Add several indicators to register when the pool is built.
    pub fn indicators<I, T>(mut self, indicators: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Indicator + 'static,
    {
        self.indicators
            .extend(indicators.into_iter().map(|i| Box::new(i) as Box<dyn Indicator>));
        self
    }

    /// Create the [`Pool`] with the specified options, without starting it.
    pub fn build(self) -> Pool {
        let pool = Pool::with_config(self.config);
        pool.register(self.indicators);
        pool
    }

    /// Create the [`Pool`] and start its render worker.
    pub fn start(self) -> Result<Pool> {
        let pool = self.build();
        pool.start()?;
        Ok(pool)
    }
}
