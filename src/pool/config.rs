//! Configuration structures and defaults for the pool.
//!
//! # Examples
//!
//! ```rust
//! use pb_pool::pool::PoolConfig;
//! use std::time::Duration;
//!
//! let config = PoolConfig::default();
//! assert_eq!(config.refresh_rate, Duration::from_millis(200));
//! ```

use std::fmt;
use std::io::Write;
use std::time::Duration;

/// Destination of rendered frames.
pub type Output = Box<dyn Write + Send>;

/// Configuration structure for the pool
pub struct PoolConfig {
    /// Delay between two refresh cycles.
    pub refresh_rate: Duration,
    /// Where frames are written. Resolved once, when the pool is built.
    pub output: Output,
}

impl PoolConfig {
    /// Default delay between two refresh cycles.
    pub const DEFAULT_REFRESH_RATE: Duration = Duration::from_millis(200);
}

impl fmt::Debug for PoolConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PoolConfig")
            .field("refresh_rate", &self.refresh_rate)
            .field("output", &"<dyn Write>")
            .finish()
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            refresh_rate: Self::DEFAULT_REFRESH_RATE,
            output: Box::new(console::Term::stdout()),
        }
    }
}
