//! Error handling for the pb-pool library.
//!
//! The render loop itself never fails: frame writes are best-effort and are only
//! logged. The errors below cover the few operations that can report a failure to
//! the caller, such as spawning the render worker.

use std::io;
use thiserror::Error;

/// Errors that can happen when using pb-pool.
#[derive(Error, Debug)]
pub enum Error {
    /// The render worker thread could not be spawned.
    ///
    /// Returned by [`Pool::start`](crate::Pool::start) when the operating system
    /// refuses to create a new thread.
    #[error("Failed to spawn the render worker")]
    Spawn {
        #[source]
        source: io::Error,
    },

    /// I/O Error.
    ///
    /// This variant wraps standard I/O errors raised while writing a rendered
    /// indicator to an explicit writer.
    #[error("I/O error")]
    IOError {
        #[from]
        source: io::Error,
    },
}

/// Result type alias for operations that can fail with a pb-pool error.
pub type Result<T> = std::result::Result<T, Error>;
