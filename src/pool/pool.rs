//! The pool: registration, the render worker and the shutdown protocol.
//!
//! # Examples
//!
//! ```rust
//! use pb_pool::{Pool, PoolBuilder, ProgressBar};
//! use std::sync::Arc;
//! use std::thread;
//! use std::time::Duration;
//!
//! # fn main() -> Result<(), pb_pool::Error> {
//! let bars: Vec<_> = (0..3).map(|_| Arc::new(ProgressBar::new(200))).collect();
//! let pool = PoolBuilder::hidden()
//!     .refresh_rate(Duration::from_millis(10))
//!     .indicators(bars.iter().cloned())
//!     .start()?;
//!
//! let workers: Vec<_> = bars
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
//! for worker in workers {
//!     worker.join().unwrap();
//! }
//!
//! pool.stop()?;
//! # Ok(())
//! # }
//! ```

use super::config::{Output, PoolConfig};
use super::frame::Frame;
use super::signal::{Cancellation, Latch};
use crate::error::{Error, Result};
use crate::Indicator;

use parking_lot::Mutex;
use std::fmt;
use std::io::Write;
use std::mem;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::{debug, trace, warn};

/// Indicators and the line count of the last written frame, guarded together.
#[derive(Default)]
struct Board {
    indicators: Vec<Box<dyn Indicator>>,
    last_lines: Option<usize>,
}

/// State shared between the pool handle and its render worker.
struct Shared {
    board: Mutex<Board>,
    refresh_rate: Duration,
    cancel: Cancellation,
    stopped: Latch,
}

enum Lifecycle {
    /// Not started yet; the worker will take ownership of the output.
    Idle(Output),
    /// Worker spawned. The handle is taken by whichever `stop` joins it.
    Running(Option<JoinHandle<()>>),
    /// Stopped without ever running a worker.
    Stopped,
}

/// Renders a set of indicators as one block of lines, redrawn in place.
///
/// The pool is driven by a dedicated thread. Indicators are updated directly
/// by their owners, and the worker snapshots them every refresh cycle.
/// [`Pool::stop`] blocks until the worker has written a final frame, so the
/// terminal always shows the last state before control returns.
pub struct Pool {
    shared: Arc<Shared>,
    lifecycle: Mutex<Lifecycle>,
}

impl fmt::Debug for Pool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pool")
            .field("refresh_rate", &self.shared.refresh_rate)
            .field("indicators", &self.len())
            .field("running", &self.is_running())
            .finish()
    }
}

impl Pool {
    /// Create a pool with the default configuration, registering `indicators`.
    ///
    /// The render worker is not started; call [`Pool::start`].
    pub fn new<I, T>(indicators: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Indicator + 'static,
    {
        let pool = Self::with_config(PoolConfig::default());
        pool.add(indicators);
        pool
    }

    /// Create a pool with the default configuration, register `indicators` and
    /// start the render worker.
    pub fn start_with<I, T>(indicators: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Indicator + 'static,
    {
        let pool = Self::new(indicators);
        pool.start()?;
        Ok(pool)
    }

    /// Create an empty pool from an explicit configuration.
    pub fn with_config(config: PoolConfig) -> Self {
        Self {
            shared: Arc::new(Shared {
                board: Mutex::new(Board::default()),
                refresh_rate: config.refresh_rate,
                cancel: Cancellation::new(),
                stopped: Latch::new(),
            }),
            lifecycle: Mutex::new(Lifecycle::Idle(config.output)),
        }
    }

    /// Register indicators, starting each one before it is tracked.
    ///
    /// Safe to call from any thread, including while the worker renders.
    /// Indicators are rendered in registration order and are never removed.
    pub fn add<I, T>(&self, indicators: I)
    where
        I: IntoIterator<Item = T>,
        T: Indicator + 'static,
    {
        self.register(
            indicators
                .into_iter()
                .map(|indicator| Box::new(indicator) as Box<dyn Indicator>),
        );
    }

    pub(crate) fn register<I>(&self, indicators: I)
    where
        I: IntoIterator<Item = Box<dyn Indicator>>,
    {
        let mut board = self.shared.board.lock();
        let before = board.indicators.len();
        for indicator in indicators {
            indicator.start();
            board.indicators.push(indicator);
        }
        let added = board.indicators.len() - before;
        if added > 0 {
            debug!("Registered {} indicator(s), {} tracked", added, board.indicators.len());
        }
    }

    /// Start the render worker.
    ///
    /// Starting a pool that is already running, or that has been stopped, does
    /// nothing.
    pub fn start(&self) -> Result<()> {
        let mut lifecycle = self.lifecycle.lock();
        let output = match mem::replace(&mut *lifecycle, Lifecycle::Stopped) {
            Lifecycle::Idle(output) => output,
            other => {
                *lifecycle = other;
                return Ok(());
            }
        };

        let tracked = self.len();
        let worker = Worker {
            shared: Arc::clone(&self.shared),
            output,
        };
        let handle = thread::Builder::new()
            .name("pb-pool-render".into())
            .spawn(move || worker.run())
            .map_err(|source| Error::Spawn { source })?;
        debug!(
            "Render worker started with {} indicator(s), refresh rate {:?}",
            tracked, self.shared.refresh_rate
        );
        *lifecycle = Lifecycle::Running(Some(handle));
        Ok(())
    }

    /// Stop the render worker and wait for its final frame.
    ///
    /// May be called any number of times, from any thread. Every call blocks
    /// until the worker has flushed the last state and exited. Stopping a pool
    /// that was never started returns immediately.
    pub fn stop(&self) -> Result<()> {
        if self.shared.cancel.request() {
            debug!("Stop requested");
        }

        let handle = {
            let mut lifecycle = self.lifecycle.lock();
            if matches!(*lifecycle, Lifecycle::Idle(_)) {
                // Never started: drop the output and refuse later starts.
                *lifecycle = Lifecycle::Stopped;
                return Ok(());
            }
            match &mut *lifecycle {
                Lifecycle::Running(handle) => handle.take(),
                _ => return Ok(()),
            }
        };

        self.shared.stopped.wait();
        if let Some(handle) = handle {
            if handle.join().is_err() {
                warn!("Render worker panicked");
            }
        }
        Ok(())
    }

    /// Number of registered indicators.
    pub fn len(&self) -> usize {
        self.shared.board.lock().indicators.len()
    }

    /// Whether no indicator has been registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the render worker is currently running.
    pub fn is_running(&self) -> bool {
        matches!(*self.lifecycle.lock(), Lifecycle::Running(_)) && !self.shared.stopped.is_fired()
    }

    /// Gets the delay between two refresh cycles.
    pub fn refresh_rate(&self) -> Duration {
        self.shared.refresh_rate
    }
}

impl Drop for Pool {
    fn drop(&mut self) {
        let _ = self.stop();
    }
}

#[derive(Debug)]
enum Exit {
    Cancelled,
    Completed,
}

/// The render worker. Sole writer to the output.
struct Worker {
    shared: Arc<Shared>,
    output: Output,
}

/// Fires the stopped latch when the worker goes away, even by unwinding.
struct StoppedGuard(Arc<Shared>);

impl Drop for StoppedGuard {
    fn drop(&mut self) {
        self.0.stopped.fire();
    }
}

impl Worker {
    fn run(mut self) {
        let _guard = StoppedGuard(Arc::clone(&self.shared));
        let exit = loop {
            if self.shared.cancel.wait_timeout(self.shared.refresh_rate) {
                break Exit::Cancelled;
            }
            if self.draw() {
                self.draw();
                break Exit::Completed;
            }
        };
        // Leave the latest state on screen with the cursor below the block.
        // Nothing drawn yet means the block is written and then redrawn in place.
        if self.shared.board.lock().last_lines.is_none() {
            self.draw();
        }
        self.draw();
        debug!("Render worker exiting: {:?}", exit);
    }

    /// Render and write one frame, returning whether every indicator was finished.
    fn draw(&mut self) -> bool {
        let frame = {
            let mut board = self.shared.board.lock();
            let frame = Frame::render(board.last_lines, &board.indicators);
            board.last_lines = Some(frame.lines());
            frame
        };
        trace!(
            lines = frame.lines(),
            finished = frame.all_finished(),
            "Frame rendered"
        );
        if let Err(err) = self
            .output
            .write_all(frame.text().as_bytes())
            .and_then(|()| self.output.flush())
        {
            warn!("Failed to write frame: {}", err);
        }
        frame.all_finished()
    }
}
