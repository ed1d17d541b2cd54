#![allow(dead_code)]

use parking_lot::Mutex;
use pb_pool::{BarStyle, Indicator, PoolBuilder, ProgressBar};
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

// Common test constants
pub const FAST_REFRESH: Duration = Duration::from_millis(1);
pub const PROMPT: Duration = Duration::from_secs(2);

/// Installs a test subscriber once; honours `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// === Output Helpers ===

/// Sink recording every write as one frame.
#[derive(Clone, Default)]
pub struct Recorder {
    frames: Arc<Mutex<Vec<String>>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> Vec<String> {
        self.frames.lock().clone()
    }

    pub fn frame_count(&self) -> usize {
        self.frames.lock().len()
    }

    pub fn last_frame(&self) -> Option<String> {
        self.frames.lock().last().cloned()
    }
}

impl Write for Recorder {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.frames
            .lock()
            .push(String::from_utf8_lossy(buf).into_owned());
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Sink rejecting every write.
pub struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
    }
}

/// Creates a builder writing into a fresh recorder.
pub fn create_recording_builder(refresh_rate: Duration) -> (PoolBuilder, Recorder) {
    let recorder = Recorder::new();
    let builder = PoolBuilder::new()
        .refresh_rate(refresh_rate)
        .output(recorder.clone());
    (builder, recorder)
}

// === Frame Helpers ===

/// Number of lines moved up by the frame's prefix, if it has one.
pub fn cursor_up_count(frame: &str) -> Option<usize> {
    let rest = frame.strip_prefix("\x1b[")?;
    let end = rest.find('A')?;
    rest[..end].parse().ok()
}

/// Number of indicator lines in a frame.
pub fn line_count(frame: &str) -> usize {
    frame.matches('\n').count()
}

/// The visible lines of a frame, without control sequences.
pub fn visible_lines(frame: &str) -> Vec<String> {
    console::strip_ansi_codes(frame)
        .lines()
        .map(|line| line.trim_start_matches('\r').to_string())
        .collect()
}

/// Asserts every frame moves up exactly over the previous one.
pub fn assert_cursor_tracks_previous_frame(frames: &[String]) {
    let mut previous: Option<usize> = None;
    for (k, frame) in frames.iter().enumerate() {
        let expected = previous.filter(|lines| *lines > 0);
        assert_eq!(
            cursor_up_count(frame),
            expected,
            "frame {} moved the cursor by the wrong amount: {:?}",
            k,
            frame
        );
        previous = Some(line_count(frame));
    }
}

/// Polls `condition` until it holds or `timeout` elapses.
pub fn wait_until(timeout: Duration, mut condition: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if condition() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(1));
    }
    condition()
}

// === Indicator Helpers ===

/// Creates a bar whose rendering does not depend on time.
pub fn create_test_bar(total: u64) -> Arc<ProgressBar> {
    Arc::new(ProgressBar::new(total).with_style(create_test_style()))
}

/// Creates a finished bar whose rendering does not depend on time.
pub fn create_finished_bar(total: u64) -> Arc<ProgressBar> {
    let bar = create_test_bar(total);
    bar.set(total);
    bar.finish();
    bar
}

/// Narrow style without elapsed time.
pub fn create_test_style() -> BarStyle {
    BarStyle::default().width(10).show_elapsed(false)
}

/// Indicator with fixed text that counts its start calls.
pub struct StaticIndicator {
    text: String,
    finished: AtomicBool,
    starts: AtomicUsize,
}

impl StaticIndicator {
    pub fn new(text: &str) -> Arc<Self> {
        Arc::new(Self {
            text: text.to_string(),
            finished: AtomicBool::new(false),
            starts: AtomicUsize::new(0),
        })
    }

    pub fn finished(text: &str) -> Arc<Self> {
        let indicator = Self::new(text);
        indicator.finish();
        indicator
    }

    pub fn finish(&self) {
        self.finished.store(true, Ordering::Release);
    }

    pub fn starts(&self) -> usize {
        self.starts.load(Ordering::SeqCst)
    }
}

impl Indicator for StaticIndicator {
    fn start(&self) {
        self.starts.fetch_add(1, Ordering::SeqCst);
    }

    fn render(&self) -> String {
        self.text.clone()
    }

    fn is_finished(&self) -> bool {
        self.finished.load(Ordering::Acquire)
    }
}

/// Indicator whose rendering panics.
pub struct PanickingIndicator;

impl Indicator for PanickingIndicator {
    fn render(&self) -> String {
        panic!("render failed");
    }

    fn is_finished(&self) -> bool {
        false
    }
}
