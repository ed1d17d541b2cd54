//! Three bars filled from three threads, redrawn in place by one pool.

use color_eyre::Result;
use pb_pool::{BarStyle, PoolBuilder, ProgressBar};
use rand::Rng;
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let bars: Vec<_> = ["first ", "second", "third "]
        .into_iter()
        .map(|name| {
            Arc::new(
                ProgressBar::new(200)
                    .with_prefix(format!("{name} "))
                    .with_style(BarStyle::default().width(30)),
            )
        })
        .collect();

    let pool = PoolBuilder::new()
        .refresh_rate(Duration::from_millis(100))
        .indicators(bars.iter().cloned())
        .start()?;

    let workers: Vec<_> = bars
        .iter()
        .cloned()
        .map(|bar| {
            thread::spawn(move || {
                let mut rng = rand::rng();
                for _ in 0..200 {
                    bar.inc();
                    thread::sleep(Duration::from_millis(rng.random_range(0..100)));
                }
                bar.finish();
            })
        })
        .collect();

    for worker in workers {
        if worker.join().is_err() {
            eprintln!("a worker thread panicked");
        }
    }

    pool.stop()?;
    Ok(())
}
