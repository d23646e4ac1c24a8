//! Tick metrics and structured logging.

use crate::muscle::MuscleOutput;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Running counters of one engine.
pub struct Metrics {
    tick_count: AtomicU64,
    spike_count: AtomicU64,
    last_spikes: AtomicU64,
    stimulations: AtomicU64,
    log_interval: u64,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new(1000)
    }
}

impl std::fmt::Debug for Metrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Metrics")
            .field("tick_count", &self.tick_count())
            .field("spike_count", &self.spike_count())
            .finish()
    }
}

impl Metrics {
    /// Creates a collector that logs a summary every `log_interval` ticks.
    #[must_use]
    pub fn new(log_interval: u64) -> Self {
        Self {
            tick_count: AtomicU64::new(0),
            spike_count: AtomicU64::new(0),
            last_spikes: AtomicU64::new(0),
            stimulations: AtomicU64::new(0),
            log_interval: log_interval.max(1),
            start_time: Instant::now(),
        }
    }

    /// Records a completed tick with its duration.
    pub fn record_tick(&self, duration: Duration, spikes: usize, output: MuscleOutput) {
        let tick = self.tick_count.fetch_add(1, Ordering::Relaxed) + 1;
        self.spike_count.fetch_add(spikes as u64, Ordering::Relaxed);
        self.last_spikes.store(spikes as u64, Ordering::Relaxed);

        if tick % self.log_interval == 0 {
            tracing::info!(
                tick = tick,
                spikes = spikes,
                total_spikes = self.spike_count(),
                left = output.left,
                right = output.right,
                duration_us = duration.as_micros() as u64,
                "Simulation tick"
            );
        }
    }

    /// Counts one external stimulation that reached at least one target.
    pub fn record_stimulation(&self) {
        self.stimulations.fetch_add(1, Ordering::Relaxed);
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn spike_count(&self) -> u64 {
        self.spike_count.load(Ordering::Relaxed)
    }

    /// Spikes recorded by the most recent tick.
    #[must_use]
    pub fn last_spikes(&self) -> u64 {
        self.last_spikes.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn stimulations(&self) -> u64 {
        self.stimulations.load(Ordering::Relaxed)
    }

    /// Gets elapsed time since metrics creation.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Initialize tracing subscriber for logging.
///
/// Honors `RUST_LOG`, falling back to `info`. Output goes to stderr so stdout
/// stays free for frames. Calling it twice is harmless.
pub fn init_logging() {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::{fmt, EnvFilter};

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .ok();
}
