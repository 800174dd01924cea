use std::{sync::Arc, time::Duration};

use tokio::{task::JoinHandle, time::MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::constants::{MAX_RATE, MIN_FRAME_RATE};

/// Receives the generation of the loop that produced each frame.
pub type FrameSink = Arc<dyn Fn(u64) + Send + Sync>;

/// Time between two events at `rate` Hz, with the rate held in `min..=MAX_RATE`.
/// A NaN rate runs at `min`.
pub fn period(rate: f64, min: f64) -> Duration {
    let rate = if rate.is_nan() { min } else { rate.clamp(min, MAX_RATE) };
    Duration::from_secs_f64(1.0 / rate)
}

struct FrameLoop {
    cancellation_token: CancellationToken,
    task: Option<JoinHandle<()>>,
}

/// Drives the simulation at the display refresh rate. At most one loop runs
/// at a time; every start gets a new generation so that frames queued by a
/// cancelled loop can be told apart.
pub struct FrameScheduler {
    frame_rate: f64,
    generation: u64,
    running: Option<FrameLoop>,
}

impl FrameScheduler {
    pub fn new(frame_rate: f64) -> Self {
        FrameScheduler { frame_rate, generation: 0, running: None }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// Cancels the current loop, if any, and starts a new one. Without a sink
    /// no task is spawned and frames are expected to be fed by hand.
    pub fn start(&mut self, sink: Option<FrameSink>) -> u64 {
        self.cancel();
        self.generation += 1;
        let generation = self.generation;

        let period = period(self.frame_rate, MIN_FRAME_RATE);
        let cancellation_token = CancellationToken::new();
        let task = sink.map(|sink| {
            let _cancellation_token = cancellation_token.clone();
            tokio::spawn(async move {
                let mut interval = tokio::time::interval(period);
                interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
                loop {
                    tokio::select! {
                        _ = _cancellation_token.cancelled() => break,
                        _ = interval.tick() => sink(generation),
                    }
                }
            })
        });

        debug!(generation, spawned = task.is_some(), "frame loop started");
        self.running = Some(FrameLoop { cancellation_token, task });
        generation
    }

    /// Stops the current loop. Returns false when nothing was running.
    pub fn cancel(&mut self) -> bool {
        match self.running.take() {
            Some(frame_loop) => {
                frame_loop.cancellation_token.cancel();
                if let Some(task) = frame_loop.task {
                    task.abort();
                }
                debug!(generation = self.generation, "frame loop cancelled");
                true
            },
            None => false,
        }
    }
}

impl Drop for FrameScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}
