use std::time::{Duration, Instant};

/// Paces a loop to at most one iteration per `target_delta_time`.
pub struct Sleeper {
    pub target_delta_time: Duration,
    pub last_instant: Option<Instant>,
}

impl Sleeper {
    pub fn new(target_delta_time: Duration) -> Self {
        Self {
            target_delta_time,
            last_instant: None,
        }
    }

    pub fn from_fps(target_fps: u64) -> Self {
        Self::new(Duration::from_micros(1_000_000 / target_fps.max(1)))
    }

    /// Sleeps for whatever is left of the target frame time since the previous call.
    /// Returns whether any sleeping happened.
    pub fn sleep(&mut self) -> bool {
        let slept = match self.last_instant {
            Some(last_instant) => {
                let delta_time = last_instant.elapsed();

                if self.target_delta_time > delta_time {
                    spin_sleep::sleep(self.target_delta_time - delta_time);
                    true
                } else {
                    false
                }
            }
            // Assume we're late if we've never slept yet.
            None => false,
        };

        self.last_instant = Some(Instant::now());
        slept
    }
}
