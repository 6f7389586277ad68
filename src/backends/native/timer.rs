use std::time::{Duration, Instant};

/// A fixed-interval timer used to schedule the periodic drain routines.
pub struct Timer {
    interval: Duration,
    last: Instant,
}

impl Timer {
    /// Creates a new Timer that rings once `interval` has elapsed
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: Instant::now(),
        }
    }

    /// Returns whether or not the timer is ringing
    pub fn ringing(&self) -> bool {
        self.last.elapsed() >= self.interval
    }

    /// Resets the timer to stop ringing until the interval elapses again
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::Timer;

    #[test]
    fn zero_interval_always_rings() {
        let mut timer = Timer::new(Duration::ZERO);
        assert!(timer.ringing());
        timer.reset();
        assert!(timer.ringing());
    }

    #[test]
    fn long_interval_does_not_ring_immediately() {
        let timer = Timer::new(Duration::from_secs(3600));
        assert!(!timer.ringing());
    }
}
