use std::time::{Duration, Instant};

/// Keeps a fixed cadence by sleeping out whatever is left of each frame.
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

    /// Sleeps until `target_delta_time` has passed since the previous call returned.
    /// Returns whether any sleeping happened, `false` meaning the frame ran late.
    pub fn sleep(&mut self) -> bool {
        // Without a previous frame there is nothing to measure against, so the whole delta is slept.
        let delta_time = self
            .last_instant
            .map(|last_instant| last_instant.elapsed())
            .unwrap_or_default();

        let slept = if self.target_delta_time > delta_time {
            spin_sleep::sleep(self.target_delta_time - delta_time);
            true
        } else {
            false
        };

        self.last_instant = Some(Instant::now());
        slept
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_delta_never_sleeps() {
        let mut sleeper = Sleeper::new(Duration::ZERO);

        assert!(!sleeper.sleep());
        assert!(!sleeper.sleep());
        assert!(sleeper.last_instant.is_some());
    }

    #[test]
    fn sleeps_out_the_rest_of_the_frame() {
        let target = Duration::from_millis(20);
        let mut sleeper = Sleeper::new(target);

        let start = Instant::now();
        assert!(sleeper.sleep());
        assert!(start.elapsed() >= target);
    }

    #[test]
    fn late_frames_do_not_sleep() {
        let mut sleeper = Sleeper::new(Duration::from_millis(5));
        sleeper.last_instant = Instant::now().checked_sub(Duration::from_millis(50));

        assert!(!sleeper.sleep());
    }
}
