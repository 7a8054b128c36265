use std::time::{Duration, Instant};

/// Logical generation clock. Decides when the next step is due independently
/// of how often the frame loop polls it.
#[derive(Debug, Clone, Copy)]
pub struct GenerationClock {
    interval: Duration,
    next_due: Instant,
}

impl GenerationClock {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_due: now + interval,
        }
    }

    /// Returns true at most once per interval. After a stall the deadline is
    /// pushed past `now` so missed steps are dropped, not replayed.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next_due {
            return false;
        }
        self.next_due += self.interval;
        if self.next_due <= now {
            self.next_due = now + self.interval;
        }
        true
    }

    pub fn reset(&mut self, now: Instant) {
        self.next_due = now + self.interval;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: Duration = Duration::from_millis(300);

    #[test]
    fn fires_once_per_interval() {
        let start = Instant::now();
        let mut clock = GenerationClock::new(TICK, start);

        assert!(!clock.poll(start));
        assert!(!clock.poll(start + Duration::from_millis(299)));
        assert!(clock.poll(start + TICK));
        assert!(!clock.poll(start + Duration::from_millis(310)));
        assert!(clock.poll(start + Duration::from_millis(600)));
    }

    #[test]
    fn polling_rate_does_not_change_step_rate() {
        let start = Instant::now();
        let mut clock = GenerationClock::new(TICK, start);
        let steps = (1..=3000)
            .filter(|ms| clock.poll(start + Duration::from_millis(*ms)))
            .count();
        assert_eq!(steps, 10);
    }

    #[test]
    fn stall_yields_a_single_step() {
        let start = Instant::now();
        let mut clock = GenerationClock::new(TICK, start);
        let late = start + Duration::from_secs(5);
        assert!(clock.poll(late));
        assert!(!clock.poll(late));
        assert!(!clock.poll(late + Duration::from_millis(299)));
        assert!(clock.poll(late + TICK));
    }

    #[test]
    fn reset_restarts_the_interval() {
        let start = Instant::now();
        let mut clock = GenerationClock::new(TICK, start);
        let resumed = start + Duration::from_secs(2);
        clock.reset(resumed);
        assert!(!clock.poll(resumed));
        assert!(clock.poll(resumed + TICK));
    }
}
