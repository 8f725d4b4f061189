use std::time::{Duration, Instant};

/// Monotonic time source for the frame driver.
///
/// The demo measures elapsed time once per idle tick; nothing in the
/// scene consumes it yet, so the value is only trace-logged. Keeping the
/// source behind a trait lets tests drive the timer by hand.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Process clock backed by `std::time::Instant`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Measures the time between consecutive idle ticks.
#[derive(Debug)]
pub struct FrameTimer<C: Clock = SystemClock> {
    clock: C,
    last_tick: Instant,
}

impl FrameTimer<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for FrameTimer<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> FrameTimer<C> {
    pub fn with_clock(clock: C) -> Self {
        let last_tick = clock.now();
        Self { clock, last_tick }
    }

    /// Returns the seconds elapsed since the previous tick.
    pub fn tick(&mut self) -> f32 {
        let now = self.clock.now();
        let dt = now.duration_since(self.last_tick);
        self.last_tick = now;
        duration_seconds(dt)
    }
}

fn duration_seconds(duration: Duration) -> f32 {
    duration.as_secs_f32()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Clock advanced explicitly by the test.
    #[derive(Clone)]
    struct ManualClock {
        origin: Instant,
        offset: Rc<Cell<Duration>>,
    }

    impl ManualClock {
        fn new() -> Self {
            Self {
                origin: Instant::now(),
                offset: Rc::new(Cell::new(Duration::ZERO)),
            }
        }

        fn advance(&self, by: Duration) {
            self.offset.set(self.offset.get() + by);
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> Instant {
            self.origin + self.offset.get()
        }
    }

    #[test]
    fn tick_reports_elapsed_time() {
        let clock = ManualClock::new();
        let mut timer = FrameTimer::with_clock(clock.clone());
        clock.advance(Duration::from_millis(16));
        let dt = timer.tick();
        assert!((dt - 0.016).abs() < 1e-6);
    }

    #[test]
    fn tick_resets_the_baseline() {
        let clock = ManualClock::new();
        let mut timer = FrameTimer::with_clock(clock.clone());
        clock.advance(Duration::from_millis(10));
        timer.tick();
        let dt = timer.tick();
        assert_eq!(dt, 0.0);
    }
}
