use std::time::{Instant, SystemTime, UNIX_EPOCH};

/// Where a [`Timer`](super::Timer) reads ticks from.
///
/// Both variants expose the same contract: an integer tick reading plus a
/// fixed tick-to-seconds factor.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ClockSource {
    /// Monotonic counter. Ticks are nanoseconds since `anchor`.
    PerformanceCounter { anchor: Instant },
    /// System wall clock. Ticks are microseconds since the Unix epoch.
    WallClock,
}

impl ClockSource {
    pub fn performance_counter() -> Self {
        ClockSource::PerformanceCounter {
            anchor: Instant::now(),
        }
    }

    pub fn wall_clock() -> Self {
        ClockSource::WallClock
    }

    /// Highest-resolution source available; the monotonic counter on every
    /// target `std` supports.
    pub fn platform_default() -> Self {
        Self::performance_counter()
    }

    /// Current reading in ticks.
    ///
    /// Wall-clock readings before 1970 come out negative instead of failing.
    pub fn ticks(&self) -> i64 {
        match self {
            ClockSource::PerformanceCounter { anchor } => anchor.elapsed().as_nanos() as i64,
            ClockSource::WallClock => match SystemTime::now().duration_since(UNIX_EPOCH) {
                Ok(since) => since.as_micros() as i64,
                Err(err) => -(err.duration().as_micros() as i64),
            },
        }
    }

    /// Seconds represented by one tick.
    pub fn seconds_per_tick(&self) -> f64 {
        match self {
            ClockSource::PerformanceCounter { .. } => 1e-9,
            ClockSource::WallClock => 1e-6,
        }
    }

    /// Whether readings never go backwards.
    pub fn is_monotonic(&self) -> bool {
        matches!(self, ClockSource::PerformanceCounter { .. })
    }
}

impl Default for ClockSource {
    fn default() -> Self {
        Self::platform_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_monotonic() {
        assert!(ClockSource::default().is_monotonic());
        assert!(!ClockSource::wall_clock().is_monotonic());
    }

    #[test]
    fn factors() {
        assert_eq!(ClockSource::performance_counter().seconds_per_tick(), 1e-9);
        assert_eq!(ClockSource::wall_clock().seconds_per_tick(), 1e-6);
    }

    #[test]
    fn counter_ticks_advance() {
        let clock = ClockSource::performance_counter();
        let a = clock.ticks();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let b = clock.ticks();
        assert!(a >= 0);
        assert!(b - a >= 2_000_000);
    }

    #[test]
    fn wall_clock_is_after_epoch() {
        // 2020-01-01 in microseconds.
        assert!(ClockSource::wall_clock().ticks() > 1_577_836_800_000_000);
    }
}
