use super::ClockSource;

/// Elapsed-time source with a resettable epoch.
///
/// `time()` reports seconds since construction or the last `reset()` and never
/// moves the epoch. The remaining methods are caller-driven frame helpers built
/// on the same reading; a loop that only needs elapsed time can ignore them.
///
/// With [`ClockSource::WallClock`] a system clock adjustment can make `time()`
/// decrease or go negative. That is surfaced as-is.
#[derive(Debug, Clone)]
pub struct Timer {
    clock: ClockSource,
    seconds_per_tick: f64,
    epoch: i64,

    frame_count: u32,
    fps: f32,
    fps_time: f32,
    last_interval: f32,
    last_passed: f32,
}

impl Timer {
    /// Creates a timer on the platform's default clock, starting at zero.
    pub fn new() -> Self {
        Self::with_clock(ClockSource::platform_default())
    }

    pub fn with_clock(clock: ClockSource) -> Self {
        let mut timer = Self {
            clock,
            seconds_per_tick: clock.seconds_per_tick(),
            epoch: 0,
            frame_count: 0,
            fps: 0.0,
            fps_time: 0.0,
            last_interval: 0.0,
            last_passed: 0.0,
        };
        timer.reset();
        timer
    }

    /// Makes the current instant the new zero.
    ///
    /// Interval, fps window and `is_time_passed` bookkeeping restart with it.
    /// The last computed fps value is kept until the next window closes.
    pub fn reset(&mut self) {
        self.epoch = self.clock.ticks();
        self.frame_count = 0;
        self.fps_time = 0.0;
        self.last_interval = 0.0;
        self.last_passed = 0.0;
    }

    /// Seconds since the last reset.
    pub fn time(&self) -> f32 {
        ((self.clock.ticks() - self.epoch) as f64 * self.seconds_per_tick) as f32
    }

    /// Seconds since the previous `interval()` call (or the last reset).
    pub fn interval(&mut self) -> f32 {
        let now = self.time();
        self.interval_at(now)
    }

    /// Counts one frame and returns the frame rate of the last full window.
    ///
    /// A window closes once more than a second has passed since it opened;
    /// until the first one closes this returns 0.
    pub fn fps(&mut self) -> f32 {
        let now = self.time();
        self.fps_at(now)
    }

    /// Returns `true`, and re-arms, when more than `seconds` have passed since
    /// the last time it returned `true` (or since the last reset).
    pub fn is_time_passed(&mut self, seconds: f32) -> bool {
        let now = self.time();
        self.time_passed_at(now, seconds)
    }

    /// Frames counted in the current fps window.
    #[inline]
    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    #[inline]
    pub fn clock(&self) -> ClockSource {
        self.clock
    }

    fn interval_at(&mut self, now: f32) -> f32 {
        let dt = now - self.last_interval;
        self.last_interval = now;
        dt
    }

    fn fps_at(&mut self, now: f32) -> f32 {
        let elapsed = now - self.fps_time;
        if elapsed > 1.0 {
            self.fps = self.frame_count as f32 / elapsed;
            self.frame_count = 0;
            self.fps_time = now;
        }
        self.frame_count += 1;
        self.fps
    }

    fn time_passed_at(&mut self, now: f32, seconds: f32) -> bool {
        if now - self.last_passed > seconds {
            self.last_passed = now;
            true
        } else {
            false
        }
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    // ── elapsed time ──────────────────────────────────────────────────────

    #[test]
    fn starts_near_zero() {
        let t = Timer::new();
        let now = t.time();
        assert!((0.0..0.05).contains(&now), "{now}");
    }

    #[test]
    fn reads_are_monotonic() {
        let mut t = Timer::new();
        t.reset();
        let a = t.time();
        sleep(Duration::from_millis(5));
        let b = t.time();
        assert!(b >= a);
        assert!(b - a >= 0.004, "{a} -> {b}");
    }

    #[test]
    fn reading_does_not_move_epoch() {
        let t = Timer::new();
        sleep(Duration::from_millis(10));
        let a = t.time();
        let b = t.time();
        assert!(a >= 0.009);
        assert!(b >= a);
    }

    #[test]
    fn reset_rebaselines() {
        let mut t = Timer::new();
        sleep(Duration::from_millis(20));
        let before = t.time();
        assert!(before >= 0.019);

        t.reset();
        assert!(t.time() < before);
        assert!(t.time() < 0.05);
    }

    #[test]
    fn wall_clock_resets_near_zero() {
        let mut t = Timer::with_clock(ClockSource::wall_clock());
        sleep(Duration::from_millis(5));
        t.reset();
        assert!(t.time().abs() < 0.05);
        assert_eq!(t.clock(), ClockSource::WallClock);
    }

    // ── frame helpers ─────────────────────────────────────────────────────

    #[test]
    fn interval_measures_between_calls() {
        let mut t = Timer::new();
        assert_eq!(t.interval_at(0.25), 0.25);
        assert_eq!(t.interval_at(0.75), 0.5);
        assert_eq!(t.interval_at(0.75), 0.0);
    }

    #[test]
    fn interval_with_real_clock() {
        let mut t = Timer::new();
        t.interval();
        sleep(Duration::from_millis(10));
        assert!(t.interval() >= 0.009);
    }

    #[test]
    fn fps_reports_after_first_window() {
        let mut t = Timer::new();

        // 60 frames spread over just over one second.
        for i in 0..60 {
            assert_eq!(t.fps_at(i as f32 / 59.0), 0.0);
        }
        assert_eq!(t.frame_count(), 60);

        let fps = t.fps_at(1.2);
        assert!((fps - 50.0).abs() < 1e-3, "{fps}");
        // The closing frame opens the next window.
        assert_eq!(t.frame_count(), 1);

        // Value is held until the next window closes.
        assert_eq!(t.fps_at(1.5), fps);
    }

    #[test]
    fn time_passed_rearms() {
        let mut t = Timer::new();
        assert!(!t.time_passed_at(0.5, 1.0));
        assert!(t.time_passed_at(1.1, 1.0));
        assert!(!t.time_passed_at(1.5, 1.0));
        assert!(t.time_passed_at(2.2, 1.0));
    }

    #[test]
    fn reset_clears_bookkeeping() {
        let mut t = Timer::new();
        t.fps_at(0.1);
        t.interval_at(3.0);
        t.time_passed_at(3.0, 1.0);

        t.reset();
        assert_eq!(t.frame_count(), 0);
        assert_eq!(t.interval_at(0.5), 0.5);
        assert!(t.time_passed_at(1.5, 1.0));
    }
}
