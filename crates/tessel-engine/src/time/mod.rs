//! Time subsystem.
//!
//! A [`Timer`] measures seconds since its last reset on top of a
//! [`ClockSource`] chosen once at construction:
//! - `PerformanceCounter`: monotonic, nanosecond ticks (default)
//! - `WallClock`: system time in microseconds; may jump if the clock is adjusted
//!
//! Intended usage: one `Timer` per render loop, `interval()` once per frame for
//! delta time, `fps()` once per frame for a rolling frame rate.

mod clock;
mod timer;

pub use clock::ClockSource;
pub use timer::Timer;
