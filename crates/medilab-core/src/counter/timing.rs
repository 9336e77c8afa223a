//! Time calculation utilities and frame clocks for counter animations

use std::time::Instant;

/// Calculate animation progress (0.0 to 1.0) from elapsed time and budget
///
/// A zero, negative, NaN or infinite budget completes immediately.
#[inline]
pub fn progress(elapsed_ms: f64, budget_ms: f64) -> f64 {
    if !(budget_ms > 0.0) || !budget_ms.is_finite() {
        return 1.0;
    }
    (elapsed_ms / budget_ms).clamp(0.0, 1.0)
}

/// Source of frame timestamps, in milliseconds
///
/// Stands in for the host's display refresh callback: each call corresponds
/// to one scheduled frame. Implementations should return non-decreasing
/// values.
pub trait FrameClock {
    fn now_ms(&mut self) -> f64;
}

/// Wall clock backed by [`Instant`]
#[derive(Debug, Clone, Copy)]
pub struct SteadyClock {
    origin: Instant,
}

impl SteadyClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SteadyClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock for SteadyClock {
    #[inline]
    fn now_ms(&mut self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Deterministic clock that advances a fixed step on every read
///
/// The first read returns 0, so the animation start is stamped at 0 and the
/// first frame lands one step later.
#[derive(Debug, Clone, Copy)]
pub struct ManualClock {
    now: f64,
    step_ms: f64,
}

impl ManualClock {
    pub fn new(step_ms: f64) -> Self {
        Self {
            now: -step_ms,
            step_ms,
        }
    }
}

impl FrameClock for ManualClock {
    #[inline]
    fn now_ms(&mut self) -> f64 {
        self.now += self.step_ms;
        self.now
    }
}

impl<C: FrameClock + ?Sized> FrameClock for &mut C {
    #[inline]
    fn now_ms(&mut self) -> f64 {
        (**self).now_ms()
    }
}

impl<C: FrameClock + ?Sized> FrameClock for Box<C> {
    #[inline]
    fn now_ms(&mut self) -> f64 {
        (**self).now_ms()
    }
}
