//! Lazy frame producer for counter animations
//!
//! Combines easing, timing and formatting. The host pulls one frame per
//! display refresh; the iterator ends after the terminal frame or as soon as
//! its cancel token fires.

use std::iter::FusedIterator;

use serde::Serialize;

use super::cancel::CancelToken;
use super::easing::{EasingType, EasingTypeExt};
use super::target::CounterSpec;
use super::timing::{progress, FrameClock};

/// Stamp used when a clock fails to move forward between frames
const MIN_FRAME_STEP_MS: f64 = 0.001;

/// One rendered frame of a counter
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnimationFrame {
    /// Milliseconds since the animation started
    pub elapsed_ms: f64,
    /// Linear progress in [0, 1]
    pub progress: f64,
    /// Integer value behind the text
    pub displayed_value: u64,
    /// What the rendering surface shows
    pub text: String,
}

impl AnimationFrame {
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.progress >= 1.0
    }
}

/// Single-shot counter animation
///
/// Created by [`animate`]. Not restartable: once the terminal frame has been
/// yielded (or the animation was cancelled) every further poll returns `None`.
#[derive(Debug)]
pub struct CounterAnimation<C> {
    spec: CounterSpec,
    budget_ms: f64,
    easing: EasingType,
    clock: C,
    /// Clock reading at start
    start_ms: f64,
    last_elapsed: Option<f64>,
    frames: u32,
    finished: bool,
    cancel: CancelToken,
}

/// Start animating `spec` over `budget_ms`, stamping frames with `clock`
pub fn animate<C: FrameClock>(spec: CounterSpec, budget_ms: f64, clock: C) -> CounterAnimation<C> {
    CounterAnimation::new(spec, budget_ms, clock)
}

impl<C: FrameClock> CounterAnimation<C> {
    pub fn new(spec: CounterSpec, budget_ms: f64, mut clock: C) -> Self {
        let start_ms = clock.now_ms();
        tracing::debug!(
            target_value = spec.target_value,
            format = %spec.display_format,
            budget_ms,
            "Counter animation started"
        );
        Self {
            spec,
            budget_ms,
            easing: EasingType::default(),
            clock,
            start_ms,
            last_elapsed: None,
            frames: 0,
            finished: false,
            cancel: CancelToken::new(),
        }
    }

    /// Use a different easing curve
    pub fn with_easing(mut self, easing: EasingType) -> Self {
        self.easing = easing;
        self
    }

    /// Tie the animation to an externally owned token
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = token;
        self
    }

    pub fn spec(&self) -> &CounterSpec {
        &self.spec
    }

    /// Token that stops this animation when cancelled
    pub fn cancel_token(&self) -> &CancelToken {
        &self.cancel
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Elapsed time for the next frame, forced strictly after the previous one
    fn next_elapsed(&mut self) -> f64 {
        let raw = self.clock.now_ms() - self.start_ms;
        match self.last_elapsed {
            Some(prev) if !(raw > prev) => prev + MIN_FRAME_STEP_MS,
            None if !(raw >= 0.0) => 0.0,
            _ => raw,
        }
    }

    fn frame_at(&self, elapsed_ms: f64) -> AnimationFrame {
        let progress = progress(elapsed_ms, self.budget_ms);
        let target = self.spec.target_value;
        let format = self.spec.display_format;

        if progress >= 1.0 {
            return AnimationFrame {
                elapsed_ms,
                progress: 1.0,
                displayed_value: target,
                text: format.render_final(target),
            };
        }

        let eased = self.easing.apply(progress);
        let value = ((eased * target as f64).floor() as u64).min(target);
        AnimationFrame {
            elapsed_ms,
            progress,
            displayed_value: value,
            text: format.render_frame(value),
        }
    }
}

impl<C: FrameClock> Iterator for CounterAnimation<C> {
    type Item = AnimationFrame;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        if self.cancel.is_cancelled() {
            self.finished = true;
            tracing::debug!(frames = self.frames, "Counter animation stopped before completion");
            return None;
        }

        let elapsed = self.next_elapsed();
        self.last_elapsed = Some(elapsed);
        self.frames += 1;

        let frame = self.frame_at(elapsed);
        if frame.is_terminal() {
            self.finished = true;
            tracing::debug!(frames = self.frames, text = %frame.text, "Counter animation finished");
        }
        Some(frame)
    }
}

impl<C: FrameClock> FusedIterator for CounterAnimation<C> {}
