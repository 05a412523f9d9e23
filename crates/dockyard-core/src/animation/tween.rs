#![forbid(unsafe_code)]

//! Offset interpolation over a fixed duration.
//!
//! [`OffsetTween`] animates a 2D [`Offset`] from `begin` to `end`. It is
//! driven by the host frame clock through [`OffsetTween::advance`], which
//! returns the interpolated value and invokes the optional per-frame and
//! completion callbacks.
//!
//! Dock internals read the returned [`TweenStatus`] and register no
//! callbacks. [`on_frame`](OffsetTween::on_frame) and
//! [`on_complete`](OffsetTween::on_complete) are for hosts that drive their
//! own tweens, such as a custom drag preview.
//!
//! # Invariants
//!
//! 1. `sample(0) == begin` and `sample(t) == end` for every `t >= duration`.
//! 2. The completion callback fires exactly once per run, on the first
//!    `advance` at which the accumulated time reaches `duration`.
//! 3. [`restart`](OffsetTween::restart) supersedes the current run: elapsed
//!    time and completion tracking are reset and [`generation`] is bumped,
//!    so a frame tagged with an older generation can be told apart.
//! 4. Once complete, `advance` is a no-op returning [`TweenStatus::Idle`]
//!    until the tween is restarted with fresh endpoints.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Fallback |
//! |---------|-------|----------|
//! | Non-finite endpoint | Unset drag coordinates | Snap to `end`, complete on next advance |
//! | Zero duration | Reduced motion | Completes on the first non-zero advance |
//!
//! [`generation`]: OffsetTween::generation

use std::fmt;
use std::time::Duration;

use super::{Animation, EasingFn, Timeline, ease_out};
use crate::geometry::Offset;

/// Outcome of a single [`OffsetTween::advance`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TweenStatus {
    /// The tween produced an intermediate value.
    Running(Offset),
    /// The tween reached its end on this frame.
    Completed(Offset),
    /// The tween had already completed; nothing happened.
    Idle,
}

impl TweenStatus {
    /// The value produced on this frame, if any.
    #[must_use]
    pub fn value(&self) -> Option<Offset> {
        match self {
            Self::Running(v) | Self::Completed(v) => Some(*v),
            Self::Idle => None,
        }
    }

    /// Whether this frame completed the tween.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }
}

type FrameCallback = Box<dyn FnMut(Offset)>;
type CompleteCallback = Box<dyn FnMut()>;

/// Time-bounded interpolation between two offsets.
pub struct OffsetTween {
    begin: Offset,
    end: Offset,
    timeline: Timeline,
    generation: u64,
    completed: bool,
    on_frame: Option<FrameCallback>,
    on_complete: Option<CompleteCallback>,
}

impl fmt::Debug for OffsetTween {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OffsetTween")
            .field("begin", &self.begin)
            .field("end", &self.end)
            .field("timeline", &self.timeline)
            .field("generation", &self.generation)
            .field("completed", &self.completed)
            .field("on_frame", &self.on_frame.as_ref().map(|_| ".."))
            .field("on_complete", &self.on_complete.as_ref().map(|_| ".."))
            .finish()
    }
}

impl OffsetTween {
    /// Create a tween from `begin` to `end` over `duration` with ease-out.
    #[must_use]
    pub fn new(begin: Offset, end: Offset, duration: Duration) -> Self {
        Self {
            begin,
            end,
            timeline: Timeline::new(duration).easing(ease_out),
            generation: 0,
            completed: false,
            on_frame: None,
            on_complete: None,
        }
    }

    /// A tween already at rest on `offset`.
    #[must_use]
    pub fn at_rest(offset: Offset) -> Self {
        let mut tween = Self::new(offset, offset, Duration::ZERO);
        tween.completed = true;
        tween
    }

    /// Set the easing curve (builder).
    #[must_use]
    pub fn easing(mut self, easing: EasingFn) -> Self {
        self.timeline = self.timeline.easing(easing);
        self
    }

    /// Register a callback invoked with every value produced by `advance`.
    #[must_use]
    pub fn on_frame(mut self, callback: impl FnMut(Offset) + 'static) -> Self {
        self.on_frame = Some(Box::new(callback));
        self
    }

    /// Register a callback invoked once when a run completes.
    #[must_use]
    pub fn on_complete(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_complete = Some(Box::new(callback));
        self
    }

    /// Start value of the current run.
    #[must_use]
    pub fn begin(&self) -> Offset {
        self.begin
    }

    /// End value of the current run.
    #[must_use]
    pub fn end(&self) -> Offset {
        self.end
    }

    /// Duration of a run.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.timeline.duration()
    }

    /// Time accumulated in the current run.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.timeline.elapsed()
    }

    /// Run counter, bumped by every restart or stop.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether the current run has reached its end (or was stopped).
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed
    }

    /// Current interpolated value.
    #[must_use]
    pub fn current(&self) -> Offset {
        if self.completed {
            return self.end;
        }
        self.sample(self.timeline.elapsed())
    }

    /// Value of the current run at `elapsed`, without advancing.
    #[must_use]
    pub fn sample(&self, elapsed: Duration) -> Offset {
        if !self.begin.is_finite() || !self.end.is_finite() {
            return self.end;
        }
        if elapsed >= self.timeline.duration() {
            return self.end;
        }
        self.begin.lerp(self.end, self.timeline.progress_at(elapsed))
    }

    /// Advance the run by one frame of `dt`.
    pub fn advance(&mut self, dt: Duration) -> TweenStatus {
        if self.completed {
            return TweenStatus::Idle;
        }

        self.timeline.tick(dt);
        let finished = self.timeline.is_complete()
            || !self.begin.is_finite()
            || !self.end.is_finite();
        let value = if finished {
            self.end
        } else {
            self.sample(self.timeline.elapsed())
        };

        if let Some(on_frame) = self.on_frame.as_mut() {
            on_frame(value);
        }

        if finished {
            self.completed = true;
            if let Some(on_complete) = self.on_complete.as_mut() {
                on_complete();
            }
            TweenStatus::Completed(value)
        } else {
            TweenStatus::Running(value)
        }
    }

    /// Supersede the current run with fresh endpoints.
    ///
    /// Callbacks are kept; the completion callback is re-armed.
    pub fn restart(&mut self, begin: Offset, end: Offset) {
        self.begin = begin;
        self.end = end;
        self.timeline.reset();
        self.completed = false;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Tear the run down without firing the completion callback.
    ///
    /// The tween rests on its current value.
    pub fn stop(&mut self) {
        let here = self.current();
        self.begin = here;
        self.end = here;
        self.completed = true;
        self.generation = self.generation.wrapping_add(1);
    }
}

impl Animation for OffsetTween {
    fn tick(&mut self, dt: Duration) {
        let _ = self.advance(dt);
    }

    fn is_complete(&self) -> bool {
        self.completed
    }

    fn value(&self) -> f32 {
        if self.completed {
            1.0
        } else {
            self.timeline.value()
        }
    }

    fn reset(&mut self) {
        self.timeline.reset();
        self.completed = false;
    }

    fn overshoot(&self) -> Duration {
        self.timeline.overshoot()
    }
}
