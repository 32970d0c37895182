//! View transitions for filter changes
//!
//! A transition is two-phase: the state update runs to completion and yields
//! its post-update snapshot first, and only then is the (before, after) pair
//! captured for the cross-fade. When transitions are unavailable the update
//! is applied directly.

use std::time::{Duration, Instant};

/// Whether the runtime can animate view transitions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionSupport {
    Animated { duration: Duration },
    Unsupported,
}

impl TransitionSupport {
    /// Animated unless disabled, zero-length, or running on a dumb terminal
    pub fn detect(enabled: bool, duration_ms: u64) -> Self {
        let term = std::env::var("TERM").ok();
        Self::from_env(enabled, duration_ms, term.as_deref())
    }

    pub fn from_env(enabled: bool, duration_ms: u64, term: Option<&str>) -> Self {
        if !enabled || duration_ms == 0 || term == Some("dumb") {
            return TransitionSupport::Unsupported;
        }
        TransitionSupport::Animated {
            duration: Duration::from_millis(duration_ms),
        }
    }

    /// Apply `update`, then capture the transition around it if supported
    pub fn run<S, F>(&self, before: S, update: F) -> TransitionOutcome<S>
    where
        F: FnOnce() -> S,
    {
        match *self {
            TransitionSupport::Animated { duration } => {
                // Phase 1: mutation and flush
                let after = update();
                // Phase 2: snapshot pair
                TransitionOutcome::Animated(ViewTransition {
                    before,
                    after,
                    duration,
                })
            }
            TransitionSupport::Unsupported => TransitionOutcome::Direct(update()),
        }
    }
}

/// Result of running an update through `TransitionSupport::run`
#[derive(Clone, Debug)]
pub enum TransitionOutcome<S> {
    Direct(S),
    Animated(ViewTransition<S>),
}

/// Before/after snapshots of one transition
#[derive(Clone, Debug)]
pub struct ViewTransition<S> {
    pub before: S,
    pub after: S,
    pub duration: Duration,
}

impl<S> ViewTransition<S> {
    pub fn start(self, now: Instant) -> CrossFade<S> {
        CrossFade {
            transition: self,
            started: now,
        }
    }
}

/// A transition being played back
#[derive(Clone, Debug)]
pub struct CrossFade<S> {
    transition: ViewTransition<S>,
    started: Instant,
}

/// What to draw at a given instant; `amount` is how far faded out (0..=1)
#[derive(Debug, PartialEq)]
pub enum FadeFrame<'a, S> {
    Out { snapshot: &'a S, amount: f32 },
    In { snapshot: &'a S, amount: f32 },
    Done(&'a S),
}

impl<S> CrossFade<S> {
    pub fn progress(&self, now: Instant) -> f32 {
        let duration = self.transition.duration;
        if duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / duration.as_secs_f32()).min(1.0)
    }

    pub fn frame_at(&self, now: Instant) -> FadeFrame<'_, S> {
        let progress = self.progress(now);
        if progress >= 1.0 {
            FadeFrame::Done(&self.transition.after)
        } else if progress < 0.5 {
            FadeFrame::Out {
                snapshot: &self.transition.before,
                amount: progress * 2.0,
            }
        } else {
            FadeFrame::In {
                snapshot: &self.transition.after,
                amount: (1.0 - progress) * 2.0,
            }
        }
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    pub fn after(&self) -> &S {
        &self.transition.after
    }
}
