//! Cancellable frame loop that drives a [`ParticleField`].
//!
//! The browser original wove scheduling, accessibility, and teardown into an
//! implicit self-rescheduling callback; here the loop is an explicit
//! repeating task. A [`FrameScheduler`] stands in for the host's
//! "run once per display refresh" primitive, and a [`LoopHandle`] owns the
//! loop's lifetime: once cancelled, no further frame starts, but a frame in
//! progress always completes.

use crate::ParticleField;
use drift_field_core::Surface;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// System-level accessibility preference, queried once before the loop
/// starts.
///
/// When reduced motion is requested the surface is cleared and no frame
/// executes. The original effect cancelled only after scheduling a first
/// frame; checking up front avoids paying that frame's compute for output
/// that is immediately discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionPreference {
    /// Animate normally.
    Full,
    /// The host asks for reduced motion: draw nothing, schedule nothing.
    Reduced,
}

/// Shared cancellation token for a frame loop.
///
/// Cloning yields another token for the same loop, so an environment
/// callback (page unload, media-query change) can cancel from outside
/// the scheduling context. Cancellation is idempotent: cancelling an
/// already-cancelled or never-started loop is a no-op.
#[derive(Debug, Clone, Default)]
pub struct LoopHandle {
    cancelled: Arc<AtomicBool>,
}

impl LoopHandle {
    /// Creates a handle in the running (not cancelled) state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stops the loop after the frame in flight, if any, completes.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

/// The host's per-display-refresh scheduling primitive.
///
/// `next_frame` blocks (or, in tests, simply decides) until the next
/// refresh slot and returns `false` when the host stops providing slots,
/// ending the loop from the environment side.
pub trait FrameScheduler {
    fn next_frame(&mut self) -> bool;
}

/// Scheduler that grants a fixed number of frames and then stops.
///
/// Used by the CLI and tests; a real-time host would implement
/// [`FrameScheduler`] over vsync instead.
#[derive(Debug)]
pub struct FixedFrames {
    remaining: usize,
}

impl FixedFrames {
    pub fn new(frames: usize) -> Self {
        Self { remaining: frames }
    }
}

impl FrameScheduler for FixedFrames {
    fn next_frame(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }
}

/// Drives `field` against `surface` until the scheduler stops granting
/// frames or `handle` is cancelled. Returns the number of frames that ran.
///
/// Exactly one frame is ever in flight: each step/draw pair completes
/// before the next refresh slot is requested, so a slow frame delays,
/// never overlaps, its successor.
///
/// Degrade-gracefully policies of the decorative original are kept:
/// - `surface` of `None` (the host has no drawable target) is a silent
///   no-op, not an error.
/// - a `Reduced` motion preference clears the surface and runs zero frames.
pub fn animate(
    field: &mut ParticleField,
    surface: Option<&mut dyn Surface>,
    scheduler: &mut dyn FrameScheduler,
    handle: &LoopHandle,
    motion: MotionPreference,
) -> usize {
    let Some(surface) = surface else {
        return 0;
    };
    if motion == MotionPreference::Reduced {
        surface.clear();
        return 0;
    }

    let mut frames = 0;
    while !handle.is_cancelled() && scheduler.next_frame() {
        field.step();
        field.draw(surface);
        frames += 1;
    }
    frames
}
