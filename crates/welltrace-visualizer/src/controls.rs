//! Interactive orbit controls.
//!
//! Converts pointer and wheel gestures into camera state, coalescing
//! rapid updates into at most one state commit per display-refresh
//! callback. One controller instance can drive any number of
//! synchronized render panels; within the single-threaded event loop
//! it is the only writer of its camera state.

use crate::camera::CameraState;
use tracing::trace;
use welltrace_core::constants::{DISTANCE_MAX, DISTANCE_MIN, DRAG_SENSITIVITY, WHEEL_ZOOM_FACTOR};
use welltrace_core::{Ranges, ViewPreset};

/// A render target the committed camera state is pushed into.
///
/// Targets are passed explicitly to [`OrbitController::apply_to`]; the
/// controller holds no references to renderers.
pub trait CameraTarget {
    fn apply_camera(&mut self, state: CameraState);
}

/// Drag gesture anchor: pointer origin plus the angles at pointer-down.
#[derive(Debug, Clone, Copy)]
struct DragAnchor {
    x0: f64,
    y0: f64,
    alpha0: f64,
    beta0: f64,
}

/// Orbit camera controller with per-frame commit coalescing.
///
/// Interaction state machine: Idle → (pointer-down) → Dragging →
/// (pointer-up/cancel) → Idle. Every state change funnels through a
/// single commit path that stores the latest requested state and keeps
/// one frame-callback token; overlapping commits before the callback
/// fires collapse to the last writer.
#[derive(Debug, Default)]
pub struct OrbitController {
    state: CameraState,
    drag: Option<DragAnchor>,
    pending: Option<CameraState>,
    frame_requested: bool,
}

impl OrbitController {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last applied camera state.
    pub fn state(&self) -> CameraState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Whether a frame callback should be scheduled. At most one is
    /// outstanding at a time.
    pub fn frame_requested(&self) -> bool {
        self.frame_requested
    }

    /// Begin a drag gesture at the given pointer position.
    pub fn pointer_down(&mut self, x: f64, y: f64) {
        self.drag = Some(DragAnchor {
            x0: x,
            y0: y,
            alpha0: self.state.alpha,
            beta0: self.state.beta,
        });
    }

    /// Update the drag gesture. Deltas map to azimuth/elevation at a
    /// fixed sensitivity; elevation is clamped off the poles, azimuth
    /// is unbounded. Ignored when no drag is active.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        let Some(anchor) = self.drag else {
            return;
        };

        let dx = x - anchor.x0;
        let dy = y - anchor.y0;

        let next = CameraState {
            alpha: anchor.alpha0 - dy * DRAG_SENSITIVITY,
            beta: anchor.beta0 + dx * DRAG_SENSITIVITY,
            distance: self.state.distance,
        }
        .clamped();
        self.commit(next);
    }

    /// End the drag gesture.
    pub fn pointer_up(&mut self) {
        self.drag = None;
    }

    /// Cancelled pointers end the gesture the same way as pointer-up.
    pub fn pointer_cancel(&mut self) {
        self.pointer_up();
    }

    /// Scale the camera distance multiplicatively from wheel delta.
    pub fn wheel(&mut self, delta_y: f64) {
        let k = 1.0 + delta_y * WHEEL_ZOOM_FACTOR;
        let distance = (self.state.distance * k).clamp(DISTANCE_MIN, DISTANCE_MAX);
        self.commit(CameraState {
            distance,
            ..self.state
        });
    }

    /// Restore the fixed default view.
    pub fn reset(&mut self) {
        self.commit(CameraState::default());
    }

    /// Frame the given bounds, preserving the current angles.
    pub fn fit_to_bounds(&mut self, ranges: &Ranges) {
        self.commit(self.state.fitted_to(ranges));
    }

    /// Jump to a view preset's angles without altering distance.
    pub fn apply_preset(&mut self, preset: ViewPreset) {
        self.commit(self.state.with_preset(preset));
    }

    /// Request a direct camera state (clamped). External callers use
    /// this to share state across controllers.
    pub fn set_state(&mut self, state: CameraState) {
        self.commit(state.clamped());
    }

    fn commit(&mut self, next: CameraState) {
        trace!(
            "Camera commit: alpha={:.2} beta={:.2} distance={:.1}",
            next.alpha,
            next.beta,
            next.distance
        );
        self.pending = Some(next);
        self.frame_requested = true;
    }

    /// Display-refresh callback. Applies the most recent pending state
    /// (last writer wins, no queue) and returns it, or `None` when
    /// nothing was committed since the previous frame.
    pub fn on_frame(&mut self) -> Option<CameraState> {
        self.frame_requested = false;
        let next = self.pending.take()?;
        self.state = next;
        Some(next)
    }

    /// Push the applied camera state into an explicit list of render
    /// targets, so synchronized panels always share one viewpoint.
    pub fn apply_to(&self, targets: &mut [&mut dyn CameraTarget]) {
        for target in targets.iter_mut() {
            target.apply_camera(self.state);
        }
    }
}
