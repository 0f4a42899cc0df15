//! Horizontal drag recognizer.
//!
//! Pure state machine: no DOM access, driven by pointer x coordinates.

use crate::config::SlideConfig;

/// What a pointer move did to the recognizer
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MoveOutcome {
    /// Not dragging, or leftward motion
    Ignored,
    /// Row should follow the pointer at this offset
    Tracking(f64),
    /// Threshold crossed; the gesture has been released
    Committed,
}

impl MoveOutcome {
    pub fn is_commit(&self) -> bool {
        matches!(self, MoveOutcome::Committed)
    }
}

/// Per-row drag state
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragState {
    pub is_dragging: bool,
    pub origin_x: Option<f64>,
    pub offset_x: f64,
    /// Set by the commit of the current gesture, cleared on pointer-down
    pub passed_threshold: bool,
}

#[derive(Clone, Debug)]
pub struct DragRecognizer {
    config: SlideConfig,
    state: DragState,
}

impl DragRecognizer {
    pub fn new(config: SlideConfig) -> Self {
        Self {
            config,
            state: DragState::default(),
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging
    }

    pub fn offset(&self) -> f64 {
        self.state.offset_x
    }

    pub fn pointer_down(&mut self, x: f64) {
        self.state = DragState {
            is_dragging: true,
            origin_x: Some(x),
            offset_x: 0.0,
            passed_threshold: false,
        };
    }

    pub fn pointer_move(&mut self, x: f64) -> MoveOutcome {
        let origin = match (self.state.is_dragging, self.state.origin_x) {
            (true, Some(origin)) => origin,
            _ => return MoveOutcome::Ignored,
        };

        let raw_dx = x - origin;
        if raw_dx <= 0.0 {
            return MoveOutcome::Ignored;
        }

        let offset = raw_dx * self.config.damping;
        if offset < self.config.threshold {
            self.state.passed_threshold = false;
            self.state.offset_x = offset;
            return MoveOutcome::Tracking(offset);
        }

        // Releasing here is what makes the commit one-shot: later moves of the
        // same gesture hit the `is_dragging` check above.
        self.state.passed_threshold = true;
        self.release();
        MoveOutcome::Committed
    }

    /// Ends the gesture. Returns false when there was nothing to release.
    pub fn release(&mut self) -> bool {
        if !self.state.is_dragging {
            return false;
        }
        self.state.is_dragging = false;
        self.state.origin_x = None;
        self.state.offset_x = 0.0;
        true
    }
}

impl Default for DragRecognizer {
    fn default() -> Self {
        Self::new(SlideConfig::default())
    }
}
