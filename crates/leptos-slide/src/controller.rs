//! Slide Controller
//!
//! Couples one `DragRecognizer` with the element it moves and the callback it
//! fires on commit.

use std::cell::RefCell;

use crate::config::SlideConfig;
use crate::recognizer::{DragRecognizer, MoveOutcome};
use crate::slot::CallbackSlot;

/// The visual element driven by a recognizer
pub trait SlideSurface {
    /// Horizontal offset in pixels. Called on every tracked move.
    fn set_offset(&self, offset_px: f64);
    /// Called only when a gesture starts or ends.
    fn set_dragging(&self, dragging: bool);
}

pub struct SlideController<S> {
    recognizer: RefCell<DragRecognizer>,
    surface: S,
    on_slide_out: CallbackSlot,
    config: SlideConfig,
}

impl<S: SlideSurface> SlideController<S> {
    pub fn new(config: SlideConfig, surface: S, on_slide_out: CallbackSlot) -> Self {
        Self {
            recognizer: RefCell::new(DragRecognizer::new(config)),
            surface,
            on_slide_out,
            config,
        }
    }

    pub fn config(&self) -> &SlideConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn is_dragging(&self) -> bool {
        self.recognizer.borrow().is_dragging()
    }

    pub fn pointer_down(&self, x: f64) {
        self.recognizer.borrow_mut().pointer_down(x);
        self.surface.set_dragging(true);
    }

    pub fn pointer_move(&self, x: f64) -> MoveOutcome {
        let outcome = self.recognizer.borrow_mut().pointer_move(x);
        match outcome {
            MoveOutcome::Tracking(offset) => self.surface.set_offset(offset),
            MoveOutcome::Committed => {
                log::debug!("[SLIDE] Threshold crossed, committing");
                self.surface.set_offset(0.0);
                self.on_slide_out.call();
                self.finish_release();
            }
            MoveOutcome::Ignored => {}
        }
        outcome
    }

    /// Release transition shared by the real pointer-up and the commit path.
    /// A no-op unless this row is the one being dragged.
    pub fn release(&self) {
        if self.recognizer.borrow_mut().release() {
            self.finish_release();
        }
    }

    fn finish_release(&self) {
        self.surface.set_offset(0.0);
        self.surface.set_dragging(false);
    }
}
