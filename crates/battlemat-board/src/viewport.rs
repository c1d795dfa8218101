//! Viewport pan and zoom.
//!
//! The viewport owns the pan offset and the rendered cell size. Panning is
//! unconstrained; the grid may be pushed fully off screen and dragged back.
//! Zoom steps the cell size in fixed increments within a clamped range.

use serde::{Deserialize, Serialize};

use battlemat_core::constants::{
    DEFAULT_CELL_SIZE_PX, MAX_CELL_SIZE_PX, MIN_CELL_SIZE_PX, ZOOM_STEP_PX,
};
use battlemat_core::{PixelPoint, PixelVec};

/// Direction of a zoom step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoomDirection {
    /// Grow the cells.
    In,
    /// Shrink the cells.
    Out,
}

/// Pan offset and zoom level of the board view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    offset: PixelVec,
    cell_size_px: f64,
    #[serde(skip)]
    pan_anchor: Option<PixelVec>,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(DEFAULT_CELL_SIZE_PX)
    }
}

impl Viewport {
    /// Creates a viewport at the origin with the given cell size.
    pub fn new(cell_size_px: f64) -> Self {
        Self {
            offset: PixelVec::default(),
            cell_size_px: cell_size_px.clamp(MIN_CELL_SIZE_PX, MAX_CELL_SIZE_PX),
            pan_anchor: None,
        }
    }

    /// Current pan offset in pixels.
    pub fn offset(&self) -> PixelVec {
        self.offset
    }

    /// Current cell size in pixels.
    pub fn cell_size_px(&self) -> f64 {
        self.cell_size_px
    }

    /// Moves the offset by a displacement.
    pub fn pan_by(&mut self, delta: PixelVec) {
        self.offset.x += delta.x;
        self.offset.y += delta.y;
    }

    /// Starts a pan gesture at a pointer position. The anchor is the
    /// pointer-to-offset gap, held constant while the gesture lasts.
    pub fn begin_pan(&mut self, pointer: PixelPoint) {
        self.pan_anchor = Some(PixelVec::new(
            pointer.x - self.offset.x,
            pointer.y - self.offset.y,
        ));
    }

    /// True while a pan gesture is active.
    pub fn panning(&self) -> bool {
        self.pan_anchor.is_some()
    }

    /// Moves the offset so the anchored point follows the pointer.
    /// No-op when no gesture is active.
    pub fn pan_to(&mut self, pointer: PixelPoint) -> bool {
        match self.pan_anchor {
            Some(anchor) => {
                self.offset = PixelVec::new(pointer.x - anchor.x, pointer.y - anchor.y);
                true
            }
            None => false,
        }
    }

    /// Ends the pan gesture.
    pub fn end_pan(&mut self) {
        self.pan_anchor = None;
    }

    /// Steps the cell size by one zoom increment, clamped to the allowed
    /// range. Returns the new cell size. The pan offset is untouched.
    pub fn zoom(&mut self, direction: ZoomDirection) -> f64 {
        let step = match direction {
            ZoomDirection::In => ZOOM_STEP_PX,
            ZoomDirection::Out => -ZOOM_STEP_PX,
        };
        self.cell_size_px = (self.cell_size_px + step).clamp(MIN_CELL_SIZE_PX, MAX_CELL_SIZE_PX);
        self.cell_size_px
    }
}
