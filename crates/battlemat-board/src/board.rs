//! Board facade.
//!
//! Owns the grid configuration, the token collection and the interaction
//! controllers, routes input to them and publishes events on the global
//! bus. Rendering layers subscribe to the bus instead of polling.

use battlemat_core::constants::ROTATION_STEP_DEGREES;
use battlemat_core::{
    emit, AppEvent, DistanceResult, DragEvent, GridConfig, GridPoint, InteractionError,
    MeasurementEvent, PixelPoint, PixelVec, Result, TokenEvent, ViewportEvent,
};
use battlemat_store::EntityRecord;

use crate::drag::{DragController, PositionCommit};
use crate::geometry::{self, ShapeGeometry, SpellShape};
use crate::measure::MeasurementController;
use crate::token::{Token, TokenStore};
use crate::viewport::{Viewport, ZoomDirection};

/// Wheel scroll direction as delivered by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelDirection {
    /// Scroll up, away from the user.
    Up,
    /// Scroll down, toward the user.
    Down,
}

/// What a wheel tick did, for the caller's benefit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WheelAction {
    /// Input is blocked; nothing happened.
    Ignored,
    /// The cell size changed to this many pixels.
    Zoomed(f64),
    /// The spell template rotated to this facing in degrees.
    Rotated(f64),
}

/// What a click on a token did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Measurement mode placed a point at the token's cell.
    PointPlaced(GridPoint),
    /// Normal mode selected the token.
    Selected(i64),
}

/// The board: one session's grid, tokens and interaction state.
#[derive(Debug)]
pub struct Board {
    config: GridConfig,
    viewport: Viewport,
    tokens: TokenStore,
    drag: DragController,
    measurement: MeasurementController,
    input_blocked: bool,
}

impl Board {
    /// Creates a board from a validated configuration.
    pub fn new(config: GridConfig) -> Result<Self> {
        config.validate()?;
        let viewport = Viewport::new(config.cell_size_px);
        Ok(Self {
            config,
            viewport,
            tokens: TokenStore::new(),
            drag: DragController::new(),
            measurement: MeasurementController::new(),
            input_blocked: false,
        })
    }

    /// Current grid configuration. `cell_size_px` tracks the zoom level.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// The viewport.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// The token collection.
    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    /// The measurement controller.
    pub fn measurement(&self) -> &MeasurementController {
        &self.measurement
    }

    /// True while a token drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Blocks or unblocks wheel input, e.g. while a dialog is open.
    pub fn set_input_blocked(&mut self, blocked: bool) {
        self.input_blocked = blocked;
    }

    /// Replaces the board's tokens with entities from the store.
    pub fn load_records(&mut self, records: &[EntityRecord]) {
        self.tokens.load_records(records);
        tracing::info!(count = self.tokens.len(), "tokens loaded");
        let _ = emit!(AppEvent::Token(TokenEvent::Loaded {
            count: self.tokens.len(),
        }));
    }

    fn token(&self, token_id: i64) -> Result<&Token> {
        self.tokens
            .get(token_id)
            .ok_or_else(|| InteractionError::TokenNotFound { id: token_id }.into())
    }

    // --- drag ---

    /// Starts dragging a token.
    pub fn begin_drag(&mut self, token_id: i64) -> Result<()> {
        let token = self.token(token_id)?.clone();
        self.drag.start(&token)?;
        tracing::debug!(token_id, from = %token.position, "drag started");
        let _ = emit!(AppEvent::Drag(DragEvent::Started {
            token_id,
            from: token.position,
        }));
        Ok(())
    }

    /// Feeds a live pointer displacement to the active drag and returns
    /// the distance from the start cell to the raw snapped target,
    /// unclamped. Clamping happens only when the drag ends.
    pub fn drag_moved(&mut self, delta: PixelVec) -> Result<DistanceResult> {
        self.drag.update(delta, &self.config)
    }

    /// Ends the active drag. When the token landed on a new cell the move
    /// is applied locally and a commit is returned for persistence; the
    /// caller hands it to a syncer. A drag that went nowhere returns
    /// `None` and only signals the end of the session.
    pub fn end_drag(&mut self, delta: PixelVec) -> Result<Option<PositionCommit>> {
        let token_id = self
            .drag
            .session()
            .map(|s| s.token_id)
            .ok_or_else(|| InteractionError::InvalidStateTransition {
                current: "Idle".to_string(),
                requested: "Commit".to_string(),
            })?;
        match self.drag.finish(delta, &self.config)? {
            Some(commit) => {
                if let Some(token) = self.tokens.get_mut(commit.token_id) {
                    token.position = commit.to;
                }
                tracing::info!(
                    token_id = commit.token_id,
                    from = %commit.from,
                    to = %commit.to,
                    "token moved"
                );
                let _ = emit!(AppEvent::Token(TokenEvent::PositionCommitted {
                    token_id: commit.token_id,
                    from: commit.from,
                    to: commit.to,
                }));
                Ok(Some(commit))
            }
            None => {
                let _ = emit!(AppEvent::Drag(DragEvent::Ended { token_id }));
                Ok(None)
            }
        }
    }

    /// Abandons the active drag, if any.
    pub fn cancel_drag(&mut self) -> Option<i64> {
        let token_id = self.drag.cancel()?;
        tracing::debug!(token_id, "drag cancelled");
        let _ = emit!(AppEvent::Drag(DragEvent::Cancelled { token_id }));
        Some(token_id)
    }

    // --- measurement ---

    /// Toggles measurement mode.
    pub fn set_measurement_mode(&mut self, active: bool) {
        if self.measurement.set_active(active) {
            let _ = emit!(AppEvent::Measurement(MeasurementEvent::ModeChanged {
                active,
            }));
        }
    }

    /// Clears measurement points and the spell template, keeping the mode.
    pub fn clear_measurement(&mut self) {
        self.measurement.clear();
        let _ = emit!(AppEvent::Measurement(MeasurementEvent::Cleared));
    }

    /// Handles a click on an empty grid cell.
    ///
    /// Outside measurement mode clicks do nothing. In measurement mode a
    /// point is placed unless the click falls off the grid.
    pub fn grid_click(&mut self, pixel: PixelPoint) -> Option<GridPoint> {
        let cell = self
            .measurement
            .place_pixel(pixel, self.viewport.offset(), &self.config)?;
        self.emit_point_placed(cell);
        Some(cell)
    }

    /// Handles a click on a token: a measurement point in measurement
    /// mode, a selection otherwise.
    pub fn token_click(&mut self, token_id: i64) -> Result<ClickOutcome> {
        let position = self.token(token_id)?.position;
        if let Some(cell) = self.measurement.place_cell(position) {
            self.emit_point_placed(cell);
            return Ok(ClickOutcome::PointPlaced(cell));
        }
        Ok(ClickOutcome::Selected(token_id))
    }

    fn emit_point_placed(&self, cell: GridPoint) {
        let _ = emit!(AppEvent::Measurement(MeasurementEvent::PointPlaced {
            point: cell,
            count: self.measurement.points().len(),
        }));
        if let Some(distance) = self.measurement.distance(&self.config) {
            let _ = emit!(AppEvent::Measurement(MeasurementEvent::DistanceAvailable {
                distance,
            }));
        }
    }

    /// Distance between the two measurement points, when both are placed.
    pub fn distance(&self) -> Option<DistanceResult> {
        self.measurement.distance(&self.config)
    }

    /// Sets the spell template shape.
    pub fn set_spell_shape(&mut self, shape: SpellShape) {
        self.measurement.set_shape(shape);
    }

    /// Sets the spell template range in feet.
    pub fn set_spell_range(&mut self, range_feet: f64) {
        self.measurement.set_range_feet(range_feet);
    }

    /// The projected spell template, when one is anchored.
    pub fn spell_geometry(&self) -> Option<ShapeGeometry> {
        geometry::project(
            self.measurement.template(),
            &self.config,
            self.viewport.offset(),
        )
    }

    /// Movement-range circle for a token, when it has a speed.
    pub fn movement_range_for(&self, token_id: i64) -> Result<Option<ShapeGeometry>> {
        let token = self.token(token_id)?;
        Ok(geometry::movement_range(
            token,
            &self.config,
            self.viewport.offset(),
        ))
    }

    // --- viewport ---

    /// Starts a pan gesture.
    pub fn begin_pan(&mut self, pointer: PixelPoint) {
        self.viewport.begin_pan(pointer);
    }

    /// Continues a pan gesture. Returns true when the offset moved.
    pub fn pan_to(&mut self, pointer: PixelPoint) -> bool {
        if self.viewport.pan_to(pointer) {
            self.emit_panned();
            true
        } else {
            false
        }
    }

    /// Ends the pan gesture.
    pub fn end_pan(&mut self) {
        self.viewport.end_pan();
    }

    /// Pans by a displacement outside any gesture.
    pub fn pan_by(&mut self, delta: PixelVec) {
        self.viewport.pan_by(delta);
        self.emit_panned();
    }

    fn emit_panned(&self) {
        let offset = self.viewport.offset();
        let _ = emit!(AppEvent::Viewport(ViewportEvent::Panned {
            offset_x: offset.x,
            offset_y: offset.y,
        }));
    }

    /// Dispatches a wheel tick.
    ///
    /// In measurement mode the wheel rotates the spell template; otherwise
    /// it zooms. Both are suppressed while input is blocked.
    pub fn wheel(&mut self, direction: WheelDirection) -> WheelAction {
        if self.input_blocked {
            return WheelAction::Ignored;
        }
        if self.measurement.is_active() {
            let step = match direction {
                WheelDirection::Down => ROTATION_STEP_DEGREES,
                WheelDirection::Up => -ROTATION_STEP_DEGREES,
            };
            WheelAction::Rotated(self.measurement.rotate_template(step))
        } else {
            let zoom = match direction {
                WheelDirection::Up => ZoomDirection::In,
                WheelDirection::Down => ZoomDirection::Out,
            };
            let cell_size_px = self.viewport.zoom(zoom);
            self.config.cell_size_px = cell_size_px;
            let _ = emit!(AppEvent::Viewport(ViewportEvent::Zoomed { cell_size_px }));
            WheelAction::Zoomed(cell_size_px)
        }
    }
}
