//! Drag interaction state machine.
//!
//! A drag is either idle or holds exactly one session. The controller is
//! pure: it computes snapped targets and commits but publishes nothing,
//! leaving event emission to the board facade.

use serde::{Deserialize, Serialize};

use battlemat_core::{
    snap_delta, DistanceResult, GridConfig, GridPoint, InteractionError, PixelVec, Result,
};

use crate::geometry::measure;
use crate::token::Token;

/// State of an in-progress drag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragSession {
    /// The token being dragged.
    pub token_id: i64,
    /// Cell the token occupied when the drag started.
    pub start_position: GridPoint,
    /// Footprint recorded at drag start, used for clamping.
    pub footprint_cells: i32,
    /// Most recent pointer displacement in pixels.
    pub delta: PixelVec,
}

/// Result of a finished drag that moved the token.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionCommit {
    /// The moved token.
    pub token_id: i64,
    /// Cell the drag started from.
    pub from: GridPoint,
    /// Clamped destination cell.
    pub to: GridPoint,
}

/// Two-state drag controller: idle, or dragging one token.
#[derive(Debug, Clone, Default)]
pub struct DragController {
    session: Option<DragSession>,
}

impl DragController {
    /// Creates an idle controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a session is active.
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// The active session, if any.
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    fn state_name(&self) -> &'static str {
        if self.session.is_some() {
            "Dragging"
        } else {
            "Idle"
        }
    }

    /// Starts a drag session for a token.
    ///
    /// Fails when a session is already active; the first drag wins and the
    /// second pointer is rejected.
    pub fn start(&mut self, token: &Token) -> Result<()> {
        if self.session.is_some() {
            return Err(InteractionError::InvalidStateTransition {
                current: self.state_name().to_string(),
                requested: "Dragging".to_string(),
            }
            .into());
        }
        self.session = Some(DragSession {
            token_id: token.id,
            start_position: token.position,
            footprint_cells: token.footprint_cells,
            delta: PixelVec::default(),
        });
        Ok(())
    }

    /// Updates the live pointer displacement and returns the distance from
    /// the start cell to the raw snapped target.
    ///
    /// The preview is intentionally unclamped: dragging an edge token
    /// outward still reports the distance travelled. Bounds apply only
    /// when `finish` commits.
    pub fn update(&mut self, delta: PixelVec, config: &GridConfig) -> Result<DistanceResult> {
        let session = self.session.as_mut().ok_or_else(|| {
            InteractionError::InvalidStateTransition {
                current: "Idle".to_string(),
                requested: "Dragging".to_string(),
            }
        })?;
        session.delta = delta;
        let (dx, dy) = snap_delta(delta, config.cell_size_px);
        let target = GridPoint::new(session.start_position.x + dx, session.start_position.y + dy);
        Ok(measure(session.start_position, target, config))
    }

    /// Snapped and clamped landing cell for a displacement.
    fn target(session: &DragSession, delta: PixelVec, config: &GridConfig) -> GridPoint {
        let (dx, dy) = snap_delta(delta, config.cell_size_px);
        let raw = GridPoint::new(session.start_position.x + dx, session.start_position.y + dy);
        config.clamp_for_footprint(raw, session.footprint_cells)
    }

    /// Ends the drag with a final displacement.
    ///
    /// Returns `Some` commit only when the clamped landing cell differs
    /// from the start cell; a drag that snaps back in place commits
    /// nothing. The controller is idle afterwards either way.
    pub fn finish(
        &mut self,
        delta: PixelVec,
        config: &GridConfig,
    ) -> Result<Option<PositionCommit>> {
        let session = self.session.take().ok_or_else(|| {
            InteractionError::InvalidStateTransition {
                current: "Idle".to_string(),
                requested: "Commit".to_string(),
            }
        })?;
        let to = Self::target(&session, delta, config);
        if to == session.start_position {
            return Ok(None);
        }
        Ok(Some(PositionCommit {
            token_id: session.token_id,
            from: session.start_position,
            to,
        }))
    }

    /// Abandons the active session, if any, returning the dragged token id.
    pub fn cancel(&mut self) -> Option<i64> {
        self.session.take().map(|s| s.token_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(id: i64, x: i32, y: i32) -> Token {
        Token {
            id,
            name: format!("token-{}", id),
            position: GridPoint::new(x, y),
            footprint_cells: 1,
            speed_feet: 30.0,
            image: None,
        }
    }

    fn config() -> GridConfig {
        GridConfig::default() // 20x15, 50 px cells
    }

    #[test]
    fn test_double_start_rejected() {
        let mut drag = DragController::new();
        drag.start(&token(1, 2, 2)).unwrap();
        let err = drag.start(&token(2, 3, 3)).unwrap_err();
        assert!(err.is_invalid_state());
        // The first session stands
        assert_eq!(drag.session().unwrap().token_id, 1);
    }

    #[test]
    fn test_finish_snaps_and_commits() {
        let mut drag = DragController::new();
        drag.start(&token(1, 2, 2)).unwrap();
        let commit = drag
            .finish(PixelVec::new(103.0, -52.0), &config())
            .unwrap()
            .unwrap();
        assert_eq!(commit.from, GridPoint::new(2, 2));
        assert_eq!(commit.to, GridPoint::new(4, 1));
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_out_of_bounds_clamped_to_edge() {
        let mut drag = DragController::new();
        drag.start(&token(1, 0, 0)).unwrap();
        // Dragging far up-left clamps to (0,0), same as start: no commit
        let commit = drag.finish(PixelVec::new(-80.0, -80.0), &config()).unwrap();
        assert!(commit.is_none());
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_sub_half_cell_drag_commits_nothing() {
        let mut drag = DragController::new();
        drag.start(&token(1, 5, 5)).unwrap();
        let commit = drag.finish(PixelVec::new(24.0, -24.0), &config()).unwrap();
        assert!(commit.is_none());
    }

    #[test]
    fn test_footprint_clamping_on_commit() {
        let mut drag = DragController::new();
        let mut t = token(1, 10, 10);
        t.footprint_cells = 2;
        drag.start(&t).unwrap();
        // Way past the bottom-right corner; a 2-cell token stops at (18,13)
        let commit = drag
            .finish(PixelVec::new(5000.0, 5000.0), &config())
            .unwrap()
            .unwrap();
        assert_eq!(commit.to, GridPoint::new(18, 13));
    }

    #[test]
    fn test_update_reports_live_distance() {
        let mut drag = DragController::new();
        drag.start(&token(1, 0, 0)).unwrap();
        let d = drag.update(PixelVec::new(150.0, 200.0), &config()).unwrap();
        // 3 cells right, 4 down: 5 squares, 25 ft
        assert_eq!(d.squares, 5.0);
        assert_eq!(d.feet, 25.0);
    }

    #[test]
    fn test_live_distance_unclamped_at_edge() {
        let mut drag = DragController::new();
        drag.start(&token(1, 0, 0)).unwrap();
        // Two cells up-left of the corner: preview reports sqrt(8) squares
        // even though a commit there would clamp back to (0,0)
        let d = drag
            .update(PixelVec::new(-100.0, -100.0), &config())
            .unwrap();
        assert_eq!(d.squares, 2.8);
        assert_eq!(d.feet, 14.1);

        let commit = drag
            .finish(PixelVec::new(-100.0, -100.0), &config())
            .unwrap();
        assert!(commit.is_none());
    }

    #[test]
    fn test_update_while_idle_rejected() {
        let mut drag = DragController::new();
        assert!(drag
            .update(PixelVec::new(1.0, 1.0), &config())
            .unwrap_err()
            .is_invalid_state());
        assert!(drag
            .finish(PixelVec::new(1.0, 1.0), &config())
            .unwrap_err()
            .is_invalid_state());
    }

    #[test]
    fn test_cancel_restores_idle() {
        let mut drag = DragController::new();
        drag.start(&token(7, 1, 1)).unwrap();
        assert_eq!(drag.cancel(), Some(7));
        assert_eq!(drag.cancel(), None);
        assert!(!drag.is_dragging());
    }
}
