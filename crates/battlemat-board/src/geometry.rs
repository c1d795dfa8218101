//! Distance measurement and area-of-effect template geometry.
//!
//! All projections produce pixel-space figures ready for rendering. Ranges
//! declared in feet are converted to whole cells with ceiling rounding so a
//! template never under-covers the area it represents.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use battlemat_core::constants::{CONE_APERTURE_DEGREES, DEFAULT_SPELL_RANGE_FEET};
use battlemat_core::{
    cell_center, cell_to_pixel_origin, cells_from_feet, convert_distance, DistanceResult,
    GridConfig, GridPoint, PixelPoint, PixelVec,
};

use crate::token::Token;

/// Straight-line distance between two cells, in grid squares.
pub fn euclidean_distance(a: GridPoint, b: GridPoint) -> f64 {
    let dx = (b.x - a.x) as f64;
    let dy = (b.y - a.y) as f64;
    (dx * dx + dy * dy).sqrt()
}

/// Measures the distance between two cells in all supported units.
pub fn measure(a: GridPoint, b: GridPoint, config: &GridConfig) -> DistanceResult {
    convert_distance(euclidean_distance(a, b), config.unit_size, config.unit)
}

/// Area template shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpellShape {
    /// No template shown.
    None,
    /// Circle centered on the origin cell.
    Circle,
    /// Axis-aligned square centered on the origin cell.
    Square,
    /// Cone with its apex at the origin cell, fixed aperture.
    Cone,
    /// Straight line from the origin cell.
    Line,
}

impl Default for SpellShape {
    fn default() -> Self {
        Self::None
    }
}

impl fmt::Display for SpellShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Circle => write!(f, "circle"),
            Self::Square => write!(f, "square"),
            Self::Cone => write!(f, "cone"),
            Self::Line => write!(f, "line"),
        }
    }
}

impl FromStr for SpellShape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Self::None),
            "circle" => Ok(Self::Circle),
            "square" => Ok(Self::Square),
            "cone" => Ok(Self::Cone),
            "line" => Ok(Self::Line),
            _ => Err(format!("Unknown spell shape: {}", s)),
        }
    }
}

/// A spell template: shape, declared range and facing.
///
/// The origin is the most recently placed measurement point; without one
/// the template projects to nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpellTemplate {
    /// Shape of the template.
    pub shape: SpellShape,
    /// Declared range in feet.
    pub range_feet: f64,
    /// Facing in degrees, kept in `[0, 360)`. Only cones and lines use it.
    pub rotation_degrees: f64,
    /// Cell the template is anchored to.
    pub origin: Option<GridPoint>,
}

impl Default for SpellTemplate {
    fn default() -> Self {
        Self {
            shape: SpellShape::None,
            range_feet: DEFAULT_SPELL_RANGE_FEET,
            rotation_degrees: 0.0,
            origin: None,
        }
    }
}

impl SpellTemplate {
    /// Rotates the facing by `step_degrees`, wrapping into `[0, 360)`.
    pub fn rotate(&mut self, step_degrees: f64) {
        self.rotation_degrees = (self.rotation_degrees + step_degrees).rem_euclid(360.0);
    }

    /// Clears the anchor and resets shape and facing.
    pub fn reset(&mut self) {
        self.shape = SpellShape::None;
        self.rotation_degrees = 0.0;
        self.origin = None;
    }

    /// Template radius in pixels for the given grid scale.
    pub fn radius_px(&self, config: &GridConfig) -> f64 {
        cells_from_feet(self.range_feet, config.unit_size, config.unit) as f64
            * config.cell_size_px
    }
}

/// A projected template in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ShapeGeometry {
    /// Filled circle.
    Circle {
        /// Center pixel.
        center: PixelPoint,
        /// Radius in pixels.
        radius_px: f64,
    },
    /// Axis-aligned square.
    Square {
        /// Top-left pixel.
        top_left: PixelPoint,
        /// Side length in pixels.
        side_px: f64,
    },
    /// Circular sector between the two rim points.
    Cone {
        /// Apex pixel.
        apex: PixelPoint,
        /// Rim point on the counter-clockwise edge.
        rim_a: PixelPoint,
        /// Rim point on the clockwise edge.
        rim_b: PixelPoint,
        /// Arc radius in pixels.
        radius_px: f64,
    },
    /// Line segment.
    Line {
        /// Start pixel.
        start: PixelPoint,
        /// End pixel.
        end: PixelPoint,
    },
}

/// Projects a spell template into pixel space.
///
/// Returns `None` when the shape is [`SpellShape::None`] or no origin is
/// anchored. The origin cell's center is the template's anchor point.
pub fn project(
    template: &SpellTemplate,
    config: &GridConfig,
    offset: PixelVec,
) -> Option<ShapeGeometry> {
    let origin = template.origin?;
    if template.shape == SpellShape::None {
        return None;
    }
    let center = cell_center(origin, offset, config.cell_size_px);
    let radius = template.radius_px(config);

    Some(match template.shape {
        SpellShape::None => unreachable!(),
        SpellShape::Circle => ShapeGeometry::Circle {
            center,
            radius_px: radius,
        },
        SpellShape::Square => ShapeGeometry::Square {
            top_left: PixelPoint::new(center.x - radius, center.y - radius),
            side_px: radius * 2.0,
        },
        SpellShape::Cone => {
            let half = CONE_APERTURE_DEGREES / 2.0;
            let a = (template.rotation_degrees - half).to_radians();
            let b = (template.rotation_degrees + half).to_radians();
            ShapeGeometry::Cone {
                apex: center,
                rim_a: PixelPoint::new(center.x + radius * a.cos(), center.y + radius * a.sin()),
                rim_b: PixelPoint::new(center.x + radius * b.cos(), center.y + radius * b.sin()),
                radius_px: radius,
            }
        }
        SpellShape::Line => {
            let theta = template.rotation_degrees.to_radians();
            ShapeGeometry::Line {
                start: center,
                end: PixelPoint::new(
                    center.x + radius * theta.cos(),
                    center.y + radius * theta.sin(),
                ),
            }
        }
    })
}

/// Movement-range circle for a token, centered on its footprint.
///
/// Returns `None` when the token has no movement speed.
pub fn movement_range(
    token: &Token,
    config: &GridConfig,
    offset: PixelVec,
) -> Option<ShapeGeometry> {
    if token.speed_feet <= 0.0 {
        return None;
    }
    let origin = cell_to_pixel_origin(token.position, offset, config.cell_size_px);
    let half_span = token.footprint_cells as f64 * config.cell_size_px / 2.0;
    let radius = cells_from_feet(token.speed_feet, config.unit_size, config.unit) as f64
        * config.cell_size_px;
    Some(ShapeGeometry::Circle {
        center: PixelPoint::new(origin.x + half_span, origin.y + half_span),
        radius_px: radius,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GridConfig {
        GridConfig::default() // 20x15, 50 px, 5 ft per cell
    }

    #[test]
    fn test_euclidean_distance() {
        assert_eq!(
            euclidean_distance(GridPoint::new(0, 0), GridPoint::new(3, 4)),
            5.0
        );
        // Symmetric
        assert_eq!(
            euclidean_distance(GridPoint::new(3, 4), GridPoint::new(0, 0)),
            5.0
        );
    }

    #[test]
    fn test_measure_converts_units() {
        let d = measure(GridPoint::new(0, 0), GridPoint::new(4, 0), &config());
        assert_eq!(d.squares, 4.0);
        assert_eq!(d.feet, 20.0);
        assert_eq!(d.meters, 6.1);
    }

    #[test]
    fn test_project_requires_shape_and_origin() {
        let cfg = config();
        let offset = PixelVec::default();

        let mut template = SpellTemplate::default();
        assert!(project(&template, &cfg, offset).is_none());

        template.shape = SpellShape::Circle;
        assert!(project(&template, &cfg, offset).is_none());

        template.origin = Some(GridPoint::new(2, 2));
        assert!(project(&template, &cfg, offset).is_some());
    }

    #[test]
    fn test_circle_projection() {
        let cfg = config();
        let template = SpellTemplate {
            shape: SpellShape::Circle,
            range_feet: 30.0,
            rotation_degrees: 0.0,
            origin: Some(GridPoint::new(2, 2)),
        };
        match project(&template, &cfg, PixelVec::default()).unwrap() {
            ShapeGeometry::Circle { center, radius_px } => {
                assert_eq!(center, PixelPoint::new(125.0, 125.0));
                // 30 ft on a 5 ft grid: 6 cells of 50 px
                assert_eq!(radius_px, 300.0);
            }
            other => panic!("expected circle, got {:?}", other),
        }
    }

    #[test]
    fn test_cone_rims_straddle_facing() {
        let cfg = config();
        let template = SpellTemplate {
            shape: SpellShape::Cone,
            range_feet: 30.0,
            rotation_degrees: 0.0,
            origin: Some(GridPoint::new(0, 0)),
        };
        match project(&template, &cfg, PixelVec::default()).unwrap() {
            ShapeGeometry::Cone {
                apex,
                rim_a,
                rim_b,
                radius_px,
            } => {
                assert_eq!(apex, PixelPoint::new(25.0, 25.0));
                assert_eq!(radius_px, 300.0);
                // Rims sit at -30 and +30 degrees from the +x facing
                let expected = 300.0 * 30f64.to_radians().cos();
                assert!((rim_a.x - (25.0 + expected)).abs() < 1e-9);
                assert!((rim_b.x - (25.0 + expected)).abs() < 1e-9);
                assert!((rim_a.y - (25.0 - 150.0)).abs() < 1e-9);
                assert!((rim_b.y - (25.0 + 150.0)).abs() < 1e-9);
            }
            other => panic!("expected cone, got {:?}", other),
        }
    }

    #[test]
    fn test_line_projection_follows_rotation() {
        let cfg = config();
        let template = SpellTemplate {
            shape: SpellShape::Line,
            range_feet: 10.0,
            rotation_degrees: 90.0,
            origin: Some(GridPoint::new(0, 0)),
        };
        match project(&template, &cfg, PixelVec::default()).unwrap() {
            ShapeGeometry::Line { start, end } => {
                assert_eq!(start, PixelPoint::new(25.0, 25.0));
                // 10 ft is 2 cells; facing 90 degrees points down the +y axis
                assert!((end.x - 25.0).abs() < 1e-9);
                assert!((end.y - 125.0).abs() < 1e-9);
            }
            other => panic!("expected line, got {:?}", other),
        }
    }

    #[test]
    fn test_rotation_wraps() {
        let mut template = SpellTemplate::default();
        template.rotate(-15.0);
        assert_eq!(template.rotation_degrees, 345.0);
        template.rotate(15.0);
        assert_eq!(template.rotation_degrees, 0.0);
        for _ in 0..25 {
            template.rotate(15.0);
        }
        assert_eq!(template.rotation_degrees, 15.0);
    }

    #[test]
    fn test_movement_range() {
        let cfg = config();
        let token = Token {
            id: 1,
            name: "scout".to_string(),
            position: GridPoint::new(2, 2),
            footprint_cells: 2,
            speed_feet: 30.0,
            image: None,
        };
        match movement_range(&token, &cfg, PixelVec::default()).unwrap() {
            ShapeGeometry::Circle { center, radius_px } => {
                // A 2-cell token at (2,2) is centered at (150, 150)
                assert_eq!(center, PixelPoint::new(150.0, 150.0));
                assert_eq!(radius_px, 300.0);
            }
            other => panic!("expected circle, got {:?}", other),
        }

        let stationary = Token {
            speed_feet: 0.0,
            ..token
        };
        assert!(movement_range(&stationary, &cfg, PixelVec::default()).is_none());
    }
}
