//! Page projection
//!
//! Pure geometry for a turning page: the camera-style perspective matrix that
//! rotates a page around its center line, the shading ramp that darkens it as
//! it turns, and the `RenderPlan` a surface executes for one frame.
//!
//! The camera sits `camera_distance` pixels in front of the page plane. A
//! point rotated to depth `z` is scaled by `d / (d + z)`: the edge turning
//! away from the viewer shrinks toward the center line and the edge turning
//! toward it grows.
//!
//! Nothing here keeps state between calls: the same inputs always produce the
//! same matrix, alpha and plan.

use flip_core::{Color, Mat3, Rect};

use crate::axis::{Axis, FoldSide};

/// Pixels per camera unit
pub const CAMERA_UNIT_PX: f32 = 72.0;

/// Default camera distance, 40 camera units in front of the page
pub const DEFAULT_CAMERA_DISTANCE: f32 = 40.0 * CAMERA_UNIT_PX;

/// Shade alpha reached at a quarter turn (and again at a half turn)
pub const SHADE_ALPHA_MAX: u8 = 0x99;

/// Everything needed to draw one surface for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSpec {
    /// Rotation in degrees, sign selects the folding half
    pub degree: i32,
    /// Scroll axis of the owning list
    pub axis: Axis,
    /// Content area of the surface (frame minus padding)
    pub bounds: Rect,
    /// Distance from the viewer to the page plane, in pixels
    pub camera_distance: f32,
}

impl RenderSpec {
    /// A spec using the default camera distance
    pub fn new(degree: i32, axis: Axis, bounds: Rect) -> Self {
        Self {
            degree,
            axis,
            bounds,
            camera_distance: DEFAULT_CAMERA_DISTANCE,
        }
    }

    pub fn with_camera_distance(mut self, distance: f32) -> Self {
        self.camera_distance = distance;
        self
    }

    pub fn side(&self) -> FoldSide {
        FoldSide::for_degree(self.degree, self.axis)
    }
}

/// Perspective matrix for a page rotated by `degree` around its center line
///
/// Vertical lists rotate about the X axis by `degree`; horizontal lists about
/// the Y axis by `-degree`, so both fold toward the side they scroll from.
pub fn flip_matrix(degree: i32, axis: Axis, bounds: Rect, camera_distance: f32) -> Mat3 {
    let center = bounds.center();
    let rotation = match axis {
        Axis::Vertical => rotate_x(degree as f32, camera_distance),
        Axis::Horizontal => rotate_y(-(degree as f32), camera_distance),
    };
    rotation
        .pre_translate(-center.x, -center.y)
        .post_translate(center.x, center.y)
}

/// Camera rotation about the X axis: y' = y·cos, z = -y·sin
///
/// Positive degrees tip the lower half toward the viewer.
fn rotate_x(degrees: f32, camera_distance: f32) -> Mat3 {
    let (s, c) = degrees.to_radians().sin_cos();
    Mat3::from_rows([
        [1.0, 0.0, 0.0],
        [0.0, c, 0.0],
        [0.0, -s / camera_distance, 1.0],
    ])
}

/// Camera rotation about the Y axis: x' = x·cos, z = -x·sin
///
/// Positive degrees tip the right half toward the viewer.
fn rotate_y(degrees: f32, camera_distance: f32) -> Mat3 {
    let (s, c) = degrees.to_radians().sin_cos();
    Mat3::from_rows([
        [c, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [-s / camera_distance, 0.0, 1.0],
    ])
}

/// Alpha of the black shade laid over a page at `degree`
///
/// Ramps 0 → `SHADE_ALPHA_MAX` over 0°..90°, then restarts from 0 at 90° and
/// ramps back up to `SHADE_ALPHA_MAX` at 180°.
pub fn shade_alpha(degree: i32) -> u8 {
    let magnitude = degree.unsigned_abs().min(180);
    let ramp = if magnitude < 90 { magnitude } else { magnitude - 90 };
    (SHADE_ALPHA_MAX as f32 * ramp as f32 / 90.0).round() as u8
}

/// What a surface draws for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RenderPlan {
    /// Degenerate geometry, nothing is drawn
    Empty,
    /// Unrotated page, drawn as-is
    Flat,
    /// Page turning through 0°..90°
    Folding {
        /// Half being rotated, drawn through `matrix` and shaded
        fold_clip: Rect,
        /// Half still lying flat
        static_clip: Rect,
        matrix: Mat3,
        shade: Color,
    },
    /// Page past 90°, only its trailing half is visible
    Folded { back_clip: Rect, shade: Color },
}

impl RenderPlan {
    /// Plan a render of `spec` inside the current `clip`
    pub fn new(spec: &RenderSpec, clip: Rect) -> Self {
        if spec.bounds.is_empty() {
            return RenderPlan::Empty;
        }
        if spec.degree == 0 {
            return RenderPlan::Flat;
        }

        let side = spec.side();
        let shade = Color::from_rgba8(0, 0, 0, shade_alpha(spec.degree));

        if spec.degree.unsigned_abs() >= 90 {
            return RenderPlan::Folded {
                back_clip: side.opposite().half_of(clip, spec.bounds),
                shade,
            };
        }

        let matrix = flip_matrix(spec.degree, spec.axis, spec.bounds, spec.camera_distance);
        if !matrix.is_finite() {
            return RenderPlan::Empty;
        }

        RenderPlan::Folding {
            fold_clip: side.half_of(clip, spec.bounds),
            static_clip: side.opposite().half_of(clip, spec.bounds),
            matrix,
            shade,
        }
    }
}
