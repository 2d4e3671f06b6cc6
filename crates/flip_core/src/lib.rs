//! Flip Core
//!
//! Foundational primitives shared by the flip layout crates:
//!
//! - **Geometry**: points, sizes, rectangles, padding insets, colors
//! - **Matrices**: affine transforms and perspective-capable 3x3 matrices
//! - **Draw Context**: the canvas capability renderers draw through, plus a
//!   recording implementation for deferred execution and tests
//!
//! # Example
//!
//! ```rust
//! use flip_core::{Mat3, Point};
//!
//! let m = Mat3::translation(10.0, 0.0).pre_translate(-10.0, 0.0);
//! assert_eq!(m.map_point(Point::new(3.0, 4.0)), Some(Point::new(3.0, 4.0)));
//! ```

pub mod draw;
pub mod geometry;

pub use draw::{DrawCommand, DrawContext, DrawContextExt, RecordingContext, TextStyle, Transform};
pub use geometry::{Affine2D, Color, Insets, Mat3, Point, Rect, Size};
