//! Flip Layout
//!
//! A list that shows one page at a time and turns pages like a flip clock as
//! the user scrolls. Each page is a `FlipSurface` split on its center line;
//! the `FlipCoordinator` maps the scroll offset to the (at most two) pages in
//! view and the rotation of each.
//!
//! # Example
//!
//! ```rust
//! use flip_core::{DrawContext, Rect, RecordingContext, Size, TextStyle, Point};
//! use flip_layout::prelude::*;
//!
//! struct Card(String);
//!
//! impl FlipContent for Card {
//!     fn draw(&self, ctx: &mut dyn DrawContext, frame: Rect) {
//!         ctx.draw_text(&self.0, Point::new(frame.x(), frame.y()), &TextStyle::new(14.0));
//!     }
//! }
//!
//! let pool = RecyclingPool::new(
//!     || Card(String::new()),
//!     |card: &mut Card, index| card.0 = format!("card {index}"),
//! );
//! let mut list = FlipCoordinator::new(FlipConfig::horizontal(), pool)?;
//! list.on_layout(4, Viewport::new(Size::new(200.0, 120.0)));
//! list.scroll_horizontally_by(150);
//!
//! let frame = list.frame().unwrap();
//! assert_eq!(frame.current_index, 0);
//! assert!(frame.angle_degrees > 90);
//!
//! let mut ctx = RecordingContext::new(Size::new(200.0, 120.0));
//! list.draw(&mut ctx);
//! # Ok::<(), flip_layout::FlipError>(())
//! ```

pub mod axis;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod pool;
pub mod projection;
pub mod scroll;
pub mod surface;

#[cfg(test)]
mod testing;

pub use axis::{Axis, FoldSide};
pub use config::FlipConfig;
pub use coordinator::{AttachedSurface, FlipCoordinator, Viewport};
pub use error::{FlipError, Result};
pub use pool::{PoolStats, RecyclingPool, SurfacePool, MAX_RECYCLED};
pub use projection::{
    flip_matrix, shade_alpha, RenderPlan, RenderSpec, CAMERA_UNIT_PX, DEFAULT_CAMERA_DISTANCE,
    SHADE_ALPHA_MAX,
};
pub use scroll::{FlipFrame, FlipPhase, ScrollState, MAX_FRAME_ANGLE};
pub use surface::{FlipContent, FlipSurface};

/// Common imports for building flip lists
pub mod prelude {
    pub use crate::axis::Axis;
    pub use crate::config::FlipConfig;
    pub use crate::coordinator::{FlipCoordinator, Viewport};
    pub use crate::pool::{RecyclingPool, SurfacePool};
    pub use crate::scroll::{FlipFrame, FlipPhase};
    pub use crate::surface::{FlipContent, FlipSurface};
}
