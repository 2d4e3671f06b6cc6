//! Flip surface - one page of a flip list
//!
//! A `FlipSurface` wraps host content and draws it as a page turning around
//! its center line. The rotation comes in per frame as a `RenderSpec`; the
//! surface itself only remembers the frame it was laid out into.
//!
//! Rendering follows the `RenderPlan` built from the frame's `RenderSpec`:
//!
//! - **Flat**: content drawn untouched
//! - **Folding**: the turning half drawn through the perspective matrix and
//!   shaded, then the other half drawn flat
//! - **Folded**: only the trailing half drawn flat, shaded on the 90°..180° ramp
//!
//! The halves are split from the context's local-space clip bounds, so a
//! host may position the surface with its own transform. Every clip and
//! transform is pushed and popped within `render`.

use flip_core::{DrawContext, DrawContextExt, Insets, Rect, Size};

use crate::projection::{RenderPlan, RenderSpec};

/// Content hosted by a flip surface
pub trait FlipContent {
    /// Draw the content into `frame`
    fn draw(&self, ctx: &mut dyn DrawContext, frame: Rect);

    /// Called when the surface is laid out with the space it was given
    fn measure(&mut self, _available: Size) {}

    /// Padding between the frame and the content area
    fn padding(&self) -> Insets {
        Insets::ZERO
    }
}

/// A page that can be drawn at any rotation
#[derive(Debug, Clone, PartialEq)]
pub struct FlipSurface<C> {
    content: C,
    frame: Rect,
}

impl<C: FlipContent> FlipSurface<C> {
    pub fn new(content: C) -> Self {
        Self {
            content,
            frame: Rect::ZERO,
        }
    }

    pub fn content(&self) -> &C {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut C {
        &mut self.content
    }

    /// Frame the surface was last laid out into
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Measure the content against `frame` and position the surface there
    pub fn layout(&mut self, frame: Rect) {
        self.content.measure(frame.size());
        self.frame = frame;
    }

    /// Content area: the frame minus the content's padding
    pub fn content_bounds(&self) -> Rect {
        self.frame.inset_by(self.content.padding())
    }

    /// Draw the page for one frame
    pub fn render(&self, ctx: &mut dyn DrawContext, spec: &RenderSpec) {
        let plan = RenderPlan::new(spec, ctx.clip_bounds());
        tracing::trace!(degree = spec.degree, axis = ?spec.axis, ?plan, "render flip surface");

        match plan {
            RenderPlan::Empty => {}
            RenderPlan::Flat => self.content.draw(ctx, self.frame),
            RenderPlan::Folding {
                fold_clip,
                static_clip,
                matrix,
                shade,
            } => {
                ctx.with_clip(fold_clip, |ctx| {
                    ctx.with_transform(matrix, |ctx| {
                        self.content.draw(ctx, self.frame);
                        ctx.fill_rect(spec.bounds, shade);
                    })
                });
                ctx.with_clip(static_clip, |ctx| self.content.draw(ctx, self.frame));
            }
            RenderPlan::Folded { back_clip, shade } => {
                ctx.with_clip(back_clip, |ctx| {
                    self.content.draw(ctx, self.frame);
                    ctx.fill_rect(spec.bounds, shade);
                });
            }
        }
    }
}
