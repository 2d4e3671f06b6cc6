//! Draw Context - the canvas surface flip rendering calls into
//!
//! The `DrawContext` trait is the capability the renderer needs from a host
//! canvas: a transform stack, a rectangular clip stack, solid fills, and text.
//! Every push is paired with a pop, which is how callers scope their state
//! changes (the equivalent of a canvas save/restore).
//!
//! `RecordingContext` implements the trait by recording `DrawCommand`s for
//! deferred execution by a backend, and is what tests assert against.
//!
//! # Example
//!
//! ```rust
//! use flip_core::{Color, DrawContext, DrawContextExt, RecordingContext, Rect, Size};
//!
//! let mut ctx = RecordingContext::new(Size::new(400.0, 300.0));
//! ctx.with_clip(Rect::new(0.0, 0.0, 200.0, 300.0), |ctx| {
//!     ctx.fill_rect(Rect::new(0.0, 0.0, 400.0, 300.0), Color::BLACK);
//! });
//! assert_eq!(ctx.commands().len(), 3);
//! ```

use crate::geometry::{Affine2D, Color, Mat3, Point, Rect, Size};

// ─────────────────────────────────────────────────────────────────────────────
// Transform Types
// ─────────────────────────────────────────────────────────────────────────────

/// Transform pushed onto a draw context
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transform {
    /// 2D affine transformation
    Affine2D(Affine2D),
    /// Projective transformation (camera rotations)
    Perspective(Mat3),
}

impl Transform {
    /// Create a 2D translation
    pub fn translate(x: f32, y: f32) -> Self {
        Transform::Affine2D(Affine2D::translation(x, y))
    }

    /// Create identity transform
    pub fn identity() -> Self {
        Transform::Affine2D(Affine2D::IDENTITY)
    }

    /// The transform as a 3x3 matrix
    pub fn to_mat3(&self) -> Mat3 {
        match self {
            Transform::Affine2D(t) => Mat3::from(*t),
            Transform::Perspective(m) => *m,
        }
    }

    /// Check if this transform carries perspective terms
    pub fn is_perspective(&self) -> bool {
        match self {
            Transform::Affine2D(_) => false,
            Transform::Perspective(m) => !m.is_affine(),
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Transform::identity()
    }
}

impl From<Affine2D> for Transform {
    fn from(t: Affine2D) -> Self {
        Transform::Affine2D(t)
    }
}

impl From<Mat3> for Transform {
    fn from(m: Mat3) -> Self {
        Transform::Perspective(m)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Text Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Text style for drawing
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in pixels
    pub size: f32,
    /// Text color
    pub color: Color,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 14.0,
            color: Color::BLACK,
        }
    }
}

impl TextStyle {
    pub fn new(size: f32) -> Self {
        Self {
            size,
            ..Default::default()
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Draw Context Trait
// ─────────────────────────────────────────────────────────────────────────────

/// Drawing surface provided by the host
pub trait DrawContext {
    /// Push a transform, concatenated with the current one
    fn push_transform(&mut self, transform: Transform);

    /// Pop the top transform from the stack
    fn pop_transform(&mut self);

    /// Get the current combined transform
    fn current_transform(&self) -> Mat3;

    /// Push a rectangular clip, intersected with the current clip
    ///
    /// `rect` is in the current local space, under the current transform.
    fn push_clip(&mut self, rect: Rect);

    /// Pop the top clip from the stack
    fn pop_clip(&mut self);

    /// Bounds of the current clip in the current local space
    ///
    /// The device clip is mapped back through the inverse of the current
    /// transform, so the result is directly comparable with rects drawn at
    /// this point. Empty when the transform cannot be inverted.
    fn clip_bounds(&self) -> Rect;

    /// Fill a rectangle with a solid color
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draw a run of text with its baseline origin at `origin`
    fn draw_text(&mut self, text: &str, origin: Point, style: &TextStyle);
}

/// Scoped helpers shared by every `DrawContext`
pub trait DrawContextExt: DrawContext {
    /// Run `f` with `rect` clipped, popping the clip afterwards
    fn with_clip<R>(&mut self, rect: Rect, f: impl FnOnce(&mut Self) -> R) -> R {
        self.push_clip(rect);
        let result = f(self);
        self.pop_clip();
        result
    }

    /// Run `f` with `transform` applied, popping it afterwards
    fn with_transform<R>(
        &mut self,
        transform: impl Into<Transform>,
        f: impl FnOnce(&mut Self) -> R,
    ) -> R {
        self.push_transform(transform.into());
        let result = f(self);
        self.pop_transform();
        result
    }
}

// Blanket implementation for all DrawContext implementers
impl<T: DrawContext + ?Sized> DrawContextExt for T {}

// ─────────────────────────────────────────────────────────────────────────────
// Recording Draw Context
// ─────────────────────────────────────────────────────────────────────────────

/// A draw command that can be recorded and replayed
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    PushTransform(Transform),
    PopTransform,
    PushClip(Rect),
    PopClip,
    FillRect {
        rect: Rect,
        color: Color,
    },
    DrawText {
        text: String,
        origin: Point,
        style: TextStyle,
    },
}

/// A draw context that records commands for later execution
#[derive(Debug)]
pub struct RecordingContext {
    commands: Vec<DrawCommand>,
    transform_stack: Vec<Mat3>,
    /// Device-space clips
    clip_stack: Vec<Rect>,
    viewport: Size,
}

impl RecordingContext {
    /// Create a new recording context
    pub fn new(viewport: Size) -> Self {
        Self {
            commands: Vec::new(),
            transform_stack: vec![Mat3::IDENTITY],
            clip_stack: vec![viewport.to_rect()],
            viewport,
        }
    }

    /// Get the recorded commands
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Clear all recorded commands and reset the stacks
    pub fn clear(&mut self) {
        self.commands.clear();
        self.transform_stack = vec![Mat3::IDENTITY];
        self.clip_stack = vec![self.viewport.to_rect()];
    }

    /// Current clip in device space
    pub fn device_clip(&self) -> Rect {
        self.clip_stack
            .last()
            .copied()
            .unwrap_or_else(|| self.viewport.to_rect())
    }

    /// Number of pushes not yet matched by a pop
    pub fn depth(&self) -> usize {
        (self.transform_stack.len() - 1) + (self.clip_stack.len() - 1)
    }
}

impl DrawContext for RecordingContext {
    fn push_transform(&mut self, transform: Transform) {
        let combined = self.current_transform().concat(&transform.to_mat3());
        self.commands.push(DrawCommand::PushTransform(transform));
        self.transform_stack.push(combined);
    }

    fn pop_transform(&mut self) {
        self.commands.push(DrawCommand::PopTransform);
        if self.transform_stack.len() > 1 {
            self.transform_stack.pop();
        } else {
            tracing::warn!("pop_transform called with an empty transform stack");
        }
    }

    fn current_transform(&self) -> Mat3 {
        self.transform_stack
            .last()
            .copied()
            .unwrap_or(Mat3::IDENTITY)
    }

    fn push_clip(&mut self, rect: Rect) {
        let device = self
            .current_transform()
            .map_rect(rect)
            .unwrap_or_default();
        let clipped = self
            .device_clip()
            .intersection(&device)
            .unwrap_or_default();
        self.commands.push(DrawCommand::PushClip(rect));
        self.clip_stack.push(clipped);
    }

    fn pop_clip(&mut self) {
        self.commands.push(DrawCommand::PopClip);
        if self.clip_stack.len() > 1 {
            self.clip_stack.pop();
        } else {
            tracing::warn!("pop_clip called with an empty clip stack");
        }
    }

    fn clip_bounds(&self) -> Rect {
        let device = self.device_clip();
        if device.is_empty() {
            return Rect::ZERO;
        }
        self.current_transform()
            .invert()
            .and_then(|inverse| inverse.map_rect(device))
            .unwrap_or_default()
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn draw_text(&mut self, text: &str, origin: Point, style: &TextStyle) {
        self.commands.push(DrawCommand::DrawText {
            text: text.to_string(),
            origin,
            style: style.clone(),
        });
    }
}
