//! Shared test content

use flip_core::{Color, DrawCommand, DrawContext, Insets, Point, Rect, Size, TextStyle};

use crate::surface::FlipContent;

/// A labelled page: background fill plus one line of text
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub label: String,
    pub background: Color,
    pub padding: Insets,
    pub measured: Option<Size>,
}

impl Default for Page {
    fn default() -> Self {
        Self::new("")
    }
}

impl Page {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            background: Color::WHITE,
            padding: Insets::ZERO,
            measured: None,
        }
    }

    pub fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    fn text_origin(frame: Rect) -> Point {
        Point::new(frame.x() + 8.0, frame.y() + 24.0)
    }

    /// Commands `draw` records for `frame`
    pub fn expected_commands(&self, frame: Rect) -> Vec<DrawCommand> {
        vec![
            DrawCommand::FillRect {
                rect: frame,
                color: self.background,
            },
            DrawCommand::DrawText {
                text: self.label.clone(),
                origin: Self::text_origin(frame),
                style: TextStyle::new(16.0),
            },
        ]
    }
}

impl FlipContent for Page {
    fn draw(&self, ctx: &mut dyn DrawContext, frame: Rect) {
        ctx.fill_rect(frame, self.background);
        ctx.draw_text(&self.label, Self::text_origin(frame), &TextStyle::new(16.0));
    }

    fn measure(&mut self, available: Size) {
        self.measured = Some(available);
    }

    fn padding(&self) -> Insets {
        self.padding
    }
}

/// Labels of every page drawn, in draw order
pub fn drawn_labels(commands: &[DrawCommand]) -> Vec<String> {
    commands
        .iter()
        .filter_map(|cmd| match cmd {
            DrawCommand::DrawText { text, .. } => Some(text.clone()),
            _ => None,
        })
        .collect()
}
