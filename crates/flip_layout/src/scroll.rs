//! Scroll state for a flip list
//!
//! The list keeps one integer offset along its scroll axis. Every `item_extent`
//! pixels of offset is one full page turn, so an offset splits into the page
//! currently on top and how far (0°..180°) it has turned toward the next one.
//!
//! # Example
//!
//! ```rust
//! use flip_layout::scroll::ScrollState;
//!
//! let mut scroll = ScrollState::default();
//! scroll.on_layout(3, 100);
//! assert_eq!(scroll.scroll_by(50), 50);
//!
//! let frame = scroll.frame().unwrap();
//! assert_eq!(frame.current_index, 0);
//! assert_eq!(frame.next_index, Some(1));
//! assert_eq!(frame.angle_degrees, 90);
//! ```

/// Largest angle a frame reports; a full 180° turn is the next page at rest
pub const MAX_FRAME_ANGLE: i32 = 179;

/// Scroll position of a flip list
///
/// `0 <= offset <= max_offset` holds after every mutation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollState {
    offset: i32,
    max_offset: i32,
    item_extent: i32,
    item_count: usize,
}

impl ScrollState {
    pub fn offset(&self) -> i32 {
        self.offset
    }

    pub fn max_offset(&self) -> i32 {
        self.max_offset
    }

    pub fn item_extent(&self) -> i32 {
        self.item_extent
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Recompute the scroll range for a new item count or extent
    ///
    /// An offset beyond the new range is clamped down to `max_offset`.
    pub fn on_layout(&mut self, item_count: usize, item_extent: i32) {
        let item_extent = item_extent.max(0);
        let last_index = i32::try_from(item_count.saturating_sub(1)).unwrap_or(i32::MAX);

        self.item_count = item_count;
        self.item_extent = item_extent;
        self.max_offset = if item_count > 0 {
            last_index.saturating_mul(item_extent)
        } else {
            0
        };
        if self.offset > self.max_offset {
            self.offset = self.max_offset;
        }
    }

    /// Apply a scroll delta, returning the amount actually consumed
    ///
    /// A delta that would leave the range resets the offset to 0 instead of
    /// clamping to the nearest edge.
    pub fn scroll_by(&mut self, delta: i32) -> i32 {
        let mut new_offset = self.offset.saturating_add(delta);
        if new_offset > self.max_offset || new_offset < 0 {
            tracing::debug!(
                offset = self.offset,
                delta,
                max_offset = self.max_offset,
                "scroll left range, resetting offset"
            );
            new_offset = 0;
        }

        let consumed = new_offset - self.offset;
        self.offset = new_offset;
        consumed
    }

    /// Pages visible at the current offset, None for an empty list
    pub fn frame(&self) -> Option<FlipFrame> {
        if self.item_count == 0 {
            return None;
        }

        let (current_index, angle_degrees) = if self.item_extent > 0 {
            let current = self.offset / self.item_extent;
            let relative = i64::from(self.offset - current * self.item_extent);
            let extent = i64::from(self.item_extent);
            // round(relative / extent * 180), half away from zero
            let angle = (relative * 360 + extent) / (2 * extent);
            (current as usize, (angle as i32).min(MAX_FRAME_ANGLE))
        } else {
            (0, 0)
        };

        let next_index = if current_index + 1 < self.item_count {
            Some(current_index + 1)
        } else {
            None
        };

        Some(FlipFrame {
            current_index,
            next_index,
            angle_degrees,
        })
    }
}

/// Pages involved in one frame of a flip list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlipFrame {
    /// Page on the leading side of the turn
    pub current_index: usize,
    /// Page turning in behind it, None on the last page
    pub next_index: Option<usize>,
    /// How far the current page has turned, in [0, 180)
    pub angle_degrees: i32,
}

impl FlipFrame {
    pub fn phase(&self) -> FlipPhase {
        if self.angle_degrees == 0 {
            FlipPhase::Idle
        } else {
            FlipPhase::Folding
        }
    }

    pub fn is_idle(&self) -> bool {
        self.phase() == FlipPhase::Idle
    }

    /// Next page if it shows this frame; at rest it is fully covered
    pub fn visible_next(&self) -> Option<usize> {
        if self.is_idle() {
            None
        } else {
            self.next_index
        }
    }

    /// Rotation of the current page
    pub fn current_degree(&self) -> i32 {
        self.angle_degrees
    }

    /// Rotation of the next page, always negative: it turns in from the far side
    pub fn next_degree(&self) -> i32 {
        self.angle_degrees - 180
    }

    /// Whether the current page draws above the next one
    ///
    /// Up to a quarter turn the current page still faces the viewer; past it
    /// the next page settles on top.
    pub fn current_on_top(&self) -> bool {
        self.angle_degrees <= 90
    }
}

/// Turn state of a flip list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FlipPhase {
    /// A single page at rest
    #[default]
    Idle,
    /// A page part way through turning onto the next
    Folding,
}
