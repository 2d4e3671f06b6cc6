//! Scroll axis and fold sides

use std::str::FromStr;

use flip_core::{Rect, Size};
use serde::{Deserialize, Serialize};

use crate::error::FlipError;

/// Screen axis the list scrolls along
///
/// Pages rotate around the perpendicular axis: a vertical list folds its
/// pages around a horizontal line, a horizontal list around a vertical one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Horizontal,
    #[default]
    Vertical,
}

impl Axis {
    pub fn can_scroll_horizontally(&self) -> bool {
        matches!(self, Axis::Horizontal)
    }

    pub fn can_scroll_vertically(&self) -> bool {
        matches!(self, Axis::Vertical)
    }

    /// Length of `size` along this axis
    pub fn extent(&self, size: Size) -> f32 {
        match self {
            Axis::Horizontal => size.width,
            Axis::Vertical => size.height,
        }
    }
}

impl FromStr for Axis {
    type Err = FlipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "horizontal" | "h" => Ok(Axis::Horizontal),
            "vertical" | "v" => Ok(Axis::Vertical),
            other => Err(FlipError::InvalidConfig(format!("unknown axis: {other}"))),
        }
    }
}

/// Half of a page's bounds, split along the center line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FoldSide {
    /// Left half (horizontal lists)
    Start,
    /// Right half (horizontal lists)
    End,
    /// Upper half (vertical lists)
    Top,
    /// Lower half (vertical lists)
    Bottom,
}

impl FoldSide {
    /// Side that is rotating for a page at `degree`
    ///
    /// Negative degrees are pages turning in from the far side, so they fold
    /// their leading half (Start/Top).
    pub fn for_degree(degree: i32, axis: Axis) -> Self {
        match axis {
            Axis::Vertical if degree < 0 => FoldSide::Top,
            Axis::Vertical => FoldSide::Bottom,
            Axis::Horizontal if degree < 0 => FoldSide::Start,
            Axis::Horizontal => FoldSide::End,
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            FoldSide::Start => FoldSide::End,
            FoldSide::End => FoldSide::Start,
            FoldSide::Top => FoldSide::Bottom,
            FoldSide::Bottom => FoldSide::Top,
        }
    }

    /// The part of `clip` lying on this side of `bounds`' center line
    ///
    /// Both rects are in the same local space. A clip lying wholly on the
    /// other side yields a zero-size rect on the center line.
    pub fn half_of(&self, clip: Rect, bounds: Rect) -> Rect {
        let center = bounds.center();
        match self {
            FoldSide::Start => {
                let right = clip.right().min(center.x);
                clip.with_left(clip.left().min(right)).with_right(right)
            }
            FoldSide::End => {
                let left = clip.left().max(center.x);
                clip.with_right(clip.right().max(left)).with_left(left)
            }
            FoldSide::Top => {
                let bottom = clip.bottom().min(center.y);
                clip.with_top(clip.top().min(bottom)).with_bottom(bottom)
            }
            FoldSide::Bottom => {
                let top = clip.top().max(center.y);
                clip.with_bottom(clip.bottom().max(top)).with_top(top)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_extent() {
        let size = Size::new(320.0, 480.0);
        assert_eq!(Axis::Horizontal.extent(size), 320.0);
        assert_eq!(Axis::Vertical.extent(size), 480.0);
        assert_eq!(Axis::default(), Axis::Vertical);

        assert!(Axis::Horizontal.can_scroll_horizontally());
        assert!(!Axis::Horizontal.can_scroll_vertically());
        assert!(Axis::Vertical.can_scroll_vertically());
    }

    #[test]
    fn test_fold_side_for_degree() {
        assert_eq!(FoldSide::for_degree(-30, Axis::Vertical), FoldSide::Top);
        assert_eq!(FoldSide::for_degree(30, Axis::Vertical), FoldSide::Bottom);
        assert_eq!(FoldSide::for_degree(-30, Axis::Horizontal), FoldSide::Start);
        assert_eq!(FoldSide::for_degree(30, Axis::Horizontal), FoldSide::End);

        // Zero counts as the positive side
        assert_eq!(FoldSide::for_degree(0, Axis::Vertical), FoldSide::Bottom);
    }

    #[test]
    fn test_fold_side_halves() {
        let bounds = Rect::new(10.0, 10.0, 100.0, 60.0);
        let clip = Rect::new(0.0, 0.0, 120.0, 80.0);

        assert_eq!(FoldSide::Start.half_of(clip, bounds), Rect::new(0.0, 0.0, 60.0, 80.0));
        assert_eq!(FoldSide::End.half_of(clip, bounds), Rect::new(60.0, 0.0, 60.0, 80.0));
        assert_eq!(FoldSide::Top.half_of(clip, bounds), Rect::new(0.0, 0.0, 120.0, 40.0));
        assert_eq!(FoldSide::Bottom.half_of(clip, bounds), Rect::new(0.0, 40.0, 120.0, 40.0));

        // A clip entirely left of the center line leaves nothing on the End side
        let narrow = Rect::new(0.0, 0.0, 40.0, 80.0);
        assert_eq!(FoldSide::End.half_of(narrow, bounds), Rect::new(60.0, 0.0, 0.0, 80.0));
        assert_eq!(FoldSide::Start.half_of(narrow, bounds), narrow);

        for side in [FoldSide::Start, FoldSide::End, FoldSide::Top, FoldSide::Bottom] {
            assert_eq!(side.opposite().opposite(), side);
        }
    }

    #[test]
    fn test_parse_axis() {
        assert_eq!("horizontal".parse::<Axis>().unwrap(), Axis::Horizontal);
        assert_eq!("V".parse::<Axis>().unwrap(), Axis::Vertical);
        assert!("diagonal".parse::<Axis>().is_err());
    }
}
