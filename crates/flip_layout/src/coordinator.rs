//! Flip coordinator - layout and scroll driver for a page-flip list
//!
//! The coordinator owns the list's `ScrollState` and the (at most two)
//! surfaces currently attached. Whenever the offset or the layout changes it
//! re-fills: works out which pages are visible, takes their surfaces from the
//! previous frame or from the pool, assigns each its `RenderSpec`, and orders
//! them for drawing.
//!
//! # Example
//!
//! ```rust
//! use flip_core::{DrawContext, Rect, RecordingContext, Size};
//! use flip_layout::{FlipConfig, FlipContent, FlipCoordinator, RecyclingPool, Viewport};
//!
//! #[derive(Default)]
//! struct Blank;
//!
//! impl FlipContent for Blank {
//!     fn draw(&self, _ctx: &mut dyn DrawContext, _frame: Rect) {}
//! }
//!
//! let pool = RecyclingPool::new(Blank::default, |_page: &mut Blank, _index| {});
//! let mut list = FlipCoordinator::new(FlipConfig::vertical(), pool)?;
//! list.on_layout(10, Viewport::new(Size::new(320.0, 480.0)));
//!
//! assert_eq!(list.scroll_by(240), 240);
//! assert_eq!(list.attached_indices(), vec![1, 0]);
//!
//! let mut ctx = RecordingContext::new(Size::new(320.0, 480.0));
//! list.draw(&mut ctx);
//! # Ok::<(), flip_layout::FlipError>(())
//! ```

use flip_core::{DrawContext, Insets, Rect, Size};
use smallvec::SmallVec;

use crate::config::FlipConfig;
use crate::error::Result;
use crate::pool::SurfacePool;
use crate::projection::RenderSpec;
use crate::scroll::{FlipFrame, FlipPhase, ScrollState};
use crate::surface::{FlipContent, FlipSurface};

/// Container the list lays its pages out in
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Viewport {
    pub size: Size,
    pub padding: Insets,
}

impl Viewport {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            padding: Insets::ZERO,
        }
    }

    pub fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    /// Frame every page fills: the container minus its padding
    pub fn child_frame(&self) -> Rect {
        self.size.to_rect().inset_by(self.padding)
    }
}

/// A surface attached for the current frame
#[derive(Debug)]
pub struct AttachedSurface<C> {
    pub index: usize,
    pub spec: RenderSpec,
    pub surface: FlipSurface<C>,
}

type Attached<C> = SmallVec<[AttachedSurface<C>; 2]>;

/// Scroll and layout driver for a flip list
pub struct FlipCoordinator<P: SurfacePool> {
    config: FlipConfig,
    pool: P,
    scroll: ScrollState,
    viewport: Viewport,
    phase: FlipPhase,
    /// Draw order, bottom to top
    attached: Attached<P::Content>,
}

impl<P: SurfacePool> FlipCoordinator<P> {
    /// Create a coordinator drawing surfaces from `pool`
    pub fn new(config: FlipConfig, pool: P) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            pool,
            scroll: ScrollState::default(),
            viewport: Viewport::default(),
            phase: FlipPhase::Idle,
            attached: SmallVec::new(),
        })
    }

    pub fn config(&self) -> &FlipConfig {
        &self.config
    }

    pub fn pool(&self) -> &P {
        &self.pool
    }

    pub fn pool_mut(&mut self) -> &mut P {
        &mut self.pool
    }

    pub fn offset(&self) -> i32 {
        self.scroll.offset()
    }

    pub fn max_offset(&self) -> i32 {
        self.scroll.max_offset()
    }

    pub fn item_count(&self) -> usize {
        self.scroll.item_count()
    }

    pub fn phase(&self) -> FlipPhase {
        self.phase
    }

    /// Pages visible at the current offset
    pub fn frame(&self) -> Option<FlipFrame> {
        self.scroll.frame()
    }

    pub fn can_scroll_horizontally(&self) -> bool {
        self.config.axis.can_scroll_horizontally()
    }

    pub fn can_scroll_vertically(&self) -> bool {
        self.config.axis.can_scroll_vertically()
    }

    /// Indices of attached surfaces in draw order
    pub fn attached_indices(&self) -> Vec<usize> {
        self.attached.iter().map(|a| a.index).collect()
    }

    /// Attached surfaces in draw order
    pub fn attached(&self) -> &[AttachedSurface<P::Content>] {
        &self.attached
    }

    /// Render specs of the attached surfaces in draw order
    pub fn render_specs(&self) -> impl Iterator<Item = &RenderSpec> + '_ {
        self.attached.iter().map(|a| &a.spec)
    }

    /// Render spec of the attached surface for `index`
    pub fn render_spec(&self, index: usize) -> Option<&RenderSpec> {
        self.attached
            .iter()
            .find(|a| a.index == index)
            .map(|a| &a.spec)
    }

    /// Lay the list out for `item_count` items in `viewport`
    ///
    /// Every attached surface goes back to the pool so the refill rebinds
    /// against the new data.
    pub fn on_layout(&mut self, item_count: usize, viewport: Viewport) {
        let extent = self.config.axis.extent(viewport.size).round() as i32;
        self.viewport = viewport;
        self.scroll.on_layout(item_count, extent);

        tracing::debug!(
            item_count,
            item_extent = self.scroll.item_extent(),
            max_offset = self.scroll.max_offset(),
            offset = self.scroll.offset(),
            "flip layout"
        );

        self.release_all();
        self.fill();
    }

    /// Scroll by `delta` pixels, returning the amount consumed
    pub fn scroll_by(&mut self, delta: i32) -> i32 {
        let consumed = self.scroll.scroll_by(delta);
        if consumed != 0 {
            self.fill();
        }
        consumed
    }

    /// Horizontal scroll from the host, ignored by vertical lists
    pub fn scroll_horizontally_by(&mut self, dx: i32) -> i32 {
        if !self.can_scroll_horizontally() {
            return 0;
        }
        self.scroll_by(dx)
    }

    /// Vertical scroll from the host, ignored by horizontal lists
    pub fn scroll_vertically_by(&mut self, dy: i32) -> i32 {
        if !self.can_scroll_vertically() {
            return 0;
        }
        self.scroll_by(dy)
    }

    /// Draw every attached surface, bottom to top
    pub fn draw(&self, ctx: &mut dyn DrawContext) {
        for attached in &self.attached {
            attached.surface.render(ctx, &attached.spec);
        }
    }

    /// Return every attached surface to the pool
    pub fn release_all(&mut self) {
        for attached in self.attached.drain(..) {
            self.pool.release(attached.index, attached.surface);
        }
    }

    fn fill(&mut self) {
        let Some(frame) = self.scroll.frame() else {
            self.release_all();
            self.set_phase(FlipPhase::Idle);
            return;
        };
        self.set_phase(frame.phase());

        let next_index = frame.visible_next();

        // Detach everything; pages still visible are reused as scrap
        let mut scrap: Attached<P::Content> = SmallVec::new();
        for attached in self.attached.drain(..) {
            if attached.index == frame.current_index || Some(attached.index) == next_index {
                scrap.push(attached);
            } else {
                self.pool.release(attached.index, attached.surface);
            }
        }

        let child_frame = self.viewport.child_frame();
        let current = self.obtain(
            &mut scrap,
            frame.current_index,
            frame.current_degree(),
            child_frame,
        );
        let next =
            next_index.map(|index| self.obtain(&mut scrap, index, frame.next_degree(), child_frame));

        match next {
            Some(next) if frame.current_on_top() => {
                self.attached.push(next);
                self.attached.push(current);
            }
            Some(next) => {
                self.attached.push(current);
                self.attached.push(next);
            }
            None => self.attached.push(current),
        }

        tracing::trace!(
            offset = self.scroll.offset(),
            current = frame.current_index,
            next = ?next_index,
            angle = frame.angle_degrees,
            order = ?self.attached_indices(),
            "flip fill"
        );
    }

    fn obtain(
        &mut self,
        scrap: &mut Attached<P::Content>,
        index: usize,
        degree: i32,
        frame: Rect,
    ) -> AttachedSurface<P::Content> {
        let mut surface = match scrap.iter().position(|a| a.index == index) {
            Some(pos) => scrap.swap_remove(pos).surface,
            None => self.pool.acquire(index),
        };
        surface.layout(frame);

        let spec = RenderSpec {
            degree,
            axis: self.config.axis,
            bounds: surface.content_bounds(),
            camera_distance: self.config.camera_distance,
        };
        AttachedSurface {
            index,
            spec,
            surface,
        }
    }

    fn set_phase(&mut self, phase: FlipPhase) {
        if self.phase != phase {
            tracing::debug!(from = ?self.phase, to = ?phase, "flip phase changed");
            self.phase = phase;
        }
    }
}

impl<P: SurfacePool> std::fmt::Debug for FlipCoordinator<P>
where
    P: std::fmt::Debug,
    P::Content: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlipCoordinator")
            .field("config", &self.config)
            .field("scroll", &self.scroll)
            .field("viewport", &self.viewport)
            .field("phase", &self.phase)
            .field("attached", &self.attached)
            .field("pool", &self.pool)
            .finish()
    }
}

impl<C: FlipContent> AttachedSurface<C> {
    pub fn content(&self) -> &C {
        self.surface.content()
    }
}

#[cfg(test)]
mod tests {
    use flip_core::RecordingContext;

    use super::*;
    use crate::axis::Axis;
    use crate::error::FlipError;
    use crate::pool::RecyclingPool;
    use crate::testing::{drawn_labels, Page};

    const VIEWPORT: Size = Size::new(300.0, 100.0);

    fn page_pool() -> RecyclingPool<Page> {
        RecyclingPool::new(Page::default, |page: &mut Page, index| {
            page.label = format!("page {index}");
        })
    }

    fn coordinator(config: FlipConfig, item_count: usize) -> FlipCoordinator<RecyclingPool<Page>> {
        let mut list = FlipCoordinator::new(config, page_pool()).expect("valid config");
        list.on_layout(item_count, Viewport::new(VIEWPORT));
        list
    }

    fn draw_labels(list: &FlipCoordinator<RecyclingPool<Page>>) -> Vec<String> {
        let mut ctx = RecordingContext::new(VIEWPORT);
        list.draw(&mut ctx);
        assert_eq!(ctx.depth(), 0);
        drawn_labels(ctx.commands())
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = FlipConfig::vertical().with_camera_distance(0.0);
        assert!(matches!(
            FlipCoordinator::new(config, page_pool()),
            Err(FlipError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_layout_attaches_current_page() {
        let list = coordinator(FlipConfig::vertical(), 3);

        // Vertical lists turn one page per viewport height
        assert_eq!(list.max_offset(), 200);
        assert_eq!(list.attached_indices(), vec![0]);
        assert_eq!(list.phase(), FlipPhase::Idle);

        let spec = list.render_spec(0).unwrap();
        assert_eq!(spec.degree, 0);
        assert_eq!(spec.axis, Axis::Vertical);
        assert_eq!(spec.bounds, VIEWPORT.to_rect());
        assert_eq!(draw_labels(&list), vec!["page 0"]);
    }

    #[test]
    fn test_scroll_to_quarter_turn() {
        let mut list = coordinator(FlipConfig::vertical(), 3);

        assert_eq!(list.scroll_by(50), 50);
        assert_eq!(list.offset(), 50);
        assert_eq!(list.phase(), FlipPhase::Folding);

        let frame = list.frame().unwrap();
        assert_eq!(frame.current_index, 0);
        assert_eq!(frame.next_index, Some(1));
        assert_eq!(frame.angle_degrees, 90);

        // At exactly 90° the next page is still underneath
        assert_eq!(list.attached_indices(), vec![1, 0]);
        assert_eq!(list.render_spec(0).unwrap().degree, 90);
        assert_eq!(list.render_spec(1).unwrap().degree, -90);
        assert_eq!(draw_labels(&list), vec!["page 1", "page 0"]);
    }

    #[test]
    fn test_scroll_past_quarter_turn_swaps_order() {
        let mut list = coordinator(FlipConfig::vertical(), 3);
        list.scroll_by(50);

        assert_eq!(list.scroll_by(40), 40);
        assert_eq!(list.offset(), 90);
        assert_eq!(list.frame().unwrap().angle_degrees, 162);

        assert_eq!(list.attached_indices(), vec![0, 1]);
        assert_eq!(list.render_spec(0).unwrap().degree, 162);
        assert_eq!(list.render_spec(1).unwrap().degree, -18);
        // The incoming page is still folding, so it draws both halves
        assert_eq!(draw_labels(&list), vec!["page 0", "page 1", "page 1"]);
    }

    #[test]
    fn test_overflow_resets_to_first_page() {
        let mut list = coordinator(FlipConfig::vertical(), 3);
        list.scroll_by(200);
        assert_eq!(list.attached_indices(), vec![2]);

        assert_eq!(list.scroll_by(60), -200);
        assert_eq!(list.offset(), 0);
        assert_eq!(list.attached_indices(), vec![0]);
    }

    #[test]
    fn test_page_boundary_is_idle() {
        let mut list = coordinator(FlipConfig::vertical(), 3);
        list.scroll_by(100);

        assert_eq!(list.phase(), FlipPhase::Idle);
        assert_eq!(list.attached_indices(), vec![1]);
        assert_eq!(list.render_spec(1).unwrap().degree, 0);
    }

    #[test]
    fn test_scroll_round_trip_restores_pages() {
        let mut list = coordinator(FlipConfig::vertical(), 4);
        list.scroll_by(30);
        let before = (list.offset(), list.attached_indices());

        list.scroll_by(100);
        list.scroll_by(-100);
        assert_eq!((list.offset(), list.attached_indices()), before);
    }

    #[test]
    fn test_visible_pages_are_reused() {
        let mut list = coordinator(FlipConfig::vertical(), 5);
        assert_eq!(list.pool().stats().bound, 1);

        list.scroll_by(10);
        list.scroll_by(10);
        list.scroll_by(60);
        // Page 0 kept, page 1 bound once
        assert_eq!(list.pool().stats().bound, 2);
        assert_eq!(list.pool().stats().released, 0);

        list.scroll_by(20);
        // Page 0 scrolled away
        assert_eq!(list.attached_indices(), vec![1]);
        assert_eq!(list.pool().stats().released, 1);
    }

    #[test]
    fn test_never_more_than_two_attached() {
        let mut list = coordinator(FlipConfig::horizontal(), 6);
        for delta in [37, 120, 333, -90, 500, 12, -1000, 250, 999] {
            list.scroll_by(delta);
            assert!(list.attached().len() <= 2);
            assert!(list.offset() >= 0 && list.offset() <= list.max_offset());
        }
    }

    #[test]
    fn test_empty_list_releases_everything() {
        let mut list = coordinator(FlipConfig::vertical(), 3);
        list.scroll_by(30);
        assert_eq!(list.attached().len(), 2);

        list.on_layout(0, Viewport::new(VIEWPORT));
        assert!(list.attached().is_empty());
        assert_eq!(list.frame(), None);
        assert_eq!(list.scroll_by(10), 0);
        assert!(draw_labels(&list).is_empty());
    }

    #[test]
    fn test_relayout_clamps_and_rebinds() {
        let mut list = coordinator(FlipConfig::vertical(), 5);
        list.scroll_by(350);
        assert_eq!(list.attached_indices(), vec![4, 3]);

        list.on_layout(3, Viewport::new(VIEWPORT));
        assert_eq!(list.offset(), 200);
        assert_eq!(list.attached_indices(), vec![2]);
        assert_eq!(list.attached()[0].content().label, "page 2");
    }

    #[test]
    fn test_relayout_rebinds_visible_page() {
        let mut list = coordinator(FlipConfig::vertical(), 3);
        list.scroll_by(100);
        assert_eq!(list.attached_indices(), vec![1]);
        let before = list.pool().stats();

        // Same page stays visible, but the data behind it changed
        list.pool_mut().set_bind(|page: &mut Page, index| {
            page.label = format!("edited {index}");
        });
        list.on_layout(3, Viewport::new(VIEWPORT));

        let after = list.pool().stats();
        assert_eq!(list.offset(), 100);
        assert_eq!(list.attached_indices(), vec![1]);
        assert_eq!(after.released, before.released + 1);
        assert_eq!(after.bound, before.bound + 1);
        assert_eq!(draw_labels(&list), vec!["edited 1"]);
    }

    #[test]
    fn test_horizontal_order_past_quarter_turn() {
        let mut list = coordinator(FlipConfig::horizontal(), 3);

        // 240 of a 300px page is 144°
        assert_eq!(list.scroll_horizontally_by(240), 240);
        let frame = list.frame().unwrap();
        assert_eq!(frame.angle_degrees, 144);
        assert_eq!(frame.next_degree(), -36);

        assert_eq!(list.attached_indices(), vec![0, 1]);
        assert_eq!(list.render_spec(0).unwrap().degree, 144);
        assert_eq!(list.render_spec(1).unwrap().degree, -36);
        assert_eq!(draw_labels(&list), vec!["page 0", "page 1", "page 1"]);
    }

    #[test]
    fn test_horizontal_list_uses_width() {
        let mut list = coordinator(FlipConfig::horizontal(), 3);
        assert_eq!(list.max_offset(), 600);

        assert_eq!(list.scroll_vertically_by(40), 0);
        assert_eq!(list.scroll_horizontally_by(150), 150);
        assert_eq!(list.frame().unwrap().angle_degrees, 90);
        assert_eq!(list.render_spec(1).unwrap().axis, Axis::Horizontal);
    }

    #[test]
    fn test_vertical_list_ignores_horizontal_scroll() {
        let mut list = coordinator(FlipConfig::vertical(), 3);
        assert!(list.can_scroll_vertically());
        assert!(!list.can_scroll_horizontally());
        assert_eq!(list.scroll_horizontally_by(40), 0);
        assert_eq!(list.offset(), 0);
    }

    #[test]
    fn test_pages_fill_padded_viewport() {
        let mut list = FlipCoordinator::new(FlipConfig::vertical(), page_pool()).unwrap();
        let viewport = Viewport::new(VIEWPORT).with_padding(Insets::symmetric(10.0, 5.0));
        list.on_layout(2, viewport);
        list.scroll_by(25);

        let expected = Rect::new(10.0, 5.0, 280.0, 90.0);
        for attached in list.attached() {
            assert_eq!(attached.surface.frame(), expected);
            assert_eq!(attached.spec.bounds, expected);
            assert_eq!(attached.content().measured, Some(expected.size()));
        }
    }

    #[test]
    fn test_camera_distance_flows_into_specs() {
        let mut list = coordinator(FlipConfig::vertical().with_camera_distance(900.0), 3);
        list.scroll_by(20);
        assert_eq!(list.render_specs().count(), 2);
        assert!(list.render_specs().all(|spec| spec.camera_distance == 900.0));
    }

    #[test]
    fn test_zero_size_viewport_draws_nothing() {
        let mut list = FlipCoordinator::new(FlipConfig::vertical(), page_pool()).unwrap();
        list.on_layout(3, Viewport::new(Size::ZERO));

        assert_eq!(list.max_offset(), 0);
        assert_eq!(list.scroll_by(10), 0);
        assert!(draw_labels(&list).is_empty());
    }
}
