//! Surface pools
//!
//! The coordinator never creates pages itself. It asks a `SurfacePool` for the
//! surface of an item index and hands surfaces back once they scroll out of
//! view. The pool's associated content type fixes what kind of surface it
//! produces, so a mismatched pool is a compile error rather than a runtime
//! failure.

use crate::surface::{FlipContent, FlipSurface};

/// Source of bound surfaces for item indices
pub trait SurfacePool {
    type Content: FlipContent;

    /// Produce a surface whose content shows item `index`
    fn acquire(&mut self, index: usize) -> FlipSurface<Self::Content>;

    /// Return the surface for item `index` once it is no longer visible
    fn release(&mut self, index: usize, surface: FlipSurface<Self::Content>);
}

/// Released surfaces kept around for rebinding
pub const MAX_RECYCLED: usize = 5;

type CreateFn<C> = Box<dyn FnMut() -> C>;
type BindFn<C> = Box<dyn FnMut(&mut C, usize)>;

/// A pool that recycles released surfaces and rebinds them to new indices
pub struct RecyclingPool<C> {
    create: CreateFn<C>,
    bind: BindFn<C>,
    recycled: Vec<FlipSurface<C>>,
    stats: PoolStats,
}

/// Counters for pool activity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Surfaces built from scratch
    pub created: usize,
    /// Bind calls (one per acquire)
    pub bound: usize,
    /// Surfaces handed back
    pub released: usize,
}

impl<C: FlipContent> RecyclingPool<C> {
    /// Create a pool from a content factory and a bind function
    pub fn new(
        create: impl FnMut() -> C + 'static,
        bind: impl FnMut(&mut C, usize) + 'static,
    ) -> Self {
        Self {
            create: Box::new(create),
            bind: Box::new(bind),
            recycled: Vec::new(),
            stats: PoolStats::default(),
        }
    }

    /// Replace the bind function, e.g. after the backing data changed
    ///
    /// Surfaces already handed out keep their content until rebound.
    pub fn set_bind(&mut self, bind: impl FnMut(&mut C, usize) + 'static) {
        self.bind = Box::new(bind);
    }

    pub fn stats(&self) -> PoolStats {
        self.stats
    }

    /// Surfaces waiting to be rebound
    pub fn recycled_len(&self) -> usize {
        self.recycled.len()
    }
}

impl<C: FlipContent> SurfacePool for RecyclingPool<C> {
    type Content = C;

    fn acquire(&mut self, index: usize) -> FlipSurface<C> {
        let mut surface = match self.recycled.pop() {
            Some(surface) => surface,
            None => {
                self.stats.created += 1;
                FlipSurface::new((self.create)())
            }
        };
        (self.bind)(surface.content_mut(), index);
        self.stats.bound += 1;
        surface
    }

    fn release(&mut self, index: usize, surface: FlipSurface<C>) {
        self.stats.released += 1;
        if self.recycled.len() < MAX_RECYCLED {
            self.recycled.push(surface);
        } else {
            tracing::trace!(index, "recycle pool full, dropping surface");
        }
    }
}

impl<C> std::fmt::Debug for RecyclingPool<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecyclingPool")
            .field("recycled", &self.recycled.len())
            .field("stats", &self.stats)
            .finish()
    }
}
