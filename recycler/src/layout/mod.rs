use alloc::vec::Vec;

use crate::{Insets, ItemRect, Orientation, Rect, ScrollState};

mod linear;
mod staggered;

pub use linear::LinearLayoutManager;
pub use staggered::{GapStrategy, StaggeredGridLayoutManager};

/// Everything a layout pass may ask the surface about.
pub struct LayoutContext<'a> {
    pub count: usize,
    pub viewport: Rect,
    pub scroll_offset: u64,
    /// Extra distance laid out beyond each viewport edge.
    pub overscan: u32,
    extent: &'a dyn Fn(usize) -> u32,
    insets: &'a dyn Fn(usize) -> Insets,
}

impl<'a> LayoutContext<'a> {
    pub fn new(
        count: usize,
        viewport: Rect,
        scroll_offset: u64,
        overscan: u32,
        extent: &'a dyn Fn(usize) -> u32,
        insets: &'a dyn Fn(usize) -> Insets,
    ) -> Self {
        Self {
            count,
            viewport,
            scroll_offset,
            overscan,
            extent,
            insets,
        }
    }

    /// Content size of the item at `position` on the scroll axis.
    pub fn extent(&self, position: usize) -> u32 {
        (self.extent)(position)
    }

    /// Combined decoration insets of the item at `position`.
    pub fn insets(&self, position: usize) -> Insets {
        (self.insets)(position)
    }

    /// The `[start, end)` range on the scroll axis that must be populated.
    pub fn window(&self) -> (u64, u64) {
        let overscan = self.overscan as u64;
        let start = self.scroll_offset.saturating_sub(overscan);
        let end = self
            .scroll_offset
            .saturating_add(self.viewport.main as u64)
            .saturating_add(overscan);
        (start, end)
    }
}

/// Positions items and reacts to structural changes.
///
/// The structural hooks are called by the surface while it applies notifications, before the
/// next `layout_children`, with positions in the same coordinates as the notification.
pub trait LayoutManager {
    fn orientation(&self) -> Orientation;

    /// Lays out the items intersecting `ctx.window()` into `out` (cleared first), sorted by
    /// ascending position.
    fn layout_children(&mut self, ctx: &LayoutContext<'_>, out: &mut Vec<ItemRect>);

    /// Scroll-axis size of the content as of the last layout pass.
    fn total_size(&self) -> u64;

    /// Placement of `position` as of the last layout pass.
    fn item_rect(&self, position: usize) -> Option<ItemRect>;

    fn on_items_inserted(&mut self, start: usize, count: usize) {
        let _ = (start, count);
    }

    fn on_items_removed(&mut self, start: usize, count: usize) {
        let _ = (start, count);
    }

    fn on_items_changed(&mut self, start: usize, count: usize) {
        let _ = (start, count);
    }

    fn on_data_set_changed(&mut self) {}

    fn on_scroll_state_changed(&mut self, state: ScrollState) {
        let _ = state;
    }
}
