use alloc::vec::Vec;
use core::ops::Range;

use crate::fenwick::Fenwick;
use crate::layout::{LayoutContext, LayoutManager};
use crate::{Insets, ItemRect, Orientation};

/// A single-lane list along one axis.
///
/// Keeps prefix sums over decorated extents so the first visible item is found in
/// `O(log n)`. Only positions invalidated by notifications are remeasured; structural changes
/// rebuild the prefix sums.
#[derive(Clone, Debug, Default)]
pub struct LinearLayoutManager {
    orientation: Orientation,
    extents: Vec<u32>,
    insets: Vec<Insets>,
    sums: Fenwick,
    cross: u32,
    stale: Vec<Range<usize>>,
    rebuild: bool,
    remeasure_all: bool,
}

impl LinearLayoutManager {
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            remeasure_all: true,
            ..Self::default()
        }
    }

    pub fn vertical() -> Self {
        Self::new(Orientation::Vertical)
    }

    pub fn horizontal() -> Self {
        Self::new(Orientation::Horizontal)
    }

    /// Index of the item covering `offset` on the scroll axis.
    pub fn position_at_offset(&self, offset: u64) -> Option<usize> {
        let count = self.extents.len();
        if count == 0 {
            return None;
        }
        Some(self.sums.lower_bound(offset).min(count - 1))
    }

    fn sync(&mut self, ctx: &LayoutContext<'_>) {
        let count = ctx.count;
        if self.remeasure_all || self.extents.len() != count {
            if !self.remeasure_all {
                rwarn!(
                    expected = self.extents.len(),
                    count,
                    "LinearLayoutManager: count changed without notifications"
                );
            }
            self.extents = (0..count).map(|p| ctx.extent(p)).collect();
            self.insets = (0..count).map(|p| ctx.insets(p)).collect();
            self.stale.clear();
            self.rebuild_sums();
            self.remeasure_all = false;
            self.rebuild = false;
            return;
        }

        if self.rebuild {
            // Insets depend on the item count, so every position is re-asked.
            for p in 0..count {
                self.insets[p] = ctx.insets(p);
            }
            for range in core::mem::take(&mut self.stale) {
                for p in range.start.min(count)..range.end.min(count) {
                    self.extents[p] = ctx.extent(p);
                }
            }
            self.rebuild_sums();
            self.rebuild = false;
            return;
        }

        for range in core::mem::take(&mut self.stale) {
            for p in range.start.min(count)..range.end.min(count) {
                let before = decorated(self.extents[p], self.insets[p]);
                self.extents[p] = ctx.extent(p);
                self.insets[p] = ctx.insets(p);
                let after = decorated(self.extents[p], self.insets[p]);
                self.sums.add(p, after as i64 - before as i64);
            }
        }
    }

    fn rebuild_sums(&mut self) {
        let values: Vec<u64> = self
            .extents
            .iter()
            .zip(&self.insets)
            .map(|(&e, &i)| decorated(e, i))
            .collect();
        self.sums = Fenwick::from_extents(&values);
    }

    fn rect(&self, position: usize) -> ItemRect {
        let insets = self.insets[position];
        let outer_start = self.sums.prefix_sum(position);
        ItemRect {
            position,
            span: 0,
            main_start: outer_start.saturating_add(insets.leading as u64),
            main_size: self.extents[position],
            cross_start: insets.cross_leading,
            cross_size: self
                .cross
                .saturating_sub(insets.cross_leading)
                .saturating_sub(insets.cross_trailing),
            insets,
        }
    }
}

impl LayoutManager for LinearLayoutManager {
    fn orientation(&self) -> Orientation {
        self.orientation
    }

    fn layout_children(&mut self, ctx: &LayoutContext<'_>, out: &mut Vec<ItemRect>) {
        out.clear();
        self.cross = ctx.viewport.cross;
        self.sync(ctx);

        let count = self.extents.len();
        if count == 0 || ctx.viewport.main == 0 {
            return;
        }

        let (start, end) = ctx.window();
        let Some(first) = self.position_at_offset(start) else {
            return;
        };
        for position in first..count {
            let rect = self.rect(position);
            if rect.outer_start() >= end {
                break;
            }
            if rect.intersects(start, end) {
                out.push(rect);
            }
        }
        rtrace!(
            first,
            laid_out = out.len(),
            total = self.sums.total(),
            "LinearLayoutManager::layout_children"
        );
    }

    fn total_size(&self) -> u64 {
        self.sums.total()
    }

    fn item_rect(&self, position: usize) -> Option<ItemRect> {
        (position < self.extents.len() && position < self.sums.len()).then(|| self.rect(position))
    }

    fn on_items_inserted(&mut self, start: usize, count: usize) {
        let start = start.min(self.extents.len());
        self.extents
            .splice(start..start, core::iter::repeat_n(0, count));
        self.insets
            .splice(start..start, core::iter::repeat_n(Insets::ZERO, count));
        self.stale.push(start..start + count);
        self.rebuild = true;
    }

    fn on_items_removed(&mut self, start: usize, count: usize) {
        let len = self.extents.len();
        let start = start.min(len);
        let end = start.saturating_add(count).min(len);
        self.extents.drain(start..end);
        self.insets.drain(start..end);
        self.rebuild = true;
    }

    fn on_items_changed(&mut self, start: usize, count: usize) {
        self.stale.push(start..start.saturating_add(count));
    }

    fn on_data_set_changed(&mut self) {
        self.remeasure_all = true;
    }
}

fn decorated(extent: u32, insets: Insets) -> u64 {
    extent as u64 + insets.main() as u64
}
