use alloc::vec::Vec;

use crate::layout::{LayoutContext, LayoutManager};
use crate::{Error, ItemRect, Orientation, Result};

/// What a staggered grid may do with already placed items when lanes become uneven.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GapStrategy {
    /// Never relocate a placed item. Span assignments survive layout passes and structural
    /// changes; only `invalidate_span_assignments` lets unsettled items pick a lane again.
    None,
    /// Reflow every pass so gaps are filled. Items may jump between lanes.
    #[default]
    MoveItemsBetweenSpans,
}

/// A multi-lane layout for items of varying extent.
///
/// Each item is placed in its remembered span, or in the currently shortest lane (lowest lane
/// on ties) when it has none. Lanes split the cross axis evenly.
///
/// Structural changes shift the remembered spans along with the items and mark the first
/// affected position; items from that position on are *unsettled*. With
/// [`GapStrategy::None`] they keep their lanes, which can leave a lane with a blank run, until
/// [`Self::invalidate_span_assignments`] lets them choose again. Settled items are never moved.
#[derive(Clone, Debug)]
pub struct StaggeredGridLayoutManager {
    span_count: usize,
    orientation: Orientation,
    gap_strategy: GapStrategy,
    spans: Vec<Option<usize>>,
    rects: Vec<ItemRect>,
    lane_ends: Vec<u64>,
    unsettled_from: Option<usize>,
}

impl StaggeredGridLayoutManager {
    pub fn new(span_count: usize, orientation: Orientation) -> Result<Self> {
        if span_count == 0 {
            return Err(Error::InvalidSpanCount);
        }
        Ok(Self {
            span_count,
            orientation,
            gap_strategy: GapStrategy::default(),
            spans: Vec::new(),
            rects: Vec::new(),
            lane_ends: alloc::vec![0; span_count],
            unsettled_from: None,
        })
    }

    pub fn with_gap_strategy(mut self, gap_strategy: GapStrategy) -> Self {
        self.gap_strategy = gap_strategy;
        self
    }

    pub fn span_count(&self) -> usize {
        self.span_count
    }

    pub fn set_span_count(&mut self, span_count: usize) -> Result<()> {
        if span_count == 0 {
            return Err(Error::InvalidSpanCount);
        }
        if span_count != self.span_count {
            self.span_count = span_count;
            self.spans.iter_mut().for_each(|s| *s = None);
            self.unsettled_from = None;
        }
        Ok(())
    }

    pub fn gap_strategy(&self) -> GapStrategy {
        self.gap_strategy
    }

    pub fn set_gap_strategy(&mut self, gap_strategy: GapStrategy) {
        self.gap_strategy = gap_strategy;
    }

    /// Drops the span assignments of every unsettled item so the next layout pass places them
    /// in the shortest lane again. Settled items keep their lanes.
    pub fn invalidate_span_assignments(&mut self) {
        let Some(from) = self.unsettled_from.take() else {
            return;
        };
        let from = from.min(self.spans.len());
        rdebug!(
            from,
            cleared = self.spans.len() - from,
            "invalidate_span_assignments"
        );
        for span in &mut self.spans[from..] {
            *span = None;
        }
    }

    pub fn span_of(&self, position: usize) -> Option<usize> {
        self.spans.get(position).copied().flatten()
    }

    /// Whether `position` has a lane and no structural change since then could have made it
    /// stale.
    pub fn is_settled(&self, position: usize) -> bool {
        self.span_of(position).is_some() && self.unsettled_from.is_none_or(|from| position < from)
    }

    pub fn unsettled_from(&self) -> Option<usize> {
        self.unsettled_from
    }

    /// Scroll-axis end of every lane as of the last layout pass.
    pub fn lane_ends(&self) -> &[u64] {
        &self.lane_ends
    }

    /// First item of `lane` as of the last layout pass.
    pub fn first_in_lane(&self, lane: usize) -> Option<&ItemRect> {
        self.rects.iter().find(|r| r.span == lane)
    }

    fn mark_unsettled(&mut self, position: usize) {
        self.unsettled_from = Some(self.unsettled_from.map_or(position, |f| f.min(position)));
    }

    fn shortest_lane(&self) -> usize {
        let mut best = 0usize;
        for (lane, &end) in self.lane_ends.iter().enumerate() {
            if end < self.lane_ends[best] {
                best = lane;
            }
        }
        best
    }
}

impl LayoutManager for StaggeredGridLayoutManager {
    fn orientation(&self) -> Orientation {
        self.orientation
    }

    fn layout_children(&mut self, ctx: &LayoutContext<'_>, out: &mut Vec<ItemRect>) {
        out.clear();
        let count = ctx.count;
        if self.spans.len() != count {
            if !self.spans.is_empty() {
                rwarn!(
                    expected = self.spans.len(),
                    count,
                    "StaggeredGridLayoutManager: count changed without notifications"
                );
            }
            self.spans.resize(count, None);
        }
        if self.gap_strategy == GapStrategy::MoveItemsBetweenSpans {
            self.spans.iter_mut().for_each(|s| *s = None);
        }

        let lane_size = ctx.viewport.cross / self.span_count as u32;
        self.lane_ends.clear();
        self.lane_ends.resize(self.span_count, 0);
        self.rects.clear();
        self.rects.reserve(count);

        for position in 0..count {
            let insets = ctx.insets(position);
            let extent = ctx.extent(position);
            let span = match self.spans[position] {
                Some(span) if span < self.span_count => span,
                _ => self.shortest_lane(),
            };
            self.spans[position] = Some(span);

            let outer_start = self.lane_ends[span];
            let main_start = outer_start.saturating_add(insets.leading as u64);
            self.lane_ends[span] = main_start
                .saturating_add(extent as u64)
                .saturating_add(insets.trailing as u64);

            let cross_start = (span as u32)
                .saturating_mul(lane_size)
                .saturating_add(insets.cross_leading);
            self.rects.push(ItemRect {
                position,
                span,
                main_start,
                main_size: extent,
                cross_start,
                cross_size: lane_size
                    .saturating_sub(insets.cross_leading)
                    .saturating_sub(insets.cross_trailing),
                insets,
            });
        }

        if ctx.viewport.main == 0 {
            return;
        }
        let (start, end) = ctx.window();
        out.extend(self.rects.iter().filter(|r| r.intersects(start, end)).copied());
        rtrace!(
            count,
            laid_out = out.len(),
            total = self.total_size(),
            "StaggeredGridLayoutManager::layout_children"
        );
    }

    fn total_size(&self) -> u64 {
        self.lane_ends.iter().copied().max().unwrap_or(0)
    }

    fn item_rect(&self, position: usize) -> Option<ItemRect> {
        self.rects.get(position).copied()
    }

    fn on_items_inserted(&mut self, start: usize, count: usize) {
        let start = start.min(self.spans.len());
        self.spans
            .splice(start..start, core::iter::repeat_n(None, count));
        self.mark_unsettled(start);
    }

    fn on_items_removed(&mut self, start: usize, count: usize) {
        let len = self.spans.len();
        let start = start.min(len);
        let end = start.saturating_add(count).min(len);
        self.spans.drain(start..end);
        self.mark_unsettled(start);
    }

    fn on_data_set_changed(&mut self) {
        self.spans.clear();
        self.unsettled_from = None;
    }
}
