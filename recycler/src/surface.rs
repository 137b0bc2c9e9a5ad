use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::layout::{LayoutContext, LayoutManager};
use crate::{
    Adapter, DrawCommand, Error, Insets, ItemAnimator, ItemDecoration, ItemRect, Notification,
    RecycledViewPool, RecyclerOptions, Rect, Result, ScrollState, ViewHolder, ViewType,
};

/// A callback fired on every scroll-state transition. It may reconfigure the layout manager.
pub type ScrollListener<L> = Box<dyn FnMut(&mut L, ScrollState)>;

/// A headless rendering surface.
///
/// It owns an [`Adapter`] and a [`LayoutManager`], keeps one [`ViewHolder`] per laid-out
/// position, and recycles holders that leave the viewport through a [`RecycledViewPool`].
///
/// Structural notifications move attached holders without rebinding them: after an
/// `ItemRangeRemoved`, rows past the removal point still carry the position they were bound
/// with until an `ItemRangeChanged` covering them arrives. Clicks are dispatched with that bound
/// position, so the pairing done by [`crate::ItemList::remove_at`] is what keeps clicks aligned
/// with the data.
///
/// Every host event (`layout`, `click`, `scroll_by`, `scroll_to_position`, `set_scroll_state`)
/// first applies pending notifications and ends with a layout pass.
pub struct RecyclerView<A: Adapter, L> {
    adapter: A,
    layout: L,
    options: RecyclerOptions,
    decorations: Vec<Box<dyn ItemDecoration>>,
    animator: Option<Box<dyn ItemAnimator>>,
    scroll_listeners: Vec<ScrollListener<L>>,

    attached: Vec<ViewHolder<A::View>>, // sorted by position
    pool: RecycledViewPool<A::View>,
    children: Vec<ItemRect>,
    pending: Vec<Notification>,

    item_count: usize,
    viewport: Rect,
    scroll_offset: u64,
    scroll_state: ScrollState,
    now_ms: u64,
}

impl<A: Adapter, L: LayoutManager> RecyclerView<A, L> {
    /// Attaches `adapter` and `layout`. Nothing is bound until the first [`Self::layout`].
    pub fn new(mut adapter: A, layout: L, options: RecyclerOptions) -> Self {
        let mut pending = Vec::new();
        // Edits made before attaching are already part of the initial count.
        adapter.drain_notifications(&mut pending);
        pending.clear();
        let item_count = adapter.item_count();
        rdebug!(
            item_count,
            viewport_main = options.viewport.main,
            viewport_cross = options.viewport.cross,
            "RecyclerView::new"
        );
        Self {
            adapter,
            layout,
            decorations: Vec::new(),
            animator: None,
            scroll_listeners: Vec::new(),
            attached: Vec::new(),
            pool: RecycledViewPool::new(options.max_recycled_views),
            children: Vec::new(),
            pending,
            item_count,
            viewport: options.viewport,
            scroll_offset: 0,
            scroll_state: ScrollState::Idle,
            now_ms: 0,
            options,
        }
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    /// Mutable access to the adapter. Queued notifications are applied on the next event.
    pub fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    pub fn layout_manager(&self) -> &L {
        &self.layout
    }

    pub fn layout_manager_mut(&mut self) -> &mut L {
        &mut self.layout
    }

    pub fn options(&self) -> &RecyclerOptions {
        &self.options
    }

    pub fn add_item_decoration(&mut self, decoration: impl ItemDecoration + 'static) {
        self.decorations.push(Box::new(decoration));
        // Insets changed for every item.
        self.layout.on_data_set_changed();
    }

    pub fn set_item_animator(&mut self, animator: Option<impl ItemAnimator + 'static>) {
        self.animator = animator.map(|a| Box::new(a) as _);
    }

    pub fn item_animator(&self) -> Option<&dyn ItemAnimator> {
        self.animator.as_deref()
    }

    pub fn add_on_scroll_listener(&mut self, listener: impl FnMut(&mut L, ScrollState) + 'static) {
        self.scroll_listeners.push(Box::new(listener));
    }

    /// Number of items as seen by the surface (after applied notifications).
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Rect) -> Result<()> {
        rtrace!(main = viewport.main, cross = viewport.cross, "set_viewport");
        self.viewport = viewport;
        self.layout()
    }

    pub fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    pub fn scroll_state(&self) -> ScrollState {
        self.scroll_state
    }

    pub fn total_size(&self) -> u64 {
        self.layout.total_size()
    }

    pub fn max_scroll_offset(&self) -> u64 {
        self.layout
            .total_size()
            .saturating_sub(self.viewport.main as u64)
    }

    /// Attached rows, sorted by position.
    pub fn holders(&self) -> &[ViewHolder<A::View>] {
        &self.attached
    }

    pub fn holder_at(&self, position: usize) -> Option<&ViewHolder<A::View>> {
        self.attached
            .binary_search_by_key(&position, |h| h.position)
            .ok()
            .map(|i| &self.attached[i])
    }

    /// The displayed rows as `(position, view)`, sorted by position.
    pub fn displayed(&self) -> impl Iterator<Item = (usize, &A::View)> + '_ {
        self.attached.iter().map(|h| (h.position, &h.view))
    }

    /// Geometry of the attached rows as of the last layout pass.
    pub fn children(&self) -> &[ItemRect] {
        &self.children
    }

    pub fn recycled_view_pool(&self) -> &RecycledViewPool<A::View> {
        &self.pool
    }

    /// Paint commands from every decoration for the current children.
    pub fn draw(&self) -> Vec<DrawCommand> {
        let mut out = Vec::new();
        let orientation = self.layout.orientation();
        for decoration in &self.decorations {
            decoration.on_draw(&self.children, self.item_count, orientation, &mut out);
        }
        out
    }

    /// Applies pending notifications, then lays out and binds the rows in the viewport.
    pub fn layout(&mut self) -> Result<()> {
        self.dispatch_updates()?;
        self.layout_children()
    }

    /// Clicks the row displayed at `position`.
    ///
    /// The adapter receives the position the row was last bound with.
    pub fn click(&mut self, position: usize) -> Result<()> {
        self.layout()?;
        let Some(holder) = self.holder_at(position) else {
            return Err(Error::NotAttached { position });
        };
        let bound_position = holder.bound_position;
        if bound_position != position {
            rwarn!(
                position,
                bound_position,
                "click on a row whose binding is stale"
            );
        }
        rdebug!(position, bound_position, "RecyclerView::click");
        let clicked = self.adapter.on_item_click(bound_position);
        self.layout()?;
        clicked
    }

    /// Scrolls by `delta` along the scroll axis (clamped). Returns the new offset.
    pub fn scroll_by(&mut self, delta: i64) -> Result<u64> {
        self.dispatch_updates()?;
        let target = if delta >= 0 {
            self.scroll_offset.saturating_add(delta as u64)
        } else {
            self.scroll_offset.saturating_sub(delta.unsigned_abs())
        };
        self.scroll_offset = target.min(self.max_scroll_offset());
        rtrace!(delta, offset = self.scroll_offset, "RecyclerView::scroll_by");
        self.layout_children()?;
        Ok(self.scroll_offset)
    }

    /// Scrolls so `position` starts at the top of the viewport (clamped).
    pub fn scroll_to_position(&mut self, position: usize) -> Result<()> {
        self.layout()?;
        let rect = self
            .layout
            .item_rect(position)
            .ok_or(Error::PositionOutOfRange {
                position,
                count: self.item_count,
            })?;
        self.scroll_offset = rect.outer_start().min(self.max_scroll_offset());
        self.layout_children()
    }

    /// Reports a scroll-state transition. The layout manager and every scroll listener are
    /// notified only when the state actually changes.
    pub fn set_scroll_state(&mut self, state: ScrollState) -> Result<()> {
        if self.scroll_state == state {
            return Ok(());
        }
        rdebug!(from = ?self.scroll_state, to = ?state, "scroll state changed");
        self.scroll_state = state;
        self.layout.on_scroll_state_changed(state);
        for listener in &mut self.scroll_listeners {
            listener(&mut self.layout, state);
        }
        self.layout()
    }

    /// Advances the surface clock and the item animator.
    pub fn tick(&mut self, now_ms: u64) {
        self.now_ms = now_ms;
        if let Some(animator) = &mut self.animator {
            animator.advance(now_ms);
        }
    }

    fn dispatch_updates(&mut self) -> Result<()> {
        self.adapter.drain_notifications(&mut self.pending);
        if self.pending.is_empty() {
            return Ok(());
        }
        let pending = core::mem::take(&mut self.pending);
        let mut result = Ok(());
        if pending.contains(&Notification::DataSetChanged) {
            // Positions in the rest of the batch are relative to content that is being
            // replaced anyway, so the whole batch collapses into one reset.
            rdebug!(batch = pending.len(), "data set changed");
            self.reset_to_adapter();
        } else {
            for notification in &pending {
                if let Err(err) = self.apply(*notification) {
                    result = Err(err);
                    break;
                }
            }
        }
        self.pending = pending;
        self.pending.clear();

        let actual = self.adapter.item_count();
        if result.is_ok() && self.item_count != actual {
            result = Err(Error::InconsistentCount {
                expected: self.item_count,
                actual,
            });
        }
        if let Err(err) = result {
            rwarn!(error = %err, "discarding attached rows after a bad notification batch");
            self.reset_to_adapter();
            return Err(err);
        }
        Ok(())
    }

    fn apply(&mut self, notification: Notification) -> Result<()> {
        rtrace!(?notification, item_count = self.item_count, "apply");
        let now_ms = self.now_ms;
        match notification {
            Notification::ItemRangeInserted { start, count } => {
                if start > self.item_count {
                    return Err(Error::PositionOutOfRange {
                        position: start,
                        count: self.item_count,
                    });
                }
                self.item_count = self.item_count.saturating_add(count);
                for holder in &mut self.attached {
                    if holder.position >= start {
                        holder.position += count;
                    }
                }
                if let Some(animator) = &mut self.animator {
                    animator.on_items_inserted(start, count);
                    for position in start..start + count {
                        animator.animate_add(position, now_ms);
                    }
                }
                self.layout.on_items_inserted(start, count);
            }
            Notification::ItemRangeRemoved { start, count } => {
                let end = start.saturating_add(count);
                if end > self.item_count {
                    return Err(Error::RangeOutOfBounds {
                        start,
                        len: count,
                        count: self.item_count,
                    });
                }
                self.item_count -= count;
                if let Some(animator) = &mut self.animator {
                    animator.on_items_removed(start, count);
                }
                let mut kept = Vec::with_capacity(self.attached.len());
                for mut holder in core::mem::take(&mut self.attached) {
                    if holder.position >= end {
                        let from = holder.position;
                        holder.position -= count;
                        if let Some(animator) = &mut self.animator {
                            animator.animate_move(from, holder.position, now_ms);
                        }
                        kept.push(holder);
                    } else if holder.position >= start {
                        if let Some(animator) = &mut self.animator {
                            animator.animate_remove(holder.position, now_ms);
                        }
                        recycle(&mut self.pool, holder);
                    } else {
                        kept.push(holder);
                    }
                }
                self.attached = kept;
                self.layout.on_items_removed(start, count);
            }
            Notification::ItemRangeChanged { start, count } => {
                let end = start.saturating_add(count);
                if end > self.item_count {
                    return Err(Error::RangeOutOfBounds {
                        start,
                        len: count,
                        count: self.item_count,
                    });
                }
                for holder in &mut self.attached {
                    if (start..end).contains(&holder.position) {
                        holder.needs_bind = true;
                        if let Some(animator) = &mut self.animator {
                            animator.animate_change(holder.position, now_ms);
                        }
                    }
                }
                self.layout.on_items_changed(start, count);
            }
            Notification::DataSetChanged => self.reset_to_adapter(),
        }
        Ok(())
    }

    fn layout_children(&mut self) -> Result<()> {
        self.run_layout();
        let max = self.max_scroll_offset();
        if self.scroll_offset > max {
            // The content shrank below the viewport end.
            self.scroll_offset = max;
            self.run_layout();
        }
        self.sync_holders()
    }

    fn run_layout(&mut self) {
        let count = self.item_count;
        let orientation = self.layout.orientation();
        let adapter = &self.adapter;
        let decorations = &self.decorations;
        let extent = |position: usize| adapter.item_extent(position);
        let insets = |position: usize| {
            decorations.iter().fold(Insets::ZERO, |acc, d| {
                acc.combine(d.item_offsets(position, count, orientation))
            })
        };
        let ctx = LayoutContext::new(
            count,
            self.viewport,
            self.scroll_offset,
            self.options.overscan,
            &extent,
            &insets,
        );
        self.layout.layout_children(&ctx, &mut self.children);
    }

    fn sync_holders(&mut self) -> Result<()> {
        let children = core::mem::take(&mut self.children);
        let result = self.attach_children(&children);
        self.children = children;
        result
    }

    fn attach_children(&mut self, children: &[ItemRect]) -> Result<()> {
        let mut previous = core::mem::take(&mut self.attached);
        previous.sort_by_key(|h| h.position);

        let mut next = Vec::with_capacity(children.len());
        let mut prev_iter = previous.into_iter().peekable();
        let mut result = Ok(());
        for child in children {
            let position = child.position;
            // Holders before this child are no longer laid out.
            while let Some(h) = prev_iter.next_if(|h| h.position < position) {
                recycle(&mut self.pool, h);
            }
            let view_type = self.adapter.item_view_type(position);
            let mut holder = match prev_iter.next_if(|h| h.position == position) {
                Some(h) if h.view_type == view_type => h,
                Some(h) => {
                    recycle(&mut self.pool, h);
                    self.obtain(view_type, position)
                }
                None => self.obtain(view_type, position),
            };
            if holder.needs_bind {
                if let Err(err) = self.adapter.bind_view(&mut holder.view, position) {
                    rwarn!(position, error = %err, "bind_view failed");
                    recycle(&mut self.pool, holder);
                    result = Err(err);
                    break;
                }
                holder.bound_position = position;
                holder.needs_bind = false;
            }
            next.push(holder);
        }
        for h in prev_iter {
            recycle(&mut self.pool, h);
        }
        self.attached = next;
        result
    }

    fn obtain(&mut self, view_type: ViewType, position: usize) -> ViewHolder<A::View> {
        let view = match self.pool.take(view_type) {
            Some(view) => view,
            None => {
                rtrace!(view_type, position, "create_view");
                self.adapter.create_view(view_type)
            }
        };
        ViewHolder::new(view, view_type, position)
    }

    fn reset_to_adapter(&mut self) {
        self.recycle_all();
        self.item_count = self.adapter.item_count();
        self.layout.on_data_set_changed();
        if let Some(animator) = &mut self.animator {
            animator.on_data_set_changed();
        }
    }

    fn recycle_all(&mut self) {
        for holder in core::mem::take(&mut self.attached) {
            recycle(&mut self.pool, holder);
        }
    }
}

fn recycle<V>(pool: &mut RecycledViewPool<V>, holder: ViewHolder<V>) {
    let view_type = holder.view_type;
    if !pool.put(view_type, holder.into_view()) {
        rtrace!(view_type, "recycled view pool full, dropping view");
    }
}

impl<A: Adapter + core::fmt::Debug, L: core::fmt::Debug> core::fmt::Debug for RecyclerView<A, L> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RecyclerView")
            .field("adapter", &self.adapter)
            .field("layout", &self.layout)
            .field("options", &self.options)
            .field("item_count", &self.item_count)
            .field("attached", &self.attached.len())
            .field("viewport", &self.viewport)
            .field("scroll_offset", &self.scroll_offset)
            .field("scroll_state", &self.scroll_state)
            .finish_non_exhaustive()
    }
}
