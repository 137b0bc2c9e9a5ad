use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::ViewType;

/// Default number of detached views kept per view type.
pub const DEFAULT_MAX_RECYCLED_VIEWS: usize = 5;

/// Detached views waiting to be rebound, grouped by view type.
#[derive(Clone, Debug)]
pub struct RecycledViewPool<V> {
    scrap: BTreeMap<ViewType, Vec<V>>,
    max_per_type: usize,
}

impl<V> Default for RecycledViewPool<V> {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RECYCLED_VIEWS)
    }
}

impl<V> RecycledViewPool<V> {
    pub fn new(max_per_type: usize) -> Self {
        Self {
            scrap: BTreeMap::new(),
            max_per_type,
        }
    }

    pub fn max_per_type(&self) -> usize {
        self.max_per_type
    }

    /// Changes the cap; views beyond the new cap are dropped.
    pub fn set_max_per_type(&mut self, max_per_type: usize) {
        self.max_per_type = max_per_type;
        for views in self.scrap.values_mut() {
            views.truncate(max_per_type);
        }
    }

    /// Returns a view to the pool. Returns `false` when the pool is full and the view is dropped.
    pub fn put(&mut self, view_type: ViewType, view: V) -> bool {
        let views = self.scrap.entry(view_type).or_default();
        if views.len() >= self.max_per_type {
            return false;
        }
        views.push(view);
        true
    }

    pub fn take(&mut self, view_type: ViewType) -> Option<V> {
        self.scrap.get_mut(&view_type).and_then(Vec::pop)
    }

    pub fn len(&self, view_type: ViewType) -> usize {
        self.scrap.get(&view_type).map_or(0, Vec::len)
    }

    pub fn total(&self) -> usize {
        self.scrap.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    pub fn clear(&mut self) {
        self.scrap.clear();
    }
}
