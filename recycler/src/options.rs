use crate::Rect;
use crate::pool::DEFAULT_MAX_RECYCLED_VIEWS;

/// Configuration for [`crate::RecyclerView`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecyclerOptions {
    /// Initial viewport geometry.
    pub viewport: Rect,
    /// Extra distance laid out beyond each viewport edge.
    pub overscan: u32,
    /// Detached views kept per view type.
    pub max_recycled_views: usize,
}

impl Default for RecyclerOptions {
    fn default() -> Self {
        Self {
            viewport: Rect::default(),
            overscan: 0,
            max_recycled_views: DEFAULT_MAX_RECYCLED_VIEWS,
        }
    }
}

impl RecyclerOptions {
    pub fn new(viewport: Rect) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    pub fn with_viewport(mut self, viewport: Rect) -> Self {
        self.viewport = viewport;
        self
    }

    pub fn with_overscan(mut self, overscan: u32) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_max_recycled_views(mut self, max_recycled_views: usize) -> Self {
        self.max_recycled_views = max_recycled_views;
        self
    }
}
