use recycler::{Result, ScrollState};

mod list;
mod staggered;

pub use list::{LIST_TITLE, ListScreen};
pub use staggered::{STAGGERED_TITLE, StaggeredScreen};

/// A demo screen: a title above one list surface, driven by host events.
pub trait Screen {
    fn title(&self) -> &'static str;

    /// Clicks the row displayed at `position`.
    fn click(&mut self, position: usize) -> Result<()>;

    /// Scrolls by `delta`; returns the new offset.
    fn scroll_by(&mut self, delta: i64) -> Result<u64>;

    fn set_scroll_state(&mut self, state: ScrollState) -> Result<()>;

    /// Advances animations.
    fn tick(&mut self, now_ms: u64);

    /// The displayed rows as text, in position order.
    fn snapshot(&self) -> Vec<String>;
}
