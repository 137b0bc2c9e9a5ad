//! A headless recycling list surface.
//!
//! The crate models the pieces a list widget is built from without holding any UI objects:
//! an ordered item list that records change notifications, an [`Adapter`] seam that binds
//! items to views, a [`RecyclerView`] that attaches, recycles and rebinds view holders, and
//! layout managers ([`LinearLayoutManager`], [`StaggeredGridLayoutManager`]) that turn item
//! extents into geometry.
//!
//! The host drives everything through explicit events (`layout`, `click`, `scroll_by`,
//! `set_scroll_state`, `tick`). All state lives on one thread.
//!
//! Structural edits should go through the paired operations on [`ItemList`]
//! (`remove_at`, `insert_at`), which emit the structural notification together with a range
//! change covering every shifted position. The raw `notify_*` calls remain available, but a
//! removal without the covering range change leaves attached rows bound to stale positions.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod adapter;
mod animator;
mod decoration;
mod error;
mod fenwick;
mod holder;
mod item_list;
mod layout;
mod notification;
mod options;
mod pool;
mod surface;
mod types;


pub use adapter::{Adapter, ItemBinder, OnItemClick, SingleTypeAdapter};
pub use animator::{AnimationKind, DefaultItemAnimator, Easing, ItemAnimation, ItemAnimator};
pub use decoration::{DividerDecoration, DrawCommand, ItemDecoration};
pub use error::{Error, Result};
pub use holder::ViewHolder;
pub use item_list::ItemList;
pub use layout::{
    GapStrategy, LayoutContext, LayoutManager, LinearLayoutManager, StaggeredGridLayoutManager,
};
pub use notification::Notification;
pub use options::RecyclerOptions;
pub use pool::RecycledViewPool;
pub use surface::{RecyclerView, ScrollListener};
pub use types::{Color, Insets, ItemRect, Orientation, Rect, ScrollState, ViewType};
