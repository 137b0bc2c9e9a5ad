use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::{ItemList, Notification, Result, ViewType};

/// The seam between a data set and the rendering surface.
///
/// The surface only ever addresses items by position. `item_count` must equal the length of
/// the underlying data at every point the surface observes it, i.e. after every batch of
/// notifications returned by `drain_notifications` has been applied.
pub trait Adapter {
    type View;

    fn item_count(&self) -> usize;

    /// Views are only recycled between positions of the same type.
    fn item_view_type(&self, position: usize) -> ViewType {
        let _ = position;
        0
    }

    /// Content size of the item on the scroll axis.
    fn item_extent(&self, position: usize) -> u32;

    fn create_view(&self, view_type: ViewType) -> Self::View;

    /// Refreshes `view` with the item currently at `position`.
    ///
    /// Must be idempotent and must not touch anything except `view`.
    fn bind_view(&self, view: &mut Self::View, position: usize) -> Result<()>;

    /// Called when the row bound at `position` is clicked. May mutate the data, as long as it
    /// queues the matching notifications.
    fn on_item_click(&mut self, position: usize) -> Result<()>;

    fn drain_notifications(&mut self, out: &mut Vec<Notification>);
}

/// Binds one item type to one view type.
pub trait ItemBinder<T> {
    type View;

    fn create(&self) -> Self::View;

    fn bind(&self, view: &mut Self::View, position: usize, item: &T);

    /// Content size of `item` on the scroll axis.
    fn extent(&self, position: usize, item: &T) -> u32;
}

/// A click callback. It receives the item list so it can mutate it, and the clicked position.
pub type OnItemClick<T> = Box<dyn FnMut(&mut ItemList<T>, usize) -> Result<()>>;

/// An adapter for lists with a single view type.
pub struct SingleTypeAdapter<T, B> {
    items: ItemList<T>,
    binder: B,
    on_item_click: Option<OnItemClick<T>>,
}

impl<T, B: ItemBinder<T>> SingleTypeAdapter<T, B> {
    pub fn new(items: impl Into<ItemList<T>>, binder: B) -> Self {
        Self {
            items: items.into(),
            binder,
            on_item_click: None,
        }
    }

    pub fn set_on_item_click(
        &mut self,
        on_item_click: Option<impl FnMut(&mut ItemList<T>, usize) -> Result<()> + 'static>,
    ) {
        self.on_item_click = on_item_click.map(|f| Box::new(f) as _);
    }

    pub fn with_on_item_click(
        mut self,
        on_item_click: impl FnMut(&mut ItemList<T>, usize) -> Result<()> + 'static,
    ) -> Self {
        self.on_item_click = Some(Box::new(on_item_click));
        self
    }

    pub fn items(&self) -> &ItemList<T> {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut ItemList<T> {
        &mut self.items
    }

    pub fn binder(&self) -> &B {
        &self.binder
    }
}

impl<T, B: ItemBinder<T>> Adapter for SingleTypeAdapter<T, B> {
    type View = B::View;

    fn item_count(&self) -> usize {
        self.items.len()
    }

    fn item_extent(&self, position: usize) -> u32 {
        self.items
            .get(position)
            .map_or(0, |item| self.binder.extent(position, item))
    }

    fn create_view(&self, _view_type: ViewType) -> Self::View {
        self.binder.create()
    }

    fn bind_view(&self, view: &mut Self::View, position: usize) -> Result<()> {
        let item = self.items.try_get(position)?;
        self.binder.bind(view, position, item);
        Ok(())
    }

    fn on_item_click(&mut self, position: usize) -> Result<()> {
        self.items.try_get(position)?;
        rdebug!(position, count = self.items.len(), "on_item_click");
        match &mut self.on_item_click {
            Some(f) => f(&mut self.items, position),
            None => Ok(()),
        }
    }

    fn drain_notifications(&mut self, out: &mut Vec<Notification>) {
        self.items.drain_notifications(out);
    }
}

impl<T: core::fmt::Debug, B> core::fmt::Debug for SingleTypeAdapter<T, B> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SingleTypeAdapter")
            .field("items", &self.items)
            .field("on_item_click", &self.on_item_click.is_some())
            .finish_non_exhaustive()
    }
}
