use alloc::vec::Vec;

use crate::{Error, Notification, Result};

/// An ordered, position-addressed item sequence that records change notifications.
///
/// Prefer the paired operations (`remove_at`, `insert_at`, `set`, `replace_all`): each one
/// mutates the data and queues every notification the surface needs to stay aligned with it.
/// The `notify_*` methods are the raw building blocks; a caller using them together with
/// `items_mut` is responsible for following every removal or insertion with a range change that
/// covers the shifted tail.
#[derive(Clone, Debug, Default)]
pub struct ItemList<T> {
    items: Vec<T>,
    pending: Vec<Notification>,
}

impl<T> ItemList<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            pending: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&T> {
        self.items.get(position)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Returns the item at `position` or a `PositionOutOfRange` error.
    pub fn try_get(&self, position: usize) -> Result<&T> {
        self.items.get(position).ok_or(Error::PositionOutOfRange {
            position,
            count: self.items.len(),
        })
    }

    /// Removes the item at `position` and queues the removal together with a range change
    /// covering every position from `position` to the new end.
    pub fn remove_at(&mut self, position: usize) -> Result<T> {
        self.check_position(position)?;
        let item = self.items.remove(position);
        rtrace!(position, remaining = self.items.len(), "ItemList::remove_at");
        self.pending.push(Notification::ItemRangeRemoved {
            start: position,
            count: 1,
        });
        self.push_tail_changed(position);
        Ok(item)
    }

    /// Inserts `item` at `position` (which may equal `len`) and queues the insertion together
    /// with a range change covering every position from `position` to the new end.
    pub fn insert_at(&mut self, position: usize, item: T) -> Result<()> {
        if position > self.items.len() {
            return Err(Error::PositionOutOfRange {
                position,
                count: self.items.len(),
            });
        }
        self.items.insert(position, item);
        rtrace!(position, len = self.items.len(), "ItemList::insert_at");
        self.pending.push(Notification::ItemRangeInserted {
            start: position,
            count: 1,
        });
        self.push_tail_changed(position);
        Ok(())
    }

    pub fn push(&mut self, item: T) {
        let position = self.items.len();
        self.items.push(item);
        self.pending.push(Notification::ItemRangeInserted {
            start: position,
            count: 1,
        });
        self.push_tail_changed(position);
    }

    /// Replaces the item at `position` and returns the previous one.
    pub fn set(&mut self, position: usize, item: T) -> Result<T> {
        self.check_position(position)?;
        let prev = core::mem::replace(&mut self.items[position], item);
        self.pending.push(Notification::ItemRangeChanged {
            start: position,
            count: 1,
        });
        Ok(prev)
    }

    /// Replaces every item; the surface discards all attached rows.
    pub fn replace_all(&mut self, items: Vec<T>) {
        self.items = items;
        self.pending.clear();
        self.pending.push(Notification::DataSetChanged);
    }

    /// Direct access to the backing storage. No notification is queued.
    pub fn items_mut(&mut self) -> &mut Vec<T> {
        &mut self.items
    }

    /// Queues a single-item removal at `position` without any range change.
    ///
    /// The data must already reflect the removal, so `position` may equal the new length.
    pub fn notify_item_removed(&mut self, position: usize) -> Result<()> {
        if position > self.items.len() {
            rwarn!(position, len = self.items.len(), "notify_item_removed out of range");
            return Err(Error::PositionOutOfRange {
                position,
                count: self.items.len(),
            });
        }
        self.pending.push(Notification::ItemRangeRemoved {
            start: position,
            count: 1,
        });
        Ok(())
    }

    /// Queues a single-item insertion at `position` without any range change.
    pub fn notify_item_inserted(&mut self, position: usize) -> Result<()> {
        self.check_position(position)?;
        self.pending.push(Notification::ItemRangeInserted {
            start: position,
            count: 1,
        });
        Ok(())
    }

    pub fn notify_item_changed(&mut self, position: usize) -> Result<()> {
        self.notify_item_range_changed(position, 1)
    }

    /// Queues a rebind of `[start, start + count)`.
    pub fn notify_item_range_changed(&mut self, start: usize, count: usize) -> Result<()> {
        let len = self.items.len();
        if start.checked_add(count).is_none_or(|end| end > len) {
            rwarn!(start, count, len, "notify_item_range_changed out of bounds");
            return Err(Error::RangeOutOfBounds {
                start,
                len: count,
                count: len,
            });
        }
        if count > 0 {
            self.pending.push(Notification::ItemRangeChanged { start, count });
        }
        Ok(())
    }

    pub fn notify_data_set_changed(&mut self) {
        self.pending.push(Notification::DataSetChanged);
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Moves every queued notification into `out`, in emission order.
    pub fn drain_notifications(&mut self, out: &mut Vec<Notification>) {
        out.append(&mut self.pending);
    }

    fn check_position(&self, position: usize) -> Result<()> {
        if position >= self.items.len() {
            return Err(Error::PositionOutOfRange {
                position,
                count: self.items.len(),
            });
        }
        Ok(())
    }

    fn push_tail_changed(&mut self, position: usize) {
        let tail = self.items.len().saturating_sub(position);
        if tail > 0 {
            self.pending.push(Notification::ItemRangeChanged {
                start: position,
                count: tail,
            });
        }
    }
}

impl<T> From<Vec<T>> for ItemList<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}
