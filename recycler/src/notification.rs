/// A change to an item list, as observed by the rendering surface.
///
/// Positions refer to the list *after* every earlier notification in the same batch has been
/// applied, in emission order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Notification {
    /// `count` items were inserted starting at `start`.
    ItemRangeInserted { start: usize, count: usize },
    /// `count` items were removed starting at `start`.
    ///
    /// On its own this only shifts attached rows; it does not rebind them.
    ItemRangeRemoved { start: usize, count: usize },
    /// Items in `[start, start + count)` must be rebound.
    ItemRangeChanged { start: usize, count: usize },
    /// Everything may have changed; every attached row is discarded.
    DataSetChanged,
}

impl Notification {
    /// Whether the notification changes the number or order of items.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::ItemRangeInserted { .. } | Self::ItemRangeRemoved { .. } | Self::DataSetChanged
        )
    }
}
