use crate::ViewType;

/// An attached row: a view plus the bookkeeping the surface needs to keep it aligned.
#[derive(Clone, Debug)]
pub struct ViewHolder<V> {
    pub(crate) view: V,
    pub(crate) view_type: ViewType,
    pub(crate) position: usize,
    pub(crate) bound_position: usize,
    pub(crate) needs_bind: bool,
}

impl<V> ViewHolder<V> {
    pub(crate) fn new(view: V, view_type: ViewType, position: usize) -> Self {
        Self {
            view,
            view_type,
            position,
            bound_position: position,
            needs_bind: true,
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_type(&self) -> ViewType {
        self.view_type
    }

    /// The adapter position this row currently occupies.
    pub fn position(&self) -> usize {
        self.position
    }

    /// The position the row was bound with. Clicks are dispatched with this value.
    ///
    /// It differs from [`Self::position`] when rows were shifted by a structural change that
    /// was not followed by a covering range change.
    pub fn bound_position(&self) -> usize {
        self.bound_position
    }

    pub fn is_stale(&self) -> bool {
        self.needs_bind || self.position != self.bound_position
    }

    pub(crate) fn into_view(self) -> V {
        self.view
    }
}
