/// Identifies a family of interchangeable views. Views are only recycled within one type.
pub type ViewType = u32;

/// The scroll axis of a layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

/// Scroll state reported by the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollState {
    /// Not scrolling.
    #[default]
    Idle,
    /// Scrolling under direct user control (drag).
    Dragging,
    /// Animating to a final position (fling) without user input.
    Settling,
}

/// Viewport geometry in axis-relative terms.
///
/// - `main` is the scroll axis size (height for vertical lists)
/// - `cross` is the cross axis size (width for vertical lists)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub main: u32,
    pub cross: u32,
}

/// Extra space reserved around an item by decorations, in axis-relative terms.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Insets {
    /// Before the item on the scroll axis (top for vertical lists).
    pub leading: u32,
    /// After the item on the scroll axis (bottom for vertical lists).
    pub trailing: u32,
    pub cross_leading: u32,
    pub cross_trailing: u32,
}

impl Insets {
    pub const ZERO: Self = Self {
        leading: 0,
        trailing: 0,
        cross_leading: 0,
        cross_trailing: 0,
    };

    pub fn trailing(trailing: u32) -> Self {
        Self {
            trailing,
            ..Self::ZERO
        }
    }

    /// Total inset on the scroll axis.
    pub fn main(&self) -> u32 {
        self.leading.saturating_add(self.trailing)
    }

    /// Component-wise sum, used when several decorations apply to one item.
    pub fn combine(self, other: Self) -> Self {
        Self {
            leading: self.leading.saturating_add(other.leading),
            trailing: self.trailing.saturating_add(other.trailing),
            cross_leading: self.cross_leading.saturating_add(other.cross_leading),
            cross_trailing: self.cross_trailing.saturating_add(other.cross_trailing),
        }
    }
}

/// A 32-bit ARGB colour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color(pub u32);

/// Placement of one laid-out item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemRect {
    pub position: usize,
    /// Lane index for multi-lane layouts; always `0` for linear layouts.
    pub span: usize,
    /// Start of the content on the scroll axis (after `insets.leading`).
    pub main_start: u64,
    /// Content size on the scroll axis (excludes insets).
    pub main_size: u32,
    pub cross_start: u32,
    pub cross_size: u32,
    pub insets: Insets,
}

impl ItemRect {
    pub fn main_end(&self) -> u64 {
        self.main_start.saturating_add(self.main_size as u64)
    }

    /// Start of the decorated bounds on the scroll axis.
    pub fn outer_start(&self) -> u64 {
        self.main_start.saturating_sub(self.insets.leading as u64)
    }

    /// End of the decorated bounds on the scroll axis.
    pub fn outer_end(&self) -> u64 {
        self.main_end().saturating_add(self.insets.trailing as u64)
    }

    /// Whether the decorated bounds intersect `[start, end)` on the scroll axis.
    pub fn intersects(&self, start: u64, end: u64) -> bool {
        self.outer_start() < end && self.outer_end() > start
    }
}
