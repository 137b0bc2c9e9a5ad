use alloc::vec::Vec;

use crate::{Color, Insets, ItemRect, Orientation};

/// A primitive produced by decorations for the host to paint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DrawCommand {
    FillRect {
        main_start: u64,
        main_size: u32,
        cross_start: u32,
        cross_size: u32,
        color: Color,
    },
}

/// Reserves space around items and paints into it.
pub trait ItemDecoration {
    /// Space to reserve around the item at `position` in a list of `count` items.
    ///
    /// Must be a pure function of its arguments.
    fn item_offsets(&self, position: usize, count: usize, orientation: Orientation) -> Insets;

    /// Emits paint commands for the laid-out `children`.
    fn on_draw(
        &self,
        children: &[ItemRect],
        count: usize,
        orientation: Orientation,
        out: &mut Vec<DrawCommand>,
    ) {
        let _ = (children, count, orientation, out);
    }
}

/// A fixed-thickness divider after every item except the last.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DividerDecoration {
    pub thickness: u32,
    pub color: Color,
}

impl Default for DividerDecoration {
    fn default() -> Self {
        Self {
            thickness: 1,
            color: Color(0xFFDD_DDDD),
        }
    }
}

impl DividerDecoration {
    pub fn new(thickness: u32, color: Color) -> Self {
        Self { thickness, color }
    }

    pub fn with_thickness(mut self, thickness: u32) -> Self {
        self.thickness = thickness;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

impl ItemDecoration for DividerDecoration {
    fn item_offsets(&self, position: usize, count: usize, _orientation: Orientation) -> Insets {
        if position.saturating_add(1) < count {
            Insets::trailing(self.thickness)
        } else {
            Insets::ZERO
        }
    }

    fn on_draw(
        &self,
        children: &[ItemRect],
        count: usize,
        _orientation: Orientation,
        out: &mut Vec<DrawCommand>,
    ) {
        if self.thickness == 0 {
            return;
        }
        for child in children {
            if child.position.saturating_add(1) >= count {
                continue;
            }
            out.push(DrawCommand::FillRect {
                main_start: child.main_end(),
                main_size: self.thickness,
                cross_start: child.cross_start,
                cross_size: child.cross_size,
                color: self.color,
            });
        }
    }
}
