use recycler::{Color, Rect};

/// Settings shared by the demo screens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DemoConfig {
    /// Viewport of every screen (`main` is the height of a vertical list).
    pub viewport: Rect,
    /// Number of rows produced by [`crate::TextData`].
    pub text_items: usize,
    pub row_height: u32,
    /// Thickness of the divider between list rows.
    pub divider_height: u32,
    pub divider_color: Color,
    /// Number of cells produced by [`crate::ImageData`].
    pub image_items: usize,
    pub span_count: usize,
    /// Image heights are drawn from `[image_height_min, image_height_max)`.
    pub image_height_min: u32,
    pub image_height_max: u32,
    pub height_seed: u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            viewport: Rect {
                main: 1920,
                cross: 1080,
            },
            text_items: 30,
            row_height: 48,
            divider_height: 1,
            divider_color: Color(0xFFE0_E0E0),
            image_items: 24,
            span_count: 2,
            image_height_min: 150,
            image_height_max: 450,
            height_seed: 0x5EED,
        }
    }
}

impl DemoConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_viewport(mut self, viewport: Rect) -> Self {
        self.viewport = viewport;
        self
    }

    pub fn with_text_items(mut self, text_items: usize) -> Self {
        self.text_items = text_items;
        self
    }

    pub fn with_row_height(mut self, row_height: u32) -> Self {
        self.row_height = row_height;
        self
    }

    pub fn with_divider(mut self, height: u32, color: Color) -> Self {
        self.divider_height = height;
        self.divider_color = color;
        self
    }

    pub fn with_image_items(mut self, image_items: usize) -> Self {
        self.image_items = image_items;
        self
    }

    pub fn with_span_count(mut self, span_count: usize) -> Self {
        self.span_count = span_count;
        self
    }

    /// Sets the range image heights are drawn from. An empty range yields `min` for every item.
    pub fn with_image_heights(mut self, min: u32, max: u32) -> Self {
        self.image_height_min = min;
        self.image_height_max = max;
        self
    }

    pub fn with_height_seed(mut self, seed: u64) -> Self {
        self.height_seed = seed;
        self
    }
}
