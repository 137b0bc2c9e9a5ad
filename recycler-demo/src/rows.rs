use std::fmt;

use recycler::ItemBinder;

use crate::ImageItem;

/// A bound text row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextRow {
    pub text: String,
    /// Position the row was last bound with.
    pub position: usize,
}

impl fmt::Display for TextRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Binds strings to fixed-height [`TextRow`]s.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextRowBinder {
    row_height: u32,
}

impl TextRowBinder {
    pub fn new(row_height: u32) -> Self {
        Self { row_height }
    }
}

impl ItemBinder<String> for TextRowBinder {
    type View = TextRow;

    fn create(&self) -> TextRow {
        TextRow::default()
    }

    fn bind(&self, view: &mut TextRow, position: usize, item: &String) {
        view.text.clone_from(item);
        view.position = position;
    }

    fn extent(&self, _position: usize, _item: &String) -> u32 {
        self.row_height
    }
}

/// A bound image cell. The image itself is never loaded; the cell only carries its reference.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImageCell {
    pub url: String,
    pub height: u32,
    pub position: usize,
}

impl fmt::Display for ImageCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}px)", self.url, self.height)
    }
}

/// Binds [`ImageItem`]s to [`ImageCell`]s sized by the item's remembered height.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ImageCellBinder;

impl ItemBinder<ImageItem> for ImageCellBinder {
    type View = ImageCell;

    fn create(&self) -> ImageCell {
        ImageCell::default()
    }

    fn bind(&self, view: &mut ImageCell, position: usize, item: &ImageItem) {
        view.url.clone_from(&item.url);
        view.height = item.height;
        view.position = position;
    }

    fn extent(&self, _position: usize, item: &ImageItem) -> u32 {
        item.height
    }
}
