use crate::DemoConfig;

/// Supplies the initial items of a screen.
pub trait DataSource<T> {
    /// Returns a fresh copy of the items. Called once per screen.
    fn items(&self) -> Vec<T>;
}

/// Labelled text rows: `"item 0"`, `"item 1"`, ...
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextData {
    count: usize,
}

impl Default for TextData {
    fn default() -> Self {
        Self { count: 30 }
    }
}

impl TextData {
    pub fn new(count: usize) -> Self {
        Self { count }
    }

    pub fn from_config(config: &DemoConfig) -> Self {
        Self::new(config.text_items)
    }
}

impl DataSource<String> for TextData {
    fn items(&self) -> Vec<String> {
        (0..self.count).map(|i| format!("item {i}")).collect()
    }
}

/// An image reference and the height it is displayed with.
///
/// The height is fixed when the item is created, so a cell shows the same height every time it
/// is rebound.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageItem {
    pub url: String,
    pub height: u32,
}

/// Image cells with pseudo-random heights.
///
/// The heights only depend on the seed and the range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageData {
    count: usize,
    min_height: u32,
    max_height: u32,
    seed: u64,
}

impl ImageData {
    pub fn new(count: usize, min_height: u32, max_height: u32, seed: u64) -> Self {
        Self {
            count,
            min_height,
            max_height,
            seed,
        }
    }

    pub fn from_config(config: &DemoConfig) -> Self {
        Self::new(
            config.image_items,
            config.image_height_min,
            config.image_height_max,
            config.height_seed,
        )
    }
}

impl DataSource<ImageItem> for ImageData {
    fn items(&self) -> Vec<ImageItem> {
        let span = self.max_height.saturating_sub(self.min_height) as u64;
        let mut state = self.seed;
        (0..self.count)
            .map(|i| {
                let roll = next_random(&mut state);
                let height = if span == 0 {
                    self.min_height
                } else {
                    self.min_height + (roll % span) as u32
                };
                ImageItem {
                    url: format!("https://images.example.com/staggered/{i:03}.jpg"),
                    height,
                }
            })
            .collect()
    }
}

// splitmix64
fn next_random(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
