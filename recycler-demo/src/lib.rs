//! Demo screens for the `recycler` crate.
//!
//! Two screens are provided, both headless and driven by explicit host events:
//!
//! - [`ListScreen`]: a vertical list of text rows separated by dividers; clicking a row reports
//!   its position and data through a [`Feedback`] channel.
//! - [`StaggeredScreen`]: a two-lane staggered grid of image cells; clicking a cell removes it.
//!   Lanes are kept stable while the data changes and rebalanced when scrolling starts or stops.
//!
//! Logging goes through `tracing` under the `recycler_demo` target.
#![forbid(unsafe_code)]

mod config;
mod data;
mod feedback;
mod rows;
mod screen;

#[cfg(test)]
mod tests;

pub use config::DemoConfig;
pub use data::{DataSource, ImageData, ImageItem, TextData};
pub use feedback::{Feedback, SingleToast};
pub use rows::{ImageCell, ImageCellBinder, TextRow, TextRowBinder};
pub use screen::{LIST_TITLE, ListScreen, STAGGERED_TITLE, Screen, StaggeredScreen};
