#![doc = include_str!("../README.md")]
#![deny(clippy::unwrap_used, rustdoc::broken_intra_doc_links)]

mod bounds;
mod grid;
mod label;
mod lines;

pub use bounds::GeoBounds;
pub use grid::{Grid, GridStyle};
pub use label::{Axis, LabelFormat, UnknownLabelFormat};
