//! Edge-list provider turning delimited text into a reference [`Graph`].
//!
//! Each record holds two non-negative integer node identifiers. The format is
//! configurable through [`EdgeListFormat`], with presets for comma-separated
//! files carrying a header row and for SNAP-style tab-separated dumps.
//!
//! [`Graph`]: netgen_core::Graph

mod errors;
mod format;
mod provider;

pub use crate::{
    errors::EdgeListError,
    format::{Delimiter, EdgeListFormat},
    provider::EdgeListProvider,
};
