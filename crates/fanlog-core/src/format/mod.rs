//! Log line formatting

mod composer;

pub use composer::{compose, FormatComposer};
