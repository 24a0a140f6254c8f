//! Conversion pieces shared across formats.

pub mod normalize;
pub mod table;
