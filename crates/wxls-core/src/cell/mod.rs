//! Cell coordinate types
//!
//! This module contains:
//! - [`Cell`] - A single coordinate with an optional sheet (e.g., "Sheet1!B2")
//! - [`AnchorStyle`] - Which axes of a reference are absolute ("$B$2")

mod address;
mod anchor;

pub use address::Cell;
pub use anchor::AnchorStyle;
