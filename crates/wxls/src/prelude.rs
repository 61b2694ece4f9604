//! Prelude module - common imports for wxls users
//!
//! ```rust
//! use wxls::prelude::*;
//! ```

pub use crate::{
    AnchorStyle,
    // Coordinate types
    Cell,
    // Error types
    Error,
    // Range options
    OrderPolicy,
    Range,
    RangePolicy,
    Result,
    SheetPolicy,
};
