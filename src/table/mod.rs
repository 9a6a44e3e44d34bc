// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The presence table and the values it can hold.
//!
//! - Value: an integer known to lie in [-109, 109]
//! - PresenceTable: bitset of values seen in the input

pub mod constants;
pub mod presence;
pub mod value;

pub use constants::*;
pub use presence::PresenceTable;
pub use value::Value;
