//! Sparse two-level membership tables.
//!
//! This module provides the table family behind the sparse filtering
//! strategies. A table is an array of [`Slot`]s indexed by quotient;
//! each slot lazily owns two [`Branch`]es (one per sign) indexed by
//! remainder. Testing a value for membership touches exactly one flag.
//!
//! Three concrete shapes cover the tradeoff space:
//!
//! - [`FixedSparseTable`]: slot array sized once to cover every `i32`
//!   quotient; out-of-range quotients are a loud error, never a wrap
//! - [`DynamicSparseTable`]: slot array starts small and grows
//!   geometrically when an out-of-range quotient appears
//! - [`BitPackedTable`]: the dynamic table with bit-packed branches,
//!   trading a shift and a mask per access for an 8x smaller footprint
//!
//! All three implement [`Membership`], the one-method seam the filtering
//! engine streams values through. Ownership is strictly tree-shaped —
//! engine owns table, table owns slots, slot owns branches — so a table
//! and all of its branches are released together when it goes out of
//! scope at the end of a filter call.
//!
//! # Examples
//!
//! ```rust
//! use firstseen::addressing::Address;
//! use firstseen::table::{DynamicSparseTable, Membership};
//!
//! let mut table = DynamicSparseTable::new();
//! assert_eq!(table.test_and_set(Address::of(42)), Ok(false));
//! assert_eq!(table.test_and_set(Address::of(42)), Ok(true));
//! assert_eq!(table.test_and_set(Address::of(-42)), Ok(false));
//! ```

mod branch;
mod dynamic;
mod fixed;

pub use branch::{BitBranch, Branch, ByteBranch, Slot};
pub use dynamic::{BitPackedTable, DynamicSparseTable, DynamicTable};
pub use fixed::{FixedSparseTable, FixedTable};

use crate::addressing::Address;

/// Error raised when an address names a quotient a fixed-capacity table
/// cannot hold.
///
/// Silently clipping or wrapping the quotient would let distinct values
/// share a flag and corrupt the uniqueness guarantee, so the access
/// fails instead and the caller must pick a capacity that bounds its
/// input domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfBoundsError {
    /// The quotient that was addressed.
    pub quotient: u32,
    /// The table's slot capacity.
    pub capacity: usize,
}

impl std::fmt::Display for OutOfBoundsError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "quotient {} is out of bounds for a table of {} slots",
            self.quotient, self.capacity
        )
    }
}

impl std::error::Error for OutOfBoundsError {}

/// The membership seam between the filtering engine and a table shape.
///
/// A table records each `(sign, quotient, remainder)` triple at most
/// once; the first test of a triple answers `false` and every later test
/// answers `true`.
pub trait Membership {
    /// Tests whether `address` was seen before, recording it when not.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBoundsError`] when the quotient exceeds a
    /// fixed-capacity table's bound. Growing table shapes never fail.
    fn test_and_set(&mut self, address: Address) -> Result<bool, OutOfBoundsError>;
}
