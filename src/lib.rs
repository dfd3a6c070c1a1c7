//! # firstseen
//!
//! First-occurrence integer deduplication backed by sparse two-level
//! membership tables.
//!
//! ## Overview
//!
//! This library filters a sequence of signed 32-bit integers down to the
//! subsequence containing only the first occurrence of each distinct
//! value, in original relative order. The interesting part is how
//! membership is tested: instead of hashing, every value is decomposed
//! into a `(sign, quotient, remainder)` address with a fixed modulus, and
//! the address indexes a two-level table that allocates per-bucket
//! storage only as buckets are actually touched.
//!
//! Several strategies with different time/space tradeoffs are provided:
//!
//! - **Sparse tables**: a fixed-capacity table, a dynamically growing
//!   table, and a bit-packed variant storing one bit per candidate value
//! - **Baselines**: two quadratic scans and a hash-set filter, kept as
//!   correctness oracles and benchmark reference points
//!
//! All strategies produce identical output for identical input.
//!
//! ## Example
//!
//! ```rust
//! use firstseen::prelude::*;
//!
//! let input = [16, 17, 2, 17, 4, 2, 97, 4, 17, 56];
//! let unique = filter(&input, Strategy::DynamicSparse)?;
//! assert_eq!(unique, vec![16, 17, 2, 4, 97, 56]);
//! # Ok::<(), firstseen::engine::FilterError>(())
//! ```
//!
//! ## Structure
//!
//! - [`addressing`]: the quotient/remainder address decomposition
//! - [`table`]: the branch stores and the sparse table family
//! - [`engine`]: the strategy selector and the `filter` façade

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and the `filter` entry point.
///
/// # Usage
///
/// ```rust
/// use firstseen::prelude::*;
/// ```
pub mod prelude {
    pub use crate::addressing::{Address, MODULUS, QUOTIENT_BOUND, Sign};
    pub use crate::engine::{FilterError, Strategy, filter, filter_with};
    pub use crate::table::{
        BitBranch, BitPackedTable, Branch, ByteBranch, DynamicSparseTable, DynamicTable,
        FixedSparseTable, FixedTable, Membership, OutOfBoundsError,
    };
}

pub mod addressing;
pub mod engine;
pub mod table;

#[cfg(test)]
mod tests {
    use crate::engine::{Strategy, filter};

    #[test]
    fn library_smoke_test() {
        let unique = filter(&[1, 1, 2], Strategy::BitPacked).unwrap();
        assert_eq!(unique, vec![1, 2]);
    }
}
