//! Strategy selection and the filtering façade.
//!
//! [`filter`] is the single entry point: it instantiates the table (or
//! baseline) the chosen [`Strategy`] names, streams every input element
//! through it once, and returns the unique subsequence. The table lives
//! exactly as long as the call — nothing is shared across calls, and
//! the drop at the end of the call releases the whole ownership tree.
//!
//! Every strategy implements the same contract: the output retains only
//! the first occurrence of each distinct value, in original relative
//! order, and its length is the number of distinct values in the input.
//!
//! # Examples
//!
//! ```rust
//! use firstseen::engine::{FilterError, Strategy, filter};
//!
//! let input = [-5, 5, -5, 0, 0];
//! let unique = filter(&input, Strategy::BitPacked)?;
//! assert_eq!(unique, vec![-5, 5, 0]);
//! assert_eq!(unique.len(), 3);
//!
//! assert_eq!(filter(&[], Strategy::BitPacked), Err(FilterError::EmptyInput));
//! # Ok::<(), FilterError>(())
//! ```

mod error;
mod scan;

pub use error::FilterError;

use crate::addressing::Address;
use crate::table::{BitPackedTable, DynamicSparseTable, FixedSparseTable, Membership};

/// Selects how membership is tested while filtering.
///
/// All strategies produce identical output; they differ only in time and
/// memory cost. Selecting a strategy is configuration, not data — an
/// unsupported selection cannot be expressed at this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// O(n²) scan of the output built so far.
    BruteForce,
    /// O(n²) scan with incremental max/min shortcuts.
    BruteForceTracked,
    /// Associative-set baseline (`FxHashSet`).
    HashSet,
    /// Fixed-capacity sparse table, byte-per-flag branches.
    FixedSparse,
    /// Growing sparse table, byte-per-flag branches.
    DynamicSparse,
    /// Growing sparse table, bit-per-flag branches.
    BitPacked,
}

impl Strategy {
    /// Every selectable strategy, in declaration order.
    ///
    /// Handy for cross-strategy equivalence checks and benchmark sweeps.
    pub const ALL: [Self; 6] = [
        Self::BruteForce,
        Self::BruteForceTracked,
        Self::HashSet,
        Self::FixedSparse,
        Self::DynamicSparse,
        Self::BitPacked,
    ];
}

/// Filters `input` down to the first occurrence of each distinct value.
///
/// The output is a subsequence of the input: relative order matches
/// first-occurrence order, and its length equals the number of distinct
/// values in the input.
///
/// # Errors
///
/// - [`FilterError::EmptyInput`] when `input` is empty, for every
///   strategy; an empty input is an explicit condition, never an empty
///   success.
/// - [`FilterError::OutOfBounds`] cannot occur through this façade: the
///   fixed table is sized to cover the whole `i32` quotient range. The
///   variant exists for callers driving [`filter_with`] with a narrowed
///   table.
///
/// # Examples
///
/// ```rust
/// use firstseen::engine::{Strategy, filter};
///
/// let unique = filter(&[3, 3, 3], Strategy::FixedSparse)?;
/// assert_eq!(unique, vec![3]);
/// # Ok::<(), firstseen::engine::FilterError>(())
/// ```
pub fn filter(input: &[i32], strategy: Strategy) -> Result<Vec<i32>, FilterError> {
    if input.is_empty() {
        return Err(FilterError::EmptyInput);
    }
    match strategy {
        Strategy::BruteForce => Ok(scan::brute_force(input)),
        Strategy::BruteForceTracked => Ok(scan::brute_force_tracked(input)),
        Strategy::HashSet => Ok(scan::hash_set(input)),
        Strategy::FixedSparse => filter_with(input, FixedSparseTable::new()),
        Strategy::DynamicSparse => filter_with(input, DynamicSparseTable::new()),
        Strategy::BitPacked => filter_with(input, BitPackedTable::new()),
    }
}

/// Streams `input` through a caller-supplied membership table.
///
/// This is the loop the three sparse strategies share: one address
/// decomposition and one [`Membership::test_and_set`] per element. The
/// table is consumed and dropped on return, releasing every branch it
/// allocated.
///
/// # Errors
///
/// Returns [`FilterError::EmptyInput`] for an empty input, like the
/// façade. Propagates [`FilterError::OutOfBounds`] from a fixed-capacity
/// table whose bound does not cover the input domain; no membership is
/// recorded for the offending value and no partial output is returned.
///
/// # Examples
///
/// ```rust
/// use firstseen::engine::filter_with;
/// use firstseen::table::{ByteBranch, FixedTable};
///
/// // A one-slot table only covers magnitudes below the modulus.
/// let narrow = FixedTable::<ByteBranch>::with_capacity(1);
/// assert!(filter_with(&[1, 2, 1], narrow).is_ok());
///
/// let narrow = FixedTable::<ByteBranch>::with_capacity(1);
/// assert!(filter_with(&[70_000], narrow).is_err());
/// ```
pub fn filter_with<T: Membership>(input: &[i32], mut table: T) -> Result<Vec<i32>, FilterError> {
    if input.is_empty() {
        return Err(FilterError::EmptyInput);
    }
    let mut output: Vec<i32> = Vec::with_capacity(input.len());
    for &value in input {
        if !table.test_and_set(Address::of(value))? {
            output.push(value);
        }
    }
    Ok(output)
}
