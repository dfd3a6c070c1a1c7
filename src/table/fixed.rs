//! Fixed-capacity sparse table.

use crate::addressing::{Address, QUOTIENT_BOUND};
use crate::table::branch::{Branch, ByteBranch, Slot};
use crate::table::{Membership, OutOfBoundsError};

/// Sparse table with a slot array sized once at construction.
///
/// The top level is allocated up front, but it only holds empty slots:
/// branch memory still appears lazily, bucket by bucket, as quotients
/// are actually addressed. A quotient at or past the capacity is a
/// caller precondition violation and surfaces as
/// [`OutOfBoundsError`] — the table never wraps or truncates.
///
/// # Examples
///
/// ```rust
/// use firstseen::addressing::Address;
/// use firstseen::table::{FixedSparseTable, Membership};
///
/// let mut table = FixedSparseTable::new();
/// assert_eq!(table.test_and_set(Address::of(7)), Ok(false));
/// assert_eq!(table.test_and_set(Address::of(7)), Ok(true));
/// ```
#[derive(Debug, Clone)]
pub struct FixedTable<B: Branch> {
    slots: Vec<Slot<B>>,
}

/// [`FixedTable`] with the byte-per-flag branch layout.
pub type FixedSparseTable = FixedTable<ByteBranch>;

impl<B: Branch> FixedTable<B> {
    /// Creates a table covering every quotient an `i32` can produce.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(QUOTIENT_BOUND)
    }

    /// Creates a table with `slots` top-level slots.
    ///
    /// Useful when the input domain is known to be narrow, and in tests
    /// exercising the out-of-bounds path.
    #[must_use]
    pub fn with_capacity(slots: usize) -> Self {
        let mut table = Vec::new();
        table.resize_with(slots, Slot::default);
        Self { slots: table }
    }

    /// Number of top-level slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
}

impl<B: Branch> Default for FixedTable<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: Branch> Membership for FixedTable<B> {
    fn test_and_set(&mut self, address: Address) -> Result<bool, OutOfBoundsError> {
        let quotient = address.quotient as usize;
        let capacity = self.slots.len();
        let slot = self
            .slots
            .get_mut(quotient)
            .ok_or(OutOfBoundsError {
                quotient: address.quotient,
                capacity,
            })?;
        Ok(slot.test_and_set(address.sign, address.remainder))
    }
}

#[cfg(test)]
mod tests {
    use super::FixedTable;
    use crate::addressing::Address;
    use crate::table::{ByteBranch, Membership, OutOfBoundsError};

    #[test]
    fn quotient_past_capacity_fails_loudly() {
        let mut table: FixedTable<ByteBranch> = FixedTable::with_capacity(1);
        // Quotient 0 fits, quotient 1 does not.
        assert_eq!(table.test_and_set(Address::of(65_535)), Ok(false));
        assert_eq!(
            table.test_and_set(Address::of(65_536)),
            Err(OutOfBoundsError {
                quotient: 1,
                capacity: 1,
            })
        );
    }

    #[test]
    fn failed_access_does_not_record_membership() {
        let mut table: FixedTable<ByteBranch> = FixedTable::with_capacity(1);
        assert!(table.test_and_set(Address::of(65_536)).is_err());
        // The same value against a big enough table is still unseen.
        let mut full = FixedTable::<ByteBranch>::new();
        assert_eq!(full.test_and_set(Address::of(65_536)), Ok(false));
    }
}
