//! Dynamically growing sparse table.

use crate::addressing::{Address, QUOTIENT_BOUND};
use crate::table::branch::{BitBranch, Branch, ByteBranch, Slot};
use crate::table::{Membership, OutOfBoundsError};

/// Slot count a dynamic table starts with.
///
/// 32 slots cover magnitudes up to `32 * MODULUS` (about ±2 million)
/// before the first growth event.
const INITIAL_SLOTS: usize = 32;

/// Sparse table whose slot array grows on demand.
///
/// When a quotient at or past the current length is addressed, the slot
/// array grows to at least `quotient + 1` slots — doubling where that
/// covers the quotient, so that adversarial increasing-quotient inputs
/// cost amortized O(1) per growth rather than O(n²) total. Growth moves
/// the existing slots into the larger array; branch storage is owned by
/// the slots and is never copied or reallocated by a growth event.
///
/// Growth is all-or-nothing: the table either ends up with the larger
/// slot array or (on allocation failure) the process aborts, so no
/// partially-grown table can be observed.
///
/// # Examples
///
/// ```rust
/// use firstseen::addressing::Address;
/// use firstseen::table::{DynamicSparseTable, Membership};
///
/// let mut table = DynamicSparseTable::new();
/// // Quotient 30_000 is far past the initial 32 slots.
/// assert_eq!(table.test_and_set(Address::of(1_966_080_000)), Ok(false));
/// assert_eq!(table.test_and_set(Address::of(1_966_080_000)), Ok(true));
/// ```
#[derive(Debug, Clone)]
pub struct DynamicTable<B: Branch> {
    slots: Vec<Slot<B>>,
}

/// [`DynamicTable`] with the byte-per-flag branch layout.
pub type DynamicSparseTable = DynamicTable<ByteBranch>;

/// [`DynamicTable`] with the bit-per-flag branch layout.
///
/// Same control flow and same output as the byte forms; one eighth of
/// the branch memory for a shift and a mask per access.
pub type BitPackedTable = DynamicTable<BitBranch>;

impl<B: Branch> DynamicTable<B> {
    /// Creates a table with the default initial slot count.
    #[must_use]
    pub fn new() -> Self {
        Self::with_initial_capacity(INITIAL_SLOTS)
    }

    /// Creates a table starting at `slots` top-level slots.
    ///
    /// Mostly useful in tests that want to force growth events early.
    #[must_use]
    pub fn with_initial_capacity(slots: usize) -> Self {
        let mut table = Vec::new();
        table.resize_with(slots, Slot::default);
        Self { slots: table }
    }

    /// Current number of top-level slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Grows the slot array so `quotient_index` is addressable.
    ///
    /// Doubles the current length where doubling reaches the quotient,
    /// capped at [`QUOTIENT_BOUND`] since no `i32` quotient can exceed
    /// it, and never below `quotient_index + 1`.
    fn grow_to_cover(&mut self, quotient_index: usize) {
        let doubled = (self.slots.len() * 2).min(QUOTIENT_BOUND);
        let target = doubled.max(quotient_index + 1);
        self.slots.resize_with(target, Slot::default);
    }
}

impl<B: Branch> Default for DynamicTable<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: Branch> Membership for DynamicTable<B> {
    fn test_and_set(&mut self, address: Address) -> Result<bool, OutOfBoundsError> {
        let quotient = address.quotient as usize;
        if quotient >= self.slots.len() {
            self.grow_to_cover(quotient);
        }
        Ok(self.slots[quotient].test_and_set(address.sign, address.remainder))
    }
}

#[cfg(test)]
mod tests {
    use super::{BitPackedTable, DynamicSparseTable, DynamicTable};
    use crate::addressing::{Address, MODULUS};
    use crate::table::{ByteBranch, Membership};

    fn value_with_quotient(quotient: u32) -> i32 {
        (quotient * MODULUS) as i32
    }

    #[test]
    fn growth_is_geometric_until_the_quotient_is_covered() {
        let mut table: DynamicTable<ByteBranch> = DynamicTable::with_initial_capacity(2);
        table.test_and_set(Address::of(value_with_quotient(3))).unwrap();
        assert_eq!(table.capacity(), 4);
        table.test_and_set(Address::of(value_with_quotient(100))).unwrap();
        assert_eq!(table.capacity(), 101);
    }

    #[test]
    fn growth_preserves_recorded_membership() {
        let mut table = DynamicSparseTable::with_initial_capacity(1);
        assert_eq!(table.test_and_set(Address::of(5)), Ok(false));
        // Two separate growth events.
        assert_eq!(
            table.test_and_set(Address::of(value_with_quotient(10))),
            Ok(false)
        );
        assert_eq!(
            table.test_and_set(Address::of(value_with_quotient(1_000))),
            Ok(false)
        );
        // Nothing recorded before either growth was lost.
        assert_eq!(table.test_and_set(Address::of(5)), Ok(true));
        assert_eq!(
            table.test_and_set(Address::of(value_with_quotient(10))),
            Ok(true)
        );
    }

    #[test]
    fn bit_packed_table_grows_the_same_way() {
        let mut table = BitPackedTable::with_initial_capacity(1);
        assert_eq!(table.test_and_set(Address::of(-7)), Ok(false));
        assert_eq!(
            table.test_and_set(Address::of(-value_with_quotient(500))),
            Ok(false)
        );
        assert_eq!(table.test_and_set(Address::of(-7)), Ok(true));
    }
}
