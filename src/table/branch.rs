//! Per-slot membership branches.
//!
//! A branch is the second level of a sparse table: a growable array of
//! "seen" flags indexed by remainder, owned exclusively by one
//! `(quotient, sign)` slot. Two layouts are provided behind the
//! [`Branch`] trait:
//!
//! - [`ByteBranch`]: one byte per flag — cheap access, 8x the memory
//! - [`BitBranch`]: one bit per flag — a shift and a mask per access,
//!   one eighth of the memory
//!
//! Both start unallocated (an empty `Vec` owns no heap memory) and grow
//! by reallocation-and-copy to exactly the requested length. A branch
//! never shrinks: its flag capacity is always at least one more than the
//! greatest remainder it has ever been asked to hold.
//!
//! # Examples
//!
//! ```rust
//! use firstseen::table::{BitBranch, Branch, ByteBranch};
//!
//! let mut branch = ByteBranch::default();
//! branch.ensure_capacity(10);
//! assert!(!branch.test_and_set(9)); // first sighting
//! assert!(branch.test_and_set(9));  // duplicate
//!
//! let mut packed = BitBranch::default();
//! packed.ensure_capacity(10);
//! assert!(!packed.test_and_set(9));
//! assert!(packed.test_and_set(9));
//! ```

use crate::addressing::Sign;

/// A growable set of "seen" flags indexed by remainder.
///
/// Callers must [`ensure_capacity`](Branch::ensure_capacity) before
/// testing a flag; [`test_and_set`](Branch::test_and_set) panics on an
/// index past the ensured capacity, as an out-of-capacity access is a
/// table bug rather than a data condition.
pub trait Branch: Default {
    /// Grows the branch so that flag `min_flags - 1` is addressable.
    ///
    /// An unallocated branch allocates exactly `min_flags` zeroed flags;
    /// a shorter branch reallocates to exactly `min_flags`, preserving
    /// every flag already set. A branch that is already long enough is
    /// left untouched. Branches never shrink.
    fn ensure_capacity(&mut self, min_flags: usize);

    /// Tests the flag at `index`, setting it when clear.
    ///
    /// Returns `true` when the flag was already set (the remainder was
    /// seen before) and `false` after setting a clear flag. The flag for
    /// a given index transitions clear-to-set at most once over the
    /// branch's lifetime.
    fn test_and_set(&mut self, index: usize) -> bool;

    /// Number of flags currently addressable.
    fn flag_capacity(&self) -> usize;
}

/// Byte-per-flag branch layout.
///
/// Any non-zero byte counts as set. This is the layout to pick when
/// access cost matters more than footprint.
#[derive(Debug, Default, Clone)]
pub struct ByteBranch {
    flags: Vec<u8>,
}

impl Branch for ByteBranch {
    fn ensure_capacity(&mut self, min_flags: usize) {
        if self.flags.len() < min_flags {
            self.flags.resize(min_flags, 0);
        }
    }

    fn test_and_set(&mut self, index: usize) -> bool {
        let flag = &mut self.flags[index];
        if *flag != 0 {
            return true;
        }
        *flag = 1;
        false
    }

    fn flag_capacity(&self) -> usize {
        self.flags.len()
    }
}

/// Bit-per-flag branch layout.
///
/// Packs 8 flags per byte: flag `i` lives at bit `i % 8` of byte
/// `i / 8`, least significant bit first. Same membership semantics as
/// [`ByteBranch`] at one eighth of the memory.
#[derive(Debug, Default, Clone)]
pub struct BitBranch {
    bytes: Vec<u8>,
    flag_count: usize,
}

impl Branch for BitBranch {
    fn ensure_capacity(&mut self, min_flags: usize) {
        if self.flag_count < min_flags {
            let min_bytes = min_flags.div_ceil(8);
            if self.bytes.len() < min_bytes {
                self.bytes.resize(min_bytes, 0);
            }
            self.flag_count = min_flags;
        }
    }

    fn test_and_set(&mut self, index: usize) -> bool {
        assert!(index < self.flag_count, "bit index past ensured capacity");
        let mask = 1u8 << (index % 8);
        let byte = &mut self.bytes[index / 8];
        if *byte & mask != 0 {
            return true;
        }
        *byte |= mask;
        false
    }

    fn flag_capacity(&self) -> usize {
        self.flag_count
    }
}

/// One top-level table slot: the pair of branches for one quotient.
///
/// Positive and non-positive values of equal magnitude share a quotient
/// but must never share a flag, so each slot carries one branch per
/// sign. Both branches start unallocated.
#[derive(Debug, Default, Clone)]
pub struct Slot<B: Branch> {
    positive: B,
    non_positive: B,
}

impl<B: Branch> Slot<B> {
    /// Borrows the branch recording values of the given sign.
    pub fn branch_mut(&mut self, sign: Sign) -> &mut B {
        match sign {
            Sign::Positive => &mut self.positive,
            Sign::NonPositive => &mut self.non_positive,
        }
    }

    /// Marks a remainder as seen on the branch for `sign`, growing that
    /// branch first so the flag is addressable.
    ///
    /// Returns `true` when the remainder was already recorded.
    pub fn test_and_set(&mut self, sign: Sign, remainder: u32) -> bool {
        let index = remainder as usize;
        let branch = self.branch_mut(sign);
        branch.ensure_capacity(index + 1);
        branch.test_and_set(index)
    }
}

#[cfg(test)]
mod tests {
    use super::{BitBranch, Branch, ByteBranch, Slot};
    use crate::addressing::Sign;

    #[test]
    fn byte_branch_grows_to_exact_length_and_keeps_flags() {
        let mut branch = ByteBranch::default();
        branch.ensure_capacity(4);
        assert_eq!(branch.flag_capacity(), 4);
        assert!(!branch.test_and_set(3));

        branch.ensure_capacity(100);
        assert_eq!(branch.flag_capacity(), 100);
        assert!(branch.test_and_set(3));
        assert!(!branch.test_and_set(99));
    }

    #[test]
    fn bit_branch_rounds_capacity_up_to_whole_bytes() {
        let mut branch = BitBranch::default();
        branch.ensure_capacity(1);
        assert_eq!(branch.flag_capacity(), 1);
        assert!(!branch.test_and_set(0));

        // Flags 1..8 share the first byte but must read as clear.
        branch.ensure_capacity(8);
        for index in 1..8 {
            assert!(!branch.test_and_set(index));
        }
    }

    #[test]
    fn branches_never_shrink() {
        let mut branch = ByteBranch::default();
        branch.ensure_capacity(50);
        branch.ensure_capacity(10);
        assert_eq!(branch.flag_capacity(), 50);
    }

    #[test]
    fn slot_keeps_signs_separate() {
        let mut slot: Slot<ByteBranch> = Slot::default();
        assert!(!slot.test_and_set(Sign::Positive, 5));
        assert!(!slot.test_and_set(Sign::NonPositive, 5));
        assert!(slot.test_and_set(Sign::Positive, 5));
        assert!(slot.test_and_set(Sign::NonPositive, 5));
    }
}
