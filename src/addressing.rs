//! Quotient/remainder address decomposition.
//!
//! This module maps a signed 32-bit integer to a sparse-table address:
//! the value's magnitude is split into a quotient and a remainder with a
//! fixed power-of-two modulus, and the sign selects which of the two
//! branches inside a table slot records the value.
//!
//! # Why quotient/remainder?
//!
//! A flat membership array over the full `i32` range would need 2^32
//! flags up front. Splitting the magnitude as `|v| = quotient * M +
//! remainder` lets the table allocate one branch of at most `M` flags per
//! quotient actually observed, so memory tracks the *spread* of the
//! input rather than the size of the domain.
//!
//! # Bijectivity
//!
//! For a fixed modulus the decomposition is a bijection on magnitudes:
//! two distinct magnitudes always differ in quotient or remainder. No two
//! distinct input values can therefore collapse onto one address, which
//! is what makes the membership test exact rather than approximate.
//!
//! # Examples
//!
//! ```rust
//! use firstseen::addressing::{Address, MODULUS, Sign};
//!
//! let address = Address::of(-65_537);
//! assert_eq!(address.sign, Sign::NonPositive);
//! assert_eq!(address.quotient, 1);
//! assert_eq!(address.remainder, 1);
//!
//! // Zero shares the non-positive branch.
//! assert_eq!(Address::of(0).sign, Sign::NonPositive);
//! assert_eq!(Address::of(i32::MAX).quotient, (i32::MAX as u32) / MODULUS);
//! ```

/// The fixed modulus used to split a magnitude into quotient and
/// remainder.
///
/// A power of two balancing bucket count against per-bucket size: with
/// `M = 2^16`, every `i32` magnitude yields a quotient in
/// `0..=32_768` and a remainder in `0..65_536`.
pub const MODULUS: u32 = 1 << 16;

/// Upper bound (exclusive) on quotients produced by [`Address::of`].
///
/// `i32::MIN.unsigned_abs() / MODULUS == 32_768`, so `32_769` slots cover
/// the entire `i32` domain. This is the default capacity of the
/// fixed-capacity table.
pub const QUOTIENT_BOUND: usize = 32_769;

/// Which of a slot's two branches a value belongs to.
///
/// Zero is grouped with the negative values; the partition only has to
/// be consistent, and grouping zero as non-positive keeps the positive
/// branch free of a dedicated zero case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    /// The value is strictly greater than zero.
    Positive,
    /// The value is zero or negative.
    NonPositive,
}

/// A decomposed sparse-table address.
///
/// Derived from a value on the fly and never stored; see [`Address::of`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address {
    /// Branch selector within a slot.
    pub sign: Sign,
    /// Top-level slot index, `|value| / MODULUS`.
    pub quotient: u32,
    /// Flag index within the branch, `|value| % MODULUS`, in
    /// `[0, MODULUS)`.
    pub remainder: u32,
}

impl Address {
    /// Decomposes a value into its sparse-table address.
    ///
    /// Pure and total over the full `i32` range: the magnitude is taken
    /// with [`i32::unsigned_abs`], which is defined for `i32::MIN` as
    /// well, so no input can overflow the decomposition.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use firstseen::addressing::{Address, Sign};
    ///
    /// let address = Address::of(70_000);
    /// assert_eq!(address.sign, Sign::Positive);
    /// assert_eq!(address.quotient, 1);
    /// assert_eq!(address.remainder, 4_464);
    /// ```
    #[must_use]
    pub const fn of(value: i32) -> Self {
        let magnitude = value.unsigned_abs();
        let sign = if value > 0 {
            Sign::Positive
        } else {
            Sign::NonPositive
        };
        Self {
            sign,
            quotient: magnitude / MODULUS,
            remainder: magnitude % MODULUS,
        }
    }
}
