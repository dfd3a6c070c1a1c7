//! Unit tests for the quotient/remainder address decomposition.

use firstseen::addressing::{Address, MODULUS, QUOTIENT_BOUND, Sign};
use rstest::rstest;

#[rstest]
#[case(1, Sign::Positive)]
#[case(i32::MAX, Sign::Positive)]
#[case(0, Sign::NonPositive)]
#[case(-1, Sign::NonPositive)]
#[case(i32::MIN, Sign::NonPositive)]
fn sign_partition(#[case] value: i32, #[case] expected: Sign) {
    assert_eq!(Address::of(value).sign, expected);
}

#[rstest]
#[case(0, 0, 0)]
#[case(65_535, 0, 65_535)] // M - 1
#[case(65_536, 1, 0)] // M
#[case(65_537, 1, 1)] // M + 1
#[case(131_072, 2, 0)] // 2M
fn boundary_magnitudes_decompose_as_expected(
    #[case] value: i32,
    #[case] quotient: u32,
    #[case] remainder: u32,
) {
    let address = Address::of(value);
    assert_eq!(address.quotient, quotient);
    assert_eq!(address.remainder, remainder);
}

#[rstest]
fn negative_boundaries_mirror_positive_magnitudes() {
    for magnitude in [65_535, 65_536, 65_537, 131_072] {
        let positive = Address::of(magnitude);
        let negative = Address::of(-magnitude);
        assert_eq!(positive.quotient, negative.quotient);
        assert_eq!(positive.remainder, negative.remainder);
        assert_ne!(positive.sign, negative.sign);
    }
}

#[rstest]
fn distinct_boundary_magnitudes_get_distinct_addresses() {
    let addresses: Vec<_> = [65_535, 65_536, 65_537, 131_072]
        .into_iter()
        .map(|magnitude| {
            let address = Address::of(magnitude);
            (address.quotient, address.remainder)
        })
        .collect();
    for (left_index, left) in addresses.iter().enumerate() {
        for right in &addresses[left_index + 1..] {
            assert_ne!(left, right);
        }
    }
}

#[rstest]
fn extreme_values_are_addressable() {
    let min = Address::of(i32::MIN);
    let max = Address::of(i32::MAX);
    assert!((min.quotient as usize) < QUOTIENT_BOUND);
    assert!((max.quotient as usize) < QUOTIENT_BOUND);
    assert!(min.remainder < MODULUS);
    assert!(max.remainder < MODULUS);
}
