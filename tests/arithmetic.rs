//! Operator and per-policy behavior across the widths.

use safe_uint::{ArithmeticError, ErrorKind, Op, U128, U16, U32, U64, U8};

#[test]
fn addition_within_range() {
    assert_eq!(U8::new(100) + U8::new(55), U8::new(155));
    assert_eq!(U64::new(1) + U64::new(2), U64::new(3));
    assert_eq!(U128::new(1 << 100) + U128::new(1), U128::new((1 << 100) + 1));
}

#[test]
#[should_panic(expected = "overflow detected in unsigned addition")]
fn addition_overflow_panics() {
    let _ = U32::new(u32::MAX) + U32::new(100);
}

#[test]
fn every_policy_agrees_on_the_overflowing_sum() {
    let a = U32::new(u32::MAX);
    let b = U32::new(100);

    assert_eq!(a.wrapping_add(b), U32::new(99));
    assert_eq!(a.saturating_add(b), U32::MAX);
    assert_eq!(a.checked_add(b), None);
    assert_eq!(a.overflowing_add(b), (U32::new(99), true));
    assert_eq!(a.try_add(b), Err(ArithmeticError::Overflow(Op::Add)));
}

#[test]
#[should_panic(expected = "underflow detected in unsigned subtraction")]
fn subtraction_below_zero_panics() {
    let _ = U8::new(0) - U8::new(1);
}

#[test]
fn zero_minus_one_under_each_policy() {
    let zero = U8::ZERO;
    let one = U8::ONE;

    assert_eq!(zero.wrapping_sub(one), U8::new(255));
    assert_eq!(zero.saturating_sub(one), U8::ZERO);
    assert_eq!(zero.checked_sub(one), None);
    assert_eq!(zero.overflowing_sub(one), (U8::new(255), true));

    let err = zero.try_sub(one).unwrap_err();
    assert_eq!(err, ArithmeticError::Underflow(Op::Sub));
    assert_eq!(err.kind(), ErrorKind::Underflow);
}

#[test]
fn wide_multiplication_under_each_policy() {
    let a = U8::new(200);
    let two = U8::new(2);

    assert_eq!(a.wrapping_mul(two), U8::new(144));
    assert_eq!(a.saturating_mul(two), U8::new(255));
    assert_eq!(a.overflowing_mul(two), (U8::new(144), true));
    assert_eq!(a.checked_mul(two), None);
    assert_eq!(a.try_mul(two), Err(ArithmeticError::Overflow(Op::Mul)));
}

#[test]
#[should_panic(expected = "overflow detected in unsigned multiplication")]
fn multiplication_overflow_panics() {
    let _ = U8::new(200) * U8::new(2);
}

#[test]
#[should_panic(expected = "division by zero")]
fn division_by_zero_panics() {
    let _ = U32::new(u32::MAX) / U32::ZERO;
}

#[test]
#[should_panic(expected = "division by zero")]
fn remainder_by_zero_panics() {
    let _ = U32::new(17) % U32::ZERO;
}

#[test]
fn division_by_zero_under_the_soft_policies() {
    let max = U32::new(u32::MAX);

    assert_eq!(max.checked_div(U32::ZERO), None);
    assert_eq!(max.checked_rem(U32::ZERO), None);
    assert_eq!(max.try_div(U32::ZERO), Err(ArithmeticError::DivideByZero));
    assert_eq!(
        max.try_div(U32::ZERO).unwrap_err().kind(),
        ErrorKind::Domain
    );
}

#[test]
fn division_results_are_exact() {
    assert_eq!(U64::new(84) / U64::new(2), U64::new(42));
    assert_eq!(U64::new(85) % U64::new(2), U64::ONE);
}

#[test]
fn shift_through_the_width_under_each_policy() {
    let one = U8::ONE;

    assert_eq!(one.wrapping_shl(8), U8::ZERO);
    assert_eq!(one.saturating_shl(8), U8::new(255));
    assert_eq!(one.checked_shl(8), None);
    assert_eq!(one.overflowing_shl(8), (U8::ZERO, true));
    assert_eq!(one.try_shl(8), Err(ArithmeticError::Overflow(Op::Shl)));
}

#[test]
#[should_panic(expected = "overflow detected in unsigned left shift")]
fn shifting_a_bit_off_the_top_panics() {
    let _ = U8::new(0b1100_0000) << 2;
}

#[test]
fn in_range_shifts_match_the_raw_result() {
    assert_eq!(U8::new(3) << 2, U8::new(12));
    assert_eq!(U8::new(0b1000_0000) >> 7, U8::ONE);
    assert_eq!(U32::new(u32::MAX) >> 0, U32::new(u32::MAX));

    // Same-typed shift counts work as well.
    assert_eq!(U16::new(3) << U16::new(4), U16::new(48));
    assert_eq!(U16::new(48) >> U16::new(4), U16::new(3));
}

#[test]
#[should_panic(expected = "overflow detected in unsigned right shift")]
fn right_shift_by_the_width_panics() {
    let _ = U16::new(1) >> 16;
}

#[test]
fn right_shift_saturates_to_zero() {
    assert_eq!(U16::new(55).saturating_shr(16), U16::ZERO);
    assert_eq!(U16::new(55).wrapping_shr(20), U16::ZERO);
    assert_eq!(U16::new(55).checked_shr(99), None);
}

#[test]
fn bitwise_operations_never_fail() {
    let a = U8::new(0b1100_1100);
    let b = U8::new(0b1010_1010);

    assert_eq!(a & b, U8::new(0b1000_1000));
    assert_eq!(a | b, U8::new(0b1110_1110));
    assert_eq!(a ^ b, U8::new(0b0110_0110));
    assert_eq!(!a, U8::new(0b0011_0011));
    assert_eq!(!U128::ZERO, U128::MAX);
}

#[test]
fn assign_forms_follow_the_throw_policy() {
    let mut v = U32::new(10);
    v += U32::new(5);
    v -= U32::new(1);
    v *= U32::new(3);
    v /= U32::new(2);
    v %= U32::new(8);
    assert_eq!(v, U32::new(5));

    v <<= 2;
    v >>= 1;
    assert_eq!(v, U32::new(10));

    let mut counter = U8::new(254);
    counter += U8::ONE;
    assert_eq!(counter, U8::MAX);
}

#[test]
#[should_panic(expected = "overflow detected in unsigned addition")]
fn incrementing_past_max_panics() {
    let mut counter = U8::MAX;
    counter += U8::ONE;
}

#[test]
fn strict_family_passes_values_through_on_success() {
    assert_eq!(U32::new(40).strict_add(U32::new(2)), U32::new(42));
    assert_eq!(U32::new(44).strict_sub(U32::new(2)), U32::new(42));
    assert_eq!(U32::new(21).strict_mul(U32::new(2)), U32::new(42));
    assert_eq!(U32::new(84).strict_div(U32::new(2)), U32::new(42));
    assert_eq!(U32::new(85).strict_rem(U32::new(43)), U32::new(42));
    assert_eq!(U32::new(21).strict_shl(1), U32::new(42));
    assert_eq!(U32::new(84).strict_shr(1), U32::new(42));
}

#[test]
fn pow_family() {
    assert_eq!(U32::new(2).try_pow(10), Ok(U32::new(1024)));
    assert_eq!(U8::new(2).checked_pow(8), None);
    assert_eq!(U8::new(2).wrapping_pow(8), U8::ZERO);
    assert_eq!(U8::new(2).saturating_pow(8), U8::MAX);
    assert_eq!(U8::new(2).overflowing_pow(8), (U8::ZERO, true));
}

#[test]
fn bit_helpers_delegate_to_the_raw_value() {
    let v = U32::new(0b0001_0100);

    assert_eq!(v.count_ones(), 2);
    assert_eq!(v.trailing_zeros(), 2);
    assert_eq!(v.leading_zeros(), 27);
    assert_eq!(v.bit_width(), 5);
    assert!(!v.is_power_of_two());
    assert!(U64::new(1 << 40).is_power_of_two());

    assert_eq!(U32::new(17).next_power_of_two(), U32::new(32));
    assert_eq!(U32::new(17).prev_power_of_two(), U32::new(16));
    assert_eq!(U32::ZERO.prev_power_of_two(), U32::ZERO);
    assert_eq!(U8::new(200).checked_next_power_of_two(), None);

    assert_eq!(U16::new(0x1234).rotate_left(4), U16::new(0x2341));
    assert_eq!(U16::new(0x1234).rotate_right(4), U16::new(0x4123));
    assert_eq!(U16::new(0x00FF).reverse_bits(), U16::new(0xFF00));
}

#[test]
fn max_boundaries_per_width() {
    assert_eq!(U8::MAX.checked_add(U8::ONE), None);
    assert_eq!(U16::MAX.checked_add(U16::ONE), None);
    assert_eq!(U32::MAX.checked_add(U32::ONE), None);
    assert_eq!(U64::MAX.checked_add(U64::ONE), None);
    assert_eq!(U128::MAX.checked_add(U128::ONE), None);

    assert_eq!(U128::MAX.wrapping_add(U128::ONE), U128::ZERO);
    assert_eq!(U64::MAX.saturating_mul(U64::new(2)), U64::MAX);
}
