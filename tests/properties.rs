//! Property-based checks of the quantified invariants, plus an
//! exhaustive sweep of 8-bit arithmetic against widened reference math.

use proptest::prelude::*;

use safe_uint::policy;
use safe_uint::{BoundedU8, Checked, Overflowing, Saturating, Throw, Wrapping, U16, U32, U64, U8};

proptest! {
    #[test]
    fn bit_identity_round_trip(v: u32) {
        prop_assert_eq!(U32::new(v).get(), v);
        prop_assert_eq!(U32::new(v).to_ne_bytes(), v.to_ne_bytes());
    }

    #[test]
    fn widening_commutes_with_extraction(v: u16) {
        let x = U16::new(v);
        prop_assert_eq!(U64::from(x).get(), u64::from(v));
        prop_assert_eq!(u128::from(x), u128::from(v));
    }

    #[test]
    fn wrapping_is_modular(a: u32, b: u32) {
        let m = 1u64 << 32;
        let (x, y) = (U32::new(a), U32::new(b));

        prop_assert_eq!(
            u64::from(x.wrapping_add(y).get()),
            (u64::from(a) + u64::from(b)) % m
        );
        prop_assert_eq!(
            u64::from(x.wrapping_mul(y).get()),
            u64::from(a).wrapping_mul(u64::from(b)) % m
        );
        prop_assert_eq!(
            x.wrapping_sub(y).get(),
            a.wrapping_sub(b)
        );
    }

    #[test]
    fn saturation_clamps_to_the_bounds(a: u16, b: u16) {
        let (x, y) = (U16::new(a), U16::new(b));
        let sum = u32::from(a) + u32::from(b);
        let product = u32::from(a) * u32::from(b);

        prop_assert_eq!(
            u32::from(x.saturating_add(y).get()),
            sum.min(u32::from(u16::MAX))
        );
        prop_assert_eq!(
            u32::from(x.saturating_mul(y).get()),
            product.min(u32::from(u16::MAX))
        );
        prop_assert_eq!(
            x.saturating_sub(y).get(),
            a.saturating_sub(b)
        );
    }

    #[test]
    fn checked_agrees_with_overflowing(a: u32, b: u32) {
        let (x, y) = (U32::new(a), U32::new(b));

        for (checked, (wrapped, flag)) in [
            (x.checked_add(y), x.overflowing_add(y)),
            (x.checked_sub(y), x.overflowing_sub(y)),
            (x.checked_mul(y), x.overflowing_mul(y)),
        ] {
            prop_assert_eq!(checked.is_none(), flag);
            if let Some(v) = checked {
                prop_assert_eq!(v, wrapped);
            }
        }
    }

    #[test]
    fn policies_agree_when_nothing_overflows(a in 0u32..=0xFFFF, b in 1u32..=0xFFFF) {
        let (x, y) = (U32::new(a), U32::new(b));

        let plain = policy::add::<Throw, _>(x, y);
        prop_assert_eq!(policy::add::<Saturating, _>(x, y), plain);
        prop_assert_eq!(policy::add::<Wrapping, _>(x, y), plain);
        prop_assert_eq!(policy::add::<Checked, _>(x, y), Some(plain));
        prop_assert_eq!(policy::add::<Overflowing, _>(x, y), (plain, false));

        let quotient = policy::div::<Throw, _>(x, y);
        prop_assert_eq!(policy::div::<Checked, _>(x, y), Some(quotient));
        prop_assert_eq!(quotient.get(), a / b);
    }

    #[test]
    fn format_parity_holds_for_every_value(v: u64) {
        let x = U64::new(v);
        prop_assert_eq!(format!("{x}"), format!("{v}"));
        prop_assert_eq!(format!("{x:#x}"), format!("{v:#x}"));
        prop_assert_eq!(format!("{x:b}"), format!("{v:b}"));
        prop_assert_eq!(format!("{x:020}"), format!("{v:020}"));
    }

    #[test]
    fn radix_round_trips(v: u64, radix in 2u32..=36) {
        let x = U64::new(v);
        let rendered = x.to_str_radix(radix);
        prop_assert_eq!(U64::from_str_radix(&rendered, radix), Ok(x));
    }

    #[test]
    fn endian_round_trips(v: u64) {
        let x = U64::new(v);
        prop_assert_eq!(U64::from_be_bytes(x.to_be_bytes()), x);
        prop_assert_eq!(U64::from_le_bytes(x.to_le_bytes()), x);
        prop_assert_eq!(x.swap_bytes().swap_bytes(), x);
    }

    #[test]
    fn bounded_results_are_representable_iff_in_range(a in 10u8..=200, b in 10u8..=200) {
        type B = BoundedU8<10, 200>;
        let (x, y) = (B::new(a).unwrap(), B::new(b).unwrap());

        let sum = u32::from(a) + u32::from(b);
        match x.try_add(y) {
            Ok(v) => {
                prop_assert!((10..=200).contains(&sum));
                prop_assert_eq!(u32::from(v.get()), sum);
            }
            Err(_) => prop_assert!(sum > 200),
        }

        let difference = i32::from(a) - i32::from(b);
        match x.try_sub(y) {
            Ok(v) => {
                prop_assert!((10..=200).contains(&difference));
                prop_assert_eq!(i32::from(v.get()), difference);
            }
            Err(_) => prop_assert!(difference < 10),
        }
    }

    #[test]
    fn shl_policies_are_consistent(v: u16, shift in 0u32..=20) {
        let x = U16::new(v);

        let (wrapped, flag) = x.overflowing_shl(shift);
        prop_assert_eq!(x.checked_shl(shift).is_none(), flag);
        if !flag {
            prop_assert_eq!(x.checked_shl(shift), Some(wrapped));
            prop_assert_eq!(x.saturating_shl(shift), wrapped);
        } else {
            prop_assert_eq!(x.saturating_shl(shift), U16::MAX);
        }

        // Wrapped result is the mathematical one reduced mod 2^16.
        let expected = if shift >= 16 {
            0
        } else {
            (u32::from(v) << shift) as u16
        };
        prop_assert_eq!(wrapped.get(), expected);
    }
}

#[test]
fn exhaustive_u8_arithmetic_matches_widened_reference() {
    for a in 0..=u8::MAX {
        for b in 0..=u8::MAX {
            let (x, y) = (U8::new(a), U8::new(b));
            let wide_sum = u16::from(a) + u16::from(b);
            let wide_diff = i32::from(a) - i32::from(b);
            let wide_product = u16::from(a) * u16::from(b);

            assert_eq!(x.checked_add(y).is_none(), wide_sum > 255);
            assert_eq!(x.wrapping_add(y).get(), (wide_sum % 256) as u8);

            assert_eq!(x.checked_sub(y).is_none(), wide_diff < 0);
            assert_eq!(
                x.wrapping_sub(y).get(),
                (wide_diff.rem_euclid(256)) as u8
            );

            assert_eq!(x.checked_mul(y).is_none(), wide_product > 255);
            assert_eq!(x.wrapping_mul(y).get(), (wide_product % 256) as u8);
            assert_eq!(x.overflowing_mul(y), (x.wrapping_mul(y), wide_product > 255));

            if b != 0 {
                assert_eq!((x / y).get(), a / b);
                assert_eq!((x % y).get(), a % b);
            } else {
                assert_eq!(x.checked_div(y), None);
            }
        }
    }
}
