//! The overflow-policy engine.
//!
//! Each arithmetic operation exists once, generic over a policy marker
//! that decides the return shape: panic, clamp, wrap, `Option`, value
//! plus flag, `Result`, or process termination. The named families
//! (`checked_add`, `saturating_mul`, ...) are thin aliases over the
//! generic form.

use crate::error::{ArithmeticError, Op};
use crate::unsigned::{U128, U16, U32, U64, U8};

mod sealed {
    pub trait Sealed {}
}

/// The common surface of the five basis widths the policy engine
/// dispatches on.
pub trait SafeUnsigned: Copy + Clone + Eq + Ord + sealed::Sealed {
    const BITS: u32;
    const MIN: Self;
    const MAX: Self;
    const ZERO: Self;
    const ONE: Self;

    fn overflowing_add(self, rhs: Self) -> (Self, bool);
    fn overflowing_sub(self, rhs: Self) -> (Self, bool);
    fn overflowing_mul(self, rhs: Self) -> (Self, bool);
    fn overflowing_shl(self, shift: u32) -> (Self, bool);
    fn overflowing_shr(self, shift: u32) -> (Self, bool);
    fn try_div(self, rhs: Self) -> Result<Self, ArithmeticError>;
    fn try_rem(self, rhs: Self) -> Result<Self, ArithmeticError>;

    /// Widen into the common 128-bit computation domain.
    #[doc(hidden)]
    fn raw_u128(self) -> u128;

    /// Narrow back from the 128-bit domain. The caller guarantees the
    /// value fits the width.
    #[doc(hidden)]
    fn from_raw_u128(value: u128) -> Self;
}

macro_rules! impl_safe_unsigned {
    ( $( $t:ident ),+ $(,)? ) => {
        $(
            impl sealed::Sealed for $t {}

            impl SafeUnsigned for $t {
                const BITS: u32 = $t::BITS;
                const MIN: Self = $t::MIN;
                const MAX: Self = $t::MAX;
                const ZERO: Self = $t::ZERO;
                const ONE: Self = $t::ONE;

                #[inline]
                fn overflowing_add(self, rhs: Self) -> (Self, bool) {
                    $t::overflowing_add(self, rhs)
                }

                #[inline]
                fn overflowing_sub(self, rhs: Self) -> (Self, bool) {
                    $t::overflowing_sub(self, rhs)
                }

                #[inline]
                fn overflowing_mul(self, rhs: Self) -> (Self, bool) {
                    $t::overflowing_mul(self, rhs)
                }

                #[inline]
                fn overflowing_shl(self, shift: u32) -> (Self, bool) {
                    $t::overflowing_shl(self, shift)
                }

                #[inline]
                fn overflowing_shr(self, shift: u32) -> (Self, bool) {
                    $t::overflowing_shr(self, shift)
                }

                #[inline]
                fn try_div(self, rhs: Self) -> Result<Self, ArithmeticError> {
                    $t::try_div(self, rhs)
                }

                #[inline]
                fn try_rem(self, rhs: Self) -> Result<Self, ArithmeticError> {
                    $t::try_rem(self, rhs)
                }

                #[inline]
                fn raw_u128(self) -> u128 {
                    u128::from(self.get())
                }

                #[inline]
                fn from_raw_u128(value: u128) -> Self {
                    debug_assert!(value <= Self::MAX.raw_u128());
                    $t::new(value as _)
                }
            }
        )+
    };
}

impl_safe_unsigned!(U8, U16, U32, U64, U128);

/// What an operation produced before the policy decides how to present
/// it. `Fatal` carries the failures that have no wrapped sentinel
/// (zero divisors).
#[doc(hidden)]
pub enum RawOutcome<T> {
    Exact(T),
    Overflowed { wrapped: T, error: ArithmeticError },
    Fatal(ArithmeticError),
}

/// A strategy for presenting arithmetic results.
///
/// Implemented by the marker types [`Throw`], [`Saturating`],
/// [`Wrapping`], [`Checked`], [`Overflowing`], [`Fallible`] and
/// [`Strict`]; the compile-time "verify" policy is the
/// [`Verified`](crate::verified::Verified) family.
pub trait OverflowPolicy: sealed::Sealed {
    type Output<T: SafeUnsigned>;

    #[doc(hidden)]
    fn resolve<T: SafeUnsigned>(outcome: RawOutcome<T>, clamp: T) -> Self::Output<T>;
}

/// Panic with the matching error kind. The default of the operator
/// forms.
pub struct Throw;

/// Clamp to the nearest representable bound.
pub struct Saturating;

/// Reduce modulo 2^N.
pub struct Wrapping;

/// Return `None` on any failure.
pub struct Checked;

/// Return the wrapped value together with a did-not-fit flag.
pub struct Overflowing;

/// Return the error instead of panicking; the catchable form of
/// [`Throw`].
pub struct Fallible;

/// Terminate the process on failure; never unwinds.
pub struct Strict;

impl sealed::Sealed for Throw {}
impl sealed::Sealed for Saturating {}
impl sealed::Sealed for Wrapping {}
impl sealed::Sealed for Checked {}
impl sealed::Sealed for Overflowing {}
impl sealed::Sealed for Fallible {}
impl sealed::Sealed for Strict {}

impl OverflowPolicy for Throw {
    type Output<T: SafeUnsigned> = T;

    #[track_caller]
    fn resolve<T: SafeUnsigned>(outcome: RawOutcome<T>, _clamp: T) -> T {
        match outcome {
            RawOutcome::Exact(v) => v,
            RawOutcome::Overflowed { error, .. } | RawOutcome::Fatal(error) => panic!("{}", error),
        }
    }
}

impl OverflowPolicy for Saturating {
    type Output<T: SafeUnsigned> = T;

    #[track_caller]
    fn resolve<T: SafeUnsigned>(outcome: RawOutcome<T>, clamp: T) -> T {
        match outcome {
            RawOutcome::Exact(v) => v,
            RawOutcome::Overflowed { .. } => clamp,
            RawOutcome::Fatal(error) => panic!("{}", error),
        }
    }
}

impl OverflowPolicy for Wrapping {
    type Output<T: SafeUnsigned> = T;

    #[track_caller]
    fn resolve<T: SafeUnsigned>(outcome: RawOutcome<T>, _clamp: T) -> T {
        match outcome {
            RawOutcome::Exact(v) | RawOutcome::Overflowed { wrapped: v, .. } => v,
            RawOutcome::Fatal(error) => panic!("{}", error),
        }
    }
}

impl OverflowPolicy for Checked {
    type Output<T: SafeUnsigned> = Option<T>;

    fn resolve<T: SafeUnsigned>(outcome: RawOutcome<T>, _clamp: T) -> Option<T> {
        match outcome {
            RawOutcome::Exact(v) => Some(v),
            RawOutcome::Overflowed { .. } | RawOutcome::Fatal(_) => None,
        }
    }
}

impl OverflowPolicy for Overflowing {
    type Output<T: SafeUnsigned> = (T, bool);

    #[track_caller]
    fn resolve<T: SafeUnsigned>(outcome: RawOutcome<T>, _clamp: T) -> (T, bool) {
        match outcome {
            RawOutcome::Exact(v) => (v, false),
            RawOutcome::Overflowed { wrapped, .. } => (wrapped, true),
            RawOutcome::Fatal(error) => panic!("{}", error),
        }
    }
}

impl OverflowPolicy for Fallible {
    type Output<T: SafeUnsigned> = Result<T, ArithmeticError>;

    fn resolve<T: SafeUnsigned>(outcome: RawOutcome<T>, _clamp: T) -> Result<T, ArithmeticError> {
        match outcome {
            RawOutcome::Exact(v) => Ok(v),
            RawOutcome::Overflowed { error, .. } | RawOutcome::Fatal(error) => Err(error),
        }
    }
}

impl OverflowPolicy for Strict {
    type Output<T: SafeUnsigned> = T;

    fn resolve<T: SafeUnsigned>(outcome: RawOutcome<T>, _clamp: T) -> T {
        match outcome {
            RawOutcome::Exact(v) => v,
            RawOutcome::Overflowed { .. } | RawOutcome::Fatal(_) => std::process::abort(),
        }
    }
}

#[inline]
fn flagged<T: SafeUnsigned>(result: (T, bool), error: ArithmeticError) -> RawOutcome<T> {
    let (wrapped, overflow) = result;
    if overflow {
        RawOutcome::Overflowed { wrapped, error }
    } else {
        RawOutcome::Exact(wrapped)
    }
}

/// `lhs + rhs` under policy `P`.
#[track_caller]
#[inline]
pub fn add<P: OverflowPolicy, T: SafeUnsigned>(lhs: T, rhs: T) -> P::Output<T> {
    let outcome = flagged(lhs.overflowing_add(rhs), ArithmeticError::Overflow(Op::Add));
    P::resolve(outcome, T::MAX)
}

/// `lhs - rhs` under policy `P`.
#[track_caller]
#[inline]
pub fn sub<P: OverflowPolicy, T: SafeUnsigned>(lhs: T, rhs: T) -> P::Output<T> {
    let outcome = flagged(lhs.overflowing_sub(rhs), ArithmeticError::Underflow(Op::Sub));
    P::resolve(outcome, T::MIN)
}

/// `lhs * rhs` under policy `P`.
#[track_caller]
#[inline]
pub fn mul<P: OverflowPolicy, T: SafeUnsigned>(lhs: T, rhs: T) -> P::Output<T> {
    let outcome = flagged(lhs.overflowing_mul(rhs), ArithmeticError::Overflow(Op::Mul));
    P::resolve(outcome, T::MAX)
}

/// `lhs / rhs` under policy `P`. A zero divisor has no wrapped
/// sentinel, so only [`Checked`] and [`Fallible`] soften it.
#[track_caller]
#[inline]
pub fn div<P: OverflowPolicy, T: SafeUnsigned>(lhs: T, rhs: T) -> P::Output<T> {
    let outcome = match lhs.try_div(rhs) {
        Ok(v) => RawOutcome::Exact(v),
        Err(e) => RawOutcome::Fatal(e),
    };
    P::resolve(outcome, T::MAX)
}

/// `lhs % rhs` under policy `P`.
#[track_caller]
#[inline]
pub fn rem<P: OverflowPolicy, T: SafeUnsigned>(lhs: T, rhs: T) -> P::Output<T> {
    let outcome = match lhs.try_rem(rhs) {
        Ok(v) => RawOutcome::Exact(v),
        Err(e) => RawOutcome::Fatal(e),
    };
    P::resolve(outcome, T::MAX)
}

/// `value << shift` under policy `P`.
#[track_caller]
#[inline]
pub fn shl<P: OverflowPolicy, T: SafeUnsigned>(value: T, shift: u32) -> P::Output<T> {
    let outcome = flagged(value.overflowing_shl(shift), ArithmeticError::Overflow(Op::Shl));
    P::resolve(outcome, T::MAX)
}

/// `value >> shift` under policy `P`.
#[track_caller]
#[inline]
pub fn shr<P: OverflowPolicy, T: SafeUnsigned>(value: T, shift: u32) -> P::Output<T> {
    let outcome = flagged(value.overflowing_shr(shift), ArithmeticError::Overflow(Op::Shr));
    P::resolve(outcome, T::MIN)
}

// The named aliases. Two arms because the shift family takes a count
// instead of a second value.
macro_rules! policy_aliases {
    ( $op:ident ( $rhs:ty ), $rhs_name:ident:
      $try_fn:ident, $checked_fn:ident, $saturating_fn:ident,
      $wrapping_fn:ident, $overflowing_fn:ident, $strict_fn:ident ) => {
        /// The catchable form: the error instead of a panic.
        #[inline]
        pub fn $try_fn<T: SafeUnsigned>(lhs: T, $rhs_name: $rhs) -> Result<T, ArithmeticError> {
            $op::<Fallible, T>(lhs, $rhs_name)
        }

        /// `None` on any overflow, underflow or zero divisor.
        #[inline]
        pub fn $checked_fn<T: SafeUnsigned>(lhs: T, $rhs_name: $rhs) -> Option<T> {
            $op::<Checked, T>(lhs, $rhs_name)
        }

        /// Clamps to the nearest representable bound.
        #[track_caller]
        #[inline]
        pub fn $saturating_fn<T: SafeUnsigned>(lhs: T, $rhs_name: $rhs) -> T {
            $op::<Saturating, T>(lhs, $rhs_name)
        }

        /// Reduces modulo 2^N; zero divisors still fail.
        #[track_caller]
        #[inline]
        pub fn $wrapping_fn<T: SafeUnsigned>(lhs: T, $rhs_name: $rhs) -> T {
            $op::<Wrapping, T>(lhs, $rhs_name)
        }

        /// The wrapped value plus a flag that is `true` iff the
        /// mathematical result did not fit.
        #[track_caller]
        #[inline]
        pub fn $overflowing_fn<T: SafeUnsigned>(lhs: T, $rhs_name: $rhs) -> (T, bool) {
            $op::<Overflowing, T>(lhs, $rhs_name)
        }

        /// Terminates the process on failure; never unwinds.
        #[inline]
        pub fn $strict_fn<T: SafeUnsigned>(lhs: T, $rhs_name: $rhs) -> T {
            $op::<Strict, T>(lhs, $rhs_name)
        }
    };
}

policy_aliases!(add(T), rhs:
    try_add, checked_add, saturating_add, wrapping_add, overflowing_add, strict_add);
policy_aliases!(sub(T), rhs:
    try_sub, checked_sub, saturating_sub, wrapping_sub, overflowing_sub, strict_sub);
policy_aliases!(mul(T), rhs:
    try_mul, checked_mul, saturating_mul, wrapping_mul, overflowing_mul, strict_mul);
policy_aliases!(div(T), rhs:
    try_div, checked_div, saturating_div, wrapping_div, overflowing_div, strict_div);
policy_aliases!(rem(T), rhs:
    try_rem, checked_rem, saturating_rem, wrapping_rem, overflowing_rem, strict_rem);
policy_aliases!(shl(u32), shift:
    try_shl, checked_shl, saturating_shl, wrapping_shl, overflowing_shl, strict_shl);
policy_aliases!(shr(u32), shift:
    try_shr, checked_shr, saturating_shr, wrapping_shr, overflowing_shr, strict_shr);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generic_form_selects_the_shape() {
        let a = U32::new(u32::MAX);
        let b = U32::new(100);

        assert_eq!(add::<Wrapping, _>(a, b), U32::new(99));
        assert_eq!(add::<Saturating, _>(a, b), U32::MAX);
        assert_eq!(add::<Checked, _>(a, b), None);
        assert_eq!(add::<Overflowing, _>(a, b), (U32::new(99), true));
        assert_eq!(
            add::<Fallible, _>(a, b),
            Err(ArithmeticError::Overflow(Op::Add))
        );
    }

    #[test]
    #[should_panic(expected = "overflow detected in unsigned addition")]
    fn throw_policy_panics_with_the_kind() {
        let _ = add::<Throw, _>(U8::new(255), U8::new(1));
    }

    #[test]
    fn policies_agree_when_nothing_overflows() {
        let a = U16::new(1_000);
        let b = U16::new(234);

        let plain = add::<Throw, _>(a, b);
        assert_eq!(add::<Saturating, _>(a, b), plain);
        assert_eq!(add::<Wrapping, _>(a, b), plain);
        assert_eq!(add::<Checked, _>(a, b), Some(plain));
        assert_eq!(add::<Overflowing, _>(a, b), (plain, false));
        assert_eq!(add::<Strict, _>(a, b), plain);
        assert_eq!(add::<Fallible, _>(a, b), Ok(plain));
    }

    #[test]
    fn named_aliases_match_the_generic_form() {
        let zero = U8::ZERO;
        let one = U8::ONE;

        assert_eq!(wrapping_sub(zero, one), U8::new(255));
        assert_eq!(saturating_sub(zero, one), U8::ZERO);
        assert_eq!(checked_sub(zero, one), None);
        assert_eq!(overflowing_sub(zero, one), (U8::new(255), true));
        assert_eq!(try_sub(zero, one), Err(ArithmeticError::Underflow(Op::Sub)));
        assert_eq!(strict_sub(one, one), U8::ZERO);
    }

    #[test]
    fn shift_family_follows_the_strict_shift_rules() {
        let one = U8::ONE;

        assert_eq!(wrapping_shl(one, 8), U8::ZERO);
        assert_eq!(saturating_shl(one, 8), U8::MAX);
        assert_eq!(checked_shl(one, 8), None);
        assert_eq!(overflowing_shl(one, 8), (U8::ZERO, true));

        // Losing a set bit off the top counts as overflow even when the
        // count is in range.
        assert_eq!(checked_shl(U8::new(0b1000_0001), 1), None);
        assert_eq!(overflowing_shl(U8::new(0b1000_0001), 1), (U8::new(0b0000_0010), true));

        assert_eq!(saturating_shr(one, 9), U8::ZERO);
        assert_eq!(checked_shr(one, 3), Some(U8::ZERO));
    }

    #[test]
    fn division_only_fails_on_zero_divisors() {
        let max = U64::MAX;

        assert_eq!(checked_div(max, U64::ZERO), None);
        assert_eq!(try_div(max, U64::ZERO), Err(ArithmeticError::DivideByZero));
        assert_eq!(saturating_div(max, U64::new(2)), U64::new(u64::MAX / 2));
        assert_eq!(wrapping_rem(max, U64::new(10)), U64::new(u64::MAX % 10));
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn overflowing_division_by_zero_panics() {
        let _ = overflowing_div(U32::ONE, U32::ZERO);
    }

    #[test]
    fn checked_and_overflowing_are_consistent() {
        let pairs = [
            (U8::new(250), U8::new(10)),
            (U8::new(3), U8::new(4)),
            (U8::MAX, U8::MAX),
            (U8::ZERO, U8::ONE),
        ];

        for (a, b) in pairs {
            for (checked, overflowing) in [
                (checked_add(a, b), overflowing_add(a, b)),
                (checked_sub(a, b), overflowing_sub(a, b)),
                (checked_mul(a, b), overflowing_mul(a, b)),
            ] {
                assert_eq!(checked.is_none(), overflowing.1);
                if let Some(v) = checked {
                    assert_eq!(v, overflowing.0);
                }
            }
        }
    }
}
