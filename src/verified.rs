//! Compile-time verified values.
//!
//! [`Verified`] wraps a basis or bounded value and performs all of its
//! arithmetic in `const fn`s built on the fallible core. Evaluated in a
//! const context — a `const` item or the [`verified!`](crate::verified!)
//! block — any overflow, underflow, zero divisor or range violation is
//! a build error and the arithmetic leaves no runtime trace. At runtime
//! the wrapper is read-only: extraction, comparison, formatting and bit
//! queries.

use crate::bounded::{BoundedU128, BoundedU16, BoundedU32, BoundedU64, BoundedU8};
use crate::error::ArithmeticError;
use crate::unsigned::{U128, U16, U32, U64, U8};

/// A value whose arithmetic is restricted to compile-time evaluation.
#[repr(transparent)]
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Verified<T>(T);

/// Force an expression into compile-time evaluation.
///
/// ```ignore
/// let x = verified!(Verified::new(U32::new(1 << 30)).mul(Verified::from_raw(2)));
/// ```
///
/// The expression must be const-evaluable; arithmetic failures inside
/// it surface as compile errors rather than runtime panics.
#[macro_export]
macro_rules! verified {
    ( $e:expr ) => {
        const { $e }
    };
}

macro_rules! impl_verified_basis {
    ( $basis:ident, $prim:ty ) => {
        impl Verified<$basis> {
            pub const MIN: Self = Self($basis::MIN);
            pub const MAX: Self = Self($basis::MAX);

            #[inline]
            pub const fn new(value: $basis) -> Self {
                Self(value)
            }

            #[inline]
            pub const fn from_raw(value: $prim) -> Self {
                Self($basis::new(value))
            }

            /// Read the wrapped value back out; the runtime escape hatch.
            #[inline]
            pub const fn get(self) -> $basis {
                self.0
            }

            #[inline]
            pub const fn raw(self) -> $prim {
                self.0.get()
            }

            #[inline]
            pub const fn add(self, rhs: Self) -> Self {
                match self.0.try_add(rhs.0) {
                    Ok(v) => Self(v),
                    Err(_) => panic!("overflow detected in unsigned addition"),
                }
            }

            #[inline]
            pub const fn sub(self, rhs: Self) -> Self {
                match self.0.try_sub(rhs.0) {
                    Ok(v) => Self(v),
                    Err(_) => panic!("underflow detected in unsigned subtraction"),
                }
            }

            #[inline]
            pub const fn mul(self, rhs: Self) -> Self {
                match self.0.try_mul(rhs.0) {
                    Ok(v) => Self(v),
                    Err(_) => panic!("overflow detected in unsigned multiplication"),
                }
            }

            #[inline]
            pub const fn div(self, rhs: Self) -> Self {
                match self.0.try_div(rhs.0) {
                    Ok(v) => Self(v),
                    Err(_) => panic!("division by zero"),
                }
            }

            #[inline]
            pub const fn rem(self, rhs: Self) -> Self {
                match self.0.try_rem(rhs.0) {
                    Ok(v) => Self(v),
                    Err(_) => panic!("division by zero"),
                }
            }

            #[inline]
            pub const fn shl(self, shift: u32) -> Self {
                match self.0.try_shl(shift) {
                    Ok(v) => Self(v),
                    Err(_) => panic!("overflow detected in unsigned left shift"),
                }
            }

            #[inline]
            pub const fn shr(self, shift: u32) -> Self {
                match self.0.try_shr(shift) {
                    Ok(v) => Self(v),
                    Err(_) => panic!("overflow detected in unsigned right shift"),
                }
            }

            // Bit queries only read; they stay available at runtime.

            #[inline] pub const fn count_ones(self) -> u32 { self.0.count_ones() }
            #[inline] pub const fn count_zeros(self) -> u32 { self.0.count_zeros() }
            #[inline] pub const fn leading_zeros(self) -> u32 { self.0.leading_zeros() }
            #[inline] pub const fn trailing_zeros(self) -> u32 { self.0.trailing_zeros() }
            #[inline] pub const fn bit_width(self) -> u32 { self.0.bit_width() }
            #[inline] pub const fn is_power_of_two(self) -> bool { self.0.is_power_of_two() }

            // Value-producing helpers keep the wrapper and stay const.

            #[inline]
            pub const fn swap_bytes(self) -> Self {
                Self(self.0.swap_bytes())
            }

            #[inline]
            pub const fn to_be(self) -> Self {
                Self(self.0.to_be())
            }

            #[inline]
            pub const fn to_le(self) -> Self {
                Self(self.0.to_le())
            }

            #[inline]
            pub const fn to_be_bytes(self) -> [u8; core::mem::size_of::<$prim>()] {
                self.0.to_be_bytes()
            }

            #[inline]
            pub const fn to_le_bytes(self) -> [u8; core::mem::size_of::<$prim>()] {
                self.0.to_le_bytes()
            }

            #[inline]
            pub const fn next_power_of_two(self) -> Self {
                match self.0.checked_next_power_of_two() {
                    Some(v) => Self(v),
                    None => panic!("overflow detected in unsigned next power of two"),
                }
            }

            #[inline]
            pub const fn prev_power_of_two(self) -> Self {
                Self(self.0.prev_power_of_two())
            }
        }

        // At runtime a verified value may meet an unverified one of the
        // same basis; the result is the runtime type under the default
        // throw policy.

        impl core::ops::Add<$basis> for Verified<$basis> {
            type Output = $basis;
            #[track_caller]
            #[inline]
            fn add(self, rhs: $basis) -> $basis { self.0 + rhs }
        }

        impl core::ops::Add<Verified<$basis>> for $basis {
            type Output = $basis;
            #[track_caller]
            #[inline]
            fn add(self, rhs: Verified<$basis>) -> $basis { self + rhs.0 }
        }

        impl core::ops::Sub<$basis> for Verified<$basis> {
            type Output = $basis;
            #[track_caller]
            #[inline]
            fn sub(self, rhs: $basis) -> $basis { self.0 - rhs }
        }

        impl core::ops::Sub<Verified<$basis>> for $basis {
            type Output = $basis;
            #[track_caller]
            #[inline]
            fn sub(self, rhs: Verified<$basis>) -> $basis { self - rhs.0 }
        }

        impl core::ops::Mul<$basis> for Verified<$basis> {
            type Output = $basis;
            #[track_caller]
            #[inline]
            fn mul(self, rhs: $basis) -> $basis { self.0 * rhs }
        }

        impl core::ops::Mul<Verified<$basis>> for $basis {
            type Output = $basis;
            #[track_caller]
            #[inline]
            fn mul(self, rhs: Verified<$basis>) -> $basis { self * rhs.0 }
        }

        impl core::ops::Div<$basis> for Verified<$basis> {
            type Output = $basis;
            #[track_caller]
            #[inline]
            fn div(self, rhs: $basis) -> $basis { self.0 / rhs }
        }

        impl core::ops::Div<Verified<$basis>> for $basis {
            type Output = $basis;
            #[track_caller]
            #[inline]
            fn div(self, rhs: Verified<$basis>) -> $basis { self / rhs.0 }
        }

        impl core::ops::Rem<$basis> for Verified<$basis> {
            type Output = $basis;
            #[track_caller]
            #[inline]
            fn rem(self, rhs: $basis) -> $basis { self.0 % rhs }
        }

        impl core::ops::Rem<Verified<$basis>> for $basis {
            type Output = $basis;
            #[track_caller]
            #[inline]
            fn rem(self, rhs: Verified<$basis>) -> $basis { self % rhs.0 }
        }

        impl PartialEq<$basis> for Verified<$basis> {
            #[inline]
            fn eq(&self, other: &$basis) -> bool { self.0 == *other }
        }

        impl PartialEq<Verified<$basis>> for $basis {
            #[inline]
            fn eq(&self, other: &Verified<$basis>) -> bool { *self == other.0 }
        }

        impl PartialOrd<$basis> for Verified<$basis> {
            #[inline]
            fn partial_cmp(&self, other: &$basis) -> Option<core::cmp::Ordering> {
                self.0.partial_cmp(other)
            }
        }

        impl PartialOrd<Verified<$basis>> for $basis {
            #[inline]
            fn partial_cmp(&self, other: &Verified<$basis>) -> Option<core::cmp::Ordering> {
                self.partial_cmp(&other.0)
            }
        }
    };
}

impl_verified_basis!(U8, u8);
impl_verified_basis!(U16, u16);
impl_verified_basis!(U32, u32);
impl_verified_basis!(U64, u64);
impl_verified_basis!(U128, u128);

macro_rules! impl_verified_bounded {
    ( $bounded:ident, $prim:ty ) => {
        impl<const MIN: $prim, const MAX: $prim> Verified<$bounded<MIN, MAX>> {
            #[inline]
            pub const fn new(value: $bounded<MIN, MAX>) -> Self {
                Self(value)
            }

            #[inline]
            pub const fn from_raw(value: $prim) -> Self {
                match $bounded::<MIN, MAX>::new(value) {
                    Ok(v) => Self(v),
                    Err(_) => panic!("value outside the bounds"),
                }
            }

            #[inline]
            pub const fn get(self) -> $bounded<MIN, MAX> {
                self.0
            }

            #[inline]
            pub const fn raw(self) -> $prim {
                self.0.get()
            }

            #[inline]
            pub const fn add(self, rhs: Self) -> Self {
                match self.0.try_add(rhs.0) {
                    Ok(v) => Self(v),
                    Err(ArithmeticError::OutOfBounds) => panic!("value outside the bounds"),
                    Err(_) => panic!("overflow detected in unsigned addition"),
                }
            }

            #[inline]
            pub const fn sub(self, rhs: Self) -> Self {
                match self.0.try_sub(rhs.0) {
                    Ok(v) => Self(v),
                    Err(ArithmeticError::OutOfBounds) => panic!("value outside the bounds"),
                    Err(_) => panic!("underflow detected in unsigned subtraction"),
                }
            }

            #[inline]
            pub const fn mul(self, rhs: Self) -> Self {
                match self.0.try_mul(rhs.0) {
                    Ok(v) => Self(v),
                    Err(ArithmeticError::OutOfBounds) => panic!("value outside the bounds"),
                    Err(_) => panic!("overflow detected in unsigned multiplication"),
                }
            }

            #[inline]
            pub const fn div(self, rhs: Self) -> Self {
                match self.0.try_div(rhs.0) {
                    Ok(v) => Self(v),
                    Err(ArithmeticError::OutOfBounds) => panic!("value outside the bounds"),
                    Err(_) => panic!("division by zero"),
                }
            }

            #[inline]
            pub const fn rem(self, rhs: Self) -> Self {
                match self.0.try_rem(rhs.0) {
                    Ok(v) => Self(v),
                    Err(ArithmeticError::OutOfBounds) => panic!("value outside the bounds"),
                    Err(_) => panic!("division by zero"),
                }
            }
        }

        impl<const MIN: $prim, const MAX: $prim> core::ops::Add<$bounded<MIN, MAX>>
            for Verified<$bounded<MIN, MAX>>
        {
            type Output = $bounded<MIN, MAX>;
            #[track_caller]
            #[inline]
            fn add(self, rhs: $bounded<MIN, MAX>) -> Self::Output { self.0 + rhs }
        }

        impl<const MIN: $prim, const MAX: $prim> core::ops::Add<Verified<$bounded<MIN, MAX>>>
            for $bounded<MIN, MAX>
        {
            type Output = $bounded<MIN, MAX>;
            #[track_caller]
            #[inline]
            fn add(self, rhs: Verified<$bounded<MIN, MAX>>) -> Self::Output { self + rhs.0 }
        }

        impl<const MIN: $prim, const MAX: $prim> core::ops::Sub<$bounded<MIN, MAX>>
            for Verified<$bounded<MIN, MAX>>
        {
            type Output = $bounded<MIN, MAX>;
            #[track_caller]
            #[inline]
            fn sub(self, rhs: $bounded<MIN, MAX>) -> Self::Output { self.0 - rhs }
        }

        impl<const MIN: $prim, const MAX: $prim> core::ops::Sub<Verified<$bounded<MIN, MAX>>>
            for $bounded<MIN, MAX>
        {
            type Output = $bounded<MIN, MAX>;
            #[track_caller]
            #[inline]
            fn sub(self, rhs: Verified<$bounded<MIN, MAX>>) -> Self::Output { self - rhs.0 }
        }

        impl<const MIN: $prim, const MAX: $prim> core::ops::Mul<$bounded<MIN, MAX>>
            for Verified<$bounded<MIN, MAX>>
        {
            type Output = $bounded<MIN, MAX>;
            #[track_caller]
            #[inline]
            fn mul(self, rhs: $bounded<MIN, MAX>) -> Self::Output { self.0 * rhs }
        }

        impl<const MIN: $prim, const MAX: $prim> core::ops::Mul<Verified<$bounded<MIN, MAX>>>
            for $bounded<MIN, MAX>
        {
            type Output = $bounded<MIN, MAX>;
            #[track_caller]
            #[inline]
            fn mul(self, rhs: Verified<$bounded<MIN, MAX>>) -> Self::Output { self * rhs.0 }
        }

        impl<const MIN: $prim, const MAX: $prim> core::ops::Div<$bounded<MIN, MAX>>
            for Verified<$bounded<MIN, MAX>>
        {
            type Output = $bounded<MIN, MAX>;
            #[track_caller]
            #[inline]
            fn div(self, rhs: $bounded<MIN, MAX>) -> Self::Output { self.0 / rhs }
        }

        impl<const MIN: $prim, const MAX: $prim> core::ops::Div<Verified<$bounded<MIN, MAX>>>
            for $bounded<MIN, MAX>
        {
            type Output = $bounded<MIN, MAX>;
            #[track_caller]
            #[inline]
            fn div(self, rhs: Verified<$bounded<MIN, MAX>>) -> Self::Output { self / rhs.0 }
        }

        impl<const MIN: $prim, const MAX: $prim> core::ops::Rem<$bounded<MIN, MAX>>
            for Verified<$bounded<MIN, MAX>>
        {
            type Output = $bounded<MIN, MAX>;
            #[track_caller]
            #[inline]
            fn rem(self, rhs: $bounded<MIN, MAX>) -> Self::Output { self.0 % rhs }
        }

        impl<const MIN: $prim, const MAX: $prim> core::ops::Rem<Verified<$bounded<MIN, MAX>>>
            for $bounded<MIN, MAX>
        {
            type Output = $bounded<MIN, MAX>;
            #[track_caller]
            #[inline]
            fn rem(self, rhs: Verified<$bounded<MIN, MAX>>) -> Self::Output { self % rhs.0 }
        }

        impl<const MIN: $prim, const MAX: $prim> PartialEq<$bounded<MIN, MAX>>
            for Verified<$bounded<MIN, MAX>>
        {
            #[inline]
            fn eq(&self, other: &$bounded<MIN, MAX>) -> bool { self.0 == *other }
        }

        impl<const MIN: $prim, const MAX: $prim> PartialEq<Verified<$bounded<MIN, MAX>>>
            for $bounded<MIN, MAX>
        {
            #[inline]
            fn eq(&self, other: &Verified<$bounded<MIN, MAX>>) -> bool { *self == other.0 }
        }
    };
}

impl_verified_bounded!(BoundedU8, u8);
impl_verified_bounded!(BoundedU16, u16);
impl_verified_bounded!(BoundedU32, u32);
impl_verified_bounded!(BoundedU64, u64);
impl_verified_bounded!(BoundedU128, u128);

impl<T: core::fmt::Display> core::fmt::Display for Verified<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for Verified<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Debug::fmt(&self.0, f)
    }
}

impl<T: core::fmt::Binary> core::fmt::Binary for Verified<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Binary::fmt(&self.0, f)
    }
}

impl<T: core::fmt::Octal> core::fmt::Octal for Verified<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Octal::fmt(&self.0, f)
    }
}

impl<T: core::fmt::LowerHex> core::fmt::LowerHex for Verified<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::LowerHex::fmt(&self.0, f)
    }
}

impl<T: core::fmt::UpperHex> core::fmt::UpperHex for Verified<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::UpperHex::fmt(&self.0, f)
    }
}
