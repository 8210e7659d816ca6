//! Range-restricted unsigned integers.
//!
//! A bounded value carries the invariant `MIN <= v <= MAX` in its type.
//! Arithmetic runs at the underlying width first (preserving the
//! overflow/underflow failure kinds), then re-validates the result
//! against the range, which fails with the distinct domain error.

use crate::error::ArithmeticError;
use crate::unsigned::{U128, U16, U32, U64, U8};

/// Macro to construct a bounded type over one basis width.
#[macro_export]
macro_rules! construct_bounded {
    ( $(#[$attr:meta])* $vis:vis struct $name:ident ( $prim:ty, $basis:ty, [ $( $wider:ty ),* ] ); ) => {
        #[repr(transparent)]
        $(#[$attr])*
        #[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
        $vis struct $name<const MIN: $prim, const MAX: $prim>($prim);

        impl<const MIN: $prim, const MAX: $prim> $name<MIN, MAX> {
            // Referenced from every constructor so a degenerate range is
            // rejected when the type is first used.
            const BOUNDS_OK: () = assert!(MIN < MAX, "Min must be strictly less than Max");

            /// The number of bits in the underlying width.
            pub const BITS: u32 = <$basis>::BITS;

            /// The inclusive lower bound as a value.
            pub const MIN_VALUE: Self = {
                let _ = Self::BOUNDS_OK;
                Self(MIN)
            };

            /// The inclusive upper bound as a value.
            pub const MAX_VALUE: Self = {
                let _ = Self::BOUNDS_OK;
                Self(MAX)
            };

            /// Wrap a raw value after checking it against the range.
            #[inline]
            pub const fn new(value: $prim) -> Result<Self, ArithmeticError> {
                let _ = Self::BOUNDS_OK;

                if value < MIN || value > MAX {
                    return Err(ArithmeticError::OutOfBounds);
                }

                Ok(Self(value))
            }

            /// Wrap a raw value, clamping it into the range.
            #[inline]
            pub const fn new_saturating(value: $prim) -> Self {
                let _ = Self::BOUNDS_OK;
                Self::clamp_into(value)
            }

            /// Extract the raw value.
            #[inline]
            pub const fn get(self) -> $prim {
                self.0
            }

            /// The value as its unrestricted basis type.
            #[inline]
            pub const fn to_basis(self) -> $basis {
                <$basis>::new(self.0)
            }

            /// Construct from the unrestricted basis type, checking the
            /// range.
            #[inline]
            pub const fn from_basis(value: $basis) -> Result<Self, ArithmeticError> {
                Self::new(value.get())
            }

            /// Re-target the value onto another range of the same width.
            /// Succeeds iff the current value lies inside the new range,
            /// regardless of how the two ranges relate.
            #[inline]
            pub const fn convert<const MIN2: $prim, const MAX2: $prim>(
                self,
            ) -> Result<$name<MIN2, MAX2>, ArithmeticError> {
                $name::<MIN2, MAX2>::new(self.0)
            }

            #[inline]
            const fn clamp_into(value: $prim) -> Self {
                if value < MIN {
                    Self(MIN)
                } else if value > MAX {
                    Self(MAX)
                } else {
                    Self(value)
                }
            }

            // --- fallible core: width arithmetic, then range check ---

            #[inline]
            pub const fn try_add(self, rhs: Self) -> Result<Self, ArithmeticError> {
                let wide = match self.to_basis().try_add(rhs.to_basis()) {
                    Ok(v) => v,
                    Err(e) => return Err(e),
                };

                Self::new(wide.get())
            }

            #[inline]
            pub const fn try_sub(self, rhs: Self) -> Result<Self, ArithmeticError> {
                let wide = match self.to_basis().try_sub(rhs.to_basis()) {
                    Ok(v) => v,
                    Err(e) => return Err(e),
                };

                Self::new(wide.get())
            }

            #[inline]
            pub const fn try_mul(self, rhs: Self) -> Result<Self, ArithmeticError> {
                let wide = match self.to_basis().try_mul(rhs.to_basis()) {
                    Ok(v) => v,
                    Err(e) => return Err(e),
                };

                Self::new(wide.get())
            }

            #[inline]
            pub const fn try_div(self, rhs: Self) -> Result<Self, ArithmeticError> {
                let wide = match self.to_basis().try_div(rhs.to_basis()) {
                    Ok(v) => v,
                    Err(e) => return Err(e),
                };

                Self::new(wide.get())
            }

            #[inline]
            pub const fn try_rem(self, rhs: Self) -> Result<Self, ArithmeticError> {
                let wide = match self.to_basis().try_rem(rhs.to_basis()) {
                    Ok(v) => v,
                    Err(e) => return Err(e),
                };

                Self::new(wide.get())
            }

            #[inline]
            pub const fn try_shl(self, shift: u32) -> Result<Self, ArithmeticError> {
                let wide = match self.to_basis().try_shl(shift) {
                    Ok(v) => v,
                    Err(e) => return Err(e),
                };

                Self::new(wide.get())
            }

            #[inline]
            pub const fn try_shr(self, shift: u32) -> Result<Self, ArithmeticError> {
                let wide = match self.to_basis().try_shr(shift) {
                    Ok(v) => v,
                    Err(e) => return Err(e),
                };

                Self::new(wide.get())
            }

            // --- checked family ---

            #[inline]
            pub const fn checked_add(self, rhs: Self) -> Option<Self> {
                match self.try_add(rhs) {
                    Ok(v) => Some(v),
                    Err(_) => None,
                }
            }

            #[inline]
            pub const fn checked_sub(self, rhs: Self) -> Option<Self> {
                match self.try_sub(rhs) {
                    Ok(v) => Some(v),
                    Err(_) => None,
                }
            }

            #[inline]
            pub const fn checked_mul(self, rhs: Self) -> Option<Self> {
                match self.try_mul(rhs) {
                    Ok(v) => Some(v),
                    Err(_) => None,
                }
            }

            #[inline]
            pub const fn checked_div(self, rhs: Self) -> Option<Self> {
                match self.try_div(rhs) {
                    Ok(v) => Some(v),
                    Err(_) => None,
                }
            }

            #[inline]
            pub const fn checked_rem(self, rhs: Self) -> Option<Self> {
                match self.try_rem(rhs) {
                    Ok(v) => Some(v),
                    Err(_) => None,
                }
            }

            #[inline]
            pub const fn checked_shl(self, shift: u32) -> Option<Self> {
                match self.try_shl(shift) {
                    Ok(v) => Some(v),
                    Err(_) => None,
                }
            }

            #[inline]
            pub const fn checked_shr(self, shift: u32) -> Option<Self> {
                match self.try_shr(shift) {
                    Ok(v) => Some(v),
                    Err(_) => None,
                }
            }

            // --- saturating family: clamp into the range ---

            #[inline]
            pub const fn saturating_add(self, rhs: Self) -> Self {
                Self::clamp_into(self.to_basis().saturating_add(rhs.to_basis()).get())
            }

            #[inline]
            pub const fn saturating_sub(self, rhs: Self) -> Self {
                Self::clamp_into(self.to_basis().saturating_sub(rhs.to_basis()).get())
            }

            #[inline]
            pub const fn saturating_mul(self, rhs: Self) -> Self {
                Self::clamp_into(self.to_basis().saturating_mul(rhs.to_basis()).get())
            }

            /// Quotients can fall below `MIN`; those clamp. A zero
            /// divisor is still a domain error.
            #[track_caller]
            #[inline]
            pub fn saturating_div(self, rhs: Self) -> Self {
                match self.to_basis().try_div(rhs.to_basis()) {
                    Ok(v) => Self::clamp_into(v.get()),
                    Err(e) => panic!("{}", e),
                }
            }

            #[track_caller]
            #[inline]
            pub fn saturating_rem(self, rhs: Self) -> Self {
                match self.to_basis().try_rem(rhs.to_basis()) {
                    Ok(v) => Self::clamp_into(v.get()),
                    Err(e) => panic!("{}", e),
                }
            }

            #[inline]
            pub const fn saturating_shl(self, shift: u32) -> Self {
                Self::clamp_into(self.to_basis().saturating_shl(shift).get())
            }

            #[inline]
            pub const fn saturating_shr(self, shift: u32) -> Self {
                Self::clamp_into(self.to_basis().saturating_shr(shift).get())
            }

            // --- wrapping family: wrap at the width, then the range
            // invariant is re-checked and violations are domain errors ---

            #[track_caller]
            #[inline]
            pub fn wrapping_add(self, rhs: Self) -> Self {
                match Self::new(self.to_basis().wrapping_add(rhs.to_basis()).get()) {
                    Ok(v) => v,
                    Err(e) => panic!("{}", e),
                }
            }

            #[track_caller]
            #[inline]
            pub fn wrapping_sub(self, rhs: Self) -> Self {
                match Self::new(self.to_basis().wrapping_sub(rhs.to_basis()).get()) {
                    Ok(v) => v,
                    Err(e) => panic!("{}", e),
                }
            }

            #[track_caller]
            #[inline]
            pub fn wrapping_mul(self, rhs: Self) -> Self {
                match Self::new(self.to_basis().wrapping_mul(rhs.to_basis()).get()) {
                    Ok(v) => v,
                    Err(e) => panic!("{}", e),
                }
            }

            #[track_caller]
            #[inline]
            pub fn wrapping_div(self, rhs: Self) -> Self {
                match self.try_div(rhs) {
                    Ok(v) => v,
                    Err(e) => panic!("{}", e),
                }
            }

            #[track_caller]
            #[inline]
            pub fn wrapping_rem(self, rhs: Self) -> Self {
                match self.try_rem(rhs) {
                    Ok(v) => v,
                    Err(e) => panic!("{}", e),
                }
            }

            #[track_caller]
            #[inline]
            pub fn wrapping_shl(self, shift: u32) -> Self {
                match Self::new(self.to_basis().wrapping_shl(shift).get()) {
                    Ok(v) => v,
                    Err(e) => panic!("{}", e),
                }
            }

            #[track_caller]
            #[inline]
            pub fn wrapping_shr(self, shift: u32) -> Self {
                match Self::new(self.to_basis().wrapping_shr(shift).get()) {
                    Ok(v) => v,
                    Err(e) => panic!("{}", e),
                }
            }

            // --- strict family ---

            #[inline]
            pub fn strict_add(self, rhs: Self) -> Self {
                match self.try_add(rhs) {
                    Ok(v) => v,
                    Err(_) => std::process::abort(),
                }
            }

            #[inline]
            pub fn strict_sub(self, rhs: Self) -> Self {
                match self.try_sub(rhs) {
                    Ok(v) => v,
                    Err(_) => std::process::abort(),
                }
            }

            #[inline]
            pub fn strict_mul(self, rhs: Self) -> Self {
                match self.try_mul(rhs) {
                    Ok(v) => v,
                    Err(_) => std::process::abort(),
                }
            }

            #[inline]
            pub fn strict_div(self, rhs: Self) -> Self {
                match self.try_div(rhs) {
                    Ok(v) => v,
                    Err(_) => std::process::abort(),
                }
            }

            #[inline]
            pub fn strict_rem(self, rhs: Self) -> Self {
                match self.try_rem(rhs) {
                    Ok(v) => v,
                    Err(_) => std::process::abort(),
                }
            }

            #[inline]
            pub fn strict_shl(self, shift: u32) -> Self {
                match self.try_shl(shift) {
                    Ok(v) => v,
                    Err(_) => std::process::abort(),
                }
            }

            #[inline]
            pub fn strict_shr(self, shift: u32) -> Self {
                match self.try_shr(shift) {
                    Ok(v) => v,
                    Err(_) => std::process::abort(),
                }
            }

            // --- parsing: the parsed value must also satisfy the range ---

            pub fn from_str_radix(src: &str, radix: u32) -> Result<Self, ArithmeticError> {
                let wide = <$basis>::from_str_radix(src, radix)?;
                Self::new(wide.get())
            }
        }

        // The lower bound is the natural rest state, matching the
        // default of the range-checked construction path.
        impl<const MIN: $prim, const MAX: $prim> Default for $name<MIN, MAX> {
            #[inline]
            fn default() -> Self {
                Self::MIN_VALUE
            }
        }

        impl<const MIN: $prim, const MAX: $prim> core::ops::Add for $name<MIN, MAX> {
            type Output = Self;

            #[track_caller]
            #[inline]
            fn add(self, rhs: Self) -> Self {
                match self.try_add(rhs) {
                    Ok(v) => v,
                    Err(e) => panic!("{}", e),
                }
            }
        }

        impl<const MIN: $prim, const MAX: $prim> core::ops::Sub for $name<MIN, MAX> {
            type Output = Self;

            #[track_caller]
            #[inline]
            fn sub(self, rhs: Self) -> Self {
                match self.try_sub(rhs) {
                    Ok(v) => v,
                    Err(e) => panic!("{}", e),
                }
            }
        }

        impl<const MIN: $prim, const MAX: $prim> core::ops::Mul for $name<MIN, MAX> {
            type Output = Self;

            #[track_caller]
            #[inline]
            fn mul(self, rhs: Self) -> Self {
                match self.try_mul(rhs) {
                    Ok(v) => v,
                    Err(e) => panic!("{}", e),
                }
            }
        }

        impl<const MIN: $prim, const MAX: $prim> core::ops::Div for $name<MIN, MAX> {
            type Output = Self;

            #[track_caller]
            #[inline]
            fn div(self, rhs: Self) -> Self {
                match self.try_div(rhs) {
                    Ok(v) => v,
                    Err(e) => panic!("{}", e),
                }
            }
        }

        impl<const MIN: $prim, const MAX: $prim> core::ops::Rem for $name<MIN, MAX> {
            type Output = Self;

            #[track_caller]
            #[inline]
            fn rem(self, rhs: Self) -> Self {
                match self.try_rem(rhs) {
                    Ok(v) => v,
                    Err(e) => panic!("{}", e),
                }
            }
        }

        impl<const MIN: $prim, const MAX: $prim> core::ops::Shl<u32> for $name<MIN, MAX> {
            type Output = Self;

            #[track_caller]
            #[inline]
            fn shl(self, shift: u32) -> Self {
                match self.try_shl(shift) {
                    Ok(v) => v,
                    Err(e) => panic!("{}", e),
                }
            }
        }

        impl<const MIN: $prim, const MAX: $prim> core::ops::Shr<u32> for $name<MIN, MAX> {
            type Output = Self;

            #[track_caller]
            #[inline]
            fn shr(self, shift: u32) -> Self {
                match self.try_shr(shift) {
                    Ok(v) => v,
                    Err(e) => panic!("{}", e),
                }
            }
        }

        impl<const MIN: $prim, const MAX: $prim> core::ops::AddAssign for $name<MIN, MAX> {
            #[track_caller]
            #[inline]
            fn add_assign(&mut self, rhs: Self) { *self = *self + rhs; }
        }

        impl<const MIN: $prim, const MAX: $prim> core::ops::SubAssign for $name<MIN, MAX> {
            #[track_caller]
            #[inline]
            fn sub_assign(&mut self, rhs: Self) { *self = *self - rhs; }
        }

        impl<const MIN: $prim, const MAX: $prim> core::ops::MulAssign for $name<MIN, MAX> {
            #[track_caller]
            #[inline]
            fn mul_assign(&mut self, rhs: Self) { *self = *self * rhs; }
        }

        impl<const MIN: $prim, const MAX: $prim> core::ops::DivAssign for $name<MIN, MAX> {
            #[track_caller]
            #[inline]
            fn div_assign(&mut self, rhs: Self) { *self = *self / rhs; }
        }

        impl<const MIN: $prim, const MAX: $prim> core::ops::RemAssign for $name<MIN, MAX> {
            #[track_caller]
            #[inline]
            fn rem_assign(&mut self, rhs: Self) { *self = *self % rhs; }
        }

        // Extraction to the raw width (and wider ones) never fails.
        impl<const MIN: $prim, const MAX: $prim> From<$name<MIN, MAX>> for $prim {
            #[inline]
            fn from(value: $name<MIN, MAX>) -> $prim { value.0 }
        }

        $(
            impl<const MIN: $prim, const MAX: $prim> From<$name<MIN, MAX>> for $wider {
                #[inline]
                fn from(value: $name<MIN, MAX>) -> $wider { <$wider>::from(value.0) }
            }
        )*

        impl<const MIN: $prim, const MAX: $prim> core::fmt::Display for $name<MIN, MAX> {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl<const MIN: $prim, const MAX: $prim> core::fmt::Debug for $name<MIN, MAX> {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Debug::fmt(&self.0, f)
            }
        }

        impl<const MIN: $prim, const MAX: $prim> core::fmt::Binary for $name<MIN, MAX> {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Binary::fmt(&self.0, f)
            }
        }

        impl<const MIN: $prim, const MAX: $prim> core::fmt::Octal for $name<MIN, MAX> {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Octal::fmt(&self.0, f)
            }
        }

        impl<const MIN: $prim, const MAX: $prim> core::fmt::LowerHex for $name<MIN, MAX> {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::LowerHex::fmt(&self.0, f)
            }
        }

        impl<const MIN: $prim, const MAX: $prim> core::fmt::UpperHex for $name<MIN, MAX> {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::UpperHex::fmt(&self.0, f)
            }
        }

        impl<const MIN: $prim, const MAX: $prim> core::str::FromStr for $name<MIN, MAX> {
            type Err = ArithmeticError;

            fn from_str(src: &str) -> Result<Self, Self::Err> {
                Self::from_str_radix(src, 10)
            }
        }

        #[cfg(feature = "serde")]
        impl<const MIN: $prim, const MAX: $prim> serde::Serialize for $name<MIN, MAX> {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where S: serde::Serializer
            {
                self.0.serialize(serializer)
            }
        }

        #[cfg(feature = "serde")]
        impl<'de, const MIN: $prim, const MAX: $prim> serde::Deserialize<'de> for $name<MIN, MAX> {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
                where D: serde::Deserializer<'de>
            {
                let raw = <$prim>::deserialize(deserializer)?;
                Self::new(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

construct_bounded! {
    /// 8-bit unsigned integer restricted to a closed range.
    pub struct BoundedU8(u8, U8, [u16, u32, u64, u128]);
}

construct_bounded! {
    /// 16-bit unsigned integer restricted to a closed range.
    pub struct BoundedU16(u16, U16, [u32, u64, u128]);
}

construct_bounded! {
    /// 32-bit unsigned integer restricted to a closed range.
    pub struct BoundedU32(u32, U32, [u64, u128]);
}

construct_bounded! {
    /// 64-bit unsigned integer restricted to a closed range.
    pub struct BoundedU64(u64, U64, [u128]);
}

construct_bounded! {
    /// 128-bit unsigned integer restricted to a closed range.
    pub struct BoundedU128(u128, U128, []);
}
