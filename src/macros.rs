/// Macro to construct strict unsigned integer types over a raw width.
///
/// Usage:
///
/// ```ignore
/// construct_unsigned! {
///     pub struct U8(u8, u16); // storage, widened intermediate
/// }
/// ```
///
/// The widened intermediate is used for multiplication overflow
/// detection; the 128-bit width hands in a 256-bit integer.
#[macro_export]
macro_rules! construct_unsigned {
    ( $(#[$attr:meta])* $vis:vis struct $name:ident ( $prim:ty, $wide:ty ); ) => {
        #[repr(transparent)]
        $(#[$attr])*
        #[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
        $vis struct $name($prim);

        impl $name {
            /// The number of bits in this type.
            pub const BITS: u32 = <$prim>::BITS;
            pub const MIN: Self = Self(<$prim>::MIN);
            pub const MAX: Self = Self(<$prim>::MAX);
            pub const ZERO: Self = Self(0);
            pub const ONE: Self = Self(1);

            /// Wrap a raw value. The only way in; there are no implicit
            /// conversions from other widths or signed types.
            #[inline]
            pub const fn new(value: $prim) -> Self {
                Self(value)
            }

            /// Extract the raw value.
            #[inline]
            pub const fn get(self) -> $prim {
                self.0
            }

            // Shift counts at or above the width collapse to a sentinel
            // the fallible core always rejects.
            #[inline]
            const fn shift_amount(self) -> u32 {
                if self.0 >= Self::BITS as $prim {
                    u32::MAX
                } else {
                    self.0 as u32
                }
            }

            // --- fallible core (the throw engine) ---

            /// Addition that reports overflow instead of wrapping.
            #[inline]
            pub const fn try_add(self, rhs: Self) -> Result<Self, $crate::error::ArithmeticError> {
                match self.0.checked_add(rhs.0) {
                    Some(v) => Ok(Self(v)),
                    None => Err($crate::error::ArithmeticError::Overflow($crate::error::Op::Add)),
                }
            }

            /// Subtraction that reports underflow for mathematically
            /// negative results.
            #[inline]
            pub const fn try_sub(self, rhs: Self) -> Result<Self, $crate::error::ArithmeticError> {
                match self.0.checked_sub(rhs.0) {
                    Some(v) => Ok(Self(v)),
                    None => Err($crate::error::ArithmeticError::Underflow($crate::error::Op::Sub)),
                }
            }

            /// Multiplication that reports overflow.
            #[inline]
            pub const fn try_mul(self, rhs: Self) -> Result<Self, $crate::error::ArithmeticError> {
                match self.0.checked_mul(rhs.0) {
                    Some(v) => Ok(Self(v)),
                    None => Err($crate::error::ArithmeticError::Overflow($crate::error::Op::Mul)),
                }
            }

            /// Division; a zero divisor is a domain error.
            #[inline]
            pub const fn try_div(self, rhs: Self) -> Result<Self, $crate::error::ArithmeticError> {
                if rhs.0 == 0 {
                    Err($crate::error::ArithmeticError::DivideByZero)
                } else {
                    Ok(Self(self.0 / rhs.0))
                }
            }

            /// Remainder; a zero divisor is a domain error.
            #[inline]
            pub const fn try_rem(self, rhs: Self) -> Result<Self, $crate::error::ArithmeticError> {
                if rhs.0 == 0 {
                    Err($crate::error::ArithmeticError::DivideByZero)
                } else {
                    Ok(Self(self.0 % rhs.0))
                }
            }

            /// Left shift. Fails when the count reaches the width or any
            /// set bit would be pushed past the top.
            #[inline]
            pub const fn try_shl(self, shift: u32) -> Result<Self, $crate::error::ArithmeticError> {
                if shift >= Self::BITS {
                    return Err($crate::error::ArithmeticError::Overflow($crate::error::Op::Shl));
                }

                if shift != 0 && (self.0 >> (Self::BITS - shift)) != 0 {
                    return Err($crate::error::ArithmeticError::Overflow($crate::error::Op::Shl));
                }

                Ok(Self(self.0 << shift))
            }

            /// Right shift. Fails when the count reaches the width.
            #[inline]
            pub const fn try_shr(self, shift: u32) -> Result<Self, $crate::error::ArithmeticError> {
                if shift >= Self::BITS {
                    return Err($crate::error::ArithmeticError::Overflow($crate::error::Op::Shr));
                }

                Ok(Self(self.0 >> shift))
            }

            /// Exponentiation that reports overflow.
            #[inline]
            pub const fn try_pow(self, exp: u32) -> Result<Self, $crate::error::ArithmeticError> {
                match self.0.checked_pow(exp) {
                    Some(v) => Ok(Self(v)),
                    None => Err($crate::error::ArithmeticError::Overflow($crate::error::Op::Pow)),
                }
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

            /// `None` under the same conditions the throwing shift fails,
            /// including set bits pushed past the top.
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

            #[inline]
            pub const fn checked_pow(self, exp: u32) -> Option<Self> {
                match self.try_pow(exp) {
                    Ok(v) => Some(v),
                    Err(_) => None,
                }
            }

            // --- wrapping family (modulo 2^N; zero divisors still fail) ---

            #[inline]
            pub const fn wrapping_add(self, rhs: Self) -> Self {
                Self(self.0.wrapping_add(rhs.0))
            }

            #[inline]
            pub const fn wrapping_sub(self, rhs: Self) -> Self {
                Self(self.0.wrapping_sub(rhs.0))
            }

            #[inline]
            pub const fn wrapping_mul(self, rhs: Self) -> Self {
                Self(self.0.wrapping_mul(rhs.0))
            }

            /// Unsigned division cannot wrap; this is plain division with
            /// the usual domain error on a zero divisor.
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

            /// The mathematical result reduced modulo 2^N, so a count at
            /// or beyond the width yields zero.
            #[inline]
            pub const fn wrapping_shl(self, shift: u32) -> Self {
                if shift >= Self::BITS {
                    Self::ZERO
                } else {
                    Self(self.0 << shift)
                }
            }

            #[inline]
            pub const fn wrapping_shr(self, shift: u32) -> Self {
                if shift >= Self::BITS {
                    Self::ZERO
                } else {
                    Self(self.0 >> shift)
                }
            }

            #[inline]
            pub const fn wrapping_pow(self, exp: u32) -> Self {
                Self(self.0.wrapping_pow(exp))
            }

            // --- saturating family ---

            #[inline]
            pub const fn saturating_add(self, rhs: Self) -> Self {
                Self(self.0.saturating_add(rhs.0))
            }

            #[inline]
            pub const fn saturating_sub(self, rhs: Self) -> Self {
                Self(self.0.saturating_sub(rhs.0))
            }

            #[inline]
            pub const fn saturating_mul(self, rhs: Self) -> Self {
                Self(self.0.saturating_mul(rhs.0))
            }

            /// Saturation does not change division; only the zero divisor
            /// fails, as everywhere else.
            #[track_caller]
            #[inline]
            pub fn saturating_div(self, rhs: Self) -> Self {
                match self.try_div(rhs) {
                    Ok(v) => v,
                    Err(e) => panic!("{}", e),
                }
            }

            #[track_caller]
            #[inline]
            pub fn saturating_rem(self, rhs: Self) -> Self {
                match self.try_rem(rhs) {
                    Ok(v) => v,
                    Err(e) => panic!("{}", e),
                }
            }

            /// Clamps to `MAX` when the count reaches the width or a set
            /// bit would be lost off the top.
            #[inline]
            pub const fn saturating_shl(self, shift: u32) -> Self {
                match self.try_shl(shift) {
                    Ok(v) => v,
                    Err(_) => Self::MAX,
                }
            }

            /// Clamps to zero when the count reaches the width.
            #[inline]
            pub const fn saturating_shr(self, shift: u32) -> Self {
                match self.try_shr(shift) {
                    Ok(v) => v,
                    Err(_) => Self::MIN,
                }
            }

            #[inline]
            pub const fn saturating_pow(self, exp: u32) -> Self {
                Self(self.0.saturating_pow(exp))
            }

            // --- overflowing family (wrapped value + did-not-fit flag) ---

            #[inline]
            pub const fn overflowing_add(self, rhs: Self) -> (Self, bool) {
                let (v, overflow) = self.0.overflowing_add(rhs.0);
                (Self(v), overflow)
            }

            #[inline]
            pub const fn overflowing_sub(self, rhs: Self) -> (Self, bool) {
                let (v, overflow) = self.0.overflowing_sub(rhs.0);
                (Self(v), overflow)
            }

            /// The flag comes from the widened product: set iff any bit of
            /// the double-width result lies above position N-1.
            #[inline]
            pub fn overflowing_mul(self, rhs: Self) -> (Self, bool) {
                let wide = <$wide>::from(self.0) * <$wide>::from(rhs.0);
                let overflow = wide > <$wide>::from(<$prim>::MAX);

                (Self(self.0.wrapping_mul(rhs.0)), overflow)
            }

            /// There is no wrapped sentinel for a zero divisor; that case
            /// fails like the throwing form.
            #[track_caller]
            #[inline]
            pub fn overflowing_div(self, rhs: Self) -> (Self, bool) {
                match self.try_div(rhs) {
                    Ok(v) => (v, false),
                    Err(e) => panic!("{}", e),
                }
            }

            #[track_caller]
            #[inline]
            pub fn overflowing_rem(self, rhs: Self) -> (Self, bool) {
                match self.try_rem(rhs) {
                    Ok(v) => (v, false),
                    Err(e) => panic!("{}", e),
                }
            }

            #[inline]
            pub const fn overflowing_shl(self, shift: u32) -> (Self, bool) {
                if shift >= Self::BITS {
                    (Self::ZERO, true)
                } else {
                    let lost = shift != 0 && (self.0 >> (Self::BITS - shift)) != 0;
                    (Self(self.0 << shift), lost)
                }
            }

            #[inline]
            pub const fn overflowing_shr(self, shift: u32) -> (Self, bool) {
                if shift >= Self::BITS {
                    (Self::ZERO, true)
                } else {
                    (Self(self.0 >> shift), false)
                }
            }

            #[inline]
            pub const fn overflowing_pow(self, exp: u32) -> (Self, bool) {
                let (v, overflow) = self.0.overflowing_pow(exp);
                (Self(v), overflow)
            }

            // --- strict family: terminate instead of unwinding ---

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

            // --- bit queries and manipulation ---

            #[inline] pub const fn count_ones(self) -> u32 { self.0.count_ones() }
            #[inline] pub const fn count_zeros(self) -> u32 { self.0.count_zeros() }
            #[inline] pub const fn leading_zeros(self) -> u32 { self.0.leading_zeros() }
            #[inline] pub const fn leading_ones(self) -> u32 { self.0.leading_ones() }
            #[inline] pub const fn trailing_zeros(self) -> u32 { self.0.trailing_zeros() }
            #[inline] pub const fn trailing_ones(self) -> u32 { self.0.trailing_ones() }
            #[inline] pub const fn rotate_left(self, n: u32) -> Self { Self(self.0.rotate_left(n)) }
            #[inline] pub const fn rotate_right(self, n: u32) -> Self { Self(self.0.rotate_right(n)) }
            #[inline] pub const fn swap_bytes(self) -> Self { Self(self.0.swap_bytes()) }
            #[inline] pub const fn reverse_bits(self) -> Self { Self(self.0.reverse_bits()) }
            #[inline] pub const fn is_power_of_two(self) -> bool { self.0.is_power_of_two() }

            /// One more than the index of the highest set bit; zero for zero.
            #[inline]
            pub const fn bit_width(self) -> u32 {
                Self::BITS - self.0.leading_zeros()
            }

            #[inline]
            pub const fn checked_next_power_of_two(self) -> Option<Self> {
                match self.0.checked_next_power_of_two() {
                    Some(v) => Some(Self(v)),
                    None => None,
                }
            }

            /// The smallest power of two `>= self`.
            #[track_caller]
            #[inline]
            pub fn next_power_of_two(self) -> Self {
                match self.0.checked_next_power_of_two() {
                    Some(v) => Self(v),
                    None => panic!("overflow detected in unsigned next power of two"),
                }
            }

            /// The largest power of two `<= self`; zero for zero.
            #[inline]
            pub const fn prev_power_of_two(self) -> Self {
                if self.0 == 0 {
                    Self::ZERO
                } else {
                    Self((1 as $prim) << (Self::BITS - 1 - self.0.leading_zeros()))
                }
            }

            // --- endian conversions ---

            #[inline] pub const fn to_be(self) -> Self { Self(self.0.to_be()) }
            #[inline] pub const fn to_le(self) -> Self { Self(self.0.to_le()) }
            #[inline] pub const fn from_be(value: Self) -> Self { Self(<$prim>::from_be(value.0)) }
            #[inline] pub const fn from_le(value: Self) -> Self { Self(<$prim>::from_le(value.0)) }

            #[inline]
            pub const fn to_be_bytes(self) -> [u8; core::mem::size_of::<$prim>()] {
                self.0.to_be_bytes()
            }

            #[inline]
            pub const fn to_le_bytes(self) -> [u8; core::mem::size_of::<$prim>()] {
                self.0.to_le_bytes()
            }

            #[inline]
            pub const fn to_ne_bytes(self) -> [u8; core::mem::size_of::<$prim>()] {
                self.0.to_ne_bytes()
            }

            #[inline]
            pub const fn from_be_bytes(bytes: [u8; core::mem::size_of::<$prim>()]) -> Self {
                Self(<$prim>::from_be_bytes(bytes))
            }

            #[inline]
            pub const fn from_le_bytes(bytes: [u8; core::mem::size_of::<$prim>()]) -> Self {
                Self(<$prim>::from_le_bytes(bytes))
            }

            #[inline]
            pub const fn from_ne_bytes(bytes: [u8; core::mem::size_of::<$prim>()]) -> Self {
                Self(<$prim>::from_ne_bytes(bytes))
            }

            // --- radix conversion ---

            /// Render in any base 2..=36 with lowercase digits.
            pub fn to_str_radix(self, radix: u32) -> String {
                $crate::charconv::to_str_radix(u128::from(self.0), radix)
            }

            /// Parse from any base 2..=36. A leading minus is a distinct
            /// domain error; out-of-range input reports parse overflow.
            pub fn from_str_radix(src: &str, radix: u32) -> Result<Self, $crate::error::ArithmeticError> {
                let src = src.trim();
                $crate::charconv::check_unsigned_source(src)?;

                match <$prim>::from_str_radix(src, radix) {
                    Ok(v) => Ok(Self(v)),
                    Err(e) => Err($crate::charconv::map_parse_error(&e)),
                }
            }
        }

        // ---- operators: the throw policy ----

        impl core::ops::Add for $name {
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

        impl core::ops::Sub for $name {
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

        impl core::ops::Mul for $name {
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

        impl core::ops::Div for $name {
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

        impl core::ops::Rem for $name {
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

        impl core::ops::Shl<u32> for $name {
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

        impl core::ops::Shr<u32> for $name {
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

        impl core::ops::Shl<$name> for $name {
            type Output = Self;

            #[track_caller]
            #[inline]
            fn shl(self, shift: $name) -> Self {
                match self.try_shl(shift.shift_amount()) {
                    Ok(v) => v,
                    Err(e) => panic!("{}", e),
                }
            }
        }

        impl core::ops::Shr<$name> for $name {
            type Output = Self;

            #[track_caller]
            #[inline]
            fn shr(self, shift: $name) -> Self {
                match self.try_shr(shift.shift_amount()) {
                    Ok(v) => v,
                    Err(e) => panic!("{}", e),
                }
            }
        }

        impl core::ops::AddAssign for $name {
            #[track_caller]
            #[inline]
            fn add_assign(&mut self, rhs: Self) { *self = *self + rhs; }
        }

        impl core::ops::SubAssign for $name {
            #[track_caller]
            #[inline]
            fn sub_assign(&mut self, rhs: Self) { *self = *self - rhs; }
        }

        impl core::ops::MulAssign for $name {
            #[track_caller]
            #[inline]
            fn mul_assign(&mut self, rhs: Self) { *self = *self * rhs; }
        }

        impl core::ops::DivAssign for $name {
            #[track_caller]
            #[inline]
            fn div_assign(&mut self, rhs: Self) { *self = *self / rhs; }
        }

        impl core::ops::RemAssign for $name {
            #[track_caller]
            #[inline]
            fn rem_assign(&mut self, rhs: Self) { *self = *self % rhs; }
        }

        impl core::ops::ShlAssign<u32> for $name {
            #[track_caller]
            #[inline]
            fn shl_assign(&mut self, shift: u32) { *self = *self << shift; }
        }

        impl core::ops::ShrAssign<u32> for $name {
            #[track_caller]
            #[inline]
            fn shr_assign(&mut self, shift: u32) { *self = *self >> shift; }
        }

        impl core::ops::ShlAssign<$name> for $name {
            #[track_caller]
            #[inline]
            fn shl_assign(&mut self, shift: $name) { *self = *self << shift; }
        }

        impl core::ops::ShrAssign<$name> for $name {
            #[track_caller]
            #[inline]
            fn shr_assign(&mut self, shift: $name) { *self = *self >> shift; }
        }

        impl core::ops::BitAnd for $name {
            type Output = Self;
            #[inline] fn bitand(self, rhs: Self) -> Self { Self(self.0 & rhs.0) }
        }
        impl core::ops::BitAndAssign for $name {
            #[inline] fn bitand_assign(&mut self, rhs: Self) { self.0 &= rhs.0; }
        }
        impl core::ops::BitOr for $name {
            type Output = Self;
            #[inline] fn bitor(self, rhs: Self) -> Self { Self(self.0 | rhs.0) }
        }
        impl core::ops::BitOrAssign for $name {
            #[inline] fn bitor_assign(&mut self, rhs: Self) { self.0 |= rhs.0; }
        }
        impl core::ops::BitXor for $name {
            type Output = Self;
            #[inline] fn bitxor(self, rhs: Self) -> Self { Self(self.0 ^ rhs.0) }
        }
        impl core::ops::BitXorAssign for $name {
            #[inline] fn bitxor_assign(&mut self, rhs: Self) { self.0 ^= rhs.0; }
        }
        impl core::ops::Not for $name {
            type Output = Self;
            #[inline] fn not(self) -> Self { Self(!self.0) }
        }

        // ---- raw-width interop ----

        impl From<$name> for $prim {
            #[inline]
            fn from(value: $name) -> $prim { value.0 }
        }

        // Construction is only ever from the matching raw width; other
        // widths and signed types have no path in.
        impl From<$prim> for $name {
            #[inline]
            fn from(value: $prim) -> $name { Self(value) }
        }

        // ---- formatting: everything passes through to the raw value so
        // width, fill, alignment, `#`, and zero padding behave identically ----

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl core::fmt::Debug for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Debug::fmt(&self.0, f)
            }
        }

        impl core::fmt::Binary for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Binary::fmt(&self.0, f)
            }
        }

        impl core::fmt::Octal for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Octal::fmt(&self.0, f)
            }
        }

        impl core::fmt::LowerHex for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::LowerHex::fmt(&self.0, f)
            }
        }

        impl core::fmt::UpperHex for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::UpperHex::fmt(&self.0, f)
            }
        }

        impl core::str::FromStr for $name {
            type Err = $crate::error::ArithmeticError;

            fn from_str(src: &str) -> Result<Self, Self::Err> {
                Self::from_str_radix(src, 10)
            }
        }

        // Optional: bytemuck
        #[cfg(feature = "bytemuck")]
        unsafe impl bytemuck::Zeroable for $name {}
        #[cfg(feature = "bytemuck")]
        unsafe impl bytemuck::Pod for $name {}

        // Optional: serde
        #[cfg(feature = "serde")]
        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where S: serde::Serializer
            {
                self.0.serialize(serializer)
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
                where D: serde::Deserializer<'de>
            {
                <$prim>::deserialize(deserializer).map(Self)
            }
        }
    };
}
