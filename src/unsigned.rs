use crate::construct_unsigned;
use crate::error::ArithmeticError;
use ::uint::construct_uint;

// Only multiplication on the 128-bit width needs a wider intermediate
// than the platform provides; every narrower width widens into the next
// native primitive.
construct_uint! {
    /// with 256-bits of precision, consisting of four 64-bit words.
    pub struct U256(4);
}

construct_unsigned! {
    /// Strict 8-bit unsigned integer.
    ///
    /// All arithmetic stays at 8 bits; operators fail loudly on
    /// overflow, underflow and zero divisors instead of promoting or
    /// wrapping. 8-bit values format as numbers, never as characters.
    pub struct U8(u8, u16);
}

construct_unsigned! {
    /// Strict 16-bit unsigned integer.
    pub struct U16(u16, u32);
}

construct_unsigned! {
    /// Strict 32-bit unsigned integer.
    pub struct U32(u32, u64);
}

construct_unsigned! {
    /// Strict 64-bit unsigned integer.
    pub struct U64(u64, u128);
}

construct_unsigned! {
    /// Strict 128-bit unsigned integer.
    ///
    /// Multiplication overflow is detected through a 256-bit
    /// intermediate product.
    pub struct U128(u128, U256);
}

// Widening between library widths (and to wider raw widths) always
// succeeds and is still spelled out explicitly at the call site.
macro_rules! impl_widening_conversions {
    ( $from:ty => $( $to:ident ( $to_prim:ty ) ),+ $(,)? ) => {
        $(
            impl From<$from> for $to {
                #[inline]
                fn from(value: $from) -> $to {
                    $to::new(<$to_prim>::from(value.get()))
                }
            }

            impl From<$from> for $to_prim {
                #[inline]
                fn from(value: $from) -> $to_prim {
                    <$to_prim>::from(value.get())
                }
            }
        )+
    };
}

// Narrowing is checked: the conversion fails when the value does not
// fit the smaller width.
macro_rules! impl_narrowing_conversions {
    ( $from:ty => $( $to:ident ( $to_prim:ty ) ),+ $(,)? ) => {
        $(
            impl TryFrom<$from> for $to {
                type Error = ArithmeticError;

                #[inline]
                fn try_from(value: $from) -> Result<$to, ArithmeticError> {
                    match <$to_prim>::try_from(value.get()) {
                        Ok(v) => Ok($to::new(v)),
                        Err(_) => Err(ArithmeticError::Narrowing),
                    }
                }
            }

            impl TryFrom<$from> for $to_prim {
                type Error = ArithmeticError;

                #[inline]
                fn try_from(value: $from) -> Result<$to_prim, ArithmeticError> {
                    <$to_prim>::try_from(value.get()).map_err(|_| ArithmeticError::Narrowing)
                }
            }
        )+
    };
}

impl_widening_conversions!(U8 => U16(u16), U32(u32), U64(u64), U128(u128));
impl_widening_conversions!(U16 => U32(u32), U64(u64), U128(u128));
impl_widening_conversions!(U32 => U64(u64), U128(u128));
impl_widening_conversions!(U64 => U128(u128));

impl_narrowing_conversions!(U16 => U8(u8));
impl_narrowing_conversions!(U32 => U16(u16), U8(u8));
impl_narrowing_conversions!(U64 => U32(u32), U16(u16), U8(u8));
impl_narrowing_conversions!(U128 => U64(u64), U32(u32), U16(u16), U8(u8));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_matches_the_raw_width() {
        assert_eq!(core::mem::size_of::<U8>(), core::mem::size_of::<u8>());
        assert_eq!(core::mem::size_of::<U16>(), core::mem::size_of::<u16>());
        assert_eq!(core::mem::size_of::<U32>(), core::mem::size_of::<u32>());
        assert_eq!(core::mem::size_of::<U64>(), core::mem::size_of::<u64>());
        assert_eq!(core::mem::size_of::<U128>(), core::mem::size_of::<u128>());

        assert_eq!(core::mem::align_of::<U32>(), core::mem::align_of::<u32>());
        assert_eq!(core::mem::align_of::<U128>(), core::mem::align_of::<u128>());
    }

    #[test]
    fn construction_round_trips() {
        assert_eq!(U8::new(200).get(), 200);
        assert_eq!(U32::new(0xDEAD_BEEF).get(), 0xDEAD_BEEF);
        assert_eq!(U128::new(u128::MAX).get(), u128::MAX);
        assert_eq!(u64::from(U64::new(17)), 17);
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(U16::default(), U16::ZERO);
        assert_eq!(U128::default().get(), 0);
    }

    #[test]
    fn limits_mirror_the_raw_width() {
        assert_eq!(U8::MAX.get(), u8::MAX);
        assert_eq!(U8::MIN.get(), u8::MIN);
        assert_eq!(U64::BITS, 64);
        assert_eq!(U128::MAX.get(), u128::MAX);
    }

    #[test]
    fn widening_preserves_the_value() {
        let x = U8::new(200);
        assert_eq!(U16::from(x).get(), 200);
        assert_eq!(U128::from(x).get(), 200);
        assert_eq!(u32::from(x), 200);
    }

    #[test]
    fn narrowing_checks_the_value() {
        assert_eq!(U8::try_from(U16::new(255)), Ok(U8::new(255)));
        assert_eq!(U8::try_from(U16::new(256)), Err(ArithmeticError::Narrowing));
        assert_eq!(u8::try_from(U128::new(300)), Err(ArithmeticError::Narrowing));
        assert_eq!(u16::try_from(U128::new(300)), Ok(300));
    }

    #[test]
    fn comparison_and_hash_follow_the_raw_value() {
        assert!(U32::new(1) < U32::new(2));
        assert_eq!(U32::new(7), U32::new(7));

        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(U32::new(7));
        assert!(set.contains(&U32::new(7)));
    }

    #[test]
    fn widened_mul_flag_matches_on_the_big_width() {
        let (lo, overflow) = U128::new(u128::MAX).overflowing_mul(U128::new(2));
        assert!(overflow);
        assert_eq!(lo.get(), u128::MAX.wrapping_mul(2));

        let (v, overflow) = U128::new(1 << 100).overflowing_mul(U128::new(1 << 20));
        assert!(!overflow);
        assert_eq!(v.get(), 1u128 << 120);
    }
}
