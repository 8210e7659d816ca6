//! Safe unsigned integer value types.
//!
//! Arithmetic on these types never promotes and never fails silently:
//! every operation stays at its declared width and the behavior on
//! overflow, underflow or a zero divisor is chosen explicitly at the
//! call site — panic (the operator default), saturate, wrap, `Option`,
//! value-plus-flag, `Result`, process abort, or compile-time rejection
//! through the [`Verified`](verified::Verified) family.

pub mod bounded;
pub mod charconv;
pub mod error;
pub mod macros;
pub mod numeric;
pub mod policy;
pub mod unsigned;
pub mod verified;

pub use bounded::{BoundedU128, BoundedU16, BoundedU32, BoundedU64, BoundedU8};
pub use error::{ArithmeticError, ErrorKind, Op};
pub use numeric::{checked_ipow, checked_lcm, gcd, ipow, isqrt, lcm, midpoint};
pub use policy::{
    Checked, Fallible, OverflowPolicy, Overflowing, SafeUnsigned, Saturating, Strict, Throw,
    Wrapping,
};
pub use unsigned::{U128, U16, U32, U64, U8};
pub use verified::Verified;
