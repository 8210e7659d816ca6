use std::fmt;
use thiserror::Error;

/// The arithmetic operation an error originated from, used to build the
/// error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Shl,
    Shr,
    Pow,
    Parse,
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Op::Add => "addition",
            Op::Sub => "subtraction",
            Op::Mul => "multiplication",
            Op::Div => "division",
            Op::Rem => "remainder",
            Op::Shl => "left shift",
            Op::Shr => "right shift",
            Op::Pow => "exponentiation",
            Op::Parse => "parsing",
        };

        f.write_str(name)
    }
}

/// The broad failure classes a caller can dispatch on. Several
/// [`ArithmeticError`] variants collapse into [`ErrorKind::Domain`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Overflow,
    Underflow,
    Domain,
}

/// Every runtime failure the library can produce.
///
/// Operator forms panic with the `Display` text of these values; the
/// `try_*` forms return them. The message text is informational only,
/// the variant (and its [`kind`](ArithmeticError::kind)) is the contract.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithmeticError {
    /// The mathematical result exceeds the representable maximum.
    #[error("overflow detected in unsigned {0}")]
    Overflow(Op),

    /// The mathematical result would be negative.
    #[error("underflow detected in unsigned {0}")]
    Underflow(Op),

    /// Division or remainder with a zero divisor.
    #[error("division by zero")]
    DivideByZero,

    /// A bounded value fell outside its `[MIN, MAX]` range.
    #[error("value outside the bounds")]
    OutOfBounds,

    /// A narrowing conversion could not represent the value.
    #[error("overflow in conversion to smaller type")]
    Narrowing,

    /// A negative number was handed to an unsigned parser.
    #[error("negative input to an unsigned parser")]
    Negative,

    /// The input contained a digit invalid for the requested base.
    #[error("invalid digit for the requested base")]
    InvalidDigit,
}

impl ArithmeticError {
    /// Collapse the error into the three runtime failure kinds.
    pub const fn kind(self) -> ErrorKind {
        match self {
            ArithmeticError::Overflow(_) => ErrorKind::Overflow,
            ArithmeticError::Underflow(_) => ErrorKind::Underflow,
            ArithmeticError::DivideByZero
            | ArithmeticError::OutOfBounds
            | ArithmeticError::Narrowing
            | ArithmeticError::Negative
            | ArithmeticError::InvalidDigit => ErrorKind::Domain,
        }
    }
}
