use std::fmt;

/// Failure kinds for length-prefix decoding and encoding.
///
/// Each kind is surfaced to the caller as-is so the framing layer can decide
/// per-kind whether to wait for more bytes (`Truncated`) or drop the
/// connection (`Malformed`, `OutOfRange`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthError {
    /// The buffer ran out before the final byte of the prefix was seen.
    Truncated,
    /// Five bytes read and the continuation bit is still set.
    Malformed,
    /// The value does not fit the supported 31-bit length domain.
    OutOfRange,
}

impl fmt::Display for LengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LengthError::Truncated =>
                write!(f, "length header incomplete"),
            LengthError::Malformed =>
                write!(f, "too many continuation bytes in length header"),
            LengthError::OutOfRange =>
                write!(f, "length exceeds the 2GB message limit"),
        }
    }
}

impl std::error::Error for LengthError {}
