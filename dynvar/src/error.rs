use thiserror::Error;

/// Byte-order codec errors.
///
/// Type mismatches on [`Variant`](crate::Variant) access are not errors; getters fall back to a
/// default value instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The byte sequence handed to a decoder does not have exactly the width of the integer.
    #[error("length mismatch: expected {expected} bytes, got {actual}")]
    LengthMismatch {
        /// Width of the requested integer, in bytes.
        expected: usize,
        /// Length of the byte sequence that was supplied.
        actual: usize,
    },

    /// A prefix read ran out of input before a whole integer was available.
    #[error("truncated input: need {expected} bytes, only {actual} available")]
    Truncated {
        /// Width of the requested integer, in bytes.
        expected: usize,
        /// Number of bytes left in the buffer.
        actual: usize,
    },
}

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, Error>;
