//! Error types.

use core::fmt::{self, Display, Formatter};

/// Hash-to-curve errors
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Error {
    /// Input is not a 32-byte big-endian integer below the field modulus
    InvalidFieldEncoding,
    /// Domain separation tag is longer than 255 bytes
    DomainTagTooLong,
    /// Requested output exceeds 255 digest blocks
    OutputTooLarge,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidFieldEncoding => write!(f, "invalid field element encoding"),
            Error::DomainTagTooLong => {
                write!(f, "domain separation tag exceeds 255 bytes")
            }
            Error::OutputTooLarge => write!(f, "requested output length is too large"),
        }
    }
}

impl core::error::Error for Error {}

impl From<Error> for elliptic_curve::Error {
    fn from(_: Error) -> Self {
        elliptic_curve::Error
    }
}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::Error;

    #[cfg(feature = "alloc")]
    #[test]
    fn display() {
        use alloc::string::ToString;

        assert_eq!(
            Error::InvalidFieldEncoding.to_string(),
            "invalid field element encoding"
        );
        assert_eq!(
            Error::DomainTagTooLong.to_string(),
            "domain separation tag exceeds 255 bytes"
        );
        assert_eq!(
            Error::OutputTooLarge.to_string(),
            "requested output length is too large"
        );
    }

    #[test]
    fn converts_into_elliptic_curve_error() {
        let err: elliptic_curve::Error = Error::OutputTooLarge.into();
        assert_eq!(err, elliptic_curve::Error);
    }
}
