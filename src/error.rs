// This is a part of Chrono.
// See README.md and LICENSE.txt for details.

use core::fmt;

/// The kind of an [`Error`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The year, month, day or ordinal does not name an existing calendar date.
    InvalidDate,
    /// The hour, minute or second is out of range.
    InvalidTime,
    /// The value does not fit in the representable range of the target type.
    OutOfRange,
}

/// The error returned by conversions into the types of this crate.
///
/// Most operations return an `Option` instead; this type is used where a `Result` is expected,
/// such as `TryFrom` implementations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Error {
    kind: ErrorKind,
}

impl Error {
    /// Internal constructor.
    #[inline]
    pub(crate) const fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Returns the kind of this error.
    #[inline]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ErrorKind::InvalidDate => write!(f, "invalid date"),
            ErrorKind::InvalidTime => write!(f, "invalid time"),
            ErrorKind::OutOfRange => write!(f, "value out of range"),
        }
    }
}

impl From<ErrorKind> for Error {
    #[inline]
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl std::error::Error for Error {}
