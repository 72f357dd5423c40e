// Copyright 2026 the Scrivener Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Error produced when a format request fails validation.
///
/// Carries a non-exhaustive [`ErrorKind`] plus the [`Field`] that was
/// rejected and, for size errors, the offending value. A failed request
/// leaves the registry untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Error {
    /// The non-exhaustive category describing this error.
    kind: ErrorKind,

    /// The field that failed validation.
    field: Field,

    /// The rejected size value, when the error concerns the size field.
    size: Option<u32>,
}

impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The field that failed validation.
    pub fn field(&self) -> Field {
        self.field
    }

    /// The rejected size value, for [`ErrorKind::InvalidSize`] errors.
    pub fn size(&self) -> Option<u32> {
        self.size
    }

    pub(crate) fn invalid_size(size: u32) -> Self {
        Self {
            kind: ErrorKind::InvalidSize,
            field: Field::Size,
            size: Some(size),
        }
    }

    pub(crate) fn empty_name(field: Field) -> Self {
        Self {
            kind: ErrorKind::EmptyName,
            field,
            size: None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ErrorKind::InvalidSize => {
                if let Some(size) = self.size {
                    write!(f, "format size must be a positive integer, got {size}")
                } else {
                    write!(f, "format size must be a positive integer")
                }
            }
            ErrorKind::EmptyName => {
                write!(f, "format {} name must not be empty", self.field.as_str())
            }
        }
    }
}

impl core::error::Error for Error {}

/// The non-exhaustive category of an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The requested size was not a positive integer.
    InvalidSize,

    /// A required name field was empty.
    EmptyName,
}

/// Identifies the format field that failed validation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Field {
    /// The font family name.
    Font,

    /// The font size.
    Size,

    /// The foreground color name.
    Color,

    /// The background color name.
    Background,
}

impl Field {
    /// Lowercase name of the field, as used in error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Font => "font",
            Self::Size => "size",
            Self::Color => "color",
            Self::Background => "background",
        }
    }
}
