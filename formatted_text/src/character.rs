// Copyright 2026 the Scrivener Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use text_format::FormatDescriptor;

/// A single character paired with its shared format.
///
/// The character itself is the only per-instance state; everything visual is
/// carried by the [`FormatDescriptor`] handle, which is shared with every
/// other character using the same attributes.
#[derive(Clone, Debug)]
pub struct FormattedCharacter {
    ch: char,
    format: FormatDescriptor,
}

impl FormattedCharacter {
    pub(crate) fn new(ch: char, format: FormatDescriptor) -> Self {
        Self { ch, format }
    }

    /// Returns the character.
    pub fn ch(&self) -> char {
        self.ch
    }

    /// Returns the shared format descriptor.
    pub fn format(&self) -> &FormatDescriptor {
        &self.format
    }
}

impl fmt::Display for FormattedCharacter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' with {}", self.ch, self.format)
    }
}
