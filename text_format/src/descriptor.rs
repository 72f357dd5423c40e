// Copyright 2026 the Scrivener Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Model for shared character formats.

use alloc::sync::Arc;
use core::fmt;

use smallvec::SmallVec;

/// Requested formatting attributes for a run of characters.
///
/// This is the borrowed input to
/// [`FormatRegistry::get_or_create`](crate::FormatRegistry::get_or_create).
/// It carries no shared state of its own; the registry turns it into (or
/// resolves it to) a [`FormatDescriptor`].
///
/// Color and background default to `"black"` and `"white"`, and both style
/// flags default to off:
///
/// ```
/// use text_format::TextFormat;
///
/// let format = TextFormat::new("Arial", 12).bold(true);
/// assert_eq!(format.color, "black");
/// assert_eq!(format.background, "white");
/// assert!(!format.italic);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct TextFormat<'a> {
    /// Font family name.
    pub font: &'a str,
    /// Font size in points. Must be positive.
    pub size: u32,
    /// Bold style flag.
    pub bold: bool,
    /// Italic style flag.
    pub italic: bool,
    /// Foreground color name.
    pub color: &'a str,
    /// Background color name.
    pub background: &'a str,
}

impl<'a> TextFormat<'a> {
    /// Creates a format request with default style flags and colors.
    pub fn new(font: &'a str, size: u32) -> Self {
        Self {
            font,
            size,
            bold: false,
            italic: false,
            color: "black",
            background: "white",
        }
    }

    /// Sets the bold style flag.
    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Sets the italic style flag.
    pub fn italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    /// Sets the foreground color name.
    pub fn color(mut self, color: &'a str) -> Self {
        self.color = color;
        self
    }

    /// Sets the background color name.
    pub fn background(mut self, background: &'a str) -> Self {
        self.background = background;
        self
    }
}

/// The field values backing an interned descriptor.
///
/// String fields are `Arc<str>` so the registry key can share them without
/// copying.
#[derive(Debug)]
pub(crate) struct FormatData {
    pub(crate) font: Arc<str>,
    pub(crate) size: u32,
    pub(crate) bold: bool,
    pub(crate) italic: bool,
    pub(crate) color: Arc<str>,
    pub(crate) background: Arc<str>,
}

/// Handle for a shared, immutable character format.
///
/// Descriptors are created exclusively by a
/// [`FormatRegistry`](crate::FormatRegistry), which guarantees at most one
/// live instance per distinct set of field values. Cloning a descriptor
/// clones a handle to the same allocation.
///
/// Equality is instance identity ([`ptr_eq`](Self::ptr_eq)). Within a single
/// registry this coincides with field-value equality; descriptors from
/// different registries compare unequal even when their fields match.
#[derive(Clone, Debug)]
pub struct FormatDescriptor {
    data: Arc<FormatData>,
}

impl FormatDescriptor {
    pub(crate) fn new(request: &TextFormat<'_>) -> Self {
        Self {
            data: Arc::new(FormatData {
                font: request.font.into(),
                size: request.size,
                bold: request.bold,
                italic: request.italic,
                color: request.color.into(),
                background: request.background.into(),
            }),
        }
    }

    pub(crate) fn data(&self) -> &FormatData {
        &self.data
    }

    /// Returns the font family name.
    pub fn font(&self) -> &str {
        &self.data.font
    }

    /// Returns the font size in points.
    pub fn size(&self) -> u32 {
        self.data.size
    }

    /// Returns `true` if the format is bold.
    pub fn bold(&self) -> bool {
        self.data.bold
    }

    /// Returns `true` if the format is italic.
    pub fn italic(&self) -> bool {
        self.data.italic
    }

    /// Returns the foreground color name.
    pub fn color(&self) -> &str {
        &self.data.color
    }

    /// Returns the background color name.
    pub fn background(&self) -> &str {
        &self.data.background
    }

    /// Returns `true` if both handles refer to the same shared instance.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }
}

impl PartialEq for FormatDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for FormatDescriptor {}

impl fmt::Display for FormatDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut style: SmallVec<[&str; 2]> = SmallVec::new();
        if self.data.bold {
            style.push("bold");
        }
        if self.data.italic {
            style.push("italic");
        }
        write!(f, "Format[font={}, size={}, style=", self.font(), self.size())?;
        if style.is_empty() {
            f.write_str("normal")?;
        } else {
            for (i, part) in style.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                f.write_str(part)?;
            }
        }
        write!(f, ", color={}, bg={}]", self.color(), self.background())
    }
}

#[cfg(test)]
mod tests {
    use super::TextFormat;
    use crate::FormatRegistry;
    use alloc::format;

    #[test]
    fn display_normal_style() {
        let mut registry = FormatRegistry::new();
        let format = registry
            .get_or_create(TextFormat::new("Arial", 12))
            .unwrap();
        assert_eq!(
            format!("{format}"),
            "Format[font=Arial, size=12, style=normal, color=black, bg=white]"
        );
    }

    #[test]
    fn display_combined_styles() {
        let mut registry = FormatRegistry::new();
        let bold = registry
            .get_or_create(TextFormat::new("Times New Roman", 14).bold(true))
            .unwrap();
        assert_eq!(
            format!("{bold}"),
            "Format[font=Times New Roman, size=14, style=bold, color=black, bg=white]"
        );

        let both = registry
            .get_or_create(
                TextFormat::new("Courier", 10)
                    .bold(true)
                    .italic(true)
                    .color("red")
                    .background("grey"),
            )
            .unwrap();
        assert_eq!(
            format!("{both}"),
            "Format[font=Courier, size=10, style=bold, italic, color=red, bg=grey]"
        );
    }

    #[test]
    fn request_defaults() {
        let format = TextFormat::new("Arial", 12);
        assert_eq!(format.color, "black");
        assert_eq!(format.background, "white");
        assert!(!format.bold);
        assert!(!format.italic);
    }
}
