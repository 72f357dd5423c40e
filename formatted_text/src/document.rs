// Copyright 2026 the Scrivener Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use text_format::{Error, FormatRegistry, TextFormat};

use crate::character::FormattedCharacter;
use crate::paragraph::{Paragraph, ParagraphStyle};

/// An ordered sequence of paragraphs sharing one format registry.
///
/// The append target is always the most recently started paragraph. Appending
/// text before any paragraph has been started implicitly opens one with the
/// default style.
#[derive(Clone, Debug, Default)]
pub struct Document {
    registry: FormatRegistry,
    paragraphs: Vec<Paragraph>,
}

impl Document {
    /// Creates an empty document with its own empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty document that interns formats into `registry`.
    ///
    /// Passing a pre-populated registry lets several documents in one session
    /// share descriptor instances.
    pub fn with_registry(registry: FormatRegistry) -> Self {
        Self {
            registry,
            paragraphs: Vec::new(),
        }
    }

    /// Starts a new paragraph and makes it the append target.
    ///
    /// Prior paragraphs are unaffected.
    pub fn new_paragraph(&mut self, style: ParagraphStyle) {
        self.paragraphs.push(Paragraph::new(style));
    }

    /// Appends `text` to the current paragraph, one formatted character per
    /// `char`.
    ///
    /// The format is resolved through the registry exactly once, so every
    /// appended character shares the same descriptor instance. If no
    /// paragraph has been started, a default one is created first. On
    /// validation failure nothing changes: no paragraph is created, no
    /// character is appended, and the registry is untouched.
    pub fn add_text(&mut self, text: &str, format: TextFormat<'_>) -> Result<(), Error> {
        let descriptor = self.registry.get_or_create(format)?;
        if self.paragraphs.is_empty() {
            self.paragraphs.push(Paragraph::new(ParagraphStyle::default()));
        }
        let last = self.paragraphs.len() - 1;
        let paragraph = &mut self.paragraphs[last];
        for ch in text.chars() {
            paragraph.push(FormattedCharacter::new(ch, descriptor.clone()));
        }
        Ok(())
    }

    /// Returns the paragraphs in order.
    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    /// Returns the number of paragraphs.
    pub fn len(&self) -> usize {
        self.paragraphs.len()
    }

    /// Returns `true` if no paragraph has been started.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// Borrows the document's format registry.
    pub fn registry(&self) -> &FormatRegistry {
        &self.registry
    }

    /// Returns the number of distinct formats interned so far.
    pub fn format_count(&self) -> usize {
        self.registry.count()
    }

    /// Renders the document as human-readable lines.
    ///
    /// Each paragraph contributes a header line with its index, alignment,
    /// and spacing, followed by one line per character showing the character
    /// and its format.
    pub fn render(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for (index, paragraph) in self.paragraphs.iter().enumerate() {
            lines.push(format!(
                "Paragraph {} [align={}, spacing={:?}]",
                index,
                paragraph.alignment(),
                paragraph.line_spacing(),
            ));
            for ch in paragraph.chars() {
                lines.push(ch.to_string());
            }
        }
        lines
    }

    /// Returns deduplication statistics for this document.
    pub fn stats(&self) -> DocumentStats {
        let total_chars = self.paragraphs.iter().map(Paragraph::len).sum();
        let unique_formats = self.registry.count();
        DocumentStats {
            total_chars,
            unique_formats,
            formats_saved: total_chars.saturating_sub(unique_formats),
        }
    }
}

/// Deduplication statistics for a [`Document`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DocumentStats {
    /// Total number of characters across all paragraphs.
    pub total_chars: usize,
    /// Number of distinct format descriptors in the document's registry.
    pub unique_formats: usize,
    /// Descriptor allocations avoided by sharing: total characters minus
    /// unique formats. This is a count of descriptor objects, an estimate of
    /// savings rather than a measured byte size.
    pub formats_saved: usize,
}
