// Copyright 2026 the Scrivener Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paragraph and document model over deduplicated character formats.
//!
//! A [`Document`] is an ordered sequence of [`Paragraph`]s, each an ordered
//! run of [`FormattedCharacter`]s. Formatting state lives in shared
//! descriptors obtained from the document's [`FormatRegistry`]; each
//! character carries only itself plus a handle to its format. Appending text
//! with no paragraph started yet implicitly opens a default paragraph (left
//! alignment, spacing 1.0).
//!
//! The model is append-only and single-threaded: paragraphs are never
//! reordered or removed, and the append target is always the most recently
//! started paragraph.
//!
//! ## Example
//!
//! ```
//! use formatted_text::{Alignment, Document, ParagraphStyle, TextFormat};
//!
//! let mut doc = Document::new();
//! doc.add_text("Hello", TextFormat::new("Arial", 12).bold(true))?;
//! doc.new_paragraph(ParagraphStyle::new().alignment(Alignment::Center));
//! doc.add_text("Bye", TextFormat::new("Arial", 12).bold(true))?;
//!
//! let stats = doc.stats();
//! assert_eq!(stats.total_chars, 8);
//! // Both paragraphs reuse the single bold Arial descriptor.
//! assert_eq!(stats.unique_formats, 1);
//! assert_eq!(stats.formats_saved, 7);
//! # Ok::<(), formatted_text::Error>(())
//! ```
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

mod character;
mod document;
mod paragraph;


pub use character::FormattedCharacter;
pub use document::{Document, DocumentStats};
pub use paragraph::{Alignment, Paragraph, ParagraphStyle};

pub use text_format::{Error, ErrorKind, Field, FormatDescriptor, FormatRegistry, TextFormat};
