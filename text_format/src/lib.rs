// Copyright 2026 the Scrivener Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deduplicated character formats for text documents.
//!
//! A [`FormatRegistry`] hands out shared, immutable [`FormatDescriptor`]s:
//! every request with the same attributes yields the same instance, so a
//! document of thousands of characters carries only as many descriptor
//! allocations as it has distinct formats. Descriptors are requested with the
//! borrowed [`TextFormat`] builder and compared by instance identity.
//!
//! The registry is grow-only. Entries are created lazily on first request and
//! are never evicted or mutated, so a descriptor handle stays valid for as
//! long as any clone of it is alive.
//!
//! ## Example
//!
//! ```
//! use text_format::{FormatRegistry, TextFormat};
//!
//! let mut registry = FormatRegistry::new();
//! let heading = registry.get_or_create(TextFormat::new("Arial", 14).bold(true))?;
//! let again = registry.get_or_create(TextFormat::new("Arial", 14).bold(true))?;
//!
//! // Equal attributes resolve to the same shared instance.
//! assert!(heading.ptr_eq(&again));
//! assert_eq!(registry.count(), 1);
//! # Ok::<(), text_format::Error>(())
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

mod descriptor;
mod error;
mod registry;

pub use crate::descriptor::{FormatDescriptor, TextFormat};
pub use crate::error::{Error, ErrorKind, Field};
pub use crate::registry::FormatRegistry;
