// Copyright 2026 the Scrivener Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;

use hashbrown::hash_map::RawEntryMut;
use hashbrown::{Equivalent, HashMap};

use crate::descriptor::{FormatDescriptor, TextFormat};
use crate::error::{Error, Field};

/// Owned structural key for the registry map.
///
/// The string fields share their allocations with the stored descriptor, so
/// interning a format costs one descriptor plus three `Arc` clones. Field
/// order must match [`TextFormat`] so the derived `Hash` implementations
/// agree.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
struct FormatKey {
    font: Arc<str>,
    size: u32,
    bold: bool,
    italic: bool,
    color: Arc<str>,
    background: Arc<str>,
}

impl FormatKey {
    fn new(descriptor: &FormatDescriptor) -> Self {
        let data = descriptor.data();
        Self {
            font: data.font.clone(),
            size: data.size,
            bold: data.bold,
            italic: data.italic,
            color: data.color.clone(),
            background: data.background.clone(),
        }
    }
}

impl Equivalent<FormatKey> for TextFormat<'_> {
    fn equivalent(&self, key: &FormatKey) -> bool {
        self.font == &*key.font
            && self.size == key.size
            && self.bold == key.bold
            && self.italic == key.italic
            && self.color == &*key.color
            && self.background == &*key.background
    }
}

/// Deduplicating store of character formats.
///
/// For any two requests with identical field values the registry returns the
/// same [`FormatDescriptor`] instance, never allocating a duplicate. Entries
/// are created lazily on first request and never evicted or mutated; the
/// registry only grows for its lifetime.
///
/// A registry is an ordinary value with an explicit owner (typically a
/// document or an application session). It is not synchronized:
/// [`get_or_create`](Self::get_or_create) is a check-then-act sequence, so a
/// registry shared across threads must be wrapped in a mutex or similar.
///
/// Lookups hash the borrowed request directly, so a cache hit performs no
/// allocation.
#[derive(Clone, Default, Debug)]
pub struct FormatRegistry {
    formats: HashMap<FormatKey, FormatDescriptor>,
}

impl FormatRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the shared descriptor for the requested attributes, interning
    /// a new one on first request.
    ///
    /// The request is validated before any mutation: the size must be
    /// positive and the font, color, and background names must be non-empty.
    /// A failed request leaves the registry unchanged.
    pub fn get_or_create(&mut self, request: TextFormat<'_>) -> Result<FormatDescriptor, Error> {
        validate(&request)?;
        match self.formats.raw_entry_mut().from_key(&request) {
            RawEntryMut::Occupied(entry) => Ok(entry.get().clone()),
            RawEntryMut::Vacant(entry) => {
                let descriptor = FormatDescriptor::new(&request);
                entry.insert(FormatKey::new(&descriptor), descriptor.clone());
                Ok(descriptor)
            }
        }
    }

    /// Returns the number of distinct descriptors currently held.
    pub fn count(&self) -> usize {
        self.formats.len()
    }

    /// Returns `true` if no descriptors have been interned yet.
    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }

    /// Returns an iterator over the interned descriptors.
    ///
    /// Iteration order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = &FormatDescriptor> {
        self.formats.values()
    }
}

fn validate(request: &TextFormat<'_>) -> Result<(), Error> {
    if request.size == 0 {
        return Err(Error::invalid_size(request.size));
    }
    if request.font.is_empty() {
        return Err(Error::empty_name(Field::Font));
    }
    if request.color.is_empty() {
        return Err(Error::empty_name(Field::Color));
    }
    if request.background.is_empty() {
        return Err(Error::empty_name(Field::Background));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::FormatRegistry;
    use crate::{ErrorKind, Field, TextFormat};
    use alloc::format;
    use alloc::vec::Vec;

    #[test]
    fn equal_requests_share_one_instance() {
        let mut registry = FormatRegistry::new();
        let first = registry
            .get_or_create(TextFormat::new("Arial", 12).bold(true))
            .unwrap();
        let second = registry
            .get_or_create(TextFormat::new("Arial", 12).bold(true))
            .unwrap();

        assert!(first.ptr_eq(&second));
        assert_eq!(first, second);
        assert_eq!(registry.count(), 1);
    }

    #[test]
    fn distinct_requests_get_distinct_instances() {
        let mut registry = FormatRegistry::new();
        let bold = registry
            .get_or_create(TextFormat::new("Arial", 12).bold(true))
            .unwrap();
        let regular = registry
            .get_or_create(TextFormat::new("Arial", 12))
            .unwrap();

        assert!(!bold.ptr_eq(&regular));
        assert_ne!(bold, regular);
        assert_eq!(registry.count(), 2);
    }

    #[test]
    fn count_tracks_distinct_tuples_only() {
        let mut registry = FormatRegistry::new();
        let requests = [
            TextFormat::new("Arial", 12),
            TextFormat::new("Arial", 14),
            TextFormat::new("Arial", 12).italic(true),
            TextFormat::new("Times New Roman", 12),
            TextFormat::new("Arial", 12).color("red"),
            TextFormat::new("Arial", 12).background("grey"),
        ];

        for (i, request) in requests.iter().enumerate() {
            registry.get_or_create(*request).unwrap();
            assert_eq!(registry.count(), i + 1);
        }

        // Repetition in any order leaves the population unchanged.
        for request in requests.iter().rev() {
            registry.get_or_create(*request).unwrap();
        }
        assert_eq!(registry.count(), requests.len());
    }

    #[test]
    fn descriptor_reports_requested_fields() {
        let mut registry = FormatRegistry::new();
        let format = registry
            .get_or_create(
                TextFormat::new("Courier", 10)
                    .bold(true)
                    .italic(true)
                    .color("red")
                    .background("grey"),
            )
            .unwrap();

        assert_eq!(format.font(), "Courier");
        assert_eq!(format.size(), 10);
        assert!(format.bold());
        assert!(format.italic());
        assert_eq!(format.color(), "red");
        assert_eq!(format.background(), "grey");
    }

    #[test]
    fn zero_size_is_rejected_without_mutation() {
        let mut registry = FormatRegistry::new();
        let err = registry
            .get_or_create(TextFormat::new("Arial", 0))
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidSize);
        assert_eq!(err.field(), Field::Size);
        assert_eq!(err.size(), Some(0));
        let msg = format!("{err}");
        assert!(msg.contains("positive integer"));
        assert!(registry.is_empty());
    }

    #[test]
    fn empty_names_are_rejected() {
        let mut registry = FormatRegistry::new();

        for (request, field, name) in [
            (TextFormat::new("", 12), Field::Font, "font"),
            (TextFormat::new("Arial", 12).color(""), Field::Color, "color"),
            (
                TextFormat::new("Arial", 12).background(""),
                Field::Background,
                "background",
            ),
        ] {
            let err = registry.get_or_create(request).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::EmptyName);
            assert_eq!(err.field(), field);
            let msg = format!("{err}");
            assert!(msg.contains(name));
            assert!(msg.contains("must not be empty"));
        }

        assert_eq!(registry.count(), 0);
    }

    #[test]
    fn iter_visits_every_descriptor() {
        let mut registry = FormatRegistry::new();
        registry.get_or_create(TextFormat::new("Arial", 12)).unwrap();
        registry
            .get_or_create(TextFormat::new("Arial", 12).bold(true))
            .unwrap();

        let fonts: Vec<_> = registry.iter().map(|d| d.font()).collect();
        assert_eq!(fonts.len(), 2);
        assert!(fonts.iter().all(|&f| f == "Arial"));
    }
}
