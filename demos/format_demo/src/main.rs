// Copyright 2026 the Scrivener Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A console walkthrough of the format registry and document model: builds a
//! short mixed-format document, renders it, and prints the deduplication
//! statistics a presentation layer would display.

use formatted_text::{Alignment, Document, Error, FormatRegistry, ParagraphStyle, TextFormat};

fn main() -> Result<(), Error> {
    let mut doc = Document::new();

    // Mixed formatting within the first (implicitly created) paragraph
    doc.add_text("Hello", TextFormat::new("Arial", 12).bold(true))?;
    doc.add_text(" ", TextFormat::new("Arial", 12))?;
    doc.add_text("World", TextFormat::new("Times New Roman", 14).italic(true))?;
    doc.add_text("!", TextFormat::new("Arial", 12).bold(true).italic(true))?;

    // A second, centered paragraph with wider spacing
    doc.new_paragraph(
        ParagraphStyle::new()
            .alignment(Alignment::Center)
            .line_spacing(1.5),
    );
    doc.add_text("The end", TextFormat::new("Arial", 12))?;

    println!("Rendered document:");
    for line in doc.render() {
        println!("{line}");
    }

    let stats = doc.stats();
    println!();
    println!("Total characters: {}", stats.total_chars);
    println!("Unique formats: {}", stats.unique_formats);
    println!("Formats saved by sharing: {}", stats.formats_saved);

    // Requesting the same attributes twice yields the same shared instance.
    let mut registry = FormatRegistry::new();
    let first = registry.get_or_create(TextFormat::new("Arial", 12).bold(true))?;
    let second = registry.get_or_create(TextFormat::new("Arial", 12).bold(true))?;
    println!();
    println!("Same descriptor instance reused: {}", first.ptr_eq(&second));

    Ok(())
}
