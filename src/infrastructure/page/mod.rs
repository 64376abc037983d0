// SPDX-License-Identifier: MPL-2.0
//! Page scanner for gallery items and lightbox overlay elements.
//!
//! Parses an HTML document with `scraper` and collects, in document order,
//! every element matching the gallery selector. Each match contributes one
//! [`ImageEntry`]; a match that is not itself an `<img>` uses its first
//! descendant image, and matches without any usable image are skipped.
//!
//! # Attributes
//!
//! | Field | Source |
//! |-------|--------|
//! | source URL | `src`, else `data-src` (lazy-loaded images) |
//! | alt text | `alt` (empty when absent) |
//! | title | `data-title`, else `title` |
//! | description | `data-description` |
//! | download URL | `data-download` on the image, else on the matched element |

use crate::domain::gallery::ImageEntry;
use crate::error::{Error, Result};
use scraper::{ElementRef, Html, Selector};
use std::fs;
use std::path::Path;

/// Selector for the overlay container.
pub const OVERLAY_SELECTOR: &str = "#imageLightbox";
/// Selector for the enlarged image inside the overlay.
pub const OVERLAY_IMAGE_SELECTOR: &str = "#lightbox-image";
/// Selector for the caption element inside the overlay.
pub const OVERLAY_CAPTION_SELECTOR: &str = "#lightbox-caption";
/// Selector for the overlay's close control.
pub const OVERLAY_CLOSE_SELECTOR: &str = ".lightbox-close";

/// Which overlay elements a page provides.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OverlayElements {
    pub overlay: bool,
    pub image: bool,
    pub caption: bool,
    pub close_control: bool,
}

impl OverlayElements {
    /// All elements present, as when the overlay is created by script.
    #[must_use]
    pub fn all() -> Self {
        Self {
            overlay: true,
            image: true,
            caption: true,
            close_control: true,
        }
    }

    /// Names of the missing elements.
    #[must_use]
    pub fn missing(&self) -> Vec<&'static str> {
        [
            (self.overlay, "overlay"),
            (self.image, "image"),
            (self.caption, "caption"),
            (self.close_control, "close control"),
        ]
        .into_iter()
        .filter(|(present, _)| !present)
        .map(|(_, name)| name)
        .collect()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }
}

/// Result of scanning one page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageScan {
    /// Gallery entries in document order.
    pub entries: Vec<ImageEntry>,
    /// Overlay elements found in the markup.
    pub overlay_elements: OverlayElements,
}

/// Scans an HTML document.
///
/// # Errors
///
/// Returns [`Error::Page`] if `gallery_selector` is not a valid CSS selector.
pub fn scan_page(html: &str, gallery_selector: &str) -> Result<PageScan> {
    let document = Html::parse_document(html);
    let gallery = parse_selector(gallery_selector)?;
    let img = parse_selector("img")?;

    let mut entries = Vec::new();
    for (position, element) in document.select(&gallery).enumerate() {
        let image = if element.value().name() == "img" {
            Some(element)
        } else {
            element.select(&img).next()
        };

        let Some(image) = image else {
            tracing::warn!(position, "gallery element has no image, skipped");
            continue;
        };

        match entry_from_image(image, element) {
            Some(entry) => entries.push(entry),
            None => tracing::warn!(position, "gallery image has no src or data-src, skipped"),
        }
    }

    let overlay_elements = OverlayElements {
        overlay: contains(&document, OVERLAY_SELECTOR)?,
        image: contains(&document, OVERLAY_IMAGE_SELECTOR)?,
        caption: contains(&document, OVERLAY_CAPTION_SELECTOR)?,
        close_control: contains(&document, OVERLAY_CLOSE_SELECTOR)?,
    };

    tracing::debug!(
        items = entries.len(),
        overlay_complete = overlay_elements.is_complete(),
        "page scanned"
    );

    Ok(PageScan {
        entries,
        overlay_elements,
    })
}

/// Reads and scans an HTML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the selector is invalid.
pub fn scan_file(path: &Path, gallery_selector: &str) -> Result<PageScan> {
    let html = fs::read_to_string(path)?;
    scan_page(&html, gallery_selector)
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector)
        .map_err(|err| Error::Page(format!("invalid selector '{selector}': {err:?}")))
}

fn contains(document: &Html, selector: &str) -> Result<bool> {
    let selector = parse_selector(selector)?;
    Ok(document.select(&selector).next().is_some())
}

fn entry_from_image(image: ElementRef<'_>, item: ElementRef<'_>) -> Option<ImageEntry> {
    let attrs = image.value();
    let source = attrs
        .attr("src")
        .filter(|s| !s.trim().is_empty())
        .or_else(|| attrs.attr("data-src").filter(|s| !s.trim().is_empty()))?;

    let mut entry = ImageEntry::new(source.trim(), attrs.attr("alt").unwrap_or_default());

    if let Some(title) = attrs.attr("data-title").or_else(|| attrs.attr("title")) {
        entry = entry.with_title(title);
    }
    if let Some(description) = attrs.attr("data-description") {
        entry = entry.with_description(description);
    }
    if let Some(download) = attrs
        .attr("data-download")
        .or_else(|| item.value().attr("data-download"))
    {
        entry = entry.with_download_url(download);
    }

    Some(entry)
}
