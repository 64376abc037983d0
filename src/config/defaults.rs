// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Gallery**: Which page elements form the gallery
//! - **Overlay**: Class names the overlay adapter toggles

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// CSS selector for gallery-eligible elements, in document order.
///
/// Covers both markup styles found on portfolio pages: images tagged with
/// `data-lightbox` and images inside `.gallery-item` cards.
pub const DEFAULT_GALLERY_SELECTOR: &str = "[data-lightbox], .gallery-item img";

// ==========================================================================
// Overlay Defaults
// ==========================================================================

/// Class added to the overlay element while it is visible.
pub const DEFAULT_VISIBLE_CLASS: &str = "is-open";

/// Class added to `<body>` while page scrolling is locked.
pub const DEFAULT_SCROLL_LOCK_CLASS: &str = "lightbox-open";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(!DEFAULT_GALLERY_SELECTOR.is_empty());
    assert!(!DEFAULT_VISIBLE_CLASS.is_empty());
    assert!(!DEFAULT_SCROLL_LOCK_CLASS.is_empty());
};
