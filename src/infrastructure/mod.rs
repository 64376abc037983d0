// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`, plus the page scanner that feeds the navigator.
//!
//! # Available Adapters
//!
//! - [`page`]: HTML page scanning via `scraper` (gallery items, overlay elements)
//! - [`render`]: In-memory overlay model (implements [`OverlayRenderer`])
//!
//! [`OverlayRenderer`]: crate::application::port::OverlayRenderer

pub mod page;
pub mod render;

pub use page::{scan_file, scan_page, OverlayElements, PageScan};
pub use render::{Focus, RecordingOverlay};
