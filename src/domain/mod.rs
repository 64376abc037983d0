// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core gallery types with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`error`]: Domain error types ([`GalleryError`](error::GalleryError))
//! - [`gallery`]: Gallery types ([`ImageEntry`](gallery::ImageEntry),
//!   [`GalleryState`](gallery::GalleryState), [`OverlayState`](gallery::OverlayState))

pub mod error;
pub mod gallery;
