// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`render`]: Overlay rendering (image, caption, visibility, scroll lock, focus)
//!
//! # Design Notes
//!
//! - All traits use domain types only (no DOM handles)
//! - Methods are synchronous; the navigator drives them from input handlers

pub mod render;

pub use render::{FocusTarget, OverlayRenderer};
