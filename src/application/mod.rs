// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`query`]: Read-only snapshots of navigation state
//! - [`navigator`]: The gallery navigation state machine
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer uses application layer services
//!
//! # Example
//!
//! ```ignore
//! use folio_lens::application::navigator::GalleryNavigator;
//! use folio_lens::application::port::OverlayRenderer;
//!
//! // Infrastructure implements the port trait
//! struct DomOverlay { /* ... */ }
//! impl OverlayRenderer for DomOverlay { /* ... */ }
//!
//! let mut navigator = GalleryNavigator::new(entries, DomOverlay::bind()?);
//! navigator.open(0)?;
//! ```

pub mod navigator;
pub mod port;
pub mod query;
