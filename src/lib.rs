// SPDX-License-Identifier: MPL-2.0
//! `folio_lens` is the lightbox gallery navigator of a static portfolio site.
//!
//! It tracks which image of a page's gallery is shown in the overlay,
//! moves between images without wrapping, and keeps the overlay, page
//! scroll lock and keyboard focus consistent through a render adapter.
//!
//! # Layers
//!
//! - [`domain`]: gallery entries, state and errors (no external dependencies)
//! - [`application`]: the [`GalleryNavigator`](application::navigator::GalleryNavigator)
//!   state machine and the [`OverlayRenderer`](application::port::OverlayRenderer) port
//! - [`ui`]: page input (keys, touch, clicks) and the dispatch controller
//! - [`infrastructure`]: HTML page scanning and an in-memory overlay adapter
//! - [`config`]: `settings.toml` loading and defaults

#![doc(html_root_url = "https://docs.rs/folio_lens/0.1.0")]

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod paths;
pub mod ui;
