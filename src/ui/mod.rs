// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module follows the Elm-style "state down, messages up" pattern:
//! page events arrive as messages, sub-component state turns them into
//! effects, and effects drive the application layer.
//!
//! - [`lightbox`] - Gallery overlay input handling and dispatch
pub mod lightbox;
