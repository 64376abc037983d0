// SPDX-License-Identifier: MPL-2.0
//! Lightbox presentation: page input handling and event dispatch.

pub mod controller;
pub mod input;

pub use controller::{Dispatch, Lightbox};
pub use input::{Effect, Key, Message};
