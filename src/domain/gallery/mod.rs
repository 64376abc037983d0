// SPDX-License-Identifier: MPL-2.0
//! Gallery domain types.

mod entry;
mod state;

pub use entry::{CaptionSource, ImageEntry};
pub use state::{GalleryState, OverlayState};
