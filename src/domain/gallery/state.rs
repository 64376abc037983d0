// SPDX-License-Identifier: MPL-2.0
//! Gallery state: the fixed item list and the overlay position.

use super::entry::ImageEntry;
use crate::domain::error::GalleryError;

/// Whether the overlay is showing an item, and which one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayState {
    #[default]
    Closed,
    Open {
        index: usize,
    },
}

/// Items collected at startup plus the current overlay state.
///
/// The item list is fixed at construction. `OverlayState::Open` can only be
/// reached through [`GalleryState::open_at`], which checks the index, so an
/// open state always points at an existing item.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GalleryState {
    items: Vec<ImageEntry>,
    overlay: OverlayState,
}

impl GalleryState {
    /// Creates a closed gallery over the given items.
    #[must_use]
    pub fn new(items: Vec<ImageEntry>) -> Self {
        Self {
            items,
            overlay: OverlayState::Closed,
        }
    }

    #[must_use]
    pub fn items(&self) -> &[ImageEntry] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn overlay(&self) -> OverlayState {
        self.overlay
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.overlay, OverlayState::Open { .. })
    }

    /// Index of the displayed item, `None` while closed.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        match self.overlay {
            OverlayState::Open { index } => Some(index),
            OverlayState::Closed => None,
        }
    }

    /// Entry currently displayed, `None` while closed.
    #[must_use]
    pub fn current_entry(&self) -> Option<&ImageEntry> {
        self.current_index().and_then(|index| self.items.get(index))
    }

    #[must_use]
    pub fn is_at_first(&self) -> bool {
        self.current_index() == Some(0)
    }

    #[must_use]
    pub fn is_at_last(&self) -> bool {
        self.current_index()
            .is_some_and(|index| index + 1 == self.items.len())
    }

    /// Opens the overlay on `index`.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::OutOfRange`] when `index` is not a valid item index.
    pub fn open_at(&mut self, index: usize) -> Result<(), GalleryError> {
        if index >= self.items.len() {
            return Err(GalleryError::OutOfRange {
                index,
                len: self.items.len(),
            });
        }
        self.overlay = OverlayState::Open { index };
        Ok(())
    }

    /// Moves to the following item. Returns `false` when closed or at the last item.
    pub fn advance(&mut self) -> bool {
        match self.overlay {
            OverlayState::Open { index } if index + 1 < self.items.len() => {
                self.overlay = OverlayState::Open { index: index + 1 };
                true
            }
            _ => false,
        }
    }

    /// Moves to the preceding item. Returns `false` when closed or at index 0.
    pub fn retreat(&mut self) -> bool {
        match self.overlay {
            OverlayState::Open { index } if index > 0 => {
                self.overlay = OverlayState::Open { index: index - 1 };
                true
            }
            _ => false,
        }
    }

    /// Closes the overlay. Returns `false` if it was already closed.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        self.overlay = OverlayState::Closed;
        was_open
    }
}
