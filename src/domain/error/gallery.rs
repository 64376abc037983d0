// SPDX-License-Identifier: MPL-2.0
//! Gallery navigation errors.

use std::fmt;

/// Errors raised by gallery navigation.
///
/// These are programming errors: indices normally come from enumerating
/// the gallery items, so a user never sees them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryError {
    /// `open` was called with an index outside the item list.
    OutOfRange {
        /// The requested index.
        index: usize,
        /// Number of items in the gallery.
        len: usize,
    },
}

impl fmt::Display for GalleryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GalleryError::OutOfRange { index, len } => {
                write!(f, "Gallery index {index} out of range for {len} items")
            }
        }
    }
}

impl std::error::Error for GalleryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_display_names_index_and_len() {
        let err = GalleryError::OutOfRange { index: 5, len: 3 };
        assert_eq!(
            format!("{err}"),
            "Gallery index 5 out of range for 3 items"
        );
    }
}
