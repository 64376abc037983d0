// SPDX-License-Identifier: MPL-2.0
//! Navigation snapshot for rendering the overlay controls.

use crate::domain::gallery::GalleryState;

/// Navigation state information for UI rendering.
///
/// This struct contains all the information needed by a renderer to show or
/// hide the next/previous controls without access to the gallery itself.
/// Navigation never wraps, so `has_next` is `!at_last` and `has_previous` is
/// `!at_first` while open; everything is `false` while closed.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationInfo {
    /// Whether there is a next image to navigate to.
    pub has_next: bool,
    /// Whether there is a previous image to navigate to.
    pub has_previous: bool,
    /// Whether the current image is the first in the gallery.
    pub at_first: bool,
    /// Whether the current image is the last in the gallery.
    pub at_last: bool,
    /// Current position (0-indexed), `None` while closed.
    pub current_index: Option<usize>,
    /// Total number of images in the gallery.
    pub total_count: usize,
}

impl NavigationInfo {
    /// Builds the snapshot for the given state.
    #[must_use]
    pub fn from_state(state: &GalleryState) -> Self {
        let at_first = state.is_at_first();
        let at_last = state.is_at_last();
        let open = state.is_open();
        Self {
            has_next: open && !at_last,
            has_previous: open && !at_first,
            at_first,
            at_last,
            current_index: state.current_index(),
            total_count: state.len(),
        }
    }

    /// 1-based position label such as `"2 / 5"`, `None` while closed.
    #[must_use]
    pub fn position_label(&self) -> Option<String> {
        self.current_index
            .map(|index| format!("{} / {}", index + 1, self.total_count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gallery::ImageEntry;

    fn gallery(count: usize) -> GalleryState {
        GalleryState::new(
            (0..count)
                .map(|i| ImageEntry::new(format!("{i}.jpg"), format!("Image {i}")))
                .collect(),
        )
    }

    #[test]
    fn closed_gallery_has_no_navigation() {
        let info = NavigationInfo::from_state(&gallery(3));
        assert!(!info.has_next);
        assert!(!info.has_previous);
        assert_eq!(info.current_index, None);
        assert_eq!(info.total_count, 3);
        assert_eq!(info.position_label(), None);
    }

    #[test]
    fn middle_item_can_go_both_ways() {
        let mut state = gallery(3);
        state.open_at(1).expect("index is in range");
        let info = NavigationInfo::from_state(&state);
        assert!(info.has_next);
        assert!(info.has_previous);
        assert!(!info.at_first);
        assert!(!info.at_last);
        assert_eq!(info.position_label().as_deref(), Some("2 / 3"));
    }

    #[test]
    fn boundaries_hide_controls_without_wrapping() {
        let mut state = gallery(3);
        state.open_at(0).expect("index is in range");
        let first = NavigationInfo::from_state(&state);
        assert!(first.at_first);
        assert!(!first.has_previous);
        assert!(first.has_next);

        state.open_at(2).expect("index is in range");
        let last = NavigationInfo::from_state(&state);
        assert!(last.at_last);
        assert!(!last.has_next);
        assert!(last.has_previous);
    }

    #[test]
    fn single_item_is_both_first_and_last() {
        let mut state = gallery(1);
        state.open_at(0).expect("index is in range");
        let info = NavigationInfo::from_state(&state);
        assert!(info.at_first && info.at_last);
        assert!(!info.has_next && !info.has_previous);
    }
}
