// SPDX-License-Identifier: MPL-2.0
//! Gallery navigator: the lightbox state machine.
//!
//! The navigator owns the [`GalleryState`] and an [`OverlayRenderer`]. Every
//! transition updates the state first, then tells the renderer what changed.
//!
//! ```text
//! Closed  --open(i)-->  Open(i)
//! Open(i) --next-->     Open(i + 1)   (self-loop at the last item)
//! Open(i) --prev-->     Open(i - 1)   (self-loop at index 0)
//! Open(i) --close-->    Closed
//! ```
//!
//! Navigation never wraps around.
//!
//! # Disabled Navigator
//!
//! If the renderer reports missing overlay elements at construction, or the
//! page has no gallery items, the navigator stays closed for its whole
//! lifetime and every operation is a no-op.

use crate::application::port::{FocusTarget, OverlayRenderer};
use crate::application::query::NavigationInfo;
use crate::domain::error::GalleryError;
use crate::domain::gallery::{CaptionSource, GalleryState, ImageEntry};

/// Minimum horizontal touch displacement, in device-independent pixels,
/// that counts as a swipe. Displacements of exactly this size are ignored.
pub const SWIPE_THRESHOLD_PX: f32 = 50.0;

/// Observable outcome of a navigator operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The overlay now shows the item at `index`.
    Opened { index: usize },
    /// The overlay moved between two items.
    Moved { from: usize, to: usize },
    /// The overlay was closed.
    Closed,
    /// Nothing changed.
    Unchanged,
}

impl Transition {
    /// Whether the operation changed the gallery state.
    #[must_use]
    pub fn changed(self) -> bool {
        !matches!(self, Transition::Unchanged)
    }
}

/// Tracks the displayed gallery item and keeps the overlay in sync.
#[derive(Debug)]
pub struct GalleryNavigator<R> {
    state: GalleryState,
    renderer: R,
    enabled: bool,
    caption_source: CaptionSource,
    /// Element to focus again on close, recorded when the overlay opens.
    return_focus: Option<FocusTarget>,
}

impl<R: OverlayRenderer> GalleryNavigator<R> {
    /// Creates a closed navigator over `items`.
    ///
    /// The renderer is checked once here; a renderer with missing elements
    /// produces a permanently disabled navigator instead of an error.
    pub fn new(items: Vec<ImageEntry>, renderer: R) -> Self {
        let missing = renderer.missing_elements();
        let enabled = if !missing.is_empty() {
            tracing::warn!(
                missing = ?missing,
                "lightbox overlay elements not found, gallery disabled"
            );
            false
        } else if items.is_empty() {
            tracing::debug!("no gallery items on page, lightbox stays closed");
            false
        } else {
            true
        };

        tracing::debug!(items = items.len(), enabled, "gallery navigator initialized");

        Self {
            state: GalleryState::new(items),
            renderer,
            enabled,
            caption_source: CaptionSource::default(),
            return_focus: None,
        }
    }

    /// Sets which text is used as the overlay caption.
    #[must_use]
    pub fn with_caption_source(mut self, source: CaptionSource) -> Self {
        self.caption_source = source;
        self
    }

    /// Opens the overlay on `index`, returning focus to that thumbnail on close.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::OutOfRange`] if `index` is not a valid item index.
    pub fn open(&mut self, index: usize) -> Result<Transition, GalleryError> {
        self.open_from(index, FocusTarget::Thumbnail(index))
    }

    /// Opens the overlay on `index`, returning focus to `trigger` on close.
    ///
    /// Opening an already open overlay switches to `index` and keeps the
    /// trigger recorded by the first open.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::OutOfRange`] if `index` is not a valid item index.
    pub fn open_from(
        &mut self,
        index: usize,
        trigger: FocusTarget,
    ) -> Result<Transition, GalleryError> {
        if !self.enabled {
            return Ok(Transition::Unchanged);
        }

        let was_open = self.state.is_open();
        self.state.open_at(index)?;
        self.render_current();

        if !was_open {
            self.return_focus = Some(trigger);
            self.renderer.set_visible(true);
            self.renderer.set_scroll_locked(true);
        }
        self.renderer.focus_close_control();

        tracing::debug!(index, "lightbox opened");
        Ok(Transition::Opened { index })
    }

    /// Shows the following item. No-op when closed or at the last item.
    pub fn next(&mut self) -> Transition {
        let from = self.state.current_index();
        if !self.state.advance() {
            return Transition::Unchanged;
        }
        self.moved(from)
    }

    /// Shows the preceding item. No-op when closed or at the first item.
    pub fn prev(&mut self) -> Transition {
        let from = self.state.current_index();
        if !self.state.retreat() {
            return Transition::Unchanged;
        }
        self.moved(from)
    }

    /// Closes the overlay and restores scroll and focus. Idempotent.
    pub fn close(&mut self) -> Transition {
        if !self.state.close() {
            return Transition::Unchanged;
        }

        self.renderer.set_visible(false);
        self.renderer.set_scroll_locked(false);
        self.renderer.update_controls(self.navigation_info());
        if let Some(target) = self.return_focus.take() {
            self.renderer.restore_focus(&target);
        }

        tracing::debug!("lightbox closed");
        Transition::Closed
    }

    /// Interprets a horizontal touch displacement.
    ///
    /// `delta_x` is touch-start x minus touch-end x: positive for a leftward
    /// swipe (next), negative for a rightward swipe (previous). Displacements
    /// not larger than [`SWIPE_THRESHOLD_PX`] are ignored, as are non-finite ones.
    pub fn handle_swipe(&mut self, delta_x: f32) -> Transition {
        if !delta_x.is_finite() || delta_x.abs() <= SWIPE_THRESHOLD_PX {
            return Transition::Unchanged;
        }
        if delta_x > 0.0 {
            self.next()
        } else {
            self.prev()
        }
    }

    #[must_use]
    pub fn state(&self) -> &GalleryState {
        &self.state
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.state.current_index()
    }

    #[must_use]
    pub fn current_entry(&self) -> Option<&ImageEntry> {
        self.state.current_entry()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.state.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Whether the navigator can ever open.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[must_use]
    pub fn caption_source(&self) -> CaptionSource {
        self.caption_source
    }

    /// Returns a snapshot of the current navigation state for UI rendering.
    #[must_use]
    pub fn navigation_info(&self) -> NavigationInfo {
        NavigationInfo::from_state(&self.state)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn moved(&mut self, from: Option<usize>) -> Transition {
        self.render_current();
        match (from, self.state.current_index()) {
            (Some(from), Some(to)) => {
                tracing::debug!(from, to, "lightbox moved");
                Transition::Moved { from, to }
            }
            _ => Transition::Unchanged,
        }
    }

    fn render_current(&mut self) {
        let info = self.navigation_info();
        if let (Some(index), Some(entry)) = (self.state.current_index(), self.state.current_entry())
        {
            let caption = entry.caption(self.caption_source);
            self.renderer.render_entry(index, entry, &caption);
        }
        self.renderer.update_controls(info);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Render(usize, String, String),
        Visible(bool),
        ScrollLocked(bool),
        Controls(NavigationInfo),
        FocusClose,
        RestoreFocus(FocusTarget),
    }

    #[derive(Debug, Default)]
    struct SpyRenderer {
        missing: Vec<&'static str>,
        calls: Vec<Call>,
    }

    impl OverlayRenderer for SpyRenderer {
        fn missing_elements(&self) -> Vec<&'static str> {
            self.missing.clone()
        }

        fn render_entry(&mut self, index: usize, entry: &ImageEntry, caption: &str) {
            self.calls.push(Call::Render(
                index,
                entry.source_url().to_string(),
                caption.to_string(),
            ));
        }

        fn set_visible(&mut self, visible: bool) {
            self.calls.push(Call::Visible(visible));
        }

        fn set_scroll_locked(&mut self, locked: bool) {
            self.calls.push(Call::ScrollLocked(locked));
        }

        fn update_controls(&mut self, info: NavigationInfo) {
            self.calls.push(Call::Controls(info));
        }

        fn focus_close_control(&mut self) {
            self.calls.push(Call::FocusClose);
        }

        fn restore_focus(&mut self, target: &FocusTarget) {
            self.calls.push(Call::RestoreFocus(target.clone()));
        }
    }

    fn entries(count: usize) -> Vec<ImageEntry> {
        (0..count)
            .map(|i| ImageEntry::new(format!("{i}.jpg"), format!("Image {i}")))
            .collect()
    }

    fn navigator(count: usize) -> GalleryNavigator<SpyRenderer> {
        GalleryNavigator::new(entries(count), SpyRenderer::default())
    }

    fn clear_calls(nav: &mut GalleryNavigator<SpyRenderer>) {
        nav.renderer_mut().calls.clear();
    }

    #[test]
    fn new_navigator_is_closed_and_enabled() {
        let nav = navigator(3);
        assert!(nav.is_enabled());
        assert!(!nav.is_open());
        assert_eq!(nav.current_index(), None);
        assert!(nav.renderer().calls.is_empty());
    }

    #[test]
    fn open_sets_index_for_every_valid_item() {
        let mut nav = navigator(4);
        for i in 0..4 {
            assert_eq!(nav.open(i), Ok(Transition::Opened { index: i }));
            assert!(nav.is_open());
            assert_eq!(nav.current_index(), Some(i));
            nav.close();
        }
    }

    #[test]
    fn open_renders_shows_locks_and_focuses() {
        let mut nav = navigator(3);
        nav.open(1).expect("index is in range");

        let calls = &nav.renderer().calls;
        assert_eq!(
            calls[0],
            Call::Render(1, "1.jpg".to_string(), "Image 1".to_string())
        );
        assert!(matches!(calls[1], Call::Controls(info) if info.current_index == Some(1)));
        assert_eq!(calls[2], Call::Visible(true));
        assert_eq!(calls[3], Call::ScrollLocked(true));
        assert_eq!(calls[4], Call::FocusClose);
    }

    #[test]
    fn open_out_of_range_fails_loudly() {
        let mut nav = navigator(3);
        assert_eq!(
            nav.open(5),
            Err(GalleryError::OutOfRange { index: 5, len: 3 })
        );
        assert!(!nav.is_open());
        assert!(nav.renderer().calls.is_empty());
    }

    #[test]
    fn next_advances_until_last_item() {
        let mut nav = navigator(3);
        for i in 0..2 {
            nav.open(i).expect("index is in range");
            assert_eq!(nav.next(), Transition::Moved { from: i, to: i + 1 });
            assert_eq!(nav.current_index(), Some(i + 1));
            nav.close();
        }
    }

    #[test]
    fn next_at_last_item_is_noop() {
        let mut nav = navigator(3);
        nav.open(2).expect("index is in range");
        clear_calls(&mut nav);

        assert_eq!(nav.next(), Transition::Unchanged);
        assert_eq!(nav.current_index(), Some(2));
        assert!(nav.renderer().calls.is_empty());
    }

    #[test]
    fn prev_at_first_item_is_noop() {
        let mut nav = navigator(3);
        nav.open(0).expect("index is in range");
        clear_calls(&mut nav);

        assert_eq!(nav.prev(), Transition::Unchanged);
        assert_eq!(nav.current_index(), Some(0));
        assert!(nav.renderer().calls.is_empty());
    }

    #[test]
    fn next_and_prev_do_nothing_while_closed() {
        let mut nav = navigator(3);
        assert_eq!(nav.next(), Transition::Unchanged);
        assert_eq!(nav.prev(), Transition::Unchanged);
        assert!(!nav.is_open());
        assert!(nav.renderer().calls.is_empty());
    }

    #[test]
    fn close_restores_scroll_and_focus_to_trigger() {
        let mut nav = navigator(3);
        nav.open(1).expect("index is in range");
        nav.next();
        clear_calls(&mut nav);

        assert_eq!(nav.close(), Transition::Closed);
        assert!(!nav.is_open());

        let calls = &nav.renderer().calls;
        assert_eq!(calls[0], Call::Visible(false));
        assert_eq!(calls[1], Call::ScrollLocked(false));
        assert_eq!(
            calls.last(),
            Some(&Call::RestoreFocus(FocusTarget::Thumbnail(1)))
        );
    }

    #[test]
    fn open_from_restores_custom_trigger() {
        let mut nav = navigator(2);
        nav.open_from(0, FocusTarget::Element("hero-photo".into()))
            .expect("index is in range");
        nav.close();
        assert_eq!(
            nav.renderer().calls.last(),
            Some(&Call::RestoreFocus(FocusTarget::Element("hero-photo".into())))
        );
    }

    #[test]
    fn reopening_while_open_keeps_first_trigger() {
        let mut nav = navigator(3);
        nav.open(0).expect("index is in range");
        nav.open(2).expect("index is in range");
        assert_eq!(nav.current_index(), Some(2));

        let visible_calls = nav
            .renderer()
            .calls
            .iter()
            .filter(|call| **call == Call::Visible(true))
            .count();
        assert_eq!(visible_calls, 1);

        nav.close();
        assert_eq!(
            nav.renderer().calls.last(),
            Some(&Call::RestoreFocus(FocusTarget::Thumbnail(0)))
        );
    }

    #[test]
    fn close_twice_is_same_as_once() {
        let mut nav = navigator(3);
        nav.open(0).expect("index is in range");
        assert_eq!(nav.close(), Transition::Closed);
        clear_calls(&mut nav);

        assert_eq!(nav.close(), Transition::Unchanged);
        assert!(!nav.is_open());
        assert!(nav.renderer().calls.is_empty());
    }

    #[test]
    fn swipe_left_beyond_threshold_goes_next() {
        let mut nav = navigator(3);
        nav.open(1).expect("index is in range");
        assert_eq!(nav.handle_swipe(60.0), Transition::Moved { from: 1, to: 2 });
    }

    #[test]
    fn swipe_right_beyond_threshold_goes_prev() {
        let mut nav = navigator(3);
        nav.open(1).expect("index is in range");
        assert_eq!(nav.handle_swipe(-60.0), Transition::Moved { from: 1, to: 0 });
    }

    #[test]
    fn small_swipes_are_ignored() {
        let mut nav = navigator(3);
        nav.open(1).expect("index is in range");
        assert_eq!(nav.handle_swipe(10.0), Transition::Unchanged);
        assert_eq!(nav.handle_swipe(-10.0), Transition::Unchanged);
        assert_eq!(nav.handle_swipe(SWIPE_THRESHOLD_PX), Transition::Unchanged);
        assert_eq!(nav.handle_swipe(-SWIPE_THRESHOLD_PX), Transition::Unchanged);
        assert_eq!(nav.current_index(), Some(1));
    }

    #[test]
    fn non_finite_swipes_are_ignored() {
        let mut nav = navigator(3);
        nav.open(2).expect("index is in range");
        clear_calls(&mut nav);

        assert_eq!(nav.handle_swipe(f32::NAN), Transition::Unchanged);
        assert_eq!(nav.handle_swipe(f32::INFINITY), Transition::Unchanged);
        assert_eq!(nav.handle_swipe(f32::NEG_INFINITY), Transition::Unchanged);
        assert_eq!(nav.current_index(), Some(2));
        assert!(nav.renderer().calls.is_empty());
    }

    #[test]
    fn swipe_respects_boundaries() {
        let mut nav = navigator(2);
        nav.open(1).expect("index is in range");
        assert_eq!(nav.handle_swipe(80.0), Transition::Unchanged);
        nav.open(0).expect("index is in range");
        assert_eq!(nav.handle_swipe(-80.0), Transition::Unchanged);
    }

    #[test]
    fn missing_elements_disable_navigator() {
        let renderer = SpyRenderer {
            missing: vec!["lightbox-caption"],
            calls: Vec::new(),
        };
        let mut nav = GalleryNavigator::new(entries(3), renderer);

        assert!(!nav.is_enabled());
        assert_eq!(nav.open(1), Ok(Transition::Unchanged));
        assert_eq!(nav.open(99), Ok(Transition::Unchanged));
        assert_eq!(nav.next(), Transition::Unchanged);
        assert_eq!(nav.prev(), Transition::Unchanged);
        assert_eq!(nav.handle_swipe(100.0), Transition::Unchanged);
        assert_eq!(nav.close(), Transition::Unchanged);
        assert!(!nav.is_open());
        assert!(nav.renderer().calls.is_empty());
    }

    #[test]
    fn empty_gallery_never_opens() {
        let mut nav = navigator(0);
        assert!(!nav.is_enabled());
        assert!(nav.is_empty());
        assert_eq!(nav.open(0), Ok(Transition::Unchanged));
        assert_eq!(nav.next(), Transition::Unchanged);
        assert_eq!(nav.close(), Transition::Unchanged);
        assert!(!nav.is_open());
    }

    #[test]
    fn caption_source_is_applied_when_rendering() {
        let items = vec![ImageEntry::new("a.jpg", "alt a").with_title("Title A")];
        let mut nav = GalleryNavigator::new(items, SpyRenderer::default())
            .with_caption_source(CaptionSource::Title);
        nav.open(0).expect("index is in range");
        assert_eq!(
            nav.renderer().calls[0],
            Call::Render(0, "a.jpg".to_string(), "Title A".to_string())
        );
    }

    #[test]
    fn controls_hide_at_boundaries() {
        let mut nav = navigator(2);
        nav.open(0).expect("index is in range");
        let info = nav.navigation_info();
        assert!(info.has_next);
        assert!(!info.has_previous);

        nav.next();
        let info = nav.navigation_info();
        assert!(!info.has_next);
        assert!(info.has_previous);
    }
}
