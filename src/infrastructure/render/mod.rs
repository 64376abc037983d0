// SPDX-License-Identifier: MPL-2.0
//! In-memory overlay adapter.
//!
//! [`RecordingOverlay`] models the lightbox markup (overlay container, image,
//! caption, close control, next/previous controls and the page body) without
//! a browser. It applies every render call the way the page script would and
//! keeps a log of the calls, which makes it usable both as the headless CLI
//! backend and as a test double.

use crate::application::port::{FocusTarget, OverlayRenderer};
use crate::application::query::NavigationInfo;
use crate::config::OverlayConfig;
use crate::domain::gallery::ImageEntry;
use crate::infrastructure::page::OverlayElements;

/// Element holding keyboard focus in the modelled page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Focus {
    /// Focus is on the document body.
    #[default]
    Page,
    /// Focus is on the overlay's close control.
    CloseControl,
    /// Focus went back to a page element.
    Restored(FocusTarget),
}

/// Overlay state as the page would show it.
#[derive(Debug, Clone, Default)]
pub struct RecordingOverlay {
    missing: Vec<&'static str>,
    visible_class: String,
    scroll_lock_class: String,

    overlay_classes: Vec<String>,
    aria_hidden: bool,
    body_classes: Vec<String>,

    image_src: Option<String>,
    image_alt: Option<String>,
    caption: String,
    download_href: Option<String>,
    counter: Option<String>,

    prev_visible: bool,
    next_visible: bool,
    focus: Focus,

    log: Vec<String>,
}

impl RecordingOverlay {
    /// Binds to the overlay elements found on a page.
    #[must_use]
    pub fn bind(elements: &OverlayElements, config: &OverlayConfig) -> Self {
        Self {
            missing: elements.missing(),
            visible_class: config.visible_class().to_string(),
            scroll_lock_class: config.scroll_lock_class().to_string(),
            aria_hidden: true,
            ..Self::default()
        }
    }

    /// Overlay with every element present.
    #[must_use]
    pub fn headless(config: &OverlayConfig) -> Self {
        Self::bind(&OverlayElements::all(), config)
    }

    /// Whether the overlay carries the visible class.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        has_class(&self.overlay_classes, &self.visible_class)
    }

    #[must_use]
    pub fn aria_hidden(&self) -> bool {
        self.aria_hidden
    }

    /// Whether `<body>` carries the scroll-lock class.
    #[must_use]
    pub fn is_scroll_locked(&self) -> bool {
        has_class(&self.body_classes, &self.scroll_lock_class)
    }

    #[must_use]
    pub fn image_src(&self) -> Option<&str> {
        self.image_src.as_deref()
    }

    #[must_use]
    pub fn image_alt(&self) -> Option<&str> {
        self.image_alt.as_deref()
    }

    #[must_use]
    pub fn caption(&self) -> &str {
        &self.caption
    }

    #[must_use]
    pub fn download_href(&self) -> Option<&str> {
        self.download_href.as_deref()
    }

    /// Position label such as `"2 / 3"`.
    #[must_use]
    pub fn counter(&self) -> Option<&str> {
        self.counter.as_deref()
    }

    #[must_use]
    pub fn prev_visible(&self) -> bool {
        self.prev_visible
    }

    #[must_use]
    pub fn next_visible(&self) -> bool {
        self.next_visible
    }

    #[must_use]
    pub fn focus(&self) -> &Focus {
        &self.focus
    }

    /// Every call received, oldest first.
    #[must_use]
    pub fn log(&self) -> &[String] {
        &self.log
    }

    pub fn clear_log(&mut self) {
        self.log.clear();
    }

    fn record(&mut self, line: String) {
        tracing::trace!(call = %line, "overlay");
        self.log.push(line);
    }
}

impl OverlayRenderer for RecordingOverlay {
    fn missing_elements(&self) -> Vec<&'static str> {
        self.missing.clone()
    }

    fn render_entry(&mut self, index: usize, entry: &ImageEntry, caption: &str) {
        self.image_src = Some(entry.source_url().to_string());
        self.image_alt = Some(entry.alt_text().to_string());
        self.caption = caption.to_string();
        self.download_href = entry.download_url().map(str::to_string);
        self.record(format!("render {index} {}", entry.source_url()));
    }

    fn set_visible(&mut self, visible: bool) {
        if visible {
            add_class(&mut self.overlay_classes, &self.visible_class);
        } else {
            remove_class(&mut self.overlay_classes, &self.visible_class);
        }
        self.aria_hidden = !visible;
        self.record(format!("visible {visible}"));
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        if locked {
            add_class(&mut self.body_classes, &self.scroll_lock_class);
        } else {
            remove_class(&mut self.body_classes, &self.scroll_lock_class);
        }
        self.record(format!("scroll-locked {locked}"));
    }

    fn update_controls(&mut self, info: NavigationInfo) {
        self.prev_visible = info.has_previous;
        self.next_visible = info.has_next;
        self.counter = info.position_label();
        self.record(format!(
            "controls prev={} next={}",
            info.has_previous, info.has_next
        ));
    }

    fn focus_close_control(&mut self) {
        self.focus = Focus::CloseControl;
        self.record("focus close".to_string());
    }

    fn restore_focus(&mut self, target: &FocusTarget) {
        self.focus = Focus::Restored(target.clone());
        self.record(format!("focus {target}"));
    }
}

fn has_class(classes: &[String], class: &str) -> bool {
    classes.iter().any(|c| c == class)
}

fn add_class(classes: &mut Vec<String>, class: &str) {
    if !has_class(classes, class) {
        classes.push(class.to_string());
    }
}

fn remove_class(classes: &mut Vec<String>, class: &str) {
    classes.retain(|c| c != class);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overlay() -> RecordingOverlay {
        RecordingOverlay::headless(&OverlayConfig::default())
    }

    #[test]
    fn starts_hidden_and_unlocked() {
        let overlay = overlay();
        assert!(overlay.missing_elements().is_empty());
        assert!(!overlay.is_visible());
        assert!(overlay.aria_hidden());
        assert!(!overlay.is_scroll_locked());
        assert_eq!(overlay.focus(), &Focus::Page);
    }

    #[test]
    fn bind_reports_missing_elements() {
        let elements = OverlayElements {
            caption: false,
            ..OverlayElements::all()
        };
        let overlay = RecordingOverlay::bind(&elements, &OverlayConfig::default());
        assert_eq!(overlay.missing_elements(), vec!["caption"]);
    }

    #[test]
    fn render_entry_fills_image_and_caption() {
        let mut overlay = overlay();
        let entry = ImageEntry::new("grad.jpg", "Graduation").with_download_url("grad-full.jpg");
        overlay.render_entry(0, &entry, "Graduation");

        assert_eq!(overlay.image_src(), Some("grad.jpg"));
        assert_eq!(overlay.image_alt(), Some("Graduation"));
        assert_eq!(overlay.caption(), "Graduation");
        assert_eq!(overlay.download_href(), Some("grad-full.jpg"));
        assert_eq!(overlay.log(), ["render 0 grad.jpg"]);
    }

    #[test]
    fn visibility_and_scroll_lock_toggle_configured_classes() {
        let config = OverlayConfig {
            visible_class: Some("shown".to_string()),
            scroll_lock_class: Some("no-scroll".to_string()),
        };
        let mut overlay = RecordingOverlay::headless(&config);

        overlay.set_visible(true);
        overlay.set_visible(true);
        overlay.set_scroll_locked(true);
        assert!(overlay.is_visible());
        assert!(!overlay.aria_hidden());
        assert!(overlay.is_scroll_locked());
        assert_eq!(overlay.overlay_classes, vec!["shown".to_string()]);

        overlay.set_visible(false);
        overlay.set_scroll_locked(false);
        assert!(!overlay.is_visible());
        assert!(!overlay.is_scroll_locked());
    }

    #[test]
    fn controls_follow_navigation_info() {
        let mut overlay = overlay();
        overlay.update_controls(NavigationInfo {
            has_next: true,
            has_previous: false,
            at_first: true,
            at_last: false,
            current_index: Some(0),
            total_count: 3,
        });
        assert!(overlay.next_visible());
        assert!(!overlay.prev_visible());
        assert_eq!(overlay.counter(), Some("1 / 3"));
    }

    #[test]
    fn focus_moves_to_close_then_back() {
        let mut overlay = overlay();
        overlay.focus_close_control();
        assert_eq!(overlay.focus(), &Focus::CloseControl);

        overlay.restore_focus(&FocusTarget::Thumbnail(2));
        assert_eq!(overlay.focus(), &Focus::Restored(FocusTarget::Thumbnail(2)));
        assert_eq!(overlay.log().last().map(String::as_str), Some("focus thumbnail #2"));
    }
}
