// SPDX-License-Identifier: MPL-2.0
//! Overlay rendering port definition.
//!
//! This module defines the [`OverlayRenderer`] trait. The navigator owns the
//! gallery state and calls the renderer after every transition; the renderer
//! only applies what it is told to a concrete display surface.
//!
//! # Capability Check
//!
//! A renderer reports the overlay elements it could not bind through
//! [`OverlayRenderer::missing_elements`]. The navigator checks this once at
//! construction and stays disabled when anything is missing.

use crate::application::query::NavigationInfo;
use crate::domain::gallery::ImageEntry;
use std::fmt;

/// Element that receives input focus when the overlay closes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FocusTarget {
    /// The gallery thumbnail at this index.
    Thumbnail(usize),
    /// Any other page element, identified by the adapter.
    Element(String),
}

impl fmt::Display for FocusTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FocusTarget::Thumbnail(index) => write!(f, "thumbnail #{index}"),
            FocusTarget::Element(id) => write!(f, "element '{id}'"),
        }
    }
}

/// Applies gallery state to the overlay.
pub trait OverlayRenderer {
    /// Names of required overlay elements that are absent.
    ///
    /// An empty list means the renderer is ready.
    fn missing_elements(&self) -> Vec<&'static str>;

    /// Writes the entry's source, alt text and caption into the overlay.
    fn render_entry(&mut self, index: usize, entry: &ImageEntry, caption: &str);

    /// Shows or hides the overlay.
    fn set_visible(&mut self, visible: bool);

    /// Locks or unlocks background page scrolling.
    fn set_scroll_locked(&mut self, locked: bool);

    /// Shows or hides the next/previous controls.
    fn update_controls(&mut self, info: NavigationInfo);

    /// Moves input focus to the overlay's close control.
    fn focus_close_control(&mut self);

    /// Returns input focus to the element that opened the overlay.
    fn restore_focus(&mut self, target: &FocusTarget);
}

impl<R: OverlayRenderer + ?Sized> OverlayRenderer for Box<R> {
    fn missing_elements(&self) -> Vec<&'static str> {
        (**self).missing_elements()
    }

    fn render_entry(&mut self, index: usize, entry: &ImageEntry, caption: &str) {
        (**self).render_entry(index, entry, caption);
    }

    fn set_visible(&mut self, visible: bool) {
        (**self).set_visible(visible);
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        (**self).set_scroll_locked(locked);
    }

    fn update_controls(&mut self, info: NavigationInfo) {
        (**self).update_controls(info);
    }

    fn focus_close_control(&mut self) {
        (**self).focus_close_control();
    }

    fn restore_focus(&mut self, target: &FocusTarget) {
        (**self).restore_focus(target);
    }
}
