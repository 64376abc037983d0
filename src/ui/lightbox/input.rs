// SPDX-License-Identifier: MPL-2.0
//! Input sub-component: turns page events into lightbox effects.
//!
//! Keyboard bindings apply only while the overlay is open, except for
//! Enter/Space on a focused thumbnail which opens it. Touch gestures are
//! tracked from touch-start to touch-end and reported as a swipe delta.

use std::fmt;
use std::str::FromStr;

/// Keys the lightbox cares about, parsed from DOM `KeyboardEvent.key` names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    Enter,
    Space,
    Other(String),
}

impl Key {
    /// Parses a key name. Legacy names (`Esc`, `Left`, `Right`, `Spacebar`)
    /// are accepted as well.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "Escape" | "Esc" => Key::Escape,
            "ArrowLeft" | "Left" => Key::ArrowLeft,
            "ArrowRight" | "Right" => Key::ArrowRight,
            "Enter" => Key::Enter,
            " " | "Space" | "Spacebar" => Key::Space,
            other => Key::Other(other.to_string()),
        }
    }
}

impl FromStr for Key {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Escape => write!(f, "Escape"),
            Key::ArrowLeft => write!(f, "ArrowLeft"),
            Key::ArrowRight => write!(f, "ArrowRight"),
            Key::Enter => write!(f, "Enter"),
            Key::Space => write!(f, "Space"),
            Key::Other(name) => write!(f, "{name}"),
        }
    }
}

/// Page events relevant to the lightbox.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// A gallery thumbnail was clicked.
    ThumbnailClicked(usize),
    /// A gallery thumbnail received keyboard focus.
    ThumbnailFocused(usize),
    /// Keyboard focus moved away from the thumbnails.
    FocusLeft,
    /// A key was pressed anywhere on the page.
    KeyPressed(Key),
    /// A touch started at horizontal coordinate `x`.
    TouchStarted { x: f32 },
    /// A touch ended at horizontal coordinate `x`.
    TouchEnded { x: f32 },
    /// The overlay's close control was clicked.
    CloseClicked,
    /// The overlay background (outside the image) was clicked.
    BackdropClicked,
}

/// What the lightbox should do in response to a message.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// Event not handled; the page keeps its default behavior.
    None,
    /// Open the overlay on a thumbnail.
    Open(usize),
    /// Show the next image.
    Next,
    /// Show the previous image.
    Previous,
    /// Close the overlay.
    Close,
    /// Apply a swipe with this horizontal delta (start x minus end x).
    Swipe(f32),
}

impl Effect {
    /// Whether the lightbox consumed the event.
    #[must_use]
    pub fn is_handled(self) -> bool {
        !matches!(self, Effect::None)
    }
}

/// Input sub-component state.
#[derive(Debug, Clone, Default)]
pub struct State {
    /// Thumbnail holding keyboard focus, if any.
    focused_thumbnail: Option<usize>,
    /// Horizontal coordinate recorded at touch-start.
    touch_start_x: Option<f32>,
}

impl State {
    /// Handle an input message given whether the overlay is currently open.
    pub fn handle(&mut self, msg: Message, overlay_open: bool) -> Effect {
        let effect = self.route(msg, overlay_open);

        // A gesture never spans a close or an open.
        if !overlay_open || matches!(effect, Effect::Open(_) | Effect::Close) {
            self.touch_start_x = None;
        }
        effect
    }

    #[allow(clippy::needless_pass_by_value)]
    fn route(&mut self, msg: Message, overlay_open: bool) -> Effect {
        match msg {
            Message::ThumbnailClicked(index) => {
                self.focused_thumbnail = Some(index);
                Effect::Open(index)
            }
            Message::ThumbnailFocused(index) => {
                self.focused_thumbnail = Some(index);
                Effect::None
            }
            Message::FocusLeft => {
                self.focused_thumbnail = None;
                Effect::None
            }
            Message::KeyPressed(key) => self.handle_key(&key, overlay_open),
            Message::TouchStarted { x } => {
                if overlay_open {
                    self.touch_start_x = Some(x);
                }
                Effect::None
            }
            Message::TouchEnded { x } => match self.touch_start_x.take() {
                Some(start) if overlay_open => Effect::Swipe(start - x),
                _ => Effect::None,
            },
            Message::CloseClicked | Message::BackdropClicked => {
                if overlay_open {
                    Effect::Close
                } else {
                    Effect::None
                }
            }
        }
    }

    /// Thumbnail holding keyboard focus, if any.
    #[must_use]
    pub fn focused_thumbnail(&self) -> Option<usize> {
        self.focused_thumbnail
    }

    /// Whether a touch is in progress.
    #[must_use]
    pub fn is_tracking_touch(&self) -> bool {
        self.touch_start_x.is_some()
    }

    fn handle_key(&mut self, key: &Key, overlay_open: bool) -> Effect {
        if overlay_open {
            return match key {
                Key::Escape => Effect::Close,
                Key::ArrowLeft => Effect::Previous,
                Key::ArrowRight => Effect::Next,
                _ => Effect::None,
            };
        }

        match (key, self.focused_thumbnail) {
            (Key::Enter | Key::Space, Some(index)) => Effect::Open(index),
            _ => Effect::None,
        }
    }
}
