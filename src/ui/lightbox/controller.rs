// SPDX-License-Identifier: MPL-2.0
//! Lightbox controller: the dispatch table from page events to transitions.
//!
//! ```text
//! Message --input::State::handle--> Effect --GalleryNavigator--> Transition
//! ```

use super::input::{self, Effect, Message};
use crate::application::navigator::{GalleryNavigator, Transition};
use crate::application::port::OverlayRenderer;
use crate::domain::error::GalleryError;

/// Result of dispatching one page event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dispatch {
    /// What the input layer decided to do.
    pub effect: Effect,
    /// What the navigator actually did.
    pub transition: Transition,
}

impl Dispatch {
    /// Whether the page should suppress its default handling of the event.
    #[must_use]
    pub fn is_handled(&self) -> bool {
        self.effect.is_handled()
    }
}

/// Gallery navigator wired to page input.
#[derive(Debug)]
pub struct Lightbox<R> {
    navigator: GalleryNavigator<R>,
    input: input::State,
}

impl<R: OverlayRenderer> Lightbox<R> {
    #[must_use]
    pub fn new(navigator: GalleryNavigator<R>) -> Self {
        Self {
            navigator,
            input: input::State::default(),
        }
    }

    /// Routes one page event to the navigator.
    ///
    /// A disabled navigator leaves every event to the page.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::OutOfRange`] when a thumbnail index does not
    /// belong to the gallery.
    pub fn dispatch(&mut self, msg: Message) -> Result<Dispatch, GalleryError> {
        if !self.navigator.is_enabled() {
            return Ok(Dispatch {
                effect: Effect::None,
                transition: Transition::Unchanged,
            });
        }

        let effect = self.input.handle(msg, self.navigator.is_open());
        let transition = match effect {
            Effect::None => Transition::Unchanged,
            Effect::Open(index) => self.navigator.open(index)?,
            Effect::Next => self.navigator.next(),
            Effect::Previous => self.navigator.prev(),
            Effect::Close => self.navigator.close(),
            Effect::Swipe(delta_x) => self.navigator.handle_swipe(delta_x),
        };

        if transition.changed() {
            tracing::trace!(?effect, ?transition, "lightbox event dispatched");
        }
        Ok(Dispatch { effect, transition })
    }

    #[must_use]
    pub fn navigator(&self) -> &GalleryNavigator<R> {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut GalleryNavigator<R> {
        &mut self.navigator
    }

    #[must_use]
    pub fn input(&self) -> &input::State {
        &self.input
    }

    pub fn into_navigator(self) -> GalleryNavigator<R> {
        self.navigator
    }
}
