#![forbid(unsafe_code)]

//! The dialog's two observable states and the transitions between them.
//!
//! The caller's boolean is the only input. Requesting the state the dialog
//! is already in does nothing; animation replay is the overlay's business.

use dialogkit_core::platform::Platform;

use crate::animation::Animation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

impl Visibility {
    #[must_use]
    pub const fn is_visible(self) -> bool {
        matches!(self, Self::Visible)
    }
}

impl From<bool> for Visibility {
    fn from(visible: bool) -> Self {
        if visible { Self::Visible } else { Self::Hidden }
    }
}

/// A change between the two states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transition {
    /// `Hidden -> Visible`; plays the entrance animation.
    Enter,
    /// `Visible -> Hidden`; plays the exit animation.
    Exit,
}

impl Transition {
    /// The default animation this transition plays on `platform`.
    #[must_use]
    pub fn animation(self, platform: Platform) -> Animation {
        match self {
            Self::Enter => Animation::entrance(platform),
            Self::Exit => Animation::exit(platform),
        }
    }
}

/// Tracks the last requested visibility across renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisibilityState {
    current: Visibility,
}

impl VisibilityState {
    #[must_use]
    pub const fn new(initial: Visibility) -> Self {
        Self { current: initial }
    }

    #[must_use]
    pub const fn current(&self) -> Visibility {
        self.current
    }

    /// Apply the caller's flag, returning the transition it caused, if any.
    pub fn request(&mut self, visible: bool) -> Option<Transition> {
        let next = Visibility::from(visible);
        let transition = match (self.current, next) {
            (Visibility::Hidden, Visibility::Visible) => Some(Transition::Enter),
            (Visibility::Visible, Visibility::Hidden) => Some(Transition::Exit),
            _ => None,
        };
        self.current = next;
        transition
    }
}
