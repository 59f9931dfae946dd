#![forbid(unsafe_code)]

//! Dialog widgets for dialogkit.
//!
//! [`DialogContainer`] classifies its children by role and composes the
//! fixed header/body/footer tree; [`DialogInput`] composes a labeled input
//! with a platform-sized height. Both are pure functions of their inputs
//! and a [`PlatformContext`].

pub mod animation;
pub mod child;
pub mod classify;
pub mod container;
pub mod input;
pub mod node;
pub mod overlay;
pub mod visibility;

pub use animation::{Animation, AnimationName, FrameValues, Keyframe, Keyframes};
pub use child::{Child, DialogButton, DialogDescription, DialogTitle, Role};
pub use classify::{Classified, FooterEntry, classify};
pub use container::{DialogContainer, DialogStyles};
pub use input::{DialogInput, input_height};
pub use node::{ButtonProps, KeyboardBehavior, Node, NodeKind, TextInputProps};
pub use overlay::{BackdropConfig, OverlayConfig, OverlayProps};
pub use visibility::{Transition, Visibility, VisibilityState};

use dialogkit_core::platform::PlatformContext;

/// A `Widget` composes itself into a [`Node`] for one render pass.
///
/// Composition must be pure: the same widget and context always produce
/// the same tree.
pub trait Widget: core::fmt::Debug + Send + Sync {
    fn compose(&self, ctx: &PlatformContext) -> Node;
}

impl Widget for Node {
    fn compose(&self, _ctx: &PlatformContext) -> Node {
        self.clone()
    }
}
