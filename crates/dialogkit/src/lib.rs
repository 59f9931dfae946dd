#![forbid(unsafe_code)]

//! dialogkit public facade.
//!
//! Re-exports the core, style, and widget crates and offers a [`prelude`]
//! with everything needed to compose a dialog.
//!
//! ```
//! use dialogkit::prelude::*;
//!
//! let ctx = PlatformContext::new(Platform::Android, Size::new(360.0, 640.0));
//! let props = DialogContainer::new()
//!     .visible(true)
//!     .child(DialogTitle::new("Sign in"))
//!     .child(DialogInput::new().label("Email"))
//!     .child(DialogButton::new("Continue").action("continue"))
//!     .compose(&ctx);
//! assert!(props.content.find("input").is_some());
//! ```

pub use dialogkit_core;
pub use dialogkit_style as style;
pub use dialogkit_widgets as widgets;

#[cfg(feature = "tracing-json")]
pub use dialogkit_core::logging;

pub mod prelude {
    pub use dialogkit_core::{
        Dimension, FixedPlatform, PerPlatform, Platform, PlatformContext, PlatformResolver, Sides,
        Size,
    };
    pub use dialogkit_style::{Rgba, Style};
    pub use dialogkit_widgets::{
        Animation, AnimationName, BackdropConfig, Child, DialogButton, DialogContainer,
        DialogDescription, DialogInput, DialogStyles, DialogTitle, Node, NodeKind, OverlayConfig,
        OverlayProps, Transition, Visibility, VisibilityState, Widget,
    };
}
