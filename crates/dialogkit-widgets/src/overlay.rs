#![forbid(unsafe_code)]

//! What the dialog hands to the animated overlay primitive.

use std::time::Duration;

use dialogkit_style::{Rgba, Style, sheet};

use crate::animation::Animation;
use crate::node::Node;
use crate::visibility::{Transition, Visibility};

/// Default duration of entrance and exit animations.
pub const DEFAULT_ANIMATION_TIMING: Duration = Duration::from_millis(300);

/// Backdrop configuration (color + opacity).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BackdropConfig {
    /// Backdrop color (alpha will be scaled by `opacity`).
    pub color: Rgba,
    /// Opacity in `[0.0, 1.0]`.
    pub opacity: f32,
}

impl BackdropConfig {
    /// Create a new backdrop config.
    pub fn new(color: Rgba, opacity: f32) -> Self {
        Self { color, opacity }
    }

    /// Set backdrop color.
    pub fn color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }

    /// Set backdrop opacity.
    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    /// The color the host should paint, alpha already scaled.
    pub fn effective_color(&self) -> Rgba {
        self.color.with_opacity(self.opacity)
    }
}

impl Default for BackdropConfig {
    fn default() -> Self {
        Self {
            color: Rgba::BLACK,
            opacity: sheet::BACKDROP_OPACITY,
        }
    }
}

/// Caller-supplied overlay options. Anything set here wins over the values
/// the container computes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct OverlayConfig {
    pub backdrop: BackdropConfig,
    pub animation_in: Option<Animation>,
    pub animation_out: Option<Animation>,
    pub animation_in_timing: Duration,
    pub animation_out_timing: Duration,
    /// Merged over the overlay's base style.
    pub style: Option<Style>,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            backdrop: BackdropConfig::default(),
            animation_in: None,
            animation_out: None,
            animation_in_timing: DEFAULT_ANIMATION_TIMING,
            animation_out_timing: DEFAULT_ANIMATION_TIMING,
            style: None,
        }
    }
}

impl OverlayConfig {
    pub fn backdrop(mut self, backdrop: BackdropConfig) -> Self {
        self.backdrop = backdrop;
        self
    }

    pub fn animation_in(mut self, animation: impl Into<Animation>) -> Self {
        self.animation_in = Some(animation.into());
        self
    }

    pub fn animation_out(mut self, animation: impl Into<Animation>) -> Self {
        self.animation_out = Some(animation.into());
        self
    }

    pub fn animation_in_timing(mut self, timing: Duration) -> Self {
        self.animation_in_timing = timing;
        self
    }

    pub fn animation_out_timing(mut self, timing: Duration) -> Self {
        self.animation_out_timing = timing;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }
}

/// Fully resolved request for the overlay primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayProps {
    pub visible: bool,
    pub animation_in: Animation,
    pub animation_out: Animation,
    pub animation_in_timing: Duration,
    pub animation_out_timing: Duration,
    pub backdrop: BackdropConfig,
    pub style: Style,
    /// The composed dialog tree.
    pub content: Node,
}

impl OverlayProps {
    #[must_use]
    pub fn visibility(&self) -> Visibility {
        Visibility::from(self.visible)
    }

    /// Animation and duration to play for `transition`.
    #[must_use]
    pub fn animation_for(&self, transition: Transition) -> (&Animation, Duration) {
        match transition {
            Transition::Enter => (&self.animation_in, self.animation_in_timing),
            Transition::Exit => (&self.animation_out, self.animation_out_timing),
        }
    }
}
