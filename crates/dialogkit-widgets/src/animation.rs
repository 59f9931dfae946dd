#![forbid(unsafe_code)]

//! Entrance and exit animations requested from the overlay primitive.
//!
//! The overlay owns animation progress. This module only decides which
//! animation to request and, for keyframe curves, can sample the curve for
//! hosts that lack a keyframe engine.

use dialogkit_core::platform::Platform;

/// Built-in named animations understood by the overlay primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum AnimationName {
    FadeIn,
    FadeOut,
    ZoomIn,
    ZoomOut,
    SlideInUp,
    SlideOutDown,
}

impl AnimationName {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FadeIn => "fadeIn",
            Self::FadeOut => "fadeOut",
            Self::ZoomIn => "zoomIn",
            Self::ZoomOut => "zoomOut",
            Self::SlideInUp => "slideInUp",
            Self::SlideOutDown => "slideOutDown",
        }
    }
}

/// One stop of a keyframe curve. Unset properties are interpolated from
/// the neighbouring stops that set them.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Keyframe {
    /// Position in `[0.0, 1.0]`.
    pub offset: f32,
    pub opacity: Option<f32>,
    pub scale: Option<f32>,
}

impl Keyframe {
    #[must_use]
    pub const fn at(offset: f32) -> Self {
        Self {
            offset,
            opacity: None,
            scale: None,
        }
    }

    #[must_use]
    pub const fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    #[must_use]
    pub const fn scale(mut self, scale: f32) -> Self {
        self.scale = Some(scale);
        self
    }
}

/// Interpolated animated values at a point in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameValues {
    pub opacity: f32,
    pub scale: f32,
}

impl Default for FrameValues {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            scale: 1.0,
        }
    }
}

/// A keyframe curve ordered by offset.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "KeyframesRepr")
)]
pub struct Keyframes {
    frames: Vec<Keyframe>,
}

/// Wire form of [`Keyframes`]; loading goes through [`Keyframes::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct KeyframesRepr {
    frames: Vec<Keyframe>,
}

#[cfg(feature = "serde")]
impl From<KeyframesRepr> for Keyframes {
    fn from(repr: KeyframesRepr) -> Self {
        Self::new(repr.frames)
    }
}

impl Keyframes {
    /// Build a curve; stops are sorted and offsets clamped into `[0, 1]`.
    #[must_use]
    pub fn new(frames: impl IntoIterator<Item = Keyframe>) -> Self {
        let mut frames: Vec<Keyframe> = frames
            .into_iter()
            .map(|mut frame| {
                frame.offset = frame.offset.clamp(0.0, 1.0);
                frame
            })
            .collect();
        frames.sort_by(|a, b| a.offset.total_cmp(&b.offset));
        Self { frames }
    }

    /// The iOS alert entrance: fade in while shrinking from 1.2x, fully
    /// opaque from the midpoint.
    #[must_use]
    pub fn ios_alert() -> Self {
        Self::new([
            Keyframe::at(0.0).opacity(0.0).scale(1.2),
            Keyframe::at(0.5).opacity(1.0),
            Keyframe::at(1.0).opacity(1.0).scale(1.0),
        ])
    }

    #[must_use]
    pub fn frames(&self) -> &[Keyframe] {
        &self.frames
    }

    /// Sample the curve at `t` (clamped to `[0, 1]`).
    ///
    /// A property no stop sets keeps its resting value (`1.0`).
    #[must_use]
    pub fn sample(&self, t: f32) -> FrameValues {
        let t = t.clamp(0.0, 1.0);
        let rest = FrameValues::default();
        FrameValues {
            opacity: self.sample_property(t, |f| f.opacity).unwrap_or(rest.opacity),
            scale: self.sample_property(t, |f| f.scale).unwrap_or(rest.scale),
        }
    }

    fn sample_property(&self, t: f32, get: impl Fn(&Keyframe) -> Option<f32>) -> Option<f32> {
        let mut before: Option<(f32, f32)> = None;
        for frame in &self.frames {
            let Some(value) = get(frame) else {
                continue;
            };
            if frame.offset >= t {
                return Some(match before {
                    Some((offset, prev)) if frame.offset > offset => {
                        let progress = (t - offset) / (frame.offset - offset);
                        prev + (value - prev) * progress
                    }
                    _ => value,
                });
            }
            before = Some((frame.offset, value));
        }
        before.map(|(_, value)| value)
    }
}

/// An animation request: a named preset or a custom curve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Animation {
    Named(AnimationName),
    Keyframes(Keyframes),
}

impl Animation {
    /// Default entrance for `platform`.
    #[must_use]
    pub fn entrance(platform: Platform) -> Self {
        match platform {
            Platform::Ios => Self::Keyframes(Keyframes::ios_alert()),
            Platform::Android | Platform::Web => Self::Named(AnimationName::ZoomIn),
        }
    }

    /// Default exit; the same fade on every platform.
    #[must_use]
    pub fn exit(_platform: Platform) -> Self {
        Self::Named(AnimationName::FadeOut)
    }

    #[must_use]
    pub fn name(&self) -> Option<AnimationName> {
        match self {
            Self::Named(name) => Some(*name),
            Self::Keyframes(_) => None,
        }
    }
}

impl From<AnimationName> for Animation {
    fn from(name: AnimationName) -> Self {
        Self::Named(name)
    }
}

impl From<Keyframes> for Animation {
    fn from(frames: Keyframes) -> Self {
        Self::Keyframes(frames)
    }
}
