#![forbid(unsafe_code)]

//! Host platform identification and the per-render platform context.
//!
//! # Invariants
//!
//! 1. A [`PlatformContext`] is immutable once built; composers receive it by
//!    reference and never consult a process-wide value.
//! 2. [`Platform::current`] is a compile-time decision and never probes the
//!    environment at runtime.

use core::fmt;
use core::str::FromStr;

use crate::geometry::Size;

/// Host platform a dialog is rendered for.
///
/// `Ios` is the handset style that draws separators between footer buttons
/// and uses a blur layer; `Android` is the second handset style; `Web`
/// covers desktop and browser hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Platform {
    Ios,
    Android,
    #[default]
    Web,
}

impl Platform {
    /// Every platform, in declaration order.
    pub const ALL: [Platform; 3] = [Platform::Ios, Platform::Android, Platform::Web];

    /// The platform this binary was compiled for.
    #[must_use]
    pub const fn current() -> Self {
        if cfg!(target_os = "ios") {
            Self::Ios
        } else if cfg!(target_os = "android") {
            Self::Android
        } else {
            Self::Web
        }
    }

    /// Lowercase platform name (`"ios"`, `"android"`, `"web"`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ios => "ios",
            Self::Android => "android",
            Self::Web => "web",
        }
    }

    /// Whether this is one of the touch-handset platforms.
    #[must_use]
    pub const fn is_handset(self) -> bool {
        matches!(self, Self::Ios | Self::Android)
    }

    /// Pick one of three values by platform.
    pub fn select<T>(self, ios: T, android: T, web: T) -> T {
        match self {
            Self::Ios => ios,
            Self::Android => android,
            Self::Web => web,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a platform name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformParseError(String);

impl fmt::Display for PlatformParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown platform: {:?}", self.0)
    }
}

impl std::error::Error for PlatformParseError {}

impl FromStr for Platform {
    type Err = PlatformParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ios" => Ok(Self::Ios),
            "android" => Ok(Self::Android),
            "web" => Ok(Self::Web),
            _ => Err(PlatformParseError(s.to_string())),
        }
    }
}

/// A value with one variant per platform.
///
/// Style tables are written as `PerPlatform` literals and resolved with
/// [`PerPlatform::select`] once the render's platform is known.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PerPlatform<T> {
    pub ios: T,
    pub android: T,
    pub web: T,
}

impl<T> PerPlatform<T> {
    pub const fn new(ios: T, android: T, web: T) -> Self {
        Self { ios, android, web }
    }

    /// The value for `platform`.
    pub fn select(&self, platform: Platform) -> &T {
        match platform {
            Platform::Ios => &self.ios,
            Platform::Android => &self.android,
            Platform::Web => &self.web,
        }
    }

    /// Consume and keep only the value for `platform`.
    pub fn into_selected(self, platform: Platform) -> T {
        platform.select(self.ios, self.android, self.web)
    }
}

impl<T: Clone> PerPlatform<T> {
    /// Same value on every platform.
    pub fn uniform(value: T) -> Self {
        Self {
            ios: value.clone(),
            android: value.clone(),
            web: value,
        }
    }
}

/// Platform and window geometry resolved once for a render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlatformContext {
    pub platform: Platform,
    pub window: Size,
}

impl PlatformContext {
    /// Create a context for `platform` with the given window size.
    #[must_use]
    pub const fn new(platform: Platform, window: Size) -> Self {
        Self { platform, window }
    }

    /// Snapshot the resolver's current answers.
    #[must_use]
    pub fn resolve(resolver: &impl PlatformResolver) -> Self {
        let ctx = Self::new(resolver.platform(), resolver.window_size());
        #[cfg(feature = "tracing")]
        tracing::debug!(
            platform = %ctx.platform,
            width = ctx.window.width,
            height = ctx.window.height,
            "resolved platform context"
        );
        ctx
    }

    /// Replace the window size.
    #[must_use]
    pub const fn with_window(mut self, window: Size) -> Self {
        self.window = window;
        self
    }

    #[must_use]
    pub const fn window_height(&self) -> f32 {
        self.window.height
    }
}

impl Default for PlatformContext {
    fn default() -> Self {
        Self::new(Platform::current(), Size::new(0.0, 0.0))
    }
}

/// Source of the platform and window dimensions for a render pass.
///
/// Hosts implement this over their own window system; tests use
/// [`FixedPlatform`].
pub trait PlatformResolver {
    /// Platform the dialog is being rendered on.
    fn platform(&self) -> Platform;

    /// Current viewport size in logical units.
    fn window_size(&self) -> Size;
}

/// Resolver that always answers with the same platform and window size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedPlatform {
    platform: Platform,
    window: Size,
}

impl FixedPlatform {
    #[must_use]
    pub const fn new(platform: Platform, window: Size) -> Self {
        Self { platform, window }
    }
}

impl PlatformResolver for FixedPlatform {
    fn platform(&self) -> Platform {
        self.platform
    }

    fn window_size(&self) -> Size {
        self.window
    }
}

impl<R: PlatformResolver + ?Sized> PlatformResolver for &R {
    fn platform(&self) -> Platform {
        (**self).platform()
    }

    fn window_size(&self) -> Size {
        (**self).window_size()
    }
}
