#![forbid(unsafe_code)]

//! Platform context, logical geometry, and logging setup for dialogkit.
//!
//! Everything in this crate is plain data. A render pass resolves one
//! [`PlatformContext`] up front and threads it through every composer; no
//! composer reads the platform from ambient state.

pub mod geometry;
#[cfg(feature = "tracing-json")]
pub mod logging;
pub mod platform;

pub use geometry::{Dimension, Sides, Size};
pub use platform::{
    FixedPlatform, PerPlatform, Platform, PlatformContext, PlatformParseError, PlatformResolver,
};
