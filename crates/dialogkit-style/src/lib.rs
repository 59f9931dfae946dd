#![forbid(unsafe_code)]

//! Style types for dialogkit with CSS-like cascading semantics.
//!
//! This crate provides:
//! - [`Style`] for optional presentation properties with layered merging
//! - [`Rgba`] colors parsed from CSS-like strings
//! - [`sheet`] tables holding the per-platform base styles

pub mod color;
pub mod sheet;
pub mod style;

pub use color::{ColorParseError, Rgba};
pub use sheet::{ContainerSheet, InputSheet, TextSheet, max_content_height};
pub use style::{
    Align, FlexDirection, FontWeight, Justify, Overflow, Position, Style, TextAlign,
    TextTransform, cascade, resolve,
};
