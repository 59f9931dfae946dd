#![forbid(unsafe_code)]

//! Static per-platform style tables.
//!
//! These are the base layers that caller overrides are merged onto. Values
//! are fixed constants per platform; only the content height bound depends
//! on the window.

use dialogkit_core::geometry::{Dimension, Sides};
use dialogkit_core::platform::{PerPlatform, Platform, PlatformContext};

use crate::color::Rgba;
use crate::style::{
    Align, FlexDirection, FontWeight, Justify, Overflow, Style, TextAlign, TextTransform,
};

/// Height reserved for an on-screen keyboard.
pub const KEYBOARD_HEIGHT: f32 = 300.0;
/// Thinnest renderable line.
pub const HAIRLINE: f32 = 0.5;
/// Fixed viewport height of the description scroll region.
pub const DESCRIPTION_SCROLL_HEIGHT: f32 = 100.0;
/// Default backdrop dimming.
pub const BACKDROP_OPACITY: f32 = 0.3;
/// Vertical padding included in every input height.
pub const INPUT_VERTICAL_PADDING: f32 = 18.0;
/// Height of one input line, per platform.
pub const INPUT_LINE_HEIGHT: PerPlatform<f32> = PerPlatform::new(14.0, 22.0, 22.0);

pub const SEPARATOR_COLOR: Rgba = Rgba::rgb(0xa9, 0xad, 0xae);
pub const IOS_BUTTON_COLOR: Rgba = Rgba::rgb(0x00, 0x7f, 0xf9);
pub const ANDROID_BUTTON_COLOR: Rgba = Rgba::rgb(0x16, 0x96, 0x89);
pub const DISABLED_BUTTON_COLOR: Rgba = Rgba::rgb(0x8f, 0x8f, 0x8f);

/// Upper bound for the dialog body so an on-screen keyboard cannot cover it.
///
/// Windows shorter than [`KEYBOARD_HEIGHT`] yield `0.0` rather than a
/// negative bound.
#[must_use]
pub fn max_content_height(window_height: f32) -> f32 {
    (window_height - KEYBOARD_HEIGHT).max(0.0)
}

/// Base style of the hairline between footer buttons.
#[must_use]
pub fn button_separator_style() -> Style {
    Style::new()
        .height(Dimension::FULL)
        .background(SEPARATOR_COLOR)
        .width(Dimension::Points(HAIRLINE))
}

/// Base styles for every region of the dialog container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerSheet {
    /// Style handed to the overlay primitive.
    pub modal: Style,
    /// Keyboard-avoidance wrapper.
    pub container: Style,
    /// Default translucent layer behind the content on iOS.
    pub blur: Style,
    pub content: Style,
    pub header: Style,
    pub description_scroll: Style,
    pub footer: Style,
}

impl ContainerSheet {
    /// Resolve the table for a render pass.
    #[must_use]
    pub fn for_context(ctx: &PlatformContext) -> Self {
        let platform = ctx.platform;
        let max_height = max_content_height(ctx.window_height());
        tracing::trace!(%platform, max_height, "resolved container sheet");

        let dialog_card = Style::new()
            .flex_direction(FlexDirection::Column)
            .border_radius(3.0)
            .padding(Sides::all(16.0))
            .margin(Sides::all(16.0))
            .background(Rgba::WHITE)
            .overflow(Overflow::Hidden)
            .elevation(4.0)
            .min_width(300.0);
        let content = PerPlatform::new(
            Style::new()
                .width(Dimension::Points(270.0))
                .flex_direction(FlexDirection::Column)
                .border_radius(13.0)
                .background(Rgba::WHITE),
            dialog_card,
            dialog_card,
        )
        .into_selected(platform)
        .max_height(max_height);

        let row_end = Style::new()
            .flex_direction(FlexDirection::Row)
            .align_items(Align::Center)
            .justify_content(Justify::FlexEnd)
            .margin(Sides::new(4.0, 0.0, 0.0, 0.0));
        let footer = PerPlatform::new(
            Style::new()
                .flex_direction(FlexDirection::Row)
                .justify_content(Justify::SpaceBetween)
                .border_top_color(SEPARATOR_COLOR)
                .border_top_width(HAIRLINE)
                .height(Dimension::Points(46.0)),
            row_end,
            row_end,
        )
        .into_selected(platform);

        let header = PerPlatform::new(
            Style::new().padding(Sides::all(18.0)),
            Style::new().margin(Sides::all(12.0)),
            Style::new().margin(Sides::all(12.0)),
        )
        .into_selected(platform);

        Self {
            modal: Style::new().flex(1.0).margin(Sides::ZERO),
            container: Style::new()
                .justify_content(Justify::Center)
                .align_items(Align::Center),
            blur: Style::new().fill_parent().background(Rgba::WHITE),
            content,
            header,
            description_scroll: Style::new().height(Dimension::Points(DESCRIPTION_SCROLL_HEIGHT)),
            footer,
        }
    }
}

/// Base styles for the labeled input field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputSheet {
    pub wrapper: Style,
    pub label: Style,
    pub text_input: Style,
    /// Height of one line of text.
    pub line_height: f32,
}

impl InputSheet {
    #[must_use]
    pub fn for_platform(platform: Platform) -> Self {
        tracing::trace!(%platform, "resolved input sheet");
        let handset_b = Self {
            wrapper: Style::new().margin(Sides::new(0.0, 10.0, 20.0, 10.0)),
            label: Style::new()
                .color(Rgba::rgba(0, 0, 0, 128))
                .font_size(14.0),
            text_input: Style::new()
                .margin(Sides::new(0.0, 0.0, 0.0, -4.0))
                .padding(Sides::new(0.0, 0.0, 0.0, 4.0)),
            line_height: *INPUT_LINE_HEIGHT.select(Platform::Android),
        };
        match platform {
            Platform::Ios => Self {
                wrapper: Style::new()
                    .background(Rgba::WHITE)
                    .border_width(HAIRLINE)
                    .border_radius(6.0)
                    .border_color(SEPARATOR_COLOR)
                    .margin(Sides::new(0.0, 20.0, 20.0, 20.0))
                    .padding(Sides::symmetric(8.0, 0.0)),
                label: Style::new(),
                text_input: Style::new(),
                line_height: *INPUT_LINE_HEIGHT.select(Platform::Ios),
            },
            Platform::Android => handset_b,
            Platform::Web => Self {
                line_height: *INPUT_LINE_HEIGHT.select(Platform::Web),
                ..handset_b
            },
        }
    }
}

/// Base text styles for titles, descriptions, and buttons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextSheet {
    pub title: Style,
    pub description: Style,
    pub button: Style,
    /// Layered over `button` for bold buttons.
    pub button_bold: Style,
    /// Layered over `button` for disabled buttons.
    pub button_disabled: Style,
}

impl TextSheet {
    #[must_use]
    pub fn for_platform(platform: Platform) -> Self {
        let material = Self {
            title: Style::new()
                .font_size(18.0)
                .font_weight(FontWeight::MEDIUM)
                .color(Rgba::rgb(0x21, 0x21, 0x21))
                .margin(Sides::new(0.0, 0.0, 4.0, 0.0)),
            description: Style::new()
                .font_size(16.0)
                .color(Rgba::rgb(0x33, 0x38, 0x3d))
                .margin(Sides::new(10.0, 0.0, 0.0, 0.0)),
            button: Style::new()
                .font_size(14.0)
                .color(ANDROID_BUTTON_COLOR)
                .text_align(TextAlign::Center)
                .text_transform(TextTransform::Uppercase)
                .padding(Sides::all(8.0)),
            button_bold: Style::new().font_weight(FontWeight::BOLD),
            button_disabled: Style::new().color(DISABLED_BUTTON_COLOR),
        };
        match platform {
            Platform::Ios => Self {
                title: Style::new()
                    .font_size(18.0)
                    .font_weight(FontWeight::SEMIBOLD)
                    .color(Rgba::BLACK)
                    .text_align(TextAlign::Center),
                description: Style::new()
                    .font_size(13.0)
                    .color(Rgba::BLACK)
                    .text_align(TextAlign::Center)
                    .margin(Sides::new(4.0, 0.0, 0.0, 0.0)),
                button: Style::new()
                    .font_size(17.0)
                    .color(IOS_BUTTON_COLOR)
                    .text_align(TextAlign::Center)
                    .flex(1.0)
                    .padding(Sides::all(10.0)),
                button_bold: Style::new().font_weight(FontWeight::SEMIBOLD),
                ..material
            },
            Platform::Android | Platform::Web => material,
        }
    }
}
