#![forbid(unsafe_code)]

//! Labeled text input with a platform-sized height.
//!
//! Only geometry and presentation are decided here. Value storage, change
//! handling, and focus stay with the host's input primitive.

use dialogkit_core::geometry::Dimension;
use dialogkit_core::platform::{Platform, PlatformContext};
use dialogkit_style::sheet::INPUT_VERTICAL_PADDING;
use dialogkit_style::{ColorParseError, InputSheet, Rgba, Style, resolve};

use crate::Widget;
use crate::node::{Node, NodeKind, TextInputProps};

/// Input box height for `platform`.
///
/// The line count only applies to multiline inputs; zero or missing counts
/// fall back to a single line.
#[must_use]
pub fn input_height(platform: Platform, multiline: bool, number_of_lines: Option<u32>) -> f32 {
    let lines = line_count(multiline, number_of_lines);
    INPUT_VERTICAL_PADDING + InputSheet::for_platform(platform).line_height * lines as f32
}

fn line_count(multiline: bool, number_of_lines: Option<u32>) -> u32 {
    match number_of_lines {
        Some(n) if multiline && n > 0 => n,
        _ => 1,
    }
}

/// A text input with an optional label above it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DialogInput {
    label: Option<String>,
    props: TextInputProps,
    style: Option<Style>,
    wrapper_style: Option<Style>,
}

impl DialogInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.props.value = value.into();
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.props.placeholder = Some(placeholder.into());
        self
    }

    pub fn multiline(mut self, multiline: bool) -> Self {
        self.props.multiline = multiline;
        self
    }

    pub fn number_of_lines(mut self, lines: u32) -> Self {
        self.props.number_of_lines = Some(lines);
        self
    }

    pub fn secure_text_entry(mut self, secure: bool) -> Self {
        self.props.secure_text_entry = secure;
        self
    }

    pub fn auto_focus(mut self, auto_focus: bool) -> Self {
        self.props.auto_focus = auto_focus;
        self
    }

    /// Action identifier the host reports with each text change.
    pub fn on_change_text(mut self, action: impl Into<String>) -> Self {
        self.props.on_change_text = Some(action.into());
        self
    }

    /// Underline color; only forwarded on Android.
    pub fn underline_color_android(mut self, color: Rgba) -> Self {
        self.props.underline_color = Some(color);
        self
    }

    /// Underline color given as CSS-like text (`"#169689"`, `"transparent"`).
    pub fn underline_color_android_str(self, color: &str) -> Result<Self, ColorParseError> {
        Ok(self.underline_color_android(color.parse()?))
    }

    /// Merged over the input's base style; the computed height still wins.
    pub fn style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    pub fn wrapper_style(mut self, style: Style) -> Self {
        self.wrapper_style = Some(style);
        self
    }

    /// Number of lines the height is computed for.
    #[must_use]
    pub fn effective_lines(&self) -> u32 {
        line_count(self.props.multiline, self.props.number_of_lines)
    }

    #[must_use]
    pub fn height(&self, platform: Platform) -> f32 {
        input_height(platform, self.props.multiline, self.props.number_of_lines)
    }
}

impl Widget for DialogInput {
    fn compose(&self, ctx: &PlatformContext) -> Node {
        let sheet = InputSheet::for_platform(ctx.platform);
        let mut wrapper =
            Node::view(resolve(&sheet.wrapper, self.wrapper_style.as_ref())).tagged("input");

        if let Some(label) = self.label.as_deref().filter(|l| !l.is_empty()) {
            wrapper.push(Node::text(label, sheet.label));
        }

        let mut props = self.props.clone();
        if ctx.platform != Platform::Android {
            props.underline_color = None;
        }
        let style = resolve(&sheet.text_input, self.style.as_ref())
            .height(Dimension::Points(self.height(ctx.platform)));
        wrapper.push(Node::new(NodeKind::TextInput(props), style));
        wrapper
    }
}
