#![forbid(unsafe_code)]

//! Dialog children and their roles.
//!
//! A child's role is fixed by the constructor that built it, never inferred
//! from a name at runtime. Titles, descriptions, and buttons have dedicated
//! types; anything else is wrapped as [`Child::Other`].

use std::sync::Arc;

use dialogkit_core::platform::PlatformContext;
use dialogkit_style::{Rgba, Style, TextSheet, cascade};

use crate::node::{ButtonProps, Node, NodeKind};
use crate::Widget;

/// Where a child is placed in the composed dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Title,
    Description,
    Button,
    Other,
}

/// Dialog heading text.
#[derive(Debug, Clone, PartialEq)]
pub struct DialogTitle {
    pub text: String,
    pub style: Option<Style>,
}

impl DialogTitle {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: None,
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }
}

impl Widget for DialogTitle {
    fn compose(&self, ctx: &PlatformContext) -> Node {
        let base = TextSheet::for_platform(ctx.platform).title;
        let style = dialogkit_style::resolve(&base, self.style.as_ref());
        Node::text(self.text.clone(), style)
    }
}

/// Dialog body text, placed in the scrollable header region.
#[derive(Debug, Clone, PartialEq)]
pub struct DialogDescription {
    pub text: String,
    pub style: Option<Style>,
}

impl DialogDescription {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: None,
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }
}

impl Widget for DialogDescription {
    fn compose(&self, ctx: &PlatformContext) -> Node {
        let base = TextSheet::for_platform(ctx.platform).description;
        let style = dialogkit_style::resolve(&base, self.style.as_ref());
        Node::text(self.text.clone(), style)
    }
}

/// A pressable footer button.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DialogButton {
    pub label: String,
    /// Identifier reported to the host when pressed.
    pub action: Option<String>,
    /// Text color overriding the platform accent.
    pub color: Option<Rgba>,
    pub bold: bool,
    pub disabled: bool,
    pub style: Option<Style>,
}

impl DialogButton {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    pub fn color(mut self, color: Rgba) -> Self {
        self.color = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }
}

impl Widget for DialogButton {
    fn compose(&self, ctx: &PlatformContext) -> Node {
        let sheet = TextSheet::for_platform(ctx.platform);
        let empty = Style::new();
        let color = self.color.map_or(empty, |c| empty.color(c));
        // Disabled wins over an explicit color; caller style wins over both.
        let style = cascade([
            &sheet.button,
            if self.bold { &sheet.button_bold } else { &empty },
            &color,
            if self.disabled {
                &sheet.button_disabled
            } else {
                &empty
            },
            self.style.as_ref().unwrap_or(&empty),
        ]);
        Node::new(
            NodeKind::Button(ButtonProps {
                label: self.label.clone(),
                action: self.action.clone(),
                bold: self.bold,
                disabled: self.disabled,
            }),
            style,
        )
    }
}

/// A child passed to [`DialogContainer`](crate::DialogContainer).
#[derive(Debug, Clone)]
pub enum Child {
    Title(DialogTitle),
    Description(DialogDescription),
    Button(DialogButton),
    /// Any other content, rendered between the header and the footer.
    Other(Arc<dyn Widget>),
}

impl Child {
    /// Wrap arbitrary content.
    pub fn other(widget: impl Widget + 'static) -> Self {
        Self::Other(Arc::new(widget))
    }

    #[must_use]
    pub fn role(&self) -> Role {
        match self {
            Self::Title(_) => Role::Title,
            Self::Description(_) => Role::Description,
            Self::Button(_) => Role::Button,
            Self::Other(_) => Role::Other,
        }
    }
}

impl From<DialogTitle> for Child {
    fn from(title: DialogTitle) -> Self {
        Self::Title(title)
    }
}

impl From<DialogDescription> for Child {
    fn from(description: DialogDescription) -> Self {
        Self::Description(description)
    }
}

impl From<DialogButton> for Child {
    fn from(button: DialogButton) -> Self {
        Self::Button(button)
    }
}

impl From<Node> for Child {
    fn from(node: Node) -> Self {
        Self::other(node)
    }
}

impl From<crate::input::DialogInput> for Child {
    fn from(input: crate::input::DialogInput) -> Self {
        Self::other(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dialogkit_core::geometry::Size;
    use dialogkit_core::platform::Platform;
    use dialogkit_style::FontWeight;
    use dialogkit_style::sheet::{ANDROID_BUTTON_COLOR, DISABLED_BUTTON_COLOR, IOS_BUTTON_COLOR};

    fn ctx(platform: Platform) -> PlatformContext {
        PlatformContext::new(platform, Size::new(375.0, 812.0))
    }

    #[test]
    fn roles_follow_constructor() {
        assert_eq!(Child::from(DialogTitle::new("t")).role(), Role::Title);
        assert_eq!(
            Child::from(DialogDescription::new("d")).role(),
            Role::Description
        );
        assert_eq!(Child::from(DialogButton::new("b")).role(), Role::Button);
        assert_eq!(Child::from(Node::host("Spinner")).role(), Role::Other);
    }

    #[test]
    fn title_uses_platform_style() {
        let node = DialogTitle::new("Hello").compose(&ctx(Platform::Ios));
        assert_eq!(node.kind, NodeKind::Text("Hello".into()));
        assert_eq!(node.style.font_weight, Some(FontWeight::SEMIBOLD));
    }

    #[test]
    fn title_override_merges() {
        let node = DialogTitle::new("Hello")
            .style(Style::new().font_size(30.0))
            .compose(&ctx(Platform::Ios));
        assert_eq!(node.style.font_size, Some(30.0));
        assert_eq!(node.style.font_weight, Some(FontWeight::SEMIBOLD));
    }

    #[test]
    fn button_accent_by_platform() {
        let ios = DialogButton::new("OK").compose(&ctx(Platform::Ios));
        let android = DialogButton::new("OK").compose(&ctx(Platform::Android));
        assert_eq!(ios.style.color, Some(IOS_BUTTON_COLOR));
        assert_eq!(android.style.color, Some(ANDROID_BUTTON_COLOR));
    }

    #[test]
    fn button_color_and_disabled() {
        let custom = DialogButton::new("Delete")
            .color(Rgba::rgb(255, 0, 0))
            .compose(&ctx(Platform::Ios));
        assert_eq!(custom.style.color, Some(Rgba::rgb(255, 0, 0)));

        let disabled = DialogButton::new("Delete")
            .color(Rgba::rgb(255, 0, 0))
            .disabled(true)
            .compose(&ctx(Platform::Ios));
        assert_eq!(disabled.style.color, Some(DISABLED_BUTTON_COLOR));
    }

    #[test]
    fn bold_button_props() {
        let node = DialogButton::new("OK")
            .bold()
            .action("ok")
            .compose(&ctx(Platform::Web));
        let NodeKind::Button(props) = &node.kind else {
            panic!("expected button, got {:?}", node.kind);
        };
        assert!(props.bold);
        assert_eq!(props.action.as_deref(), Some("ok"));
        assert_eq!(node.style.font_weight, Some(FontWeight::BOLD));
    }
}
