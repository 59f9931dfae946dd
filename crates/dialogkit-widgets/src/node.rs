#![forbid(unsafe_code)]

//! The composed layout tree handed to the host renderer.
//!
//! A [`Node`] is plain data: a kind, a fully resolved [`Style`], an optional
//! reconciliation key, an optional region tag, and ordered children. The
//! host maps each kind onto its own primitives.

use core::fmt::Write as _;

use dialogkit_style::{Rgba, Style};

/// Keyboard-avoidance strategy requested from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum KeyboardBehavior {
    /// Grow bottom padding by the keyboard height.
    Padding,
    /// Shift the whole wrapper up.
    Position,
    /// Shrink the wrapper height.
    Height,
}

impl KeyboardBehavior {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Padding => "padding",
            Self::Position => "position",
            Self::Height => "height",
        }
    }
}

/// Properties forwarded to the host's pressable text primitive.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ButtonProps {
    pub label: String,
    /// Action identifier reported back when pressed.
    pub action: Option<String>,
    pub bold: bool,
    pub disabled: bool,
}

/// Properties forwarded to the host's text-input primitive.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextInputProps {
    pub value: String,
    pub placeholder: Option<String>,
    pub multiline: bool,
    pub number_of_lines: Option<u32>,
    pub secure_text_entry: bool,
    pub auto_focus: bool,
    /// Action identifier reported back with the new text on change.
    pub on_change_text: Option<String>,
    pub underline_color: Option<Rgba>,
}

/// What a node renders as.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Plain container.
    View,
    /// Scrollable container.
    Scroll,
    Text(String),
    Button(ButtonProps),
    TextInput(TextInputProps),
    /// Keyboard-avoidance wrapper; `None` requests no avoidance.
    KeyboardAvoiding(Option<KeyboardBehavior>),
    /// Hairline between footer buttons.
    Separator,
    /// Default translucent backdrop layer.
    Blur,
    /// Host element identified by name, rendered opaquely.
    Host(String),
}

/// A node of the composed tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub style: Style,
    /// Stable identity for the host's reconciliation.
    pub key: Option<String>,
    /// Region name (`"content"`, `"header"`, `"footer"`, ...).
    pub tag: Option<&'static str>,
    pub children: Vec<Node>,
}

impl Node {
    #[must_use]
    pub fn new(kind: NodeKind, style: Style) -> Self {
        Self {
            kind,
            style,
            key: None,
            tag: None,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn view(style: Style) -> Self {
        Self::new(NodeKind::View, style)
    }

    #[must_use]
    pub fn scroll(style: Style) -> Self {
        Self::new(NodeKind::Scroll, style)
    }

    #[must_use]
    pub fn text(text: impl Into<String>, style: Style) -> Self {
        Self::new(NodeKind::Text(text.into()), style)
    }

    /// An opaque host element.
    #[must_use]
    pub fn host(name: impl Into<String>) -> Self {
        Self::new(NodeKind::Host(name.into()), Style::new())
    }

    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    #[must_use]
    pub fn tagged(mut self, tag: &'static str) -> Self {
        self.tag = Some(tag);
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn push(&mut self, child: Node) {
        self.children.push(child);
    }

    /// First node (depth-first, self included) carrying `tag`.
    #[must_use]
    pub fn find(&self, tag: &str) -> Option<&Node> {
        if self.tag == Some(tag) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(tag))
    }

    /// Visit every node depth-first, parents before children.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Node)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }

    /// Count nodes in this subtree matching `pred`.
    #[must_use]
    pub fn count(&self, pred: impl Fn(&Node) -> bool) -> usize {
        let mut n = 0;
        self.walk(&mut |node| {
            if pred(node) {
                n += 1;
            }
        });
        n
    }

    /// Stable indented text form of the tree, one node per line.
    ///
    /// Styles are omitted; the outline shows structure, kinds, tags, and
    /// keys only.
    #[must_use]
    pub fn outline(&self) -> String {
        let mut out = String::new();
        self.write_outline(&mut out, 0);
        out
    }

    fn write_outline(&self, out: &mut String, depth: usize) {
        for _ in 0..depth {
            out.push_str("  ");
        }
        match &self.kind {
            NodeKind::View => out.push_str("view"),
            NodeKind::Scroll => out.push_str("scroll"),
            NodeKind::Text(text) => {
                let _ = write!(out, "text {text:?}");
            }
            NodeKind::Button(props) => {
                let _ = write!(out, "button {:?}", props.label);
            }
            NodeKind::TextInput(_) => out.push_str("input"),
            NodeKind::KeyboardAvoiding(behavior) => {
                out.push_str("keyboard-avoiding");
                if let Some(behavior) = behavior {
                    let _ = write!(out, "({})", behavior.as_str());
                }
            }
            NodeKind::Separator => out.push_str("separator"),
            NodeKind::Blur => out.push_str("blur"),
            NodeKind::Host(name) => {
                let _ = write!(out, "host {name}");
            }
        }
        if let Some(tag) = self.tag {
            let _ = write!(out, "[{tag}]");
        }
        if let Some(key) = &self.key {
            let _ = write!(out, "#{key}");
        }
        out.push('\n');
        for child in &self.children {
            child.write_outline(out, depth + 1);
        }
    }
}
