#![forbid(unsafe_code)]

//! Dialog container: classifies children and composes the dialog tree.
//!
//! The composed tree always has this shape:
//!
//! ```text
//! keyboard-avoiding
//!   view[content]
//!     blur                      (iOS only; or the caller's blur node)
//!     view[header]
//!       text ...                (titles)
//!       scroll[descriptions]
//!         text ...              (descriptions)
//!     ...                       (other children)
//!     view[footer]              (omitted without buttons)
//!       button ...#dialog-button-0
//!       separator#dialog-button-1   (iOS only)
//! ```
//!
//! Invariants:
//! - The content region's maximum height is the window height minus the
//!   keyboard allowance, floored at zero, on every platform.
//! - Caller region styles are merged over the platform base, never replace it.
//! - Footer entries are keyed by their position in the footer.

use dialogkit_core::platform::{Platform, PlatformContext};
use dialogkit_style::{ContainerSheet, Style, resolve};

use crate::Widget;
use crate::animation::Animation;
use crate::child::Child;
use crate::classify::classify;
use crate::node::{KeyboardBehavior, Node, NodeKind};
use crate::overlay::{OverlayConfig, OverlayProps};

/// Caller overrides for each region of the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct DialogStyles {
    pub content: Option<Style>,
    pub header: Option<Style>,
    pub footer: Option<Style>,
    pub button_separator: Option<Style>,
    /// Keyboard-avoidance wrapper.
    pub keyboard: Option<Style>,
    /// Default iOS blur layer; unused when a blur node is supplied.
    pub blur: Option<Style>,
}

/// Modal dialog container.
///
/// Children may be given in any order; [`DialogContainer::compose`] places
/// them by role.
///
/// # Example
///
/// ```
/// use dialogkit_core::{Platform, PlatformContext, Size};
/// use dialogkit_widgets::{DialogButton, DialogContainer, DialogDescription, DialogTitle};
///
/// let dialog = DialogContainer::new()
///     .visible(true)
///     .child(DialogTitle::new("Delete file?"))
///     .child(DialogDescription::new("This cannot be undone."))
///     .child(DialogButton::new("Cancel").action("cancel"))
///     .child(DialogButton::new("Delete").action("delete").bold());
///
/// let ctx = PlatformContext::new(Platform::Ios, Size::new(375.0, 812.0));
/// let props = dialog.compose(&ctx);
/// assert!(props.visible);
/// assert!(props.content.find("footer").is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct DialogContainer {
    visible: bool,
    children: Vec<Option<Child>>,
    styles: DialogStyles,
    blur_component: Option<Node>,
    overlay: OverlayConfig,
}

impl DialogContainer {
    /// An empty, hidden container.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Append a child.
    pub fn child(mut self, child: impl Into<Child>) -> Self {
        self.children.push(Some(child.into()));
        self
    }

    /// Append a child that may be absent; `None` is dropped at composition.
    pub fn optional_child<C: Into<Child>>(mut self, child: Option<C>) -> Self {
        self.children.push(child.map(Into::into));
        self
    }

    /// Append several possibly absent children.
    pub fn children(mut self, children: impl IntoIterator<Item = Option<Child>>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn styles(mut self, styles: DialogStyles) -> Self {
        self.styles = styles;
        self
    }

    pub fn content_style(mut self, style: Style) -> Self {
        self.styles.content = Some(style);
        self
    }

    pub fn header_style(mut self, style: Style) -> Self {
        self.styles.header = Some(style);
        self
    }

    pub fn footer_style(mut self, style: Style) -> Self {
        self.styles.footer = Some(style);
        self
    }

    pub fn button_separator_style(mut self, style: Style) -> Self {
        self.styles.button_separator = Some(style);
        self
    }

    pub fn keyboard_style(mut self, style: Style) -> Self {
        self.styles.keyboard = Some(style);
        self
    }

    pub fn blur_style(mut self, style: Style) -> Self {
        self.styles.blur = Some(style);
        self
    }

    /// Replace the default iOS backdrop layer. Ignored on other platforms.
    pub fn blur_component(mut self, node: Node) -> Self {
        self.blur_component = Some(node);
        self
    }

    /// Overlay options passed through to the overlay primitive.
    pub fn overlay(mut self, overlay: OverlayConfig) -> Self {
        self.overlay = overlay;
        self
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Compose the overlay request for one render pass.
    pub fn compose(&self, ctx: &PlatformContext) -> OverlayProps {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "dialog_compose",
            platform = %ctx.platform,
            window_height = ctx.window_height(),
            children = self.children.len(),
            visible = self.visible
        )
        .entered();

        let platform = ctx.platform;
        let sheet = ContainerSheet::for_context(ctx);
        let styles = &self.styles;
        let classified = classify(
            self.children.iter().cloned(),
            platform,
            styles.button_separator.as_ref(),
        );

        #[cfg(feature = "tracing")]
        tracing::debug!(
            titles = classified.titles.len(),
            descriptions = classified.descriptions.len(),
            buttons = classified.button_count(),
            separators = classified.separator_count(),
            others = classified.others.len(),
            "classified dialog children"
        );

        let mut content =
            Node::view(resolve(&sheet.content, styles.content.as_ref())).tagged("content");

        if platform == Platform::Ios {
            match &self.blur_component {
                Some(blur) => content.push(blur.clone()),
                None => content.push(Node::new(
                    NodeKind::Blur,
                    resolve(&sheet.blur, styles.blur.as_ref()),
                )),
            }
        }

        let descriptions = Node::scroll(sheet.description_scroll)
            .tagged("descriptions")
            .with_children(classified.descriptions.iter().map(|d| d.compose(ctx)));
        let header = Node::view(resolve(&sheet.header, styles.header.as_ref()))
            .tagged("header")
            .with_children(classified.titles.iter().map(|t| t.compose(ctx)))
            .with_children([descriptions]);
        content.push(header);

        for other in &classified.others {
            content.push(other.compose(ctx));
        }

        if !classified.buttons.is_empty() {
            let footer = Node::view(resolve(&sheet.footer, styles.footer.as_ref()))
                .tagged("footer")
                .with_children(classified.buttons.iter().enumerate().map(|(i, entry)| {
                    entry.compose(ctx).with_key(format!("dialog-button-{i}"))
                }));
            content.push(footer);
        }

        let behavior = (platform == Platform::Ios).then_some(KeyboardBehavior::Padding);
        let keyboard = Node::new(
            NodeKind::KeyboardAvoiding(behavior),
            resolve(&sheet.container, styles.keyboard.as_ref()),
        )
        .with_children([content]);

        let overlay = &self.overlay;
        OverlayProps {
            visible: self.visible,
            animation_in: overlay
                .animation_in
                .clone()
                .unwrap_or_else(|| Animation::entrance(platform)),
            animation_out: overlay
                .animation_out
                .clone()
                .unwrap_or_else(|| Animation::exit(platform)),
            animation_in_timing: overlay.animation_in_timing,
            animation_out_timing: overlay.animation_out_timing,
            backdrop: overlay.backdrop,
            style: resolve(&sheet.modal, overlay.style.as_ref()),
            content: keyboard,
        }
    }
}
