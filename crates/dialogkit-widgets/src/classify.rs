#![forbid(unsafe_code)]

//! Partition dialog children into role buckets.
//!
//! # Invariants
//!
//! 1. Every present child lands in exactly one bucket; absent children are
//!    dropped.
//! 2. Each bucket keeps the input order of its children.
//! 3. On iOS a separator precedes every button except the first, so the
//!    footer alternates button/separator and never starts or ends with a
//!    separator. Other platforms get no separators.

use std::sync::Arc;

use dialogkit_core::platform::{Platform, PlatformContext};
use dialogkit_style::{Style, resolve, sheet};

use crate::Widget;
use crate::child::{Child, DialogButton, DialogDescription, DialogTitle};
use crate::node::{Node, NodeKind};

/// One slot of the footer row.
#[derive(Debug, Clone, PartialEq)]
pub enum FooterEntry {
    Button(DialogButton),
    /// Synthetic hairline with its resolved style.
    Separator(Style),
}

impl FooterEntry {
    #[must_use]
    pub fn is_separator(&self) -> bool {
        matches!(self, Self::Separator(_))
    }
}

impl Widget for FooterEntry {
    fn compose(&self, ctx: &PlatformContext) -> Node {
        match self {
            Self::Button(button) => button.compose(ctx),
            Self::Separator(style) => Node::new(NodeKind::Separator, *style),
        }
    }
}

/// Children grouped by role.
#[derive(Debug, Clone, Default)]
pub struct Classified {
    pub titles: Vec<DialogTitle>,
    pub descriptions: Vec<DialogDescription>,
    /// Buttons with any injected separators.
    pub buttons: Vec<FooterEntry>,
    pub others: Vec<Arc<dyn Widget>>,
}

impl Classified {
    /// Whether all four buckets are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
            && self.descriptions.is_empty()
            && self.buttons.is_empty()
            && self.others.is_empty()
    }

    /// Number of real buttons, separators excluded.
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.iter().filter(|e| !e.is_separator()).count()
    }

    #[must_use]
    pub fn separator_count(&self) -> usize {
        self.buttons.iter().filter(|e| e.is_separator()).count()
    }
}

/// Bucket `children` by role for `platform`.
///
/// `separator_style` overrides the base separator style and only matters on
/// iOS.
pub fn classify(
    children: impl IntoIterator<Item = Option<Child>>,
    platform: Platform,
    separator_style: Option<&Style>,
) -> Classified {
    let separator = resolve(&sheet::button_separator_style(), separator_style);
    let mut out = Classified::default();
    for child in children.into_iter().flatten() {
        match child {
            Child::Title(title) => out.titles.push(title),
            Child::Description(description) => out.descriptions.push(description),
            Child::Button(button) => {
                if platform == Platform::Ios && !out.buttons.is_empty() {
                    out.buttons.push(FooterEntry::Separator(separator));
                }
                out.buttons.push(FooterEntry::Button(button));
            }
            Child::Other(widget) => out.others.push(widget),
        }
    }
    out
}
