#![forbid(unsafe_code)]

//! Style records with CSS-like cascading semantics.
//!
//! Every property is optional. An unset property inherits from whatever the
//! style is merged onto, so a caller override only needs to name the
//! properties it changes.
//!
//! # Layering
//!
//! Resolution is always `base -> override -> final`:
//!
//! ```
//! use dialogkit_style::{Rgba, Style};
//!
//! let base = Style::new().background(Rgba::WHITE).border_radius(13.0);
//! let caller = Style::new().background(Rgba::BLACK);
//! let resolved = caller.merge(&base);
//! assert_eq!(resolved.background, Some(Rgba::BLACK));
//! assert_eq!(resolved.border_radius, Some(13.0));
//! ```

use dialogkit_core::geometry::{Dimension, Sides};

use crate::color::Rgba;

/// Main-axis direction for child placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum FlexDirection {
    Row,
    Column,
}

/// Distribution of children along the main axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Justify {
    FlexStart,
    Center,
    FlexEnd,
    SpaceBetween,
}

/// Alignment of children along the cross axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Align {
    FlexStart,
    Center,
    FlexEnd,
    Stretch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Position {
    Relative,
    /// Taken out of flow and pinned by `inset`.
    Absolute,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Overflow {
    Visible,
    Hidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontWeight(pub u16);

impl FontWeight {
    pub const NORMAL: Self = Self(400);
    pub const MEDIUM: Self = Self(500);
    pub const SEMIBOLD: Self = Self(600);
    pub const BOLD: Self = Self(700);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum TextTransform {
    None,
    Uppercase,
}

macro_rules! style_record {
    ($( $(#[$doc:meta])* $field:ident : $ty:ty ),* $(,)?) => {
        /// A set of optional presentation properties.
        ///
        /// Invariants:
        /// - `Style::default()` sets nothing and is the identity for [`Style::merge`].
        /// - `a.merge(&b)` keeps every property `a` sets and fills the rest from `b`.
        #[derive(Debug, Clone, Copy, PartialEq, Default)]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Serialize, serde::Deserialize),
            serde(default, rename_all = "camelCase")
        )]
        pub struct Style {
            $(
                $(#[$doc])*
                #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
                pub $field: Option<$ty>,
            )*
        }

        impl Style {
            /// Whether no property is set.
            #[must_use]
            pub fn is_empty(&self) -> bool {
                true $(&& self.$field.is_none())*
            }

            /// Fill unset properties of `self` from `parent`.
            #[must_use]
            pub fn merge(&self, parent: &Style) -> Style {
                Style {
                    $($field: self.$field.or(parent.$field),)*
                }
            }

            /// Number of properties set.
            #[must_use]
            pub fn len(&self) -> usize {
                0 $(+ usize::from(self.$field.is_some()))*
            }

            $(
                #[must_use]
                pub fn $field(mut self, value: $ty) -> Self {
                    self.$field = Some(value);
                    self
                }
            )*
        }
    };
}

style_record! {
    width: Dimension,
    height: Dimension,
    min_width: f32,
    /// Upper bound on the rendered height.
    max_height: f32,
    padding: Sides,
    margin: Sides,
    /// Edge offsets for `Position::Absolute` elements.
    inset: Sides,
    position: Position,
    flex: f32,
    flex_direction: FlexDirection,
    justify_content: Justify,
    align_items: Align,
    overflow: Overflow,
    background: Rgba,
    border_radius: f32,
    border_width: f32,
    border_color: Rgba,
    border_top_width: f32,
    border_top_color: Rgba,
    /// Android shadow depth.
    elevation: f32,
    opacity: f32,
    color: Rgba,
    font_size: f32,
    font_weight: FontWeight,
    text_align: TextAlign,
    text_transform: TextTransform,
}

impl Style {
    /// An empty style.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            width: None,
            height: None,
            min_width: None,
            max_height: None,
            padding: None,
            margin: None,
            inset: None,
            position: None,
            flex: None,
            flex_direction: None,
            justify_content: None,
            align_items: None,
            overflow: None,
            background: None,
            border_radius: None,
            border_width: None,
            border_color: None,
            border_top_width: None,
            border_top_color: None,
            elevation: None,
            opacity: None,
            color: None,
            font_size: None,
            font_weight: None,
            text_align: None,
            text_transform: None,
        }
    }

    /// Absolutely positioned and pinned to every edge of the parent.
    #[must_use]
    pub fn fill_parent(self) -> Self {
        self.position(Position::Absolute).inset(Sides::ZERO)
    }

    /// Layer `over` on top of `self`; properties set in `over` win.
    #[must_use]
    pub fn patch(&self, over: &Style) -> Style {
        over.merge(self)
    }
}

/// Resolve a base style and an optional caller override.
#[must_use]
pub fn resolve(base: &Style, over: Option<&Style>) -> Style {
    match over {
        Some(over) => base.patch(over),
        None => *base,
    }
}

/// Resolve any number of layers; later layers win.
#[must_use]
pub fn cascade<'a>(layers: impl IntoIterator<Item = &'a Style>) -> Style {
    layers
        .into_iter()
        .fold(Style::new(), |acc, layer| acc.patch(layer))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        assert!(Style::default().is_empty());
        assert_eq!(Style::new(), Style::default());
        assert_eq!(Style::new().len(), 0);
    }

    #[test]
    fn builders_set_fields() {
        let style = Style::new().width(Dimension::Points(270.0)).font_weight(FontWeight::BOLD);
        assert_eq!(style.width, Some(Dimension::Points(270.0)));
        assert_eq!(style.font_weight, Some(FontWeight::BOLD));
        assert_eq!(style.len(), 2);
    }

    #[test]
    fn merge_prefers_self() {
        let child = Style::new().color(Rgba::BLACK);
        let parent = Style::new().color(Rgba::WHITE).font_size(13.0);
        let merged = child.merge(&parent);
        assert_eq!(merged.color, Some(Rgba::BLACK));
        assert_eq!(merged.font_size, Some(13.0));
    }

    #[test]
    fn patch_prefers_override() {
        let base = Style::new().padding(Sides::all(18.0)).background(Rgba::WHITE);
        let over = Style::new().padding(Sides::all(4.0));
        let out = base.patch(&over);
        assert_eq!(out.padding, Some(Sides::all(4.0)));
        assert_eq!(out.background, Some(Rgba::WHITE));
    }

    #[test]
    fn resolve_without_override_is_base() {
        let base = Style::new().elevation(4.0);
        assert_eq!(resolve(&base, None), base);
        assert_eq!(resolve(&base, Some(&Style::new())), base);
    }

    #[test]
    fn cascade_later_layers_win() {
        let a = Style::new().font_size(10.0).color(Rgba::BLACK);
        let b = Style::new().font_size(12.0);
        let c = Style::new().text_align(TextAlign::Center);
        let out = cascade([&a, &b, &c]);
        assert_eq!(out.font_size, Some(12.0));
        assert_eq!(out.color, Some(Rgba::BLACK));
        assert_eq!(out.text_align, Some(TextAlign::Center));
    }

    #[test]
    fn fill_parent_pins_all_edges() {
        let style = Style::new().fill_parent();
        assert_eq!(style.position, Some(Position::Absolute));
        assert_eq!(style.inset, Some(Sides::ZERO));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_uses_camel_case_and_skips_unset() {
        let style: Style =
            serde_json::from_str(r##"{"borderRadius": 13.0, "background": "#ffffff"}"##).unwrap();
        assert_eq!(style.border_radius, Some(13.0));
        assert_eq!(style.background, Some(Rgba::WHITE));
        assert_eq!(style.len(), 2);

        let json = serde_json::to_string(&Style::new().opacity(0.5)).unwrap();
        assert_eq!(json, r#"{"opacity":0.5}"#);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        fn arb_style() -> impl Strategy<Value = Style> {
            (
                proptest::option::of(0.0f32..400.0),
                proptest::option::of(0.0f32..1.0),
                proptest::option::of(any::<u32>().prop_map(Rgba)),
                proptest::option::of(prop_oneof![
                    Just(TextAlign::Left),
                    Just(TextAlign::Center),
                    Just(TextAlign::Right),
                ]),
            )
                .prop_map(|(font_size, opacity, color, text_align)| Style {
                    font_size,
                    opacity,
                    color,
                    text_align,
                    ..Style::new()
                })
        }

        proptest! {
            #[test]
            fn empty_is_merge_identity(style in arb_style()) {
                prop_assert_eq!(style.merge(&Style::new()), style);
                prop_assert_eq!(Style::new().merge(&style), style);
            }

            #[test]
            fn merge_is_associative(a in arb_style(), b in arb_style(), c in arb_style()) {
                prop_assert_eq!(a.merge(&b).merge(&c), a.merge(&b.merge(&c)));
            }

            #[test]
            fn resolve_lets_override_win(base in arb_style(), over in arb_style()) {
                let out = resolve(&base, Some(&over));
                if over.font_size.is_some() {
                    prop_assert_eq!(out.font_size, over.font_size);
                } else {
                    prop_assert_eq!(out.font_size, base.font_size);
                }
            }
        }
    }
}
