#![forbid(unsafe_code)]

//! Property tests for child classification and footer composition.
//!
//! CI: 256 cases (default). Soak: PROPTEST_CASES=10000 cargo test --release

use dialogkit_core::{Platform, PlatformContext, Size};
use dialogkit_widgets::{
    Child, DialogButton, DialogContainer, DialogDescription, DialogTitle, FooterEntry, Node,
    NodeKind, Role, classify,
};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: std::env::var("PROPTEST_CASES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(256),
        failure_persistence: None,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Generators
// ---------------------------------------------------------------------------

/// `None` models an absent child.
fn arb_role() -> impl Strategy<Value = Option<Role>> {
    prop_oneof![
        Just(None),
        Just(Some(Role::Title)),
        Just(Some(Role::Description)),
        Just(Some(Role::Button)),
        Just(Some(Role::Other)),
    ]
}

fn arb_platform() -> impl Strategy<Value = Platform> {
    prop_oneof![
        Just(Platform::Ios),
        Just(Platform::Android),
        Just(Platform::Web)
    ]
}

fn build(roles: &[Option<Role>]) -> Vec<Option<Child>> {
    roles
        .iter()
        .enumerate()
        .map(|(i, role)| {
            role.map(|role| match role {
                Role::Title => DialogTitle::new(format!("t{i}")).into(),
                Role::Description => DialogDescription::new(format!("d{i}")).into(),
                Role::Button => DialogButton::new(format!("b{i}")).into(),
                Role::Other => Node::host(format!("o{i}")).into(),
            })
        })
        .collect()
}

fn indices_of(roles: &[Option<Role>], wanted: Role) -> Vec<String> {
    roles
        .iter()
        .enumerate()
        .filter(|(_, r)| **r == Some(wanted))
        .map(|(i, _)| i.to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(config())]

    #[test]
    fn only_absent_children_yield_empty_buckets(n in 0usize..32, platform in arb_platform()) {
        let out = classify(std::iter::repeat_with(|| None).take(n), platform, None);
        prop_assert!(out.is_empty());
    }

    #[test]
    fn every_present_child_lands_once(
        roles in prop::collection::vec(arb_role(), 0..40),
        platform in arb_platform(),
    ) {
        let present = roles.iter().flatten().count();
        let out = classify(build(&roles), platform, None);
        let total =
            out.titles.len() + out.descriptions.len() + out.button_count() + out.others.len();
        prop_assert_eq!(total, present);
    }

    #[test]
    fn buckets_preserve_input_order(
        roles in prop::collection::vec(arb_role(), 0..40),
        platform in arb_platform(),
    ) {
        let out = classify(build(&roles), platform, None);
        let titles: Vec<String> = out.titles.iter().map(|t| t.text[1..].to_string()).collect();
        let descriptions: Vec<String> =
            out.descriptions.iter().map(|d| d.text[1..].to_string()).collect();
        let buttons: Vec<String> = out
            .buttons
            .iter()
            .filter_map(|e| match e {
                FooterEntry::Button(b) => Some(b.label[1..].to_string()),
                FooterEntry::Separator(_) => None,
            })
            .collect();
        prop_assert_eq!(titles, indices_of(&roles, Role::Title));
        prop_assert_eq!(descriptions, indices_of(&roles, Role::Description));
        prop_assert_eq!(buttons, indices_of(&roles, Role::Button));
    }

    #[test]
    fn ios_footer_alternates(n in 1usize..12) {
        let children = (0..n).map(|i| Some(DialogButton::new(format!("b{i}")).into()));
        let out = classify(children, Platform::Ios, None);
        prop_assert_eq!(out.buttons.len(), 2 * n - 1);
        for (i, entry) in out.buttons.iter().enumerate() {
            prop_assert_eq!(entry.is_separator(), i % 2 == 1);
        }
    }

    #[test]
    fn no_separators_off_ios(
        roles in prop::collection::vec(arb_role(), 0..40),
        platform in prop_oneof![Just(Platform::Android), Just(Platform::Web)],
    ) {
        let out = classify(build(&roles), platform, None);
        prop_assert_eq!(out.separator_count(), 0);
    }

    #[test]
    fn composed_footer_matches_buttons(
        roles in prop::collection::vec(arb_role(), 0..24),
        platform in arb_platform(),
    ) {
        let buttons = roles.iter().filter(|r| **r == Some(Role::Button)).count();
        let props = DialogContainer::new()
            .children(build(&roles))
            .compose(&PlatformContext::new(platform, Size::new(375.0, 812.0)));
        match props.content.find("footer") {
            None => prop_assert_eq!(buttons, 0),
            Some(footer) => {
                let n_buttons = footer.count(|n| matches!(n.kind, NodeKind::Button(_)));
                let n_separators = footer.count(|n| n.kind == NodeKind::Separator);
                prop_assert_eq!(n_buttons, buttons);
                let expected_separators = if platform == Platform::Ios { buttons - 1 } else { 0 };
                prop_assert_eq!(n_separators, expected_separators);
                for (i, child) in footer.children.iter().enumerate() {
                    let key = format!("dialog-button-{i}");
                    prop_assert_eq!(child.key.as_deref(), Some(key.as_str()));
                }
            }
        }
    }

    #[test]
    fn max_height_is_window_minus_keyboard(height in 0.0f32..4000.0) {
        let ctx = PlatformContext::new(Platform::Web, Size::new(800.0, height));
        let props = DialogContainer::new().compose(&ctx);
        let content = props.content.find("content").expect("content region");
        let expected = if height >= 300.0 { height - 300.0 } else { 0.0 };
        prop_assert_eq!(content.style.max_height, Some(expected));
    }
}
