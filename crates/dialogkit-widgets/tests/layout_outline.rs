#![forbid(unsafe_code)]

//! Integration tests: outline dumps of fully composed dialogs.

use dialogkit_core::{FixedPlatform, Platform, PlatformContext, Size};
use dialogkit_widgets::{
    Child, DialogButton, DialogContainer, DialogDescription, DialogInput, DialogTitle, Node,
    NodeKind, Transition, VisibilityState,
};

fn prompt() -> DialogContainer {
    DialogContainer::new()
        .visible(true)
        .child(DialogTitle::new("Rename"))
        .child(DialogDescription::new("Choose a new name."))
        .child(DialogInput::new().label("Name").value("draft.txt"))
        .child(DialogButton::new("Cancel").action("cancel"))
        .child(DialogButton::new("Save").action("save").bold())
}

fn resolve(platform: Platform) -> PlatformContext {
    PlatformContext::resolve(&FixedPlatform::new(platform, Size::new(390.0, 844.0)))
}

// ============================================================================
// Prompt dialog
// ============================================================================

#[test]
fn prompt_on_ios() {
    let props = prompt().compose(&resolve(Platform::Ios));
    let expected = "\
keyboard-avoiding(padding)
  view[content]
    blur
    view[header]
      text \"Rename\"
      scroll[descriptions]
        text \"Choose a new name.\"
    view[input]
      text \"Name\"
      input
    view[footer]
      button \"Cancel\"#dialog-button-0
      separator#dialog-button-1
      button \"Save\"#dialog-button-2
";
    assert_eq!(props.content.outline(), expected);
}

#[test]
fn prompt_on_web() {
    let props = prompt().compose(&resolve(Platform::Web));
    let expected = "\
keyboard-avoiding
  view[content]
    view[header]
      text \"Rename\"
      scroll[descriptions]
        text \"Choose a new name.\"
    view[input]
      text \"Name\"
      input
    view[footer]
      button \"Cancel\"#dialog-button-0
      button \"Save\"#dialog-button-1
";
    assert_eq!(props.content.outline(), expected);
}

#[test]
fn input_child_is_sized_for_platform() {
    let props = prompt().compose(&resolve(Platform::Android));
    let mut heights = Vec::new();
    props.content.walk(&mut |n| {
        if matches!(n.kind, NodeKind::TextInput(_)) {
            heights.push(n.style.height);
        }
    });
    assert_eq!(
        heights,
        [Some(dialogkit_core::Dimension::Points(40.0))]
    );
}

// ============================================================================
// Edge cases
// ============================================================================

#[test]
fn empty_dialog_keeps_header_shell() {
    let props = DialogContainer::new().compose(&resolve(Platform::Android));
    let expected = "\
keyboard-avoiding
  view[content]
    view[header]
      scroll[descriptions]
";
    assert_eq!(props.content.outline(), expected);
}

#[test]
fn custom_blur_on_ios_only() {
    let dialog = prompt().blur_component(Node::host("BlurView").with_key("blur"));
    let ios = dialog.compose(&resolve(Platform::Ios));
    let content = ios.content.find("content").expect("content");
    assert_eq!(content.children[0].kind, NodeKind::Host("BlurView".into()));
    assert!(ios.content.count(|n| n.kind == NodeKind::Blur) == 0);

    let android = dialog.compose(&resolve(Platform::Android));
    let content = android.content.find("content").expect("content");
    assert_eq!(content.children[0].tag, Some("header"));
}

#[test]
fn optional_children_compose_like_present_ones() {
    let cancel: Option<DialogButton> = None;
    let props = DialogContainer::new()
        .optional_child(cancel)
        .optional_child(Some(DialogButton::new("OK")))
        .compose(&resolve(Platform::Ios));
    let footer = props.content.find("footer").expect("footer");
    assert_eq!(footer.children.len(), 1);
    assert_eq!(footer.children[0].key.as_deref(), Some("dialog-button-0"));
}

#[test]
fn tiny_window_clamps_content_height() {
    let ctx = PlatformContext::new(Platform::Ios, Size::new(200.0, 120.0));
    let props = prompt().compose(&ctx);
    let content = props.content.find("content").expect("content");
    assert_eq!(content.style.max_height, Some(0.0));
}

// ============================================================================
// Visibility across renders
// ============================================================================

#[test]
fn visibility_transitions_pick_composed_animations() {
    let ctx = resolve(Platform::Ios);
    let mut state = VisibilityState::default();

    let shown = prompt().visible(true).compose(&ctx);
    let transition = state.request(shown.visible).expect("enter");
    assert_eq!(transition, Transition::Enter);
    let (animation, timing) = shown.animation_for(transition);
    assert_eq!(*animation, Transition::Enter.animation(Platform::Ios));
    assert_eq!(timing.as_millis(), 300);

    let again = prompt().visible(true).compose(&ctx);
    assert_eq!(state.request(again.visible), None);

    let hidden = prompt().visible(false).compose(&ctx);
    assert_eq!(state.request(hidden.visible), Some(Transition::Exit));
}

#[test]
fn children_accepts_mixed_sequence() {
    let children: Vec<Option<Child>> = vec![
        None,
        Some(DialogTitle::new("A").into()),
        Some(Node::host("Switch").into()),
        None,
    ];
    let props = DialogContainer::new()
        .children(children)
        .compose(&resolve(Platform::Web));
    assert_eq!(
        props.content.count(|n| n.kind == NodeKind::Host("Switch".into())),
        1
    );
}
