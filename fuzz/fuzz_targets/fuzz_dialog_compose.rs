#![no_main]

use arbitrary::Arbitrary;
use dialogkit_core::{Platform, PlatformContext, Size};
use dialogkit_widgets::{
    Child, DialogButton, DialogContainer, DialogDescription, DialogTitle, Node, NodeKind,
};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum FuzzChild {
    Absent,
    Title(String),
    Description(String),
    Button(String),
    Other(String),
}

#[derive(Debug, Arbitrary)]
struct FuzzDialog {
    platform: u8,
    window_height: f32,
    children: Vec<FuzzChild>,
}

fuzz_target!(|input: FuzzDialog| {
    let platform = Platform::ALL[usize::from(input.platform) % Platform::ALL.len()];
    let ctx = PlatformContext::new(platform, Size::new(400.0, input.window_height));
    let mut buttons = 0usize;
    let children: Vec<Option<Child>> = input
        .children
        .into_iter()
        .map(|child| match child {
            FuzzChild::Absent => None,
            FuzzChild::Title(s) => Some(DialogTitle::new(s).into()),
            FuzzChild::Description(s) => Some(DialogDescription::new(s).into()),
            FuzzChild::Button(s) => {
                buttons += 1;
                Some(DialogButton::new(s).into())
            }
            FuzzChild::Other(s) => Some(Node::host(s).into()),
        })
        .collect();

    let props = DialogContainer::new().children(children).compose(&ctx);
    let footer_buttons = props
        .content
        .find("footer")
        .map_or(0, |f| f.count(|n| matches!(n.kind, NodeKind::Button(_))));
    assert_eq!(footer_buttons, buttons);
});
