use super::*;

#[test]
fn last_message_wins() {
    let mut banner = Banner::default();
    banner.show("Failed to fetch vehicles");
    banner.show("Failed to fetch users");
    assert_eq!(banner.message(), Some("Failed to fetch users"));
}

#[test]
fn dismiss_clears() {
    let mut banner = Banner::default();
    banner.show("boom");
    banner.dismiss();
    assert_eq!(banner.message(), None);
}
