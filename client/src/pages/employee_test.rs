use super::*;
use records::draft::{Draft, TripField};

fn employee() -> User {
    User {
        user_id: 21,
        name: "Ayanda".to_owned(),
        email: "ayanda@fleet.io".to_owned(),
        role: Role::Employee,
        vehicle_id: Some(5),
    }
}

#[test]
fn trip_template_pins_session_user() {
    let draft = trip_template(Some(&employee()));
    assert!(draft.is_locked(TripField::UserId));
    assert_eq!(draft.payload().user_id, 21);
}

#[test]
fn trip_template_without_user_is_unpinned() {
    let draft = trip_template(None);
    assert!(!draft.owner_pinned);
    assert_eq!(draft, TripDraft::default());
}
