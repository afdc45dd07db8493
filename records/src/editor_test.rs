use super::*;
use crate::draft::{TripDraft, TripField, VehicleDraft, VehicleField};
use crate::entity::{Trip, TripStatus};

fn trip(id: i64, destination: &str) -> Trip {
    Trip {
        trip_id: id,
        vehicle_id: 1,
        user_id: 2,
        start_location: "Home".to_owned(),
        destination: destination.to_owned(),
        purpose: None,
        trip_date: "2024-07-07".to_owned(),
        distance: Some(10.0),
        fuel_consumed: None,
        trip_status: Some(TripStatus::Pending),
    }
}

fn filled_vehicle_editor() -> Editor<VehicleDraft> {
    let mut editor = Editor::<VehicleDraft>::default();
    editor.open_create();
    for (field, text) in [
        (VehicleField::Vin, "VIN9"),
        (VehicleField::Make, "Mazda"),
        (VehicleField::Model, "BT-50"),
        (VehicleField::Year, "2022"),
        (VehicleField::LicencePlate, "CY 1"),
        (VehicleField::LastServiceDate, "2024-01-01"),
    ] {
        editor.set(field, text).unwrap();
    }
    editor
}

#[test]
fn starts_closed_in_create_mode() {
    let editor = Editor::<VehicleDraft>::default();
    assert!(!editor.open);
    assert_eq!(editor.mode, Mode::Create);
    assert_eq!(editor.title("Vehicle"), "Add Vehicle");
}

#[test]
fn create_submission_carries_payload() {
    let mut editor = filled_vehicle_editor();
    let Ok(Submission::Create(payload)) = editor.submission() else {
        panic!("expected create submission");
    };
    assert_eq!(payload.vin, "VIN9");
    assert_eq!(payload.year, 2022);
    assert_eq!(payload.mileage, 0);
}

#[test]
fn successful_create_clears_draft_and_closes() {
    let mut editor = filled_vehicle_editor();
    editor.submission().unwrap();
    editor.on_success();
    assert!(!editor.open);
    assert_eq!(editor.draft, VehicleDraft::default());
    assert_eq!(editor.mode, Mode::Create);
}

#[test]
fn failed_submit_keeps_draft_open_with_message() {
    let mut editor = filled_vehicle_editor();
    editor.submission().unwrap();
    editor.on_failure("VIN already registered");
    assert!(editor.open);
    assert_eq!(editor.draft.vin, "VIN9");
    assert_eq!(editor.error.as_deref(), Some("VIN already registered"));
}

#[test]
fn invalid_draft_is_not_submitted() {
    let mut editor = Editor::<VehicleDraft>::default();
    editor.open_create();
    assert_eq!(editor.submission(), Err(DraftError::Missing("VIN")));
    assert_eq!(editor.error.as_deref(), Some("VIN is required"));
}

#[test]
fn edit_submission_targets_record_id() {
    let mut editor = Editor::<TripDraft>::default();
    editor.open_edit(&trip(31, "Paarl"));
    assert_eq!(editor.title("Trip"), "Edit Trip");
    editor.set(TripField::Destination, "Worcester").unwrap();
    let Ok(Submission::Update { id, payload }) = editor.submission() else {
        panic!("expected update submission");
    };
    assert_eq!(id, 31);
    assert_eq!(payload.destination, "Worcester");
    assert_eq!(payload.distance, Some(10.0));
}

#[test]
fn successful_edit_clears_target() {
    let mut editor = Editor::<TripDraft>::default();
    editor.open_edit(&trip(31, "Paarl"));
    editor.on_success();
    assert!(!editor.is_editing());
    assert!(!editor.open);
    assert_eq!(editor.draft, TripDraft::default());
}

#[test]
fn cancelling_edit_returns_to_blank_create() {
    let mut editor = Editor::<TripDraft>::default();
    editor.open_edit(&trip(31, "Paarl"));
    editor.close();
    editor.open_create();
    assert_eq!(editor.mode, Mode::Create);
    assert_eq!(editor.draft.destination, "");
}

#[test]
fn cancelling_create_keeps_work_in_progress() {
    let mut editor = filled_vehicle_editor();
    editor.close();
    editor.open_create();
    assert_eq!(editor.draft.make, "Mazda");
}

#[test]
fn pinned_template_applies_to_create_and_edit() {
    let mut editor = Editor::new(TripDraft::for_user(2));
    editor.open_create();
    assert!(editor.set(TripField::UserId, "5").is_err());
    editor.open_edit(&trip(4, "George"));
    assert!(editor.draft.is_locked(TripField::UserId));
    editor.on_success();
    assert_eq!(editor.draft, TripDraft::for_user(2));
}

#[test]
fn second_submit_while_in_flight_is_ignored() {
    let mut editor = filled_vehicle_editor();
    assert!(matches!(editor.begin_submit(), Ok(Some(Submission::Create(_)))));
    assert!(editor.submitting);
    assert!(matches!(editor.begin_submit(), Ok(None)));
}

#[test]
fn server_answer_releases_submit_guard() {
    let mut editor = filled_vehicle_editor();
    editor.begin_submit().unwrap();
    editor.on_failure("VIN already exists");
    assert!(!editor.submitting);
    assert!(matches!(editor.begin_submit(), Ok(Some(_))));
    editor.on_success();
    assert!(!editor.submitting);
}

#[test]
fn invalid_draft_does_not_arm_submit_guard() {
    let mut editor = Editor::<VehicleDraft>::default();
    editor.open_create();
    assert!(editor.begin_submit().is_err());
    assert!(!editor.submitting);
}
