use super::*;
use crate::entity::{FuelType, Trip, TripStatus};

fn trip() -> Trip {
    Trip {
        trip_id: 5,
        vehicle_id: 2,
        user_id: 9,
        start_location: "Durban".to_owned(),
        destination: "Pietermaritzburg".to_owned(),
        purpose: Some("Delivery".to_owned()),
        trip_date: "2024-06-01".to_owned(),
        distance: Some(80.0),
        fuel_consumed: Some(7.5),
        trip_status: Some(TripStatus::Completed),
    }
}

fn vehicle() -> Vehicle {
    Vehicle {
        id: 11,
        vin: "VIN11".to_owned(),
        make: "Nissan".to_owned(),
        model: "NP200".to_owned(),
        year: 2018,
        licence_plate: "ND 44".to_owned(),
        fuel_type: Some(FuelType::Petrol),
        mileage: 64_000,
        last_service_date: "2023-11-20".to_owned(),
        last_service_km: 60_000,
    }
}

// =============================================================
// NumberField
// =============================================================

#[test]
fn blank_number_field_is_none() {
    let field = NumberField::<f64>::blank();
    assert_eq!(field.value(), None);
    assert_eq!(field.text(), "");
}

#[test]
fn number_field_parses_trimmed_text() {
    let mut field = NumberField::<i64>::with_fallback(0);
    field.set_text(" 42 ");
    assert_eq!(field.value(), Some(42));
    assert_eq!(field.text(), " 42 ");
}

#[test]
fn cleared_required_field_falls_back() {
    let mut field = NumberField::seeded(2018);
    field.set_text("");
    assert_eq!(field.value(), Some(2018));
}

#[test]
fn cleared_optional_field_becomes_none() {
    let mut field = NumberField::seeded_optional(Some(12.5));
    assert_eq!(field.text(), "12.5");
    field.set_text("");
    assert_eq!(field.value(), None);
}

#[test]
fn unparsable_text_fails_check() {
    let mut field = NumberField::<i64>::with_fallback(0);
    field.set_text("12km");
    assert_eq!(field.value(), Some(0));
    assert_eq!(
        field.check("Mileage"),
        Err(DraftError::InvalidNumber { field: "Mileage" })
    );
}

// =============================================================
// VehicleDraft
// =============================================================

#[test]
fn new_vehicle_numbers_default_to_zero() {
    let payload = VehicleDraft::default().payload();
    assert_eq!(payload.year, 0);
    assert_eq!(payload.mileage, 0);
    assert_eq!(payload.last_service_km, 0);
    assert_eq!(payload.fuel_type, None);
}

#[test]
fn vehicle_edit_keeps_previous_number_when_cleared() {
    let mut draft = VehicleDraft::default().edit_copy(&vehicle());
    draft.set(VehicleField::Mileage, "").unwrap();
    assert_eq!(draft.payload().mileage, 64_000);
}

#[test]
fn vehicle_fuel_type_rejects_unknown_choice() {
    let mut draft = VehicleDraft::default();
    draft.set(VehicleField::FuelType, "Diesel").unwrap();
    let err = draft.set(VehicleField::FuelType, "Electric").unwrap_err();
    assert!(matches!(err, DraftError::InvalidChoice { .. }));
    assert_eq!(draft.fuel_type, Some(FuelType::Diesel));
}

#[test]
fn vehicle_validate_names_first_missing_field() {
    let mut draft = VehicleDraft::default();
    draft.set(VehicleField::Vin, "VIN1").unwrap();
    assert_eq!(draft.validate(), Err(DraftError::Missing("Make")));
}

#[test]
fn vehicle_text_mirrors_every_field() {
    let draft = VehicleDraft::default().edit_copy(&vehicle());
    for field in VehicleField::ALL {
        assert!(!draft.text(*field).is_empty(), "{} empty", field.label());
    }
    assert!(draft.validate().is_ok());
}

// =============================================================
// TripDraft
// =============================================================

#[test]
fn new_trip_defaults_to_completed() {
    assert_eq!(TripDraft::default().trip_status, Some(TripStatus::Completed));
}

#[test]
fn blank_distance_serializes_as_null() {
    let mut draft = TripDraft::default();
    draft.set(TripField::Destination, "Ballito").unwrap();
    draft.set(TripField::Distance, "").unwrap();
    let json = serde_json::to_value(draft.payload()).unwrap();
    assert!(json["distance"].is_null());
    assert!(json["fuel_consumed"].is_null());
    assert_eq!(json["destination"], "Ballito");
}

#[test]
fn cleared_distance_on_edit_serializes_as_null() {
    let mut draft = TripDraft::default().edit_copy(&trip());
    draft.set(TripField::Distance, "").unwrap();
    let json = serde_json::to_value(draft.payload()).unwrap();
    assert!(json["distance"].is_null());
    assert_eq!(json["fuel_consumed"], 7.5);
}

#[test]
fn empty_purpose_is_omitted_as_null() {
    let json = serde_json::to_value(TripDraft::default().payload()).unwrap();
    assert!(json["purpose"].is_null());
}

#[test]
fn trip_status_can_be_cleared() {
    let mut draft = TripDraft::default();
    draft.set(TripField::Status, "").unwrap();
    assert_eq!(draft.payload().trip_status, None);
    draft.set(TripField::Status, "pending").unwrap();
    assert_eq!(draft.payload().trip_status, Some(TripStatus::Pending));
}

#[test]
fn pinned_owner_cannot_be_changed() {
    let mut draft = TripDraft::for_user(9);
    assert!(draft.is_locked(TripField::UserId));
    assert_eq!(
        draft.set(TripField::UserId, "3"),
        Err(DraftError::Locked("User ID"))
    );
    assert_eq!(draft.payload().user_id, 9);
}

#[test]
fn pinned_owner_survives_edit_copy() {
    let draft = TripDraft::for_user(9).edit_copy(&trip());
    assert!(draft.owner_pinned);
    assert_eq!(draft.text(TripField::UserId), "9");
}

#[test]
fn trip_validate_requires_destination() {
    let mut draft = TripDraft::default();
    draft.set(TripField::StartLocation, "A").unwrap();
    draft.set(TripField::TripDate, "2024-01-01").unwrap();
    assert_eq!(draft.validate(), Err(DraftError::Missing("Destination")));
}

// =============================================================
// InspectionDraft
// =============================================================

#[test]
fn inspection_payload_uses_type_key() {
    let mut draft = InspectionDraft::default();
    draft.set(InspectionField::Kind, "post_trip").unwrap();
    draft.set(InspectionField::VehicleId, "4").unwrap();
    let json = serde_json::to_value(draft.payload()).unwrap();
    assert_eq!(json["type"], "post_trip");
    assert_eq!(json["vehicle_id"], 4);
    assert_eq!(json["status"], "completed");
}

#[test]
fn inspection_rejects_unknown_status() {
    let mut draft = InspectionDraft::default();
    assert!(draft.set(InspectionField::Status, "failed").is_err());
    assert_eq!(draft.status, InspectionStatus::Completed);
}

#[test]
fn select_fields_expose_their_options() {
    let InputKind::Select(options) = InspectionField::Kind.input() else {
        panic!("kind should be a select");
    };
    assert!(options.iter().any(|(value, _)| *value == "pre_trip"));
}

#[test]
fn field_keys_match_payload_json() {
    let json = serde_json::to_value(VehicleDraft::default().payload()).unwrap();
    for field in VehicleField::ALL {
        assert!(json.get(field.key()).is_some(), "{}", field.key());
        assert_eq!(VehicleField::from_key(field.key()), Some(*field));
    }
    let json = serde_json::to_value(TripDraft::default().payload()).unwrap();
    for field in TripField::ALL {
        assert!(json.get(field.key()).is_some(), "{}", field.key());
    }
    let json = serde_json::to_value(InspectionDraft::default().payload()).unwrap();
    for field in InspectionField::ALL {
        assert!(json.get(field.key()).is_some(), "{}", field.key());
    }
    assert_eq!(TripField::from_key("odometer"), None);
}

#[test]
fn non_finite_distance_is_rejected() {
    for text in ["inf", "-infinity", "NaN"] {
        let mut draft = TripDraft::default();
        draft.set(TripField::StartLocation, "A").unwrap();
        draft.set(TripField::Destination, "B").unwrap();
        draft.set(TripField::TripDate, "2024-01-01").unwrap();
        draft.set(TripField::Distance, text).unwrap();
        assert_eq!(
            draft.validate(),
            Err(DraftError::InvalidNumber { field: "Distance (km)" }),
            "{text}"
        );
    }
}

#[test]
fn non_finite_fuel_is_rejected() {
    let mut field = NumberField::<f64>::blank();
    field.set_text("NaN");
    assert_eq!(field.value(), None);
    assert!(field.check("Fuel Consumed").is_err());
}

fn assert_defaults_are_offered<D: Draft>(draft: &D) {
    for field in D::Field::ALL {
        if let InputKind::Select(options) = field.input() {
            let text = draft.text(*field);
            assert!(
                options.iter().any(|(value, _)| *value == text),
                "{} default `{text}` has no option",
                field.label()
            );
        }
    }
}

#[test]
fn default_choices_match_an_option() {
    assert_defaults_are_offered(&VehicleDraft::default());
    assert_defaults_are_offered(&TripDraft::default());
    assert_defaults_are_offered(&InspectionDraft::default());
    assert_defaults_are_offered(&TripDraft::default().edit_copy(&trip()));
    assert_defaults_are_offered(&VehicleDraft::default().edit_copy(&vehicle()));
}

#[test]
fn fuel_type_can_be_cleared() {
    let mut draft = VehicleDraft::default().edit_copy(&vehicle());
    draft.set(VehicleField::FuelType, "").unwrap();
    assert_eq!(draft.payload().fuel_type, None);
}
