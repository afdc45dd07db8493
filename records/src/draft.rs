//! Typed form drafts for vehicles, trips and inspections.
//!
//! DESIGN
//! ======
//! Each entity gets its own draft type. Free-text inputs stay `String`;
//! numeric inputs are [`NumberField`]s that parse on every keystroke, so the
//! submitted payload is built from already-typed values. Optional numerics
//! left blank stay `None` and serialize as JSON `null`.
//!
//! Required numerics carry a fallback: `0` for a fresh draft, the record's
//! current value for an edit copy. Optional numerics have no fallback.

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::entity::{FuelType, Inspection, InspectionKind, InspectionStatus, Record, Trip, TripStatus, Vehicle};

/// Why a draft field or a whole draft was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{field} must be a number")]
    InvalidNumber { field: &'static str },
    #[error("{value:?} is not a valid {field}")]
    InvalidChoice { field: &'static str, value: String },
    #[error("{0} cannot be changed")]
    Locked(&'static str),
}

/// How a field is rendered in a form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    Text,
    /// Whole numbers.
    Integer,
    /// Fractional numbers (step 0.1).
    Decimal,
    /// `YYYY-MM-DD` date picker.
    Date,
    /// Fixed `(value, label)` options. An empty value means "none".
    Select(&'static [(&'static str, &'static str)]),
}

/// Static description of one form field.
pub trait FormField: Copy + Eq + Send + Sync + 'static {
    /// Every field, in display order.
    const ALL: &'static [Self];

    fn label(self) -> &'static str;

    /// Wire name of the field in the request body.
    fn key(self) -> &'static str;

    fn input(self) -> InputKind;

    /// Inverse of [`FormField::key`].
    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.key() == key)
    }

    /// Marks the field `required` in the form; blank text blocks submission.
    fn required(self) -> bool {
        false
    }
}

/// A client-held, mutable copy of a record being created or edited.
pub trait Draft: Clone + Send + Sync + 'static {
    type Record: Record + Clone + Send + Sync + 'static;
    type Field: FormField;
    type Payload: Serialize + Clone + Send + Sync + 'static;

    /// Build an edit copy of `record`. `self` is the blank template, so
    /// context such as a pinned owner carries over.
    fn edit_copy(&self, record: &Self::Record) -> Self;

    /// Replace one field from raw input text.
    ///
    /// # Errors
    ///
    /// Returns an error when a choice field receives an unknown value or a
    /// locked field is written. The draft is left unchanged in that case.
    fn set(&mut self, field: Self::Field, text: &str) -> Result<(), DraftError>;

    /// Current input text for `field`.
    fn text(&self, field: Self::Field) -> String;

    fn is_locked(&self, _field: Self::Field) -> bool {
        false
    }

    /// Check required text and numeric syntax before submission.
    ///
    /// # Errors
    ///
    /// Returns the first problem found, in field order.
    fn validate(&self) -> Result<(), DraftError>;

    fn payload(&self) -> Self::Payload;
}

/// Numbers a form can hold. Floats must also be finite.
pub trait FormNumber: FromStr + Display + Copy {
    fn is_finite(self) -> bool {
        true
    }
}

impl FormNumber for i32 {}

impl FormNumber for i64 {}

impl FormNumber for f64 {
    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }
}

/// Text-backed numeric input parsed at the form boundary.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NumberField<T> {
    text: String,
    parsed: Option<T>,
    fallback: Option<T>,
}

impl<T: FormNumber> NumberField<T> {
    /// Empty optional input: blank means `None`.
    #[must_use]
    pub fn blank() -> Self {
        Self { text: String::new(), parsed: None, fallback: None }
    }

    /// Empty required input that resolves to `fallback` until typed into.
    #[must_use]
    pub fn with_fallback(fallback: T) -> Self {
        Self { text: String::new(), parsed: None, fallback: Some(fallback) }
    }

    /// Required input showing `value`; clearing it keeps `value`.
    #[must_use]
    pub fn seeded(value: T) -> Self {
        Self { text: value.to_string(), parsed: Some(value), fallback: Some(value) }
    }

    /// Optional input showing `value` if present; clearing it yields `None`.
    #[must_use]
    pub fn seeded_optional(value: Option<T>) -> Self {
        Self {
            text: value.map(|v| v.to_string()).unwrap_or_default(),
            parsed: value,
            fallback: None,
        }
    }

    pub fn set_text(&mut self, text: &str) {
        text.clone_into(&mut self.text);
        self.parsed = text.trim().parse().ok().filter(|v: &T| v.is_finite());
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Parsed input, else the fallback.
    #[must_use]
    pub fn value(&self) -> Option<T> {
        self.parsed.or(self.fallback)
    }

    /// Non-blank text must parse.
    fn check(&self, field: &'static str) -> Result<(), DraftError> {
        if !self.text.trim().is_empty() && self.parsed.is_none() {
            return Err(DraftError::InvalidNumber { field });
        }
        Ok(())
    }
}

fn require(field: &'static str, value: &str) -> Result<(), DraftError> {
    if value.trim().is_empty() {
        return Err(DraftError::Missing(field));
    }
    Ok(())
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() { None } else { Some(value.to_owned()) }
}

fn choice<T>(field: &'static str, text: &str, parse: impl Fn(&str) -> Option<T>) -> Result<T, DraftError> {
    parse(text).ok_or_else(|| DraftError::InvalidChoice { field, value: text.to_owned() })
}

// =============================================================
// Vehicle
// =============================================================

const FUEL_OPTIONS: &[(&str, &str)] = &[("", "None"), ("Petrol", "Petrol"), ("Diesel", "Diesel")];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VehicleField {
    Vin,
    Make,
    Model,
    Year,
    LicencePlate,
    FuelType,
    Mileage,
    LastServiceDate,
    LastServiceKm,
}

impl FormField for VehicleField {
    const ALL: &'static [Self] = &[
        Self::Vin,
        Self::Make,
        Self::Model,
        Self::Year,
        Self::LicencePlate,
        Self::FuelType,
        Self::Mileage,
        Self::LastServiceDate,
        Self::LastServiceKm,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Vin => "VIN",
            Self::Make => "Make",
            Self::Model => "Model",
            Self::Year => "Year",
            Self::LicencePlate => "License Plate",
            Self::FuelType => "Fuel Type",
            Self::Mileage => "Mileage",
            Self::LastServiceDate => "Last Service Date",
            Self::LastServiceKm => "Last Service KM",
        }
    }

    fn key(self) -> &'static str {
        match self {
            Self::Vin => "vin",
            Self::Make => "make",
            Self::Model => "model",
            Self::Year => "year",
            Self::LicencePlate => "licence_plate",
            Self::FuelType => "fuel_type",
            Self::Mileage => "mileage",
            Self::LastServiceDate => "last_service_date",
            Self::LastServiceKm => "last_service_km",
        }
    }

    fn input(self) -> InputKind {
        match self {
            Self::Year | Self::Mileage | Self::LastServiceKm => InputKind::Integer,
            Self::FuelType => InputKind::Select(FUEL_OPTIONS),
            Self::LastServiceDate => InputKind::Date,
            Self::Vin | Self::Make | Self::Model | Self::LicencePlate => InputKind::Text,
        }
    }

    fn required(self) -> bool {
        matches!(
            self,
            Self::Vin | Self::Make | Self::Model | Self::LicencePlate | Self::LastServiceDate
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct VehicleDraft {
    pub vin: String,
    pub make: String,
    pub model: String,
    pub year: NumberField<i32>,
    pub licence_plate: String,
    pub fuel_type: Option<FuelType>,
    pub mileage: NumberField<i64>,
    pub last_service_date: String,
    pub last_service_km: NumberField<i64>,
}

impl Default for VehicleDraft {
    fn default() -> Self {
        Self {
            vin: String::new(),
            make: String::new(),
            model: String::new(),
            year: NumberField::with_fallback(0),
            licence_plate: String::new(),
            fuel_type: None,
            mileage: NumberField::with_fallback(0),
            last_service_date: String::new(),
            last_service_km: NumberField::with_fallback(0),
        }
    }
}

/// Body of `add_vehicle` / `update_vehicle`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VehiclePayload {
    pub vin: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub licence_plate: String,
    pub fuel_type: Option<FuelType>,
    pub mileage: i64,
    pub last_service_date: String,
    pub last_service_km: i64,
}

impl Draft for VehicleDraft {
    type Record = Vehicle;
    type Field = VehicleField;
    type Payload = VehiclePayload;

    fn edit_copy(&self, v: &Vehicle) -> Self {
        Self {
            vin: v.vin.clone(),
            make: v.make.clone(),
            model: v.model.clone(),
            year: NumberField::seeded(v.year),
            licence_plate: v.licence_plate.clone(),
            fuel_type: v.fuel_type,
            mileage: NumberField::seeded(v.mileage),
            last_service_date: v.last_service_date.clone(),
            last_service_km: NumberField::seeded(v.last_service_km),
        }
    }

    fn set(&mut self, field: VehicleField, text: &str) -> Result<(), DraftError> {
        match field {
            VehicleField::Vin => text.clone_into(&mut self.vin),
            VehicleField::Make => text.clone_into(&mut self.make),
            VehicleField::Model => text.clone_into(&mut self.model),
            VehicleField::Year => self.year.set_text(text),
            VehicleField::LicencePlate => text.clone_into(&mut self.licence_plate),
            VehicleField::FuelType => {
                self.fuel_type = if text.is_empty() {
                    None
                } else {
                    Some(choice(field.label(), text, FuelType::parse)?)
                };
            }
            VehicleField::Mileage => self.mileage.set_text(text),
            VehicleField::LastServiceDate => text.clone_into(&mut self.last_service_date),
            VehicleField::LastServiceKm => self.last_service_km.set_text(text),
        }
        Ok(())
    }

    fn text(&self, field: VehicleField) -> String {
        match field {
            VehicleField::Vin => self.vin.clone(),
            VehicleField::Make => self.make.clone(),
            VehicleField::Model => self.model.clone(),
            VehicleField::Year => self.year.text().to_owned(),
            VehicleField::LicencePlate => self.licence_plate.clone(),
            VehicleField::FuelType => self.fuel_type.map(FuelType::as_str).unwrap_or_default().to_owned(),
            VehicleField::Mileage => self.mileage.text().to_owned(),
            VehicleField::LastServiceDate => self.last_service_date.clone(),
            VehicleField::LastServiceKm => self.last_service_km.text().to_owned(),
        }
    }

    fn validate(&self) -> Result<(), DraftError> {
        require(VehicleField::Vin.label(), &self.vin)?;
        require(VehicleField::Make.label(), &self.make)?;
        require(VehicleField::Model.label(), &self.model)?;
        self.year.check(VehicleField::Year.label())?;
        require(VehicleField::LicencePlate.label(), &self.licence_plate)?;
        self.mileage.check(VehicleField::Mileage.label())?;
        require(VehicleField::LastServiceDate.label(), &self.last_service_date)?;
        self.last_service_km.check(VehicleField::LastServiceKm.label())
    }

    fn payload(&self) -> VehiclePayload {
        VehiclePayload {
            vin: self.vin.clone(),
            make: self.make.clone(),
            model: self.model.clone(),
            year: self.year.value().unwrap_or_default(),
            licence_plate: self.licence_plate.clone(),
            fuel_type: self.fuel_type,
            mileage: self.mileage.value().unwrap_or_default(),
            last_service_date: self.last_service_date.clone(),
            last_service_km: self.last_service_km.value().unwrap_or_default(),
        }
    }
}

// =============================================================
// Trip
// =============================================================

const TRIP_STATUS_OPTIONS: &[(&str, &str)] = &[
    ("completed", "Completed"),
    ("cancelled", "Cancelled"),
    ("pending", "Pending"),
    ("", "None"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TripField {
    UserId,
    VehicleId,
    StartLocation,
    Destination,
    Purpose,
    TripDate,
    Distance,
    FuelConsumed,
    Status,
}

impl FormField for TripField {
    const ALL: &'static [Self] = &[
        Self::UserId,
        Self::VehicleId,
        Self::StartLocation,
        Self::Destination,
        Self::Purpose,
        Self::TripDate,
        Self::Distance,
        Self::FuelConsumed,
        Self::Status,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::UserId => "User ID",
            Self::VehicleId => "Vehicle ID",
            Self::StartLocation => "Start Location",
            Self::Destination => "Destination",
            Self::Purpose => "Purpose",
            Self::TripDate => "Trip Date",
            Self::Distance => "Distance (km)",
            Self::FuelConsumed => "Fuel Consumed (liters)",
            Self::Status => "Status",
        }
    }

    fn key(self) -> &'static str {
        match self {
            Self::UserId => "user_id",
            Self::VehicleId => "vehicle_id",
            Self::StartLocation => "start_location",
            Self::Destination => "destination",
            Self::Purpose => "purpose",
            Self::TripDate => "trip_date",
            Self::Distance => "distance",
            Self::FuelConsumed => "fuel_consumed",
            Self::Status => "trip_status",
        }
    }

    fn input(self) -> InputKind {
        match self {
            Self::UserId | Self::VehicleId => InputKind::Integer,
            Self::Distance | Self::FuelConsumed => InputKind::Decimal,
            Self::TripDate => InputKind::Date,
            Self::Status => InputKind::Select(TRIP_STATUS_OPTIONS),
            Self::StartLocation | Self::Destination | Self::Purpose => InputKind::Text,
        }
    }

    fn required(self) -> bool {
        matches!(self, Self::StartLocation | Self::Destination | Self::TripDate)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TripDraft {
    pub vehicle_id: NumberField<i64>,
    pub user_id: NumberField<i64>,
    /// Set for employee drafts; the owner comes from the session.
    pub owner_pinned: bool,
    pub start_location: String,
    pub destination: String,
    pub purpose: String,
    pub trip_date: String,
    pub distance: NumberField<f64>,
    pub fuel_consumed: NumberField<f64>,
    pub trip_status: Option<TripStatus>,
}

impl Default for TripDraft {
    fn default() -> Self {
        Self {
            vehicle_id: NumberField::with_fallback(0),
            user_id: NumberField::with_fallback(0),
            owner_pinned: false,
            start_location: String::new(),
            destination: String::new(),
            purpose: String::new(),
            trip_date: String::new(),
            distance: NumberField::blank(),
            fuel_consumed: NumberField::blank(),
            trip_status: Some(TripStatus::Completed),
        }
    }
}

impl TripDraft {
    /// Blank draft owned by `user_id`, who cannot be changed in the form.
    #[must_use]
    pub fn for_user(user_id: i64) -> Self {
        Self {
            user_id: NumberField::seeded(user_id),
            owner_pinned: true,
            ..Self::default()
        }
    }
}

/// Body of `add_trip` / `update_trip`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TripPayload {
    pub vehicle_id: i64,
    pub user_id: i64,
    pub start_location: String,
    pub destination: String,
    pub purpose: Option<String>,
    pub trip_date: String,
    pub distance: Option<f64>,
    pub fuel_consumed: Option<f64>,
    pub trip_status: Option<TripStatus>,
}

impl Draft for TripDraft {
    type Record = Trip;
    type Field = TripField;
    type Payload = TripPayload;

    fn edit_copy(&self, t: &Trip) -> Self {
        Self {
            vehicle_id: NumberField::seeded(t.vehicle_id),
            user_id: NumberField::seeded(t.user_id),
            owner_pinned: self.owner_pinned,
            start_location: t.start_location.clone(),
            destination: t.destination.clone(),
            purpose: t.purpose.clone().unwrap_or_default(),
            trip_date: t.trip_date.clone(),
            distance: NumberField::seeded_optional(t.distance),
            fuel_consumed: NumberField::seeded_optional(t.fuel_consumed),
            trip_status: t.trip_status,
        }
    }

    fn set(&mut self, field: TripField, text: &str) -> Result<(), DraftError> {
        match field {
            TripField::UserId => {
                if self.owner_pinned {
                    return Err(DraftError::Locked(field.label()));
                }
                self.user_id.set_text(text);
            }
            TripField::VehicleId => self.vehicle_id.set_text(text),
            TripField::StartLocation => text.clone_into(&mut self.start_location),
            TripField::Destination => text.clone_into(&mut self.destination),
            TripField::Purpose => text.clone_into(&mut self.purpose),
            TripField::TripDate => text.clone_into(&mut self.trip_date),
            TripField::Distance => self.distance.set_text(text),
            TripField::FuelConsumed => self.fuel_consumed.set_text(text),
            TripField::Status => {
                self.trip_status = if text.is_empty() {
                    None
                } else {
                    Some(choice(field.label(), text, TripStatus::parse)?)
                };
            }
        }
        Ok(())
    }

    fn text(&self, field: TripField) -> String {
        match field {
            TripField::UserId => self.user_id.text().to_owned(),
            TripField::VehicleId => self.vehicle_id.text().to_owned(),
            TripField::StartLocation => self.start_location.clone(),
            TripField::Destination => self.destination.clone(),
            TripField::Purpose => self.purpose.clone(),
            TripField::TripDate => self.trip_date.clone(),
            TripField::Distance => self.distance.text().to_owned(),
            TripField::FuelConsumed => self.fuel_consumed.text().to_owned(),
            TripField::Status => self.trip_status.map(TripStatus::as_str).unwrap_or_default().to_owned(),
        }
    }

    fn is_locked(&self, field: TripField) -> bool {
        self.owner_pinned && field == TripField::UserId
    }

    fn validate(&self) -> Result<(), DraftError> {
        self.user_id.check(TripField::UserId.label())?;
        self.vehicle_id.check(TripField::VehicleId.label())?;
        require(TripField::StartLocation.label(), &self.start_location)?;
        require(TripField::Destination.label(), &self.destination)?;
        require(TripField::TripDate.label(), &self.trip_date)?;
        self.distance.check(TripField::Distance.label())?;
        self.fuel_consumed.check(TripField::FuelConsumed.label())
    }

    fn payload(&self) -> TripPayload {
        TripPayload {
            vehicle_id: self.vehicle_id.value().unwrap_or_default(),
            user_id: self.user_id.value().unwrap_or_default(),
            start_location: self.start_location.clone(),
            destination: self.destination.clone(),
            purpose: non_empty(&self.purpose),
            trip_date: self.trip_date.clone(),
            distance: self.distance.value(),
            fuel_consumed: self.fuel_consumed.value(),
            trip_status: self.trip_status,
        }
    }
}

// =============================================================
// Inspection
// =============================================================

const INSPECTION_KIND_OPTIONS: &[(&str, &str)] = &[("pre_trip", "Pre-Trip"), ("post_trip", "Post-Trip")];
const INSPECTION_STATUS_OPTIONS: &[(&str, &str)] = &[("completed", "Completed"), ("pending", "Pending")];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InspectionField {
    VehicleId,
    UserId,
    Kind,
    Date,
    SignedBy,
    Status,
}

impl FormField for InspectionField {
    const ALL: &'static [Self] = &[
        Self::VehicleId,
        Self::UserId,
        Self::Kind,
        Self::Date,
        Self::SignedBy,
        Self::Status,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::VehicleId => "Vehicle ID",
            Self::UserId => "User ID",
            Self::Kind => "Type",
            Self::Date => "Date",
            Self::SignedBy => "Signed By",
            Self::Status => "Status",
        }
    }

    fn key(self) -> &'static str {
        match self {
            Self::VehicleId => "vehicle_id",
            Self::UserId => "user_id",
            Self::Kind => "type",
            Self::Date => "date",
            Self::SignedBy => "signed_by",
            Self::Status => "status",
        }
    }

    fn input(self) -> InputKind {
        match self {
            Self::VehicleId | Self::UserId => InputKind::Integer,
            Self::Kind => InputKind::Select(INSPECTION_KIND_OPTIONS),
            Self::Date => InputKind::Date,
            Self::SignedBy => InputKind::Text,
            Self::Status => InputKind::Select(INSPECTION_STATUS_OPTIONS),
        }
    }

    fn required(self) -> bool {
        matches!(self, Self::Date | Self::SignedBy)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct InspectionDraft {
    pub vehicle_id: NumberField<i64>,
    pub user_id: NumberField<i64>,
    pub kind: InspectionKind,
    pub date: String,
    pub signed_by: String,
    pub status: InspectionStatus,
}

impl Default for InspectionDraft {
    fn default() -> Self {
        Self {
            vehicle_id: NumberField::with_fallback(0),
            user_id: NumberField::with_fallback(0),
            kind: InspectionKind::PreTrip,
            date: String::new(),
            signed_by: String::new(),
            status: InspectionStatus::Completed,
        }
    }
}

/// Body of `add_inspection` / `update_inspection`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InspectionPayload {
    pub vehicle_id: i64,
    pub user_id: i64,
    #[serde(rename = "type")]
    pub kind: InspectionKind,
    pub date: String,
    pub signed_by: String,
    pub status: InspectionStatus,
}

impl Draft for InspectionDraft {
    type Record = Inspection;
    type Field = InspectionField;
    type Payload = InspectionPayload;

    fn edit_copy(&self, i: &Inspection) -> Self {
        Self {
            vehicle_id: NumberField::seeded(i.vehicle_id),
            user_id: NumberField::seeded(i.user_id),
            kind: i.kind,
            date: i.date.clone(),
            signed_by: i.signed_by.clone(),
            status: i.status,
        }
    }

    fn set(&mut self, field: InspectionField, text: &str) -> Result<(), DraftError> {
        match field {
            InspectionField::VehicleId => self.vehicle_id.set_text(text),
            InspectionField::UserId => self.user_id.set_text(text),
            InspectionField::Kind => self.kind = choice(field.label(), text, InspectionKind::parse)?,
            InspectionField::Date => text.clone_into(&mut self.date),
            InspectionField::SignedBy => text.clone_into(&mut self.signed_by),
            InspectionField::Status => self.status = choice(field.label(), text, InspectionStatus::parse)?,
        }
        Ok(())
    }

    fn text(&self, field: InspectionField) -> String {
        match field {
            InspectionField::VehicleId => self.vehicle_id.text().to_owned(),
            InspectionField::UserId => self.user_id.text().to_owned(),
            InspectionField::Kind => self.kind.as_str().to_owned(),
            InspectionField::Date => self.date.clone(),
            InspectionField::SignedBy => self.signed_by.clone(),
            InspectionField::Status => self.status.as_str().to_owned(),
        }
    }

    fn validate(&self) -> Result<(), DraftError> {
        self.vehicle_id.check(InspectionField::VehicleId.label())?;
        self.user_id.check(InspectionField::UserId.label())?;
        require(InspectionField::Date.label(), &self.date)?;
        require(InspectionField::SignedBy.label(), &self.signed_by)
    }

    fn payload(&self) -> InspectionPayload {
        InspectionPayload {
            vehicle_id: self.vehicle_id.value().unwrap_or_default(),
            user_id: self.user_id.value().unwrap_or_default(),
            kind: self.kind,
            date: self.date.clone(),
            signed_by: self.signed_by.clone(),
            status: self.status,
        }
    }
}
