//! Fleet entities as transmitted over the REST boundary.
//!
//! DESIGN
//! ======
//! The backend owns every record; these are ephemeral client copies. Enum
//! fields are closed sets so an unexpected server string fails decoding
//! instead of leaking into the UI as free text.

#[cfg(test)]
#[path = "entity_test.rs"]
mod entity_test;

use serde::{Deserialize, Serialize};

/// Kilometres allowed between services before a vehicle is flagged.
pub const SERVICE_INTERVAL_KM: i64 = 10_000;

/// A record with a server-assigned integer id.
pub trait Record {
    fn record_id(&self) -> i64;
}

/// Label/value pairs for read-only detail dialogs.
pub trait DetailRows {
    fn detail_rows(&self) -> Vec<(&'static str, String)>;
}

/// Fuel a vehicle runs on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FuelType {
    Petrol,
    Diesel,
}

impl FuelType {
    pub const ALL: [Self; 2] = [Self::Petrol, Self::Diesel];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Petrol => "Petrol",
            Self::Diesel => "Diesel",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == raw)
    }
}

/// Lifecycle state of a trip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripStatus {
    Completed,
    Cancelled,
    Pending,
}

impl TripStatus {
    pub const ALL: [Self; 3] = [Self::Completed, Self::Cancelled, Self::Pending];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::Pending => "pending",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == raw)
    }
}

/// Whether an inspection happens before or after a trip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InspectionKind {
    PreTrip,
    PostTrip,
}

impl InspectionKind {
    pub const ALL: [Self; 2] = [Self::PreTrip, Self::PostTrip];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PreTrip => "pre_trip",
            Self::PostTrip => "post_trip",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == raw)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InspectionStatus {
    Completed,
    Pending,
}

impl InspectionStatus {
    pub const ALL: [Self; 2] = [Self::Completed, Self::Pending];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Pending => "pending",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == raw)
    }
}

/// Account role; selects which dashboard a session may open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    Employee,
}

impl Role {
    pub const ALL: [Self; 2] = [Self::Admin, Self::Employee];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Employee => "employee",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == raw)
    }
}

/// A fleet vehicle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: i64,
    pub vin: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub licence_plate: String,
    #[serde(default)]
    pub fuel_type: Option<FuelType>,
    #[serde(default)]
    pub mileage: i64,
    /// `YYYY-MM-DD`.
    pub last_service_date: String,
    pub last_service_km: i64,
}

impl Vehicle {
    /// True once the odometer has run a full service interval past the last service.
    #[must_use]
    pub fn is_service_due(&self) -> bool {
        self.mileage >= self.last_service_km.saturating_add(SERVICE_INTERVAL_KM)
    }
}

impl Record for Vehicle {
    fn record_id(&self) -> i64 {
        self.id
    }
}

impl DetailRows for Vehicle {
    fn detail_rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("License Plate", self.licence_plate.clone()),
            ("VIN", self.vin.clone()),
            ("Make", self.make.clone()),
            ("Model", self.model.clone()),
            ("Year", self.year.to_string()),
            ("Fuel Type", self.fuel_type.map_or_else(na, |f| f.as_str().to_owned())),
            ("Mileage", format!("{} km", self.mileage)),
            ("Last Service Date", self.last_service_date.clone()),
            ("Last Service KM", self.last_service_km.to_string()),
        ]
    }
}

/// A logged trip.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub trip_id: i64,
    pub vehicle_id: i64,
    pub user_id: i64,
    pub start_location: String,
    pub destination: String,
    #[serde(default)]
    pub purpose: Option<String>,
    pub trip_date: String,
    #[serde(default)]
    pub distance: Option<f64>,
    #[serde(default)]
    pub fuel_consumed: Option<f64>,
    #[serde(default)]
    pub trip_status: Option<TripStatus>,
}

impl Record for Trip {
    fn record_id(&self) -> i64 {
        self.trip_id
    }
}

/// A trip joined with its vehicle, as listed for a single employee.
///
/// The per-user listing omits `user_id`; callers pin it from the session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserTrip {
    pub trip_id: i64,
    pub start_location: String,
    pub destination: String,
    #[serde(default)]
    pub purpose: Option<String>,
    pub trip_date: String,
    #[serde(default)]
    pub distance: Option<f64>,
    #[serde(default)]
    pub fuel_consumed: Option<f64>,
    #[serde(default)]
    pub trip_status: Option<TripStatus>,
    pub vehicle_id: i64,
    #[serde(default)]
    pub vehicle_vin: String,
    #[serde(default)]
    pub vehicle_make: String,
    #[serde(default)]
    pub vehicle_model: String,
}

impl UserTrip {
    /// Project onto the plain trip shape for the given owner.
    #[must_use]
    pub fn to_trip(&self, user_id: i64) -> Trip {
        Trip {
            trip_id: self.trip_id,
            vehicle_id: self.vehicle_id,
            user_id,
            start_location: self.start_location.clone(),
            destination: self.destination.clone(),
            purpose: self.purpose.clone(),
            trip_date: self.trip_date.clone(),
            distance: self.distance,
            fuel_consumed: self.fuel_consumed,
            trip_status: self.trip_status,
        }
    }
}

impl Record for UserTrip {
    fn record_id(&self) -> i64 {
        self.trip_id
    }
}

/// A pre- or post-trip vehicle inspection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Inspection {
    pub inspection_id: i64,
    pub vehicle_id: i64,
    pub user_id: i64,
    #[serde(rename = "type")]
    pub kind: InspectionKind,
    pub date: String,
    pub signed_by: String,
    pub status: InspectionStatus,
}

impl Record for Inspection {
    fn record_id(&self) -> i64 {
        self.inspection_id
    }
}

impl DetailRows for Inspection {
    fn detail_rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Vehicle ID", self.vehicle_id.to_string()),
            ("User ID", self.user_id.to_string()),
            ("Type", self.kind.as_str().to_owned()),
            ("Date", self.date.clone()),
            ("Signed By", self.signed_by.clone()),
            ("Status", self.status.as_str().to_owned()),
        ]
    }
}

/// An account known to the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub user_id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub vehicle_id: Option<i64>,
}

impl Record for User {
    fn record_id(&self) -> i64 {
        self.user_id
    }
}

impl DetailRows for User {
    fn detail_rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Name", self.name.clone()),
            ("Email", self.email.clone()),
            ("Role", self.role.as_str().to_owned()),
            ("Vehicle ID", self.vehicle_id.map_or_else(na, |id| id.to_string())),
        ]
    }
}

/// Body of `POST /api/login/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Response of `POST /api/login/`. Both halves must be present to open a session.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub token: Option<String>,
}

/// Body of `PUT /api/assign_vehicle_by_email/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssignVehicleRequest {
    pub email: String,
    pub vehicle_id: i64,
}

/// Acknowledgement returned by message-only endpoints.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    #[serde(default)]
    pub message: String,
}

/// Render an optional cell the way the tables show missing values.
#[must_use]
pub fn or_na<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(na, |v| v.to_string())
}

fn na() -> String {
    "N/A".to_owned()
}
