//! Catalogue of backend calls.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every request the web client and the CLI make is named here once, so
//! both front ends agree on method, path, query string, auth requirement and
//! the fallback message shown when the server gives no detail.

#[cfg(test)]
#[path = "endpoint_test.rs"]
mod endpoint_test;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Everything except RFC 3986 unreserved characters.
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// Server-side vehicle filter. Values are sent exactly as typed, empty or not.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VehicleFilter {
    pub make: String,
    pub model: String,
    pub licence_plate: String,
}

impl VehicleFilter {
    fn pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("make", self.make.clone()),
            ("model", self.model.clone()),
            ("licence_plate", self.licence_plate.clone()),
        ]
    }
}

/// One backend call, with whatever identifies its target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Login,
    ListVehicles(VehicleFilter),
    AddVehicle,
    UpdateVehicle(i64),
    DeleteVehicle(i64),
    ListUsers,
    GetUser(i64),
    AssignVehicle,
    ListTrips,
    AddTrip,
    UserTrips(i64),
    UpdateTrip(i64),
    DeleteTrip(i64),
    ListInspections,
    AddInspection,
    GetInspection(i64),
    UpdateInspection(i64),
    DeleteInspection(i64),
    AssignedVehicle { email: String },
    OutOfServiceVehicles,
    SendMaintenanceNotification,
}

impl Endpoint {
    #[must_use]
    pub fn method(&self) -> Method {
        match self {
            Self::Login | Self::AddVehicle | Self::AddTrip | Self::AddInspection | Self::SendMaintenanceNotification => {
                Method::Post
            }
            Self::UpdateVehicle(_) | Self::AssignVehicle | Self::UpdateTrip(_) | Self::UpdateInspection(_) => Method::Put,
            Self::DeleteVehicle(_) | Self::DeleteTrip(_) | Self::DeleteInspection(_) => Method::Delete,
            Self::ListVehicles(_)
            | Self::ListUsers
            | Self::GetUser(_)
            | Self::ListTrips
            | Self::UserTrips(_)
            | Self::ListInspections
            | Self::GetInspection(_)
            | Self::AssignedVehicle { .. }
            | Self::OutOfServiceVehicles => Method::Get,
        }
    }

    /// Path below the base URL, always starting with `/api/`.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Login => "/api/login/".to_owned(),
            Self::ListVehicles(_) => "/api/get_all_vehicles/".to_owned(),
            Self::AddVehicle => "/api/add_vehicle/".to_owned(),
            Self::UpdateVehicle(id) => format!("/api/update_vehicle/{id}"),
            Self::DeleteVehicle(id) => format!("/api/delete_vehicle/{id}"),
            Self::ListUsers => "/api/get_all_users/".to_owned(),
            Self::GetUser(id) => format!("/api/get_user/{id}"),
            Self::AssignVehicle => "/api/assign_vehicle_by_email/".to_owned(),
            Self::ListTrips => "/api/get_all_trips/".to_owned(),
            Self::AddTrip => "/api/add_trip/".to_owned(),
            Self::UserTrips(id) => format!("/api/get_user_trips/{id}"),
            Self::UpdateTrip(id) => format!("/api/update_trip/{id}"),
            Self::DeleteTrip(id) => format!("/api/delete_trip/{id}"),
            Self::ListInspections => "/api/get_all_inspections/".to_owned(),
            Self::AddInspection => "/api/add_inspection/".to_owned(),
            Self::GetInspection(id) => format!("/api/get_inspection/{id}"),
            Self::UpdateInspection(id) => format!("/api/update_inspection/{id}"),
            Self::DeleteInspection(id) => format!("/api/delete_inspection/{id}"),
            Self::AssignedVehicle { .. } => "/api/vehicles/assigned".to_owned(),
            Self::OutOfServiceVehicles => "/api/out_of_service_vehicles/".to_owned(),
            Self::SendMaintenanceNotification => "/api/send_maintenance_notification/".to_owned(),
        }
    }

    /// Query parameters in send order.
    #[must_use]
    pub fn query(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::ListVehicles(filter) => filter.pairs(),
            Self::AssignedVehicle { email } => vec![("email", email.clone())],
            _ => Vec::new(),
        }
    }

    /// Full URL against `base`, e.g. `http://host:8000` or `""` for same-origin.
    #[must_use]
    pub fn url(&self, base: &str) -> String {
        let mut url = format!("{}{}", base.trim_end_matches('/'), self.path());
        let query = self.query();
        if !query.is_empty() {
            let encoded: Vec<String> = query
                .iter()
                .map(|(key, value)| format!("{key}={}", utf8_percent_encode(value, QUERY_ENCODE_SET)))
                .collect();
            url.push('?');
            url.push_str(&encoded.join("&"));
        }
        url
    }

    /// Login and the assignment calls are open; everything else sends the bearer token.
    #[must_use]
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Self::Login | Self::AssignVehicle | Self::AssignedVehicle { .. })
    }

    /// Whole-collection reads. The backend answers these with 404 when empty.
    #[must_use]
    pub fn is_collection(&self) -> bool {
        matches!(
            self,
            Self::ListVehicles(_)
                | Self::ListUsers
                | Self::ListTrips
                | Self::UserTrips(_)
                | Self::ListInspections
                | Self::OutOfServiceVehicles
        )
    }

    /// Banner text when the server supplies no `detail`.
    #[must_use]
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::Login => "Invalid credentials",
            Self::ListVehicles(_) => "Failed to fetch vehicles",
            Self::AddVehicle => "Failed to add vehicle",
            Self::UpdateVehicle(_) => "Failed to update vehicle",
            Self::DeleteVehicle(_) => "Failed to delete vehicle",
            Self::ListUsers => "Failed to fetch users",
            Self::GetUser(_) => "Failed to fetch user details",
            Self::AssignVehicle => "Failed to assign vehicle",
            Self::ListTrips | Self::UserTrips(_) => "Failed to fetch trips",
            Self::AddTrip => "Failed to add trip",
            Self::UpdateTrip(_) => "Failed to update trip",
            Self::DeleteTrip(_) => "Failed to delete trip",
            Self::ListInspections => "Failed to fetch inspections",
            Self::AddInspection => "Failed to add inspection",
            Self::GetInspection(_) => "Failed to fetch inspection details",
            Self::UpdateInspection(_) => "Failed to update inspection",
            Self::DeleteInspection(_) => "Failed to delete inspection",
            Self::AssignedVehicle { .. } => "Failed to fetch assigned vehicle",
            Self::OutOfServiceVehicles => "Failed to fetch vehicles due for service",
            Self::SendMaintenanceNotification => "Failed to send maintenance notification",
        }
    }
}
