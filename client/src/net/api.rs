//! REST API helpers for the fleet backend.
//!
//! Browser (`csr`): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning an error, since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, String>` where the error is already the
//! banner text: the server's `detail` when it sent one, otherwise the call's
//! fallback message. The typed `ApiError` is logged before it is flattened.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use records::draft::{InspectionPayload, TripPayload, VehiclePayload};
use records::editor::Submission;
use records::endpoint::{Endpoint, VehicleFilter};
use records::entity::{
    AssignVehicleRequest, Inspection, LoginRequest, LoginResponse, Notice, Role, Trip, User, UserTrip, Vehicle,
};
use records::session::Session;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

#[cfg(any(test, feature = "csr"))]
fn bearer(endpoint: &Endpoint, token: Option<&str>) -> Option<String> {
    if !endpoint.requires_auth() {
        return None;
    }
    token.map(|t| format!("Bearer {t}"))
}

/// Pick the endpoint for a create or update and serialize its body.
fn route_submission<P: Serialize>(
    submission: &Submission<P>,
    create: Endpoint,
    update: fn(i64) -> Endpoint,
) -> Result<(Endpoint, Value), String> {
    let (endpoint, payload) = match submission {
        Submission::Create(payload) => (create, payload),
        Submission::Update { id, payload } => (update(*id), payload),
    };
    let body = serde_json::to_value(payload).map_err(|e| e.to_string())?;
    Ok((endpoint, body))
}

async fn request<T: DeserializeOwned>(endpoint: Endpoint, token: Option<String>, body: Option<Value>) -> Result<T, String> {
    #[cfg(feature = "csr")]
    {
        let fallback = endpoint.fallback_message();
        send(&endpoint, token.as_deref(), body).await.map_err(|e| {
            log::warn!("{} {} failed: {e}", endpoint.method().as_str(), endpoint.path());
            e.user_message(fallback)
        })
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (endpoint, token, body);
        Err("not available outside the browser".to_owned())
    }
}

#[cfg(feature = "csr")]
async fn send<T: DeserializeOwned>(
    endpoint: &Endpoint,
    token: Option<&str>,
    body: Option<Value>,
) -> Result<T, records::error::ApiError> {
    use gloo_net::http::Request;
    use records::endpoint::Method;
    use records::error::{ApiError, decode_response};

    let url = endpoint.url(crate::util::config::backend_url());
    let mut builder = match endpoint.method() {
        Method::Get => Request::get(&url),
        Method::Post => Request::post(&url),
        Method::Put => Request::put(&url),
        Method::Delete => Request::delete(&url),
    };
    if let Some(auth) = bearer(endpoint, token) {
        builder = builder.header("Authorization", &auth);
    }
    log::debug!("{} {url}", endpoint.method().as_str());
    let resp = match body {
        Some(body) => builder.json(&body).map_err(|e| ApiError::Transport(e.to_string()))?.send().await,
        None => builder.send().await,
    }
    .map_err(|e| ApiError::Transport(e.to_string()))?;
    let status = resp.status();
    let text = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
    decode_response(endpoint, status, &text)
}

async fn save(submission: Result<(Endpoint, Value), String>, token: Option<String>) -> Result<(), String> {
    let (endpoint, body) = submission?;
    request::<Value>(endpoint, token, Some(body)).await.map(drop)
}

// =============================================================
// Session
// =============================================================

/// Log in via `POST /api/login/`.
///
/// # Errors
///
/// Returns the server detail (e.g. bad credentials) or a message when the
/// response lacks a user or token.
pub async fn login(email: String, password: String, role: Role) -> Result<Session, String> {
    let body = serde_json::to_value(LoginRequest { email, password, role }).map_err(|e| e.to_string())?;
    let response: LoginResponse = request(Endpoint::Login, None, Some(body)).await?;
    Session::from_response(response).map_err(|e| e.to_string())
}

// =============================================================
// Vehicles
// =============================================================

/// # Errors
///
/// Returns the banner message on failure.
pub async fn fetch_vehicles(token: Option<String>, filter: VehicleFilter) -> Result<Vec<Vehicle>, String> {
    request(Endpoint::ListVehicles(filter), token, None).await
}

/// # Errors
///
/// Returns the banner message on failure.
pub async fn save_vehicle(token: Option<String>, submission: Submission<VehiclePayload>) -> Result<(), String> {
    save(route_submission(&submission, Endpoint::AddVehicle, Endpoint::UpdateVehicle), token).await
}

/// # Errors
///
/// Returns the banner message on failure.
pub async fn delete_vehicle(token: Option<String>, id: i64) -> Result<(), String> {
    request::<Value>(Endpoint::DeleteVehicle(id), token, None).await.map(drop)
}

/// Vehicle assigned to `email`, fetched via `GET /api/vehicles/assigned`.
///
/// # Errors
///
/// Returns the banner message on failure, including "no vehicle assigned".
pub async fn fetch_assigned_vehicle(email: String) -> Result<Vehicle, String> {
    request(Endpoint::AssignedVehicle { email }, None, None).await
}

/// # Errors
///
/// Returns the banner message on failure.
pub async fn fetch_service_due(token: Option<String>) -> Result<Vec<Vehicle>, String> {
    request(Endpoint::OutOfServiceVehicles, token, None).await
}

/// Ask the backend to e-mail admins about vehicles due for service.
///
/// # Errors
///
/// Returns the banner message on failure.
pub async fn send_maintenance_notification(token: Option<String>) -> Result<String, String> {
    let notice: Notice = request(Endpoint::SendMaintenanceNotification, token, None).await?;
    Ok(notice.message)
}

// =============================================================
// Users
// =============================================================

/// # Errors
///
/// Returns the banner message on failure.
pub async fn fetch_users(token: Option<String>) -> Result<Vec<User>, String> {
    request(Endpoint::ListUsers, token, None).await
}

/// # Errors
///
/// Returns the banner message on failure.
pub async fn fetch_user(token: Option<String>, id: i64) -> Result<User, String> {
    request(Endpoint::GetUser(id), token, None).await
}

/// # Errors
///
/// Returns the banner message on failure.
pub async fn assign_vehicle(email: String, vehicle_id: i64) -> Result<(), String> {
    let body = serde_json::to_value(AssignVehicleRequest { email, vehicle_id }).map_err(|e| e.to_string())?;
    request::<Value>(Endpoint::AssignVehicle, None, Some(body)).await.map(drop)
}

// =============================================================
// Trips
// =============================================================

/// # Errors
///
/// Returns the banner message on failure.
pub async fn fetch_trips(token: Option<String>) -> Result<Vec<Trip>, String> {
    request(Endpoint::ListTrips, token, None).await
}

/// Trips logged by `user_id`, pinned to that owner.
///
/// # Errors
///
/// Returns the banner message on failure.
pub async fn fetch_user_trips(token: Option<String>, user_id: i64) -> Result<Vec<Trip>, String> {
    let rows: Vec<UserTrip> = request(Endpoint::UserTrips(user_id), token, None).await?;
    Ok(rows.iter().map(|row| row.to_trip(user_id)).collect())
}

/// # Errors
///
/// Returns the banner message on failure.
pub async fn save_trip(token: Option<String>, submission: Submission<TripPayload>) -> Result<(), String> {
    save(route_submission(&submission, Endpoint::AddTrip, Endpoint::UpdateTrip), token).await
}

/// # Errors
///
/// Returns the banner message on failure.
pub async fn delete_trip(token: Option<String>, id: i64) -> Result<(), String> {
    request::<Value>(Endpoint::DeleteTrip(id), token, None).await.map(drop)
}

// =============================================================
// Inspections
// =============================================================

/// # Errors
///
/// Returns the banner message on failure.
pub async fn fetch_inspections(token: Option<String>) -> Result<Vec<Inspection>, String> {
    request(Endpoint::ListInspections, token, None).await
}

/// # Errors
///
/// Returns the banner message on failure.
pub async fn fetch_inspection(token: Option<String>, id: i64) -> Result<Inspection, String> {
    request(Endpoint::GetInspection(id), token, None).await
}

/// # Errors
///
/// Returns the banner message on failure.
pub async fn save_inspection(token: Option<String>, submission: Submission<InspectionPayload>) -> Result<(), String> {
    save(route_submission(&submission, Endpoint::AddInspection, Endpoint::UpdateInspection), token).await
}

/// # Errors
///
/// Returns the banner message on failure.
pub async fn delete_inspection(token: Option<String>, id: i64) -> Result<(), String> {
    request::<Value>(Endpoint::DeleteInspection(id), token, None).await.map(drop)
}
