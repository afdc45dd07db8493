use super::*;

#[test]
fn vehicle_filter_is_sent_verbatim() {
    let filter = VehicleFilter {
        make: "Toyota".to_owned(),
        model: String::new(),
        licence_plate: "CA 12".to_owned(),
    };
    assert_eq!(
        Endpoint::ListVehicles(filter).url("http://fleet:8000"),
        "http://fleet:8000/api/get_all_vehicles/?make=Toyota&model=&licence_plate=CA%2012"
    );
}

#[test]
fn empty_filter_still_sends_every_key() {
    let url = Endpoint::ListVehicles(VehicleFilter::default()).url("");
    assert_eq!(url, "/api/get_all_vehicles/?make=&model=&licence_plate=");
}

#[test]
fn filter_does_not_trim_or_case_fold() {
    let filter = VehicleFilter {
        make: " toyota ".to_owned(),
        ..VehicleFilter::default()
    };
    let url = Endpoint::ListVehicles(filter).url("");
    assert!(url.contains("make=%20toyota%20&"));
}

#[test]
fn assigned_vehicle_encodes_email() {
    let url = Endpoint::AssignedVehicle { email: "a+b@fleet.io".to_owned() }.url("http://h/");
    assert_eq!(url, "http://h/api/vehicles/assigned?email=a%2Bb%40fleet.io");
}

#[test]
fn id_paths_embed_the_record_id() {
    assert_eq!(Endpoint::UpdateVehicle(7).path(), "/api/update_vehicle/7");
    assert_eq!(Endpoint::DeleteTrip(12).path(), "/api/delete_trip/12");
    assert_eq!(Endpoint::GetInspection(3).path(), "/api/get_inspection/3");
    assert_eq!(Endpoint::UserTrips(9).path(), "/api/get_user_trips/9");
}

#[test]
fn methods_follow_the_verb() {
    assert_eq!(Endpoint::Login.method(), Method::Post);
    assert_eq!(Endpoint::AssignVehicle.method(), Method::Put);
    assert_eq!(Endpoint::DeleteInspection(1).method(), Method::Delete);
    assert_eq!(Endpoint::ListUsers.method(), Method::Get);
    assert_eq!(Method::Put.as_str(), "PUT");
}

#[test]
fn only_open_calls_skip_auth() {
    assert!(!Endpoint::Login.requires_auth());
    assert!(!Endpoint::AssignVehicle.requires_auth());
    assert!(!Endpoint::AssignedVehicle { email: String::new() }.requires_auth());
    assert!(Endpoint::ListTrips.requires_auth());
    assert!(Endpoint::SendMaintenanceNotification.requires_auth());
}

#[test]
fn every_path_is_under_api() {
    let all = [
        Endpoint::Login,
        Endpoint::ListVehicles(VehicleFilter::default()),
        Endpoint::AddVehicle,
        Endpoint::ListUsers,
        Endpoint::GetUser(1),
        Endpoint::AssignVehicle,
        Endpoint::ListTrips,
        Endpoint::AddTrip,
        Endpoint::ListInspections,
        Endpoint::AddInspection,
        Endpoint::OutOfServiceVehicles,
        Endpoint::SendMaintenanceNotification,
    ];
    for endpoint in all {
        assert!(endpoint.path().starts_with("/api/"), "{endpoint:?}");
        assert!(!endpoint.fallback_message().is_empty());
    }
}

#[test]
fn collections_are_flagged() {
    assert!(Endpoint::ListInspections.is_collection());
    assert!(Endpoint::UserTrips(1).is_collection());
    assert!(!Endpoint::GetUser(1).is_collection());
    assert!(!Endpoint::AssignedVehicle { email: String::new() }.is_collection());
}
