use super::*;
use crate::draft::{TripDraft, TripField};
use crate::editor::Submission;
use crate::entity::{Record, Trip, TripStatus};
use crate::list::{LoadStatus, Resolution};

/// In-memory stand-in for the backend's trip table.
#[derive(Default)]
struct Backend {
    trips: Vec<Trip>,
    next_id: i64,
}

impl Backend {
    fn apply(&mut self, submission: Submission<crate::draft::TripPayload>) {
        let (id, p) = match submission {
            Submission::Create(p) => {
                self.next_id += 1;
                (self.next_id, p)
            }
            Submission::Update { id, payload } => (id, payload),
        };
        let trip = Trip {
            trip_id: id,
            vehicle_id: p.vehicle_id,
            user_id: p.user_id,
            start_location: p.start_location,
            destination: p.destination,
            purpose: p.purpose,
            trip_date: p.trip_date,
            distance: p.distance,
            fuel_consumed: p.fuel_consumed,
            trip_status: p.trip_status,
        };
        match self.trips.iter_mut().find(|t| t.trip_id == id) {
            Some(row) => *row = trip,
            None => self.trips.push(trip),
        }
    }

    fn delete(&mut self, id: i64) {
        self.trips.retain(|t| t.record_id() != id);
    }
}

fn create(view: &mut RecordView<TripDraft>, backend: &mut Backend, destination: &str) {
    view.editor.open_create();
    for (field, text) in [
        (TripField::StartLocation, "Depot"),
        (TripField::Destination, destination),
        (TripField::TripDate, "2024-08-08"),
    ] {
        view.editor.set(field, text).unwrap();
    }
    backend.apply(view.editor.submission().unwrap());
    let ticket = view.submit_succeeded();
    view.list.resolve(ticket, Ok(backend.trips.clone()));
}

#[test]
fn create_then_refetch_shows_new_row() {
    let mut view = RecordView::<TripDraft>::default();
    let mut backend = Backend::default();
    create(&mut view, &mut backend, "Knysna");
    assert!(!view.editor.open);
    assert_eq!(view.list.rows.len(), 1);
    assert_eq!(view.list.rows[0].trip_status, Some(TripStatus::Completed));
    assert_eq!(view.list.rows[0].distance, None);
}

#[test]
fn edit_requests_exactly_one_refetch() {
    let mut view = RecordView::<TripDraft>::default();
    let mut backend = Backend::default();
    create(&mut view, &mut backend, "Knysna");
    let row = view.list.rows[0].clone();
    view.editor.open_edit(&row);
    backend.apply(view.editor.submission().unwrap());
    let ticket = view.submit_succeeded();
    assert!(!view.editor.is_editing());
    assert_eq!(view.list.status, LoadStatus::Loading);
    assert_eq!(view.list.resolve(ticket, Ok(backend.trips.clone())), Resolution::Applied);
    assert_eq!(view.list.status, LoadStatus::Loaded);
}

#[test]
fn deleted_row_is_gone_after_refetch() {
    let mut view = RecordView::<TripDraft>::default();
    let mut backend = Backend::default();
    create(&mut view, &mut backend, "Knysna");
    create(&mut view, &mut backend, "Oudtshoorn");
    let doomed = view.list.rows[0].trip_id;
    backend.delete(doomed);
    let ticket = view.delete_succeeded();
    view.list.resolve(ticket, Ok(backend.trips.clone()));
    assert!(view.list.rows.iter().all(|t| t.trip_id != doomed));
    assert_eq!(view.list.rows.len(), 1);
}

#[test]
fn deleting_last_row_leaves_empty_list() {
    let mut view = RecordView::<TripDraft>::default();
    let mut backend = Backend::default();
    create(&mut view, &mut backend, "Knysna");
    backend.delete(view.list.rows[0].trip_id);
    let ticket = view.delete_succeeded();
    view.list.resolve(ticket, Ok(Vec::new()));
    assert!(view.list.rows.is_empty());
}

#[test]
fn second_of_two_edits_is_what_remains() {
    let mut view = RecordView::<TripDraft>::default();
    let mut backend = Backend::default();
    create(&mut view, &mut backend, "Knysna");

    let row = view.list.rows[0].clone();
    view.editor.open_edit(&row);
    view.editor.set(TripField::Destination, "First").unwrap();
    backend.apply(view.editor.submission().unwrap());
    let first = view.submit_succeeded();
    let first_snapshot = backend.trips.clone();

    view.editor.open_edit(&row);
    view.editor.set(TripField::Destination, "Second").unwrap();
    backend.apply(view.editor.submission().unwrap());
    let second = view.submit_succeeded();

    // Second refetch lands before the first one.
    view.list.resolve(second, Ok(backend.trips.clone()));
    assert_eq!(view.list.resolve(first, Ok(first_snapshot)), Resolution::Stale);
    assert_eq!(view.list.rows[0].destination, "Second");
}

#[test]
fn reset_closes_dialog_and_drops_pending_load() {
    let mut view = RecordView::<TripDraft>::default();
    view.editor.open_create();
    let ticket = view.refresh();
    view.reset();
    assert!(!view.editor.open);
    assert_eq!(view.list.resolve(ticket, Ok(Vec::new())), Resolution::Stale);
}

#[test]
fn rebind_swaps_template_and_drops_old_loads() {
    let mut view = RecordView::new(TripDraft::for_user(1));
    let ticket = view.refresh();
    view.rebind(TripDraft::for_user(2));
    assert_eq!(view.list.resolve(ticket, Ok(Vec::new())), Resolution::Stale);
    view.editor.open_create();
    assert_eq!(view.editor.draft, TripDraft::for_user(2));
}

#[test]
fn reset_mid_submit_discards_refetch_and_clears_guard() {
    let mut view = RecordView::<TripDraft>::default();
    let mut backend = Backend::default();
    create(&mut view, &mut backend, "Knysna");
    let row = view.list.rows[0].clone();
    view.editor.open_edit(&row);
    view.editor.begin_submit().unwrap();
    let ticket = view.refresh();
    view.reset();
    assert!(!view.editor.submitting);
    assert!(!view.editor.open);
    assert!(view.list.rows.is_empty());
    assert_eq!(view.list.resolve(ticket, Ok(backend.trips.clone())), Resolution::Stale);
}
