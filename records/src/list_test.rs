use super::*;

#[test]
fn starts_idle_and_empty() {
    let list = ListState::<u32>::default();
    assert_eq!(list.status, LoadStatus::Idle);
    assert!(list.rows.is_empty());
}

#[test]
fn fetch_then_resolve_loads_rows() {
    let mut list = ListState::default();
    let ticket = list.begin_fetch();
    assert!(list.is_loading());
    assert_eq!(list.resolve(ticket, Ok(vec![1, 2, 3])), Resolution::Applied);
    assert_eq!(list.status, LoadStatus::Loaded);
    assert_eq!(list.rows, vec![1, 2, 3]);
}

#[test]
fn failure_keeps_previous_rows() {
    let mut list = ListState::default();
    let first = list.begin_fetch();
    list.resolve(first, Ok(vec![1]));
    let second = list.begin_fetch();
    assert_eq!(list.rows, vec![1]);
    let outcome = list.resolve(second, Err("Failed to fetch vehicles".to_owned()));
    assert_eq!(outcome, Resolution::Failed("Failed to fetch vehicles".to_owned()));
    assert_eq!(list.rows, vec![1]);
    assert_eq!(list.status, LoadStatus::Failed("Failed to fetch vehicles".to_owned()));
}

#[test]
fn superseded_response_is_discarded() {
    let mut list = ListState::default();
    let old = list.begin_fetch();
    let new = list.begin_fetch();
    assert_eq!(list.resolve(new, Ok(vec!["fresh"])), Resolution::Applied);
    assert_eq!(list.resolve(old, Ok(vec!["stale"])), Resolution::Stale);
    assert_eq!(list.rows, vec!["fresh"]);
    assert_eq!(list.status, LoadStatus::Loaded);
}

#[test]
fn out_of_order_arrival_keeps_newest() {
    let mut list = ListState::default();
    let old = list.begin_fetch();
    let new = list.begin_fetch();
    assert_eq!(list.resolve(old, Err("timeout".to_owned())), Resolution::Stale);
    assert!(list.is_loading());
    list.resolve(new, Ok(vec![7]));
    assert_eq!(list.rows, vec![7]);
}

#[test]
fn reset_invalidates_in_flight_fetch() {
    let mut list = ListState::default();
    let ticket = list.begin_fetch();
    list.reset();
    assert_eq!(list.resolve(ticket, Ok(vec![1])), Resolution::Stale);
    assert!(list.rows.is_empty());
    assert_eq!(list.status, LoadStatus::Idle);
}
