//! Record table with optional per-row view/edit/delete actions.

#[cfg(test)]
#[path = "data_table_test.rs"]
mod data_table_test;

use leptos::prelude::*;
use records::entity::{FuelType, Inspection, Record, Trip, TripStatus, User, Vehicle, or_na};

/// How a record is laid out as a table row.
pub trait TableRow: Record + Clone + Send + Sync + 'static {
    const HEADERS: &'static [&'static str];

    fn cells(&self) -> Vec<String>;

    /// Highlight the row (e.g. service due).
    fn flagged(&self) -> bool {
        false
    }
}

impl TableRow for Vehicle {
    const HEADERS: &'static [&'static str] = &[
        "License Plate",
        "Make",
        "Model",
        "Year",
        "Fuel Type",
        "Mileage",
        "Last Service",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.licence_plate.clone(),
            self.make.clone(),
            self.model.clone(),
            self.year.to_string(),
            or_na(self.fuel_type.map(FuelType::as_str)),
            format!("{} km", self.mileage),
            format!("{} ({} km)", self.last_service_date, self.last_service_km),
        ]
    }

    fn flagged(&self) -> bool {
        self.is_service_due()
    }
}

impl TableRow for Trip {
    const HEADERS: &'static [&'static str] = &[
        "User ID",
        "Vehicle ID",
        "Start",
        "Destination",
        "Purpose",
        "Date",
        "Distance (km)",
        "Fuel (l)",
        "Status",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.user_id.to_string(),
            self.vehicle_id.to_string(),
            self.start_location.clone(),
            self.destination.clone(),
            or_na(self.purpose.as_deref()),
            self.trip_date.clone(),
            or_na(self.distance),
            or_na(self.fuel_consumed),
            or_na(self.trip_status.map(TripStatus::as_str)),
        ]
    }
}

impl TableRow for Inspection {
    const HEADERS: &'static [&'static str] = &["Vehicle ID", "User ID", "Type", "Date", "Signed By", "Status"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.vehicle_id.to_string(),
            self.user_id.to_string(),
            self.kind.as_str().to_owned(),
            self.date.clone(),
            self.signed_by.clone(),
            self.status.as_str().to_owned(),
        ]
    }
}

impl TableRow for User {
    const HEADERS: &'static [&'static str] = &["Name", "Email", "Role", "Vehicle ID"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.email.clone(),
            self.role.as_str().to_owned(),
            or_na(self.vehicle_id),
        ]
    }
}

/// Table over `rows`. Action buttons appear only for the callbacks given.
///
/// Rows are keyed by id and content so an edited row re-renders.
#[component]
pub fn DataTable<T>(
    rows: Signal<Vec<T>>,
    loading: Signal<bool>,
    #[prop(optional)] on_view: Option<Callback<i64>>,
    #[prop(optional)] on_edit: Option<Callback<T>>,
    #[prop(optional)] on_delete: Option<Callback<i64>>,
) -> impl IntoView
where
    T: TableRow,
{
    let has_actions = on_view.is_some() || on_edit.is_some() || on_delete.is_some();
    let columns = T::HEADERS.len() + usize::from(has_actions);

    view! {
        <table class="data-table">
            <thead>
                <tr>
                    {T::HEADERS.iter().map(|h| view! { <th>{*h}</th> }).collect_view()}
                    {has_actions.then(|| view! { <th>"Actions"</th> })}
                </tr>
            </thead>
            <tbody>
                <Show
                    when=move || !rows.with(Vec::is_empty)
                    fallback=move || {
                        view! {
                            <tr>
                                <td class="data-table__empty" colspan=columns>
                                    {move || if loading.get() { "Loading..." } else { "No records" }}
                                </td>
                            </tr>
                        }
                    }
                >
                    <For each=move || rows.get() key=|row| (row.record_id(), row.cells()) let:row>
                        {table_row(row, on_view, on_edit, on_delete)}
                    </For>
                </Show>
            </tbody>
        </table>
    }
}

fn table_row<T: TableRow>(
    row: T,
    on_view: Option<Callback<i64>>,
    on_edit: Option<Callback<T>>,
    on_delete: Option<Callback<i64>>,
) -> impl IntoView {
    let id = row.record_id();
    let class = if row.flagged() { "data-table__row data-table__row--flagged" } else { "data-table__row" };
    let has_actions = on_view.is_some() || on_edit.is_some() || on_delete.is_some();
    let cells = row.cells();

    view! {
        <tr class=class>
            {cells.into_iter().map(|cell| view! { <td>{cell}</td> }).collect_view()}
            {has_actions
                .then(|| {
                    view! {
                        <td class="data-table__actions">
                            {on_view
                                .map(|cb| {
                                    view! {
                                        <button class="btn btn--small" on:click=move |_| cb.run(id)>
                                            "View"
                                        </button>
                                    }
                                })}
                            {on_edit
                                .map(|cb| {
                                    let row = row.clone();
                                    view! {
                                        <button class="btn btn--small" on:click=move |_| cb.run(row.clone())>
                                            "Edit"
                                        </button>
                                    }
                                })}
                            {on_delete
                                .map(|cb| {
                                    view! {
                                        <button
                                            class="btn btn--small btn--danger"
                                            on:click=move |_| cb.run(id)
                                        >
                                            "Delete"
                                        </button>
                                    }
                                })}
                        </td>
                    }
                })}
        </tr>
    }
}
