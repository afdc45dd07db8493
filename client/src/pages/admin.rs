//! Admin dashboard: vehicles, users, trips, inspections and service.
//!
//! SYSTEM CONTEXT
//! ==============
//! Gated on the admin role. Each tab renders one collection from the
//! backend; every create, update or delete is followed by a full re-fetch of
//! that collection. The vehicle list is also re-fetched on any filter change.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use records::banner::Banner;
use records::draft::{InspectionDraft, TripDraft, VehicleDraft};
use records::endpoint::VehicleFilter;
use records::entity::{DetailRows, Inspection, Record, Role, Trip, User, Vehicle};
use records::list::ListState;
use records::session::{Gate, SessionState};
use records::view::RecordView;

use crate::components::data_table::DataTable;
use crate::components::detail_dialog::DetailDialog;
use crate::components::editor_dialog::EditorDialog;
use crate::components::error_banner::ErrorBanner;
use crate::components::service_panel::ServicePanel;
use crate::components::tab_bar::TabBar;
use crate::components::toolbar::Toolbar;
use crate::components::user_panel::UserPanel;
use crate::components::vehicle_filter::VehicleFilterBar;
use crate::net::api;
use crate::state::ui::{AdminTab, AdminUi, Detail};
use crate::util::auth::{current_token, install_role_gate};
use crate::util::sync::{load_list, refresh, remove, spawn, submit};

/// Title and rows for the read-only detail dialog.
fn detail_content(detail: &Detail) -> (&'static str, Vec<(&'static str, String)>) {
    match detail {
        Detail::Vehicle(vehicle) => ("Vehicle Details", vehicle.detail_rows()),
        Detail::Inspection(inspection) => ("Inspection Details", inspection.detail_rows()),
    }
}

fn find_row<T: Record + Clone>(rows: &[T], id: i64) -> Option<T> {
    rows.iter().find(|row| row.record_id() == id).cloned()
}

#[component]
pub fn AdminPage(session: RwSignal<SessionState>) -> impl IntoView {
    install_role_gate(session, Role::Admin, use_navigate());

    let banner = RwSignal::new(Banner::default());
    let ui = RwSignal::new(AdminUi::default());
    let filter = RwSignal::new(VehicleFilter::default());
    let vehicles = RwSignal::new(RecordView::<VehicleDraft>::default());
    let users = RwSignal::new(ListState::<User>::default());
    let trips = RwSignal::new(RecordView::<TripDraft>::default());
    let inspections = RwSignal::new(RecordView::<InspectionDraft>::default());

    let fetch_vehicles = move || api::fetch_vehicles(current_token(session), filter.get_untracked());
    let fetch_users = move || api::fetch_users(current_token(session));
    let fetch_trips = move || api::fetch_trips(current_token(session));
    let fetch_inspections = move || api::fetch_inspections(current_token(session));
    let allowed = move || session.with(|s| s.gate(Role::Admin)) == Gate::Allow;

    // Vehicles follow the filter and the session.
    Effect::new(move || {
        filter.track();
        if allowed() {
            refresh(vehicles, banner, fetch_vehicles);
        }
    });

    Effect::new(move || {
        if allowed() {
            load_list(users, banner, fetch_users);
            refresh(trips, banner, fetch_trips);
            refresh(inspections, banner, fetch_inspections);
        } else {
            // Logged out: close dialogs and drop in-flight loads.
            vehicles.try_update(RecordView::reset);
            users.try_update(ListState::reset);
            trips.try_update(RecordView::reset);
            inspections.try_update(RecordView::reset);
            banner.try_update(Banner::dismiss);
        }
    });

    // ---- vehicles ----
    let on_vehicle_submit = Callback::new(move |()| {
        submit(vehicles, banner, move |s| api::save_vehicle(current_token(session), s), fetch_vehicles);
    });
    let on_vehicle_edit = Callback::new(move |v: Vehicle| vehicles.update(|view| view.editor.open_edit(&v)));
    let on_vehicle_delete = Callback::new(move |id: i64| {
        remove(vehicles, banner, move || api::delete_vehicle(current_token(session), id), fetch_vehicles);
    });
    let on_vehicle_view = Callback::new(move |id: i64| {
        if let Some(v) = vehicles.with_untracked(|view| find_row(&view.list.rows, id)) {
            ui.update(|u| u.detail = Some(Detail::Vehicle(v)));
        }
    });

    // ---- users ----
    let on_user_view = Callback::new(move |id: i64| {
        let token = current_token(session);
        spawn(async move {
            match api::fetch_user(token, id).await {
                Ok(user) => {
                    ui.try_update(|u| u.show_user(user));
                }
                Err(message) => {
                    banner.try_update(|b| b.show(message));
                }
            }
        });
    });
    let on_assigned = Callback::new(move |()| {
        load_list(users, banner, fetch_users);
        refresh(vehicles, banner, fetch_vehicles);
    });

    // ---- trips ----
    let on_trip_submit = Callback::new(move |()| {
        submit(trips, banner, move |s| api::save_trip(current_token(session), s), fetch_trips);
    });
    let on_trip_edit = Callback::new(move |t: Trip| trips.update(|view| view.editor.open_edit(&t)));
    let on_trip_delete = Callback::new(move |id: i64| {
        remove(trips, banner, move || api::delete_trip(current_token(session), id), fetch_trips);
    });

    // ---- inspections ----
    let on_inspection_submit = Callback::new(move |()| {
        submit(
            inspections,
            banner,
            move |s| api::save_inspection(current_token(session), s),
            fetch_inspections,
        );
    });
    let on_inspection_edit =
        Callback::new(move |i: Inspection| inspections.update(|view| view.editor.open_edit(&i)));
    let on_inspection_delete = Callback::new(move |id: i64| {
        remove(
            inspections,
            banner,
            move || api::delete_inspection(current_token(session), id),
            fetch_inspections,
        );
    });
    let on_inspection_view = Callback::new(move |id: i64| {
        let token = current_token(session);
        spawn(async move {
            match api::fetch_inspection(token, id).await {
                Ok(inspection) => {
                    ui.try_update(|u| u.detail = Some(Detail::Inspection(inspection)));
                }
                Err(message) => {
                    banner.try_update(|b| b.show(message));
                }
            }
        });
    });

    let on_detail_close = Callback::new(move |()| ui.update(|u| u.detail = None));

    let vehicle_rows = Signal::derive(move || vehicles.with(|v| v.list.rows.clone()));
    let vehicles_loading = Signal::derive(move || vehicles.with(|v| v.list.is_loading()));
    let user_rows = Signal::derive(move || users.with(|l| l.rows.clone()));
    let users_loading = Signal::derive(move || users.with(ListState::is_loading));
    let trip_rows = Signal::derive(move || trips.with(|v| v.list.rows.clone()));
    let trips_loading = Signal::derive(move || trips.with(|v| v.list.is_loading()));
    let inspection_rows = Signal::derive(move || inspections.with(|v| v.list.rows.clone()));
    let inspections_loading = Signal::derive(move || inspections.with(|v| v.list.is_loading()));

    let tab = Memo::new(move |_| ui.with(|u| u.tab));
    let tab_content = move || match tab.get() {
        AdminTab::Vehicles => view! {
            <section class="panel">
                <div class="panel__header">
                    <h2>"Vehicles"</h2>
                    <button class="btn btn--primary" on:click=move |_| vehicles.update(|v| v.editor.open_create())>
                        "Add Vehicle"
                    </button>
                </div>
                <VehicleFilterBar filter=filter/>
                <DataTable
                    rows=vehicle_rows
                    loading=vehicles_loading
                    on_view=on_vehicle_view
                    on_edit=on_vehicle_edit
                    on_delete=on_vehicle_delete
                />
            </section>
        }
        .into_any(),
        AdminTab::Users => view! {
            <div class="panel-group">
            <section class="panel">
                <div class="panel__header">
                    <h2>"Users"</h2>
                    <button class="btn" on:click=move |_| load_list(users, banner, fetch_users)>
                        "Refresh"
                    </button>
                </div>
                <DataTable rows=user_rows loading=users_loading on_view=on_user_view/>
            </section>
            <UserPanel ui=ui banner=banner on_assigned=on_assigned/>
            </div>
        }
        .into_any(),
        AdminTab::Trips => view! {
            <section class="panel">
                <div class="panel__header">
                    <h2>"Trips"</h2>
                    <button class="btn btn--primary" on:click=move |_| trips.update(|v| v.editor.open_create())>
                        "Add Trip"
                    </button>
                </div>
                <DataTable rows=trip_rows loading=trips_loading on_edit=on_trip_edit on_delete=on_trip_delete/>
            </section>
        }
        .into_any(),
        AdminTab::Inspections => view! {
            <section class="panel">
                <div class="panel__header">
                    <h2>"Inspections"</h2>
                    <button
                        class="btn btn--primary"
                        on:click=move |_| inspections.update(|v| v.editor.open_create())
                    >
                        "Add Inspection"
                    </button>
                </div>
                <DataTable
                    rows=inspection_rows
                    loading=inspections_loading
                    on_view=on_inspection_view
                    on_edit=on_inspection_edit
                    on_delete=on_inspection_delete
                />
            </section>
        }
        .into_any(),
        AdminTab::Service => view! { <ServicePanel session=session banner=banner ui=ui/> }.into_any(),
    };

    let detail_dialog = move || {
        ui.with(|u| u.detail.as_ref().map(detail_content)).map(|(title, rows)| {
            view! { <DetailDialog title=title rows=rows on_close=on_detail_close/> }
        })
    };

    view! {
        <Show when=allowed>
            <div class="dashboard">
                <Toolbar session=session title="Admin Dashboard"/>
                <ErrorBanner banner=banner/>
                <TabBar ui=ui/>
                <main class="dashboard__content">{tab_content}</main>
                <EditorDialog view=vehicles noun="Vehicle" on_submit=on_vehicle_submit/>
                <EditorDialog view=trips noun="Trip" on_submit=on_trip_submit/>
                <EditorDialog view=inspections noun="Inspection" on_submit=on_inspection_submit/>
                {detail_dialog}
            </div>
        </Show>
    }
}
