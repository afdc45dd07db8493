//! Employee dashboard: assigned vehicle and the employee's own trips.
//!
//! SYSTEM CONTEXT
//! ==============
//! Gated on the employee role. Trip drafts are pinned to the session user so
//! an employee can only log trips for themselves.

#[cfg(test)]
#[path = "employee_test.rs"]
mod employee_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use records::banner::Banner;
use records::draft::TripDraft;
use records::entity::{DetailRows, Role, Trip, User};
use records::session::{Gate, SessionState};
use records::view::RecordView;

use crate::components::data_table::DataTable;
use crate::components::detail_dialog::DetailDialog;
use crate::components::editor_dialog::EditorDialog;
use crate::components::error_banner::ErrorBanner;
use crate::components::toolbar::Toolbar;
use crate::net::api;
use crate::state::ui::EmployeeUi;
use crate::util::auth::{current_token, install_role_gate};
use crate::util::sync::{refresh, remove, spawn, submit};

/// Blank trip draft for `user`, or an unpinned one before login resolves.
fn trip_template(user: Option<&User>) -> TripDraft {
    user.map_or_else(TripDraft::default, |u| TripDraft::for_user(u.user_id))
}

#[component]
pub fn EmployeePage(session: RwSignal<SessionState>) -> impl IntoView {
    install_role_gate(session, Role::Employee, use_navigate());

    let banner = RwSignal::new(Banner::default());
    let ui = RwSignal::new(EmployeeUi::default());
    let trips = RwSignal::new(RecordView::new(session.with_untracked(|s| trip_template(s.user()))));

    let user_id = move || session.with_untracked(|s| s.user().map(|u| u.user_id)).unwrap_or_default();
    let fetch_trips = move || api::fetch_user_trips(current_token(session), user_id());
    let allowed = move || session.with(|s| s.gate(Role::Employee)) == Gate::Allow;

    let load_assigned = move || {
        let Some(email) = session.with_untracked(|s| s.user().map(|u| u.email.clone())) else {
            return;
        };
        spawn(async move {
            match api::fetch_assigned_vehicle(email).await {
                Ok(vehicle) => {
                    ui.try_update(|u| u.assigned_vehicle = Some(vehicle));
                }
                Err(message) => {
                    banner.try_update(|b| b.show(message));
                }
            }
        });
    };

    // Reload whenever the session identity changes.
    Effect::new(move || {
        if allowed() {
            let template = session.with_untracked(|s| trip_template(s.user()));
            trips.update(|v| v.rebind(template));
            refresh(trips, banner, fetch_trips);
            load_assigned();
        } else {
            trips.try_update(RecordView::reset);
            ui.try_update(|u| *u = EmployeeUi::default());
        }
    });

    let on_trip_submit = Callback::new(move |()| {
        submit(trips, banner, move |s| api::save_trip(current_token(session), s), fetch_trips);
    });
    let on_trip_edit = Callback::new(move |t: Trip| trips.update(|view| view.editor.open_edit(&t)));
    let on_trip_delete = Callback::new(move |id: i64| {
        remove(trips, banner, move || api::delete_trip(current_token(session), id), fetch_trips);
    });
    let on_vehicle_close = Callback::new(move |()| ui.update(|u| u.show_vehicle = false));

    let trip_rows = Signal::derive(move || trips.with(|v| v.list.rows.clone()));
    let trips_loading = Signal::derive(move || trips.with(|v| v.list.is_loading()));

    let assigned_summary = move || {
        ui.with(|u| {
            u.assigned_vehicle
                .as_ref()
                .map_or_else(|| "No vehicle assigned".to_owned(), |v| format!("{} {} ({})", v.make, v.model, v.licence_plate))
        })
    };
    let vehicle_dialog = move || {
        ui.with(|u| if u.show_vehicle { u.assigned_vehicle.as_ref().map(DetailRows::detail_rows) } else { None })
            .map(|rows| view! { <DetailDialog title="Assigned Vehicle" rows=rows on_close=on_vehicle_close/> })
    };

    view! {
        <Show when=allowed>
            <div class="dashboard">
                <Toolbar session=session title="Employee Dashboard"/>
                <ErrorBanner banner=banner/>
                <main class="dashboard__content">
                    <section class="panel">
                        <div class="panel__header">
                            <h2>"My Vehicle"</h2>
                            <span class="panel__summary">{assigned_summary}</span>
                            <button
                                class="btn"
                                disabled=move || ui.with(|u| u.assigned_vehicle.is_none())
                                on:click=move |_| ui.update(|u| u.show_vehicle = true)
                            >
                                "View Assigned Vehicle"
                            </button>
                        </div>
                    </section>
                    <section class="panel">
                        <div class="panel__header">
                            <h2>"My Trips"</h2>
                            <button class="btn" on:click=move |_| refresh(trips, banner, fetch_trips)>
                                "Refresh"
                            </button>
                            <button class="btn btn--primary" on:click=move |_| trips.update(|v| v.editor.open_create())>
                                "Log Trip"
                            </button>
                        </div>
                        <DataTable rows=trip_rows loading=trips_loading on_edit=on_trip_edit on_delete=on_trip_delete/>
                    </section>
                </main>
                <EditorDialog view=trips noun="Trip" on_submit=on_trip_submit/>
                {vehicle_dialog}
            </div>
        </Show>
    }
}
