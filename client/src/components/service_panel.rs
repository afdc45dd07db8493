//! Vehicles due for service, plus the admin maintenance notification.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend decides which vehicles are overdue and sends the e-mail; the
//! panel only lists its answer and relays the acknowledgement text.

use leptos::prelude::*;
use records::banner::Banner;
use records::entity::Vehicle;
use records::list::ListState;
use records::session::SessionState;

use crate::components::data_table::DataTable;
use crate::net::api;
use crate::state::ui::AdminUi;
use crate::util::auth::current_token;
use crate::util::sync::{load_list, spawn};

#[component]
pub fn ServicePanel(session: RwSignal<SessionState>, banner: RwSignal<Banner>, ui: RwSignal<AdminUi>) -> impl IntoView {
    let due = RwSignal::new(ListState::<Vehicle>::default());
    let sending = RwSignal::new(false);

    let load = move || load_list(due, banner, move || api::fetch_service_due(current_token(session)));
    load();

    let on_notify = move |_| {
        if sending.get_untracked() {
            return;
        }
        sending.set(true);
        let token = current_token(session);
        spawn(async move {
            match api::send_maintenance_notification(token).await {
                Ok(message) => {
                    ui.try_update(|u| u.service_notice = Some(message));
                }
                Err(message) => {
                    banner.try_update(|b| b.show(message));
                }
            }
            sending.try_set(false);
        });
    };

    let rows = Signal::derive(move || due.with(|l| l.rows.clone()));
    let loading = Signal::derive(move || due.with(ListState::is_loading));
    let notice = move || ui.with(|u| u.service_notice.clone());

    view! {
        <section class="panel">
            <div class="panel__header">
                <h2>"Vehicles Due for Service"</h2>
                <button class="btn" on:click=move |_| load()>
                    "Refresh"
                </button>
                <button class="btn btn--primary" disabled=move || sending.get() on:click=on_notify>
                    "Notify Admins"
                </button>
            </div>
            <Show when=move || notice().is_some()>
                <p class="panel__notice">{move || notice().unwrap_or_default()}</p>
            </Show>
            <DataTable rows=rows loading=loading/>
        </section>
    }
}
