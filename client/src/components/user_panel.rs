//! Selected user details with the assign-vehicle control.

use leptos::prelude::*;
use records::banner::Banner;
use records::entity::DetailRows;

use crate::net::api;
use crate::state::ui::AdminUi;
use crate::util::sync::spawn;

/// Renders nothing until a user is selected in `ui`. `on_assigned` runs
/// after the backend accepts an assignment.
#[component]
pub fn UserPanel(ui: RwSignal<AdminUi>, banner: RwSignal<Banner>, on_assigned: Callback<()>) -> impl IntoView {
    let busy = RwSignal::new(false);

    let on_assign = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let Some(email) = ui.with_untracked(|u| u.selected_user.as_ref().map(|user| user.email.clone())) else {
            return;
        };
        let Some(vehicle_id) = ui.with_untracked(AdminUi::assign_vehicle_id) else {
            banner.update(|b| b.show("Enter a vehicle ID"));
            return;
        };
        busy.set(true);
        spawn(async move {
            match api::assign_vehicle(email, vehicle_id).await {
                Ok(()) => {
                    ui.try_update(|u| {
                        if let Some(user) = u.selected_user.as_mut() {
                            user.vehicle_id = Some(vehicle_id);
                        }
                    });
                    on_assigned.run(());
                }
                Err(message) => {
                    banner.try_update(|b| b.show(message));
                }
            }
            busy.try_set(false);
        });
    };

    let rows = move || ui.with(|u| u.selected_user.as_ref().map(DetailRows::detail_rows).unwrap_or_default());

    view! {
        <Show when=move || ui.with(|u| u.selected_user.is_some())>
            <section class="panel panel--user">
                <div class="panel__header">
                    <h2>"User Details"</h2>
                    <button class="btn" on:click=move |_| ui.update(|u| u.selected_user = None)>
                        "Close"
                    </button>
                </div>
                {move || {
                    rows()
                        .into_iter()
                        .map(|(label, value)| {
                            view! {
                                <div class="dialog__detail-row">
                                    <span class="dialog__detail-label">{label}</span>
                                    <span class="dialog__detail-value">{value}</span>
                                </div>
                            }
                        })
                        .collect_view()
                }}
                <form class="panel__form" on:submit=on_assign>
                    <input
                        class="dialog__input"
                        type="number"
                        placeholder="Vehicle ID"
                        prop:value=move || ui.with(|u| u.assign_vehicle_text.clone())
                        on:input=move |ev| ui.update(|u| u.assign_vehicle_text = event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Assign Vehicle"
                    </button>
                </form>
            </section>
        </Show>
    }
}
