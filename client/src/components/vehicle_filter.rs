//! Make / model / plate filter inputs for the vehicle list.
//!
//! Values go to the server as typed; the page re-fetches on every change.

use leptos::prelude::*;
use records::endpoint::VehicleFilter;

#[component]
pub fn VehicleFilterBar(filter: RwSignal<VehicleFilter>) -> impl IntoView {
    view! {
        <div class="filter-bar">
            <input
                class="filter-bar__input"
                type="text"
                placeholder="Make"
                prop:value=move || filter.with(|f| f.make.clone())
                on:input=move |ev| filter.update(|f| f.make = event_target_value(&ev))
            />
            <input
                class="filter-bar__input"
                type="text"
                placeholder="Model"
                prop:value=move || filter.with(|f| f.model.clone())
                on:input=move |ev| filter.update(|f| f.model = event_target_value(&ev))
            />
            <input
                class="filter-bar__input"
                type="text"
                placeholder="License Plate"
                prop:value=move || filter.with(|f| f.licence_plate.clone())
                on:input=move |ev| filter.update(|f| f.licence_plate = event_target_value(&ev))
            />
            <button class="btn" on:click=move |_| filter.set(VehicleFilter::default())>
                "Clear"
            </button>
        </div>
    }
}
