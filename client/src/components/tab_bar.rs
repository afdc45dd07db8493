//! Admin dashboard section tabs.

use leptos::prelude::*;

use crate::state::ui::{AdminTab, AdminUi};

#[component]
pub fn TabBar(ui: RwSignal<AdminUi>) -> impl IntoView {
    view! {
        <nav class="tab-bar">
            {AdminTab::ALL
                .into_iter()
                .map(|tab| {
                    view! {
                        <button
                            class="tab-bar__tab"
                            class:tab-bar__tab--active=move || ui.with(|u| u.tab == tab)
                            on:click=move |_| ui.update(|u| u.select_tab(tab))
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
