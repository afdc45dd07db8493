//! Read-only record details in a modal.

use leptos::prelude::*;

/// Label/value rows with a close button. Escape or a backdrop click closes.
#[component]
pub fn DetailDialog(title: &'static str, rows: Vec<(&'static str, String)>, on_close: Callback<()>) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div
                class="dialog dialog--detail"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
                tabindex="0"
            >
                <h2>{title}</h2>
                {rows
                    .into_iter()
                    .map(|(label, value)| {
                        view! {
                            <div class="dialog__detail-row">
                                <span class="dialog__detail-label">{label}</span>
                                <span class="dialog__detail-value">{value}</span>
                            </div>
                        }
                    })
                    .collect_view()}
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Close"
                    </button>
                </div>
            </div>
        </div>
    }
}
