//! Create/edit dialog rendered from a draft's field table.
//!
//! SYSTEM CONTEXT
//! ==============
//! One component serves vehicles, trips and inspections on both dashboards.
//! The draft type supplies labels, input kinds and locked fields; the page
//! supplies what happens on submit.

use leptos::prelude::*;
use records::draft::{Draft, FormField, InputKind};
use records::view::RecordView;

/// Modal form bound to the editor inside `view`.
#[component]
pub fn EditorDialog<D>(view: RwSignal<RecordView<D>>, noun: &'static str, on_submit: Callback<()>) -> impl IntoView
where
    D: Draft,
{
    let on_cancel = move || view.update(|v| v.editor.close());
    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_cancel();
        }
    };

    let title = move || view.with(|v| v.editor.title(noun));
    let error = move || view.with(|v| v.editor.error.clone());
    let fields = D::Field::ALL.to_vec();

    view! {
        <Show when=move || view.with(|v| v.editor.open)>
            <div class="dialog-backdrop" on:click=move |_| on_cancel()>
                <div
                    class="dialog dialog--editor"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=on_keydown
                    tabindex="0"
                >
                    <h2>{title}</h2>
                    <form class="dialog__form" on:submit=on_form_submit>
                        {fields.clone().into_iter().map(|field| field_row(view, field)).collect_view()}
                        <Show when=move || error().is_some()>
                            <p class="dialog__error">{move || error().unwrap_or_default()}</p>
                        </Show>
                        <div class="dialog__actions">
                            <button class="btn" type="button" on:click=move |_| on_cancel()>
                                "Cancel"
                            </button>
                            <button
                                class="btn btn--primary"
                                type="submit"
                                disabled=move || view.with(|v| v.editor.submitting)
                            >
                                {move || if view.with(|v| v.editor.is_editing()) { "Update" } else { "Add" }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}

fn field_row<D: Draft>(view: RwSignal<RecordView<D>>, field: D::Field) -> impl IntoView {
    let value = move || view.with(|v| v.editor.draft.text(field));
    let locked = move || view.with(|v| v.editor.draft.is_locked(field));
    let on_input = move |ev: leptos::ev::Event| {
        let text = event_target_value(&ev);
        view.update(|v| {
            if let Err(err) = v.editor.set(field, &text) {
                v.editor.error = Some(err.to_string());
            }
        });
    };

    let input = match field.input() {
        InputKind::Select(options) => view! {
            <select class="dialog__input" prop:value=value disabled=locked on:change=on_input>
                {options
                    .iter()
                    .map(|(opt, label)| view! { <option value=*opt>{*label}</option> })
                    .collect_view()}
            </select>
        }
        .into_any(),
        kind => {
            let (input_type, step) = match kind {
                InputKind::Integer => ("number", Some("1")),
                InputKind::Decimal => ("number", Some("0.1")),
                InputKind::Date => ("date", None),
                InputKind::Text | InputKind::Select(_) => ("text", None),
            };
            view! {
                <input
                    class="dialog__input"
                    type=input_type
                    step=step
                    required=field.required()
                    disabled=locked
                    prop:value=value
                    on:input=on_input
                />
            }
            .into_any()
        }
    };

    view! {
        <label class="dialog__field">
            <span class="dialog__label">{field.label()}</span>
            {input}
        </label>
    }
}
