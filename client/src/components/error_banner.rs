//! Dismissible banner showing the last error.

use leptos::prelude::*;
use records::banner::Banner;

#[component]
pub fn ErrorBanner(banner: RwSignal<Banner>) -> impl IntoView {
    let message = move || banner.with(|b| b.message().map(str::to_owned));

    view! {
        <Show when=move || message().is_some()>
            <div class="banner banner--error" role="alert">
                <span class="banner__text">{move || message().unwrap_or_default()}</span>
                <button class="banner__close" title="Dismiss" on:click=move |_| banner.update(Banner::dismiss)>
                    "×"
                </button>
            </div>
        </Show>
    }
}
