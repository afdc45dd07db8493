//! Top bar with dashboard title, signed-in user and logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use records::session::{LOGIN_ROUTE, SessionState};

#[component]
pub fn Toolbar(session: RwSignal<SessionState>, title: &'static str) -> impl IntoView {
    let navigate = use_navigate();

    let user_name = move || session.with(|s| s.user().map(|u| u.name.clone()).unwrap_or_default());
    let on_logout = move |_| {
        session.update(SessionState::logout);
        navigate(LOGIN_ROUTE, NavigateOptions::default());
    };

    view! {
        <div class="toolbar">
            <span class="toolbar__title">{title}</span>
            <span class="toolbar__divider"></span>
            <span class="toolbar__user">{user_name}</span>
            <button class="btn toolbar__logout" on:click=on_logout>
                "Logout"
            </button>
        </div>
    }
}
