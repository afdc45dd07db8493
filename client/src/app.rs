//! Root application component with routing and the session signal.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use records::session::SessionState;

use crate::pages::{admin::AdminPage, employee::EmployeePage, login::LoginPage};

/// Root application component.
///
/// Owns the in-memory session and hands it to each page as a prop.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());

    view! {
        <Title text="Fleet Manager"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=move || view! { <LoginPage session=session/> }/>
                <Route path=StaticSegment("admin") view=move || view! { <AdminPage session=session/> }/>
                <Route path=StaticSegment("employee") view=move || view! { <EmployeePage session=session/> }/>
            </Routes>
        </Router>
    }
}
