//! Shared route-guard helper.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both dashboards apply the same rule: render only for an authenticated
//! user of the right role, otherwise go back to the login screen.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use records::entity::Role;
use records::session::{Gate, LOGIN_ROUTE, SessionState};

/// Redirect to the login route whenever the session fails the `role` gate.
pub fn install_role_gate<F>(session: RwSignal<SessionState>, role: Role, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if session.with(|s| s.gate(role)) == Gate::RedirectToLogin {
            navigate(LOGIN_ROUTE, NavigateOptions::default());
        }
    });
}

/// Bearer token of the current session, read without tracking.
pub fn current_token(session: RwSignal<SessionState>) -> Option<String> {
    session.with_untracked(|s| s.token().map(str::to_owned))
}
