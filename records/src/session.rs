//! In-memory login session and role gate.
//!
//! The session lives only as long as the process or page; nothing is
//! persisted and tokens are never refreshed.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::entity::{LoginResponse, Role, User};

pub const LOGIN_ROUTE: &str = "/";
pub const ADMIN_ROUTE: &str = "/admin";
pub const EMPLOYEE_ROUTE: &str = "/employee";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("user or token missing")]
    Incomplete,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub user: User,
    pub token: String,
}

impl Session {
    /// Accept a login response only when it carries both halves.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Incomplete`] if the user or a non-empty token is absent.
    pub fn from_response(response: LoginResponse) -> Result<Self, SessionError> {
        match (response.user, response.token) {
            (Some(user), Some(token)) if !token.is_empty() => Ok(Self { user, token }),
            _ => Err(SessionError::Incomplete),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum SessionState {
    #[default]
    Anonymous,
    Authenticated(Session),
}

/// Whether a screen may render for the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gate {
    Allow,
    RedirectToLogin,
}

impl SessionState {
    pub fn login(&mut self, user: User, token: String) {
        *self = Self::Authenticated(Session { user, token });
    }

    pub fn logout(&mut self) {
        *self = Self::Anonymous;
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(session) => Some(&session.user),
            Self::Anonymous => None,
        }
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Authenticated(session) => Some(&session.token),
            Self::Anonymous => None,
        }
    }

    /// Allow only an authenticated user holding `required`.
    #[must_use]
    pub fn gate(&self, required: Role) -> Gate {
        match self.user() {
            Some(user) if user.role == required => Gate::Allow,
            _ => Gate::RedirectToLogin,
        }
    }
}

/// Where a freshly logged-in user lands.
#[must_use]
pub fn landing_route(role: Role) -> &'static str {
    match role {
        Role::Admin => ADMIN_ROUTE,
        Role::Employee => EMPLOYEE_ROUTE,
    }
}
