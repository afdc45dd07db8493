use super::*;

fn user(role: Role) -> User {
    User {
        user_id: 3,
        name: "Sipho".to_owned(),
        email: "sipho@fleet.io".to_owned(),
        role,
        vehicle_id: Some(8),
    }
}

#[test]
fn anonymous_is_redirected() {
    let state = SessionState::default();
    assert_eq!(state.gate(Role::Admin), Gate::RedirectToLogin);
    assert_eq!(state.gate(Role::Employee), Gate::RedirectToLogin);
    assert_eq!(state.token(), None);
}

#[test]
fn login_stores_user_and_token() {
    let mut state = SessionState::default();
    state.login(user(Role::Admin), "tok".to_owned());
    assert_eq!(state.token(), Some("tok"));
    assert_eq!(state.user().map(|u| u.user_id), Some(3));
}

#[test]
fn gate_requires_matching_role() {
    let mut state = SessionState::default();
    state.login(user(Role::Employee), "tok".to_owned());
    assert_eq!(state.gate(Role::Employee), Gate::Allow);
    assert_eq!(state.gate(Role::Admin), Gate::RedirectToLogin);
}

#[test]
fn logout_returns_to_anonymous() {
    let mut state = SessionState::default();
    state.login(user(Role::Admin), "tok".to_owned());
    state.logout();
    assert_eq!(state, SessionState::Anonymous);
    assert_eq!(state.gate(Role::Admin), Gate::RedirectToLogin);
}

#[test]
fn admin_lands_on_admin_dashboard() {
    let session = Session::from_response(LoginResponse {
        user: Some(user(Role::Admin)),
        token: Some("abc".to_owned()),
    })
    .unwrap();
    assert_eq!(landing_route(session.user.role), "/admin");
    assert_eq!(landing_route(Role::Employee), "/employee");
}

#[test]
fn response_missing_token_is_rejected() {
    let err = Session::from_response(LoginResponse {
        user: Some(user(Role::Admin)),
        token: None,
    })
    .unwrap_err();
    assert_eq!(err.to_string(), "user or token missing");
    assert!(Session::from_response(LoginResponse::default()).is_err());
    assert!(
        Session::from_response(LoginResponse {
            user: Some(user(Role::Admin)),
            token: Some(String::new()),
        })
        .is_err()
    );
}
