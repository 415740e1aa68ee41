use super::*;
use crate::net::types::Role;
use crate::test_helpers::dummy_user;

#[test]
fn checking_while_loading_even_with_session() {
    let state = AuthState { loading: true, ..AuthState::active("t".to_owned(), dummy_user(Role::User)) };
    assert_eq!(guard_decision(&state), GuardDecision::Checking);
    assert_eq!(guard_decision(&AuthState::default()), GuardDecision::Checking);
}

#[test]
fn redirects_when_loaded_and_anonymous() {
    assert_eq!(guard_decision(&AuthState::anonymous()), GuardDecision::RedirectToLogin);
}

#[test]
fn redirects_on_partial_session() {
    let state = AuthState { token: Some("t".to_owned()), user: None, loading: false };
    assert_eq!(guard_decision(&state), GuardDecision::RedirectToLogin);
}

#[test]
fn allows_active_session() {
    let state = AuthState::active("t".to_owned(), dummy_user(Role::Tester));
    assert_eq!(guard_decision(&state), GuardDecision::Allow);
}
