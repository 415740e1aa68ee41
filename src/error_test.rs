use super::*;

#[test]
fn unauthorized_displays_generic_message() {
    assert_eq!(ApiError::Unauthorized.to_string(), "Authentication failed");
    assert_eq!(ApiError::Unauthorized.status(), Some(401));
}

#[test]
fn status_error_displays_message_verbatim() {
    let err = ApiError::Status { status: 500, message: "Bug not found".to_owned() };
    assert_eq!(err.to_string(), "Bug not found");
    assert_eq!(err.status(), Some(500));
}

#[test]
fn network_error_matches_shared_constant() {
    assert_eq!(ApiError::Network.to_string(), NETWORK_ERROR);
    assert_eq!(ApiError::Network.status(), None);
}
