use super::*;

fn filled() -> RegisterForm {
    RegisterForm {
        first_name: " Ada ".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: "ada@x.com ".to_owned(),
        password: "pw1".to_owned(),
        confirm_password: "pw1".to_owned(),
        role: Role::Tester,
    }
}

#[test]
fn valid_form_builds_trimmed_request() {
    let request = filled().validate().unwrap();
    assert_eq!(request.first_name, "Ada");
    assert_eq!(request.email, "ada@x.com");
    assert_eq!(request.password, "pw1");
    assert_eq!(request.role, Role::Tester);
}

#[test]
fn blank_field_is_rejected() {
    let form = RegisterForm { last_name: "  ".to_owned(), ..filled() };
    assert_eq!(form.validate().err(), Some(MISSING_FIELDS));
}

#[test]
fn mismatched_confirmation_is_rejected() {
    let form = RegisterForm { confirm_password: "pw2".to_owned(), ..filled() };
    assert_eq!(form.validate().err(), Some(PASSWORD_MISMATCH));
}
