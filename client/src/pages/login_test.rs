use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  learner@example.com ", "secret"),
        Ok(LoginCredentials { email: "learner@example.com".to_owned(), password: "secret".to_owned() })
    );
}

#[test]
fn validate_login_input_keeps_password_verbatim() {
    let creds = validate_login_input("a@b.com", " pass phrase ").unwrap();
    assert_eq!(creds.password, " pass phrase ");
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("", "secret"), Err("Enter both email and password."));
    assert_eq!(validate_login_input("a@b.com", "   "), Err("Enter both email and password."));
}

#[test]
fn validate_login_input_requires_at_sign() {
    assert_eq!(validate_login_input("learner", "secret"), Err("Enter a valid email address."));
}

#[test]
fn login_error_message_uses_server_message() {
    let err = ApiError::Status { status: 401, message: Some("Invalid email or password".to_owned()) };
    assert_eq!(login_error_message(&err), "Invalid email or password");
}

#[test]
fn login_error_message_falls_back_for_transport_errors() {
    let err = ApiError::Transport("Failed to fetch".to_owned());
    assert_eq!(login_error_message(&err), LOGIN_FAILED_FALLBACK);
}
