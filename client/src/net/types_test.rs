use super::*;

fn sample_profile() -> UserProfile {
    UserProfile {
        id: "u-1".to_owned(),
        email: "mentor@example.com".to_owned(),
        full_name: "Minh Tran".to_owned(),
        role: Role::Mentor,
        avatar: None,
        status: Some("active".to_owned()),
    }
}

// =============================================================
// Role
// =============================================================

#[test]
fn role_parse_ignores_case() {
    assert_eq!(Role::parse("ADMIN"), Some(Role::Admin));
    assert_eq!(Role::parse("Admin"), Some(Role::Admin));
    assert_eq!(Role::parse("mentor"), Some(Role::Mentor));
    assert_eq!(Role::parse(" Learner "), Some(Role::Learner));
}

#[test]
fn role_parse_rejects_unknown() {
    assert_eq!(Role::parse("superuser"), None);
    assert_eq!(Role::parse(""), None);
}

#[test]
fn role_serializes_canonical_casing() {
    assert_eq!(serde_json::to_value(Role::Admin).unwrap(), serde_json::json!("Admin"));
    assert_eq!(Role::Learner.to_string(), "Learner");
}

#[test]
fn role_deserialize_normalizes_upper_case() {
    let role: Role = serde_json::from_str("\"MENTOR\"").unwrap();
    assert_eq!(role, Role::Mentor);
}

#[test]
fn role_deserialize_unknown_is_error() {
    assert!(serde_json::from_str::<Role>("\"guest\"").is_err());
}

// =============================================================
// UserProfile / LoginResponse
// =============================================================

#[test]
fn user_profile_uses_camel_case_keys() {
    let value = serde_json::to_value(sample_profile()).unwrap();
    assert_eq!(value["fullName"], "Minh Tran");
    assert_eq!(value["role"], "Mentor");
    assert!(value.get("avatar").is_none());
}

#[test]
fn user_profile_optional_fields_default() {
    let profile: UserProfile = serde_json::from_value(serde_json::json!({
        "id": "u-2",
        "email": "a@b.com",
        "fullName": "A B",
        "role": "LEARNER"
    }))
    .unwrap();
    assert_eq!(profile.role, Role::Learner);
    assert_eq!(profile.avatar, None);
    assert_eq!(profile.status, None);
}

#[test]
fn login_response_parses_tokens_and_user() {
    let resp: LoginResponse = serde_json::from_value(serde_json::json!({
        "accessToken": "at",
        "refreshToken": "rt",
        "user": {
            "id": "u-1",
            "email": "mentor@example.com",
            "fullName": "Minh Tran",
            "role": "mentor",
            "status": "active"
        }
    }))
    .unwrap();
    assert_eq!(resp.access_token, "at");
    assert_eq!(resp.refresh_token.as_deref(), Some("rt"));
    assert_eq!(resp.user, sample_profile());
}

#[test]
fn login_response_refresh_token_optional() {
    let resp: LoginResponse = serde_json::from_value(serde_json::json!({
        "accessToken": "at",
        "user": serde_json::to_value(sample_profile()).unwrap()
    }))
    .unwrap();
    assert_eq!(resp.refresh_token, None);
}

#[test]
fn error_body_message_optional() {
    let body: ErrorBody = serde_json::from_str("{}").unwrap();
    assert_eq!(body.message, None);
    let body: ErrorBody = serde_json::from_str(r#"{"message":"Invalid credentials"}"#).unwrap();
    assert_eq!(body.message.as_deref(), Some("Invalid credentials"));
}
