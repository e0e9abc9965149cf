use super::*;
use crate::net::types::UserProfile;

fn session_named(full_name: &str) -> SessionState {
    SessionState {
        user: Some(UserProfile {
            id: "u1".to_owned(),
            email: "x@example.com".to_owned(),
            full_name: full_name.to_owned(),
            role: Role::Learner,
            avatar: None,
            status: None,
        }),
        access_token: Some("t".to_owned()),
        refresh_token: None,
        loading: false,
    }
}

#[test]
fn greeting_uses_first_name() {
    assert_eq!(greeting(&session_named("Linh Do")), "Welcome back, Linh");
}

#[test]
fn greeting_without_name_is_generic() {
    assert_eq!(greeting(&session_named("")), "Welcome back, there");
    assert_eq!(greeting(&SessionState::signed_out()), "Welcome back, there");
}

#[test]
fn dashboard_sections_exclude_the_dashboard_itself() {
    let paths: Vec<&str> = dashboard_sections(Role::Admin).iter().map(|r| r.path).collect();
    assert_eq!(paths, vec!["/admin/users"]);
}

#[test]
fn dashboard_sections_stay_in_role_area() {
    for role in [Role::Admin, Role::Mentor, Role::Learner] {
        for section in dashboard_sections(role) {
            assert_eq!(section.required_role, Some(role));
        }
    }
}

#[test]
fn dashboard_intro_differs_per_role() {
    assert_ne!(dashboard_intro(Role::Admin), dashboard_intro(Role::Mentor));
    assert_ne!(dashboard_intro(Role::Mentor), dashboard_intro(Role::Learner));
}
