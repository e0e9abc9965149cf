use futures::executor::block_on;

use super::*;
use crate::net::http::HttpMethod;
use crate::net::http::test_helpers::scripted_client;
use crate::net::types::Role;

fn credentials() -> LoginCredentials {
    LoginCredentials { email: "learner@example.com".to_owned(), password: "hunter22".to_owned() }
}

#[test]
fn login_posts_credentials_without_bearer() {
    let (client, transport, _) = scripted_client();
    client.credentials().set_access_token("stale");
    transport.respond(
        200,
        serde_json::json!({
            "accessToken": "at",
            "refreshToken": "rt",
            "user": { "id": "u1", "email": "learner@example.com", "fullName": "Hoa Le", "role": "LEARNER" }
        }),
    );

    let resp = block_on(login(&client, &credentials())).unwrap();

    assert_eq!(resp.user.role, Role::Learner);
    let req = transport.last_request().unwrap();
    assert_eq!(req.method, HttpMethod::Post);
    assert_eq!(req.url, "https://api.test/api/auth/login");
    assert_eq!(req.header("Authorization"), None);
    let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
    assert_eq!(body, serde_json::json!({ "email": "learner@example.com", "password": "hunter22" }));
}

#[test]
fn login_rejection_surfaces_server_message() {
    let (client, transport, _) = scripted_client();
    transport.respond(400, serde_json::json!({ "message": "Wrong password" }));

    let err = block_on(login(&client, &credentials())).unwrap_err();

    assert_eq!(err.message(), Some("Wrong password"));
}

#[test]
fn list_users_hits_users_endpoint() {
    let (client, transport, _) = scripted_client();
    transport.respond(
        200,
        serde_json::json!([
            { "id": "u1", "email": "a@x.com", "fullName": "A", "role": "Admin" },
            { "id": "u2", "email": "m@x.com", "fullName": "M", "role": "Mentor" }
        ]),
    );

    let users = block_on(list_users(&client)).unwrap();

    assert_eq!(users.len(), 2);
    assert_eq!(users[1].role, Role::Mentor);
    assert_eq!(transport.last_request().unwrap().url, "https://api.test/api/users");
}

#[test]
fn list_mentor_learners_hits_mentor_endpoint() {
    let (client, transport, _) = scripted_client();
    transport.respond(200, serde_json::json!([]));

    let learners = block_on(list_mentor_learners(&client)).unwrap();

    assert!(learners.is_empty());
    assert_eq!(transport.last_request().unwrap().url, "https://api.test/api/mentor/learners");
}

#[test]
fn list_learning_packages_parses_optional_fields() {
    let (client, transport, _) = scripted_client();
    transport.respond(200, serde_json::json!([{ "id": "p1", "title": "IELTS Speaking", "level": "B2" }]));

    let packages = block_on(list_learning_packages(&client)).unwrap();

    assert_eq!(packages[0].title, "IELTS Speaking");
    assert_eq!(packages[0].level.as_deref(), Some("B2"));
    assert_eq!(packages[0].description, None);
}
