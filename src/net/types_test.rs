use super::*;

#[test]
fn user_data_avatar_is_optional() {
    let user: UserData = serde_json::from_str(r#"{"username":"bob"}"#).unwrap();
    assert_eq!(user, UserData::new("bob"));
}

#[test]
fn user_data_serializes_without_missing_avatar() {
    let json = serde_json::to_value(UserData::new("bob")).unwrap();
    assert_eq!(json, serde_json::json!({ "username": "bob" }));
}

#[test]
fn token_response_parses_bearer_token() {
    let resp: TokenResponse =
        serde_json::from_str(r#"{"access_token":"abc.def","token_type":"bearer"}"#).unwrap();
    assert_eq!(resp.access_token, "abc.def");
    assert_eq!(resp.token_type, "bearer");
}

#[test]
fn check_status_authenticated_yields_user() {
    let resp: CheckStatusResponse = serde_json::from_str(
        r#"{"is_authenticated":true,"user":{"username":"alice","avatar":"/images/a.png"}}"#,
    )
    .unwrap();
    assert_eq!(resp.into_user(), Some(UserData::new("alice").with_avatar("/images/a.png")));
}

#[test]
fn check_status_unauthenticated_has_no_user() {
    let resp: CheckStatusResponse = serde_json::from_str(r#"{"is_authenticated":false}"#).unwrap();
    assert_eq!(resp.into_user(), None);
}

#[test]
fn check_status_ignores_user_when_flag_false() {
    let resp = CheckStatusResponse { is_authenticated: false, user: Some(UserData::new("eve")) };
    assert_eq!(resp.into_user(), None);
}

#[test]
fn register_request_serializes_all_fields() {
    let body = RegisterRequest {
        username: "alice".to_owned(),
        email: "alice@example.com".to_owned(),
        password: "hunter2".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(body).unwrap(),
        serde_json::json!({ "username": "alice", "email": "alice@example.com", "password": "hunter2" })
    );
}

#[test]
fn message_response_ignores_extra_fields() {
    let resp: MessageResponse =
        serde_json::from_str(r#"{"message":"sent","dev_note":"link printed to server log"}"#).unwrap();
    assert_eq!(resp.message, "sent");
}
