use super::*;

#[test]
fn bearer_header_prefixes_token() {
    assert_eq!(bearer_header("abc"), "Bearer abc");
}

#[test]
fn password_form_body_encodes_fields() {
    assert_eq!(
        password_form_body("alice", "p@ss word&x"),
        "grant_type=password&username=alice&password=p%40ss%20word%26x"
    );
}

#[test]
fn api_error_messages() {
    assert_eq!(ApiError::Status(401).to_string(), "request rejected with status 401");
    assert_eq!(ApiError::Unavailable.to_string(), "not available on server");
}

// =============================================================
// Outside the browser
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn check_login_status_is_an_error_not_a_rejection_without_hydrate() {
    let outcome = futures::executor::block_on(check_login_status("tok"));
    assert_eq!(outcome, Err(ApiError::Unavailable));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn register_and_reset_are_unavailable_without_hydrate() {
    assert_eq!(
        futures::executor::block_on(register("alice", "a@example.com", "pw")),
        Err(ApiError::Unavailable)
    );
    assert_eq!(
        futures::executor::block_on(request_password_reset("a@example.com")),
        Err(ApiError::Unavailable)
    );
}
