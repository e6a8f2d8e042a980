//! Mandatory fields are enforced before sending and when decoding.

use authlete_dto::authorization::{AuthorizationFailReason, AuthorizationFailRequest};
use authlete_dto::backchannel::BackchannelAuthenticationIssueRequest;
use authlete_dto::device::DeviceVerificationRequest;
use authlete_dto::introspection::IntrospectionRequest;
use authlete_dto::token::{TokenFailRequest, TokenUpdateResponse};
use authlete_dto::userinfo::UserInfoRequest;
use authlete_dto::{ApiRequest, DtoError, decode_response};

fn missing_field<R: ApiRequest>(request: &R) -> Option<&'static str> {
    match request.to_json() {
        Err(DtoError::MissingField { field, .. }) => Some(field),
        _ => None,
    }
}

#[test]
fn authorization_fail_without_ticket_is_rejected() {
    let request = AuthorizationFailRequest::new("", AuthorizationFailReason::NotLoggedIn);
    assert_eq!(missing_field(&request), Some("ticket"));
}

/// `reason` has no default, so a body without it cannot be built from JSON.
#[test]
fn authorization_fail_without_reason_does_not_decode() {
    let result = serde_json::from_str::<AuthorizationFailRequest>(r#"{"ticket":"t"}"#);
    assert!(result.is_err());
    let result = serde_json::from_str::<TokenFailRequest>(r#"{"ticket":"t"}"#);
    assert!(result.is_err());
}

#[test]
fn token_bearing_requests_need_a_token() {
    assert_eq!(missing_field(&IntrospectionRequest::new("")), Some("token"));
    assert_eq!(missing_field(&UserInfoRequest::new("")), Some("token"));
    assert_eq!(missing_field(&IntrospectionRequest::new("at")), None);
}

#[test]
fn ticket_and_user_code_requests() {
    assert_eq!(
        missing_field(&BackchannelAuthenticationIssueRequest::new("")),
        Some("ticket")
    );
    assert_eq!(
        missing_field(&DeviceVerificationRequest::new("")),
        Some("userCode")
    );
}

#[test]
fn responses_without_action_do_not_decode() {
    let result = decode_response::<TokenUpdateResponse>(r#"{"resultCode":"A000000"}"#);
    assert!(matches!(result, Err(DtoError::Json(_))));

    let result = decode_response::<TokenUpdateResponse>(r#"{"action":"MAYBE"}"#);
    assert!(matches!(result, Err(DtoError::Json(_))));

    let result = decode_response::<TokenUpdateResponse>("{\"action\":");
    assert!(result.is_err());
}
