//! End-to-end decoding of representative API bodies.

use authlete_catalog_tests::{fixture, init_tracing};
use authlete_dto::authorization::{AuthorizationAction, AuthorizationResponse};
use authlete_dto::client::{ClientListResponse, GrantedScopesGetResponse};
use authlete_dto::common::SnsCredentials;
use authlete_dto::service::Service;
use authlete_dto::token::{TokenResponse, TokenUpdateAction, TokenUpdateResponse};
use authlete_dto::types::{ClientType, GrantType, JwsAlg, Prompt, Sns};
use authlete_dto::{Interpret, decode_response};

/// A token update response decodes with its result fields intact.
#[test]
fn token_update_ok() -> anyhow::Result<()> {
    init_tracing();

    let response: TokenUpdateResponse =
        decode_response(r#"{"action":"OK","resultCode":"A000000","resultMessage":"OK"}"#)?;

    assert_eq!(response.action, TokenUpdateAction::Ok);
    assert_eq!(response.result.result_code.as_deref(), Some("A000000"));
    assert_eq!(response.result.result_message.as_deref(), Some("OK"));
    assert!(response.access_token.is_none());
    Ok(())
}

/// SNS credentials name the network symbolically.
#[test]
fn sns_credentials_facebook() -> anyhow::Result<()> {
    let credentials: SnsCredentials =
        decode_response(r#"{"sns":"FACEBOOK","apiKey":"k","apiSecret":"s"}"#)?;

    assert_eq!(credentials.sns, Sns::Facebook);
    assert_eq!(credentials.api_key.as_deref(), Some("k"));
    assert_eq!(credentials.api_secret.as_deref(), Some("s"));
    Ok(())
}

#[test]
fn authorization_interaction() -> anyhow::Result<()> {
    init_tracing();

    let response: AuthorizationResponse =
        decode_response(&fixture("authorization_interaction.json")?)?;

    assert_eq!(response.action, AuthorizationAction::Interaction);
    assert_eq!(response.result.result_code.as_deref(), Some("A004001"));
    assert_eq!(response.lowest_prompt, Some(Prompt::Consent));
    assert_eq!(response.scope_names(), vec!["openid"]);

    let client = response.client.as_ref().expect("client present");
    assert_eq!(client.client_id, 57_297_408_867);
    assert_eq!(client.client_type, Some(ClientType::Confidential));
    assert_eq!(client.id_token_sign_alg, Some(JwsAlg::Hs256));

    assert!(response.to_reply()?.is_none(), "INTERACTION is handled by the caller");
    Ok(())
}

#[test]
fn token_ok() -> anyhow::Result<()> {
    let response: TokenResponse = decode_response(&fixture("token_ok.json")?)?;

    assert_eq!(response.grant_type, Some(GrantType::AuthorizationCode));
    assert_eq!(response.scopes.as_deref().map(<[String]>::len), Some(2));
    assert_eq!(
        response.access_token_expiry().map(|t| t.timestamp()),
        Some(1_700_086_400)
    );

    let reply = response.to_reply()?.expect("OK has a reply");
    assert_eq!(reply.status, http::StatusCode::OK);
    assert_eq!(reply.body, response.response_content);
    Ok(())
}

#[test]
fn service_document() -> anyhow::Result<()> {
    let service: Service = decode_response(&fixture("service.json")?)?;

    assert_eq!(service.api_key, 21_653_835_348_762);
    assert!(service.supports_sns(Sns::Facebook));
    assert!(service.sns_credentials_for(Sns::Facebook).is_some());
    assert_eq!(
        service.scope("email").and_then(|s| s.attribute("fapi")),
        Some("r")
    );
    assert!(service.created().is_some());
    Ok(())
}

#[test]
fn client_list() -> anyhow::Result<()> {
    let list: ClientListResponse = decode_response(&fixture("client_list.json")?)?;

    assert_eq!((list.start, list.end, list.total_count), (0, 2, 7));
    let clients = list.clients.unwrap_or_default();
    assert_eq!(clients.len(), 2);
    assert_eq!(clients[1].client_id_alias.as_deref(), Some("another"));
    Ok(())
}

/// Start defaults to zero when the server leaves it out.
#[test]
fn list_start_defaults_to_zero() -> anyhow::Result<()> {
    let list: ClientListResponse = decode_response(r#"{"totalCount":0}"#)?;
    assert_eq!(list.start, 0);
    assert_eq!(list.end, 5);
    Ok(())
}

/// `null` means no grant record; `[]` means a record with no scopes.
#[test]
fn granted_scopes_null_versus_empty() -> anyhow::Result<()> {
    let absent: GrantedScopesGetResponse =
        decode_response(r#"{"subject":"john","latestGrantedScopes":null}"#)?;
    let empty: GrantedScopesGetResponse =
        decode_response(r#"{"subject":"john","latestGrantedScopes":[],"mergedGrantedScopes":[]}"#)?;

    assert_eq!(absent.latest_granted_scopes, None);
    assert_eq!(empty.latest_granted_scopes, Some(vec![]));

    let absent_again: GrantedScopesGetResponse =
        serde_json::from_str(&serde_json::to_string(&absent)?)?;
    let empty_again: GrantedScopesGetResponse =
        serde_json::from_str(&serde_json::to_string(&empty)?)?;
    assert_eq!(absent_again, absent);
    assert_eq!(empty_again, empty);
    assert_ne!(absent_again.latest_granted_scopes, empty_again.latest_granted_scopes);
    Ok(())
}
