//! Serialize-then-deserialize identity, for populated and sparse values.

use std::any::type_name;
use std::fmt::Debug;

use authlete_catalog_tests::fixture;
use authlete_dto::authorization::{
    AuthorizationFailRequest, AuthorizationFailResponse, AuthorizationIssueRequest,
    AuthorizationIssueResponse, AuthorizationRequest, AuthorizationResponse,
};
use authlete_dto::backchannel::{
    BackchannelAuthenticationCompleteRequest, BackchannelAuthenticationCompleteResponse,
    BackchannelAuthenticationCompleteResult, BackchannelAuthenticationFailRequest,
    BackchannelAuthenticationFailResponse, BackchannelAuthenticationIssueRequest,
    BackchannelAuthenticationIssueResponse, BackchannelAuthenticationRequest,
    BackchannelAuthenticationResponse,
};
use authlete_dto::client::{
    AuthorizedClientListResponse, Client, ClientAuthorizationDeleteRequest,
    ClientAuthorizationGetListRequest, ClientAuthorizationUpdateRequest, ClientExtension,
    ClientListRequest, ClientListResponse, ClientSecretRefreshRequest,
    ClientSecretRefreshResponse, ClientSecretUpdateRequest, ClientSecretUpdateResponse,
    GrantedScopesGetRequest, GrantedScopesGetResponse,
};
use authlete_dto::client_registration::{ClientRegistrationRequest, ClientRegistrationResponse};
use authlete_dto::common::{ApiResponse, Pair, Property, Scope, SnsCredentials, TaggedValue};
use authlete_dto::device::{
    DeviceAuthorizationRequest, DeviceAuthorizationResponse, DeviceCompleteRequest,
    DeviceCompleteResponse, DeviceCompleteResult, DeviceVerificationRequest,
    DeviceVerificationResponse,
};
use authlete_dto::introspection::{
    IntrospectionRequest, IntrospectionResponse, StandardIntrospectionRequest,
    StandardIntrospectionResponse,
};
use authlete_dto::pushed_auth_req::{PushedAuthReqRequest, PushedAuthReqResponse};
use authlete_dto::revocation::{RevocationRequest, RevocationResponse};
use authlete_dto::service::{Service, ServiceListRequest, ServiceListResponse};
use authlete_dto::token::{
    TokenCreateRequest, TokenCreateResponse, TokenFailRequest, TokenFailResponse,
    TokenIssueRequest, TokenIssueResponse, TokenRequest, TokenResponse, TokenUpdateRequest,
    TokenUpdateResponse,
};
use authlete_dto::types::{ClientAuthMethod, DeliveryMode, GrantType, JweAlg, JweEnc, Sns};
use authlete_dto::userinfo::{
    UserInfoIssueRequest, UserInfoIssueResponse, UserInfoRequest, UserInfoResponse,
};
use authlete_dto::{Ordinal, decode_response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

fn assert_round_trip<T>(value: &T) -> anyhow::Result<()>
where
    T: Serialize + DeserializeOwned + PartialEq + Debug,
{
    let json = serde_json::to_string(value)?;
    let back: T = serde_json::from_str(&json)?;
    assert_eq!(&back, value, "round trip changed {json}");
    Ok(())
}

/// Decodes each body, re-encodes it unchanged, and decodes the re-encoding to
/// an equal record.
fn assert_wire_stable<T>(bodies: &[Value]) -> anyhow::Result<()>
where
    T: Serialize + DeserializeOwned + PartialEq + Debug,
{
    for body in bodies {
        let record: T = serde_json::from_value(body.clone())?;
        let encoded = serde_json::to_value(&record)?;
        assert_eq!(&encoded, body, "{} changed on the wire", type_name::<T>());
        let back: T = serde_json::from_value(encoded)?;
        assert_eq!(back, record);
    }
    Ok(())
}

#[test]
fn fixtures_survive_round_trip() -> anyhow::Result<()> {
    assert_round_trip(&decode_response::<AuthorizationResponse>(&fixture(
        "authorization_interaction.json",
    )?)?)?;
    assert_round_trip(&decode_response::<TokenResponse>(&fixture("token_ok.json")?)?)?;
    assert_round_trip(&decode_response::<Service>(&fixture("service.json")?)?)?;
    Ok(())
}

#[test]
fn populated_client() -> anyhow::Result<()> {
    let client = Client {
        number: 3,
        service_number: 5041,
        developer: Some("john".into()),
        client_id: 57_297_408_867,
        client_id_alias: Some("my-client".into()),
        client_id_alias_enabled: true,
        client_secret: Some("secret".into()),
        client_names: Some(vec![TaggedValue::new("ja", "マイクライアント")]),
        redirect_uris: Some(vec!["https://client.example.org/cb".into()]),
        grant_types: Some(vec![GrantType::AuthorizationCode, GrantType::Ciba]),
        token_auth_method: Some(ClientAuthMethod::PrivateKeyJwt),
        id_token_encryption_alg: Some(JweAlg::Rsa1_5),
        id_token_encryption_enc: Some(JweEnc::A128CbcHs256),
        bc_delivery_mode: Some(DeliveryMode::Push),
        bc_notification_endpoint: Some("https://client.example.org/notify".into()),
        extension: Some(ClientExtension {
            requestable_scopes: Some(vec!["openid".into()]),
            requestable_scopes_enabled: true,
            access_token_duration: 3600,
            refresh_token_duration: 0,
        }),
        attributes: Some(vec![Pair::new("tier", "gold"), Pair::new("", "")]),
        created_at: 1_639_373_421_000,
        modified_at: 1_639_373_421_000,
        ..Client::default()
    };
    assert_round_trip(&client)?;
    assert_round_trip(&Client::default())
}

#[test]
fn populated_service() -> anyhow::Result<()> {
    let service = Service {
        api_key: 21_653_835_348_762,
        service_name: Some("My Service".into()),
        supported_snses: Some(vec![Ordinal(Sns::Facebook)]),
        supported_grant_types: Some(vec![GrantType::DeviceCode]),
        pkce_required: true,
        ..Service::default()
    };
    assert_round_trip(&service)?;
    assert_round_trip(&Service::default())
}

#[test]
fn requests() -> anyhow::Result<()> {
    let mut issue = AuthorizationIssueRequest::new("ticket", "john")
        .with_auth_time(1_700_000_000)
        .with_claims(r#"{"name":"John"}"#);
    issue.properties = Some(vec![Property::hidden("k", "v")]);
    assert_round_trip(&issue)?;
    assert_round_trip(&AuthorizationIssueRequest::new("ticket", "john"))?;

    assert_round_trip(
        &TokenCreateRequest::new(GrantType::ClientCredentials, 1).with_scopes(["api"]),
    )?;

    let mut update = TokenUpdateRequest::new("at");
    update.scopes = Some(Vec::new());
    assert_round_trip(&update)?;
    assert_round_trip(&TokenUpdateRequest::new("at"))?;

    assert_round_trip(&DeviceCompleteRequest::new(
        "UC",
        DeviceCompleteResult::TransactionFailed,
    ))?;
    assert_round_trip(&BackchannelAuthenticationCompleteRequest::new(
        "t",
        BackchannelAuthenticationCompleteResult::Authorized,
        "john",
    ))
}

/// An empty list survives as empty, not as absent.
#[test]
fn empty_scopes_stay_empty() -> anyhow::Result<()> {
    let mut update = TokenUpdateRequest::new("at");
    update.scopes = Some(Vec::new());
    let json = serde_json::to_value(&update)?;
    assert_eq!(json["scopes"], serde_json::json!([]));

    let sparse = serde_json::to_value(TokenUpdateRequest::new("at"))?;
    assert!(sparse.get("scopes").is_none());
    Ok(())
}

#[test]
fn shared_shapes() -> anyhow::Result<()> {
    assert_wire_stable::<ApiResponse>(&[
        json!({"resultCode": "A000000", "resultMessage": "OK"}),
        json!({}),
    ])?;
    assert_wire_stable::<Pair>(&[json!({"key": "tier", "value": "gold"}), json!({})])?;
    assert_wire_stable::<TaggedValue>(&[json!({"tag": "ja", "value": "マイ"}), json!({})])?;
    assert_wire_stable::<Property>(&[
        json!({"key": "k", "value": "v", "hidden": true}),
        json!({"key": "k"}),
    ])?;
    assert_wire_stable::<Scope>(&[
        json!({
            "name": "payment",
            "defaultEntry": true,
            "description": "Payments",
            "descriptions": [{"tag": "fr", "value": "Paiements"}],
            "attributes": [{"key": "fapi", "value": "rw"}]
        }),
        json!({"name": "openid"}),
    ])?;
    assert_wire_stable::<SnsCredentials>(&[
        json!({"sns": "FACEBOOK", "apiKey": "k", "apiSecret": "s"}),
        json!({"sns": "FACEBOOK"}),
    ])?;
    assert_wire_stable::<ClientExtension>(&[
        json!({
            "requestableScopes": ["openid"],
            "requestableScopesEnabled": true,
            "accessTokenDuration": 3600,
            "refreshTokenDuration": 86400
        }),
        json!({}),
    ])
}

#[test]
fn authorization_records() -> anyhow::Result<()> {
    assert_wire_stable::<AuthorizationRequest>(&[json!({"parameters": "response_type=code"})])?;
    assert_wire_stable::<AuthorizationResponse>(&[
        json!({
            "resultCode": "A004001",
            "resultMessage": "ticket issued",
            "action": "INTERACTION",
            "client": {"clientId": 5678, "clientName": "My Client"},
            "service": {"apiKey": 1234, "serviceName": "My Service"},
            "display": "POPUP",
            "maxAge": 3600,
            "scopes": [{"name": "openid", "defaultEntry": true}],
            "uiLocales": ["ja"],
            "claimsLocales": ["en"],
            "claims": ["email"],
            "acrEssential": true,
            "clientIdAliasUsed": true,
            "acrs": ["urn:mace:incommon:iap:silver"],
            "subject": "john",
            "loginHint": "john@example.com",
            "prompts": ["LOGIN", "CONSENT"],
            "lowestPrompt": "LOGIN",
            "requestObjectPayload": "{}",
            "idTokenClaims": "{\"email\":null}",
            "userInfoClaims": "{\"name\":null}",
            "resources": ["https://rs.example.com"],
            "purpose": "account opening",
            "responseContent": "content",
            "ticket": "t"
        }),
        json!({"action": "NO_INTERACTION"}),
    ])?;
    assert_wire_stable::<AuthorizationFailRequest>(&[
        json!({"ticket": "t", "reason": "NOT_LOGGED_IN", "description": "no session"}),
        json!({"ticket": "t", "reason": "UNKNOWN"}),
    ])?;
    assert_wire_stable::<AuthorizationFailResponse>(&[
        json!({"resultCode": "A004201", "action": "LOCATION", "responseContent": "https://c/cb"}),
        json!({"action": "BAD_REQUEST"}),
    ])?;
    assert_wire_stable::<AuthorizationIssueRequest>(&[
        json!({
            "ticket": "t",
            "subject": "john",
            "authTime": 1_700_000_000,
            "acr": "acr1",
            "claims": "{\"name\":\"John\"}",
            "properties": [{"key": "k", "value": "v", "hidden": true}],
            "scopes": [],
            "sub": "pairwise-john"
        }),
        json!({"ticket": "t", "subject": "john"}),
    ])?;
    assert_wire_stable::<AuthorizationIssueResponse>(&[
        json!({
            "action": "LOCATION",
            "responseContent": "https://c/cb#access_token=at",
            "accessToken": "at",
            "accessTokenExpiresAt": 1_700_000_000_000i64,
            "accessTokenDuration": 3600,
            "idToken": "eyJ.eyJ.sig",
            "authorizationCode": "code",
            "jwtAccessToken": "eyJ.at.sig"
        }),
        json!({"action": "FORM"}),
    ])
}

#[test]
fn token_records() -> anyhow::Result<()> {
    assert_wire_stable::<TokenRequest>(&[
        json!({
            "parameters": "grant_type=password",
            "clientId": "5678",
            "clientSecret": "secret",
            "clientCertificate": "-----BEGIN CERTIFICATE-----",
            "clientCertificatePath": ["-----BEGIN CERTIFICATE-----"],
            "properties": [{"key": "k", "value": "v"}],
            "dpop": "eyJ.dpop.sig",
            "htm": "POST",
            "htu": "https://as.example.com/token"
        }),
        json!({"parameters": "grant_type=client_credentials"}),
    ])?;
    assert_wire_stable::<TokenResponse>(&[
        json!({
            "resultCode": "A050001",
            "resultMessage": "issued",
            "action": "OK",
            "responseContent": "{\"access_token\":\"at\"}",
            "username": "john",
            "password": "pw",
            "ticket": "t",
            "accessToken": "at",
            "accessTokenExpiresAt": 1_700_000_000_000i64,
            "accessTokenDuration": 3600,
            "refreshToken": "rt",
            "refreshTokenExpiresAt": 1_700_086_400_000i64,
            "refreshTokenDuration": 86400,
            "idToken": "eyJ.id.sig",
            "grantType": "REFRESH_TOKEN",
            "clientId": 5678,
            "clientIdAlias": "my-client",
            "clientIdAliasUsed": true,
            "subject": "john",
            "scopes": ["openid"],
            "properties": [{"key": "k", "value": "v"}],
            "jwtAccessToken": "eyJ.at.sig",
            "resources": ["https://rs.example.com"],
            "accessTokenResources": ["https://rs.example.com/a"]
        }),
        json!({"action": "PASSWORD"}),
    ])?;
    assert_wire_stable::<TokenFailRequest>(&[json!({
        "ticket": "t",
        "reason": "INVALID_RESOURCE_OWNER_CREDENTIALS"
    })])?;
    assert_wire_stable::<TokenFailResponse>(&[
        json!({"resultCode": "A054001", "action": "BAD_REQUEST", "responseContent": "{}"}),
        json!({"action": "INTERNAL_SERVER_ERROR"}),
    ])?;
    assert_wire_stable::<TokenIssueRequest>(&[
        json!({"ticket": "t", "subject": "john", "properties": [{"key": "k", "value": "v"}]}),
        json!({"ticket": "t", "subject": "john"}),
    ])?;
    assert_wire_stable::<TokenIssueResponse>(&[
        json!({
            "action": "OK",
            "responseContent": "{}",
            "accessToken": "at",
            "accessTokenExpiresAt": 1_700_000_000_000i64,
            "accessTokenDuration": 3600,
            "refreshToken": "rt",
            "refreshTokenExpiresAt": 1_700_086_400_000i64,
            "refreshTokenDuration": 86400,
            "clientId": 5678,
            "subject": "john",
            "scopes": ["openid"],
            "properties": [{"key": "k", "value": "v"}],
            "jwtAccessToken": "eyJ.at.sig"
        }),
        json!({"action": "INTERNAL_SERVER_ERROR"}),
    ])?;
    assert_wire_stable::<TokenCreateRequest>(&[
        json!({
            "grantType": "AUTHORIZATION_CODE",
            "clientId": 5678,
            "subject": "john",
            "scopes": ["openid"],
            "accessTokenDuration": 3600,
            "refreshTokenDuration": 86400,
            "properties": [{"key": "k", "value": "v"}],
            "clientIdAliasUsed": true,
            "accessToken": "at",
            "refreshToken": "rt"
        }),
        json!({"grantType": "CLIENT_CREDENTIALS", "clientId": 5678}),
    ])?;
    assert_wire_stable::<TokenCreateResponse>(&[
        json!({
            "resultCode": "A109001",
            "action": "OK",
            "grantType": "CLIENT_CREDENTIALS",
            "clientId": 5678,
            "subject": "john",
            "scopes": ["api"],
            "accessToken": "at",
            "refreshToken": "rt",
            "expiresAt": 1_700_000_000_000i64,
            "expiresIn": 3600,
            "tokenType": "Bearer",
            "properties": [{"key": "k", "value": "v"}],
            "jwtAccessToken": "eyJ.at.sig"
        }),
        json!({"action": "FORBIDDEN"}),
    ])?;
    assert_wire_stable::<TokenUpdateRequest>(&[
        json!({
            "accessToken": "at",
            "accessTokenExpiresAt": 1_700_000_000_000i64,
            "scopes": ["openid"],
            "properties": [{"key": "k", "value": "v"}],
            "accessTokenExpiresAtUpdatedOnScopeUpdate": true
        }),
        json!({"accessToken": "at"}),
    ])?;
    assert_wire_stable::<TokenUpdateResponse>(&[
        json!({
            "resultCode": "A000000",
            "resultMessage": "OK",
            "action": "OK",
            "accessToken": "at",
            "accessTokenExpiresAt": 1_700_000_000_000i64,
            "scopes": [],
            "properties": [{"key": "k", "value": "v"}]
        }),
        json!({"action": "NOT_FOUND"}),
    ])
}

#[test]
fn introspection_revocation_userinfo_records() -> anyhow::Result<()> {
    assert_wire_stable::<IntrospectionRequest>(&[
        json!({
            "token": "at",
            "scopes": ["openid"],
            "subject": "john",
            "clientCertificate": "-----BEGIN CERTIFICATE-----",
            "dpop": "eyJ.dpop.sig",
            "htm": "GET",
            "htu": "https://rs.example.com/r"
        }),
        json!({"token": "at"}),
    ])?;
    assert_wire_stable::<IntrospectionResponse>(&[
        json!({
            "action": "OK",
            "responseContent": "Bearer error=\"invalid_token\"",
            "clientId": 5678,
            "clientIdAlias": "my-client",
            "clientIdAliasUsed": true,
            "subject": "john",
            "scopes": ["openid"],
            "existent": true,
            "usable": true,
            "sufficient": true,
            "refreshable": true,
            "expiresAt": 1_700_000_000_000i64,
            "properties": [{"key": "k", "value": "v"}],
            "certificateThumbprint": "thumb",
            "resources": ["https://rs.example.com"],
            "accessTokenResources": ["https://rs.example.com/a"]
        }),
        json!({"action": "UNAUTHORIZED"}),
    ])?;
    assert_wire_stable::<StandardIntrospectionRequest>(&[json!({"parameters": "token=at"})])?;
    assert_wire_stable::<StandardIntrospectionResponse>(&[
        json!({"resultCode": "A146001", "action": "OK", "responseContent": "{\"active\":true}"}),
        json!({"action": "BAD_REQUEST"}),
    ])?;
    assert_wire_stable::<RevocationRequest>(&[
        json!({"parameters": "token=at", "clientId": "5678", "clientSecret": "secret"}),
        json!({"parameters": "token=at"}),
    ])?;
    assert_wire_stable::<RevocationResponse>(&[
        json!({"resultCode": "A113001", "action": "OK", "responseContent": ""}),
        json!({"action": "INVALID_CLIENT"}),
    ])?;
    assert_wire_stable::<UserInfoRequest>(&[
        json!({
            "token": "at",
            "clientCertificate": "-----BEGIN CERTIFICATE-----",
            "dpop": "eyJ.dpop.sig",
            "htm": "GET",
            "htu": "https://as.example.com/userinfo"
        }),
        json!({"token": "at"}),
    ])?;
    assert_wire_stable::<UserInfoResponse>(&[
        json!({
            "action": "OK",
            "responseContent": "",
            "clientId": 5678,
            "clientIdAlias": "my-client",
            "clientIdAliasUsed": true,
            "subject": "john",
            "scopes": ["openid", "email"],
            "claims": ["email"],
            "token": "at",
            "properties": [{"key": "k", "value": "v"}],
            "userInfoClaims": "{\"email\":null}"
        }),
        json!({"action": "FORBIDDEN"}),
    ])?;
    assert_wire_stable::<UserInfoIssueRequest>(&[
        json!({"token": "at", "claims": "{\"email\":\"john@example.com\"}", "sub": "p-john"}),
        json!({"token": "at"}),
    ])?;
    assert_wire_stable::<UserInfoIssueResponse>(&[
        json!({"resultCode": "A096001", "action": "JWT", "responseContent": "eyJ.ui.sig"}),
        json!({"action": "JSON"}),
    ])
}

#[test]
fn device_records() -> anyhow::Result<()> {
    assert_wire_stable::<DeviceAuthorizationRequest>(&[
        json!({
            "parameters": "scope=openid",
            "clientId": "5678",
            "clientSecret": "secret",
            "clientCertificate": "-----BEGIN CERTIFICATE-----",
            "clientCertificatePath": []
        }),
        json!({"parameters": "scope=openid"}),
    ])?;
    assert_wire_stable::<DeviceAuthorizationResponse>(&[
        json!({
            "action": "OK",
            "responseContent": "{\"device_code\":\"dc\"}",
            "clientId": 5678,
            "clientIdAlias": "tv",
            "clientIdAliasUsed": true,
            "clientName": "TV",
            "scopes": [{"name": "openid"}],
            "claimNames": ["email"],
            "acrs": ["acr1"],
            "deviceCode": "dc",
            "userCode": "WDJB-MJHT",
            "verificationUri": "https://example.com/device",
            "verificationUriComplete": "https://example.com/device?user_code=WDJB-MJHT",
            "expiresIn": 600,
            "interval": 5,
            "resources": ["https://rs.example.com"],
            "warnings": ["unknown parameter"]
        }),
        json!({"action": "UNAUTHORIZED"}),
    ])?;
    assert_wire_stable::<DeviceVerificationRequest>(&[json!({"userCode": "WDJB-MJHT"})])?;
    assert_wire_stable::<DeviceVerificationResponse>(&[
        json!({
            "resultCode": "A241001",
            "action": "VALID",
            "clientId": 5678,
            "clientIdAlias": "tv",
            "clientIdAliasUsed": true,
            "clientName": "TV",
            "scopes": [{"name": "openid", "defaultEntry": true}],
            "claimNames": ["email"],
            "acrs": ["acr1"],
            "expiresAt": 1_700_000_000_000i64,
            "resources": ["https://rs.example.com"]
        }),
        json!({"action": "NOT_EXIST"}),
    ])?;
    assert_wire_stable::<DeviceCompleteRequest>(&[
        json!({
            "userCode": "WDJB-MJHT",
            "result": "AUTHORIZED",
            "subject": "john",
            "sub": "p-john",
            "authTime": 1_700_000_000,
            "acr": "acr1",
            "claims": "{\"name\":\"John\"}",
            "properties": [{"key": "k", "value": "v"}],
            "scopes": ["openid"],
            "errorDescription": "none",
            "errorUri": "https://example.com/err"
        }),
        json!({"userCode": "WDJB-MJHT", "result": "ACCESS_DENIED"}),
    ])?;
    assert_wire_stable::<DeviceCompleteResponse>(&[
        json!({"resultCode": "A240001", "resultMessage": "done", "action": "SUCCESS"}),
        json!({"action": "USER_CODE_EXPIRED"}),
    ])
}

#[test]
fn backchannel_records() -> anyhow::Result<()> {
    assert_wire_stable::<BackchannelAuthenticationRequest>(&[
        json!({
            "parameters": "login_hint=john",
            "clientId": "5678",
            "clientSecret": "secret",
            "clientCertificate": "-----BEGIN CERTIFICATE-----",
            "clientCertificatePath": ["-----BEGIN CERTIFICATE-----"]
        }),
        json!({"parameters": "login_hint=john"}),
    ])?;
    assert_wire_stable::<BackchannelAuthenticationResponse>(&[
        json!({
            "action": "USER_IDENTIFICATION",
            "responseContent": "{}",
            "clientId": 5678,
            "clientIdAlias": "bank",
            "clientIdAliasUsed": true,
            "clientName": "Bank",
            "deliveryMode": "PING",
            "scopes": [{"name": "openid"}],
            "claimNames": ["email"],
            "clientNotificationToken": "cnt",
            "acrs": ["acr1"],
            "hintType": "LOGIN_HINT",
            "hint": "john",
            "sub": "john",
            "bindingMessage": "W4SCT",
            "userCode": "1234",
            "userCodeRequired": true,
            "requestedExpiry": 120,
            "requestContext": "{}",
            "resources": ["https://rs.example.com"],
            "warnings": ["unknown parameter"],
            "ticket": "t"
        }),
        json!({"action": "BAD_REQUEST"}),
    ])?;
    assert_wire_stable::<BackchannelAuthenticationFailRequest>(&[
        json!({
            "ticket": "t",
            "reason": "UNKNOWN_USER_ID",
            "errorDescription": "no such user",
            "errorUri": "https://example.com/err"
        }),
        json!({"ticket": "t", "reason": "ACCESS_DENIED"}),
    ])?;
    assert_wire_stable::<BackchannelAuthenticationFailResponse>(&[
        json!({"resultCode": "A180001", "action": "FORBIDDEN", "responseContent": "{}"}),
        json!({"action": "INTERNAL_SERVER_ERROR"}),
    ])?;
    assert_wire_stable::<BackchannelAuthenticationIssueRequest>(&[json!({"ticket": "t"})])?;
    assert_wire_stable::<BackchannelAuthenticationIssueResponse>(&[
        json!({
            "action": "OK",
            "responseContent": "{\"auth_req_id\":\"ari\"}",
            "authReqId": "ari",
            "expiresIn": 120,
            "interval": 5
        }),
        json!({"action": "INVALID_TICKET"}),
    ])?;
    assert_wire_stable::<BackchannelAuthenticationCompleteRequest>(&[
        json!({
            "ticket": "t",
            "result": "AUTHORIZED",
            "subject": "john",
            "sub": "p-john",
            "authTime": 1_700_000_000,
            "acr": "acr1",
            "claims": "{\"name\":\"John\"}",
            "properties": [{"key": "k", "value": "v"}],
            "scopes": ["openid"],
            "idtHeaderParams": "{\"kid\":\"k1\"}",
            "errorDescription": "none",
            "errorUri": "https://example.com/err"
        }),
        json!({"ticket": "t", "result": "TRANSACTION_FAILED", "subject": "john"}),
    ])?;
    assert_wire_stable::<BackchannelAuthenticationCompleteResponse>(&[
        json!({
            "action": "NOTIFICATION",
            "responseContent": "{}",
            "clientId": 5678,
            "clientIdAlias": "bank",
            "clientIdAliasUsed": true,
            "clientName": "Bank",
            "deliveryMode": "PUSH",
            "clientNotificationEndpoint": "https://bank.example.com/notify",
            "clientNotificationToken": "cnt",
            "accessToken": "at",
            "accessTokenExpiresAt": 1_700_000_000_000i64,
            "accessTokenDuration": 3600,
            "refreshToken": "rt",
            "refreshTokenExpiresAt": 1_700_086_400_000i64,
            "refreshTokenDuration": 86400,
            "idToken": "eyJ.id.sig",
            "jwtAccessToken": "eyJ.at.sig",
            "resources": ["https://rs.example.com"]
        }),
        json!({"action": "NO_ACTION"}),
    ])
}

#[test]
fn pushed_and_registration_records() -> anyhow::Result<()> {
    assert_wire_stable::<PushedAuthReqRequest>(&[
        json!({
            "parameters": "response_type=code",
            "clientId": "5678",
            "clientSecret": "secret",
            "clientCertificate": "-----BEGIN CERTIFICATE-----",
            "clientCertificatePath": ["-----BEGIN CERTIFICATE-----"]
        }),
        json!({"parameters": "response_type=code"}),
    ])?;
    assert_wire_stable::<PushedAuthReqResponse>(&[
        json!({
            "resultCode": "A245001",
            "action": "CREATED",
            "responseContent": "{}",
            "requestUri": "urn:ietf:params:oauth:request_uri:abc"
        }),
        json!({"action": "PAYLOAD_TOO_LARGE"}),
    ])?;
    assert_wire_stable::<ClientRegistrationRequest>(&[
        json!({"json": "{\"client_name\":\"Dyn\"}", "token": "rat", "clientId": "123"}),
        json!({}),
    ])?;
    assert_wire_stable::<ClientRegistrationResponse>(&[
        json!({
            "action": "CREATED",
            "responseContent": "{\"client_id\":\"123\"}",
            "client": {"clientId": 123, "clientName": "Dyn"}
        }),
        json!({"action": "DELETED"}),
    ])
}

#[test]
fn management_records() -> anyhow::Result<()> {
    assert_wire_stable::<ClientListRequest>(&[
        json!({"developer": "john", "start": 0, "end": 10}),
        json!({}),
    ])?;
    assert_wire_stable::<ClientListResponse>(&[
        json!({
            "start": 5,
            "end": 10,
            "developer": "john",
            "totalCount": 12,
            "clients": [{"clientId": 1}, {"clientId": 2, "clientName": "Two"}]
        }),
        json!({}),
    ])?;
    assert_wire_stable::<ClientSecretRefreshRequest>(&[json!({})])?;
    assert_wire_stable::<ClientSecretRefreshResponse>(&[
        json!({"resultCode": "A148001", "newClientSecret": "new", "oldClientSecret": "old"}),
        json!({}),
    ])?;
    assert_wire_stable::<ClientSecretUpdateRequest>(&[json!({"clientSecret": "s3cret"})])?;
    assert_wire_stable::<ClientSecretUpdateResponse>(&[
        json!({"resultCode": "A149001", "newClientSecret": "new", "oldClientSecret": "old"}),
        json!({}),
    ])?;
    assert_wire_stable::<ClientAuthorizationGetListRequest>(&[
        json!({"subject": "john", "developer": "dev", "start": 1, "end": 20}),
        json!({"subject": "john"}),
    ])?;
    assert_wire_stable::<AuthorizedClientListResponse>(&[
        json!({
            "start": 1,
            "end": 20,
            "developer": "dev",
            "totalCount": 1,
            "clients": [{"clientId": 1}],
            "subject": "john"
        }),
        json!({}),
    ])?;
    assert_wire_stable::<ClientAuthorizationUpdateRequest>(&[
        json!({"subject": "john", "scopes": ["openid"]}),
        json!({"subject": "john"}),
    ])?;
    assert_wire_stable::<ClientAuthorizationDeleteRequest>(&[json!({"subject": "john"})])?;
    assert_wire_stable::<GrantedScopesGetRequest>(&[json!({"subject": "john"})])?;
    assert_wire_stable::<GrantedScopesGetResponse>(&[
        json!({
            "resultCode": "A210001",
            "serviceApiKey": 1234,
            "clientId": 5678,
            "subject": "john",
            "latestGrantedScopes": ["openid"],
            "mergedGrantedScopes": ["openid", "email"],
            "modifiedAt": 1_700_000_000_000i64
        }),
        json!({"latestGrantedScopes": []}),
        json!({}),
    ])?;
    assert_wire_stable::<ServiceListRequest>(&[json!({"start": 0, "end": 10}), json!({})])?;
    assert_wire_stable::<ServiceListResponse>(&[
        json!({
            "start": 2,
            "end": 4,
            "totalCount": 9,
            "services": [{"apiKey": 1234, "supportedSnses": [0]}]
        }),
        json!({}),
    ])
}

#[test]
fn client_and_service_bodies() -> anyhow::Result<()> {
    assert_wire_stable::<Client>(&[
        json!({
            "number": 3,
            "serviceNumber": 5041,
            "developer": "john",
            "clientId": 57_297_408_867i64,
            "clientIdAlias": "my-client",
            "clientIdAliasEnabled": true,
            "clientSecret": "secret",
            "clientType": "CONFIDENTIAL",
            "applicationType": "WEB",
            "clientName": "My Client",
            "clientNames": [{"tag": "ja", "value": "マイクライアント"}],
            "redirectUris": ["https://client.example.org/cb"],
            "responseTypes": ["CODE", "CODE_ID_TOKEN"],
            "grantTypes": ["AUTHORIZATION_CODE", "CIBA"],
            "defaultMaxAge": 3600,
            "authTimeRequired": true,
            "subjectType": "PAIRWISE",
            "idTokenSignAlg": "RS256",
            "idTokenEncryptionAlg": "RSA1_5",
            "idTokenEncryptionEnc": "A128CBC_HS256",
            "tokenAuthMethod": "PRIVATE_KEY_JWT",
            "tlsClientCertificateBoundAccessTokens": true,
            "bcDeliveryMode": "PUSH",
            "bcNotificationEndpoint": "https://client.example.org/notify",
            "bcUserCodeRequired": true,
            "parRequired": true,
            "extension": {"requestableScopesEnabled": true},
            "attributes": [{"key": "tier", "value": "gold"}],
            "createdAt": 1_639_373_421_000i64,
            "modifiedAt": 1_639_373_421_000i64
        }),
        json!({}),
    ])?;
    assert_wire_stable::<Service>(&[
        json!({
            "number": 1,
            "serviceOwnerNumber": 2,
            "serviceName": "My Service",
            "apiKey": 21_653_835_348_762i64,
            "apiSecret": "secret",
            "issuer": "https://as.example.com",
            "clientIdAliasEnabled": true,
            "supportedGrantTypes": ["DEVICE_CODE"],
            "supportedClaimTypes": ["NORMAL"],
            "supportedDisplays": ["PAGE"],
            "supportedTokenAuthMethods": ["CLIENT_SECRET_BASIC"],
            "supportedSnses": [0],
            "snsCredentials": [{"sns": "FACEBOOK", "apiKey": "k", "apiSecret": "s"}],
            "accessTokenDuration": 3600,
            "refreshTokenKept": true,
            "accessTokenSignAlg": "ES256",
            "pkceRequired": true,
            "pkceS256Required": true,
            "deviceFlowPollingInterval": 5,
            "supportedBackchannelTokenDeliveryModes": ["POLL", "PING"],
            "backchannelUserCodeParameterSupported": true,
            "supportedHintTypes": ["ID_TOKEN_HINT"],
            "pushedAuthReqDuration": 90,
            "dynamicRegistrationSupported": true,
            "directAuthorizationEndpointEnabled": true,
            "createdAt": 1_639_373_421_000i64
        }),
        json!({}),
    ])
}
