//! Service entity and the service management APIs.
//!
//! A service is one authorization server instance hosted by Authlete. The
//! entity is the body of the create and update APIs and the element of list
//! responses.

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use http::Method;
use serde::{Deserialize, Serialize};

use crate::api::{ApiRequest, push_query};
use crate::client::{default_end, is_default_end};
use crate::common::{Pair, Scope, SnsCredentials, TaggedValue, is_default, millis_to_utc};
use crate::types::{
    ClaimType, ClientAuthMethod, DeliveryMode, Display, GrantType, JwsAlg, ResponseType, Sns,
    UserIdentificationHintType,
};
use crate::wire::Ordinal;

/// An authorization server instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    // Identity
    /// Sequential number assigned by the server.
    #[serde(default, skip_serializing_if = "is_default")]
    pub number: i64,
    /// Number of the owning account.
    #[serde(default, skip_serializing_if = "is_default")]
    pub service_owner_number: i64,
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// API key.
    #[serde(default, skip_serializing_if = "is_default")]
    pub api_key: i64,
    /// API secret.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_secret: Option<String>,
    /// `issuer` of ID tokens and discovery metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    /// Whether `clientIdAlias` is accepted in place of the client ID.
    #[serde(default, skip_serializing_if = "is_default")]
    pub client_id_alias_enabled: bool,

    // Endpoints
    /// Authorization endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_endpoint: Option<String>,
    /// Token endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_endpoint: Option<String>,
    /// Revocation endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revocation_endpoint: Option<String>,
    /// Introspection endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub introspection_endpoint: Option<String>,
    /// UserInfo endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_info_endpoint: Option<String>,
    /// Dynamic client registration endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_endpoint: Option<String>,
    /// Device authorization endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_authorization_endpoint: Option<String>,
    /// Device verification URI shown to end-users.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_verification_uri: Option<String>,
    /// Backchannel authentication endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backchannel_authentication_endpoint: Option<String>,
    /// Pushed authorization request endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pushed_auth_req_endpoint: Option<String>,
    /// JWK Set URI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jwks_uri: Option<String>,
    /// JWK Set document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jwks: Option<String>,

    // Supported features
    /// Grant types.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_grant_types: Option<Vec<GrantType>>,
    /// Response types.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_response_types: Option<Vec<ResponseType>>,
    /// Scopes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_scopes: Option<Vec<Scope>>,
    /// Claims.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_claims: Option<Vec<String>>,
    /// Claim types.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_claim_types: Option<Vec<ClaimType>>,
    /// Claim locales.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_claim_locales: Option<Vec<String>>,
    /// UI locales.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_ui_locales: Option<Vec<String>>,
    /// Values of `display`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_displays: Option<Vec<Display>>,
    /// ACR values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_acrs: Option<Vec<String>>,
    /// Token endpoint authentication methods.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_token_auth_methods: Option<Vec<ClientAuthMethod>>,
    /// Social networks the service federates with.
    ///
    /// Travels as integer ordinals (`[0]` for Facebook), unlike every other
    /// enumeration in the catalog.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_snses: Option<Vec<Ordinal<Sns>>>,
    /// Credentials for the supported social networks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sns_credentials: Option<Vec<SnsCredentials>>,

    // Tokens
    /// Access token type, e.g. `Bearer`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token_type: Option<String>,
    /// Access token lifetime in seconds.
    #[serde(default, skip_serializing_if = "is_default")]
    pub access_token_duration: i64,
    /// Refresh token lifetime in seconds.
    #[serde(default, skip_serializing_if = "is_default")]
    pub refresh_token_duration: i64,
    /// ID token lifetime in seconds.
    #[serde(default, skip_serializing_if = "is_default")]
    pub id_token_duration: i64,
    /// Authorization code lifetime in seconds.
    #[serde(default, skip_serializing_if = "is_default")]
    pub authorization_code_duration: i64,
    /// Whether a refresh keeps the same refresh token.
    #[serde(default, skip_serializing_if = "is_default")]
    pub refresh_token_kept: bool,
    /// Whether a refresh extends the refresh token lifetime.
    #[serde(default, skip_serializing_if = "is_default")]
    pub refresh_token_duration_kept: bool,
    /// Signing algorithm of JWT access tokens; absent issues opaque tokens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token_sign_alg: Option<JwsAlg>,
    /// Whether certificate-bound access tokens are supported.
    #[serde(default, skip_serializing_if = "is_default")]
    pub tls_client_certificate_bound_access_tokens: bool,
    /// Whether PKCE is mandatory.
    #[serde(default, skip_serializing_if = "is_default")]
    pub pkce_required: bool,
    /// Whether only `S256` is accepted for PKCE.
    #[serde(default, skip_serializing_if = "is_default")]
    pub pkce_s256_required: bool,
    /// Whether `error_description` is left out of error responses.
    #[serde(default, skip_serializing_if = "is_default")]
    pub error_description_omitted: bool,
    /// Whether `error_uri` is left out of error responses.
    #[serde(default, skip_serializing_if = "is_default")]
    pub error_uri_omitted: bool,

    // Device flow
    /// Lifetime of device codes in seconds.
    #[serde(default, skip_serializing_if = "is_default")]
    pub device_flow_code_duration: i64,
    /// Polling interval in seconds.
    #[serde(default, skip_serializing_if = "is_default")]
    pub device_flow_polling_interval: i64,

    // Backchannel authentication
    /// Token delivery modes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_backchannel_token_delivery_modes: Option<Vec<DeliveryMode>>,
    /// Lifetime of `auth_req_id` in seconds.
    #[serde(default, skip_serializing_if = "is_default")]
    pub backchannel_auth_req_id_duration: i64,
    /// Polling interval in seconds.
    #[serde(default, skip_serializing_if = "is_default")]
    pub backchannel_polling_interval: i64,
    /// Whether `user_code` is supported.
    #[serde(default, skip_serializing_if = "is_default")]
    pub backchannel_user_code_parameter_supported: bool,
    /// Whether `binding_message` is mandatory.
    #[serde(default, skip_serializing_if = "is_default")]
    pub backchannel_binding_message_required_in_fapi: bool,
    /// Hint types the service resolves itself.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_hint_types: Option<Vec<UserIdentificationHintType>>,

    // Pushed authorization requests
    /// Lifetime of `request_uri` values in seconds.
    #[serde(default, skip_serializing_if = "is_default")]
    pub pushed_auth_req_duration: i64,
    /// Whether every client must push its requests.
    #[serde(default, skip_serializing_if = "is_default")]
    pub par_required: bool,

    // Documentation
    /// Service documentation URI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_documentation: Option<String>,
    /// Policy URI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_uri: Option<String>,
    /// Terms of service URI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tos_uri: Option<String>,
    /// Localized descriptions of the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descriptions: Option<Vec<TaggedValue>>,

    // Callbacks to the service implementation
    /// Endpoint that authenticates end-users for the password grant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication_callback_endpoint: Option<String>,
    /// API key sent to the authentication callback.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication_callback_api_key: Option<String>,
    /// API secret sent to the authentication callback.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication_callback_api_secret: Option<String>,
    /// Developer authentication callback endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub developer_authentication_callback_endpoint: Option<String>,

    /// Whether dynamic client registration is enabled.
    #[serde(default, skip_serializing_if = "is_default")]
    pub dynamic_registration_supported: bool,
    /// Whether the `claims` request parameter is supported.
    #[serde(default, skip_serializing_if = "is_default")]
    pub claims_parameter_supported: bool,
    /// Whether `request_uri` is supported.
    #[serde(default, skip_serializing_if = "is_default")]
    pub request_uri_parameter_supported: bool,
    /// Whether requests must be signed request objects.
    #[serde(default, skip_serializing_if = "is_default")]
    pub request_object_required: bool,
    /// Whether Authlete's hosted authorization endpoint is enabled.
    #[serde(default, skip_serializing_if = "is_default")]
    pub direct_authorization_endpoint_enabled: bool,

    /// Free-form attributes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<Pair>>,
    /// Creation time in milliseconds since the epoch.
    #[serde(default, skip_serializing_if = "is_default")]
    pub created_at: i64,
    /// Last modification time in milliseconds since the epoch.
    #[serde(default, skip_serializing_if = "is_default")]
    pub modified_at: i64,
}

impl Service {
    /// Creation time.
    #[must_use]
    pub fn created(&self) -> Option<DateTime<Utc>> {
        millis_to_utc(self.created_at)
    }

    /// Last modification time.
    #[must_use]
    pub fn modified(&self) -> Option<DateTime<Utc>> {
        millis_to_utc(self.modified_at)
    }

    /// Whether the service federates with `sns`.
    #[must_use]
    pub fn supports_sns(&self, sns: Sns) -> bool {
        self.supported_snses
            .as_deref()
            .is_some_and(|snses| snses.contains(&Ordinal(sns)))
    }

    /// Credentials registered for `sns`.
    #[must_use]
    pub fn sns_credentials_for(&self, sns: Sns) -> Option<&SnsCredentials> {
        self.sns_credentials.as_deref()?.iter().find(|c| c.sns == sns)
    }

    /// The supported scope called `name`.
    #[must_use]
    pub fn scope(&self, name: &str) -> Option<&Scope> {
        self.supported_scopes.as_deref()?.iter().find(|s| s.name == name)
    }
}

/// Query of `GET /api/service/get/list`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceListRequest {
    /// Start index, inclusive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<i64>,
    /// End index, exclusive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<i64>,
}

impl ServiceListRequest {
    /// Lists the services in `[start, end)`.
    #[must_use]
    pub fn range(start: i64, end: i64) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }
}

impl ApiRequest for ServiceListRequest {
    type Response = ServiceListResponse;
    const NAME: &'static str = "ServiceListRequest";

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> Cow<'static, str> {
        Cow::Borrowed("/api/service/get/list")
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        push_query(&mut query, "start", self.start);
        push_query(&mut query, "end", self.end);
        query
    }
}

/// Response of `GET /api/service/get/list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceListResponse {
    /// Start index, inclusive.
    #[serde(default, skip_serializing_if = "is_default")]
    pub start: i64,
    /// End index, exclusive.
    #[serde(default = "default_end", skip_serializing_if = "is_default_end")]
    pub end: i64,
    /// Total number of services.
    #[serde(default, skip_serializing_if = "is_default")]
    pub total_count: i64,
    /// Services in the range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<Service>>,
}
