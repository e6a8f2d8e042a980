//! Client entity and the client management APIs.

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use http::Method;
use serde::{Deserialize, Serialize};

use crate::api::{ApiRequest, push_query, require};
use crate::common::{ApiResponse, Pair, TaggedValue, is_default, millis_to_utc};
use crate::error::DtoResult;
use crate::types::{
    ApplicationType, ClientAuthMethod, ClientType, DeliveryMode, GrantType, JweAlg, JweEnc,
    JwsAlg, ResponseType, SubjectType,
};

/// Default `end` of list responses when the server omits it.
pub(crate) const fn default_end() -> i64 {
    5
}

pub(crate) fn is_default_end(end: &i64) -> bool {
    *end == default_end()
}

/// Per-client overrides of service settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientExtension {
    /// Scopes the client may request, when `requestable_scopes_enabled`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requestable_scopes: Option<Vec<String>>,

    /// Whether `requestable_scopes` restricts the client.
    #[serde(default, skip_serializing_if = "is_default")]
    pub requestable_scopes_enabled: bool,

    /// Access token lifetime in seconds; `0` uses the service value.
    #[serde(default, skip_serializing_if = "is_default")]
    pub access_token_duration: i64,

    /// Refresh token lifetime in seconds; `0` uses the service value.
    #[serde(default, skip_serializing_if = "is_default")]
    pub refresh_token_duration: i64,
}

/// A client application registered with a service.
///
/// Used both as the body of the create and update APIs and as the element of
/// list responses. Every field is optional on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    // Identity
    /// Sequential number assigned by the server.
    #[serde(default, skip_serializing_if = "is_default")]
    pub number: i64,
    /// Number of the service the client belongs to.
    #[serde(default, skip_serializing_if = "is_default")]
    pub service_number: i64,
    /// Developer who owns the client.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub developer: Option<String>,
    /// Client ID.
    #[serde(default, skip_serializing_if = "is_default")]
    pub client_id: i64,
    /// Alias of the client ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id_alias: Option<String>,
    /// Whether the alias is accepted in place of the client ID.
    #[serde(default, skip_serializing_if = "is_default")]
    pub client_id_alias_enabled: bool,
    /// Client secret.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
    /// Client type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_type: Option<ClientType>,
    /// Application type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_type: Option<ApplicationType>,

    // Metadata
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    /// Localized display names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_names: Option<Vec<TaggedValue>>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Localized descriptions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descriptions: Option<Vec<TaggedValue>>,
    /// Contact email addresses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contacts: Option<Vec<String>>,
    /// Logo URI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_uri: Option<String>,
    /// Localized logo URIs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_uris: Option<Vec<TaggedValue>>,
    /// Home page URI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_uri: Option<String>,
    /// Localized home page URIs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_uris: Option<Vec<TaggedValue>>,
    /// Privacy policy URI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_uri: Option<String>,
    /// Localized privacy policy URIs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_uris: Option<Vec<TaggedValue>>,
    /// Terms of service URI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tos_uri: Option<String>,
    /// Localized terms of service URIs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tos_uris: Option<Vec<TaggedValue>>,

    // Flows
    /// Registered redirect URIs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_uris: Option<Vec<String>>,
    /// Response types the client may use.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_types: Option<Vec<ResponseType>>,
    /// Grant types the client may use.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grant_types: Option<Vec<GrantType>>,
    /// Login URI for third-party initiated login.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login_uri: Option<String>,
    /// Pre-registered `request_uri` values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_uris: Option<Vec<String>>,
    /// Default `max_age` in seconds.
    #[serde(default, skip_serializing_if = "is_default")]
    pub default_max_age: i64,
    /// Default ACR values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_acrs: Option<Vec<String>>,
    /// Whether ID tokens always carry `auth_time`.
    #[serde(default, skip_serializing_if = "is_default")]
    pub auth_time_required: bool,

    // Keys and algorithms
    /// JWK Set URI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jwks_uri: Option<String>,
    /// JWK Set document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jwks: Option<String>,
    /// Subject identifier type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_type: Option<SubjectType>,
    /// Sector identifier URI for pairwise subjects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector_identifier_uri: Option<String>,
    /// ID token signing algorithm.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_token_sign_alg: Option<JwsAlg>,
    /// ID token key encryption algorithm.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_token_encryption_alg: Option<JweAlg>,
    /// ID token content encryption algorithm.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_token_encryption_enc: Option<JweEnc>,
    /// UserInfo response signing algorithm.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_info_sign_alg: Option<JwsAlg>,
    /// UserInfo response key encryption algorithm.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_info_encryption_alg: Option<JweAlg>,
    /// UserInfo response content encryption algorithm.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_info_encryption_enc: Option<JweEnc>,
    /// Request object signing algorithm.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_sign_alg: Option<JwsAlg>,
    /// Request object key encryption algorithm.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_encryption_alg: Option<JweAlg>,
    /// Request object content encryption algorithm.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_encryption_enc: Option<JweEnc>,

    // Client authentication
    /// Token endpoint authentication method.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_auth_method: Option<ClientAuthMethod>,
    /// Signing algorithm of client assertions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_auth_sign_alg: Option<JwsAlg>,
    /// Expected subject DN of the client certificate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_client_auth_subject_dn: Option<String>,
    /// Whether access tokens are bound to the client certificate.
    #[serde(default, skip_serializing_if = "is_default")]
    pub tls_client_certificate_bound_access_tokens: bool,

    // Backchannel authentication
    /// Token delivery mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bc_delivery_mode: Option<DeliveryMode>,
    /// Notification endpoint for ping and push modes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bc_notification_endpoint: Option<String>,
    /// Signing algorithm of backchannel request objects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bc_request_sign_alg: Option<JwsAlg>,
    /// Whether the client supports `user_code`.
    #[serde(default, skip_serializing_if = "is_default")]
    pub bc_user_code_required: bool,

    /// Whether pushed authorization requests are mandatory.
    #[serde(default, skip_serializing_if = "is_default")]
    pub par_required: bool,

    /// Overrides of service settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<ClientExtension>,

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

impl Client {
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

    /// Whether `uri` is one of the registered redirect URIs.
    #[must_use]
    pub fn has_redirect_uri(&self, uri: &str) -> bool {
        self.redirect_uris
            .as_deref()
            .is_some_and(|uris| uris.iter().any(|u| u == uri))
    }

    /// Value of the named attribute.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .as_deref()?
            .iter()
            .find(|p| p.key == key)
            .map(|p| p.value.as_str())
    }
}

/// Query of `GET /api/client/get/list`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientListRequest {
    /// Only clients of this developer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub developer: Option<String>,
    /// Start index, inclusive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<i64>,
    /// End index, exclusive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<i64>,
}

impl ClientListRequest {
    /// Lists the clients in `[start, end)`.
    #[must_use]
    pub fn range(start: i64, end: i64) -> Self {
        Self {
            developer: None,
            start: Some(start),
            end: Some(end),
        }
    }
}

impl ApiRequest for ClientListRequest {
    type Response = ClientListResponse;
    const NAME: &'static str = "ClientListRequest";

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> Cow<'static, str> {
        Cow::Borrowed("/api/client/get/list")
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        push_query(&mut query, "developer", self.developer.as_deref());
        push_query(&mut query, "start", self.start);
        push_query(&mut query, "end", self.end);
        query
    }
}

/// Response of `GET /api/client/get/list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientListResponse {
    /// Start index, inclusive.
    #[serde(default, skip_serializing_if = "is_default")]
    pub start: i64,
    /// End index, exclusive.
    #[serde(default = "default_end", skip_serializing_if = "is_default_end")]
    pub end: i64,
    /// Developer the list was filtered by.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub developer: Option<String>,
    /// Total number of clients.
    #[serde(default, skip_serializing_if = "is_default")]
    pub total_count: i64,
    /// Clients in the range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clients: Option<Vec<Client>>,
}

/// Request to `GET /api/client/secret/refresh/{clientIdentifier}`.
///
/// Asks the service to generate a new secret for the client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientSecretRefreshRequest {
    /// Client ID or alias; path parameter (mandatory).
    #[serde(skip)]
    pub client_identifier: String,
}

impl ClientSecretRefreshRequest {
    /// Creates a request.
    #[must_use]
    pub fn new(client_identifier: impl Into<String>) -> Self {
        Self {
            client_identifier: client_identifier.into(),
        }
    }
}

impl ApiRequest for ClientSecretRefreshRequest {
    type Response = ClientSecretRefreshResponse;
    const NAME: &'static str = "ClientSecretRefreshRequest";

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> Cow<'static, str> {
        Cow::Owned(format!("/api/client/secret/refresh/{}", self.client_identifier))
    }

    fn validate(&self) -> DtoResult<()> {
        require(Self::NAME, "clientIdentifier", &self.client_identifier)
    }
}

/// Response of `/api/client/secret/refresh/{clientIdentifier}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientSecretRefreshResponse {
    /// Result code and message.
    #[serde(flatten)]
    pub result: ApiResponse,
    /// Generated secret.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_client_secret: Option<String>,
    /// Replaced secret.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_client_secret: Option<String>,
}

/// Request to `/api/client/secret/update/{clientIdentifier}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientSecretUpdateRequest {
    /// Client ID or alias; path parameter (mandatory).
    #[serde(skip)]
    pub client_identifier: String,
    /// New secret (mandatory).
    pub client_secret: String,
}

impl ClientSecretUpdateRequest {
    /// Creates a request.
    #[must_use]
    pub fn new(client_identifier: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_identifier: client_identifier.into(),
            client_secret: client_secret.into(),
        }
    }
}

impl ApiRequest for ClientSecretUpdateRequest {
    type Response = ClientSecretUpdateResponse;
    const NAME: &'static str = "ClientSecretUpdateRequest";

    fn path(&self) -> Cow<'static, str> {
        Cow::Owned(format!("/api/client/secret/update/{}", self.client_identifier))
    }

    fn validate(&self) -> DtoResult<()> {
        require(Self::NAME, "clientIdentifier", &self.client_identifier)?;
        require(Self::NAME, "clientSecret", &self.client_secret)
    }
}

/// Response of `/api/client/secret/update/{clientIdentifier}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientSecretUpdateResponse {
    /// Result code and message.
    #[serde(flatten)]
    pub result: ApiResponse,
    /// The secret now in effect.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_client_secret: Option<String>,
    /// Replaced secret.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_client_secret: Option<String>,
}

/// Request to `/api/client/authorization/get/list`.
///
/// Lists the clients an end-user has authorized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientAuthorizationGetListRequest {
    /// Subject of the end-user (mandatory).
    pub subject: String,
    /// Only clients of this developer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub developer: Option<String>,
    /// Start index, inclusive.
    #[serde(default, skip_serializing_if = "is_default")]
    pub start: i64,
    /// End index, exclusive.
    #[serde(default = "default_end", skip_serializing_if = "is_default_end")]
    pub end: i64,
}

impl ClientAuthorizationGetListRequest {
    /// Creates a request for the first page.
    #[must_use]
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            developer: None,
            start: 0,
            end: default_end(),
        }
    }
}

impl ApiRequest for ClientAuthorizationGetListRequest {
    type Response = AuthorizedClientListResponse;
    const NAME: &'static str = "ClientAuthorizationGetListRequest";

    fn path(&self) -> Cow<'static, str> {
        Cow::Borrowed("/api/client/authorization/get/list")
    }

    fn validate(&self) -> DtoResult<()> {
        require(Self::NAME, "subject", &self.subject)
    }
}

/// Response of `/api/client/authorization/get/list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizedClientListResponse {
    /// Start index, inclusive.
    #[serde(default, skip_serializing_if = "is_default")]
    pub start: i64,
    /// End index, exclusive.
    #[serde(default = "default_end", skip_serializing_if = "is_default_end")]
    pub end: i64,
    /// Developer the list was filtered by.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub developer: Option<String>,
    /// Total number of authorized clients.
    #[serde(default, skip_serializing_if = "is_default")]
    pub total_count: i64,
    /// Clients in the range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clients: Option<Vec<Client>>,
    /// Subject of the end-user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
}

/// Request to `/api/client/authorization/update/{clientId}`.
///
/// Replaces the scopes of every access token the end-user granted the client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientAuthorizationUpdateRequest {
    /// Client ID; path parameter.
    #[serde(skip)]
    pub client_id: i64,
    /// Subject of the end-user (mandatory).
    pub subject: String,
    /// New scopes; absent leaves them unchanged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scopes: Option<Vec<String>>,
}

impl ClientAuthorizationUpdateRequest {
    /// Creates a request.
    #[must_use]
    pub fn new(client_id: i64, subject: impl Into<String>) -> Self {
        Self {
            client_id,
            subject: subject.into(),
            scopes: None,
        }
    }

    /// Sets the new scopes.
    #[must_use]
    pub fn with_scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scopes = Some(scopes.into_iter().map(Into::into).collect());
        self
    }
}

impl ApiRequest for ClientAuthorizationUpdateRequest {
    type Response = ApiResponse;
    const NAME: &'static str = "ClientAuthorizationUpdateRequest";

    fn path(&self) -> Cow<'static, str> {
        Cow::Owned(format!("/api/client/authorization/update/{}", self.client_id))
    }

    fn validate(&self) -> DtoResult<()> {
        require(Self::NAME, "subject", &self.subject)
    }
}

/// Request to `/api/client/authorization/delete/{clientId}`.
///
/// Revokes every access token the end-user granted the client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientAuthorizationDeleteRequest {
    /// Client ID; path parameter.
    #[serde(skip)]
    pub client_id: i64,
    /// Subject of the end-user (mandatory).
    pub subject: String,
}

impl ClientAuthorizationDeleteRequest {
    /// Creates a request.
    #[must_use]
    pub fn new(client_id: i64, subject: impl Into<String>) -> Self {
        Self {
            client_id,
            subject: subject.into(),
        }
    }
}

impl ApiRequest for ClientAuthorizationDeleteRequest {
    type Response = ApiResponse;
    const NAME: &'static str = "ClientAuthorizationDeleteRequest";

    fn path(&self) -> Cow<'static, str> {
        Cow::Owned(format!("/api/client/authorization/delete/{}", self.client_id))
    }

    fn validate(&self) -> DtoResult<()> {
        require(Self::NAME, "subject", &self.subject)
    }
}

/// Request to `/api/client/granted_scopes/get/{clientId}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrantedScopesGetRequest {
    /// Client ID; path parameter.
    #[serde(skip)]
    pub client_id: i64,
    /// Subject of the end-user (mandatory).
    pub subject: String,
}

impl GrantedScopesGetRequest {
    /// Creates a request.
    #[must_use]
    pub fn new(client_id: i64, subject: impl Into<String>) -> Self {
        Self {
            client_id,
            subject: subject.into(),
        }
    }
}

impl ApiRequest for GrantedScopesGetRequest {
    type Response = GrantedScopesGetResponse;
    const NAME: &'static str = "GrantedScopesGetRequest";

    fn path(&self) -> Cow<'static, str> {
        Cow::Owned(format!("/api/client/granted_scopes/get/{}", self.client_id))
    }

    fn validate(&self) -> DtoResult<()> {
        require(Self::NAME, "subject", &self.subject)
    }
}

/// Response of `/api/client/granted_scopes/get/{clientId}`.
///
/// `latest_granted_scopes` and `merged_granted_scopes` are `None` when no
/// grant record exists, and `Some(vec![])` when a record exists with no
/// scopes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrantedScopesGetResponse {
    /// Result code and message.
    #[serde(flatten)]
    pub result: ApiResponse,
    /// API key of the service.
    #[serde(default, skip_serializing_if = "is_default")]
    pub service_api_key: i64,
    /// Client ID.
    #[serde(default, skip_serializing_if = "is_default")]
    pub client_id: i64,
    /// Subject of the end-user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Scopes granted by the last authorization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_granted_scopes: Option<Vec<String>>,
    /// Union of every scope granted so far.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merged_granted_scopes: Option<Vec<String>>,
    /// Last modification of the record, in milliseconds since the epoch.
    #[serde(default, skip_serializing_if = "is_default")]
    pub modified_at: i64,
}

impl GrantedScopesGetResponse {
    /// Whether the server holds a grant record.
    #[must_use]
    pub fn has_record(&self) -> bool {
        self.latest_granted_scopes.is_some()
    }
}
