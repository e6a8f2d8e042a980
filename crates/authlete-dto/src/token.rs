//! Token endpoint messages and the token management APIs.

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::api::{ApiRequest, require, require_some};
use crate::common::{ApiResponse, Property, is_default, millis_to_utc};
use crate::error::DtoResult;
use crate::reply::{Action, Directive, interpret};
use crate::types::GrantType;

/// Request to `/api/auth/token`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRequest {
    /// Form parameters of the token request (mandatory).
    pub parameters: String,

    /// Client ID from the `Authorization` header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,

    /// Client secret from the `Authorization` header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,

    /// Client certificate in PEM format (mutual TLS).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_certificate: Option<String>,

    /// Intermediate certificates of the client certificate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_certificate_path: Option<Vec<String>>,

    /// Properties attached to the issued tokens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<Property>>,

    /// `DPoP` header value (RFC 9449).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dpop: Option<String>,

    /// HTTP method of the token request, for `DPoP` validation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub htm: Option<String>,

    /// URL of the token endpoint, for `DPoP` validation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub htu: Option<String>,
}

impl TokenRequest {
    /// Creates a request from the form body.
    #[must_use]
    pub fn new(parameters: impl Into<String>) -> Self {
        Self {
            parameters: parameters.into(),
            ..Self::default()
        }
    }

    /// Sets client credentials taken from HTTP Basic authentication.
    #[must_use]
    pub fn with_client_credentials(
        mut self,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        self.client_id = Some(client_id.into());
        self.client_secret = Some(client_secret.into());
        self
    }
}

impl ApiRequest for TokenRequest {
    type Response = TokenResponse;
    const NAME: &'static str = "TokenRequest";

    fn path(&self) -> Cow<'static, str> {
        Cow::Borrowed("/api/auth/token")
    }

    fn validate(&self) -> DtoResult<()> {
        require(Self::NAME, "parameters", &self.parameters)
    }
}

wire_enum! {
    /// Next step after `/api/auth/token`.
    pub enum TokenAction {
        /// Client authentication failed; `401 Unauthorized`.
        InvalidClient = "INVALID_CLIENT",
        /// `500 Internal Server Error`.
        InternalServerError = "INTERNAL_SERVER_ERROR",
        /// `400 Bad Request`.
        BadRequest = "BAD_REQUEST",
        /// Password grant: check `username`/`password`, then call the issue or
        /// fail API.
        Password = "PASSWORD",
        /// Tokens issued; `200 OK`.
        Ok = "OK",
    }
}

impl Action for TokenAction {
    fn directive(&self) -> Option<Directive> {
        match self {
            Self::InvalidClient => Some(Directive::json(StatusCode::UNAUTHORIZED)),
            Self::InternalServerError => Some(Directive::json(StatusCode::INTERNAL_SERVER_ERROR)),
            Self::BadRequest => Some(Directive::json(StatusCode::BAD_REQUEST)),
            Self::Password => None,
            Self::Ok => Some(Directive::json(StatusCode::OK)),
        }
    }
}

/// Response from `/api/auth/token`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    /// Result code and message.
    #[serde(flatten)]
    pub result: ApiResponse,

    /// Next step.
    pub action: TokenAction,

    /// Content for the client.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_content: Option<String>,

    /// `username` of a password grant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// `password` of a password grant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Ticket for the issue and fail APIs (password grant).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket: Option<String>,

    /// Issued access token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,

    /// Access token expiry in milliseconds since the epoch.
    #[serde(default, skip_serializing_if = "is_default")]
    pub access_token_expires_at: i64,

    /// Access token lifetime in seconds.
    #[serde(default, skip_serializing_if = "is_default")]
    pub access_token_duration: i64,

    /// Issued refresh token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,

    /// Refresh token expiry in milliseconds since the epoch.
    #[serde(default, skip_serializing_if = "is_default")]
    pub refresh_token_expires_at: i64,

    /// Refresh token lifetime in seconds.
    #[serde(default, skip_serializing_if = "is_default")]
    pub refresh_token_duration: i64,

    /// Issued ID token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_token: Option<String>,

    /// Grant type of the request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grant_type: Option<GrantType>,

    /// Client ID.
    #[serde(default, skip_serializing_if = "is_default")]
    pub client_id: i64,

    /// Client ID alias.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id_alias: Option<String>,

    /// Whether the alias was used in the request.
    #[serde(default, skip_serializing_if = "is_default")]
    pub client_id_alias_used: bool,

    /// Subject of the resource owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// Granted scopes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scopes: Option<Vec<String>>,

    /// Properties attached to the token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<Property>>,

    /// Access token in JWT form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jwt_access_token: Option<String>,

    /// Resources named in the token request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<String>>,

    /// Resources the access token is bound to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token_resources: Option<Vec<String>>,
}

impl TokenResponse {
    /// Access token expiry.
    #[must_use]
    pub fn access_token_expiry(&self) -> Option<DateTime<Utc>> {
        millis_to_utc(self.access_token_expires_at)
    }

    /// Refresh token expiry.
    #[must_use]
    pub fn refresh_token_expiry(&self) -> Option<DateTime<Utc>> {
        millis_to_utc(self.refresh_token_expires_at)
    }
}

wire_enum! {
    /// Why a password grant was refused.
    pub enum TokenFailReason {
        /// Unknown reason; `error=server_error`.
        Unknown = "UNKNOWN",
        /// Wrong username or password; `error=invalid_grant`.
        InvalidResourceOwnerCredentials = "INVALID_RESOURCE_OWNER_CREDENTIALS",
        /// A resource indicator is unacceptable; `error=invalid_target`.
        InvalidTarget = "INVALID_TARGET",
    }
}

/// Request to `/api/auth/token/fail`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenFailRequest {
    /// Ticket from `/api/auth/token` (mandatory).
    pub ticket: String,

    /// Reason of the failure (mandatory).
    pub reason: TokenFailReason,
}

impl TokenFailRequest {
    /// Creates a request.
    #[must_use]
    pub fn new(ticket: impl Into<String>, reason: TokenFailReason) -> Self {
        Self {
            ticket: ticket.into(),
            reason,
        }
    }
}

impl ApiRequest for TokenFailRequest {
    type Response = TokenFailResponse;
    const NAME: &'static str = "TokenFailRequest";

    fn path(&self) -> Cow<'static, str> {
        Cow::Borrowed("/api/auth/token/fail")
    }

    fn validate(&self) -> DtoResult<()> {
        require(Self::NAME, "ticket", &self.ticket)
    }
}

wire_enum! {
    /// Next step after `/api/auth/token/fail`.
    pub enum TokenFailAction {
        /// `500 Internal Server Error`.
        InternalServerError = "INTERNAL_SERVER_ERROR",
        /// `400 Bad Request`.
        BadRequest = "BAD_REQUEST",
    }
}

impl Action for TokenFailAction {
    fn directive(&self) -> Option<Directive> {
        Some(match self {
            Self::InternalServerError => Directive::json(StatusCode::INTERNAL_SERVER_ERROR),
            Self::BadRequest => Directive::json(StatusCode::BAD_REQUEST),
        })
    }
}

/// Response from `/api/auth/token/fail`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenFailResponse {
    /// Result code and message.
    #[serde(flatten)]
    pub result: ApiResponse,

    /// Next step.
    pub action: TokenFailAction,

    /// Content for the client.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_content: Option<String>,
}

/// Request to `/api/auth/token/issue`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenIssueRequest {
    /// Ticket from `/api/auth/token` (mandatory).
    pub ticket: String,

    /// Subject of the authenticated resource owner (mandatory).
    pub subject: String,

    /// Properties attached to the issued tokens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<Property>>,
}

impl TokenIssueRequest {
    /// Creates a request.
    #[must_use]
    pub fn new(ticket: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            ticket: ticket.into(),
            subject: subject.into(),
            properties: None,
        }
    }
}

impl ApiRequest for TokenIssueRequest {
    type Response = TokenIssueResponse;
    const NAME: &'static str = "TokenIssueRequest";

    fn path(&self) -> Cow<'static, str> {
        Cow::Borrowed("/api/auth/token/issue")
    }

    fn validate(&self) -> DtoResult<()> {
        require(Self::NAME, "ticket", &self.ticket)?;
        require(Self::NAME, "subject", &self.subject)
    }
}

wire_enum! {
    /// Next step after `/api/auth/token/issue`.
    pub enum TokenIssueAction {
        /// `500 Internal Server Error`.
        InternalServerError = "INTERNAL_SERVER_ERROR",
        /// `200 OK`.
        Ok = "OK",
    }
}

impl Action for TokenIssueAction {
    fn directive(&self) -> Option<Directive> {
        Some(match self {
            Self::InternalServerError => Directive::json(StatusCode::INTERNAL_SERVER_ERROR),
            Self::Ok => Directive::json(StatusCode::OK),
        })
    }
}

/// Response from `/api/auth/token/issue`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenIssueResponse {
    /// Result code and message.
    #[serde(flatten)]
    pub result: ApiResponse,

    /// Next step.
    pub action: TokenIssueAction,

    /// Content for the client.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_content: Option<String>,

    /// Issued access token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,

    /// Access token expiry in milliseconds since the epoch.
    #[serde(default, skip_serializing_if = "is_default")]
    pub access_token_expires_at: i64,

    /// Access token lifetime in seconds.
    #[serde(default, skip_serializing_if = "is_default")]
    pub access_token_duration: i64,

    /// Issued refresh token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,

    /// Refresh token expiry in milliseconds since the epoch.
    #[serde(default, skip_serializing_if = "is_default")]
    pub refresh_token_expires_at: i64,

    /// Refresh token lifetime in seconds.
    #[serde(default, skip_serializing_if = "is_default")]
    pub refresh_token_duration: i64,

    /// Client ID.
    #[serde(default, skip_serializing_if = "is_default")]
    pub client_id: i64,

    /// Subject of the resource owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// Granted scopes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scopes: Option<Vec<String>>,

    /// Properties attached to the token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<Property>>,

    /// Access token in JWT form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jwt_access_token: Option<String>,
}

/// Request to `/api/auth/token/create`.
///
/// Creates a token directly, without an end-user or client round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenCreateRequest {
    /// Grant type the token is created under (mandatory).
    pub grant_type: GrantType,

    /// Client ID (mandatory).
    pub client_id: i64,

    /// Subject; mandatory unless `grantType` is `CLIENT_CREDENTIALS`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// Scopes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scopes: Option<Vec<String>>,

    /// Access token lifetime in seconds; `0` uses the service default.
    #[serde(default, skip_serializing_if = "is_default")]
    pub access_token_duration: i64,

    /// Refresh token lifetime in seconds; `0` uses the service default.
    #[serde(default, skip_serializing_if = "is_default")]
    pub refresh_token_duration: i64,

    /// Properties attached to the token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<Property>>,

    /// Whether the scopes are checked against the client's extension.
    #[serde(default, skip_serializing_if = "is_default")]
    pub client_id_alias_used: bool,

    /// Access token value to use instead of a generated one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,

    /// Refresh token value to use instead of a generated one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

impl TokenCreateRequest {
    /// Creates a request.
    #[must_use]
    pub fn new(grant_type: GrantType, client_id: i64) -> Self {
        Self {
            grant_type,
            client_id,
            subject: None,
            scopes: None,
            access_token_duration: 0,
            refresh_token_duration: 0,
            properties: None,
            client_id_alias_used: false,
            access_token: None,
            refresh_token: None,
        }
    }

    /// Sets the subject.
    #[must_use]
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Sets the scopes.
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

impl ApiRequest for TokenCreateRequest {
    type Response = TokenCreateResponse;
    const NAME: &'static str = "TokenCreateRequest";

    fn path(&self) -> Cow<'static, str> {
        Cow::Borrowed("/api/auth/token/create")
    }

    fn validate(&self) -> DtoResult<()> {
        if self.grant_type == GrantType::ClientCredentials {
            Ok(())
        } else {
            require_some(Self::NAME, "subject", self.subject.as_deref())
        }
    }
}

wire_enum! {
    /// Outcome of `/api/auth/token/create`.
    pub enum TokenCreateAction {
        /// `500 Internal Server Error`.
        InternalServerError = "INTERNAL_SERVER_ERROR",
        /// `400 Bad Request`.
        BadRequest = "BAD_REQUEST",
        /// The service or client may not create tokens this way;
        /// `403 Forbidden`.
        Forbidden = "FORBIDDEN",
        /// Token created; `200 OK`.
        Ok = "OK",
    }
}

impl Action for TokenCreateAction {
    fn directive(&self) -> Option<Directive> {
        Some(match self {
            Self::InternalServerError => Directive::json(StatusCode::INTERNAL_SERVER_ERROR),
            Self::BadRequest => Directive::json(StatusCode::BAD_REQUEST),
            Self::Forbidden => Directive::json(StatusCode::FORBIDDEN),
            Self::Ok => Directive::json(StatusCode::OK),
        })
    }
}

/// Response from `/api/auth/token/create`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenCreateResponse {
    /// Result code and message.
    #[serde(flatten)]
    pub result: ApiResponse,

    /// Outcome.
    pub action: TokenCreateAction,

    /// Grant type of the token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grant_type: Option<GrantType>,

    /// Client ID.
    #[serde(default, skip_serializing_if = "is_default")]
    pub client_id: i64,

    /// Subject.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// Scopes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scopes: Option<Vec<String>>,

    /// Created access token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,

    /// Created refresh token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,

    /// Access token expiry in milliseconds since the epoch.
    #[serde(default, skip_serializing_if = "is_default")]
    pub expires_at: i64,

    /// Access token lifetime in seconds.
    #[serde(default, skip_serializing_if = "is_default")]
    pub expires_in: i64,

    /// Token type, e.g. `Bearer`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,

    /// Properties attached to the token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<Property>>,

    /// Access token in JWT form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jwt_access_token: Option<String>,
}

/// Request to `/api/auth/token/update`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenUpdateRequest {
    /// Access token to update (mandatory).
    pub access_token: String,

    /// New expiry in milliseconds since the epoch; `0` leaves it unchanged.
    #[serde(default, skip_serializing_if = "is_default")]
    pub access_token_expires_at: i64,

    /// New scopes; absent leaves them unchanged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scopes: Option<Vec<String>>,

    /// New properties; absent leaves them unchanged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<Property>>,

    /// Whether updating scopes also recomputes the expiry.
    #[serde(default, skip_serializing_if = "is_default")]
    pub access_token_expires_at_updated_on_scope_update: bool,
}

impl TokenUpdateRequest {
    /// Creates a request.
    #[must_use]
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            ..Self::default()
        }
    }
}

impl ApiRequest for TokenUpdateRequest {
    type Response = TokenUpdateResponse;
    const NAME: &'static str = "TokenUpdateRequest";

    fn path(&self) -> Cow<'static, str> {
        Cow::Borrowed("/api/auth/token/update")
    }

    fn validate(&self) -> DtoResult<()> {
        require(Self::NAME, "accessToken", &self.access_token)
    }
}

wire_enum! {
    /// Outcome of `/api/auth/token/update`.
    pub enum TokenUpdateAction {
        /// `500 Internal Server Error`.
        InternalServerError = "INTERNAL_SERVER_ERROR",
        /// `400 Bad Request`.
        BadRequest = "BAD_REQUEST",
        /// The token may not be updated; `403 Forbidden`.
        ///
        /// Older catalogs spell this `FORBIDEN`; that spelling is accepted on
        /// input and never sent.
        Forbidden = "FORBIDDEN" | "FORBIDEN",
        /// No such token; `404 Not Found`.
        NotFound = "NOT_FOUND",
        /// Token updated; `200 OK`.
        Ok = "OK",
    }
}

impl Action for TokenUpdateAction {
    fn directive(&self) -> Option<Directive> {
        Some(match self {
            Self::InternalServerError => Directive::json(StatusCode::INTERNAL_SERVER_ERROR),
            Self::BadRequest => Directive::json(StatusCode::BAD_REQUEST),
            Self::Forbidden => Directive::json(StatusCode::FORBIDDEN),
            Self::NotFound => Directive::json(StatusCode::NOT_FOUND),
            Self::Ok => Directive::json(StatusCode::OK),
        })
    }
}

/// Response from `/api/auth/token/update`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenUpdateResponse {
    /// Result code and message.
    #[serde(flatten)]
    pub result: ApiResponse,

    /// Outcome.
    pub action: TokenUpdateAction,

    /// The updated access token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,

    /// Expiry in milliseconds since the epoch.
    #[serde(default, skip_serializing_if = "is_default")]
    pub access_token_expires_at: i64,

    /// Scopes after the update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scopes: Option<Vec<String>>,

    /// Properties after the update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<Property>>,
}

interpret! {
    TokenResponse => TokenAction,
    TokenFailResponse => TokenFailAction,
    TokenIssueResponse => TokenIssueAction,
}

interpret! {
    without content:
    TokenCreateResponse => TokenCreateAction,
    TokenUpdateResponse => TokenUpdateAction,
}
