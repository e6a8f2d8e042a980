//! Authorization endpoint messages.
//!
//! The flow is: pass the query string of an authorization request to
//! `/api/auth/authorization`; on `INTERACTION` show a login/consent page,
//! then call `/api/auth/authorization/issue` or
//! `/api/auth/authorization/fail` with the `ticket` from the first response.

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::api::{ApiRequest, require};
use crate::client::Client;
use crate::common::{ApiResponse, Property, Scope, is_default, millis_to_utc};
use crate::error::DtoResult;
use crate::reply::{Action, Directive, interpret};
use crate::service::Service;
use crate::types::{Display, Prompt};

/// Request to `/api/auth/authorization`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizationRequest {
    /// Request parameters in `application/x-www-form-urlencoded` format
    /// (mandatory).
    pub parameters: String,
}

impl AuthorizationRequest {
    /// Creates a request from a query string.
    #[must_use]
    pub fn new(parameters: impl Into<String>) -> Self {
        Self {
            parameters: parameters.into(),
        }
    }
}

impl ApiRequest for AuthorizationRequest {
    type Response = AuthorizationResponse;
    const NAME: &'static str = "AuthorizationRequest";

    fn path(&self) -> Cow<'static, str> {
        Cow::Borrowed("/api/auth/authorization")
    }

    fn validate(&self) -> DtoResult<()> {
        require(Self::NAME, "parameters", &self.parameters)
    }
}

wire_enum! {
    /// Next step after `/api/auth/authorization`.
    pub enum AuthorizationAction {
        /// Server-side error; `500 Internal Server Error`.
        InternalServerError = "INTERNAL_SERVER_ERROR",
        /// Request is broken and the redirect URI cannot be trusted;
        /// `400 Bad Request`.
        BadRequest = "BAD_REQUEST",
        /// Send an error to the client by redirect; `302 Found`.
        Location = "LOCATION",
        /// Send an error to the client by form post; `200 OK` with HTML.
        Form = "FORM",
        /// `prompt=none`: authenticate without interaction, then call the
        /// issue or fail API.
        NoInteraction = "NO_INTERACTION",
        /// Show a login/consent page, then call the issue or fail API.
        Interaction = "INTERACTION",
    }
}

impl Action for AuthorizationAction {
    fn directive(&self) -> Option<Directive> {
        match self {
            Self::InternalServerError => Some(Directive::json(StatusCode::INTERNAL_SERVER_ERROR)),
            Self::BadRequest => Some(Directive::json(StatusCode::BAD_REQUEST)),
            Self::Location => Some(Directive::redirect()),
            Self::Form => Some(Directive::form()),
            Self::NoInteraction | Self::Interaction => None,
        }
    }
}

/// Response from `/api/auth/authorization`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizationResponse {
    /// Result code and message.
    #[serde(flatten)]
    pub result: ApiResponse,

    /// Next step.
    pub action: AuthorizationAction,

    /// The client that made the request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<Client>,

    /// The service the request was made to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<Service>,

    /// `display` parameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<Display>,

    /// `max_age` parameter in seconds.
    #[serde(default, skip_serializing_if = "is_default")]
    pub max_age: i64,

    /// Requested scopes, as `Scope` records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scopes: Option<Vec<Scope>>,

    /// `ui_locales` supported by the service, in preference order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ui_locales: Option<Vec<String>>,

    /// `claims_locales` supported by the service, in preference order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claims_locales: Option<Vec<String>>,

    /// Claims the client wants in the ID token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claims: Option<Vec<String>>,

    /// Whether an ACR in `acrs` is marked essential.
    #[serde(default, skip_serializing_if = "is_default")]
    pub acr_essential: bool,

    /// Whether the client ID alias was used in the request.
    #[serde(default, skip_serializing_if = "is_default")]
    pub client_id_alias_used: bool,

    /// Requested ACR values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acrs: Option<Vec<String>>,

    /// Subject the client requires (from `id_token_hint` or `claims`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// `login_hint` parameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login_hint: Option<String>,

    /// `prompt` values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompts: Option<Vec<Prompt>>,

    /// Prompt with the lowest interaction level among `prompts`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lowest_prompt: Option<Prompt>,

    /// Payload of the request object, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_object_payload: Option<String>,

    /// `id_token` member of the `claims` parameter, as JSON.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_token_claims: Option<String>,

    /// `userinfo` member of the `claims` parameter, as JSON.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_info_claims: Option<String>,

    /// Resource indicators (RFC 8707).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<String>>,

    /// `purpose` parameter (OIDC4IDA).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,

    /// Content for the client for `BAD_REQUEST`, `LOCATION`, `FORM` and
    /// `INTERNAL_SERVER_ERROR`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_content: Option<String>,

    /// Ticket for the issue and fail APIs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket: Option<String>,
}

impl AuthorizationResponse {
    /// Whether the end-user must be shown a page.
    #[must_use]
    pub fn needs_interaction(&self) -> bool {
        self.action == AuthorizationAction::Interaction
    }

    /// Names of the requested scopes.
    #[must_use]
    pub fn scope_names(&self) -> Vec<&str> {
        self.scopes
            .iter()
            .flatten()
            .map(|s| s.name.as_str())
            .collect()
    }
}

wire_enum! {
    /// Why the authorization request could not be honored.
    pub enum AuthorizationFailReason {
        /// Unknown reason; `error=server_error`.
        Unknown = "UNKNOWN",
        /// `prompt=none` but nobody is logged in; `error=login_required`.
        NotLoggedIn = "NOT_LOGGED_IN",
        /// `max_age` given but the auth time is not kept;
        /// `error=login_required`.
        MaxAgeNotSupported = "MAX_AGE_NOT_SUPPORTED",
        /// Authentication is older than `max_age`; `error=login_required`.
        ExceedsMaxAge = "EXCEEDS_MAX_AGE",
        /// Logged-in user differs from the required subject;
        /// `error=login_required`.
        DifferentSubject = "DIFFERENT_SUBJECT",
        /// No essential ACR satisfied; `error=login_required`.
        AcrNotSatisfied = "ACR_NOT_SATISFIED",
        /// The end-user denied the request; `error=access_denied`.
        Denied = "DENIED",
        /// Server error; `error=server_error`.
        ServerError = "SERVER_ERROR",
        /// The end-user failed to authenticate; `error=login_required`.
        NotAuthenticated = "NOT_AUTHENTICATED",
        /// `prompt=none` but an account must be chosen;
        /// `error=account_selection_required`.
        AccountSelectionRequired = "ACCOUNT_SELECTION_REQUIRED",
        /// `prompt=none` but consent is required; `error=consent_required`.
        ConsentRequired = "CONSENT_REQUIRED",
        /// `prompt=none` but interaction is required;
        /// `error=interaction_required`.
        InteractionRequired = "INTERACTION_REQUIRED",
        /// A resource indicator is unacceptable; `error=invalid_target`.
        InvalidTarget = "INVALID_TARGET",
    }
}

/// Request to `/api/auth/authorization/fail`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizationFailRequest {
    /// Ticket from `/api/auth/authorization` (mandatory).
    pub ticket: String,

    /// Reason of the failure (mandatory).
    pub reason: AuthorizationFailReason,

    /// Custom `error_description`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl AuthorizationFailRequest {
    /// Creates a request.
    #[must_use]
    pub fn new(ticket: impl Into<String>, reason: AuthorizationFailReason) -> Self {
        Self {
            ticket: ticket.into(),
            reason,
            description: None,
        }
    }

    /// Sets the error description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl ApiRequest for AuthorizationFailRequest {
    type Response = AuthorizationFailResponse;
    const NAME: &'static str = "AuthorizationFailRequest";

    fn path(&self) -> Cow<'static, str> {
        Cow::Borrowed("/api/auth/authorization/fail")
    }

    fn validate(&self) -> DtoResult<()> {
        require(Self::NAME, "ticket", &self.ticket)
    }
}

wire_enum! {
    /// Next step after `/api/auth/authorization/fail`.
    pub enum AuthorizationFailAction {
        /// `500 Internal Server Error`.
        InternalServerError = "INTERNAL_SERVER_ERROR",
        /// `400 Bad Request`.
        BadRequest = "BAD_REQUEST",
        /// `302 Found` to the client.
        Location = "LOCATION",
        /// `200 OK` with an auto-submitting form.
        Form = "FORM",
    }
}

impl Action for AuthorizationFailAction {
    fn directive(&self) -> Option<Directive> {
        Some(match self {
            Self::InternalServerError => Directive::json(StatusCode::INTERNAL_SERVER_ERROR),
            Self::BadRequest => Directive::json(StatusCode::BAD_REQUEST),
            Self::Location => Directive::redirect(),
            Self::Form => Directive::form(),
        })
    }
}

/// Response from `/api/auth/authorization/fail`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizationFailResponse {
    /// Result code and message.
    #[serde(flatten)]
    pub result: ApiResponse,

    /// Next step.
    pub action: AuthorizationFailAction,

    /// Content for the client.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_content: Option<String>,
}

/// Request to `/api/auth/authorization/issue`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizationIssueRequest {
    /// Ticket from `/api/auth/authorization` (mandatory).
    pub ticket: String,

    /// Subject of the authenticated end-user (mandatory unless the
    /// response type is `none`).
    pub subject: String,

    /// Authentication time in seconds since the epoch.
    #[serde(default, skip_serializing_if = "is_default")]
    pub auth_time: i64,

    /// ACR satisfied by the authentication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acr: Option<String>,

    /// Claims for the ID token, as a JSON object string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claims: Option<String>,

    /// Properties attached to the issued tokens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<Property>>,

    /// Scopes to grant instead of the requested ones.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scopes: Option<Vec<String>>,

    /// Value of `sub` in the ID token, when it differs from `subject`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
}

impl AuthorizationIssueRequest {
    /// Creates a request.
    #[must_use]
    pub fn new(ticket: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            ticket: ticket.into(),
            subject: subject.into(),
            ..Self::default()
        }
    }

    /// Sets the authentication time.
    #[must_use]
    pub fn with_auth_time(mut self, auth_time: i64) -> Self {
        self.auth_time = auth_time;
        self
    }

    /// Sets the ID token claims.
    #[must_use]
    pub fn with_claims(mut self, claims: impl Into<String>) -> Self {
        self.claims = Some(claims.into());
        self
    }
}

impl ApiRequest for AuthorizationIssueRequest {
    type Response = AuthorizationIssueResponse;
    const NAME: &'static str = "AuthorizationIssueRequest";

    fn path(&self) -> Cow<'static, str> {
        Cow::Borrowed("/api/auth/authorization/issue")
    }

    fn validate(&self) -> DtoResult<()> {
        require(Self::NAME, "ticket", &self.ticket)
    }
}

wire_enum! {
    /// Next step after `/api/auth/authorization/issue`.
    pub enum AuthorizationIssueAction {
        /// `500 Internal Server Error`.
        InternalServerError = "INTERNAL_SERVER_ERROR",
        /// `400 Bad Request`.
        BadRequest = "BAD_REQUEST",
        /// `302 Found` to the client.
        Location = "LOCATION",
        /// `200 OK` with an auto-submitting form.
        Form = "FORM",
    }
}

impl Action for AuthorizationIssueAction {
    fn directive(&self) -> Option<Directive> {
        Some(match self {
            Self::InternalServerError => Directive::json(StatusCode::INTERNAL_SERVER_ERROR),
            Self::BadRequest => Directive::json(StatusCode::BAD_REQUEST),
            Self::Location => Directive::redirect(),
            Self::Form => Directive::form(),
        })
    }
}

/// Response from `/api/auth/authorization/issue`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizationIssueResponse {
    /// Result code and message.
    #[serde(flatten)]
    pub result: ApiResponse,

    /// Next step.
    pub action: AuthorizationIssueAction,

    /// Content for the client.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_content: Option<String>,

    /// Issued access token (implicit and hybrid flows).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,

    /// Access token expiry in milliseconds since the epoch.
    #[serde(default, skip_serializing_if = "is_default")]
    pub access_token_expires_at: i64,

    /// Access token lifetime in seconds.
    #[serde(default, skip_serializing_if = "is_default")]
    pub access_token_duration: i64,

    /// Issued ID token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_token: Option<String>,

    /// Issued authorization code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_code: Option<String>,

    /// Access token in JWT form, if the service issues JWT access tokens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jwt_access_token: Option<String>,
}

impl AuthorizationIssueResponse {
    /// Access token expiry.
    #[must_use]
    pub fn access_token_expiry(&self) -> Option<DateTime<Utc>> {
        millis_to_utc(self.access_token_expires_at)
    }
}

interpret! {
    AuthorizationResponse => AuthorizationAction,
    AuthorizationFailResponse => AuthorizationFailAction,
    AuthorizationIssueResponse => AuthorizationIssueAction,
}
