//! Client Initiated Backchannel Authentication (CIBA).
//!
//! The backchannel authentication endpoint passes the request to
//! `/api/backchannel/authentication`. On `USER_IDENTIFICATION` the server
//! resolves the hint to an end-user, then calls `.../issue` to obtain an
//! `auth_req_id` (or `.../fail`). After authenticating the end-user on the
//! authentication device it reports the result to `.../complete`.

use std::borrow::Cow;

use http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::api::{ApiRequest, require, require_some};
use crate::common::{ApiResponse, Property, Scope, is_default};
use crate::error::DtoResult;
use crate::reply::{Action, Directive, interpret};
use crate::types::{DeliveryMode, UserIdentificationHintType};

/// Request to `/api/backchannel/authentication`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackchannelAuthenticationRequest {
    /// Form body of the backchannel authentication request (mandatory).
    pub parameters: String,

    /// Client ID from the `Authorization` header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,

    /// Client secret from the `Authorization` header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,

    /// Client certificate in PEM format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_certificate: Option<String>,

    /// Intermediate certificates of the client certificate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_certificate_path: Option<Vec<String>>,
}

impl BackchannelAuthenticationRequest {
    /// Creates a request from the form body.
    #[must_use]
    pub fn new(parameters: impl Into<String>) -> Self {
        Self {
            parameters: parameters.into(),
            ..Self::default()
        }
    }
}

impl ApiRequest for BackchannelAuthenticationRequest {
    type Response = BackchannelAuthenticationResponse;
    const NAME: &'static str = "BackchannelAuthenticationRequest";

    fn path(&self) -> Cow<'static, str> {
        Cow::Borrowed("/api/backchannel/authentication")
    }

    fn validate(&self) -> DtoResult<()> {
        require(Self::NAME, "parameters", &self.parameters)
    }
}

wire_enum! {
    /// Next step after `/api/backchannel/authentication`.
    pub enum BackchannelAuthenticationAction {
        /// `500 Internal Server Error`.
        InternalServerError = "INTERNAL_SERVER_ERROR",
        /// `400 Bad Request`.
        BadRequest = "BAD_REQUEST",
        /// Client authentication failed; `401 Unauthorized`.
        Unauthorized = "UNAUTHORIZED",
        /// Resolve the hint to an end-user, then call the issue or fail API.
        UserIdentification = "USER_IDENTIFICATION",
    }
}

impl Action for BackchannelAuthenticationAction {
    fn directive(&self) -> Option<Directive> {
        match self {
            Self::InternalServerError => Some(Directive::json(StatusCode::INTERNAL_SERVER_ERROR)),
            Self::BadRequest => Some(Directive::json(StatusCode::BAD_REQUEST)),
            Self::Unauthorized => Some(Directive::json(StatusCode::UNAUTHORIZED)),
            Self::UserIdentification => None,
        }
    }
}

/// Response from `/api/backchannel/authentication`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackchannelAuthenticationResponse {
    /// Result code and message.
    #[serde(flatten)]
    pub result: ApiResponse,

    /// Next step.
    pub action: BackchannelAuthenticationAction,

    /// Content for the client.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_content: Option<String>,

    /// Client ID.
    #[serde(default, skip_serializing_if = "is_default")]
    pub client_id: i64,

    /// Client ID alias.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id_alias: Option<String>,

    /// Whether the alias was used in the request.
    #[serde(default, skip_serializing_if = "is_default")]
    pub client_id_alias_used: bool,

    /// Client name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,

    /// Token delivery mode of the client.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_mode: Option<DeliveryMode>,

    /// Requested scopes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scopes: Option<Vec<Scope>>,

    /// Claims the `openid` scope implies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claim_names: Option<Vec<String>>,

    /// Client notification token (ping and push modes).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_notification_token: Option<String>,

    /// Requested ACR values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acrs: Option<Vec<String>>,

    /// Which hint identifies the end-user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint_type: Option<UserIdentificationHintType>,

    /// Value of the hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,

    /// `sub` claim of the `id_token_hint`, when that was the hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    /// Binding message to show on both devices.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binding_message: Option<String>,

    /// User code entered on the consumption device.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_code: Option<String>,

    /// Whether the service requires a user code.
    #[serde(default, skip_serializing_if = "is_default")]
    pub user_code_required: bool,

    /// Requested expiry in seconds.
    #[serde(default, skip_serializing_if = "is_default")]
    pub requested_expiry: i64,

    /// `request_context` claim of a signed request object, as JSON.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_context: Option<String>,

    /// Resources named in the request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<String>>,

    /// Non-fatal problems found in the request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<String>>,

    /// Ticket for the issue and fail APIs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket: Option<String>,
}

wire_enum! {
    /// Why the server refused a backchannel authentication request.
    pub enum BackchannelAuthenticationFailReason {
        /// The access of the client is denied; `error=access_denied`.
        AccessDenied = "ACCESS_DENIED",
        /// The hint expired; `error=expired_login_hint_token`.
        ExpiredLoginHintToken = "EXPIRED_LOGIN_HINT_TOKEN",
        /// The binding message is unacceptable; `error=invalid_binding_message`.
        InvalidBindingMessage = "INVALID_BINDING_MESSAGE",
        /// A resource indicator is unacceptable; `error=invalid_target`.
        InvalidTarget = "INVALID_TARGET",
        /// The user code is wrong; `error=invalid_user_code`.
        InvalidUserCode = "INVALID_USER_CODE",
        /// The user code was required but missing; `error=missing_user_code`.
        MissingUserCode = "MISSING_USER_CODE",
        /// Server-side error; `error=server_error`.
        ServerError = "SERVER_ERROR",
        /// The end-user could not be identified; `error=unknown_user_id`.
        UnknownUserId = "UNKNOWN_USER_ID",
        /// The client is not authorized for this flow;
        /// `error=unauthorized_client`.
        UnauthorizedClient = "UNAUTHORIZED_CLIENT",
        /// The end-user cannot use a user code;
        /// `error=invalid_user_code`.
        UserCodeNotSupported = "USER_CODE_NOT_SUPPORTED",
    }
}

/// Request to `/api/backchannel/authentication/fail`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackchannelAuthenticationFailRequest {
    /// Ticket from `/api/backchannel/authentication` (mandatory).
    pub ticket: String,

    /// Reason of the failure (mandatory).
    pub reason: BackchannelAuthenticationFailReason,

    /// `error_description` for the client.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_description: Option<String>,

    /// `error_uri` for the client.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_uri: Option<String>,
}

impl BackchannelAuthenticationFailRequest {
    /// Creates a request.
    #[must_use]
    pub fn new(ticket: impl Into<String>, reason: BackchannelAuthenticationFailReason) -> Self {
        Self {
            ticket: ticket.into(),
            reason,
            error_description: None,
            error_uri: None,
        }
    }
}

impl ApiRequest for BackchannelAuthenticationFailRequest {
    type Response = BackchannelAuthenticationFailResponse;
    const NAME: &'static str = "BackchannelAuthenticationFailRequest";

    fn path(&self) -> Cow<'static, str> {
        Cow::Borrowed("/api/backchannel/authentication/fail")
    }

    fn validate(&self) -> DtoResult<()> {
        require(Self::NAME, "ticket", &self.ticket)
    }
}

wire_enum! {
    /// Outcome of `/api/backchannel/authentication/fail`.
    pub enum BackchannelAuthenticationFailAction {
        /// `500 Internal Server Error`.
        InternalServerError = "INTERNAL_SERVER_ERROR",
        /// `400 Bad Request`.
        BadRequest = "BAD_REQUEST",
        /// `403 Forbidden`.
        Forbidden = "FORBIDDEN",
    }
}

impl Action for BackchannelAuthenticationFailAction {
    fn directive(&self) -> Option<Directive> {
        Some(match self {
            Self::InternalServerError => Directive::json(StatusCode::INTERNAL_SERVER_ERROR),
            Self::BadRequest => Directive::json(StatusCode::BAD_REQUEST),
            Self::Forbidden => Directive::json(StatusCode::FORBIDDEN),
        })
    }
}

/// Response from `/api/backchannel/authentication/fail`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackchannelAuthenticationFailResponse {
    /// Result code and message.
    #[serde(flatten)]
    pub result: ApiResponse,

    /// Outcome.
    pub action: BackchannelAuthenticationFailAction,

    /// Content for the client.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_content: Option<String>,
}

/// Request to `/api/backchannel/authentication/issue`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackchannelAuthenticationIssueRequest {
    /// Ticket from `/api/backchannel/authentication` (mandatory).
    pub ticket: String,
}

impl BackchannelAuthenticationIssueRequest {
    /// Creates a request.
    #[must_use]
    pub fn new(ticket: impl Into<String>) -> Self {
        Self {
            ticket: ticket.into(),
        }
    }
}

impl ApiRequest for BackchannelAuthenticationIssueRequest {
    type Response = BackchannelAuthenticationIssueResponse;
    const NAME: &'static str = "BackchannelAuthenticationIssueRequest";

    fn path(&self) -> Cow<'static, str> {
        Cow::Borrowed("/api/backchannel/authentication/issue")
    }

    fn validate(&self) -> DtoResult<()> {
        require(Self::NAME, "ticket", &self.ticket)
    }
}

wire_enum! {
    /// Outcome of `/api/backchannel/authentication/issue`.
    pub enum BackchannelAuthenticationIssueAction {
        /// `500 Internal Server Error`.
        InternalServerError = "INTERNAL_SERVER_ERROR",
        /// The ticket is unknown or expired; `500 Internal Server Error`.
        InvalidTicket = "INVALID_TICKET",
        /// `auth_req_id` issued; `200 OK`.
        Ok = "OK",
    }
}

impl Action for BackchannelAuthenticationIssueAction {
    fn directive(&self) -> Option<Directive> {
        Some(match self {
            Self::InternalServerError | Self::InvalidTicket => {
                Directive::json(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Self::Ok => Directive::json(StatusCode::OK),
        })
    }
}

/// Response from `/api/backchannel/authentication/issue`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackchannelAuthenticationIssueResponse {
    /// Result code and message.
    #[serde(flatten)]
    pub result: ApiResponse,

    /// Outcome.
    pub action: BackchannelAuthenticationIssueAction,

    /// Content for the client.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_content: Option<String>,

    /// Issued `auth_req_id`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_req_id: Option<String>,

    /// Lifetime of `auth_req_id` in seconds.
    #[serde(default, skip_serializing_if = "is_default")]
    pub expires_in: i64,

    /// Minimum polling interval in seconds.
    #[serde(default, skip_serializing_if = "is_default")]
    pub interval: i64,
}

wire_enum! {
    /// Result of end-user authentication reported to `.../complete`.
    pub enum BackchannelAuthenticationCompleteResult {
        /// The end-user authorized the client.
        Authorized = "AUTHORIZED",
        /// The end-user denied the request.
        AccessDenied = "ACCESS_DENIED",
        /// The flow failed for another reason.
        TransactionFailed = "TRANSACTION_FAILED",
    }
}

/// Request to `/api/backchannel/authentication/complete`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackchannelAuthenticationCompleteRequest {
    /// Ticket from `/api/backchannel/authentication` (mandatory).
    pub ticket: String,

    /// Result of end-user authentication (mandatory).
    pub result: BackchannelAuthenticationCompleteResult,

    /// Subject of the end-user (mandatory).
    pub subject: String,

    /// Value of `sub` to use in the ID token instead of the subject.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    /// Authentication time in seconds since the epoch.
    #[serde(default, skip_serializing_if = "is_default")]
    pub auth_time: i64,

    /// Satisfied ACR.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acr: Option<String>,

    /// Claim values as a JSON object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claims: Option<String>,

    /// Properties attached to the tokens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<Property>>,

    /// Scopes to grant instead of the requested ones.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scopes: Option<Vec<String>>,

    /// Extra JWS header parameters of the ID token, as JSON.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idt_header_params: Option<String>,

    /// `error_description` for the client when not authorized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_description: Option<String>,

    /// `error_uri` for the client when not authorized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_uri: Option<String>,
}

impl BackchannelAuthenticationCompleteRequest {
    /// Creates a request.
    #[must_use]
    pub fn new(
        ticket: impl Into<String>,
        result: BackchannelAuthenticationCompleteResult,
        subject: impl Into<String>,
    ) -> Self {
        Self {
            ticket: ticket.into(),
            result,
            subject: subject.into(),
            sub: None,
            auth_time: 0,
            acr: None,
            claims: None,
            properties: None,
            scopes: None,
            idt_header_params: None,
            error_description: None,
            error_uri: None,
        }
    }
}

impl ApiRequest for BackchannelAuthenticationCompleteRequest {
    type Response = BackchannelAuthenticationCompleteResponse;
    const NAME: &'static str = "BackchannelAuthenticationCompleteRequest";

    fn path(&self) -> Cow<'static, str> {
        Cow::Borrowed("/api/backchannel/authentication/complete")
    }

    fn validate(&self) -> DtoResult<()> {
        require(Self::NAME, "ticket", &self.ticket)?;
        require(Self::NAME, "subject", &self.subject)
    }
}

wire_enum! {
    /// Outcome of `/api/backchannel/authentication/complete`.
    ///
    /// No outcome maps to an HTTP response for the client; in ping and push
    /// modes the server delivers the notification itself.
    pub enum BackchannelAuthenticationCompleteAction {
        /// Server-side error.
        ServerError = "SERVER_ERROR",
        /// Poll mode; nothing to do.
        NoAction = "NO_ACTION",
        /// POST `responseContent` to `clientNotificationEndpoint` with
        /// `clientNotificationToken` as the bearer token.
        Notification = "NOTIFICATION",
    }
}

impl Action for BackchannelAuthenticationCompleteAction {
    fn directive(&self) -> Option<Directive> {
        None
    }
}

/// Response from `/api/backchannel/authentication/complete`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackchannelAuthenticationCompleteResponse {
    /// Result code and message.
    #[serde(flatten)]
    pub result: ApiResponse,

    /// Outcome.
    pub action: BackchannelAuthenticationCompleteAction,

    /// Notification body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_content: Option<String>,

    /// Client ID.
    #[serde(default, skip_serializing_if = "is_default")]
    pub client_id: i64,

    /// Client ID alias.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id_alias: Option<String>,

    /// Whether the alias was used in the original request.
    #[serde(default, skip_serializing_if = "is_default")]
    pub client_id_alias_used: bool,

    /// Client name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,

    /// Token delivery mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_mode: Option<DeliveryMode>,

    /// Client notification endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_notification_endpoint: Option<String>,

    /// Bearer token for the notification request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_notification_token: Option<String>,

    /// Issued access token (push mode).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,

    /// Access token expiry in milliseconds since the epoch.
    #[serde(default, skip_serializing_if = "is_default")]
    pub access_token_expires_at: i64,

    /// Access token lifetime in seconds.
    #[serde(default, skip_serializing_if = "is_default")]
    pub access_token_duration: i64,

    /// Issued refresh token (push mode).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,

    /// Refresh token expiry in milliseconds since the epoch.
    #[serde(default, skip_serializing_if = "is_default")]
    pub refresh_token_expires_at: i64,

    /// Refresh token lifetime in seconds.
    #[serde(default, skip_serializing_if = "is_default")]
    pub refresh_token_duration: i64,

    /// Issued ID token (push mode).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_token: Option<String>,

    /// Access token in JWT form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jwt_access_token: Option<String>,

    /// Resources the access token is bound to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<String>>,
}

impl BackchannelAuthenticationCompleteResponse {
    /// The notification endpoint and bearer token, for `NOTIFICATION`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DtoError::MissingField`] if either is absent.
    pub fn notification_target(&self) -> DtoResult<(&str, &str)> {
        const NAME: &str = "BackchannelAuthenticationCompleteResponse";
        let endpoint = self.client_notification_endpoint.as_deref();
        let token = self.client_notification_token.as_deref();
        require_some(NAME, "clientNotificationEndpoint", endpoint)?;
        require_some(NAME, "clientNotificationToken", token)?;
        Ok((endpoint.unwrap_or_default(), token.unwrap_or_default()))
    }
}

interpret! {
    BackchannelAuthenticationResponse => BackchannelAuthenticationAction,
    BackchannelAuthenticationFailResponse => BackchannelAuthenticationFailAction,
    BackchannelAuthenticationIssueResponse => BackchannelAuthenticationIssueAction,
    BackchannelAuthenticationCompleteResponse => BackchannelAuthenticationCompleteAction,
}
