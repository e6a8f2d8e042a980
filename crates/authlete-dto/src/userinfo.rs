//! UserInfo endpoint messages.
//!
//! `/api/auth/userinfo` checks the access token and lists the claims to
//! collect; `/api/auth/userinfo/issue` turns the collected claim values into
//! the response for the client.

use std::borrow::Cow;

use http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::api::{ApiRequest, require};
use crate::common::{ApiResponse, Property, is_default};
use crate::error::DtoResult;
use crate::reply::{Action, Directive, ReplyBody, interpret};

/// Request to `/api/auth/userinfo`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfoRequest {
    /// Access token presented by the client (mandatory).
    pub token: String,

    /// Client certificate, for certificate-bound tokens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_certificate: Option<String>,

    /// `DPoP` header value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dpop: Option<String>,

    /// HTTP method of the userinfo request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub htm: Option<String>,

    /// URL of the userinfo endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub htu: Option<String>,
}

impl UserInfoRequest {
    /// Creates a request for `token`.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            ..Self::default()
        }
    }
}

impl ApiRequest for UserInfoRequest {
    type Response = UserInfoResponse;
    const NAME: &'static str = "UserInfoRequest";

    fn path(&self) -> Cow<'static, str> {
        Cow::Borrowed("/api/auth/userinfo")
    }

    fn validate(&self) -> DtoResult<()> {
        require(Self::NAME, "token", &self.token)
    }
}

wire_enum! {
    /// Outcome of `/api/auth/userinfo`.
    pub enum UserInfoAction {
        /// `500 Internal Server Error`.
        InternalServerError = "INTERNAL_SERVER_ERROR",
        /// `400 Bad Request`.
        BadRequest = "BAD_REQUEST",
        /// `401 Unauthorized`.
        Unauthorized = "UNAUTHORIZED",
        /// `403 Forbidden`.
        Forbidden = "FORBIDDEN",
        /// Collect the listed claims and call `/api/auth/userinfo/issue`.
        Ok = "OK",
    }
}

impl Action for UserInfoAction {
    fn directive(&self) -> Option<Directive> {
        match self {
            Self::InternalServerError => Some(Directive::bearer(StatusCode::INTERNAL_SERVER_ERROR)),
            Self::BadRequest => Some(Directive::bearer(StatusCode::BAD_REQUEST)),
            Self::Unauthorized => Some(Directive::bearer(StatusCode::UNAUTHORIZED)),
            Self::Forbidden => Some(Directive::bearer(StatusCode::FORBIDDEN)),
            Self::Ok => None,
        }
    }
}

/// Response from `/api/auth/userinfo`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfoResponse {
    /// Result code and message.
    #[serde(flatten)]
    pub result: ApiResponse,

    /// Outcome.
    pub action: UserInfoAction,

    /// `WWW-Authenticate` value for error outcomes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_content: Option<String>,

    /// Client the token was issued to.
    #[serde(default, skip_serializing_if = "is_default")]
    pub client_id: i64,

    /// Client ID alias.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id_alias: Option<String>,

    /// Whether the alias was used when the token was requested.
    #[serde(default, skip_serializing_if = "is_default")]
    pub client_id_alias_used: bool,

    /// Subject of the end-user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// Scopes covered by the token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scopes: Option<Vec<String>>,

    /// Claims to collect, possibly with language tags (`name#ja`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claims: Option<Vec<String>>,

    /// The access token, to pass back to the issue API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Properties attached to the token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<Property>>,

    /// `userinfo` part of the `claims` request parameter, as JSON.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_info_claims: Option<String>,
}

impl UserInfoResponse {
    /// Builds the issue request for this response.
    ///
    /// `claims` is a JSON object of the collected claim values.
    #[must_use]
    pub fn issue(&self, claims: Option<String>) -> UserInfoIssueRequest {
        UserInfoIssueRequest {
            token: self.token.clone().unwrap_or_default(),
            claims,
            sub: None,
        }
    }
}

/// Request to `/api/auth/userinfo/issue`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfoIssueRequest {
    /// Access token (mandatory).
    pub token: String,

    /// Claim values as a JSON object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claims: Option<String>,

    /// Value of `sub` to use instead of the subject.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
}

impl UserInfoIssueRequest {
    /// Creates a request.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            ..Self::default()
        }
    }
}

impl ApiRequest for UserInfoIssueRequest {
    type Response = UserInfoIssueResponse;
    const NAME: &'static str = "UserInfoIssueRequest";

    fn path(&self) -> Cow<'static, str> {
        Cow::Borrowed("/api/auth/userinfo/issue")
    }

    fn validate(&self) -> DtoResult<()> {
        require(Self::NAME, "token", &self.token)
    }
}

wire_enum! {
    /// Outcome of `/api/auth/userinfo/issue`.
    pub enum UserInfoIssueAction {
        /// `500 Internal Server Error`.
        InternalServerError = "INTERNAL_SERVER_ERROR",
        /// `400 Bad Request`.
        BadRequest = "BAD_REQUEST",
        /// `401 Unauthorized`.
        Unauthorized = "UNAUTHORIZED",
        /// `403 Forbidden`.
        Forbidden = "FORBIDDEN",
        /// `200 OK` with a JSON body.
        Json = "JSON",
        /// `200 OK` with a signed or encrypted JWT body.
        Jwt = "JWT",
    }
}

impl Action for UserInfoIssueAction {
    fn directive(&self) -> Option<Directive> {
        Some(match self {
            Self::InternalServerError => Directive::bearer(StatusCode::INTERNAL_SERVER_ERROR),
            Self::BadRequest => Directive::bearer(StatusCode::BAD_REQUEST),
            Self::Unauthorized => Directive::bearer(StatusCode::UNAUTHORIZED),
            Self::Forbidden => Directive::bearer(StatusCode::FORBIDDEN),
            Self::Json => Directive::json(StatusCode::OK),
            Self::Jwt => Directive::new(StatusCode::OK, ReplyBody::Jwt),
        })
    }
}

/// Response from `/api/auth/userinfo/issue`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfoIssueResponse {
    /// Result code and message.
    #[serde(flatten)]
    pub result: ApiResponse,

    /// Outcome.
    pub action: UserInfoIssueAction,

    /// Claims JSON, JWT, or `WWW-Authenticate` value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_content: Option<String>,
}

interpret! {
    UserInfoResponse => UserInfoAction,
    UserInfoIssueResponse => UserInfoIssueAction,
}
