//! Access token introspection.
//!
//! `/api/auth/introspection` is for resource servers that front Authlete
//! themselves; `/api/auth/introspection/standard` backs an RFC 7662
//! introspection endpoint.

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::api::{ApiRequest, require};
use crate::common::{ApiResponse, Property, is_default, millis_to_utc};
use crate::error::DtoResult;
use crate::reply::{Action, Directive, interpret};

/// Request to `/api/auth/introspection`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionRequest {
    /// Access token presented by the client (mandatory).
    pub token: String,

    /// Scopes the protected resource requires.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scopes: Option<Vec<String>>,

    /// Subject the protected resource requires.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// Client certificate, for certificate-bound tokens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_certificate: Option<String>,

    /// `DPoP` header value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dpop: Option<String>,

    /// HTTP method of the resource request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub htm: Option<String>,

    /// URL of the resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub htu: Option<String>,
}

impl IntrospectionRequest {
    /// Creates a request for `token`.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            ..Self::default()
        }
    }

    /// Requires the token to cover `scopes`.
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

impl ApiRequest for IntrospectionRequest {
    type Response = IntrospectionResponse;
    const NAME: &'static str = "IntrospectionRequest";

    fn path(&self) -> Cow<'static, str> {
        Cow::Borrowed("/api/auth/introspection")
    }

    fn validate(&self) -> DtoResult<()> {
        require(Self::NAME, "token", &self.token)
    }
}

wire_enum! {
    /// Outcome of `/api/auth/introspection`.
    ///
    /// Error outcomes carry a `WWW-Authenticate` value in `responseContent`
    /// (RFC 6750 Section 3).
    pub enum IntrospectionAction {
        /// `500 Internal Server Error`.
        InternalServerError = "INTERNAL_SERVER_ERROR",
        /// No token in the request; `400 Bad Request`.
        BadRequest = "BAD_REQUEST",
        /// Token missing, expired or unknown; `401 Unauthorized`.
        Unauthorized = "UNAUTHORIZED",
        /// Token lacks the required scopes or subject; `403 Forbidden`.
        Forbidden = "FORBIDDEN",
        /// Token is valid; serve the resource.
        Ok = "OK",
    }
}

impl Action for IntrospectionAction {
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

/// Response from `/api/auth/introspection`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionResponse {
    /// Result code and message.
    #[serde(flatten)]
    pub result: ApiResponse,

    /// Outcome.
    pub action: IntrospectionAction,

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

    /// Resource owner; absent for client credentials tokens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// Scopes covered by the token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scopes: Option<Vec<String>>,

    /// Whether the token exists.
    #[serde(default, skip_serializing_if = "is_default")]
    pub existent: bool,

    /// Whether the token exists and has not expired.
    #[serde(default, skip_serializing_if = "is_default")]
    pub usable: bool,

    /// Whether the token covers the requested scopes.
    #[serde(default, skip_serializing_if = "is_default")]
    pub sufficient: bool,

    /// Whether the token can be refreshed.
    #[serde(default, skip_serializing_if = "is_default")]
    pub refreshable: bool,

    /// Expiry in milliseconds since the epoch.
    #[serde(default, skip_serializing_if = "is_default")]
    pub expires_at: i64,

    /// Properties attached to the token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<Property>>,

    /// Thumbprint of the certificate the token is bound to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_thumbprint: Option<String>,

    /// Resources named in the original request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<String>>,

    /// Resources the token is bound to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token_resources: Option<Vec<String>>,
}

impl IntrospectionResponse {
    /// Token expiry.
    #[must_use]
    pub fn expiry(&self) -> Option<DateTime<Utc>> {
        millis_to_utc(self.expires_at)
    }

    /// Value of a visible property.
    #[must_use]
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties
            .as_deref()?
            .iter()
            .find(|p| p.key == key && !p.hidden)
            .map(|p| p.value.as_str())
    }
}

/// Request to `/api/auth/introspection/standard`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardIntrospectionRequest {
    /// Form body of the RFC 7662 request (mandatory).
    pub parameters: String,
}

impl StandardIntrospectionRequest {
    /// Creates a request from the form body.
    #[must_use]
    pub fn new(parameters: impl Into<String>) -> Self {
        Self {
            parameters: parameters.into(),
        }
    }
}

impl ApiRequest for StandardIntrospectionRequest {
    type Response = StandardIntrospectionResponse;
    const NAME: &'static str = "StandardIntrospectionRequest";

    fn path(&self) -> Cow<'static, str> {
        Cow::Borrowed("/api/auth/introspection/standard")
    }

    fn validate(&self) -> DtoResult<()> {
        require(Self::NAME, "parameters", &self.parameters)
    }
}

wire_enum! {
    /// Outcome of `/api/auth/introspection/standard`.
    pub enum StandardIntrospectionAction {
        /// `500 Internal Server Error`.
        InternalServerError = "INTERNAL_SERVER_ERROR",
        /// `400 Bad Request`.
        BadRequest = "BAD_REQUEST",
        /// `200 OK` with the RFC 7662 JSON.
        Ok = "OK",
    }
}

impl Action for StandardIntrospectionAction {
    fn directive(&self) -> Option<Directive> {
        Some(match self {
            Self::InternalServerError => Directive::json(StatusCode::INTERNAL_SERVER_ERROR),
            Self::BadRequest => Directive::json(StatusCode::BAD_REQUEST),
            Self::Ok => Directive::json(StatusCode::OK),
        })
    }
}

/// Response from `/api/auth/introspection/standard`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandardIntrospectionResponse {
    /// Result code and message.
    #[serde(flatten)]
    pub result: ApiResponse,

    /// Outcome.
    pub action: StandardIntrospectionAction,

    /// RFC 7662 response body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_content: Option<String>,
}

interpret! {
    IntrospectionResponse => IntrospectionAction,
    StandardIntrospectionResponse => StandardIntrospectionAction,
}
