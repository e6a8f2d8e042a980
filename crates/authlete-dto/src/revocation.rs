//! Token revocation (RFC 7009).

use std::borrow::Cow;

use http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::api::{ApiRequest, require};
use crate::common::ApiResponse;
use crate::error::DtoResult;
use crate::reply::{Action, Directive, interpret};

/// Request to `/api/auth/revocation`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevocationRequest {
    /// Form body of the revocation request (mandatory).
    pub parameters: String,

    /// Client ID from the `Authorization` header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,

    /// Client secret from the `Authorization` header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
}

impl RevocationRequest {
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

impl ApiRequest for RevocationRequest {
    type Response = RevocationResponse;
    const NAME: &'static str = "RevocationRequest";

    fn path(&self) -> Cow<'static, str> {
        Cow::Borrowed("/api/auth/revocation")
    }

    fn validate(&self) -> DtoResult<()> {
        require(Self::NAME, "parameters", &self.parameters)
    }
}

wire_enum! {
    /// Outcome of `/api/auth/revocation`.
    pub enum RevocationAction {
        /// `401 Unauthorized`.
        InvalidClient = "INVALID_CLIENT",
        /// `500 Internal Server Error`.
        InternalServerError = "INTERNAL_SERVER_ERROR",
        /// `400 Bad Request`.
        BadRequest = "BAD_REQUEST",
        /// Revoked, or the token was unknown; `200 OK`.
        Ok = "OK",
    }
}

impl Action for RevocationAction {
    fn directive(&self) -> Option<Directive> {
        Some(match self {
            Self::InvalidClient => Directive::json(StatusCode::UNAUTHORIZED),
            Self::InternalServerError => Directive::json(StatusCode::INTERNAL_SERVER_ERROR),
            Self::BadRequest => Directive::json(StatusCode::BAD_REQUEST),
            Self::Ok => Directive::json(StatusCode::OK),
        })
    }
}

/// Response from `/api/auth/revocation`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevocationResponse {
    /// Result code and message.
    #[serde(flatten)]
    pub result: ApiResponse,

    /// Outcome.
    pub action: RevocationAction,

    /// Content for the client.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_content: Option<String>,
}

interpret! {
    RevocationResponse => RevocationAction,
}
