//! Pushed authorization requests (RFC 9126).

use std::borrow::Cow;

use http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::api::{ApiRequest, require};
use crate::common::ApiResponse;
use crate::error::DtoResult;
use crate::reply::{Action, Directive, interpret};

/// Request to `/api/pushed_auth_req`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PushedAuthReqRequest {
    /// Form body of the pushed request (mandatory).
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

impl PushedAuthReqRequest {
    /// Creates a request from the form body.
    #[must_use]
    pub fn new(parameters: impl Into<String>) -> Self {
        Self {
            parameters: parameters.into(),
            ..Self::default()
        }
    }
}

impl ApiRequest for PushedAuthReqRequest {
    type Response = PushedAuthReqResponse;
    const NAME: &'static str = "PushedAuthReqRequest";

    fn path(&self) -> Cow<'static, str> {
        Cow::Borrowed("/api/pushed_auth_req")
    }

    fn validate(&self) -> DtoResult<()> {
        require(Self::NAME, "parameters", &self.parameters)
    }
}

wire_enum! {
    /// Outcome of `/api/pushed_auth_req`.
    pub enum PushedAuthReqAction {
        /// Request stored; `201 Created`.
        Created = "CREATED",
        /// `400 Bad Request`.
        BadRequest = "BAD_REQUEST",
        /// `401 Unauthorized`.
        Unauthorized = "UNAUTHORIZED",
        /// `403 Forbidden`.
        Forbidden = "FORBIDDEN",
        /// `413 Payload Too Large`.
        PayloadTooLarge = "PAYLOAD_TOO_LARGE",
        /// `500 Internal Server Error`.
        InternalServerError = "INTERNAL_SERVER_ERROR",
    }
}

impl Action for PushedAuthReqAction {
    fn directive(&self) -> Option<Directive> {
        let status = match self {
            Self::Created => StatusCode::CREATED,
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Some(Directive::json(status))
    }
}

/// Response from `/api/pushed_auth_req`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PushedAuthReqResponse {
    /// Result code and message.
    #[serde(flatten)]
    pub result: ApiResponse,

    /// Outcome.
    pub action: PushedAuthReqAction,

    /// Content for the client.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_content: Option<String>,

    /// `request_uri` to use in the authorization request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_uri: Option<String>,
}

interpret! {
    PushedAuthReqResponse => PushedAuthReqAction,
}
