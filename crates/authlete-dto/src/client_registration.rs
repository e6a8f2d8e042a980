//! Dynamic client registration (RFC 7591) and management (RFC 7592).
//!
//! One request shape serves four endpoints; [`RegistrationOperation`] picks
//! the path.

use std::borrow::Cow;

use http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::api::{ApiRequest, require, require_some};
use crate::client::Client;
use crate::common::ApiResponse;
use crate::error::DtoResult;
use crate::reply::{Action, Directive, ReplyBody, interpret};

/// Which registration endpoint a request goes to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RegistrationOperation {
    /// Register a new client.
    #[default]
    Register,
    /// Read the registration of an existing client.
    Get,
    /// Update the registration.
    Update,
    /// Delete the client.
    Delete,
}

impl RegistrationOperation {
    /// Endpoint path.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Register => "/api/client/registration",
            Self::Get => "/api/client/registration/get",
            Self::Update => "/api/client/registration/update",
            Self::Delete => "/api/client/registration/delete",
        }
    }
}

/// Request to `/api/client/registration[/get|/update|/delete]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRegistrationRequest {
    /// Target endpoint; not serialized.
    #[serde(skip)]
    pub operation: RegistrationOperation,

    /// Client metadata as JSON; mandatory for register and update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json: Option<String>,

    /// Registration access token; mandatory except for register.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Client ID from the client configuration URI; mandatory except for
    /// register.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
}

impl ClientRegistrationRequest {
    /// Registers a client described by `json`.
    #[must_use]
    pub fn register(json: impl Into<String>) -> Self {
        Self {
            json: Some(json.into()),
            ..Self::default()
        }
    }

    /// Reads the registration of `client_id`.
    #[must_use]
    pub fn get(client_id: impl Into<String>, token: impl Into<String>) -> Self {
        Self::managing(RegistrationOperation::Get, client_id, token)
    }

    /// Replaces the registration of `client_id` with `json`.
    #[must_use]
    pub fn update(
        client_id: impl Into<String>,
        token: impl Into<String>,
        json: impl Into<String>,
    ) -> Self {
        Self {
            json: Some(json.into()),
            ..Self::managing(RegistrationOperation::Update, client_id, token)
        }
    }

    /// Deletes `client_id`.
    #[must_use]
    pub fn delete(client_id: impl Into<String>, token: impl Into<String>) -> Self {
        Self::managing(RegistrationOperation::Delete, client_id, token)
    }

    fn managing(
        operation: RegistrationOperation,
        client_id: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            operation,
            json: None,
            token: Some(token.into()),
            client_id: Some(client_id.into()),
        }
    }
}

impl ApiRequest for ClientRegistrationRequest {
    type Response = ClientRegistrationResponse;
    const NAME: &'static str = "ClientRegistrationRequest";

    fn path(&self) -> Cow<'static, str> {
        Cow::Borrowed(self.operation.path())
    }

    fn validate(&self) -> DtoResult<()> {
        if matches!(
            self.operation,
            RegistrationOperation::Register | RegistrationOperation::Update
        ) {
            require_some(Self::NAME, "json", self.json.as_deref())?;
        }
        if self.operation != RegistrationOperation::Register {
            require_some(Self::NAME, "token", self.token.as_deref())?;
            require(Self::NAME, "clientId", self.client_id.as_deref().unwrap_or_default())?;
        }
        Ok(())
    }
}

wire_enum! {
    /// Outcome of the registration endpoints.
    pub enum ClientRegistrationAction {
        /// `500 Internal Server Error`.
        InternalServerError = "INTERNAL_SERVER_ERROR",
        /// `400 Bad Request`.
        BadRequest = "BAD_REQUEST",
        /// Registration access token rejected; `401 Unauthorized`.
        Unauthorized = "UNAUTHORIZED",
        /// Client registered; `201 Created`.
        Created = "CREATED",
        /// Registration read; `200 OK`.
        Ok = "OK",
        /// Registration updated; `200 OK`.
        Updated = "UPDATED",
        /// Client deleted; `204 No Content`.
        Deleted = "DELETED",
    }
}

impl Action for ClientRegistrationAction {
    fn directive(&self) -> Option<Directive> {
        Some(match self {
            Self::InternalServerError => Directive::json(StatusCode::INTERNAL_SERVER_ERROR),
            Self::BadRequest => Directive::json(StatusCode::BAD_REQUEST),
            Self::Unauthorized => Directive::json(StatusCode::UNAUTHORIZED),
            Self::Created => Directive::json(StatusCode::CREATED),
            Self::Ok | Self::Updated => Directive::json(StatusCode::OK),
            Self::Deleted => Directive::new(StatusCode::NO_CONTENT, ReplyBody::Empty),
        })
    }
}

/// Response from the registration endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRegistrationResponse {
    /// Result code and message.
    #[serde(flatten)]
    pub result: ApiResponse,

    /// Outcome.
    pub action: ClientRegistrationAction,

    /// Content for the client.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_content: Option<String>,

    /// The registered client.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<Client>,
}

interpret! {
    ClientRegistrationResponse => ClientRegistrationAction,
}
