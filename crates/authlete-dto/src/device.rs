//! Device authorization grant (RFC 8628).
//!
//! `/api/device/authorization` backs the device authorization endpoint.
//! The verification page then calls `/api/device/verification` with the user
//! code the end-user typed, and `/api/device/complete` once the end-user has
//! decided.

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::api::{ApiRequest, require};
use crate::common::{ApiResponse, Property, Scope, is_default, millis_to_utc};
use crate::error::DtoResult;
use crate::reply::{Action, Directive, interpret};

/// Request to `/api/device/authorization`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceAuthorizationRequest {
    /// Form body of the device authorization request (mandatory).
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

impl DeviceAuthorizationRequest {
    /// Creates a request from the form body.
    #[must_use]
    pub fn new(parameters: impl Into<String>) -> Self {
        Self {
            parameters: parameters.into(),
            ..Self::default()
        }
    }
}

impl ApiRequest for DeviceAuthorizationRequest {
    type Response = DeviceAuthorizationResponse;
    const NAME: &'static str = "DeviceAuthorizationRequest";

    fn path(&self) -> Cow<'static, str> {
        Cow::Borrowed("/api/device/authorization")
    }

    fn validate(&self) -> DtoResult<()> {
        require(Self::NAME, "parameters", &self.parameters)
    }
}

wire_enum! {
    /// Outcome of `/api/device/authorization`.
    pub enum DeviceAuthorizationAction {
        /// `500 Internal Server Error`.
        InternalServerError = "INTERNAL_SERVER_ERROR",
        /// `400 Bad Request`.
        BadRequest = "BAD_REQUEST",
        /// Client authentication failed; `401 Unauthorized`.
        Unauthorized = "UNAUTHORIZED",
        /// Device code issued; `200 OK`.
        Ok = "OK",
    }
}

impl Action for DeviceAuthorizationAction {
    fn directive(&self) -> Option<Directive> {
        Some(match self {
            Self::InternalServerError => Directive::json(StatusCode::INTERNAL_SERVER_ERROR),
            Self::BadRequest => Directive::json(StatusCode::BAD_REQUEST),
            Self::Unauthorized => Directive::json(StatusCode::UNAUTHORIZED),
            Self::Ok => Directive::json(StatusCode::OK),
        })
    }
}

/// Response from `/api/device/authorization`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceAuthorizationResponse {
    /// Result code and message.
    #[serde(flatten)]
    pub result: ApiResponse,

    /// Outcome.
    pub action: DeviceAuthorizationAction,

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

    /// Requested scopes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scopes: Option<Vec<Scope>>,

    /// Claims the `openid` scope implies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claim_names: Option<Vec<String>>,

    /// Requested ACR values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acrs: Option<Vec<String>>,

    /// Issued device code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_code: Option<String>,

    /// Issued user code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_code: Option<String>,

    /// Verification URI shown to the end-user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_uri: Option<String>,

    /// Verification URI with the user code embedded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_uri_complete: Option<String>,

    /// Lifetime of the codes in seconds.
    #[serde(default, skip_serializing_if = "is_default")]
    pub expires_in: i64,

    /// Minimum polling interval in seconds.
    #[serde(default, skip_serializing_if = "is_default")]
    pub interval: i64,

    /// Resources named in the request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<String>>,

    /// Non-fatal problems found in the request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<String>>,
}

/// Request to `/api/device/verification`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceVerificationRequest {
    /// User code typed by the end-user (mandatory).
    pub user_code: String,
}

impl DeviceVerificationRequest {
    /// Creates a request.
    #[must_use]
    pub fn new(user_code: impl Into<String>) -> Self {
        Self {
            user_code: user_code.into(),
        }
    }
}

impl ApiRequest for DeviceVerificationRequest {
    type Response = DeviceVerificationResponse;
    const NAME: &'static str = "DeviceVerificationRequest";

    fn path(&self) -> Cow<'static, str> {
        Cow::Borrowed("/api/device/verification")
    }

    fn validate(&self) -> DtoResult<()> {
        require(Self::NAME, "userCode", &self.user_code)
    }
}

wire_enum! {
    /// Outcome of `/api/device/verification`.
    ///
    /// None of these map to a fixed HTTP response; the verification page
    /// renders its own UI.
    pub enum DeviceVerificationAction {
        /// User code is valid; ask for authorization.
        Valid = "VALID",
        /// User code has expired.
        Expired = "EXPIRED",
        /// User code does not exist.
        NotExist = "NOT_EXIST",
        /// Server-side error.
        ServerError = "SERVER_ERROR",
    }
}

impl Action for DeviceVerificationAction {
    fn directive(&self) -> Option<Directive> {
        None
    }
}

/// Response from `/api/device/verification`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceVerificationResponse {
    /// Result code and message.
    #[serde(flatten)]
    pub result: ApiResponse,

    /// Outcome.
    pub action: DeviceVerificationAction,

    /// Client ID.
    #[serde(default, skip_serializing_if = "is_default")]
    pub client_id: i64,

    /// Client ID alias.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id_alias: Option<String>,

    /// Whether the alias was used in the device authorization request.
    #[serde(default, skip_serializing_if = "is_default")]
    pub client_id_alias_used: bool,

    /// Client name, for the consent page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,

    /// Requested scopes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scopes: Option<Vec<Scope>>,

    /// Claims the `openid` scope implies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claim_names: Option<Vec<String>>,

    /// Requested ACR values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acrs: Option<Vec<String>>,

    /// Expiry of the user code in milliseconds since the epoch.
    #[serde(default, skip_serializing_if = "is_default")]
    pub expires_at: i64,

    /// Resources named in the device authorization request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<String>>,
}

impl DeviceVerificationResponse {
    /// User code expiry.
    #[must_use]
    pub fn expiry(&self) -> Option<DateTime<Utc>> {
        millis_to_utc(self.expires_at)
    }
}

wire_enum! {
    /// End-user decision reported to `/api/device/complete`.
    pub enum DeviceCompleteResult {
        /// The end-user granted authorization.
        Authorized = "AUTHORIZED",
        /// The end-user denied authorization.
        AccessDenied = "ACCESS_DENIED",
        /// The flow failed for another reason.
        TransactionFailed = "TRANSACTION_FAILED",
    }
}

/// Request to `/api/device/complete`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceCompleteRequest {
    /// User code (mandatory).
    pub user_code: String,

    /// End-user decision (mandatory).
    pub result: DeviceCompleteResult,

    /// Subject of the end-user; mandatory when `result` is `AUTHORIZED`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

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

    /// `error_description` for the client when not authorized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_description: Option<String>,

    /// `error_uri` for the client when not authorized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_uri: Option<String>,
}

impl DeviceCompleteRequest {
    /// Creates a request.
    #[must_use]
    pub fn new(user_code: impl Into<String>, result: DeviceCompleteResult) -> Self {
        Self {
            user_code: user_code.into(),
            result,
            subject: None,
            sub: None,
            auth_time: 0,
            acr: None,
            claims: None,
            properties: None,
            scopes: None,
            error_description: None,
            error_uri: None,
        }
    }

    /// An `AUTHORIZED` request for `subject`.
    #[must_use]
    pub fn authorized(user_code: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            subject: Some(subject.into()),
            ..Self::new(user_code, DeviceCompleteResult::Authorized)
        }
    }
}

impl ApiRequest for DeviceCompleteRequest {
    type Response = DeviceCompleteResponse;
    const NAME: &'static str = "DeviceCompleteRequest";

    fn path(&self) -> Cow<'static, str> {
        Cow::Borrowed("/api/device/complete")
    }

    fn validate(&self) -> DtoResult<()> {
        require(Self::NAME, "userCode", &self.user_code)?;
        if self.result == DeviceCompleteResult::Authorized {
            crate::api::require_some(Self::NAME, "subject", self.subject.as_deref())?;
        }
        Ok(())
    }
}

wire_enum! {
    /// Outcome of `/api/device/complete`.
    ///
    /// None of these map to a fixed HTTP response.
    pub enum DeviceCompleteAction {
        /// Decision recorded.
        Success = "SUCCESS",
        /// The request was malformed.
        InvalidRequest = "INVALID_REQUEST",
        /// User code has expired.
        UserCodeExpired = "USER_CODE_EXPIRED",
        /// User code does not exist.
        UserCodeNotExist = "USER_CODE_NOT_EXIST",
        /// Server-side error.
        ServerError = "SERVER_ERROR",
    }
}

impl Action for DeviceCompleteAction {
    fn directive(&self) -> Option<Directive> {
        None
    }
}

/// Response from `/api/device/complete`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceCompleteResponse {
    /// Result code and message.
    #[serde(flatten)]
    pub result: ApiResponse,

    /// Outcome.
    pub action: DeviceCompleteAction,
}

interpret! {
    DeviceAuthorizationResponse => DeviceAuthorizationAction,
}

interpret! {
    without content:
    DeviceVerificationResponse => DeviceVerificationAction,
    DeviceCompleteResponse => DeviceCompleteAction,
}
