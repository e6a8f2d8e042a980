//! Binding between request records and the remote endpoints that accept them.

use std::borrow::Cow;

use http::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{DtoError, DtoResult};

/// A request body for one Authlete API endpoint.
///
/// The transport is not part of this crate; an HTTP client sends
/// [`ApiRequest::to_json`] to [`ApiRequest::path`] with [`ApiRequest::method`]
/// and decodes the reply with [`decode_response`] into
/// [`ApiRequest::Response`].
pub trait ApiRequest: Serialize {
    /// Record returned by the endpoint.
    type Response: DeserializeOwned;

    /// Record name used in validation errors.
    const NAME: &'static str;

    /// HTTP method of the endpoint.
    fn method(&self) -> Method {
        Method::POST
    }

    /// Endpoint path relative to the API base URL.
    fn path(&self) -> Cow<'static, str>;

    /// Query parameters, for endpoints that take them instead of a body.
    fn query(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    /// Checks that every mandatory field is present.
    ///
    /// # Errors
    ///
    /// Returns [`DtoError::MissingField`] naming the first missing field.
    fn validate(&self) -> DtoResult<()> {
        Ok(())
    }

    /// Validates and serializes the request body.
    ///
    /// # Errors
    ///
    /// Returns a validation error before anything is serialized, or a JSON
    /// error from the encoder.
    fn to_json(&self) -> DtoResult<String> {
        self.validate()?;
        let body = serde_json::to_string(self)?;
        debug!(
            request = Self::NAME,
            path = %self.path(),
            bytes = body.len(),
            "serialized Authlete API request"
        );
        Ok(body)
    }
}

/// Decodes a response body.
///
/// Unknown fields are ignored. Malformed JSON, a missing mandatory field or an
/// unknown enum value fail.
///
/// # Errors
///
/// Returns [`DtoError::Json`] if the body does not match `R`.
pub fn decode_response<R: DeserializeOwned>(body: &str) -> DtoResult<R> {
    serde_json::from_str(body).map_err(|err| {
        warn!(
            error = %err,
            response = std::any::type_name::<R>(),
            "failed to decode Authlete API response"
        );
        DtoError::from(err)
    })
}

/// Fails with [`DtoError::MissingField`] if a mandatory string is empty.
pub(crate) fn require(record: &'static str, field: &'static str, value: &str) -> DtoResult<()> {
    if value.is_empty() {
        Err(DtoError::missing(record, field))
    } else {
        Ok(())
    }
}

/// Fails with [`DtoError::MissingField`] if a mandatory optional is absent or
/// empty.
pub(crate) fn require_some(
    record: &'static str,
    field: &'static str,
    value: Option<&str>,
) -> DtoResult<()> {
    require(record, field, value.unwrap_or_default())
}

/// Appends `value` to the query list if present.
pub(crate) fn push_query<T: ToString>(
    query: &mut Vec<(&'static str, String)>,
    name: &'static str,
    value: Option<T>,
) {
    if let Some(value) = value {
        query.push((name, value.to_string()));
    }
}
