//! Translating API outcomes into HTTP responses.
//!
//! Most API responses carry an `action` telling the caller which response to
//! send to the client that originated the request, plus a `responseContent`
//! string to send with it. [`Action::directive`] maps each action to a status
//! and a body kind; [`Directive::reply`] assembles the response.

use http::header::{CACHE_CONTROL, CONTENT_TYPE, HeaderName, LOCATION, PRAGMA, WWW_AUTHENTICATE};
use http::{HeaderMap, HeaderValue, StatusCode};
use tracing::debug;

use crate::error::{DtoError, DtoResult};
use crate::wire::WireEnum;

const JSON: &str = "application/json;charset=UTF-8";
const HTML: &str = "text/html;charset=UTF-8";
const JWT: &str = "application/jwt";

/// How `responseContent` is carried in the HTTP response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyBody {
    /// JSON body.
    Json,
    /// HTML body, e.g. an auto-submitting form for `response_mode=form_post`.
    Html,
    /// JWT body (`application/jwt`).
    Jwt,
    /// No body; the content is the `Location` header of a redirect.
    Location,
    /// No body; the content is a `WWW-Authenticate` Bearer challenge.
    BearerChallenge,
    /// No body and no content.
    Empty,
}

/// The HTTP response an action calls for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive {
    /// Response status.
    pub status: StatusCode,
    /// Where the response content goes.
    pub body: ReplyBody,
}

impl Directive {
    /// Creates a directive.
    #[must_use]
    pub const fn new(status: StatusCode, body: ReplyBody) -> Self {
        Self { status, body }
    }

    /// A JSON response with the given status.
    #[must_use]
    pub const fn json(status: StatusCode) -> Self {
        Self::new(status, ReplyBody::Json)
    }

    /// A Bearer challenge with the given status (RFC 6750 Section 3).
    #[must_use]
    pub const fn bearer(status: StatusCode) -> Self {
        Self::new(status, ReplyBody::BearerChallenge)
    }

    /// `302 Found` to the URI in the response content.
    #[must_use]
    pub const fn redirect() -> Self {
        Self::new(StatusCode::FOUND, ReplyBody::Location)
    }

    /// `200 OK` with an HTML body.
    #[must_use]
    pub const fn form() -> Self {
        Self::new(StatusCode::OK, ReplyBody::Html)
    }

    /// Builds the response around `content`.
    ///
    /// Every response is marked `Cache-Control: no-store` and
    /// `Pragma: no-cache`.
    ///
    /// # Errors
    ///
    /// Returns [`DtoError::InvalidHeader`] if the content must go into a
    /// header and is not a legal header value.
    pub fn reply(&self, content: Option<&str>) -> DtoResult<HttpReply> {
        let mut headers = HeaderMap::new();
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));
        headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));

        let body = match self.body {
            ReplyBody::Json => with_type(&mut headers, JSON, content),
            ReplyBody::Html => with_type(&mut headers, HTML, content),
            ReplyBody::Jwt => with_type(&mut headers, JWT, content),
            ReplyBody::Location => {
                put_header(&mut headers, LOCATION, "Location", content)?;
                None
            }
            ReplyBody::BearerChallenge => {
                put_header(&mut headers, WWW_AUTHENTICATE, "WWW-Authenticate", content)?;
                None
            }
            ReplyBody::Empty => None,
        };

        debug!(status = %self.status, body = ?self.body, "built reply from API action");

        Ok(HttpReply {
            status: self.status,
            headers,
            body,
        })
    }
}

fn with_type(headers: &mut HeaderMap, content_type: &'static str, content: Option<&str>) -> Option<String> {
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
    content.map(str::to_string)
}

fn put_header(
    headers: &mut HeaderMap,
    name: HeaderName,
    label: &'static str,
    content: Option<&str>,
) -> DtoResult<()> {
    let Some(content) = content else {
        return Ok(());
    };
    let value = HeaderValue::from_str(content).map_err(|err| DtoError::InvalidHeader {
        header: label,
        reason: err.to_string(),
    })?;
    headers.insert(name, value);
    Ok(())
}

/// An HTTP response ready to hand to a web framework.
#[derive(Debug, Clone)]
pub struct HttpReply {
    /// Status code.
    pub status: StatusCode,
    /// Headers.
    pub headers: HeaderMap,
    /// Body, if any.
    pub body: Option<String>,
}

impl HttpReply {
    /// Returns a header value as a string.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for HttpReply {
    fn into_response(self) -> axum::response::Response {
        match self.body {
            Some(body) => (self.status, self.headers, body).into_response(),
            None => (self.status, self.headers).into_response(),
        }
    }
}

/// An action enumeration of an API response.
pub trait Action: WireEnum {
    /// The HTTP response this action calls for, or `None` when the caller
    /// continues the flow itself (user interaction, credential checks,
    /// access granted, ...).
    fn directive(&self) -> Option<Directive>;
}

/// A response whose `action` decides what to send back to the client.
pub trait Interpret {
    /// Action enumeration of the response.
    type Action: Action;

    /// The action returned by the API.
    fn action(&self) -> Self::Action;

    /// The `responseContent` returned by the API.
    fn response_content(&self) -> Option<&str>;

    /// Builds the HTTP response the action calls for.
    ///
    /// # Errors
    ///
    /// See [`Directive::reply`].
    fn to_reply(&self) -> DtoResult<Option<HttpReply>> {
        self.action()
            .directive()
            .map(|directive| directive.reply(self.response_content()))
            .transpose()
    }
}

/// Implements [`Interpret`] for responses with `action` and
/// `response_content` fields.
///
/// Responses that carry no `responseContent` are listed after
/// `without content:`; their replies have a status and headers only.
macro_rules! interpret {
    (without content: $($response:ty => $action:ty),+ $(,)?) => {
        $(
            impl $crate::reply::Interpret for $response {
                type Action = $action;

                fn action(&self) -> $action {
                    self.action
                }

                fn response_content(&self) -> Option<&str> {
                    None
                }
            }
        )+
    };
    ($($response:ty => $action:ty),+ $(,)?) => {
        $(
            impl $crate::reply::Interpret for $response {
                type Action = $action;

                fn action(&self) -> $action {
                    self.action
                }

                fn response_content(&self) -> Option<&str> {
                    self.response_content.as_deref()
                }
            }
        )+
    };
}

pub(crate) use interpret;
