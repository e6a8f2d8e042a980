//! # authlete-dto
//!
//! Request and response records for the Authlete OAuth 2.0 / OpenID Connect
//! API, and the rules for turning API outcomes into HTTP responses.
//!
//! Every record maps one-to-one onto a JSON body with camelCase field names.
//! Enumerations travel as their upper-snake-case names; the single exception,
//! `Service::supported_snses`, is typed [`wire::Ordinal`].
//!
//! ```ignore
//! use authlete_dto::{ApiRequest, Interpret, decode_response};
//! use authlete_dto::token::TokenRequest;
//!
//! let request = TokenRequest::new(form_body);
//! let body = request.to_json()?;
//! // POST `body` to `config.endpoint_url(&request.path())?`
//! let response: <TokenRequest as ApiRequest>::Response = decode_response(&reply_body)?;
//! match response.to_reply()? {
//!     Some(reply) => return Ok(reply),
//!     None => { /* PASSWORD: check credentials, then call the issue API */ }
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod api;
pub mod authorization;
pub mod backchannel;
pub mod client;
pub mod client_registration;
pub mod common;
pub mod device;
pub mod error;
pub mod introspection;
pub mod pushed_auth_req;
pub mod reply;
pub mod revocation;
pub mod service;
pub mod token;
pub mod types;
pub mod userinfo;
pub mod wire;

pub use api::{ApiRequest, decode_response};
pub use client::Client;
pub use common::{ApiResponse, Pair, Property, Scope, SnsCredentials, TaggedValue};
pub use error::{DtoError, DtoResult};
pub use reply::{Action, Directive, HttpReply, Interpret, ReplyBody};
pub use service::Service;
pub use wire::{Ordinal, WireEnum};
