//! # authlete-core
//!
//! Configuration and error handling shared by the Authlete API crates.
//!
//! The message catalog itself lives in `authlete-dto`. This crate only knows
//! where the remote API is and which credentials a caller-side HTTP client
//! presents to it.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod error;

pub use config::AuthleteConfig;
pub use error::{Error, Result};
