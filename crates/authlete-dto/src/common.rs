//! Small shapes shared across the catalog.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::Sns;

/// Result fields carried by almost every API response.
///
/// Embedded with `#[serde(flatten)]`, so both fields stay at the top level of
/// the response object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    /// Machine-readable result code, e.g. `A004001`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_code: Option<String>,

    /// Human-readable diagnostic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_message: Option<String>,
}

impl ApiResponse {
    /// Creates a result with both fields set.
    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            result_code: Some(code.into()),
            result_message: Some(message.into()),
        }
    }
}

/// A string key/value pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pair {
    /// Key.
    #[serde(default, skip_serializing_if = "is_default")]
    pub key: String,
    /// Value.
    #[serde(default, skip_serializing_if = "is_default")]
    pub value: String,
}

impl Pair {
    /// Creates a pair.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A string qualified by a BCP 47 language tag, e.g. a localized client name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedValue {
    /// Language tag such as `ja` or `en-US`.
    #[serde(default, skip_serializing_if = "is_default")]
    pub tag: String,
    /// Localized value.
    #[serde(default, skip_serializing_if = "is_default")]
    pub value: String,
}

impl TaggedValue {
    /// Creates a tagged value.
    #[must_use]
    pub fn new(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            value: value.into(),
        }
    }
}

/// Arbitrary data attached to an access token or authorization code.
///
/// Hidden properties are stored with the token but never shown to the client
/// in token or introspection responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    /// Key.
    #[serde(default, skip_serializing_if = "is_default")]
    pub key: String,
    /// Value.
    #[serde(default, skip_serializing_if = "is_default")]
    pub value: String,
    /// Whether the property is hidden from the client.
    #[serde(default, skip_serializing_if = "is_default")]
    pub hidden: bool,
}

impl Property {
    /// Creates a visible property.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            hidden: false,
        }
    }

    /// Creates a hidden property.
    #[must_use]
    pub fn hidden(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            hidden: true,
            ..Self::new(key, value)
        }
    }
}

/// A scope supported by a service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scope {
    /// Scope name.
    pub name: String,

    /// Whether the scope is granted when a request names none.
    #[serde(default, skip_serializing_if = "is_default")]
    pub default_entry: bool,

    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Localized descriptions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descriptions: Option<Vec<TaggedValue>>,

    /// Free-form attributes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<Pair>>,
}

impl Scope {
    /// Creates a scope with only a name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Returns the value of the named attribute.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .as_deref()?
            .iter()
            .find(|p| p.key == key)
            .map(|p| p.value.as_str())
    }
}

/// Credentials of an application registered with a social network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnsCredentials {
    /// Social network.
    pub sns: Sns,

    /// Application key issued by the social network.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Application secret issued by the social network.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_secret: Option<String>,
}

/// Whether a field holds its type's default and stays off the wire.
pub(crate) fn is_default<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

/// Converts a millisecond epoch timestamp into a UTC time.
///
/// Zero means "not set" throughout the API and maps to `None`.
#[must_use]
pub fn millis_to_utc(millis: i64) -> Option<DateTime<Utc>> {
    if millis == 0 {
        None
    } else {
        DateTime::from_timestamp_millis(millis)
    }
}
