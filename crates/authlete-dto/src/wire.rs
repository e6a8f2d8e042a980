//! Wire encodings for enumerations.
//!
//! Enum fields travel as their upper-snake-case symbolic name unless the field
//! is declared as [`Ordinal<T>`], in which case the variant's zero-based
//! declaration index is sent as a JSON integer. The encoding is a property of
//! the field's type, so a record's schema shows it directly.

use std::fmt;

use serde::de::{self, Deserializer, Unexpected};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{DtoError, DtoResult};

/// A closed enumeration with a fixed wire string per variant.
pub trait WireEnum: Copy + Eq + fmt::Debug + 'static {
    /// Type name used in error messages.
    const NAME: &'static str;

    /// All variants in declaration order.
    const VARIANTS: &'static [Self];

    /// Symbolic wire name of this variant.
    fn as_str(&self) -> &'static str;

    /// Zero-based declaration index of this variant.
    fn ordinal(&self) -> u32;

    /// Looks a variant up by ordinal.
    #[must_use]
    fn from_ordinal(ordinal: u32) -> Option<Self> {
        Self::VARIANTS.get(ordinal as usize).copied()
    }

    /// Looks a variant up by ordinal, failing with a catalog error.
    ///
    /// # Errors
    ///
    /// Returns [`DtoError::UnknownOrdinal`] when no variant has that index.
    fn try_from_ordinal(ordinal: u32) -> DtoResult<Self> {
        Self::from_ordinal(ordinal).ok_or(DtoError::UnknownOrdinal {
            enumeration: Self::NAME,
            ordinal: u64::from(ordinal),
        })
    }
}

/// An enum value that serializes as its integer ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ordinal<T>(pub T);

impl<T> Ordinal<T> {
    /// Unwraps the enum value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> From<T> for Ordinal<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T: WireEnum> Serialize for Ordinal<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.0.ordinal())
    }
}

impl<'de, T: WireEnum> Deserialize<'de> for Ordinal<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = u64::deserialize(deserializer)?;
        u32::try_from(raw)
            .ok()
            .and_then(T::from_ordinal)
            .map(Self)
            .ok_or_else(|| {
                de::Error::invalid_value(
                    Unexpected::Unsigned(raw),
                    &format!("an ordinal of {}", T::NAME).as_str(),
                )
            })
    }
}
