//! Tri-state wire fields
//!
//! The Elastigroup API distinguishes a field that is not sent from a field that
//! is sent as `null`. The latter clears remote state.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A field that can be omitted, explicitly cleared, or set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Nullable<T> {
    /// Not sent
    #[default]
    Omitted,
    /// Sent as `null`
    Null,
    /// Sent with a value
    Value(T),
}

impl<T> Nullable<T> {
    /// Set the field only when a value is given. Used when creating a resource.
    pub fn attach(&mut self, value: Option<T>) {
        if let Some(value) = value {
            *self = Nullable::Value(value);
        }
    }

    /// Always set the field, to `null` when no value is given. Used on update so
    /// that a previously configured value can be cleared.
    pub fn replace(&mut self, value: Option<T>) {
        *self = match value {
            Some(value) => Nullable::Value(value),
            None => Nullable::Null,
        };
    }

    /// Whether the field is left out of the request
    #[must_use]
    pub fn is_omitted(&self) -> bool {
        matches!(self, Nullable::Omitted)
    }

    /// The value, if one is set
    #[must_use]
    pub fn as_value(&self) -> Option<&T> {
        match self {
            Nullable::Value(value) => Some(value),
            Nullable::Omitted | Nullable::Null => None,
        }
    }
}

impl<T> From<Option<T>> for Nullable<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Nullable::Null, Nullable::Value)
    }
}

impl<T: Serialize> Serialize for Nullable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Nullable::Value(value) => value.serialize(serializer),
            Nullable::Omitted | Nullable::Null => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Nullable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Nullable::from)
    }
}
