use std::{error::Error as StdError, fmt, sync::Arc};

use serde_json::{Map, Value};

use crate::BoxError;

/// The data carried by an [`Outcome`](crate::Outcome).
///
/// Most payloads are plain application data. A failure produced by the
/// capturing strategy carries the captured error instead.
#[derive(Debug, Clone)]
pub enum Payload {
    Value(Value),
    Exception(Exception),
}

impl Payload {
    /// Returns `true` if the payload is a mapping of named values.
    #[must_use]
    pub fn is_mapping(&self) -> bool {
        matches!(self, Self::Value(Value::Object(_)))
    }

    #[must_use]
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Value(value) => Some(value),
            Self::Exception(_) => None,
        }
    }

    #[must_use]
    pub fn as_exception(&self) -> Option<&Exception> {
        match self {
            Self::Exception(exception) => Some(exception),
            Self::Value(_) => None,
        }
    }

    /// Looks up a named value when the payload is a mapping.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_value().and_then(|value| value.get(key))
    }
}

/// An empty mapping.
impl Default for Payload {
    fn default() -> Self {
        Self::Value(Value::Object(Map::new()))
    }
}

impl PartialEq for Payload {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Value(a), Self::Value(b)) => a == b,
            (Self::Exception(a), Self::Exception(b)) => Arc::ptr_eq(&a.0, &b.0),
            _ => false,
        }
    }
}

impl PartialEq<Value> for Payload {
    fn eq(&self, other: &Value) -> bool {
        self.as_value() == Some(other)
    }
}

impl PartialEq<&str> for Payload {
    fn eq(&self, other: &&str) -> bool {
        self.as_value().and_then(Value::as_str) == Some(*other)
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<Map<String, Value>> for Payload {
    fn from(map: Map<String, Value>) -> Self {
        Self::Value(Value::Object(map))
    }
}

impl From<&str> for Payload {
    fn from(text: &str) -> Self {
        Self::Value(Value::from(text))
    }
}

impl From<String> for Payload {
    fn from(text: String) -> Self {
        Self::Value(Value::from(text))
    }
}

impl From<Exception> for Payload {
    fn from(exception: Exception) -> Self {
        Self::Exception(exception)
    }
}

/// A captured error object.
///
/// Cloning is cheap and every clone refers to the same underlying error, so
/// callbacks can inspect it without taking it out of the outcome.
#[derive(Clone)]
pub struct Exception(Arc<dyn StdError + Send + Sync + 'static>);

impl Exception {
    /// Wraps an error.
    pub fn new<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self(Arc::new(error))
    }

    /// Returns `true` if the captured error is of type `E`.
    #[must_use]
    pub fn is<E: StdError + 'static>(&self) -> bool {
        self.0.is::<E>()
    }

    /// Returns the captured error as `E`, if that is its concrete type.
    #[must_use]
    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        self.0.downcast_ref::<E>()
    }

    #[must_use]
    pub fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
        &*self.0
    }
}

impl From<BoxError> for Exception {
    fn from(error: BoxError) -> Self {
        Self(Arc::from(error))
    }
}

impl fmt::Debug for Exception {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Exception").field(&self.0).finish()
    }
}

impl fmt::Display for Exception {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
