use std::{borrow::Cow, fmt};

/// A symbolic tag further classifying a success or a failure.
///
/// Kinds are chosen by the application (`"even"`, `"odd"`, `"persisted"`),
/// with a few reserved by the library itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Kind(Cow<'static, str>);

impl Kind {
    /// Default kind of a success decided through [`Run::ok`](crate::Run::ok).
    pub const OK: Self = Self::from_static("ok");

    /// Default kind of a failure decided through [`Run::error`](crate::Run::error).
    pub const ERROR: Self = Self::from_static("error");

    /// Kind of the failure synthesized when a captured error is converted.
    pub const EXCEPTION: Self = Self::from_static("exception");

    /// Kind of an outcome that was never given one.
    pub const UNKNOWN: Self = Self::from_static("unknown");

    /// Creates a kind from a static string.
    #[must_use]
    pub const fn from_static(tag: &'static str) -> Self {
        Self(Cow::Borrowed(tag))
    }

    /// Returns the tag as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Kind {
    fn default() -> Self {
        Self::UNKNOWN
    }
}

impl From<&'static str> for Kind {
    fn from(tag: &'static str) -> Self {
        Self::from_static(tag)
    }
}

impl From<String> for Kind {
    fn from(tag: String) -> Self {
        Self(Cow::Owned(tag))
    }
}

impl PartialEq<str> for Kind {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Kind {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
