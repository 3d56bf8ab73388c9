use crate::Error;

use super::{Kind, Payload};

/// The disposition of an [`Outcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    /// Neither success nor failure.
    ///
    /// No outcome can be built in this state; it only names the absence of a
    /// decision.
    Unknown,
    Success,
    Failure,
}

/// The immutable result of running a caller.
///
/// An outcome is either a success or a failure, fixed when it is built and
/// never changed afterwards. Both carry a [`Kind`] and a [`Payload`].
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    state: State,
    kind: Kind,
    payload: Payload,
}

impl Outcome {
    /// Creates a successful outcome.
    pub fn success(kind: impl Into<Kind>, payload: impl Into<Payload>) -> Self {
        Self {
            state: State::Success,
            kind: kind.into(),
            payload: payload.into(),
        }
    }

    /// Creates a failed outcome.
    pub fn failure(kind: impl Into<Kind>, payload: impl Into<Payload>) -> Self {
        Self {
            state: State::Failure,
            kind: kind.into(),
            payload: payload.into(),
        }
    }

    /// Creates an outcome in the given state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StateNotImplemented`] for [`State::Unknown`], since an
    /// outcome must be a concrete success or failure.
    pub fn new(
        state: State,
        kind: impl Into<Kind>,
        payload: impl Into<Payload>,
    ) -> Result<Self, Error> {
        match state {
            State::Success => Ok(Self::success(kind, payload)),
            State::Failure => Ok(Self::failure(kind, payload)),
            State::Unknown => Err(Error::StateNotImplemented),
        }
    }

    #[must_use]
    pub fn state(&self) -> State {
        self.state
    }

    #[must_use]
    pub fn kind(&self) -> &Kind {
        &self.kind
    }

    #[must_use]
    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Consumes the outcome and returns its payload.
    #[must_use]
    pub fn into_payload(self) -> Payload {
        self.payload
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.state == State::Success
    }

    #[must_use]
    pub fn is_failure(&self) -> bool {
        self.state == State::Failure
    }

    #[must_use]
    pub fn is_unknown(&self) -> bool {
        !(self.is_success() || self.is_failure())
    }

    /// Returns `true` if the outcome is in `state` and, when a kind is
    /// expected, carries that kind.
    pub(crate) fn matches(&self, state: State, expected: Option<&Kind>) -> bool {
        self.state == state && expected.is_none_or(|kind| *kind == self.kind)
    }
}
