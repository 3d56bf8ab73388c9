use std::error::Error as StdError;

use thiserror::Error;

/// A type-erased error raised from within a caller's `perform`.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Errors surfaced by a caller's entry point.
///
/// The first three variants are contract violations: the abstraction itself
/// is misused. They reach the consumer under every strategy and are never
/// turned into a failure outcome.
#[derive(Debug, Error)]
pub enum Error {
    /// The caller never overrode `perform`.
    #[error("the flow must be implemented by a caller")]
    CallerNotImplemented,

    /// `perform` finished without deciding a success or a failure.
    #[error("flow results must be Success or Failure")]
    ResultTypeNotDefined,

    /// An outcome was requested without a concrete success or failure state.
    #[error("the state must be defined by a concrete result")]
    StateNotImplemented,

    /// `perform` raised an error and the strategy let it propagate.
    #[error("caller `{caller}` raised an error")]
    Raised {
        caller: &'static str,
        #[source]
        source: BoxError,
    },
}

impl Error {
    /// Returns `true` if this error signals misuse of the abstraction rather
    /// than a runtime failure of the business logic.
    #[must_use]
    pub fn is_contract_violation(&self) -> bool {
        !matches!(self, Self::Raised { .. })
    }

    /// Returns the error raised by `perform`, if that is what this is.
    #[must_use]
    pub fn raised(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        match self {
            Self::Raised { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

/// Keyword arguments could not be decoded into a caller's input.
#[derive(Debug, Error)]
#[error("invalid arguments for `{caller}`")]
pub struct ArgumentError {
    pub caller: &'static str,
    #[source]
    pub source: serde_json::Error,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Error)]
    #[error("the disk is full")]
    struct DiskFull;

    #[test]
    fn contract_violations_are_classified() {
        assert!(Error::CallerNotImplemented.is_contract_violation());
        assert!(Error::ResultTypeNotDefined.is_contract_violation());
        assert!(Error::StateNotImplemented.is_contract_violation());

        let raised = Error::Raised {
            caller: "Persist",
            source: Box::new(DiskFull),
        };
        assert!(!raised.is_contract_violation());
    }

    #[test]
    fn messages_match_the_contract() {
        assert_eq!(
            Error::CallerNotImplemented.to_string(),
            "the flow must be implemented by a caller"
        );
        assert_eq!(
            Error::ResultTypeNotDefined.to_string(),
            "flow results must be Success or Failure"
        );
    }

    #[test]
    fn raised_exposes_the_original_error() {
        let error = Error::Raised {
            caller: "Persist",
            source: Box::new(DiskFull),
        };

        assert_eq!(error.to_string(), "caller `Persist` raised an error");
        assert!(error.raised().is_some_and(|e| e.is::<DiskFull>()));
        let source = error.source().map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("the disk is full"));
        assert!(Error::ResultTypeNotDefined.raised().is_none());
    }
}
