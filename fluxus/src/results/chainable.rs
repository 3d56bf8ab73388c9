use std::error::Error as StdError;

use tracing::debug;

use crate::{Arguments, Caller, Error};

use super::{Kind, Outcome, Payload, State};

/// Pipeline combinators.
///
/// None of these mutate the outcome. The `on_*` methods hand the payload to a
/// callback when their gate passes and always give the same outcome back, so
/// several of them can be attached in a row. [`then()`](Outcome::then)
/// continues a pipeline with the next caller.
impl Outcome {
    /// Calls `C` with this outcome's payload as its arguments.
    ///
    /// A failure short-circuits: it is returned as is and `C` never runs.
    /// A success payload that is a mapping becomes the arguments directly;
    /// any other payload is passed as `{ "result": payload }`.
    ///
    /// # Errors
    ///
    /// Returns whatever error the entry point of `C` returns.
    ///
    /// # Example
    ///
    /// ```
    /// use fluxus::{Arguments, BoxError, Caller, Outcome, Propagate, Run};
    /// use serde::Deserialize;
    ///
    /// enum Exclaim {}
    ///
    /// #[derive(Deserialize)]
    /// struct Input {
    ///     result: String,
    /// }
    ///
    /// impl Caller for Exclaim {
    ///     type Input = Input;
    ///     type Strategy = Propagate;
    ///
    ///     fn perform(run: &mut Run, input: Input) -> Result<(), BoxError> {
    ///         run.ok(format!("{}!", input.result));
    ///         Ok(())
    ///     }
    /// }
    ///
    /// let shouted = Outcome::success("ok", "hello").then::<Exclaim>().unwrap();
    /// assert_eq!(shouted.payload(), &"hello!");
    ///
    /// let skipped = Outcome::failure("error", "nope").then::<Exclaim>().unwrap();
    /// assert_eq!(skipped.payload(), &"nope");
    /// ```
    pub fn then<C: Caller>(self) -> Result<Outcome, Error> {
        self.then_with::<C>(Arguments::new())
    }

    /// Like [`then()`](Outcome::then), merging `extra` over the arguments
    /// taken from the payload.
    ///
    /// # Errors
    ///
    /// Returns whatever error the entry point of `C` returns.
    pub fn then_with<C: Caller>(self, extra: Arguments) -> Result<Outcome, Error> {
        if self.is_failure() {
            debug!(kind = %self.kind(), "short-circuiting on failure");
            return Ok(self);
        }

        let mut args = Arguments::from_payload(self.payload());
        args.merge(extra);
        C::call(args)
    }

    /// Calls `f` with the payload if this is a success.
    #[must_use]
    pub fn on_success<F: FnOnce(&Payload)>(self, f: F) -> Self {
        self.on_state(State::Success, None, f)
    }

    /// Calls `f` with the payload if this is a success of the given kind.
    #[must_use]
    pub fn on_success_kind<F: FnOnce(&Payload)>(self, kind: impl Into<Kind>, f: F) -> Self {
        self.on_state(State::Success, Some(&kind.into()), f)
    }

    /// Calls `f` with the payload if this is a failure.
    #[must_use]
    pub fn on_failure<F: FnOnce(&Payload)>(self, f: F) -> Self {
        self.on_state(State::Failure, None, f)
    }

    /// Calls `f` with the payload if this is a failure of the given kind.
    #[must_use]
    pub fn on_failure_kind<F: FnOnce(&Payload)>(self, kind: impl Into<Kind>, f: F) -> Self {
        self.on_state(State::Failure, Some(&kind.into()), f)
    }

    /// Calls `f` with the payload if this is a failure of kind `exception`.
    #[must_use]
    pub fn on_exception<F: FnOnce(&Payload)>(self, f: F) -> Self {
        self.on_state(State::Failure, Some(&Kind::EXCEPTION), f)
    }

    /// Calls `f` with the captured error if this is a failure of kind
    /// `exception` whose payload holds an error of type `E`.
    ///
    /// # Example
    ///
    /// ```
    /// use fluxus::{Exception, Kind, Outcome};
    ///
    /// let outcome = Outcome::failure(
    ///     Kind::EXCEPTION,
    ///     Exception::new(std::fmt::Error),
    /// );
    ///
    /// let mut seen = false;
    /// let _ = outcome
    ///     .on_exception_of::<std::io::Error, _>(|_| panic!("not an io error"))
    ///     .on_exception_of::<std::fmt::Error, _>(|_| seen = true);
    /// assert!(seen);
    /// ```
    #[must_use]
    pub fn on_exception_of<E, F>(self, f: F) -> Self
    where
        E: StdError + 'static,
        F: FnOnce(&E),
    {
        if self.matches(State::Failure, Some(&Kind::EXCEPTION)) {
            if let Some(error) = self
                .payload()
                .as_exception()
                .and_then(|exception| exception.downcast_ref::<E>())
            {
                f(error);
            }
        }
        self
    }

    fn on_state<F: FnOnce(&Payload)>(self, state: State, kind: Option<&Kind>, f: F) -> Self {
        if self.matches(state, kind) {
            f(self.payload());
        }
        self
    }
}
