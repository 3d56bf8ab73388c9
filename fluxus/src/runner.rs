use std::any::type_name;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::{Arguments, BoxError, Error, Kind, Outcome, Payload};

/// A unit of work that settles into exactly one [`Outcome`].
///
/// Implement [`perform()`] to decide the outcome through the helpers on
/// [`Run`], then invoke the caller with [`call()`]. The entry point decodes
/// the arguments into `Input`, runs `perform`, and checks that a success or a
/// failure was decided.
///
/// `perform` has no receiver: the only instance involved in a call is the
/// [`Run`] the entry point creates, so every execution goes through the
/// guarded path. Callers are usually declared as empty enums for the same
/// reason.
///
/// The associated `Strategy` decides what happens to an error raised from
/// `perform`: [`Propagate`](crate::Propagate) returns it to the consumer,
/// [`Capture`](crate::Capture) turns it into an `exception` failure.
///
/// [`perform()`]: Caller::perform
/// [`call()`]: Caller::call
///
/// # Example
///
/// ```
/// use fluxus::{Arguments, BoxError, Caller, Capture, Run};
/// use serde::Deserialize;
///
/// enum ParseAge {}
///
/// #[derive(Deserialize)]
/// struct Input {
///     age: String,
/// }
///
/// impl Caller for ParseAge {
///     type Input = Input;
///     type Strategy = Capture;
///
///     fn perform(run: &mut Run, input: Input) -> Result<(), BoxError> {
///         let age: u8 = input.age.parse()?;
///         run.ok(age);
///         Ok(())
///     }
/// }
///
/// let parsed = ParseAge::call(Arguments::new().with("age", "42")).unwrap();
/// assert_eq!(parsed.payload(), &serde_json::json!(42));
///
/// let rejected = ParseAge::call(Arguments::new().with("age", "old")).unwrap();
/// assert!(rejected.is_failure());
/// assert_eq!(rejected.kind(), "exception");
/// ```
pub trait Caller {
    type Input: DeserializeOwned;
    type Strategy: Strategy;

    /// Runs the business logic and decides the outcome on `run`.
    ///
    /// The default implementation reports [`Error::CallerNotImplemented`].
    ///
    /// # Errors
    ///
    /// Any error may be raised; the caller's `Strategy` decides whether it
    /// reaches the consumer.
    fn perform(_run: &mut Run, _input: Self::Input) -> Result<(), BoxError> {
        Err(Error::CallerNotImplemented.into())
    }

    /// Invokes the caller with keyword-style arguments.
    ///
    /// # Errors
    ///
    /// Returns a contract violation if `perform` is not implemented or
    /// decides no outcome, and [`Error::Raised`] if `perform` raised an error
    /// that the strategy propagates.
    fn call(args: Arguments) -> Result<Outcome, Error>
    where
        Self: Sized,
    {
        execute::<Self>(args)
    }
}

/// A single execution of a [`Caller`].
///
/// A `Run` is created by the entry point and handed to `perform`, which
/// records its decision through [`success()`](Run::success) or
/// [`failure()`](Run::failure). It cannot be created anywhere else:
///
/// ```compile_fail
/// let run = fluxus::Run::new();
/// ```
#[derive(Debug)]
pub struct Run {
    outcome: Option<Outcome>,
}

impl Run {
    pub(crate) const fn new() -> Self {
        Self { outcome: None }
    }

    /// Decides a success. A later decision replaces an earlier one.
    pub fn success(&mut self, kind: impl Into<Kind>, payload: impl Into<Payload>) {
        self.outcome = Some(Outcome::success(kind, payload));
    }

    /// Decides a failure. A later decision replaces an earlier one.
    pub fn failure(&mut self, kind: impl Into<Kind>, payload: impl Into<Payload>) {
        self.outcome = Some(Outcome::failure(kind, payload));
    }

    /// Decides a success of kind [`Kind::OK`].
    ///
    /// Pass `()` for a null payload.
    pub fn ok(&mut self, payload: impl Into<serde_json::Value>) {
        self.success(Kind::OK, Payload::Value(payload.into()));
    }

    /// Decides a failure of kind [`Kind::ERROR`].
    ///
    /// Pass `()` for a null payload.
    pub fn error(&mut self, payload: impl Into<serde_json::Value>) {
        self.failure(Kind::ERROR, Payload::Value(payload.into()));
    }

    /// Takes the decided outcome, if any.
    pub(crate) fn take(&mut self) -> Option<Outcome> {
        self.outcome.take()
    }

    /// Ends the run with a failure, discarding any earlier decision.
    pub(crate) fn fail(self, kind: Kind, payload: impl Into<Payload>) -> Outcome {
        Outcome::failure(kind, payload)
    }
}

/// Decides what an error raised from `perform` becomes.
///
/// Contract violations never reach a strategy; they always propagate.
pub trait Strategy {
    /// Resolves `error`, raised by the caller named `caller`.
    ///
    /// `run` is the same instance `perform` was given.
    ///
    /// # Errors
    ///
    /// Returns the error the consumer should see, if it is not recovered.
    fn recover(run: Run, caller: &'static str, error: BoxError) -> Result<Outcome, Error>;
}

/// Why the guarded invocation did not produce an outcome.
enum Fault {
    Contract(Error),
    Raised(BoxError),
}

impl Fault {
    /// Separates library contract violations from runtime errors.
    ///
    /// An [`Error::Raised`] coming out of a nested caller is unwrapped so the
    /// original error is what a strategy sees.
    fn classify(error: BoxError) -> Self {
        match error.downcast::<Error>() {
            Ok(error) => match *error {
                Error::Raised { source, .. } => Self::Raised(source),
                contract => Self::Contract(contract),
            },
            Err(error) => Self::Raised(error),
        }
    }
}

/// Runs `perform` and requires it to decide an outcome.
fn guard<C: Caller>(
    run: &mut Run,
    caller: &'static str,
    args: Arguments,
) -> Result<Outcome, Fault> {
    let input = args
        .decode::<C::Input>(caller)
        .map_err(|error| Fault::Raised(Box::new(error)))?;

    C::perform(run, input).map_err(Fault::classify)?;

    run.take()
        .ok_or(Fault::Contract(Error::ResultTypeNotDefined))
}

/// The entry point shared by every caller.
pub(crate) fn execute<C: Caller>(args: Arguments) -> Result<Outcome, Error> {
    let caller = caller_name::<C>();
    debug!(caller, "calling");

    let mut run = Run::new();
    let result = match guard::<C>(&mut run, caller, args) {
        Ok(outcome) => Ok(outcome),
        Err(Fault::Contract(error)) => {
            warn!(caller, %error, "caller broke its contract");
            Err(error)
        }
        Err(Fault::Raised(error)) => C::Strategy::recover(run, caller, error),
    };

    if let Ok(outcome) = &result {
        debug!(caller, state = ?outcome.state(), kind = %outcome.kind(), "settled");
    }
    result
}

/// Returns the unqualified type name of a caller.
fn caller_name<C>() -> &'static str {
    let full_type_name = type_name::<C>();
    full_type_name.rsplit("::").next().unwrap_or(full_type_name)
}
