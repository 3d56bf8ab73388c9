use fluxus::{Arguments, BoxError, Caller, Run};
use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// Raised when a number check receives something that is not a number.
#[derive(Debug, Error)]
#[error("undefined method `odd?` for {0}")]
pub struct NoMethodError(pub Value);

/// Input of the even/odd checkers.
#[derive(Debug, Deserialize)]
pub struct Number {
    pub number: Value,
}

/// Shared body of the even/odd checkers.
///
/// Strings are left undecided, which breaks the caller contract. Anything
/// else that is not an integer raises [`NoMethodError`].
fn check_even(run: &mut Run, Number { number }: Number) -> Result<(), BoxError> {
    if number.is_string() {
        return Ok(());
    }
    let Some(value) = number.as_i64() else {
        return Err(NoMethodError(number).into());
    };

    if value % 2 == 0 {
        run.success("even", format!("{value} is even"));
    } else {
        run.failure("odd", format!("{value} is odd"));
    }
    Ok(())
}

pub mod propagating {
    use fluxus::Propagate;

    use super::*;

    pub enum CheckEven {}

    impl Caller for CheckEven {
        type Input = Number;
        type Strategy = Propagate;

        fn perform(run: &mut Run, input: Number) -> Result<(), BoxError> {
            check_even(run, input)
        }
    }

    /// Never overrides `perform`.
    pub enum NoFluxus {}

    impl Caller for NoFluxus {
        type Input = Arguments;
        type Strategy = Propagate;
    }
}

pub mod capturing {
    use fluxus::Capture;

    use super::*;

    pub enum CheckEven {}

    impl Caller for CheckEven {
        type Input = Number;
        type Strategy = Capture;

        fn perform(run: &mut Run, input: Number) -> Result<(), BoxError> {
            check_even(run, input)
        }
    }

    /// Never overrides `perform`.
    pub enum NoFluxus {}

    impl Caller for NoFluxus {
        type Input = Arguments;
        type Strategy = Capture;
    }
}

pub mod chaining {
    use fluxus::Propagate;

    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct Named {
        pub name: String,
    }

    /// Succeeds with a mapping payload.
    pub enum HashReturning {}

    impl Caller for HashReturning {
        type Input = Named;
        type Strategy = Propagate;

        fn perform(run: &mut Run, Named { name }: Named) -> Result<(), BoxError> {
            let mut payload = Map::new();
            payload.insert("full_name".into(), name.into());
            run.ok(payload);
            Ok(())
        }
    }

    /// Succeeds with a plain string payload.
    pub enum StringReturning {}

    impl Caller for StringReturning {
        type Input = Named;
        type Strategy = Propagate;

        fn perform(run: &mut Run, Named { name }: Named) -> Result<(), BoxError> {
            run.ok(format!("Hello, {name}!"));
            Ok(())
        }
    }

    #[derive(Debug, Deserialize)]
    pub struct FullName {
        pub full_name: String,
        #[serde(flatten)]
        pub rest: Map<String, Value>,
    }

    /// Expects a `full_name` and passes every other argument through.
    pub enum ExpectsHash {}

    impl Caller for ExpectsHash {
        type Input = FullName;
        type Strategy = Propagate;

        fn perform(
            run: &mut Run,
            FullName { full_name, mut rest }: FullName,
        ) -> Result<(), BoxError> {
            rest.insert("user".into(), full_name.into());
            rest.insert("processed".into(), true.into());
            run.ok(rest);
            Ok(())
        }
    }

    #[derive(Debug, Deserialize)]
    pub struct Wrapped {
        pub result: String,
    }

    /// Expects the wrapped `result` of a non-mapping payload.
    pub enum ExpectsResult {}

    impl Caller for ExpectsResult {
        type Input = Wrapped;
        type Strategy = Propagate;

        fn perform(run: &mut Run, Wrapped { result }: Wrapped) -> Result<(), BoxError> {
            run.ok(format!("{result} (Processed)"));
            Ok(())
        }
    }
}
