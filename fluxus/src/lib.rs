//! Command objects that always settle into a typed outcome.
//!
//! A [`Caller`] is a unit of work. It is invoked through its
//! [`Caller::call`] entry point with keyword-style [`Arguments`] and must
//! finish with exactly one [`Outcome`]: a success or a failure, each tagged
//! with a symbolic [`Kind`] and carrying a [`Payload`].
//!
//! - [`Outcome`]: the immutable result value and its chaining combinators
//! - [`Caller`]: the unit-of-work trait and its guarded entry point
//! - [`Run`]: the per-invocation instance that records the outcome
//! - [`Propagate`]: the strategy that lets raised errors bubble up
//! - [`Capture`]: the strategy that turns raised errors into an
//!   `exception` failure
//!
//! # Example
//!
//! ```
//! use fluxus::{Arguments, BoxError, Caller, Propagate, Run};
//! use serde::Deserialize;
//!
//! enum CheckEven {}
//!
//! #[derive(Deserialize)]
//! struct Input {
//!     number: i64,
//! }
//!
//! impl Caller for CheckEven {
//!     type Input = Input;
//!     type Strategy = Propagate;
//!
//!     fn perform(run: &mut Run, Input { number }: Input) -> Result<(), BoxError> {
//!         if number % 2 == 0 {
//!             run.success("even", format!("{number} is even"));
//!         } else {
//!             run.failure("odd", format!("{number} is odd"));
//!         }
//!         Ok(())
//!     }
//! }
//!
//! let outcome = CheckEven::call(Arguments::new().with("number", 2)).unwrap();
//!
//! assert!(outcome.is_success());
//! assert_eq!(outcome.kind(), "even");
//! assert_eq!(outcome.payload(), &"2 is even");
//! ```

mod arguments;
mod caller;
mod error;
mod results;
mod runner;
mod safe;

pub use arguments::Arguments;
pub use caller::Propagate;
pub use error::{ArgumentError, BoxError, Error};
pub use results::{Exception, Kind, Outcome, Payload, State};
pub use runner::{Caller, Run, Strategy};
pub use safe::Capture;

/// Alias for the propagating strategy.
pub type Object = Propagate;

/// Alias for the capturing strategy.
pub type SafeObject = Capture;

/// The version of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
