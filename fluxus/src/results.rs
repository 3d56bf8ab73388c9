mod chainable;
mod kind;
mod outcome;
mod payload;

pub use kind::Kind;
pub use outcome::{Outcome, State};
pub use payload::{Exception, Payload};
