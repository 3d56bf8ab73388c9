use tracing::debug;

use crate::{BoxError, Error, Outcome, Run, Strategy};

/// The default strategy: errors raised from `perform` reach the consumer.
///
/// The original error is kept as the source of [`Error::Raised`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Propagate;

impl Strategy for Propagate {
    fn recover(_run: Run, caller: &'static str, error: BoxError) -> Result<Outcome, Error> {
        debug!(caller, %error, "propagating raised error");
        Err(Error::Raised {
            caller,
            source: error,
        })
    }
}
