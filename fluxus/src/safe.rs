use tracing::warn;

use crate::{BoxError, Error, Exception, Kind, Outcome, Run, Strategy};

/// The protective strategy: errors raised from `perform` become a failure.
///
/// The failure has kind [`Kind::EXCEPTION`] and carries the original error as
/// an [`Exception`] payload, ready for
/// [`Outcome::on_exception()`](crate::Outcome::on_exception). Contract
/// violations still propagate.
///
/// The payload is the error itself rather than a mapping with an `exception`
/// key. Read it with [`Payload::as_exception()`](crate::Payload::as_exception).
#[derive(Debug, Clone, Copy, Default)]
pub struct Capture;

impl Strategy for Capture {
    fn recover(run: Run, caller: &'static str, error: BoxError) -> Result<Outcome, Error> {
        warn!(caller, %error, "captured raised error");
        Ok(run.fail(Kind::EXCEPTION, Exception::from(error)))
    }
}
