//! The process-exit boundary: where a structured [`UsageError`] becomes a
//! diagnostic on stderr and a terminated process.
use std::convert::Infallible;
use std::io::Write;

use crate::errors::UsageError;

/// Conventional exit status for incorrect command-line usage.
pub const USAGE_ERROR: i32 = 2;

/// Run `work` to completion, or report its [`UsageError`] and exit.
///
/// On success the value is returned unchanged and nothing is written. On
/// failure, exactly one line `"<prog_name>: <message>"` goes to stderr and
/// the process terminates with the error's exit code; control never returns
/// to the caller.
///
/// Termination is global, not scoped to a thread or task: invoked off the
/// main thread, this still halts the whole process. Panics raised inside
/// `work` are not intercepted and unwind through as usual.
pub fn run_main<R>(work: impl FnOnce() -> Result<R, UsageError>) -> R {
    match work() {
        Ok(value) => value,
        Err(err) => err.print_and_exit(),
    }
}

/// [`run_main`] with the error stream and exit behavior supplied by the
/// caller, so tests can capture the diagnostic instead of terminating the
/// test process.
///
/// `exit` must diverge; [`Infallible`] makes that checkable, since both
/// `process::exit` and a panicking test stand-in coerce to it.
pub fn run_main_with<R, W, X>(
    work: impl FnOnce() -> Result<R, UsageError>,
    stderr: &mut W,
    exit: X,
) -> R
where
    W: Write,
    X: FnOnce(i32) -> Infallible,
{
    match work() {
        Ok(value) => value,
        Err(err) => {
            // Write failures are unreportable at this point; the exit code
            // still carries the outcome.
            let _ = err.report(stderr);
            match exit(err.exit_code()) {}
        }
    }
}
