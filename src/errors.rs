//! The usage-error taxonomy.
use std::io::{self, Write};

use thiserror::Error;

use crate::exit::USAGE_ERROR;

/// A fatal command-line usage error.
///
/// Parsing code constructs the matching variant at the point an invalid
/// condition is detected and returns it up the call chain as an ordinary
/// `Result` error. It is consumed exactly once, by
/// [`run_main`](crate::run_main) at the top level; no intermediate layer
/// inspects or recovers from it.
///
/// `Display` yields the bare message without the program-name prefix; the
/// full diagnostic line is produced by [`report`](Self::report).
#[derive(Debug, Error)]
pub enum UsageError {
    /// An option was supplied that the parser does not recognize.
    #[error("unrecognized option '{option_name}'")]
    UnrecognizedOption {
        /// Display name of the invoking program.
        prog_name: String,
        /// The option as it appeared on the command line (e.g., "--foo").
        option_name: String,
    },

    /// A value was still missing once parsing completed.
    #[error("missing {value_name}")]
    MissingValue {
        /// Display name of the invoking program.
        prog_name: String,
        /// Name of the missing value (e.g., "TARGET").
        value_name: String,
    },

    /// The value supplied for an argument is invalid.
    ///
    /// The raw value is rendered through [`str::escape_default`] so quotes,
    /// backslashes, and control characters cannot corrupt the one-line
    /// diagnostic.
    #[error("invalid {arg_name}: '{}'", arg_value.escape_default())]
    InvalidArgument {
        /// Display name of the invoking program.
        prog_name: String,
        /// Name of the offending argument.
        arg_name: String,
        /// The raw value as supplied by the user.
        arg_value: String,
    },

    /// An option that requires an argument was supplied without one.
    #[error("option '{opt_name}' is missing a required argument")]
    OptionMissingRequiredArgument {
        /// Display name of the invoking program.
        prog_name: String,
        /// The option that was missing its argument.
        opt_name: String,
    },

    /// Extension point for failure kinds outside the built-in taxonomy.
    ///
    /// The exit code is required, not defaulted: new kinds never inherit
    /// [`USAGE_ERROR`] implicitly.
    #[error("{message}")]
    Custom {
        /// Display name of the invoking program.
        prog_name: String,
        /// Complete human-readable message.
        message: String,
        /// Process exit status for this failure kind.
        exit_code: i32,
    },
}

impl UsageError {
    /// Display name of the invoking program, used to prefix the diagnostic.
    #[must_use]
    pub fn prog_name(&self) -> &str {
        match self {
            Self::UnrecognizedOption { prog_name, .. }
            | Self::MissingValue { prog_name, .. }
            | Self::InvalidArgument { prog_name, .. }
            | Self::OptionMissingRequiredArgument { prog_name, .. }
            | Self::Custom { prog_name, .. } => prog_name,
        }
    }

    /// Return the process exit status for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::UnrecognizedOption { .. }
            | Self::MissingValue { .. }
            | Self::InvalidArgument { .. }
            | Self::OptionMissingRequiredArgument { .. } => USAGE_ERROR,
            Self::Custom { exit_code, .. } => *exit_code,
        }
    }

    /// Write the diagnostic line `"<prog_name>: <message>"` to `out`,
    /// newline-terminated. Exactly one line per call.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn report<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}: {self}", self.prog_name())
    }

    /// Write the diagnostic to stderr and terminate the process with
    /// [`exit_code`](Self::exit_code). Never returns.
    pub fn print_and_exit(&self) -> ! {
        let _ = self.report(&mut io::stderr().lock());
        std::process::exit(self.exit_code())
    }
}
