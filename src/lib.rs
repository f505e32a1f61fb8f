#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! optfail — usage-error reporting and exit handling for command-line
//! option parsers.
//!
//! Parsing code detects an invalid command line, constructs the matching
//! [`UsageError`] variant, and returns it up the call chain as an ordinary
//! `Result` error. The single top-level boundary, [`run_main`], turns that
//! error into a one-line diagnostic on stderr and a process exit with the
//! error's status code. Nothing in between inspects or recovers from a
//! usage error; a malformed command line cannot be repaired.
//!
//! ```no_run
//! use optfail::{UsageError, run_main};
//!
//! fn parse_count(prog_name: &str, raw: &str) -> Result<u32, UsageError> {
//!     raw.parse().map_err(|_| UsageError::InvalidArgument {
//!         prog_name: prog_name.to_owned(),
//!         arg_name: "count".to_owned(),
//!         arg_value: raw.to_owned(),
//!     })
//! }
//!
//! fn main() {
//!     // Exits with status 2 and "prog: invalid count: 'abc'" on stderr.
//!     let count = run_main(|| parse_count("prog", "abc"));
//!     println!("{count}");
//! }
//! ```

pub mod errors;
pub mod exit;

pub use errors::UsageError;
pub use exit::{USAGE_ERROR, run_main, run_main_with};
