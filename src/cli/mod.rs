//! Command-line interface for the `rtshim` binary.
//!
//! | Submodule    | Responsibility |
//! |--------------|---------------|
//! | [`args`]     | `clap` definition of global flags and subcommands. |
//! | [`dispatch`] | Runs a parsed command against the runtime shim and returns the exit code. |
//!
//! Typical call sequence: [`args::parse_from`] → [`dispatch::run`] → [`crate::sys::terminate`].

pub mod args;
pub mod dispatch;

pub use args::{parse_from, Cli, Command};
pub use dispatch::run;
