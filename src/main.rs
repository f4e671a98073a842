//! Binary entry point for the `rtshim` command-line tool.
//!
//! Parses arguments with `clap`, dispatches to [`rtshim::cli::run`], and
//! always leaves through [`rtshim::terminate`] so the exit path is the same
//! one drivers use.

use clap::Parser;

use rtshim::cli::{run, Cli};

fn main() {
    // Usage errors, --help and --version are reported by clap itself; its
    // exit codes (2 for usage, 0 for help) are kept.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            rtshim::terminate(e.exit_code());
        }
    };

    match run(cli) {
        Ok(code) => rtshim::terminate(code),
        Err(e) => rtshim::end_process!(1, "rtshim: {:#}", e),
    }
}
