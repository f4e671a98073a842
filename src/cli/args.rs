// cli/args.rs — Command-line definition for the `rtshim` binary.

use clap::{ArgAction, Parser, Subcommand};

/// Platform runtime shim: processor counting and process termination.
#[derive(Debug, Parser)]
#[command(name = "rtshim", version, about)]
pub struct Cli {
    /// Increase verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Decrease verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// Print the number of logical processors available to this process
    Cores,

    /// Terminate immediately with STATUS as the exit status
    Exit {
        #[arg(allow_negative_numbers = true)]
        status: i32,
    },

    /// Print the worker count a driver would use
    Workers {
        /// Worker threads (0 = auto); overrides RTSHIM_NBWORKERS
        #[arg(short = 'T', long)]
        threads: Option<usize>,
    },

    /// Run jobs on a worker pool and report completion
    Pool {
        /// Worker threads (0 = auto); overrides RTSHIM_NBWORKERS
        #[arg(short = 'T', long)]
        threads: Option<usize>,

        /// Number of jobs to submit
        #[arg(long, default_value_t = 64)]
        jobs: usize,
    },

    /// Print version, runtime variant and host sizing
    Info,
}

/// Parses `args` (including the program name) without exiting on error.
pub fn parse_from<I, T>(args: I) -> anyhow::Result<Cli>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Ok(Cli::try_parse_from(args)?)
}
