// config.rs — Compile-time configuration constants and environment overrides.

use anyhow::{anyhow, Context};

// Maximum number of worker threads a driver may request.
// Larger requests are reduced to this value by `workers::resolve_nb_workers`.
pub const NB_WORKERS_MAX: usize = 200;

// Worker count meaning "size from the host's processor count".
pub const NB_WORKERS_AUTO: usize = 0;

// Jobs that may wait in a `WorkerPool` queue beyond one per worker.
pub const QUEUE_SIZE_DEFAULT: usize = 1;

// Environment variable overriding the worker count.
// Accepts a non-negative decimal; 0 means auto.
pub const NB_WORKERS_ENV: &str = "RTSHIM_NBWORKERS";

// Display level when neither -v nor -q is given.
pub const DISPLAY_LEVEL_DEFAULT: u32 = 2;

/// Parses a worker-count value as accepted by [`NB_WORKERS_ENV`].
pub fn parse_nb_workers(value: &str) -> anyhow::Result<usize> {
    let trimmed = value.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(anyhow!("only numeric values are allowed, got {:?}", value));
    }
    trimmed
        .parse::<usize>()
        .with_context(|| format!("worker count {:?} is out of range", value))
}

/// Reads the worker-count override from the environment.
///
/// Returns `Ok(None)` when the variable is unset.
pub fn nb_workers_from_env() -> anyhow::Result<Option<usize>> {
    match std::env::var(NB_WORKERS_ENV) {
        Ok(v) => parse_nb_workers(&v)
            .map(Some)
            .with_context(|| format!("invalid {}", NB_WORKERS_ENV)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(anyhow!("invalid {}: {}", NB_WORKERS_ENV, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_decimal() {
        assert_eq!(parse_nb_workers("4").unwrap(), 4);
        assert_eq!(parse_nb_workers(" 12 ").unwrap(), 12);
        assert_eq!(parse_nb_workers("0").unwrap(), NB_WORKERS_AUTO);
    }

    #[test]
    fn parse_rejects_non_numeric() {
        assert!(parse_nb_workers("").is_err());
        assert!(parse_nb_workers("-3").is_err());
        assert!(parse_nb_workers("four").is_err());
        assert!(parse_nb_workers("4x").is_err());
    }

    #[test]
    fn parse_rejects_overflow() {
        let err = parse_nb_workers("99999999999999999999999999").unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }
}
