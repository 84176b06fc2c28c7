//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Initialize tracing/logging for the process.
///
/// Logs go to stderr, leaving stdout to the accounts CSV.
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(directives: Option<&str>) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(directives))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Build the log filter: explicit `directives` first, then `RUST_LOG`, then
/// warnings and errors only.
pub fn filter(directives: Option<&str>) -> EnvFilter {
    match directives {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    }
}

#[cfg(test)]
mod tests {
    use super::filter;

    // One test owns RUST_LOG so parallel tests never see it half-set.
    #[test]
    fn test_filter_precedence() {
        std::env::remove_var("RUST_LOG");
        assert_eq!("warn", filter(None).to_string());
        assert_eq!("bank_sim=debug", filter(Some("bank_sim=debug")).to_string());

        std::env::set_var("RUST_LOG", "info");
        assert_eq!("info", filter(None).to_string());
        assert_eq!("error", filter(Some("error")).to_string());

        std::env::remove_var("RUST_LOG");
        assert_eq!("warn", filter(None).to_string());
    }
}
