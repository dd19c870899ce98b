use tracing_subscriber::EnvFilter;

/// Directive source for log filtering, e.g. `ACHQ_LOG=achq=trace`.
const LOG_ENV: &str = "ACHQ_LOG";

/// Sends tracing output to stderr so it never mixes with listings on stdout.
///
/// `ACHQ_LOG` wins when set; otherwise `--verbose` picks `debug` and the default is `warn`.
pub(super) fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
