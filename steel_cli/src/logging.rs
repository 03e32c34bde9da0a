use tracing_subscriber::{fmt, EnvFilter};

/// Initialise the tracing subscriber.
///
/// `RUST_LOG` sets the filter (default `info`), e.g.
/// `RUST_LOG=steel_core=trace` to see every α_m and effective length.
/// Output goes to stderr so `--json` stays machine-readable.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .init();
}
