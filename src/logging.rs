use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber. Honors `RUST_LOG`, defaults to `info`.
///
/// Output goes to stderr so it never interleaves with the stack printout.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(std::io::stderr)
        .init();
}
