/// Initializes tracing for the interpreter binary.
/// The log level is controlled through the RUST_LOG environment variable
/// (e.g. RUST_LOG=lispy=debug).
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

/// Initializes tracing for tests: runs at most once and captures output for
/// the test runner.
#[cfg(test)]
pub(crate) fn init_test_logging() {
    static TRACING_INIT: std::sync::Once = std::sync::Once::new();
    TRACING_INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("trace")
            .with_test_writer()
            .try_init()
            .ok();
    });
}
