#![allow(clippy::uninlined_format_args)]

pub mod config;
pub mod context;
pub mod serde;
pub mod telemetry;

// the test version of tracing setup does not take a config
// since config itself is tested and modified from different parallel tests
// it's not gated out because integration tests in other packages use it as well
pub fn init_tracing_tests() {
    use std::sync::Once;

    // tests run on many threads, only the first one gets to install the subscriber
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
        tracing::debug!("Tracing initialized for tests");
    });
}
