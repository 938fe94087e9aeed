pub mod args;
pub mod color;
pub mod config;
pub mod everything;
pub mod http;
pub mod random;
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
pub mod words;

use config::Config;
use utils::{context::AppContext, telemetry::HttpMetrics};

/// Entry point to start up the whole server
/// Called from main and end-to-end tests
pub fn run_server(ctx: AppContext, config: Config, metrics: HttpMetrics) -> anyhow::Result<()> {
    ctrlc::set_handler({
        let ctx = ctx.clone();
        move || {
            ctx.shutdown();
        }
    })?;

    http::server::start(ctx, config, metrics)
}
