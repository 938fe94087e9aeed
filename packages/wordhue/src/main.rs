use clap::Parser;
use opentelemetry::global;
use utils::{
    config::{ConfigBuilder, ConfigExt},
    context::AppContext,
    telemetry::{setup_console_tracing, setup_metrics, setup_tracing, HttpMetrics},
};
use wordhue::{args::CliArgs, config::Config};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    let config: Config = ConfigBuilder::new(args).build()?;
    config.validate()?;

    let ctx = AppContext::new()?;

    // setup tracing
    let filters = config.tracing_env_filter()?;
    let tracer_provider = match config.jaeger.as_deref() {
        Some(collector) => Some(
            ctx.rt
                .block_on(async move { setup_tracing(collector, "wordhue", filters) })?,
        ),
        None => {
            setup_console_tracing(filters)?;
            None
        }
    };

    let meter_provider = config
        .prometheus
        .as_deref()
        .map(|collector| setup_metrics(collector, "wordhue"))
        .transpose()?;

    let meter = global::meter("wordhue_metrics");
    let metrics = HttpMetrics::init(&meter);

    let result = wordhue::run_server(ctx, config, metrics);

    if let Some(meter_provider) = meter_provider {
        if let Err(err) = meter_provider.shutdown() {
            tracing::error!("MeterProvider failed to shut down: {:?}", err);
        }
    }
    if let Some(tracer_provider) = tracer_provider {
        if let Err(err) = tracer_provider.shutdown() {
            tracing::error!("TracerProvider failed to shut down: {:?}", err);
        }
    }

    result
}
