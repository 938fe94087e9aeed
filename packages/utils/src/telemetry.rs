use anyhow::{Context, Result};
use opentelemetry::{
    global,
    metrics::{Counter, Meter},
    trace::TracerProvider as _,
    KeyValue,
};
use opentelemetry_otlp::{Protocol, SpanExporter, WithExportConfig};
use opentelemetry_sdk::{
    metrics::SdkMeterProvider,
    resource::Resource,
    trace::{self, Sampler, SdkTracerProvider},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Console logging only, used when no collector is configured
pub fn setup_console_tracing(filters: tracing_subscriber::EnvFilter) -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_target(false),
        )
        .with(filters)
        .try_init()
        .context("Failed to set global default subscriber")
}

/// Console logging plus span export to an OTLP collector (e.g. Jaeger)
pub fn setup_tracing(
    collector: &str,
    service_name: &str,
    filters: tracing_subscriber::EnvFilter,
) -> Result<SdkTracerProvider> {
    global::set_text_map_propagator(opentelemetry_jaeger_propagator::Propagator::new());
    let endpoint = format!("{}/v1/traces", collector);
    let exporter = SpanExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint)
        .build()
        .context("Failed to build OTLP span exporter")?;

    let batch_processor = trace::BatchSpanProcessor::builder(exporter).build();

    let provider = SdkTracerProvider::builder()
        .with_span_processor(batch_processor)
        .with_sampler(Sampler::AlwaysOn)
        .with_resource(
            Resource::builder()
                .with_service_name(service_name.to_owned())
                .build(),
        )
        .build();
    global::set_tracer_provider(provider.clone());
    let tracer = provider.tracer(format!("{}-tracer", service_name));
    let telemetry = tracing_opentelemetry::layer().with_tracer(tracer);

    tracing_subscriber::registry()
        .with(filters)
        .with(tracing_subscriber::fmt::layer())
        .with(telemetry)
        .try_init()
        .context("Failed to set global default subscriber")?;

    tracing::info!("OTLP tracing enabled, exporting to {}", collector);
    Ok(provider)
}

pub fn setup_metrics(collector: &str, service_name: &str) -> Result<SdkMeterProvider> {
    let endpoint = format!("{}/api/v1/otlp/v1/metrics", collector);

    let exporter = opentelemetry_otlp::MetricExporter::builder()
        .with_http()
        .with_protocol(Protocol::HttpBinary)
        .with_endpoint(endpoint)
        .build()
        .context("Failed to build OTLP metrics exporter")?;

    let meter_provider = SdkMeterProvider::builder()
        .with_resource(
            Resource::builder()
                .with_service_name(service_name.to_owned())
                .build(),
        )
        .with_periodic_exporter(exporter)
        .build();

    global::set_meter_provider(meter_provider.clone());

    tracing::info!("Metrics enabled and exporting to {}", collector);

    Ok(meter_provider)
}

/// Counters for everything the http server hands out
#[derive(Clone, Debug)]
pub struct HttpMetrics {
    pub words_served: Counter<u64>,
    pub colors_served: Counter<u64>,
    pub palettes_served: Counter<u64>,
    pub total_errors: Counter<u64>,
}

impl HttpMetrics {
    pub const LABEL: &'static str = "http";

    pub fn init(meter: &Meter) -> Self {
        Self {
            words_served: meter
                .u64_counter(format!("{}_words_served", Self::LABEL))
                .with_description("Total number of random words served")
                .build(),
            colors_served: meter
                .u64_counter(format!("{}_colors_served", Self::LABEL))
                .with_description("Total number of random colors served")
                .build(),
            palettes_served: meter
                .u64_counter(format!("{}_palettes_served", Self::LABEL))
                .with_description("Total number of palettes generated")
                .build(),
            total_errors: meter
                .u64_counter(format!("{}_total_errors", Self::LABEL))
                .with_description("Total number of error responses")
                .build(),
        }
    }

    pub fn increment_words_served(&self, key: &str) {
        self.words_served
            .add(1, &[KeyValue::new("key", key.to_owned())]);
    }

    pub fn increment_colors_served(&self, format: &str) {
        self.colors_served
            .add(1, &[KeyValue::new("format", format.to_owned())]);
    }

    pub fn increment_palettes_served(&self, points: usize) {
        self.palettes_served
            .add(1, &[KeyValue::new("points", points as i64)]);
    }

    pub fn increment_total_errors(&self, route: &'static str) {
        self.total_errors.add(1, &[KeyValue::new("route", route)]);
    }
}
