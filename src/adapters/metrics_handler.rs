use prometheus::{CounterVec, Encoder, HistogramOpts, HistogramVec, Opts, Registry, TextEncoder};
use std::sync::Arc;

pub struct MetricsCollector {
    registry: Registry,

    // Request metrics
    pub requests_total: CounterVec,

    // Generation metrics
    pub generations_total: CounterVec,
    pub generation_duration: HistogramVec,
    pub llm_failures: CounterVec,

    // Editor metrics
    pub edits_total: CounterVec,
}

impl MetricsCollector {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let requests_total = CounterVec::new(
            Opts::new("formforge_requests_total", "Total number of API requests"),
            &["endpoint", "status"],
        )?;
        registry.register(Box::new(requests_total.clone()))?;

        let generations_total = CounterVec::new(
            Opts::new("formforge_generations_total", "Forms generated, by serving path"),
            &["path"],
        )?;
        registry.register(Box::new(generations_total.clone()))?;

        let generation_duration = HistogramVec::new(
            HistogramOpts::new(
                "formforge_generation_duration_seconds",
                "Form generation duration in seconds",
            ),
            &["path"],
        )?;
        registry.register(Box::new(generation_duration.clone()))?;

        let llm_failures = CounterVec::new(
            Opts::new("formforge_llm_failures_total", "LLM generation failures"),
            &["reason"],
        )?;
        registry.register(Box::new(llm_failures.clone()))?;

        let edits_total = CounterVec::new(
            Opts::new("formforge_edits_total", "Editor operations, by outcome"),
            &["op", "outcome"],
        )?;
        registry.register(Box::new(edits_total.clone()))?;

        Ok(Self {
            registry,
            requests_total,
            generations_total,
            generation_duration,
            llm_failures,
            edits_total,
        })
    }

    pub fn encode(&self) -> anyhow::Result<String> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}

pub struct MetricsHandler {
    collector: Arc<MetricsCollector>,
}

impl MetricsHandler {
    pub fn new(collector: Arc<MetricsCollector>) -> Self {
        Self { collector }
    }

    pub async fn metrics(&self) -> String {
        self.collector.encode().unwrap_or_else(|e| {
            tracing::error!("Failed to encode metrics: {}", e);
            String::from("# Error encoding metrics\n")
        })
    }
}
