use once_cell::sync::Lazy;
use prometheus::core::Collector;
use prometheus::{Encoder, IntCounterVec, Opts, Registry, TextEncoder};

use crate::error::Result;

/// Counters for processed and rejected packages, each set on its own registry.
#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    packages_total: IntCounterVec,
    rejected_total: IntCounterVec,
}

static GLOBAL: Lazy<Metrics> =
    Lazy::new(|| Metrics::new().expect("static metric definitions are valid"));

/// Process-wide metrics used by the JSON and Python entry points.
pub fn global() -> &'static Metrics {
    &GLOBAL
}

impl Metrics {
    pub fn new() -> Result<Self> {
        let registry = Registry::new();

        let packages_total = IntCounterVec::new(
            Opts::new("workout_packages_total", "Summarized workout packages per type"),
            &["kind"],
        )?;
        let rejected_total = IntCounterVec::new(
            Opts::new("workout_rejected_total", "Rejected workout packages per reason"),
            &["reason"],
        )?;

        registry.register(Box::new(packages_total.clone()))?;
        registry.register(Box::new(rejected_total.clone()))?;

        Ok(Self { registry, packages_total, rejected_total })
    }

    pub fn record_package(&self, tag: &str) {
        self.packages_total.with_label_values(&[tag]).inc();
    }

    pub fn record_rejected(&self, reason: &str) {
        self.rejected_total.with_label_values(&[reason]).inc();
    }

    /// Read-only: a label that was never counted reads as 0 and no series is created.
    pub fn packages(&self, tag: &str) -> u64 {
        read_count(&self.packages_total, tag)
    }

    pub fn rejected(&self, reason: &str) -> u64 {
        read_count(&self.rejected_total, reason)
    }

    /// Prometheus text exposition of this registry.
    pub fn gather_text(&self) -> Result<String> {
        let mut buf = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

// Looks the label up in the collected families instead of `with_label_values`,
// which would register an empty child.
fn read_count(vec: &IntCounterVec, label: &str) -> u64 {
    vec.collect()
        .iter()
        .flat_map(|mf| mf.get_metric())
        .find(|m| m.get_label().iter().any(|l| l.get_value() == label))
        .map(|m| m.get_counter().get_value() as u64)
        .unwrap_or(0)
}
