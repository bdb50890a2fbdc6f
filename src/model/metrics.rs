use prometheus::core::{Collector as _, Desc};
use prometheus::proto::MetricFamily;
use prometheus::{Counter, Gauge, Opts, Registry};

use super::activity::Activity;
use super::types::{ActivityField, NAMESPACE};

/// The complete set of metrics exported for one Tautulli instance.
///
/// Every instance owns a private registry, so several exporters can live
/// side by side without clashing on metric names.
pub struct ExporterMetrics {
    registry: Registry,
    /// 1.0 if the last fetch succeeded, 0.0 otherwise
    pub up: Gauge,
    /// Scrape attempts since start, successful or not
    pub total_scrapes: Counter,
    activity: Vec<(ActivityField, Gauge)>,
}

impl ExporterMetrics {
    /// Creates and registers all nine metrics.
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let up = Gauge::with_opts(
            Opts::new("up", "Was the last scrape of Tautulli successful").namespace(NAMESPACE),
        )?;
        registry.register(Box::new(up.clone()))?;

        let total_scrapes = Counter::with_opts(
            Opts::new("exporter_total_scrapes", "Current total Tautulli scrapes")
                .namespace(NAMESPACE),
        )?;
        registry.register(Box::new(total_scrapes.clone()))?;

        let mut activity = Vec::with_capacity(ActivityField::ALL.len());
        for field in ActivityField::ALL {
            let gauge = Gauge::with_opts(
                Opts::new(field.metric_name(), field.help()).namespace(NAMESPACE),
            )?;
            registry.register(Box::new(gauge.clone()))?;
            activity.push((field, gauge));
        }

        Ok(Self {
            registry,
            up,
            total_scrapes,
            activity,
        })
    }

    /// Descriptors of every metric, in exposition order.
    pub fn descs(&self) -> Vec<Desc> {
        let mut descs: Vec<Desc> = Vec::with_capacity(2 + self.activity.len());
        descs.extend(self.up.desc().into_iter().cloned());
        descs.extend(self.total_scrapes.desc().into_iter().cloned());
        for (_, gauge) in &self.activity {
            descs.extend(gauge.desc().into_iter().cloned());
        }
        descs
    }

    /// Zeroes the seven activity gauges. `up` and the counter are untouched.
    pub fn reset_activity(&self) {
        for (_, gauge) in &self.activity {
            gauge.set(0.0);
        }
    }

    pub fn set_activity(&self, activity: &Activity) {
        for (field, gauge) in &self.activity {
            gauge.set(activity.get(*field));
        }
    }

    /// Current value of one activity gauge.
    #[cfg(test)]
    pub fn activity_value(&self, field: ActivityField) -> f64 {
        self.activity
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, gauge)| gauge.get())
            .unwrap_or_default()
    }

    pub fn gather(&self) -> Vec<MetricFamily> {
        self.registry.gather()
    }
}
