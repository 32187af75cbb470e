//! Metric logging for training progress.
//!
//! Agents report binned reward means through a `MetricLogger` while
//! fitting. The default backend is a no-op; `ConsoleLogger` prints
//! through `tracing`, and `CompositeLogger` fans out to several backends.

use std::collections::HashMap;

/// Trait for logging metrics to various backends.
pub trait MetricLogger: Send + Sync {
    /// Log a scalar value (e.g. binned reward mean).
    fn log_scalar(&self, name: &str, value: f64, step: u64);

    /// Log a set of metrics collected in a map.
    fn log_metrics(&self, metrics: &HashMap<String, f64>, step: u64);

    /// Close the logger and flush any pending writes.
    fn close(&self) {}
}

/// A logger that does nothing (default).
pub struct NoOpLogger;

impl MetricLogger for NoOpLogger {
    fn log_scalar(&self, _name: &str, _value: f64, _step: u64) {}
    fn log_metrics(&self, _metrics: &HashMap<String, f64>, _step: u64) {}
}

/// Logger that prints metrics to stdout via tracing.
#[derive(Default)]
pub struct ConsoleLogger;

impl ConsoleLogger {
    pub fn new() -> Self {
        Self
    }
}

impl MetricLogger for ConsoleLogger {
    fn log_scalar(&self, name: &str, value: f64, step: u64) {
        tracing::info!("Step {}: {} = {:.4}", step, name, value);
    }

    fn log_metrics(&self, metrics: &HashMap<String, f64>, step: u64) {
        // Group output to avoid spamming lines
        let mut keys: Vec<_> = metrics.keys().collect();
        keys.sort();

        let body = keys
            .iter()
            .map(|k| format!("{}={:.4}", k, metrics[*k]))
            .collect::<Vec<_>>()
            .join(", ");

        tracing::info!("Step {}: {}", step, body);
    }
}

impl<T: MetricLogger + ?Sized> MetricLogger for std::sync::Arc<T> {
    fn log_scalar(&self, name: &str, value: f64, step: u64) {
        (**self).log_scalar(name, value, step);
    }

    fn log_metrics(&self, metrics: &HashMap<String, f64>, step: u64) {
        (**self).log_metrics(metrics, step);
    }

    fn close(&self) {
        (**self).close();
    }
}

/// A composite logger that dispatches to multiple backends.
pub struct CompositeLogger {
    loggers: Vec<Box<dyn MetricLogger>>,
}

impl CompositeLogger {
    pub fn new(loggers: Vec<Box<dyn MetricLogger>>) -> Self {
        Self { loggers }
    }

    pub fn add(&mut self, logger: Box<dyn MetricLogger>) {
        self.loggers.push(logger);
    }
}

impl MetricLogger for CompositeLogger {
    fn log_scalar(&self, name: &str, value: f64, step: u64) {
        for logger in &self.loggers {
            logger.log_scalar(name, value, step);
        }
    }

    fn log_metrics(&self, metrics: &HashMap<String, f64>, step: u64) {
        for logger in &self.loggers {
            logger.log_metrics(metrics, step);
        }
    }

    fn close(&self) {
        for logger in &self.loggers {
            logger.close();
        }
    }
}

/// Report per-bin reward means, stamped with the step index that closed
/// each bin.
pub fn log_reward_bins(logger: &dyn MetricLogger, bins: &[f32], bin_size: usize) {
    for (i, mean) in bins.iter().enumerate() {
        let step = ((i + 1) * bin_size) as u64;
        logger.log_scalar("reward/bin_mean", f64::from(*mean), step);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Logger that records every scalar it sees, for asserting on output.
    pub struct RecordingLogger {
        pub scalars: Mutex<Vec<(String, f64, u64)>>,
    }

    impl RecordingLogger {
        pub fn new() -> Self {
            Self {
                scalars: Mutex::new(Vec::new()),
            }
        }
    }

    impl MetricLogger for RecordingLogger {
        fn log_scalar(&self, name: &str, value: f64, step: u64) {
            self.scalars
                .lock()
                .unwrap()
                .push((name.to_string(), value, step));
        }

        fn log_metrics(&self, metrics: &HashMap<String, f64>, step: u64) {
            for (k, v) in metrics {
                self.log_scalar(k, *v, step);
            }
        }
    }

    #[test]
    fn test_log_reward_bins_stamps_steps() {
        let logger = RecordingLogger::new();
        log_reward_bins(&logger, &[0.5, 0.75], 100);

        let scalars = logger.scalars.lock().unwrap();
        assert_eq!(scalars.len(), 2);
        assert_eq!(scalars[0], ("reward/bin_mean".to_string(), 0.5, 100));
        assert_eq!(scalars[1], ("reward/bin_mean".to_string(), 0.75, 200));
    }

    #[test]
    fn test_composite_dispatches_to_all() {
        use std::sync::Arc;

        let a = Arc::new(RecordingLogger::new());
        let b = Arc::new(RecordingLogger::new());
        let mut composite = CompositeLogger::new(vec![Box::new(a.clone()), Box::new(NoOpLogger)]);
        composite.add(Box::new(b.clone()));

        composite.log_scalar("reward/bin_mean", 1.0, 10);

        assert_eq!(a.scalars.lock().unwrap().len(), 1);
        assert_eq!(b.scalars.lock().unwrap().len(), 1);
    }
}
