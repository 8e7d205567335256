use std::fmt::Debug;
use tracing::{
  field::{Field, Visit},
  Event,
  Subscriber
};
use tracing_subscriber::{
  Layer,
  layer::Context,
  registry::LookupSpan
};

use super::get_global_logging_threshold;

/// A layer that drops events whose `threshold` field exceeds the global logging threshold.
pub(crate) struct ThresholdFilterLayer;

impl<S> Layer<S> for ThresholdFilterLayer
where
    S: Subscriber + for<'lookup> LookupSpan<'lookup>,
{
  fn event_enabled(&self, event: &Event<'_>, _ctx: Context<'_, S>) -> bool {
    let mut visitor = ThresholdVisitor { threshold: None };
    event.record(&mut visitor);

    // Events without a threshold come from other crates' `tracing` calls; treat them as threshold 0.
    visitor.threshold.unwrap_or(0) <= get_global_logging_threshold()
  }
}

/// Extracts the `threshold` field from an event.
struct ThresholdVisitor {
  threshold: Option<u8>,
}

impl Visit for ThresholdVisitor {
  fn record_i64(&mut self, field: &Field, value: i64) {
    if field.name() == "threshold" {
      // Negative thresholds are as important as 0; oversized ones are as verbose as possible.
      self.threshold = Some(value.clamp(0, u8::MAX as i64) as u8);
    }
  }

  fn record_u64(&mut self, field: &Field, value: u64) {
    if field.name() == "threshold" {
      self.threshold = Some(value.min(u8::MAX as u64) as u8);
    }
  }

  fn record_debug(&mut self, field: &Field, _value: &dyn Debug) {
    if field.name() == "threshold" {
      // A non-numeric threshold is a misuse of the macros; never filter the message away.
      self.threshold = Some(0);
    }
  }
}
