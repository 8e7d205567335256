/*!

# Overview

Threshold-filtered logging on top of `tracing`. The log level describes what _kind_ of message is recorded (critical,
error, warning, info, debug, trace), and the numeric threshold describes how _verbose_ the message is. A message is
emitted only if its threshold is at most the global threshold. A message with threshold 0 is always emitted.

```
use collkit::log::*;

// Emit only messages logged at threshold 1 or lower.
set_global_logging_threshold(1);

warning!(2, "Ranking function replaced on a set of {} members.", 12); // Not emitted
info!(1, "Sorting started.");                                          // Emitted
debug!("Merge pass complete.");                                        // Emitted (threshold 0)
```

The kernel logs its own bookkeeping at high thresholds (4 and above), so the default threshold of 3 keeps library
output quiet. Fatal conditions are always logged with `critical!` at threshold 0 before the panic that stops the
offending operation.

# Macros

```ignore
// With threshold
level!(threshold, "format string", args...);

// Without threshold (threshold 0, always emitted)
level!("format string", args...);
```

 - `critical!`
 - `error!`
 - `warning!`
 - `info!`
 - `debug!`
 - `trace!`

# Initialization

The macros install the subscriber on first use. If the host application has already installed a global `tracing`
subscriber, that subscriber is kept and the threshold filter only applies to our own subscriber.

*/
mod formatter;
mod threshold_filter;
mod macros;

use std::sync::{
    atomic::{AtomicU8, Ordering},
    LazyLock
  };

use tracing_subscriber::{
  fmt,
  layer::SubscriberExt,
  Registry
};

use threshold_filter::ThresholdFilterLayer;
use formatter::CustomFieldFormatter;
pub use macros::*;

/// The verbosity at which the kernel reports per-operation bookkeeping.
pub(crate) const KERNEL_THRESHOLD: u8 = 4;

/// Used for implicit initialization.
static INIT_LOGGER: LazyLock<()> = LazyLock::new(|| {
  let subscriber = Registry::default()
      .with(ThresholdFilterLayer)
      .with(
        fmt::layer()
            .fmt_fields(CustomFieldFormatter)
            .with_target(false)
            .without_time()
            .with_writer(std::io::stderr),
      );

  // An application-installed subscriber takes precedence over ours.
  let _ = tracing::subscriber::set_global_default(subscriber);
});

/// This does not need to be called directly. Initializes the logging system.
pub fn init_logger() {
  LazyLock::force(&INIT_LOGGER);
}

static GLOBAL_LOGGING_THRESHOLD: AtomicU8 = AtomicU8::new(3); // Default threshold

/// Sets the global threshold. Messages logged at a greater threshold are dropped.
pub fn set_global_logging_threshold(new_threshold: u8) {
  GLOBAL_LOGGING_THRESHOLD.store(new_threshold, Ordering::SeqCst);
}

/// Retrieves the global threshold.
pub fn get_global_logging_threshold() -> u8 {
  GLOBAL_LOGGING_THRESHOLD.load(Ordering::SeqCst)
}
