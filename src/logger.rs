pub use tracing::{debug, error, info, warn, trace, instrument};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt::{self, format::FmtSpan}};

/// Default filter directive when `RUST_LOG` is unset.
const DEFAULT_DIRECTIVE: &str = "info";

/// Installs the global subscriber, honouring `RUST_LOG`.
pub fn init() {
    init_with_default(DEFAULT_DIRECTIVE);
}

/// Same as [`init`] but with a caller-chosen fallback directive.
///
/// Span close events (with their busy/idle timings) are only printed when
/// the active filter enables debug output, so per-operation timings show up
/// with `RUST_LOG=debug` and stay quiet otherwise.
pub fn init_with_default(directive: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directive));

    let is_debug = wants_span_events(&env_filter.to_string());

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_timer(fmt::time::uptime())
        .with_span_events(if is_debug {
            FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        });

    // A second init (e.g. from a test harness) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();
}

fn wants_span_events(filter: &str) -> bool {
    filter.contains("debug") || filter.contains("trace")
}
