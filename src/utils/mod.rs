use std::{error::Error, sync::Once};

use tracing_subscriber::{filter::Directive, fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        if let Err(err) = try_init_tracing() {
            // The host application installed its own subscriber; report through it.
            tracing::debug!(error = %err, "keeping existing tracing subscriber");
        }
    });
}

/// Installs the stderr subscriber, failing when a global one is already set.
pub fn try_init_tracing() -> Result<(), Box<dyn Error + Send + Sync + 'static>> {
    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = "finup_mapping=info".parse::<Directive>() {
        filter = filter.add_directive(directive);
    }

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
}
