//! Telemetry and Observability
//!
//! Structured logging setup.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing subscriber.
///
/// `RUST_LOG` overrides the default filter. Setting `LOG_FORMAT=json` switches
/// to one JSON object per event.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,chat_api=debug,sqlx=warn,tower_http=debug"));

    let json = std::env::var("LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json"));
    let registry = tracing_subscriber::registry().with(env_filter);

    if json {
        registry
            .with(fmt::layer().json().with_current_span(true))
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .init();
    }

    tracing::info!("Tracing initialized");
}
