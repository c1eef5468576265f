// logging.rs - Subscriber setup shared by the binaries

use tracing_subscriber::fmt::MakeWriter;

/// Installs the global subscriber. `RUST_LOG` sets the filter (default "info")
/// and `LOG_FORMAT=json` switches to JSON lines.
pub fn init_tracing<W>(writer: W)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(writer)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(writer)
            .compact()
            .init();
    }
}
