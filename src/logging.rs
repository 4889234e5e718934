use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logs console (fmt) filtrés par niveau.
/// RUST_LOG accepte aussi des directives par module, ex: "info,sqlx=warn"
pub fn init_logging(level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(level)?;

    // try_init branche aussi le pont `log` -> tracing (logs de actix Logger)
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;

    Ok(())
}
