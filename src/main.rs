use girandola::app;

fn main() -> girandola::Result<()> {
    // Default: WARN for everything, INFO for girandola.
    // Override with RUST_LOG env var (e.g. RUST_LOG=girandola=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("girandola=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    app::run()
}
