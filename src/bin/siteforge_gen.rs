use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_target(false)
        .init();

    if let Err(err) = siteforge::cli::run_cli() {
        // Red summary on stderr; exit code is binary - no partial-success code.
        eprintln!("\x1b[31m❌ {err:#}\x1b[0m");
        std::process::exit(1);
    }
}
