use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use triage_core::{config, CoreConfig, TriageService};

/// Main entry point for the triage simulator.
///
/// Resolves configuration, installs the logging stack and hands the core
/// service to the interactive console. Logs go to stderr so stdout stays
/// clean for the console UI.
///
/// # Environment Variables
/// - `TRIAGE_WARD_NAME`: ward display name for console headers
/// - `RUST_LOG`: tracing filter directives (default: `triage_core=info`)
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("triage_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let ward_name = config::ward_name_from_env_value(std::env::var("TRIAGE_WARD_NAME").ok());
    let cfg = CoreConfig::new(ward_name);
    tracing::info!("++ Starting triage console for {}", cfg.ward_name());

    let mut service = TriageService::new();
    triage_cli::console::run(&cfg, &mut service)?;

    Ok(())
}
