use clap::{Parser, Subcommand};
use triage_core::{config, CoreConfig, TriageService};

#[derive(Parser)]
#[command(name = "triage")]
#[command(about = "Ward triage simulator CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive triage console
    Run {
        /// Ward name shown in console headers
        #[arg(long)]
        ward_name: Option<String>,
    },
    /// Run the scripted demonstration walkthrough
    Demo,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run { ward_name }) => {
            let cfg = CoreConfig::new(config::ward_name_from_env_value(ward_name));
            let mut service = TriageService::new();
            triage_cli::console::run(&cfg, &mut service)?;
        }
        Some(Commands::Demo) => {
            let mut service = TriageService::new();
            triage_cli::demo::run(&mut service)?;
        }
        None => {
            println!("Use 'triage --help' for commands");
        }
    }

    Ok(())
}
