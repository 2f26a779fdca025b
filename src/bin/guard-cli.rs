use std::path::PathBuf;

use clap::{Parser, Subcommand};

use route_guard::config::loader::load_config;
use route_guard::{AuthState, Decision, GuardConfig, RoutePolicy};

#[derive(Parser)]
#[command(name = "guard-cli")]
#[command(about = "Inspection CLI for the route access guard", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a configuration file
    Check {
        /// Path to the TOML configuration
        config: PathBuf,
    },
    /// Show the classification and decision for a path
    Explain {
        /// Request path to evaluate
        path: String,

        /// Evaluate with an authenticated session
        #[arg(long)]
        authenticated: bool,

        /// Evaluate with onboarding still pending
        #[arg(long)]
        needs_onboarding: bool,

        /// Configuration to evaluate against (defaults otherwise)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { config } => match load_config(&config) {
            Ok(_) => println!("{} is valid", config.display()),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        },
        Commands::Explain {
            path,
            authenticated,
            needs_onboarding,
            config,
            json,
        } => {
            let config = match config {
                Some(path) => load_config(&path)?,
                None => GuardConfig::default(),
            };
            let policy = RoutePolicy::from_config(&config);
            let auth = AuthState {
                is_authenticated: authenticated,
                needs_onboarding,
            };

            let classification = policy.classify(&path);
            let decision = policy.decide(&path, classification, auth);

            if json {
                let result = serde_json::json!({
                    "path": path,
                    "classification": classification.as_str(),
                    "decision": match &decision {
                        Decision::Allow => serde_json::json!({"allow": true}),
                        Decision::RedirectTo(target) => {
                            serde_json::json!({"allow": false, "redirect_to": target})
                        }
                    },
                });
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("path:           {path}");
                println!("classification: {}", classification.as_str());
                match decision {
                    Decision::Allow => println!("decision:       allow"),
                    Decision::RedirectTo(target) => {
                        println!("decision:       redirect -> {target}")
                    }
                }
            }
        }
    }

    Ok(())
}
