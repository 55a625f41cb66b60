//! Relax CLI - Send commands to the AE6 agent hub

mod api;
mod config;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use relax_hub::{MissionOutcome, DEFAULT_TENANT_ID};

use api::HubClient;
use config::Config;

#[derive(Parser)]
#[command(name = "relax")]
#[command(about = "Relax CLI - Talk to the AE6 agent hub", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send a command to the agents (e.g. relax exec find condos in Phuket)
    Exec {
        /// Command text
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,
        /// Tenant to act for (overrides config)
        #[arg(short, long)]
        tenant: Option<String>,
    },

    /// Check that the hub is up
    Status,

    /// Manage local configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set the hub base URL
    SetUrl {
        /// e.g. http://localhost:8000
        url: String,
    },
    /// Set the default tenant
    SetTenant {
        /// Tenant identifier
        tenant: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Exec { words, tenant } => cmd_exec(words.join(" "), tenant).await,
        Commands::Status => cmd_status().await,
        Commands::Config { action } => cmd_config(action),
    }
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_exec(command: String, tenant: Option<String>) -> Result<()> {
    if command.is_empty() {
        bail!("Command must not be empty");
    }

    let config = Config::load()?;
    let client = HubClient::new(&config.base_url);
    let tenant = config.resolve_tenant(tenant);

    let response = client.execute(&command, tenant.as_deref()).await?;
    if !response.success {
        bail!("Agent hub reported failure");
    }

    match response.data {
        MissionOutcome::Completed(mission) => {
            println!(
                "{} {} {}",
                "✓".green(),
                mission.agent.cyan().bold(),
                format!("[{}]", response.tenant_id).dimmed()
            );
            println!("{}", mission.result);
        }
        MissionOutcome::Unrecognized(guidance) => {
            println!("{} {}", "?".yellow(), guidance.message);
        }
    }

    Ok(())
}

async fn cmd_status() -> Result<()> {
    let config = Config::load()?;
    let client = HubClient::new(&config.base_url);

    print!("Checking {}... ", config.base_url);
    match client.status().await {
        Ok(status) => {
            println!("{}", "OK".green());
            println!("  {} ({} mode)", status.status, status.mode.cyan());
            Ok(())
        }
        Err(e) => {
            println!("{}", "Failed".red());
            Err(e)
        }
    }
}

fn cmd_config(action: ConfigAction) -> Result<()> {
    let mut config = Config::load()?;

    match action {
        ConfigAction::Show => {
            println!("{}", "Configuration:".bold());
            println!("  Path: {:?}", Config::config_path()?);
            println!("  Base URL: {}", config.base_url);
            println!(
                "  Tenant: {}",
                config
                    .tenant_id
                    .as_deref()
                    .map(|t| t.cyan())
                    .unwrap_or_else(|| format!("{} (hub default)", DEFAULT_TENANT_ID).dimmed())
            );
        }
        ConfigAction::SetUrl { url } => {
            config.set_base_url(&url);
            config.save()?;
            println!("{} Base URL set to {}", "✓".green(), config.base_url);
        }
        ConfigAction::SetTenant { tenant } => {
            config.tenant_id = Some(tenant.clone());
            config.save()?;
            println!("{} Default tenant set to '{}'", "✓".green(), tenant);
        }
    }

    Ok(())
}
