//! CLI command definitions and dispatch.

pub mod password;
pub mod token;
pub mod users;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use portal_core::config::AppConfig;
use portal_core::AppResult;

/// Bank portal authentication tooling
#[derive(Debug, Parser)]
#[command(name = "portal-cli", version, about, long_about = None)]
pub struct Cli {
    /// Configuration environment (selects `config/{env}.toml`)
    #[arg(short, long, env = "PORTAL_ENV", default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Hash a password for the credential table
    HashPassword(password::HashArgs),
    /// Check a password against the policy and score its strength
    CheckPassword(password::CheckArgs),
    /// List the users in the credential table
    Users(users::UsersArgs),
    /// Verify a token and print its claims
    InspectToken(token::InspectArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(&self) -> AppResult<()> {
        match &self.command {
            Commands::HashPassword(args) => password::hash(args),
            Commands::CheckPassword(args) => password::check(args, self.format),
            Commands::Users(args) => users::execute(args, &self.env, self.format),
            Commands::InspectToken(args) => token::execute(args, &self.env, self.format),
        }
    }
}

/// Helper: load configuration for an environment
pub fn load_config(env: &str) -> AppResult<AppConfig> {
    AppConfig::load(env)
}
