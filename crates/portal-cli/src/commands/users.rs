//! Credential table inspection.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use portal_auth::{CredentialStore, StaticCredentialStore};
use portal_core::AppResult;
use portal_entity::user::{User, UserRole};

/// Arguments for `users`
#[derive(Debug, Args)]
pub struct UsersArgs {
    /// Credential table path (defaults to `auth.users_file`)
    #[arg(long)]
    pub file: Option<String>,

    /// Only list users with this role
    #[arg(short, long)]
    pub role: Option<String>,
}

/// User display row for table output
#[derive(Debug, Serialize, Tabled)]
struct UserRow {
    id: String,
    username: String,
    role: String,
    /// Whether the password is stored as an Argon2 hash
    hashed: bool,
}

impl From<&User> for UserRow {
    fn from(u: &User) -> Self {
        Self {
            id: u.id.clone(),
            username: u.username.clone(),
            role: u.role.to_string(),
            hashed: u.has_hashed_password(),
        }
    }
}

/// Execute the users command
pub fn execute(args: &UsersArgs, env: &str, format: OutputFormat) -> AppResult<()> {
    let path = match &args.file {
        Some(f) => f.clone(),
        None => super::load_config(env)?.auth.users_file,
    };

    let role = args.role.as_deref().map(str::parse::<UserRole>).transpose()?;

    let store = StaticCredentialStore::load(&path)?;
    let rows: Vec<UserRow> = store
        .users()
        .iter()
        .filter(|u| role.is_none_or(|r| u.role == r))
        .map(UserRow::from)
        .collect();

    output::print_list(&rows, format);

    let plaintext = rows.iter().filter(|r| !r.hashed).count();
    if plaintext > 0 && format == OutputFormat::Table {
        output::print_warning(&format!(
            "{plaintext} user(s) have plaintext passwords; replace them with `portal-cli hash-password` output"
        ));
    }

    Ok(())
}
