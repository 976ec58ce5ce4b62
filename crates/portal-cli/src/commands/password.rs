//! Password hashing and policy commands.

use clap::Args;

use crate::output::{self, OutputFormat};
use portal_auth::{PasswordHasher, PasswordStrength, PasswordValidator};
use portal_core::AppResult;
use portal_core::error::AppError;

/// Arguments for `hash-password`
#[derive(Debug, Args)]
pub struct HashArgs {
    /// Password to hash (prompted if omitted)
    #[arg(short, long)]
    pub password: Option<String>,

    /// Hash even if the password violates the policy
    #[arg(long)]
    pub force: bool,
}

/// Arguments for `check-password`
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Password to check (prompted if omitted)
    pub password: Option<String>,
}

/// Prints an Argon2 PHC string for the credential table.
pub fn hash(args: &HashArgs) -> AppResult<()> {
    let password = match &args.password {
        Some(p) => p.clone(),
        None => dialoguer::Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords do not match")
            .interact()
            .map_err(|e| AppError::internal(format!("Input error: {e}")))?,
    };

    if let Err(e) = PasswordValidator::new().validate(&password) {
        if !args.force {
            return Err(e);
        }
        output::print_warning(&e.message);
    }

    let hash = PasswordHasher::new().hash_password(&password)?;
    println!("{hash}");
    Ok(())
}

/// Reports the policy verdict and strength score.
pub fn check(args: &CheckArgs, format: OutputFormat) -> AppResult<()> {
    let password = match &args.password {
        Some(p) => p.clone(),
        None => dialoguer::Password::new()
            .with_prompt("Password")
            .interact()
            .map_err(|e| AppError::internal(format!("Input error: {e}")))?,
    };

    let violation = PasswordValidator::new().validate(&password).err();
    let strength = PasswordStrength::evaluate(&password);

    match format {
        OutputFormat::Json => output::print_json(
            &serde_json::json!({
                "valid": violation.is_none(),
                "message": violation.as_ref().map(|e| e.message.as_str()),
                "score": strength.score,
                "label": strength.label,
            }),
            "{}",
        ),
        OutputFormat::Table => {
            match &violation {
                None => output::print_success("Password meets the policy"),
                Some(e) => output::print_warning(&e.message),
            }
            output::print_kv("Score", &strength.score.to_string());
            output::print_kv("Strength", &format!("{:?}", strength.label));
        }
    }

    Ok(())
}
