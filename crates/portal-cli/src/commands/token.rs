//! Token inspection.

use clap::Args;

use crate::output::{self, OutputFormat};
use portal_auth::TokenService;
use portal_core::AppResult;
use portal_core::error::AppError;

/// Arguments for `inspect-token`
#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Encoded token
    pub token: String,
}

/// Verifies a token with the configured secret and prints its claims.
pub fn execute(args: &InspectArgs, env: &str, format: OutputFormat) -> AppResult<()> {
    let config = super::load_config(env)?;
    let tokens = TokenService::new(&config.auth);

    let claims = tokens
        .inspect(args.token.trim())
        .ok_or_else(|| AppError::token_invalid("Token is invalid or expired"))?;

    match format {
        OutputFormat::Json => output::print_json(&claims, "{}"),
        OutputFormat::Table => {
            output::print_kv("Type", &format!("{:?}", claims.token_type));
            output::print_kv("User ID", &claims.payload.id);
            output::print_kv("Username", &claims.payload.username);
            output::print_kv("Role", claims.payload.role.as_str());
            output::print_kv("Token ID", &claims.jti.to_string());
            output::print_kv("Expires at", &claims.expires_at().to_rfc3339());
            output::print_kv(
                "Remaining",
                &format!("{}s", claims.remaining_ttl_seconds()),
            );
        }
    }

    Ok(())
}
