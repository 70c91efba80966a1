//! Admin Config

use clap::Args;

/// Admin API key settings.
#[derive(Debug, Args)]
pub struct AdminConfig {
    /// Shared secret expected in the `x-admin-key` header. When unset, admin
    /// endpoints refuse every request.
    #[arg(long, env = "ADMIN_API_KEY", hide_env_values = true, default_value = "")]
    pub admin_api_key: String,
}
