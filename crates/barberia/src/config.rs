//! CLI configuration: thin wrapper around `barberia_config` shared types.
//!
//! Adds resolution that respects `GlobalOpts` flag overrides
//! (--api-url, --insecure, --timeout).

use barberia_core::ServiceConfig;

use crate::cli::GlobalOpts;
use crate::error::CliError;

pub use barberia_config::{
    Config, Profile, config_path, load_config, load_config_or_default, save_config,
};

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Error for a profile name missing from `cfg`, listing the ones it has.
pub fn profile_not_found(name: String, cfg: &Config) -> CliError {
    let available = cfg.profile_names();
    CliError::ProfileNotFound {
        name,
        available: if available.is_empty() {
            "(none)".into()
        } else {
            available.join(", ")
        },
    }
}

/// Build a `ServiceConfig` from the config file, profile, and CLI overrides.
///
/// An explicitly requested profile must exist. Without one, a missing
/// default profile falls back to built-in defaults so the CLI works with
/// no config file at all.
pub fn build_service_config(global: &GlobalOpts) -> Result<ServiceConfig, CliError> {
    let cfg = load_config()?;
    let profile_name = active_profile_name(global, &cfg);

    let mut profile = match cfg.profiles.get(&profile_name) {
        Some(profile) => profile.clone(),
        None if global.profile.is_some() => return Err(profile_not_found(profile_name, &cfg)),
        None => Profile::default(),
    };

    // Flags (and their env vars) beat the profile
    if let Some(ref url) = global.api_url {
        profile.api_url.clone_from(url);
    }
    if global.insecure {
        profile.insecure = Some(true);
    }
    if global.timeout.is_some() {
        profile.timeout = global.timeout;
    }

    barberia_config::profile_to_service_config(&profile, &cfg.defaults).map_err(|e| match e {
        barberia_config::ConfigError::Validation { field, reason } => {
            CliError::Validation { field, reason }
        }
        other => other.into(),
    })
}
