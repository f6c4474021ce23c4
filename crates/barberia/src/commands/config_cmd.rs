//! `barberia config ...`: local configuration only, never the service.

use dialoguer::Input;

use barberia_core::config::DEFAULT_API_URL;

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{self, Config, Profile};
use crate::error::CliError;
use crate::output::Printer;

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let out = Printer::new(global);
    match args.command {
        ConfigCommand::Init => init(global, &out),
        ConfigCommand::Show => {
            let cfg = config::load_config()?;
            out.item(&cfg, render_toml, |c| {
                c.default_profile.clone().unwrap_or_default()
            })
        }
        ConfigCommand::Path => {
            out.data(&config::config_path().display().to_string());
            Ok(())
        }
        ConfigCommand::Use { name } => use_profile(name, &out),
        ConfigCommand::Profiles => {
            list_profiles(global, &out);
            Ok(())
        }
    }
}

fn render_toml(cfg: &Config) -> String {
    toml::to_string_pretty(cfg).unwrap_or_else(|e| format!("# cannot render as TOML: {e}\n{cfg:#?}"))
}

fn ask(prompt: &str, default: String) -> Result<String, CliError> {
    Input::new()
        .with_prompt(prompt)
        .default(default)
        .interact_text()
        .map_err(|e| CliError::Prompt(e.to_string()))
}

/// Interactive wizard: asks for a profile name and API URL, then makes
/// that profile the default.
fn init(global: &GlobalOpts, out: &Printer) -> Result<(), CliError> {
    out.note(&format!(
        "Creating a barberia profile in {}",
        config::config_path().display()
    ));

    let name = ask("Profile name", "default".into())?;
    let api_url = ask(
        "API URL",
        global
            .api_url
            .clone()
            .unwrap_or_else(|| DEFAULT_API_URL.into()),
    )?;
    if let Err(e) = url::Url::parse(&api_url) {
        return Err(CliError::Validation {
            field: "api_url".into(),
            reason: format!("'{api_url}' is not a URL: {e}"),
        });
    }

    let mut cfg = config::load_config_or_default();
    cfg.profiles.insert(
        name.clone(),
        Profile {
            api_url,
            insecure: global.insecure.then_some(true),
            timeout: global.timeout,
            ..Profile::default()
        },
    );
    cfg.default_profile = Some(name.clone());
    let path = config::save_config(&cfg)?;

    out.note(&format!("✓ Saved profile '{name}' to {}", path.display()));
    out.note("  Check the connection with: barberia ping");
    Ok(())
}

fn use_profile(name: String, out: &Printer) -> Result<(), CliError> {
    let mut cfg = config::load_config_or_default();
    if !cfg.profiles.contains_key(&name) {
        return Err(config::profile_not_found(name, &cfg));
    }
    cfg.default_profile = Some(name.clone());
    config::save_config(&cfg)?;
    out.note(&format!("✓ Default profile is now '{name}'"));
    Ok(())
}

/// One profile per line; `*` marks the one in effect, `(default)` the
/// configured default when a flag selects another.
fn list_profiles(global: &GlobalOpts, out: &Printer) {
    let cfg = config::load_config_or_default();
    if cfg.profiles.is_empty() {
        out.note("No profiles yet. Create one with: barberia config init");
        return;
    }

    let default = cfg.default_profile.as_deref().unwrap_or("default");
    let active = config::active_profile_name(global, &cfg);
    let lines: Vec<String> = cfg
        .profile_names()
        .into_iter()
        .map(|name| {
            if name == active {
                format!("{name} *")
            } else if name == default {
                format!("{name} (default)")
            } else {
                name.to_owned()
            }
        })
        .collect();
    out.data(&lines.join("\n"));
}
