//! Config subcommands handler

use anyhow::{bail, Result};

use ansiprobe::cli::ConfigAction;
use ansiprobe::theme::current_theme;
use ansiprobe::Config;

pub fn handle(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => handle_show(),
        ConfigAction::Path => handle_path(),
        ConfigAction::Init { force } => handle_init(force),
    }
}

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
fn handle_show() -> Result<()> {
    let config = Config::load()?;
    let toml_str = toml::to_string_pretty(&config)?;
    let theme = current_theme();
    println!("{}", theme.primary_text(&toml_str));
    Ok(())
}

/// Print the configuration file path.
#[cfg(not(tarpaulin_include))]
fn handle_path() -> Result<()> {
    let path = Config::config_path()?;
    println!("{}", path.display());
    Ok(())
}

/// Write a default configuration file.
///
/// Refuses to overwrite an existing file unless `force` is set.
fn handle_init(force: bool) -> Result<()> {
    let theme = current_theme();
    let path = Config::config_path()?;

    if path.exists() && !force {
        bail!(
            "{} already exists, use --force to overwrite",
            path.display()
        );
    }

    let written = Config::default().save()?;
    println!(
        "{}",
        theme.primary_text(&format!("Wrote default config to {}", written.display()))
    );
    Ok(())
}
