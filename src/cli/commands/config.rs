//! Config command handler

use crate::args::ConfigSubcommand;
use chartkit::config::Config;
use std::io::{self, Write};
use tracing::info;

/// Dispatch config subcommands. Returns `false` on failure.
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) -> bool {
    match subcommand {
        None => show(config, None),
        Some(ConfigSubcommand::Get { key }) => show(config, key.as_deref()),
        Some(ConfigSubcommand::Set { key, value }) => {
            update(config, &key, |c| c.set(&key, &value), &format!("Set {key} = {value}"))
        }
        Some(ConfigSubcommand::Unset { key }) => update(
            config,
            &key,
            |c| c.unset(&key, defaults),
            &format!("Reset {key} to default"),
        ),
        Some(ConfigSubcommand::Reset) => reset(),
    }
}

/// Print one value, or the whole configuration when `key` is `None`
fn show(config: &Config, key: Option<&str>) -> bool {
    let Some(key) = key else {
        println!("\n=== Configuration ===\n");
        print!("{config}");
        return true;
    };

    match config.get(key) {
        Some(value) => {
            println!("{value}");
            true
        }
        None => {
            eprintln!("Unknown config key: '{key}'");
            false
        }
    }
}

/// Apply `change` to the configuration and persist it
fn update<F>(config: &mut Config, key: &str, change: F, done: &str) -> bool
where
    F: FnOnce(&mut Config) -> Result<(), String>,
{
    if let Err(e) = change(config) {
        eprintln!("{e}");
        return false;
    }

    if let Err(e) = config.save() {
        eprintln!("Failed to save config: {e}");
        return false;
    }

    info!("Config key '{key}' updated");
    println!("✓ {done}");
    true
}

/// Delete the config file after interactive confirmation
fn reset() -> bool {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return true;
    }

    print!("Are you sure you want to reset config to defaults? (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();
    let response = response.trim();

    if !(response.eq_ignore_ascii_case("y") || response.eq_ignore_ascii_case("yes")) {
        println!("✗ Reset cancelled");
        return true;
    }

    match Config::reset() {
        Ok(()) => {
            println!("✓ Config reset to defaults");
            true
        }
        Err(e) => {
            eprintln!("Failed to remove config file: {e}");
            false
        }
    }
}
