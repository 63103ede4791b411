use anyhow::Result;

use crate::config::{self, Config};

#[derive(Debug, Clone, clap::Subcommand)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Print the config file path
    Path,
    /// Print an example config file
    Example,
    /// Create the config file with defaults
    Init,
}

pub fn run_config(action: ConfigAction, effective: &Config) -> Result<()> {
    match action {
        ConfigAction::Show => show_config(effective),
        ConfigAction::Path => {
            println!("{}", config::config_file_path().display());
            Ok(())
        }
        ConfigAction::Example => {
            print!("{}", config::example_config());
            Ok(())
        }
        ConfigAction::Init => init_config(),
    }
}

/// Show the current effective configuration.
fn show_config(effective: &Config) -> Result<()> {
    let config_path = config::config_file_path();

    println!("Config file: {}", config_path.display());
    let exists = config_path.exists();
    println!("File exists: {}\n", if exists { "yes" } else { "no (using defaults)" });

    print!("{}", effective.to_toml()?);

    println!("\nPriority: CLI args > ENV vars (FILMO_*) > Config file > Defaults");

    Ok(())
}

fn init_config() -> Result<()> {
    let created = config::ensure_config_file()?;
    let config_path = config::config_file_path();

    if created {
        println!("✓ Created config file: {}", config_path.display());
        println!("\nEdit this file to configure filmoteca.");
    } else {
        println!("Config file already exists: {}", config_path.display());
    }

    Ok(())
}
