mod commands;
mod reporter;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use form_validation_core::{Config, PasswordStrength};
use tracing::Level;

#[derive(Parser)]
#[command(name = "formcheck")]
#[command(version, about = "Check signup form values against the form's constraints", long_about = None)]
struct Cli {
    /// Configuration file (missing file means defaults)
    #[arg(short, long, global = true, default_value = "form-validation.toml")]
    config: PathBuf,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a postal code for a country
    Postal {
        /// Country code (ch, fr, de, nl)
        country: String,

        /// Postal code to check
        code: String,
    },

    /// Validate a company email address
    Email {
        value: String,
    },

    /// Validate a password, optionally with its confirmation
    Password {
        value: String,

        /// Confirmation that must equal the password
        #[arg(long)]
        confirm: Option<String>,

        /// Strength tier overriding the config (basic, medium, strong)
        #[arg(short, long)]
        strength: Option<PasswordStrength>,
    },

    /// List supported countries and their postal code formats
    Countries,

    /// Run a full form submission
    Submit {
        #[arg(long, default_value = "")]
        email: String,

        /// Country code; defaults to the configured selector value
        #[arg(long)]
        country: Option<String>,

        #[arg(long, default_value = "")]
        postal_code: String,

        #[arg(long, default_value = "")]
        password: String,

        #[arg(long, default_value = "")]
        confirm_password: String,
    },
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load(&cli.config)?;

    let passed = match cli.command {
        Commands::Postal { country, code } => commands::postal::execute(&country, &code)?,
        Commands::Email { value } => commands::email::execute(&config, &value)?,
        Commands::Password { value, confirm, strength } => {
            let strength = strength.unwrap_or(config.password.strength);
            commands::password::execute(strength, &value, confirm.as_deref())
        }
        Commands::Countries => commands::countries::execute(),
        Commands::Submit {
            email,
            country,
            postal_code,
            password,
            confirm_password,
        } => commands::submit::execute(
            &config,
            commands::submit::Values {
                email,
                country,
                postal_code,
                password,
                confirm_password,
            },
        )?,
    };

    if !passed {
        std::process::exit(1);
    }

    Ok(())
}
