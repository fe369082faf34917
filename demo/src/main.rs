//! structer demo - populate a sample record and print it.
//!
//! Loads an optional `.env` file into the process environment, fills a
//! [`model::User`] from environment variables and declared defaults, and
//! prints the result as indented JSON.

mod config;
mod display;
mod error;
mod model;

use crate::config::Config;
use crate::error::Result;
use crate::model::User;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "structer_demo=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    run()?;
    Ok(())
}

fn run() -> Result<()> {
    // Load configuration
    let config = Config::from_env()?;
    tracing::debug!(?config, "Configuration loaded");

    config::load_env_file(&config.env_file)?;

    let mut user = User::default();
    structer::set_defaults(&mut user)?;
    tracing::info!(
        id = user.id,
        contacts = user.contacts.len(),
        "Populated user record"
    );

    println!("{}", display::to_pretty_json(&user, config.indent)?);
    Ok(())
}
