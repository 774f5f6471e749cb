//! Terminal login form for the login demo backend.
//!
//! Prompts for a username and a masked password, posts them to the backend
//! once and prints the message it returns.
//!
//! # Usage
//!
//! ```bash
//! # Interactive prompts against the build-time API URL
//! cargo run --bin login
//!
//! # Pre-filled fields and an explicit backend
//! cargo run --bin login -- --username admin --password 1234 --api-url http://localhost:5000
//! ```
//!
//! The default API URL comes from `LOGIN_API_URL` at build time
//! (`http://localhost:5000` when unset).

use login_demo::client::{DEFAULT_API_URL, LoginClient, LoginForm};

use anyhow::Result;
use clap::Parser;
use colored::*;
use dialoguer::{Input, Password};
use tracing_subscriber::EnvFilter;

/// Log in to the login demo backend.
#[derive(Parser)]
#[command(name = "login")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Backend base URL
    #[arg(long, default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Username (prompted when omitted)
    #[arg(short, long)]
    username: Option<String>,

    /// Password (prompted, masked, when omitted)
    #[arg(short, long)]
    password: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = LoginClient::new(cli.api_url);

    println!("{}", "Login".bright_blue().bold());
    println!("  {}", client.base_url().bright_black());
    println!();

    let mut form = LoginForm::new();

    form.username = match cli.username {
        Some(username) => username,
        None => Input::new()
            .with_prompt("Username")
            .allow_empty(true)
            .interact_text()?,
    };

    form.password = match cli.password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .allow_empty_password(true)
            .interact()?,
    };

    let message = form.submit(&client).await;

    println!();
    println!("{}", message);

    Ok(())
}
