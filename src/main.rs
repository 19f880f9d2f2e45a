//! # Backdrop CLI
//!
//! Command-line interface for the backdrop preference service.
//!
//! ## Usage
//!
//! ```bash
//! # Run the server
//! backdrop serve --listen 0.0.0.0:8080 --img-dir static/img
//!
//! # Print the CSS custom properties for a choice
//! backdrop css "solid:#0f172a"
//!
//! # Show the catalog and active choice from a running server
//! backdrop status --server http://127.0.0.1:8080
//!
//! # Pick and persist a new backdrop
//! backdrop set "solid:#111827" --server http://127.0.0.1:8080
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use backdrop::{
    BackdropError,
    choice::Background,
    controller::{Controller, HttpPreferenceClient, PreferenceClient},
    server::{self, ServerConfig},
    style::BackdropStyle,
};

/// Backdrop - Page background preference utility
#[derive(Parser, Debug)]
#[command(name = "backdrop")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "0.0.0.0:8080")]
        listen: String,

        /// Directory scanned for backdrop images (backdrop*.png, backdrop*.jpg)
        #[arg(long, default_value = "static/img")]
        img_dir: PathBuf,

        /// JSON file the chosen backdrop is persisted to
        #[arg(long, default_value = "/var/lib/backdrop/ui.json")]
        state_file: PathBuf,
    },

    /// Print the CSS custom properties for a choice
    Css {
        /// Wire-format choice: an image path or "solid:#rrggbb"
        choice: String,
    },

    /// Show the catalog and active choice from a running server
    Status {
        /// Server base URL
        #[arg(long, default_value = "http://127.0.0.1:8080")]
        server: String,
    },

    /// Validate, then persist a new choice on a running server
    Set {
        /// Wire-format choice: a catalog image path or "solid:#rrggbb"
        choice: String,

        /// Server base URL
        #[arg(long, default_value = "http://127.0.0.1:8080")]
        server: String,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), BackdropError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            listen,
            img_dir,
            state_file,
        } => {
            let config = ServerConfig {
                listen_addr: listen,
                img_dir,
                state_file,
            };
            runtime()?.block_on(server::serve(config))
        }
        Commands::Css { choice } => {
            let mut style = BackdropStyle::new();
            style.apply(&Background::parse(&choice));
            println!("{}", style.css_root());
            Ok(())
        }
        Commands::Status { server } => runtime()?.block_on(status(server)),
        Commands::Set { choice, server } => runtime()?.block_on(set_choice(choice, server)),
    }
}

fn runtime() -> Result<tokio::runtime::Runtime, BackdropError> {
    Ok(tokio::runtime::Runtime::new()?)
}

/// Initialize a controller against the server and print what it applied.
async fn status(server: String) -> Result<(), BackdropError> {
    let mut controller = Controller::with_selector(HttpPreferenceClient::new(server));
    controller.initialize().await;

    let selected = controller
        .selector()
        .map(|sel| sel.value().to_string())
        .unwrap_or_default();

    println!("Available backdrops:");
    for option in controller.selector().map(|sel| sel.options()).unwrap_or(&[]) {
        let marker = if option.value == selected { "*" } else { " " };
        println!("  {} {}  ({})", marker, option.label, option.value);
    }
    println!();
    println!("{}", controller.style().css_root());
    Ok(())
}

/// Validate a choice the way the server does, then persist it.
async fn set_choice(choice: String, server: String) -> Result<(), BackdropError> {
    let client = HttpPreferenceClient::new(server);

    if !Background::is_well_formed_solid(&choice) {
        let listing = client.fetch().await?;
        if !listing.files.contains(&choice) {
            return Err(BackdropError::InvalidChoice(format!(
                "'{}' is neither a catalog image nor solid:#rrggbb",
                choice
            )));
        }
    }

    client.persist(&choice).await?;
    println!("Backdrop set to {}", choice);
    Ok(())
}
