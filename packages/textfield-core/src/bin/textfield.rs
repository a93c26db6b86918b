//! Text field CLI - inspect how configurations render.
//!
//! Prints JSON so render output can be diffed or fed to other tools.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use textfield_core::inspect::{gallery_report, render_report, style_report};
use textfield_core::ApiResponse;

#[derive(Parser)]
#[command(name = "textfield")]
#[command(about = "Text field CLI - render and style inspection")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a field configuration read from a JSON file
    Render {
        /// Path to a JSON field configuration
        #[arg(short, long)]
        config: PathBuf,
        /// Render with the password revealed
        #[arg(long)]
        revealed: bool,
        /// Render as focused
        #[arg(long)]
        focused: bool,
    },
    /// Show the style selected for a combination of flags
    Style {
        /// Variant name (unknown names fall back to outlined)
        #[arg(short, long, default_value = "outlined")]
        variant: String,
        /// Field is disabled
        #[arg(long)]
        disabled: bool,
        /// Field is in the error condition
        #[arg(long)]
        invalid: bool,
    },
    /// List the gallery entries and checklist
    Gallery,
}

fn main() {
    let cli = Cli::parse();

    let output = match cli.command {
        Commands::Render {
            config,
            revealed,
            focused,
        } => to_json(&render_report(&config, revealed, focused)),
        Commands::Style {
            variant,
            disabled,
            invalid,
        } => to_json(&style_report(&variant, disabled, invalid)),
        Commands::Gallery => to_json(&gallery_report()),
    };

    println!("{}", output);
}

fn to_json<T: serde::Serialize>(response: &ApiResponse<T>) -> String {
    serde_json::to_string_pretty(response)
        .unwrap_or_else(|e| format!(r#"{{"ok": false, "error": "{}"}}"#, e))
}
