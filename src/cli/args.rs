//! CLI argument parsing using clap.

use clap::{
    Parser,
    builder::styling::{AnsiColor, Effects, Styles},
};
use std::path::PathBuf;

fn clap_cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

/// Generate the component metadata file for the documentation site
#[derive(Parser, Debug)]
#[command(
    name = "component-metadata",
    version = env!("CARGO_PKG_VERSION"),
    about = "Generate src/docs/metadata.json from src/components",
    long_about = "Extract props, descriptions and display names from atoms and molecules, \
                  pair them with their markdown documentation and write src/docs/metadata.json.",
    after_help = "Examples:\n  component-metadata\n  component-metadata --watch\n  component-metadata --root packages/ui -w",
    styles = clap_cargo_style()
)]
pub struct Cli {
    /// Re-run on every change under src/components
    #[arg(short, long)]
    pub watch: bool,

    /// Project root containing src/components (defaults to the current directory)
    #[arg(short, long, value_name = "DIR", env = "COMPONENT_METADATA_ROOT")]
    pub root: Option<PathBuf>,

    /// Path to a custom component-metadata.toml file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the effective configuration and exit
    #[arg(long)]
    pub show_config: bool,
}
