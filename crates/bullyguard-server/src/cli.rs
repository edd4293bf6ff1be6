//! Command-line interface

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "bullyguard-server")]
#[command(about = "LLM-backed cyberbullying screening service", long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml")]
    pub config: String,

    /// Listen address
    #[arg(short, long)]
    pub listen: Option<String>,

    /// Listen port
    #[arg(short = 'P', long)]
    pub port: Option<u16>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
