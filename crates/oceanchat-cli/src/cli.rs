use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// OceanChat - keyword-driven oceanographic chatbot
#[derive(Parser, Debug)]
#[command(name = "oceanchat")]
#[command(about = "Keyword-driven oceanographic chatbot with mock ARGO data", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file path (TOML)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Seed for the mock-data random source (deterministic output)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Points per generated series (trailing daily window)
    #[arg(long, global = true)]
    pub window: Option<usize>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ask a single question and print the reply
    Ask(AskArgs),

    /// Start an interactive chat session
    Chat(ChatArgs),

    /// Show the mock ARGO float registry
    Floats(FloatsArgs),

    /// Show the effective configuration and where each value came from
    Config(ConfigArgs),
}

#[derive(Parser, Debug)]
pub struct AskArgs {
    /// The question text
    pub text: String,

    /// Speak the reply through the system TTS command, if available
    #[arg(long)]
    pub voice: bool,
}

#[derive(Parser, Debug)]
pub struct ChatArgs {
    /// Speak replies through the system TTS command, if available
    #[arg(long)]
    pub voice: bool,
}

#[derive(Parser, Debug)]
pub struct FloatsArgs {
    /// Also print the registry as GeoJSON
    #[arg(long)]
    pub geojson: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {}
