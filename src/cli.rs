use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "jvm-interface-auditor")]
#[command(about = "Detect internal types leaking through public JVM class signatures")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Audit compiled classes for interface leakage
    Check {
        /// Directory searched recursively for .class files
        path: Option<PathBuf>,

        /// Additional exclusion globs (repeatable), merged with the config
        #[arg(short, long = "exclude", value_name = "GLOB")]
        exclude: Vec<String>,

        /// Output format
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show errors only
        #[arg(short, long)]
        quiet: bool,

        /// Show detailed information
        #[arg(short, long)]
        verbose: bool,

        /// Exit with code 0 even on violations
        #[arg(long)]
        exit_zero: bool,
    },
    /// Initialize configuration with a preset exclusion list
    Init {
        /// Exclusion preset
        preset: InitPreset,
    },
    /// Show or validate configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Validate configuration file
        #[arg(long)]
        validate: bool,
    },
}

#[derive(Clone, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Clone, ValueEnum)]
pub enum InitPreset {
    Jdk,
    Strict,
}
