use crate::config::CountdownOverrides;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "tdd-drills")]
#[command(about = "Countdown and summation drills")]
pub struct CliConfig {
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print a countdown to stdout
    Countdown(CountdownArgs),
    /// Add up a list of integers
    Sum(SumArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Variant {
    /// Hard-wired stdout and one second pause
    Fixed,
    /// Stdout passed in, pause still hard-wired
    Writer,
    /// Stdout and pause both passed in
    Injected,
}

#[derive(Debug, Clone, Args)]
pub struct CountdownArgs {
    #[arg(long, value_enum, default_value_t = Variant::Injected)]
    pub variant: Variant,

    /// Path to a TOML config file with a [countdown] section
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub start: Option<u32>,

    #[arg(long)]
    pub final_word: Option<String>,

    /// Pause between numbers, in milliseconds
    #[arg(long)]
    pub pause_ms: Option<u64>,

    /// Pause on the tokio timer instead of blocking the thread
    #[arg(long = "async")]
    pub run_async: bool,
}

impl CountdownArgs {
    pub fn overrides(&self) -> CountdownOverrides {
        CountdownOverrides {
            start: self.start,
            final_word: self.final_word.clone(),
            pause_ms: self.pause_ms,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct SumArgs {
    #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
    pub numbers: Vec<i64>,
}
