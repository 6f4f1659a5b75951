pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, Command, CountdownArgs, SumArgs, Variant};

pub use adapters::sleeper::{DefaultSleeper, TokioSleeper};
pub use config::{toml_config::DrillsConfig, CountdownOverrides, CountdownSettings};
pub use core::countdown::{countdown, countdown_fixed, countdown_with, Countdown};
pub use core::sum::{checked_sum, sum};
pub use domain::model::Step;
pub use domain::ports::{AsyncSleeper, Sleeper};
pub use utils::error::{DrillError, Result};
