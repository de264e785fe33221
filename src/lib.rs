pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, RunConfig};
pub use core::{
    codec::{format_output, parse_input, solve},
    engine::ReverseEngine,
    pipeline::ReversePipeline,
    reverse::{reverse_in_place, reversed},
};
pub use domain::model::{CaseResult, JudgeReport, Sequence, TestCase};
pub use utils::error::{ReverseError, Result};
