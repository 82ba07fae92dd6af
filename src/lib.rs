pub mod config;
pub mod core;
pub mod domain;
#[cfg(feature = "cli")]
pub mod prompt;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
#[cfg(feature = "cli")]
pub use prompt::TerminalPrompt;
pub use config::Settings;

pub use core::{
    catalog::BoardCatalog,
    input::InputCollector,
    scaffold::{ScaffoldEngine, ScaffoldOutcome, ScaffoldPlan},
};
pub use domain::model::{Board, BoardProfile, ProjectName, ProjectRequest};
pub use utils::error::{Result, ScaffoldError};
