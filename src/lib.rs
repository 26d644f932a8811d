pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::gbif::GbifClassificationProvider;
pub use adapters::inaturalist::InatTaxonomyProvider;
pub use adapters::terminal::TerminalSink;
pub use adapters::wikipedia::WikipediaDescriptionProvider;
pub use config::CliConfig;
pub use core::orchestrator::{LookupOrchestrator, LookupOutcome, Stage};
pub use domain::model::{StatusColor, ViewModel};
pub use utils::error::{LookupError, Result};
