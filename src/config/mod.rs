use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "taxadex")]
#[command(about = "Look up a species across taxonomy, classification and description providers")]
pub struct CliConfig {
    /// Species to look up. Without it, queries are read interactively from stdin.
    pub query: Option<String>,

    #[arg(long, default_value = "https://api.inaturalist.org/v1")]
    pub taxonomy_api: String,

    #[arg(long, default_value = "https://api.gbif.org/v1")]
    pub classification_api: String,

    #[arg(long, default_value = "https://en.wikipedia.org/api/rest_v1")]
    pub description_api: String,

    #[arg(long, help = "Print the merged result as JSON")]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn taxonomy_api_base(&self) -> &str {
        &self.taxonomy_api
    }

    fn classification_api_base(&self) -> &str {
        &self.classification_api
    }

    fn description_api_base(&self) -> &str {
        &self.description_api
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("taxonomy_api", &self.taxonomy_api)?;
        validate_url("classification_api", &self.classification_api)?;
        validate_url("description_api", &self.description_api)?;
        Ok(())
    }
}
