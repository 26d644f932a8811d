use crate::domain::model::DescriptionRecord;
use crate::domain::ports::DescriptionProvider;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

/// Description provider backed by the Wikipedia REST page-summary API.
pub struct WikipediaDescriptionProvider {
    client: Client,
    base_url: String,
}

impl WikipediaDescriptionProvider {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SummaryResponse {
    #[serde(default)]
    extract: String,
}

#[async_trait]
impl DescriptionProvider for WikipediaDescriptionProvider {
    async fn summary(&self, page_key: &str) -> Result<Option<DescriptionRecord>> {
        let url = format!("{}/page/summary/{}", self.base_url, page_key);
        tracing::debug!("Description request to: {}", url);

        let response = self.client.get(&url).send().await?;

        // Not-found is a normal outcome for this provider, not a failure.
        if !response.status().is_success() {
            tracing::debug!(
                "Description provider returned {} for '{}'",
                response.status(),
                page_key
            );
            return Ok(None);
        }

        let data: SummaryResponse = response.json().await?;
        Ok(Some(DescriptionRecord {
            summary_text: data.extract,
        }))
    }
}
