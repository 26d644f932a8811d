use crate::domain::model::ClassificationRecord;
use crate::domain::ports::ClassificationProvider;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

/// Classification provider backed by the GBIF species match API.
pub struct GbifClassificationProvider {
    client: Client,
    base_url: String,
}

impl GbifClassificationProvider {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct MatchResponse {
    kingdom: Option<String>,
    family: Option<String>,
}

#[async_trait]
impl ClassificationProvider for GbifClassificationProvider {
    async fn classify(&self, scientific_name: &str) -> Result<ClassificationRecord> {
        let url = format!("{}/species/match", self.base_url);
        tracing::debug!("Classification request to: {} (name='{}')", url, scientific_name);

        let response = self
            .client
            .get(&url)
            .query(&[("name", scientific_name)])
            .send()
            .await?;
        tracing::debug!("Classification response status: {}", response.status());

        let data: MatchResponse = response.json().await?;
        Ok(ClassificationRecord {
            kingdom: data.kingdom,
            family: data.family,
        })
    }
}
