use crate::domain::model::TaxonRecord;
use crate::domain::ports::TaxonomyProvider;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

/// Taxonomy provider backed by the iNaturalist taxa search API.
pub struct InatTaxonomyProvider {
    client: Client,
    base_url: String,
}

impl InatTaxonomyProvider {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct TaxaResponse {
    #[serde(default)]
    results: Vec<TaxaResult>,
}

#[derive(Debug, Deserialize)]
struct TaxaResult {
    id: u64,
    name: String,
    preferred_common_name: Option<String>,
    default_photo: Option<DefaultPhoto>,
    #[serde(default)]
    observations_count: u64,
    conservation_status: Option<ConservationStatus>,
}

#[derive(Debug, Deserialize)]
struct DefaultPhoto {
    medium_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ConservationStatus {
    status_name: Option<String>,
}

#[async_trait]
impl TaxonomyProvider for InatTaxonomyProvider {
    async fn top_match(&self, query: &str) -> Result<Option<TaxonRecord>> {
        let url = format!("{}/taxa", self.base_url);
        tracing::debug!("Taxonomy request to: {} (q='{}')", url, query);

        let response = self
            .client
            .get(&url)
            .query(&[("q", query), ("per_page", "1")])
            .send()
            .await?;
        tracing::debug!("Taxonomy response status: {}", response.status());

        let data: TaxaResponse = response.json().await?;
        Ok(data.results.into_iter().next().map(|taxon| TaxonRecord {
            scientific_name: taxon.name,
            common_name: taxon.preferred_common_name,
            image_url: taxon.default_photo.and_then(|p| p.medium_url),
            observation_count: taxon.observations_count,
            conservation_status: taxon.conservation_status.and_then(|s| s.status_name),
            external_id: taxon.id,
        }))
    }
}
