use crate::core::{links, status};
use crate::domain::model::{TaxonRecord, ViewModel, DEFAULT_IMAGE};
use crate::domain::ports::{
    ClassificationProvider, DescriptionProvider, PresentationSink, TaxonomyProvider,
};
use crate::utils::error::LookupError;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

pub const NOT_FOUND_MESSAGE: &str = "Species not found.";
pub const CONNECTION_ERROR_MESSAGE: &str = "Connection error.";

const DESCRIPTION_FALLBACK: &str = "No description available.";
const STATUS_FALLBACK: &str = "Data Deficient";
const IMAGE_CREDIT: &str = "Source: iNaturalist";

/// Which provider call a failure happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Taxonomy,
    Classification,
    Description,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Taxonomy => write!(f, "taxonomy"),
            Stage::Classification => write!(f, "classification"),
            Stage::Description => write!(f, "description"),
        }
    }
}

/// Tagged result of one lookup. Provider failures never propagate as `Err`
/// out of [`LookupOrchestrator::run_lookup`]; they arrive here instead.
#[derive(Debug)]
pub enum LookupOutcome {
    Ok(ViewModel),
    /// Whitespace-only query: no sink writes, no network activity.
    EmptyQuery,
    /// Taxonomy provider returned zero results.
    NotFound,
    ProviderError {
        stage: Stage,
        cause: LookupError,
    },
    /// A newer lookup started while this one was in flight; remaining writes
    /// were dropped.
    Superseded,
}

enum Halt {
    NotFound,
    Superseded,
    Provider { stage: Stage, cause: LookupError },
}

/// Drives one lookup: taxonomy, then classification, then description,
/// strictly in that order, writing each phase's fields to the sink as soon
/// as they resolve. Fields written before a failing step stay visible.
pub struct LookupOrchestrator<T, C, D, S> {
    taxonomy: T,
    classification: C,
    description: D,
    sink: S,
    generation: AtomicU64,
}

impl<T, C, D, S> LookupOrchestrator<T, C, D, S>
where
    T: TaxonomyProvider,
    C: ClassificationProvider,
    D: DescriptionProvider,
    S: PresentationSink,
{
    pub fn new(taxonomy: T, classification: C, description: D, sink: S) -> Self {
        Self {
            taxonomy,
            classification,
            description,
            sink,
            generation: AtomicU64::new(0),
        }
    }

    pub async fn run_lookup(&self, query: &str) -> LookupOutcome {
        let query = query.trim();
        if query.is_empty() {
            return LookupOutcome::EmptyQuery;
        }

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::info!("Looking up '{}'", query);

        match self.execute(generation, query).await {
            Ok(view) => {
                tracing::info!("Lookup complete for '{}'", view.scientific_name);
                LookupOutcome::Ok(view)
            }
            Err(Halt::NotFound) => {
                tracing::warn!("No taxonomy match for '{}'", query);
                self.sink.alert(NOT_FOUND_MESSAGE);
                LookupOutcome::NotFound
            }
            Err(Halt::Superseded) => {
                tracing::debug!("Lookup for '{}' superseded by a newer one", query);
                LookupOutcome::Superseded
            }
            Err(Halt::Provider { stage, cause }) => {
                tracing::error!("{} provider failed: {}", stage, cause);
                self.sink.alert(CONNECTION_ERROR_MESSAGE);
                LookupOutcome::ProviderError { stage, cause }
            }
        }
    }

    fn is_stale(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) != generation
    }

    async fn execute(&self, generation: u64, query: &str) -> Result<ViewModel, Halt> {
        // Transient placeholders go out before any network call.
        self.sink.set_common_name("Scanning...");
        self.sink.set_description("Accessing database...");
        self.sink.set_image_credit("Fetching...");
        self.sink.set_image(DEFAULT_IMAGE);

        let taxon = self
            .taxonomy
            .top_match(query)
            .await
            .map_err(|cause| Halt::Provider {
                stage: Stage::Taxonomy,
                cause,
            })?;
        if self.is_stale(generation) {
            return Err(Halt::Superseded);
        }
        let taxon = taxon.ok_or(Halt::NotFound)?;

        let view = self.render_taxon(&taxon);

        let classification = self
            .classification
            .classify(&view.scientific_name)
            .await
            .map_err(|cause| Halt::Provider {
                stage: Stage::Classification,
                cause,
            })?;
        if self.is_stale(generation) {
            return Err(Halt::Superseded);
        }
        // Missing kingdom/family render as a literal "undefined", matching
        // the provider-facing page this replaces. Flagged as an open product
        // question in DESIGN.md.
        let taxonomy_line = format!(
            "{} > {}",
            classification.kingdom.as_deref().unwrap_or("undefined"),
            classification.family.as_deref().unwrap_or("undefined")
        );
        self.sink.set_taxonomy_line(&taxonomy_line);

        let page_key = links::description_page_key(&view.scientific_name);
        let description = self
            .description
            .summary(&page_key)
            .await
            .map_err(|cause| Halt::Provider {
                stage: Stage::Description,
                cause,
            })?;
        if self.is_stale(generation) {
            return Err(Halt::Superseded);
        }
        let description = match description {
            Some(record) => record.summary_text,
            None => DESCRIPTION_FALLBACK.to_string(),
        };
        self.sink.set_description(&description);

        let resource_links = links::resource_links(&view.common_name, taxon.external_id);
        self.sink.set_resource_links(&resource_links);

        Ok(ViewModel {
            taxonomy_line,
            description,
            resource_links,
            ..view
        })
    }

    /// Applies the documented fallbacks to the taxonomy match and writes the
    /// resulting fields out. Classification and description slots keep their
    /// placeholder values until their own phases complete.
    fn render_taxon(&self, taxon: &TaxonRecord) -> ViewModel {
        let scientific_name = taxon.scientific_name.clone();
        let common_name = taxon
            .common_name
            .clone()
            .unwrap_or_else(|| scientific_name.clone());
        let image_url = taxon
            .image_url
            .clone()
            .unwrap_or_else(|| DEFAULT_IMAGE.to_string());
        let observation_count = links::format_count(taxon.observation_count);

        let status_source = taxon
            .conservation_status
            .as_deref()
            .unwrap_or(STATUS_FALLBACK);
        let status_color = status::classify(status_source);
        let status_label = status_source.to_uppercase();
        let verification_url = links::verification_url(&scientific_name);

        self.sink.set_common_name(&common_name);
        self.sink.set_scientific_name(&scientific_name);
        self.sink.set_image(&image_url);
        self.sink.set_image_credit(IMAGE_CREDIT);
        self.sink.set_observation_count(&observation_count);
        self.sink.set_status_badge(status_color, &status_label);
        self.sink.set_verification_link(&verification_url, true);

        ViewModel {
            common_name,
            scientific_name,
            image_url,
            image_credit: IMAGE_CREDIT.to_string(),
            observation_count,
            status_label,
            status_color,
            verification_url,
            taxonomy_line: String::new(),
            description: String::new(),
            resource_links: Vec::new(),
        }
    }
}
