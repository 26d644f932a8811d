use crate::domain::model::{
    ClassificationRecord, DescriptionRecord, ResourceLink, StatusColor, TaxonRecord,
};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Resolves a free-text query to its single best taxon match.
/// `Ok(None)` means the provider returned zero results.
#[async_trait]
pub trait TaxonomyProvider: Send + Sync {
    async fn top_match(&self, query: &str) -> Result<Option<TaxonRecord>>;
}

/// Resolves kingdom/family for an exact scientific name.
#[async_trait]
pub trait ClassificationProvider: Send + Sync {
    async fn classify(&self, scientific_name: &str) -> Result<ClassificationRecord>;
}

/// Resolves descriptive summary text for a page key. `Ok(None)` means the
/// provider reported not-found, which is distinct from a transport failure.
#[async_trait]
pub trait DescriptionProvider: Send + Sync {
    async fn summary(&self, page_key: &str) -> Result<Option<DescriptionRecord>>;
}

/// Write-only named output slots of the presentation layer. The orchestrator
/// never reads sink state back.
pub trait PresentationSink: Send + Sync {
    fn set_common_name(&self, text: &str);
    fn set_scientific_name(&self, text: &str);
    fn set_image(&self, url: &str);
    fn set_image_credit(&self, text: &str);
    fn set_observation_count(&self, text: &str);
    fn set_status_badge(&self, color: StatusColor, label: &str);
    fn set_verification_link(&self, href: &str, visible: bool);
    fn set_taxonomy_line(&self, text: &str);
    fn set_description(&self, text: &str);
    fn set_resource_links(&self, links: &[ResourceLink]);

    /// Blocking user-facing notification ("Species not found." etc.).
    fn alert(&self, message: &str);
}

// Sinks are often shared between the orchestrator and the surrounding UI
// shell; delegate through Arc so both can hold one.
impl<T: PresentationSink + ?Sized> PresentationSink for std::sync::Arc<T> {
    fn set_common_name(&self, text: &str) {
        (**self).set_common_name(text)
    }
    fn set_scientific_name(&self, text: &str) {
        (**self).set_scientific_name(text)
    }
    fn set_image(&self, url: &str) {
        (**self).set_image(url)
    }
    fn set_image_credit(&self, text: &str) {
        (**self).set_image_credit(text)
    }
    fn set_observation_count(&self, text: &str) {
        (**self).set_observation_count(text)
    }
    fn set_status_badge(&self, color: StatusColor, label: &str) {
        (**self).set_status_badge(color, label)
    }
    fn set_verification_link(&self, href: &str, visible: bool) {
        (**self).set_verification_link(href, visible)
    }
    fn set_taxonomy_line(&self, text: &str) {
        (**self).set_taxonomy_line(text)
    }
    fn set_description(&self, text: &str) {
        (**self).set_description(text)
    }
    fn set_resource_links(&self, links: &[ResourceLink]) {
        (**self).set_resource_links(links)
    }
    fn alert(&self, message: &str) {
        (**self).alert(message)
    }
}

pub trait ConfigProvider: Send + Sync {
    fn taxonomy_api_base(&self) -> &str;
    fn classification_api_base(&self) -> &str;
    fn description_api_base(&self) -> &str;
}
