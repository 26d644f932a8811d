use serde::{Deserialize, Serialize};

/// Image shown while a lookup is in flight or when the provider has no photo.
pub const DEFAULT_IMAGE: &str = "images/default.jpg";

/// Top match returned by the taxonomy provider. Nullable provider fields stay
/// `Option` here; display fallbacks are the orchestrator's job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxonRecord {
    pub scientific_name: String,
    pub common_name: Option<String>,
    pub image_url: Option<String>,
    pub observation_count: u64,
    pub conservation_status: Option<String>,
    pub external_id: u64,
}

/// Kingdom/family pair from the classification provider. Either field may be
/// absent in the provider response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationRecord {
    pub kingdom: Option<String>,
    pub family: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DescriptionRecord {
    pub summary_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLink {
    pub label: String,
    pub href: String,
}

impl ResourceLink {
    pub fn new(label: &str, href: String) -> Self {
        Self {
            label: label.to_string(),
            href,
        }
    }
}

/// Badge color for a conservation status, ordered most severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusColor {
    DarkRed,
    Red,
    Orange,
    Yellow,
    Green,
    Neutral,
}

impl StatusColor {
    pub fn hex(&self) -> &'static str {
        match self {
            StatusColor::DarkRed => "#8B0000",
            StatusColor::Red => "#D32F2F",
            StatusColor::Orange => "#F57C00",
            StatusColor::Yellow => "#FBC02D",
            StatusColor::Green => "#388E3C",
            StatusColor::Neutral => "#999",
        }
    }
}

/// Merged, presentation-ready result of one lookup. Display fallbacks and
/// formatting are already applied; this is exactly what the sink received.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewModel {
    pub common_name: String,
    pub scientific_name: String,
    pub image_url: String,
    pub image_credit: String,
    pub observation_count: String,
    pub status_label: String,
    pub status_color: StatusColor,
    pub verification_url: String,
    pub taxonomy_line: String,
    pub description: String,
    pub resource_links: Vec<ResourceLink>,
}
