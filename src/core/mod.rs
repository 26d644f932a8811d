pub mod links;
pub mod orchestrator;
pub mod status;

pub use crate::domain::model::{
    ClassificationRecord, DescriptionRecord, ResourceLink, StatusColor, TaxonRecord, ViewModel,
};
pub use crate::domain::ports::{
    ClassificationProvider, ConfigProvider, DescriptionProvider, PresentationSink, TaxonomyProvider,
};
pub use crate::utils::error::Result;
