#![allow(dead_code)]

use std::sync::Mutex;
use taxadex::core::{PresentationSink, ResourceLink, StatusColor};

/// Every write the orchestrator performed, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum SinkWrite {
    CommonName(String),
    ScientificName(String),
    Image(String),
    ImageCredit(String),
    ObservationCount(String),
    StatusBadge(StatusColor, String),
    VerificationLink(String, bool),
    TaxonomyLine(String),
    Description(String),
    ResourceLinks(Vec<ResourceLink>),
    Alert(String),
}

#[derive(Debug, Default)]
pub struct RecordingSink {
    writes: Mutex<Vec<SinkWrite>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn writes(&self) -> Vec<SinkWrite> {
        self.writes.lock().unwrap().clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.writes()
            .into_iter()
            .filter_map(|w| match w {
                SinkWrite::Alert(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    pub fn last_description(&self) -> Option<String> {
        self.writes()
            .into_iter()
            .rev()
            .find_map(|w| match w {
                SinkWrite::Description(text) => Some(text),
                _ => None,
            })
    }

    fn push(&self, write: SinkWrite) {
        self.writes.lock().unwrap().push(write);
    }
}

impl PresentationSink for RecordingSink {
    fn set_common_name(&self, text: &str) {
        self.push(SinkWrite::CommonName(text.to_string()));
    }

    fn set_scientific_name(&self, text: &str) {
        self.push(SinkWrite::ScientificName(text.to_string()));
    }

    fn set_image(&self, url: &str) {
        self.push(SinkWrite::Image(url.to_string()));
    }

    fn set_image_credit(&self, text: &str) {
        self.push(SinkWrite::ImageCredit(text.to_string()));
    }

    fn set_observation_count(&self, text: &str) {
        self.push(SinkWrite::ObservationCount(text.to_string()));
    }

    fn set_status_badge(&self, color: StatusColor, label: &str) {
        self.push(SinkWrite::StatusBadge(color, label.to_string()));
    }

    fn set_verification_link(&self, href: &str, visible: bool) {
        self.push(SinkWrite::VerificationLink(href.to_string(), visible));
    }

    fn set_taxonomy_line(&self, text: &str) {
        self.push(SinkWrite::TaxonomyLine(text.to_string()));
    }

    fn set_description(&self, text: &str) {
        self.push(SinkWrite::Description(text.to_string()));
    }

    fn set_resource_links(&self, links: &[ResourceLink]) {
        self.push(SinkWrite::ResourceLinks(links.to_vec()));
    }

    fn alert(&self, message: &str) {
        self.push(SinkWrite::Alert(message.to_string()));
    }
}
