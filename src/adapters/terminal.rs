use crate::domain::model::{ResourceLink, StatusColor};
use crate::domain::ports::PresentationSink;

/// Renders sink writes as labeled lines on stdout; alerts go to stderr.
/// Transient placeholders ("Scanning...") print like any other write, which
/// doubles as progress output in a terminal.
#[derive(Debug, Default)]
pub struct TerminalSink;

impl TerminalSink {
    pub fn new() -> Self {
        Self
    }
}

impl PresentationSink for TerminalSink {
    fn set_common_name(&self, text: &str) {
        println!("Common name:    {}", text);
    }

    fn set_scientific_name(&self, text: &str) {
        println!("Scientific:     {}", text);
    }

    fn set_image(&self, url: &str) {
        println!("Image:          {}", url);
    }

    fn set_image_credit(&self, text: &str) {
        println!("Image credit:   {}", text);
    }

    fn set_observation_count(&self, text: &str) {
        println!("Observations:   {}", text);
    }

    fn set_status_badge(&self, color: StatusColor, label: &str) {
        println!("Status:         {} [{}]", label, color.hex());
    }

    fn set_verification_link(&self, href: &str, visible: bool) {
        if visible {
            println!("Verify at:      {}", href);
        }
    }

    fn set_taxonomy_line(&self, text: &str) {
        println!("Classification: {}", text);
    }

    fn set_description(&self, text: &str) {
        println!("Description:    {}", text);
    }

    fn set_resource_links(&self, links: &[ResourceLink]) {
        println!("Resources:");
        for link in links {
            println!("  {}: {}", link.label, link.href);
        }
    }

    fn alert(&self, message: &str) {
        eprintln!("❌ {}", message);
    }
}
