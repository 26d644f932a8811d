use crate::domain::model::ResourceLink;

const IUCN_SEARCH_BASE: &str = "https://www.iucnredlist.org/search?query=";
const GOOGLE_SEARCH_BASE: &str = "https://www.google.com/search?q=";
const PHOTO_GALLERY_BASE: &str = "https://www.inaturalist.org/taxa/";

/// Page key for the description provider: only the FIRST space is replaced
/// with the linking character. Three-word names keep their later spaces;
/// upstream behaves this way and the intent is unconfirmed, so it is
/// reproduced as-is.
pub fn description_page_key(scientific_name: &str) -> String {
    scientific_name.replacen(' ', "_", 1)
}

/// Search link against the conservation-status registry, for manual
/// verification of the displayed badge.
pub fn verification_url(scientific_name: &str) -> String {
    format!("{}{}", IUCN_SEARCH_BASE, scientific_name)
}

fn search_terms(query: &str) -> String {
    query.replace(' ', "+")
}

pub fn resource_links(common_name: &str, external_id: u64) -> Vec<ResourceLink> {
    let news = format!(
        "{}{}+conservation+news&tbm=nws",
        GOOGLE_SEARCH_BASE,
        search_terms(common_name)
    );
    let exam_prep = format!(
        "{}{}+UPSC+previous+year+questions",
        GOOGLE_SEARCH_BASE,
        search_terms(common_name)
    );
    let gallery = format!("{}{}", PHOTO_GALLERY_BASE, external_id);

    vec![
        ResourceLink::new("Latest News", news),
        ResourceLink::new("UPSC PYQs", exam_prep),
        ResourceLink::new("More Photos", gallery),
    ]
}

/// Thousands separators for observation counts, e.g. 1234567 -> "1,234,567".
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(c);
    }
    formatted
}
