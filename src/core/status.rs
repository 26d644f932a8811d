use crate::domain::model::StatusColor;

/// Maps a conservation status label to its badge color. Case-insensitive
/// substring match, most severe category first, so "Critically Endangered"
/// resolves to dark red before the "endangered" rule can see it.
pub fn classify(status_label: &str) -> StatusColor {
    let text = status_label.to_lowercase();

    if text.contains("critically") {
        StatusColor::DarkRed
    } else if text.contains("endangered") {
        StatusColor::Red
    } else if text.contains("vulnerable") {
        StatusColor::Orange
    } else if text.contains("near threatened") {
        StatusColor::Yellow
    } else if text.contains("least concern") {
        StatusColor::Green
    } else {
        StatusColor::Neutral
    }
}
