use crate::model::{Section, SectionKind};

/// Splits a document on the `##` heading marker and classifies each
/// fragment by its title line. Classification only inspects the title,
/// never the body.
pub fn split_sections(text: &str) -> Vec<Section> {
    text.split("##")
        .filter(|fragment| !fragment.trim().is_empty())
        .map(|fragment| {
            let trimmed = fragment.trim();
            let title = trimmed.lines().next().unwrap_or_default().trim().to_string();
            let kind = classify_title(&title);
            tracing::debug!(?kind, %title, "classified section");
            Section {
                kind,
                title,
                body: trimmed.to_string(),
                table: None,
            }
        })
        .collect()
}

/// Case-insensitive substring match against ordered keyword categories;
/// first match wins.
pub fn classify_title(title: &str) -> SectionKind {
    let upper = title.to_uppercase();
    if upper.contains("FLIGHT") {
        SectionKind::Flights
    } else if upper.contains("HOTEL") {
        SectionKind::Hotels
    } else if upper.contains("ITINERARY") {
        SectionKind::Itinerary
    } else if upper.contains("BUDGET") {
        SectionKind::Budget
    } else if upper.contains("DESTINATION MAP") || upper.contains("MAP") {
        SectionKind::Map
    } else {
        SectionKind::Other
    }
}
