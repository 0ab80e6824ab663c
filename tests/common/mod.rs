/// Builds a plan document the way the generative service formats one:
/// `##` headed sections, pipe tables, bold daily totals and a mix of bare
/// and pre-masked URLs.
#[must_use]
pub fn sample_plan() -> String {
    let mut doc = String::new();

    doc.push_str("Here is your travel plan for Manila to Tokyo.\n\n");

    doc.push_str("## FLIGHTS\n\n");
    doc.push_str("| Airline | Departure | Price (PHP) | Booking Link |\n");
    doc.push_str("|---------|-----------|-------------|--------------|\n");
    doc.push_str("| Cebu Pacific | 6:30 AM | 12,500 | https://www.google.com/travel/flights?q=MNL-NRT |\n");
    doc.push_str("| PAL | 9:00 AM | 15,800 | [✈️ Book Flight](https://flights.example.com/pal) |\n");
    // Malformed row: one cell too many.
    doc.push_str("| JAL | 1:00 PM | 18,000 | link | extra |\n\n");

    doc.push_str("## 🏨 HOTEL RECOMMENDATIONS\n\n");
    doc.push_str("| Hotel Name | Rating | Price per Night (PHP) | Booking Link |\n");
    doc.push_str("|------------|--------|-----------------------|--------------|\n");
    doc.push_str("| Shinjuku Inn | 4.3 | 4,200 | https://www.booking.com/searchresults.html?ss=Tokyo |\n\n");

    doc.push_str("## ITINERARY\n\n");
    doc.push_str("| Day | Date | Time | Activity Type | Activity/Location | Cost (PHP) |\n");
    doc.push_str("|-----|------|------|---------------|-------------------|------------|\n");
    doc.push_str("| 1 | May 1, 2026 | 8:00 AM | Breakfast | Tsukiji Market | 600 |\n");
    doc.push_str("| 1 | May 1, 2026 | 9:30 AM | Transportation | Metro to Asakusa | 120 |\n");
    doc.push_str("| 1 | May 1, 2026 | 10:00 AM | Sightseeing | Senso-ji Temple | 0 |\n");
    doc.push_str("| 2 | May 2, 2026 | 9:00 AM | Sightseeing | Meiji Shrine | 0 |\n");
    doc.push_str("| 2 | May 2, 2026 | 12:00 PM | Lunch | Harajuku Gyoza | 800 |\n\n");
    doc.push_str("**Day 1 Total: [Transportation: 120 PHP] [Food: 600 PHP] [Daily Total: 720 PHP]**\n");
    doc.push_str("**Day 2 Total: [Food: 800 PHP] [Daily Total: 800 PHP]**\n\n");

    doc.push_str("## BUDGET\n\n");
    doc.push_str("| Item | Amount (PHP) |\n");
    doc.push_str("|------|--------------|\n");
    doc.push_str("| Round-trip Flights | 12,500 |\n");
    doc.push_str("| Accommodation (4 nights) | 16,800 |\n");
    doc.push_str("| **TOTAL ESTIMATED COST** | **[Amount]** |\n\n");

    doc.push_str("## DESTINATION MAP\n\n");
    doc.push_str("Explore the area: https://www.google.com/maps/search/Tokyo\n");

    doc
}

/// A minimal document with a single headed section.
#[must_use]
pub fn section_doc(title: &str, body: &str) -> String {
    format!("## {title}\n\n{body}\n")
}
