use regex::Regex;

use crate::options::ParseOptions;

/// Rewrites bare URLs into categorized markdown links. URLs already inside
/// `[text](url)` syntax are left alone, so the transform is idempotent.
pub fn mask_links(text: &str, options: &ParseOptions) -> String {
    let url_re = Regex::new(r"https?://[^\s)]+").expect("hardcoded URL regex is valid");

    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;

    for url_match in url_re.find_iter(text) {
        out.push_str(&text[cursor..url_match.start()]);

        let url = url_match.as_str();
        if text[..url_match.start()].ends_with("](") {
            // Already the target of a markdown link.
            out.push_str(url);
        } else {
            let label = link_label(url, &options.generic_link_label);
            out.push('[');
            out.push_str(label);
            out.push_str("](");
            out.push_str(url);
            out.push(')');
        }

        cursor = url_match.end();
    }

    out.push_str(&text[cursor..]);
    out
}

/// Picks a link label from the URL content; first matching rule wins.
/// Matching runs against the percent-decoded, lowercased URL so encoded
/// booking queries like `Flights%20from%20...` still categorize.
fn link_label<'a>(url: &str, generic_label: &'a str) -> &'a str {
    let decoded = urlencoding::decode(url)
        .map(std::borrow::Cow::into_owned)
        .unwrap_or_else(|_| url.to_string());
    let lowered = decoded.to_lowercase();

    if lowered.contains("google.com/travel/flights") || lowered.contains("flight") {
        "✈️ Book Flight"
    } else if lowered.contains("booking.com") || lowered.contains("hotel") || lowered.contains("agoda")
    {
        "🏨 Book Hotel"
    } else if lowered.contains("google.com/maps") || lowered.contains("maps") {
        "📍 View Map"
    } else {
        generic_label
    }
}
