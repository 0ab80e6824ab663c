use regex::Regex;

/// Converts every `[text](url)` occurrence in a cell into an anchor that
/// opens in a new tab. Non-link text is HTML-escaped and otherwise left
/// untouched; cells without link syntax come back escaped only.
pub fn cell_to_html(cell: &str) -> String {
    let link_re = Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("hardcoded link regex is valid");

    let mut out = String::with_capacity(cell.len());
    let mut cursor = 0;

    for capture in link_re.captures_iter(cell) {
        let Some(whole) = capture.get(0) else {
            continue;
        };
        let text = capture.get(1).map_or("", |m| m.as_str());
        let url = capture.get(2).map_or("", |m| m.as_str());

        out.push_str(&html_escape::encode_text(&cell[cursor..whole.start()]));
        out.push_str("<a href=\"");
        out.push_str(&html_escape::encode_double_quoted_attribute(url));
        out.push_str("\" target=\"_blank\">");
        out.push_str(&html_escape::encode_text(text));
        out.push_str("</a>");

        cursor = whole.end();
    }

    out.push_str(&html_escape::encode_text(&cell[cursor..]));
    out
}
