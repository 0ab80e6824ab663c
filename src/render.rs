use chrono::Days;

use crate::markup::cell_to_html;
use crate::model::{ItineraryDay, ParsedPlan, SectionKind, Table, TripContext};

/// One displayable piece of the plan, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFragment {
    pub kind: SectionKind,
    pub heading: String,
    pub html: String,
}

fn heading_for(kind: SectionKind) -> String {
    match kind {
        SectionKind::Flights => "✈️ Flight Options",
        SectionKind::Hotels => "🏨 Hotel Recommendations",
        SectionKind::Itinerary => "📅 Detailed Daily Itinerary",
        SectionKind::Budget => "💰 Budget Breakdown",
        SectionKind::Map => "🗺️ Destination Map",
        // Uncategorized sections render without a fixed heading; the body
        // already starts with the title line.
        SectionKind::Other => "",
    }
    .to_string()
}

/// Renders every section in document order. Sections with a parsed table
/// become HTML tables with clickable links; the itinerary becomes
/// day-by-day blocks when grouping succeeded; everything else degrades to
/// escaped raw text.
#[must_use]
pub fn render_plan(plan: &ParsedPlan, context: &TripContext) -> Vec<RenderedFragment> {
    let mut itinerary_rendered = false;

    plan.sections
        .iter()
        .map(|section| {
            let html = match (&section.table, section.kind) {
                (Some(table), SectionKind::Itinerary) if !itinerary_rendered => {
                    itinerary_rendered = true;
                    plan.itinerary_days.as_ref().map_or_else(
                        || table_to_html(table),
                        |days| render_itinerary_days(days, table, context),
                    )
                }
                (Some(table), _) => table_to_html(table),
                (None, _) => raw_text_html(&section.body),
            };

            RenderedFragment {
                kind: section.kind,
                heading: heading_for(section.kind),
                html,
            }
        })
        .collect()
}

/// Full table as HTML, every cell passed through the link converter.
#[must_use]
pub fn table_to_html(table: &Table) -> String {
    let mut html = String::from("<table>\n<thead><tr>");
    for header in &table.headers {
        html.push_str("<th>");
        html.push_str(&html_escape::encode_text(header));
        html.push_str("</th>");
    }
    html.push_str("</tr></thead>\n<tbody>\n");

    for row in &table.rows {
        html.push_str("<tr>");
        for cell in row {
            html.push_str("<td>");
            html.push_str(&cell_to_html(cell));
            html.push_str("</td>");
        }
        html.push_str("</tr>\n");
    }

    html.push_str("</tbody>\n</table>");
    html
}

/// Day-by-day itinerary blocks: a day header, the day's rows without the
/// Day/Date columns, activity-coded row classes and the optional daily
/// summary line.
#[must_use]
pub fn render_itinerary_days(
    days: &[ItineraryDay],
    table: &Table,
    context: &TripContext,
) -> String {
    let shown_columns = table
        .headers
        .iter()
        .enumerate()
        .filter(|(_, header)| header.as_str() != "Day" && header.as_str() != "Date")
        .map(|(index, _)| index)
        .collect::<Vec<_>>();
    let activity_col = table.column_index("Activity Type");
    let time_col = table.column_index("Time");

    let mut html = String::new();
    for day in days {
        let date_label = if day.date.is_empty() {
            fallback_date_label(&day.day, context)
        } else {
            day.date.clone()
        };

        html.push_str("<div class=\"day-header\">📆 Day ");
        html.push_str(&html_escape::encode_text(&day.day));
        html.push_str(" - ");
        html.push_str(&html_escape::encode_text(&date_label));
        html.push_str("</div>\n");

        html.push_str("<table class=\"itinerary-table\">\n<thead><tr>");
        for &col in &shown_columns {
            html.push_str("<th>");
            html.push_str(&html_escape::encode_text(&table.headers[col]));
            html.push_str("</th>");
        }
        html.push_str("</tr></thead>\n<tbody>\n");

        for row in &day.rows {
            let class = activity_col
                .and_then(|col| row.get(col))
                .map_or("activity-row", |value| row_class(value));
            html.push_str("<tr class=\"");
            html.push_str(class);
            html.push_str("\">");
            for &col in &shown_columns {
                let cell = row.get(col).map_or("", String::as_str);
                if time_col == Some(col) {
                    html.push_str("<td class=\"time-col\">");
                } else {
                    html.push_str("<td>");
                }
                html.push_str(&cell_to_html(cell));
                html.push_str("</td>");
            }
            html.push_str("</tr>\n");
        }
        html.push_str("</tbody>\n</table>\n");

        if let Some(summary) = &day.summary {
            html.push_str("<div class=\"day-summary\">💵 ");
            html.push_str(&html_escape::encode_text(summary));
            html.push_str("</div>\n");
        }
        html.push_str("<hr>\n");
    }

    html
}

fn row_class(activity_type: &str) -> &'static str {
    let lowered = activity_type.to_lowercase();
    if lowered.contains("transport") {
        "transport-row"
    } else if ["breakfast", "lunch", "dinner", "coffee", "snack"]
        .iter()
        .any(|meal| lowered.contains(meal))
    {
        "food-row"
    } else {
        "activity-row"
    }
}

/// When the itinerary table carries no Date column, derive a display date
/// from the trip start date for numeric day keys.
fn fallback_date_label(day: &str, context: &TripContext) -> String {
    day.trim()
        .parse::<u64>()
        .ok()
        .filter(|&value| value >= 1)
        .and_then(|value| context.start_date.checked_add_days(Days::new(value - 1)))
        .map(|date| date.format("%B %d, %Y").to_string())
        .unwrap_or_default()
}

fn raw_text_html(body: &str) -> String {
    let escaped = html_escape::encode_text(body).into_owned();
    format!(
        "<div class=\"section-text\">{}</div>",
        escaped.replace('\n', "<br>\n")
    )
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use super::{fallback_date_label, render_itinerary_days, row_class, table_to_html};
    use crate::model::{ItineraryDay, Table, TripContext};

    fn context() -> TripContext {
        TripContext {
            currency: "PHP".to_string(),
            days: 3,
            start_date: NaiveDate::from_ymd_opt(2026, 5, 1).expect("valid date"),
        }
    }

    #[test]
    fn table_html_has_headers_rows_and_links() {
        let table = Table {
            headers: vec!["Airline".to_string(), "Booking Link".to_string()],
            rows: vec![vec![
                "Cebu Pacific".to_string(),
                "[✈️ Book Flight](https://x.com)".to_string(),
            ]],
        };
        let html = table_to_html(&table);
        assert!(html.contains("<th>Airline</th>"));
        assert!(html.contains("<a href=\"https://x.com\" target=\"_blank\">✈️ Book Flight</a>"));
    }

    #[test]
    fn itinerary_blocks_hide_day_and_date_columns() {
        let table = Table {
            headers: vec![
                "Day".to_string(),
                "Date".to_string(),
                "Time".to_string(),
                "Activity Type".to_string(),
            ],
            rows: vec![vec![
                "1".to_string(),
                "May 1, 2026".to_string(),
                "8:00 AM".to_string(),
                "Breakfast".to_string(),
            ]],
        };
        let days = vec![ItineraryDay {
            day: "1".to_string(),
            date: "May 1, 2026".to_string(),
            rows: table.rows.clone(),
            summary: Some("500 PHP".to_string()),
        }];

        let html = render_itinerary_days(&days, &table, &context());
        assert!(html.contains("📆 Day 1 - May 1, 2026"));
        assert!(!html.contains("<th>Day</th>"));
        assert!(!html.contains("<th>Date</th>"));
        assert!(html.contains("<tr class=\"food-row\">"));
        assert!(html.contains("<td class=\"time-col\">8:00 AM</td>"));
        assert!(html.contains("💵 500 PHP"));
    }

    #[test]
    fn row_classes_follow_activity_type() {
        assert_eq!(row_class("Transportation"), "transport-row");
        assert_eq!(row_class("Coffee/Snack"), "food-row");
        assert_eq!(row_class("Sightseeing"), "activity-row");
    }

    #[test]
    fn fallback_date_uses_trip_start() {
        assert_eq!(fallback_date_label("1", &context()), "May 01, 2026");
        assert_eq!(fallback_date_label("3", &context()), "May 03, 2026");
        assert_eq!(fallback_date_label("not a day", &context()), "");
    }
}
