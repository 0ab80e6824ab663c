use regex::Regex;

use crate::model::{ItineraryDay, Table};
use crate::options::DayKeyMode;

/// Partitions an itinerary table into per-day groups.
///
/// Returns `None` when the table has no `Day` column, in which case the
/// caller renders the itinerary as one flat table. Groups appear in
/// first-occurrence order and preserve row order; rows with a blank day
/// value form their own group keyed by the empty string. Day keys are
/// opaque strings under `DayKeyMode::Literal` ("1" and "01" are distinct
/// groups); `DayKeyMode::Numeric` groups by the leading integer instead.
pub fn group_itinerary(
    table: &Table,
    section_body: &str,
    mode: DayKeyMode,
) -> Option<Vec<ItineraryDay>> {
    let day_col = table.column_index("Day")?;
    let date_col = table.column_index("Date");

    let mut days: Vec<ItineraryDay> = Vec::new();

    for row in &table.rows {
        let raw_day = row.get(day_col).map_or("", String::as_str);
        let key = day_key(raw_day, mode);

        if let Some(group) = days.iter_mut().find(|group| group.day == key) {
            group.rows.push(row.clone());
        } else {
            let date = date_col
                .and_then(|col| row.get(col))
                .cloned()
                .unwrap_or_default();
            days.push(ItineraryDay {
                day: key,
                date,
                rows: vec![row.clone()],
                summary: None,
            });
        }
    }

    for group in &mut days {
        group.summary = find_day_summary(section_body, &group.day);
    }

    Some(days)
}

fn day_key(raw: &str, mode: DayKeyMode) -> String {
    match mode {
        DayKeyMode::Literal => raw.to_string(),
        DayKeyMode::Numeric => {
            let digits = raw
                .trim()
                .chars()
                .take_while(char::is_ascii_digit)
                .collect::<String>();
            digits
                .parse::<u32>()
                .map_or_else(|_| raw.to_string(), |value| value.to_string())
        }
    }
}

/// Scans the trailing freeform text for a bold `**Day {day} Total: ...`
/// marker and returns the free text up to the next bold marker or line
/// break. Summaries are optional; most days simply have none.
pub fn find_day_summary(section_body: &str, day: &str) -> Option<String> {
    if day.is_empty() {
        return None;
    }

    let pattern = format!(r"(?i)\*\*Day\s+{}\s+Total:?\s*([^*\n]+)", regex::escape(day));
    let summary_re = Regex::new(&pattern).ok()?;
    summary_re
        .captures(section_body)
        .and_then(|capture| capture.get(1))
        .map(|value| value.as_str().trim().to_string())
        .filter(|value| !value.is_empty())
}
