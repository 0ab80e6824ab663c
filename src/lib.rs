mod error;
mod itinerary;
mod link_mask;
mod markup;
mod model;
mod options;
mod render;
mod sections;
mod session;
mod table_parse;
mod warning;
mod xlsx_out;

pub use error::PlanError;
pub use itinerary::{find_day_summary, group_itinerary};
pub use link_mask::mask_links;
pub use markup::cell_to_html;
pub use model::{
    ItineraryDay, ParsedPlan, PlanTables, Section, SectionKind, Table, TripContext,
};
pub use options::{DayKeyMode, ParseOptions, RowPolicy};
pub use render::{RenderedFragment, render_itinerary_days, render_plan, table_to_html};
pub use sections::{classify_title, split_sections};
pub use session::{PlanSession, SessionStore, TripDetails};
pub use table_parse::extract_table;
pub use warning::{ParseWarning, WarningCode};
pub use xlsx_out::{write_workbook, write_workbook_to_file};

/// Summary of one full document pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseReport {
    pub section_count: usize,
    pub table_count: usize,
    pub dropped_rows: usize,
    pub warnings: Vec<ParseWarning>,
}

/// Runs the whole pipeline on one document: link masking, section
/// splitting, per-section table extraction (first parsed table per
/// category becomes canonical) and itinerary grouping.
///
/// Stateless: every call builds fresh values, so concurrent documents can
/// be parsed in full isolation. Only `RowPolicy::Strict` can make this
/// fail; the default configuration degrades section by section instead.
pub fn parse_plan(
    text: &str,
    options: &ParseOptions,
) -> Result<(ParsedPlan, ParseReport), PlanError> {
    if options.generic_link_label.trim().is_empty() {
        return Err(PlanError::InvalidOption(
            "generic_link_label must not be empty".to_string(),
        ));
    }

    let mut warnings = Vec::new();

    let masked = mask_links(text, options);
    let mut sections = split_sections(&masked);
    let mut tables = PlanTables::default();
    let mut itinerary_body: Option<String> = None;

    for section in &mut sections {
        if section.kind.sheet_name().is_none() {
            continue;
        }

        let parsed = extract_table(&section.title, &section.body, options, &mut warnings)?;
        let Some(table) = parsed else {
            continue;
        };

        section.table = Some(table.clone());
        let Some(slot) = tables.slot_mut(section.kind) else {
            continue;
        };
        if slot.is_none() {
            if section.kind == SectionKind::Itinerary {
                itinerary_body = Some(section.body.clone());
            }
            *slot = Some(table);
        } else {
            warnings.push(
                ParseWarning::new(
                    WarningCode::DuplicateSection,
                    "category already has a canonical table; this one is display-only",
                )
                .with_section(&section.title),
            );
        }
    }

    if tables.is_empty() {
        warnings.push(ParseWarning::new(
            WarningCode::NoTablesDetected,
            "no well-formed tables were found in the document",
        ));
    }

    let itinerary_days = match (&tables.itinerary, itinerary_body) {
        (Some(table), Some(body)) => {
            let grouped = group_itinerary(table, &body, options.day_key_mode);
            if grouped.is_none() {
                warnings.push(
                    ParseWarning::new(
                        WarningCode::MissingDayColumn,
                        "itinerary table has no Day column; rendering falls back to a flat table",
                    )
                    .with_section("ITINERARY"),
                );
            }
            grouped
        }
        _ => None,
    };

    let report = ParseReport {
        section_count: sections.len(),
        table_count: tables.len(),
        dropped_rows: warnings
            .iter()
            .filter_map(|warning| warning.dropped_rows)
            .sum(),
        warnings,
    };
    tracing::debug!(
        sections = report.section_count,
        tables = report.table_count,
        dropped_rows = report.dropped_rows,
        "parsed plan document"
    );

    let plan = ParsedPlan {
        sections,
        tables,
        itinerary_days,
    };
    Ok((plan, report))
}

/// Reads a plan document from disk and runs the pipeline on it.
pub fn parse_plan_file(
    path: &std::path::Path,
    options: &ParseOptions,
) -> Result<(ParsedPlan, ParseReport), PlanError> {
    let text = std::fs::read_to_string(path)?;
    parse_plan(&text, options)
}

/// Convenience wrapper: parse a document and serialize its tables as an
/// in-memory workbook.
pub fn plan_to_workbook(
    text: &str,
    options: &ParseOptions,
) -> Result<(Vec<u8>, ParseReport), PlanError> {
    let (plan, report) = parse_plan(text, options)?;
    let bytes = write_workbook(&plan.tables)?;
    Ok((bytes, report))
}
