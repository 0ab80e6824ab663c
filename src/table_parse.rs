use crate::error::PlanError;
use crate::model::Table;
use crate::options::{ParseOptions, RowPolicy};
use crate::warning::{ParseWarning, WarningCode};

/// Locates and parses the first well-formed pipe table in a section body.
///
/// A table is one header line containing at least two pipes, immediately
/// followed by a separator line of pipes/dashes/spaces, immediately
/// followed by one or more data lines containing pipes. Data rows whose cell count differs
/// from the header are dropped under `RowPolicy::Lenient` (counted in a
/// warning, never an error) or fail the parse under `RowPolicy::Strict`.
/// Returns `None` when no table run exists or no valid rows survive.
pub fn extract_table(
    section_title: &str,
    body: &str,
    options: &ParseOptions,
    warnings: &mut Vec<ParseWarning>,
) -> Result<Option<Table>, PlanError> {
    let lines = body.lines().collect::<Vec<_>>();

    for start in 0..lines.len() {
        if lines[start].matches('|').count() < 2 || is_separator_line(lines[start]) {
            continue;
        }
        let Some(separator) = lines.get(start + 1) else {
            break;
        };
        if !is_separator_line(separator) {
            continue;
        }
        if !lines.get(start + 2).is_some_and(|line| line.contains('|')) {
            continue;
        }

        let headers = split_cells(lines[start]);
        if headers.is_empty() {
            continue;
        }

        return parse_rows(section_title, &headers, &lines[start + 2..], options, warnings);
    }

    Ok(None)
}

fn parse_rows(
    section_title: &str,
    headers: &[String],
    data_lines: &[&str],
    options: &ParseOptions,
    warnings: &mut Vec<ParseWarning>,
) -> Result<Option<Table>, PlanError> {
    let mut rows = Vec::new();
    let mut dropped = 0_usize;

    for line in data_lines {
        if !line.contains('|') {
            break;
        }
        let cells = split_cells(line);
        if cells.len() == headers.len() {
            rows.push(cells);
        } else if options.row_policy == RowPolicy::Strict {
            return Err(PlanError::MalformedRow {
                section: section_title.to_string(),
                line: (*line).to_string(),
            });
        } else {
            dropped += 1;
        }
    }

    if dropped > 0 {
        tracing::warn!(section = section_title, dropped, "dropped mismatched table rows");
        warnings.push(
            ParseWarning::new(
                WarningCode::RowsDropped,
                "dropped data rows whose cell count does not match the header",
            )
            .with_section(section_title)
            .with_dropped_rows(dropped),
        );
    }

    if rows.is_empty() {
        warnings.push(
            ParseWarning::new(
                WarningCode::MalformedTable,
                "table run had no valid data rows; section keeps its raw text",
            )
            .with_section(section_title),
        );
        return Ok(None);
    }

    Ok(Some(Table {
        headers: headers.to_vec(),
        rows,
    }))
}

/// A separator row starts with a pipe and contains only pipes, dashes and
/// whitespace. A dash is not required, so a blank pipe row under a header
/// still delimits a table.
fn is_separator_line(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with('|')
        && trimmed
            .chars()
            .all(|ch| ch == '|' || ch == '-' || ch.is_whitespace())
}

/// Splits a pipe-delimited line into trimmed cells, discarding the empty
/// fragments produced by leading/trailing pipes. Empty interior cells are
/// preserved so the column-count check stays exact.
fn split_cells(line: &str) -> Vec<String> {
    let mut cells = line
        .split('|')
        .map(|cell| cell.trim().to_string())
        .collect::<Vec<_>>();

    while cells.first().is_some_and(String::is_empty) {
        cells.remove(0);
    }
    while cells.last().is_some_and(String::is_empty) {
        cells.pop();
    }
    cells
}
