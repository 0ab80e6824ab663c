use std::path::Path;

use regex::Regex;
use rust_xlsxwriter::{Url, Workbook};

use crate::error::PlanError;
use crate::model::{PlanTables, Table};

/// Serializes the named tables into one workbook, a worksheet per table
/// with the table name as the sheet name. An empty collection still
/// produces a valid workbook with a single blank `Plan` sheet.
///
/// Cell link policy: a cell that consists of exactly one markdown link is
/// written as a real hyperlink with the link text as its label; every
/// other cell is written as literal text.
pub fn write_workbook(tables: &PlanTables) -> Result<Vec<u8>, PlanError> {
    let mut workbook = build_workbook(tables)?;
    Ok(workbook.save_to_buffer()?)
}

pub fn write_workbook_to_file(path: &Path, tables: &PlanTables) -> Result<(), PlanError> {
    let mut workbook = build_workbook(tables)?;
    workbook.save(path)?;
    Ok(())
}

fn build_workbook(tables: &PlanTables) -> Result<Workbook, PlanError> {
    let mut workbook = Workbook::new();

    if tables.is_empty() {
        workbook.add_worksheet().set_name("Plan")?;
        return Ok(workbook);
    }

    for (name, table) in tables.iter() {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(name)?;
        write_table(worksheet, table)?;
    }

    Ok(workbook)
}

fn write_table(
    worksheet: &mut rust_xlsxwriter::Worksheet,
    table: &Table,
) -> Result<(), PlanError> {
    let mut col: u16 = 0;
    for header in &table.headers {
        worksheet.write_string(0, col, header.as_str())?;
        col += 1;
    }

    let mut row_num: u32 = 1;
    for row in &table.rows {
        let mut col: u16 = 0;
        for cell in row {
            write_cell(worksheet, row_num, col, cell)?;
            col += 1;
        }
        row_num += 1;
    }

    Ok(())
}

fn write_cell(
    worksheet: &mut rust_xlsxwriter::Worksheet,
    row: u32,
    col: u16,
    cell: &str,
) -> Result<(), PlanError> {
    if let Some((text, target)) = whole_cell_link(cell) {
        worksheet.write_url(row, col, Url::new(target).set_text(text))?;
    } else {
        worksheet.write_string(row, col, cell)?;
    }
    Ok(())
}

/// Matches cells that are exactly one `[text](url)` link with an http(s)
/// target; anything else, including cells with extra text or multiple
/// links, is exported literally.
fn whole_cell_link(cell: &str) -> Option<(String, String)> {
    let link_re =
        Regex::new(r"^\[([^\]]+)\]\(([^)]+)\)$").expect("hardcoded cell link regex is valid");
    let capture = link_re.captures(cell.trim())?;
    let text = capture.get(1)?.as_str().to_string();
    let target = capture.get(2)?.as_str().to_string();

    let parsed = url::Url::parse(&target).ok()?;
    matches!(parsed.scheme(), "http" | "https").then_some((text, target))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use calamine::{Reader, Xlsx};
    use pretty_assertions::assert_eq;

    use super::{whole_cell_link, write_workbook, write_workbook_to_file};
    use crate::model::{PlanTables, Table};

    fn sample_tables() -> PlanTables {
        PlanTables {
            flights: Some(Table {
                headers: vec!["Airline".to_string(), "Booking Link".to_string()],
                rows: vec![
                    vec![
                        "Cebu Pacific".to_string(),
                        "[✈️ Book Flight](https://flights.example.com)".to_string(),
                    ],
                    vec!["Philippine Airlines".to_string(), "1,200 PHP".to_string()],
                ],
            }),
            hotels: Some(Table {
                headers: vec!["Hotel Name".to_string(), "Rating".to_string()],
                rows: vec![vec!["Grand Inn".to_string(), "4.5".to_string()]],
            }),
            itinerary: None,
            budget: None,
        }
    }

    #[test]
    fn writes_one_sheet_per_named_table() {
        let bytes = write_workbook(&sample_tables()).expect("workbook should build");
        // XLSX is a zip archive.
        assert_eq!(&bytes[..2], b"PK");

        let mut workbook = Xlsx::new(Cursor::new(bytes)).expect("workbook should reopen");
        assert_eq!(workbook.sheet_names(), ["Flights", "Hotels"]);

        let range = workbook
            .worksheet_range("Flights")
            .expect("Flights sheet should have a range");
        let cells = range
            .rows()
            .map(|row| row.iter().map(ToString::to_string).collect::<Vec<_>>())
            .collect::<Vec<_>>();
        // Header first, then data rows in order; the whole-cell link keeps
        // its display text.
        assert_eq!(
            cells,
            [
                ["Airline", "Booking Link"],
                ["Cebu Pacific", "✈️ Book Flight"],
                ["Philippine Airlines", "1,200 PHP"],
            ]
        );

        let range = workbook
            .worksheet_range("Hotels")
            .expect("Hotels sheet should have a range");
        let cells = range
            .rows()
            .map(|row| row.iter().map(ToString::to_string).collect::<Vec<_>>())
            .collect::<Vec<_>>();
        assert_eq!(cells, [["Hotel Name", "Rating"], ["Grand Inn", "4.5"]]);
    }

    #[test]
    fn empty_collection_still_produces_a_workbook() {
        let bytes = write_workbook(&PlanTables::default()).expect("empty workbook should build");
        assert_eq!(&bytes[..2], b"PK");

        let workbook = Xlsx::new(Cursor::new(bytes)).expect("workbook should reopen");
        assert_eq!(workbook.sheet_names(), ["Plan"]);
    }

    #[test]
    fn writes_workbook_to_file() {
        let dir = tempfile::tempdir().expect("tempdir should be created");
        let path = dir.path().join("plan.xlsx");
        write_workbook_to_file(&path, &sample_tables()).expect("workbook should save");
        let metadata = std::fs::metadata(&path).expect("file should exist");
        assert!(metadata.len() > 0);
    }

    #[test]
    fn whole_cell_link_detection() {
        assert_eq!(
            whole_cell_link("[Site](https://x.com)"),
            Some(("Site".to_string(), "https://x.com".to_string()))
        );
        assert_eq!(whole_cell_link("Book at [Site](https://x.com) now"), None);
        assert_eq!(whole_cell_link("[A](https://a.com) [B](https://b.com)"), None);
        assert_eq!(whole_cell_link("[bad](notaurl)"), None);
        assert_eq!(whole_cell_link("1,200 PHP"), None);
    }
}
