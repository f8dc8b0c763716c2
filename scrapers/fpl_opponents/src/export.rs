use rust_xlsxwriter::{DocProperties, ExcelDateTime, Format, Workbook, XlsxError};
use std::path::Path;
use tracing::info;

use crate::{
    error::{FplError, Result},
    report::ReportTable,
};

const SHEET_NAME: &str = "Opponents";

/// Lays the report out as one worksheet: gameweek labels across row 1, team
/// codes down column A, blank cells for blank gameweeks.
pub fn build_workbook(report: &ReportTable) -> Result<Workbook> {
    let mut workbook = Workbook::new();

    // Fixed creation date keeps the file identical between runs.
    let created = ExcelDateTime::from_ymd(2000, 1, 1)?;
    let properties = DocProperties::new()
        .set_title("Selected teams opponents")
        .set_creation_datetime(&created);
    workbook.set_properties(&properties);

    let bold = Format::new().set_bold();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, label) in report.column_labels().iter().enumerate() {
        worksheet.write_string_with_format(0, body_column(col)?, label, &bold)?;
    }

    for (row, (team, cells)) in report.rows().enumerate() {
        let row = body_row(row)?;
        worksheet.write_string_with_format(row, 0, team, &bold)?;
        for (col, cell) in cells.iter().enumerate() {
            if let Some(opponent) = cell {
                worksheet.write_string(row, body_column(col)?, opponent)?;
            }
        }
    }

    Ok(workbook)
}

// Column A and row 1 hold the labels, so report cell (0, 0) lands on B2.
fn body_column(col: usize) -> Result<u16> {
    let col = col.checked_add(1).and_then(|c| u16::try_from(c).ok());
    col.ok_or(FplError::Export(XlsxError::RowColumnLimitError))
}

fn body_row(row: usize) -> Result<u32> {
    let row = row.checked_add(1).and_then(|r| u32::try_from(r).ok());
    row.ok_or(FplError::Export(XlsxError::RowColumnLimitError))
}

/// Writes the report to `path`, replacing whatever is there.
pub fn write_xlsx(report: &ReportTable, path: &Path) -> Result<()> {
    info!("Writing XLSX to {:?}", path);
    let mut workbook = build_workbook(report)?;
    workbook.save(path)?;
    Ok(())
}

pub fn write_csv(report: &ReportTable, path: &Path) -> Result<()> {
    info!("Writing CSV to {:?}", path);
    let mut wtr = csv::Writer::from_path(path)?;

    let mut header = vec!["team".to_string()];
    header.extend(report.column_labels());
    wtr.write_record(&header)?;

    for (team, cells) in report.rows() {
        let mut record = vec![team];
        record.extend(cells.iter().map(|c| c.as_deref().unwrap_or_default()));
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}
