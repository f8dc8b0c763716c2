use std::{io::Write, path::Path};
use tracing::info;

use crate::{
    config::ReportConfig,
    error::Result,
    export::{write_csv, write_xlsx},
    fetcher::{FplClient, JsonFetcher},
    report::{build_report, ReportTable},
    resolver::TeamTable,
};

/// Fetches teams then fixtures, one after the other, and builds the report.
pub async fn fetch_report<F: JsonFetcher>(client: &FplClient<F>, selection: &ReportConfig) -> Result<ReportTable> {
    let teams = TeamTable::new(client.fetch_teams().await?);
    let fixtures = client.fetch_fixtures().await?;

    let report = build_report(&teams, &fixtures, &selection.teams, &selection.rounds)?;
    info!(
        "Built report for {} teams over {} gameweeks",
        report.teams().len(),
        report.rounds().len()
    );
    Ok(report)
}

/// Prints the report to `out`, then writes the spreadsheet (and the CSV, if asked).
pub fn emit_report<W: Write>(
    report: &ReportTable,
    out: &mut W,
    xlsx_path: &Path,
    csv_path: Option<&Path>,
) -> Result<()> {
    write!(out, "{}", report.render_console())?;
    out.flush()?;

    write_xlsx(report, xlsx_path)?;
    if let Some(csv_path) = csv_path {
        write_csv(report, csv_path)?;
    }
    Ok(())
}
