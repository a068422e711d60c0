//! CSV and console output for [`ArticleReport`]s

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use tracing::{info, instrument};

use crate::error::Result;
use crate::report::{ArticleReport, CSV_HEADERS};

/// Write a header row followed by one row per report
///
/// The header is written even when `reports` is empty.
pub fn write_csv<W: Write>(writer: W, reports: &[ArticleReport]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(CSV_HEADERS)?;
    for report in reports {
        wtr.serialize(report)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write reports to a CSV file, replacing any existing file
#[instrument(skip(reports), fields(path = %path.as_ref().display(), rows = reports.len()))]
pub fn save_csv<P: AsRef<Path>>(path: P, reports: &[ArticleReport]) -> Result<()> {
    let file = File::create(path.as_ref())?;
    write_csv(file, reports)?;
    info!("Saved {} reports", reports.len());
    Ok(())
}

/// Read reports back from CSV produced by [`write_csv`]
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<ArticleReport>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let reports = rdr
        .deserialize()
        .collect::<std::result::Result<Vec<ArticleReport>, csv::Error>>()?;
    Ok(reports)
}

/// Render reports as `Key: value` blocks for the terminal
///
/// # Example
///
/// ```
/// use pharma_papers::{export::format_console, ArticleReport};
///
/// let report = ArticleReport {
///     pubmed_id: "1".into(),
///     title: "T".into(),
///     publication_date: "2023".into(),
///     non_academic_authors: "None".into(),
///     company_affiliations: "Acme Pharma".into(),
///     corresponding_author_emails: "N/A".into(),
/// };
/// let text = format_console(&[report]);
/// assert!(text.starts_with("\n--- Article ---\nPubMed_ID: 1\n"));
/// ```
pub fn format_console(reports: &[ArticleReport]) -> String {
    let mut out = String::new();
    for report in reports {
        out.push_str("\n--- Article ---\n");
        for (name, value) in report.fields() {
            out.push_str(&format!("{}: {}\n", name, value));
        }
    }
    out
}
