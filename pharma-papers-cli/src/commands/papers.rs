use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Result;
use clap::builder::RangedU64ValueParser;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use pharma_papers::export::{format_console, save_csv};
use pharma_papers::pubmed::MAX_RETRIEVABLE;
use pharma_papers::PaperFinder;
use tracing::{error, info};

use super::create_finder;

#[derive(Args, Debug)]
pub struct GetPapers {
    /// PubMed search query
    #[arg(value_name = "QUERY")]
    query: String,

    /// Save results to this CSV file instead of printing them
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Maximum number of PubMed IDs to retrieve
    #[arg(
        short,
        long,
        default_value_t = 50,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_RETRIEVABLE as u64)
    )]
    max_results: usize,

    /// YAML file overriding the academic/company keyword lists
    #[arg(long, value_name = "FILE")]
    keywords: Option<PathBuf>,
}

impl GetPapers {
    pub async fn execute_with_config(
        &self,
        email: Option<&str>,
        tool: &str,
        timeout_seconds: u64,
    ) -> Result<ExitCode> {
        let finder = create_finder(email, tool, timeout_seconds, self.keywords.as_deref())?;
        self.execute_with_finder(&finder, &mut io::stdout()).await
    }

    /// Run the search pipeline, writing user-facing lines to `out`
    pub async fn execute_with_finder<W: Write>(
        &self,
        finder: &PaperFinder,
        out: &mut W,
    ) -> Result<ExitCode> {
        let spinner = new_spinner(format!("Searching PubMed for \"{}\"", self.query))?;
        let pmids = match finder.search(&self.query, self.max_results).await {
            Ok(pmids) => {
                spinner.finish_and_clear();
                pmids
            }
            Err(e) => {
                spinner.finish_and_clear();
                error!(error = %e, query = %self.query, "ESearch request failed");
                eprintln!("Error fetching PubMed IDs: {}", e);
                return Ok(ExitCode::FAILURE);
            }
        };

        if pmids.is_empty() {
            writeln!(out, "No results found for this query.")?;
            return Ok(ExitCode::SUCCESS);
        }
        info!(pmids_count = pmids.len(), "Fetching article details");

        let spinner = new_spinner(format!("Fetching {} articles", pmids.len()))?;
        let reports = match finder.fetch_and_classify(&pmids).await {
            Ok(reports) => {
                spinner.finish_and_clear();
                reports
            }
            Err(e) => {
                spinner.finish_and_clear();
                error!(error = %e, pmids_count = pmids.len(), "EFetch request failed");
                eprintln!("Error fetching article details: {}", e);
                return Ok(ExitCode::FAILURE);
            }
        };

        if reports.is_empty() {
            writeln!(out, "No articles with pharma/biotech affiliations found.")?;
            return Ok(ExitCode::SUCCESS);
        }

        match &self.file {
            Some(path) => {
                if let Err(e) = save_csv(path, &reports) {
                    error!(error = %e, path = %path.display(), "Failed to write CSV");
                    eprintln!("Error saving results to {}: {}", path.display(), e);
                    return Ok(ExitCode::FAILURE);
                }
                writeln!(out, "Results saved to {}", path.display())?;
            }
            None => write!(out, "{}", format_console(&reports))?,
        }

        Ok(ExitCode::SUCCESS)
    }
}

fn new_spinner(message: String) -> Result<ProgressBar> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message(message);
    Ok(spinner)
}
