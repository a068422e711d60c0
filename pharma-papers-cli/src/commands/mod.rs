pub mod papers;

use std::path::Path;

use anyhow::{Context, Result};
use pharma_papers::{AffiliationClassifier, ClientConfig, KeywordConfig, PaperFinder};

pub fn create_finder(
    email: Option<&str>,
    tool: &str,
    timeout_seconds: u64,
    keywords: Option<&Path>,
) -> Result<PaperFinder> {
    let mut config = ClientConfig::new()
        .with_tool(tool)
        .with_timeout_seconds(timeout_seconds);

    if let Some(email) = email {
        config = config.with_email(email);
    }

    let keywords = match keywords {
        Some(path) => KeywordConfig::from_path(path)
            .with_context(|| format!("Failed to load keyword file {}", path.display()))?,
        None => KeywordConfig::default(),
    };
    let classifier = AffiliationClassifier::new(&keywords)?;

    Ok(PaperFinder::with_config(config).with_classifier(classifier))
}
