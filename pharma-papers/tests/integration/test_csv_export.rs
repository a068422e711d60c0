//! Integration tests for writing report CSV files

use std::fs;

use pharma_papers::export::{read_csv, save_csv};
use pharma_papers::ArticleReport;
use tempfile::tempdir;

fn report(pmid: &str, title: &str) -> ArticleReport {
    ArticleReport {
        pubmed_id: pmid.to_string(),
        title: title.to_string(),
        publication_date: "2024-Jan-15".to_string(),
        non_academic_authors: "John Smith (XYZ Pharma Inc., Boston, MA)".to_string(),
        company_affiliations: "XYZ Pharma Inc., Boston, MA".to_string(),
        corresponding_author_emails: "j.smith@xyzpharma.com; lab@xyzpharma.com".to_string(),
    }
}

#[test]
fn test_save_csv_writes_header_and_rows() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("results.csv");
    let reports = vec![
        report("38100002", "Phase II trial"),
        report("38100005", "Dosing, \"safety\" and efficacy"),
    ];

    save_csv(&file_path, &reports).unwrap();

    let content = fs::read_to_string(&file_path).unwrap();
    assert!(content.starts_with(
        "PubMed_ID,Title,Publication Date,Non Academic Author(s),Company Affiliations,Corresponding Author Email\n"
    ));
    assert_eq!(content.lines().count(), 3);
    assert!(content.contains(r#""Dosing, ""safety"" and efficacy""#));

    let read_back = read_csv(fs::File::open(&file_path).unwrap()).unwrap();
    assert_eq!(read_back, reports);
}

#[test]
fn test_save_csv_overwrites_existing_file() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("results.csv");
    fs::write(&file_path, "stale content\nmore stale content\nand more\n").unwrap();

    save_csv(&file_path, &[report("1", "Only row")]).unwrap();

    let read_back = read_csv(fs::File::open(&file_path).unwrap()).unwrap();
    assert_eq!(read_back.len(), 1);
    assert_eq!(read_back[0].pubmed_id, "1");
}

#[test]
fn test_save_csv_empty_reports_writes_header_only() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("empty.csv");

    save_csv(&file_path, &[]).unwrap();

    let content = fs::read_to_string(&file_path).unwrap();
    assert_eq!(content.lines().count(), 1);
    assert!(read_csv(content.as_bytes()).unwrap().is_empty());
}

#[test]
fn test_save_csv_into_missing_directory_fails() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("missing").join("results.csv");

    let result = save_csv(&file_path, &[report("1", "t")]);
    assert!(matches!(
        result,
        Err(pharma_papers::PapersError::IoError { .. })
    ));
}
