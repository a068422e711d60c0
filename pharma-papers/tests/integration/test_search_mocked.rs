//! Integration tests for the ESearch stage using mocked HTTP responses
//!
//! These tests use wiremock to simulate NCBI ESearch responses.

use pharma_papers::{ClientConfig, PaperFinder, PapersError};
use tracing_test::traced_test;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ESEARCH_THREE_IDS: &str = r#"<?xml version="1.0" encoding="UTF-8" ?>
<!DOCTYPE eSearchResult PUBLIC "-//NLM//DTD esearch 20060628//EN" "https://eutils.ncbi.nlm.nih.gov/eutils/dtd/20060628/esearch.dtd">
<eSearchResult>
    <Count>1520</Count>
    <RetMax>3</RetMax>
    <RetStart>0</RetStart>
    <IdList>
        <Id>38100003</Id>
        <Id>38100001</Id>
        <Id>38100002</Id>
    </IdList>
    <TranslationSet/>
    <QueryTranslation>"mrna vaccine"[All Fields]</QueryTranslation>
</eSearchResult>"#;

const ESEARCH_NO_IDS: &str = r#"<?xml version="1.0" encoding="UTF-8" ?>
<eSearchResult>
    <Count>0</Count>
    <RetMax>0</RetMax>
    <RetStart>0</RetStart>
    <IdList/>
    <ErrorList>
        <PhraseNotFound>zzqqxx</PhraseNotFound>
    </ErrorList>
</eSearchResult>"#;

const ESEARCH_ERROR: &str = r#"<?xml version="1.0" encoding="UTF-8" ?>
<eSearchResult>
    <ERROR>Invalid query</ERROR>
</eSearchResult>"#;

fn create_mock_finder(mock_server: &MockServer) -> PaperFinder {
    let config = ClientConfig::new().with_base_url(mock_server.uri());
    PaperFinder::with_config(config)
}

async fn mount_esearch(mock_server: &MockServer, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .respond_with(
            ResponseTemplate::new(status)
                .set_body_string(body.to_string())
                .insert_header("content-type", "text/xml"),
        )
        .mount(mock_server)
        .await;
}

#[tokio::test]
#[traced_test]
async fn test_search_returns_ids_in_upstream_order() {
    let mock_server = MockServer::start().await;
    mount_esearch(&mock_server, 200, ESEARCH_THREE_IDS).await;
    let finder = create_mock_finder(&mock_server);

    let pmids = finder
        .search("mRNA vaccine", 3)
        .await
        .expect("Search should succeed");

    assert_eq!(pmids, vec!["38100003", "38100001", "38100002"]);
    assert!(logs_contain("PubMed IDs fetched"));
}

#[tokio::test]
#[traced_test]
async fn test_search_sends_expected_query_parameters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .and(query_param("db", "pubmed"))
        .and(query_param("term", "cancer immunotherapy"))
        .and(query_param("retmode", "xml"))
        .and(query_param("retmax", "25"))
        .respond_with(ResponseTemplate::new(200).set_body_string(ESEARCH_THREE_IDS))
        .expect(1)
        .mount(&mock_server)
        .await;

    let finder = create_mock_finder(&mock_server);
    let pmids = finder.search("cancer immunotherapy", 25).await.unwrap();
    assert_eq!(pmids.len(), 3);
}

#[tokio::test]
#[traced_test]
async fn test_search_appends_contact_parameters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .and(query_param("email", "someone@example.org"))
        .and(query_param("tool", "get-papers-list"))
        .respond_with(ResponseTemplate::new(200).set_body_string(ESEARCH_THREE_IDS))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = ClientConfig::new()
        .with_base_url(mock_server.uri())
        .with_email("someone@example.org");
    let finder = PaperFinder::with_config(config);

    assert_eq!(finder.search("cancer", 3).await.unwrap().len(), 3);
}

#[tokio::test]
#[traced_test]
async fn test_search_without_matches_is_empty() {
    let mock_server = MockServer::start().await;
    mount_esearch(&mock_server, 200, ESEARCH_NO_IDS).await;
    let finder = create_mock_finder(&mock_server);

    let pmids = finder.search("zzqqxx", 10).await.unwrap();
    assert!(pmids.is_empty());
}

#[tokio::test]
#[traced_test]
async fn test_search_server_error_is_reported() {
    let mock_server = MockServer::start().await;
    mount_esearch(&mock_server, 500, "Internal Server Error").await;
    let finder = create_mock_finder(&mock_server);

    match finder.search("cancer", 10).await {
        Err(PapersError::ApiError { status, .. }) => assert_eq!(status, 500),
        other => panic!("expected ApiError, got {:?}", other),
    }
}

#[tokio::test]
#[traced_test]
async fn test_search_error_element_is_reported() {
    let mock_server = MockServer::start().await;
    mount_esearch(&mock_server, 200, ESEARCH_ERROR).await;
    let finder = create_mock_finder(&mock_server);

    match finder.search("(((", 10).await {
        Err(PapersError::ApiError { status, message }) => {
            assert_eq!(status, 200);
            assert!(message.contains("Invalid query"));
        }
        other => panic!("expected ApiError, got {:?}", other),
    }
}

#[tokio::test]
#[traced_test]
async fn test_search_malformed_xml_fails() {
    let mock_server = MockServer::start().await;
    mount_esearch(&mock_server, 200, "<eSearchResult><IdList><Id>1</Id>").await;
    let finder = create_mock_finder(&mock_server);

    let result = finder.search("cancer", 10).await;
    assert!(matches!(result, Err(PapersError::XmlError(_))));
}

#[tokio::test]
#[traced_test]
async fn test_blank_query_and_zero_limit_make_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(ESEARCH_THREE_IDS))
        .expect(0)
        .mount(&mock_server)
        .await;

    let finder = create_mock_finder(&mock_server);
    assert!(finder.search("   ", 10).await.unwrap().is_empty());
    assert!(finder.search("cancer", 0).await.unwrap().is_empty());

    let received_requests = mock_server.received_requests().await.unwrap();
    assert_eq!(received_requests.len(), 0);
}

#[tokio::test]
#[traced_test]
async fn test_search_limit_above_maximum_makes_no_request() {
    let mock_server = MockServer::start().await;
    let finder = create_mock_finder(&mock_server);

    let result = finder.search("cancer", 10_000).await;
    assert!(matches!(
        result,
        Err(PapersError::SearchLimitExceeded {
            requested: 10_000,
            maximum: 9999
        })
    ));

    let received_requests = mock_server.received_requests().await.unwrap();
    assert!(received_requests.is_empty());
}
