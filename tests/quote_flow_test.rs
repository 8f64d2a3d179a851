use httpmock::prelude::*;
use quote_cart::app::{run_quote, BatchOutcome};
use quote_cart::domain::model::QuoteRequest;
use quote_cart::{FileQuoteSink, LocalStorage, QuoteError, QuoteRequestFile, RestBackend, Storefront};
use tempfile::TempDir;

fn mock_catalog(server: &MockServer) -> httpmock::Mock<'_> {
    server.mock(|when, then| {
        when.method(GET).path("/rest/v1/services");
        then.status(200).json_body(serde_json::json!([
            {"id": "svc-film", "name": "Brand Film", "category": "creative"},
            {"id": "svc-ads", "name": "Paid Social", "category": "marketing"},
            {"id": "svc-bot", "name": "Lead Qualifier Bot", "category": "ai_automation"}
        ]));
    })
}

fn request_file(items: &str) -> QuoteRequestFile {
    let content = format!(
        r#"
[contact]
name = "Jo Rivera"
email = "jo@studio.io"
company = "Rivera Studio"

{}
"#,
        items
    );
    QuoteRequestFile::from_toml_str(&content).unwrap()
}

#[tokio::test]
async fn test_batch_quote_written_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let catalog_mock = mock_catalog(&server);

    let storefront = Storefront::new(RestBackend::new(&server.base_url(), None, 5).unwrap());
    let sink = FileQuoteSink::new(LocalStorage::new(output_path.clone()), output_path.clone());

    let request = request_file(
        r#"
[[items]]
service_id = "svc-ads"
notes = "Q3 launch"

[[items]]
service_id = "svc-film"

[[items]]
service_id = "svc-ads"
notes = "duplicate, ignored"

[[items]]
service_id = "svc-unknown"
"#,
    );

    let outcome = run_quote(&storefront, &sink, request, false).await.unwrap();
    catalog_mock.assert();

    let BatchOutcome::Submitted(reference) = outcome else {
        panic!("expected a submitted quote");
    };
    assert!(reference.starts_with(&output_path));

    let saved = std::fs::read_to_string(&reference).unwrap();
    let quote: QuoteRequest = serde_json::from_str(&saved).unwrap();

    let ids: Vec<&str> = quote.items.iter().map(|l| l.service_id.as_str()).collect();
    assert_eq!(ids, vec!["svc-ads", "svc-film"]);
    assert_eq!(quote.items[0].notes, "Q3 launch");
    assert_eq!(quote.items[1].notes, "");
    assert_eq!(quote.contact.company.as_deref(), Some("Rivera Studio"));
}

#[tokio::test]
async fn test_dry_run_does_not_submit() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    mock_catalog(&server);

    let storefront = Storefront::new(RestBackend::new(&server.base_url(), None, 5).unwrap());
    let sink = FileQuoteSink::new(LocalStorage::new(output_path.clone()), output_path);

    let request = request_file(
        r#"
[[items]]
service_id = "svc-bot"
"#,
    );

    let outcome = run_quote(&storefront, &sink, request, true).await.unwrap();
    match outcome {
        BatchOutcome::DryRun(quote) => assert_eq!(quote.items[0].category, "ai_automation"),
        other => panic!("unexpected outcome: {:?}", other),
    }

    assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_unavailable_catalog_means_no_quote() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/rest/v1/services");
        then.status(500);
    });

    let storefront = Storefront::new(RestBackend::new(&server.base_url(), None, 5).unwrap());
    let sink = FileQuoteSink::new(LocalStorage::new(output_path.clone()), output_path);

    let request = request_file(
        r#"
[[items]]
service_id = "svc-film"
"#,
    );

    let err = run_quote(&storefront, &sink, request, false).await.unwrap_err();
    assert!(matches!(err, QuoteError::CheckoutError { .. }));
}

#[tokio::test]
async fn test_quote_posted_to_backend() {
    let server = MockServer::start();
    mock_catalog(&server);
    let insert_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/rest/v1/quote_requests")
            .body_contains("svc-film");
        then.status(201);
    });

    let backend = RestBackend::new(&server.base_url(), Some("anon".to_string()), 5).unwrap();
    let storefront = Storefront::new(backend.clone());

    let request = request_file(
        r#"
[[items]]
service_id = "svc-film"
notes = "two cuts"
"#,
    );

    let outcome = run_quote(&storefront, &backend, request, false).await.unwrap();
    insert_mock.assert();
    assert!(matches!(outcome, BatchOutcome::Submitted(_)));
}
