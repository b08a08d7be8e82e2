use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::routing::get;
use axum::Router;
use fitness_insights::config::SheetsConfig;
use fitness_insights::workflows::candidates::{dashboard_router, CandidateRecord};
use fitness_insights::workflows::sheets::{
    CsvFileFallback, DashboardLoader, DataSource, EmbeddedSample, FallbackDataset, SheetClient,
    SheetImportError, SheetSource, SheetsApiClient, SheetsCsvClient,
};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

const EXPORT_CSV: &str = "\"Branch\",\"Gender\",\"Status\"\n\
\"Pilot\",\"Male\",\"tr\"\n\
\"Pilot\",\"Female\",\"FIT\"\n\
\"ATC\",\"\",\"FIT\"\n";

const VALUE_RANGE: &str = r#"{"range":"Sheet1!A1:C3","majorDimension":"ROWS","values":[["Branch","Gender","Status"],["NAOO","Female","pending"],["NAOO","Male"]]}"#;

/// Serves a fake spreadsheet host on an ephemeral local port.
async fn spawn_sheet_host() -> SocketAddr {
    let app = Router::new()
        .route(
            "/spreadsheets/d/sheet-ok/export",
            get(|| async { EXPORT_CSV }),
        )
        .route(
            "/spreadsheets/d/sheet-private/export",
            get(|| async { (StatusCode::UNAUTHORIZED, "sign in required") }),
        )
        .route(
            "/v4/spreadsheets/sheet-ok/values/:range",
            get(|| async { VALUE_RANGE }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("fake sheet host runs");
    });
    addr
}

fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(5))
        .build()
        .expect("http client builds")
}

struct StaticSheet(Vec<CandidateRecord>);

impl SheetSource for StaticSheet {
    fn describe(&self) -> String {
        "static sheet".to_string()
    }

    fn fetch_records(
        &self,
    ) -> impl Future<Output = Result<Vec<CandidateRecord>, SheetImportError>> + Send {
        async move { Ok(self.0.clone()) }
    }
}

#[derive(Default)]
struct CountingFallback {
    calls: AtomicUsize,
}

impl FallbackDataset for CountingFallback {
    fn records(&self) -> Result<Vec<CandidateRecord>, SheetImportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![CandidateRecord::new("ATC", "Female", "FIT")])
    }
}

#[tokio::test]
async fn csv_client_fetches_and_parses_export() {
    let addr = spawn_sheet_host().await;
    let client = SheetsCsvClient::new(http_client(), &format!("http://{addr}"), "sheet-ok", "0");

    let records = client.fetch_records().await.expect("export fetched");
    assert_eq!(
        records,
        vec![
            CandidateRecord::new("Pilot", "Male", "TR"),
            CandidateRecord::new("Pilot", "Female", "FIT"),
        ]
    );
}

#[tokio::test]
async fn api_client_reads_value_range() {
    let addr = spawn_sheet_host().await;
    let client = SheetsApiClient::new(
        http_client(),
        &format!("http://{addr}"),
        "sheet-ok",
        "Sheet1!A:C",
        "test-key",
    );

    let records = client.fetch_records().await.expect("values fetched");
    assert_eq!(records, vec![CandidateRecord::new("NAOO", "Female", "PENDING")]);
}

#[tokio::test]
async fn non_success_status_is_reported() {
    let addr = spawn_sheet_host().await;
    let client = SheetsCsvClient::new(
        http_client(),
        &format!("http://{addr}"),
        "sheet-private",
        "0",
    );

    match client.fetch_records().await {
        Err(SheetImportError::Status(status)) => assert_eq!(status, StatusCode::UNAUTHORIZED),
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn loader_prefers_sheet_rows_when_available() {
    let fallback = CountingFallback::default();
    let loader = DashboardLoader::new(
        StaticSheet(vec![CandidateRecord::new("Pilot", "Male", "FIT")]),
        fallback,
    );

    let dataset = loader.load().await.expect("dataset loads");
    assert_eq!(dataset.source, DataSource::Sheet);
    assert_eq!(dataset.records.len(), 1);
}

#[tokio::test]
async fn loader_keeps_empty_sheet_without_falling_back() {
    let loader = DashboardLoader::new(StaticSheet(Vec::new()), CountingFallback::default());

    let dataset = loader.load().await.expect("dataset loads");
    assert_eq!(dataset.source, DataSource::Sheet);
    assert!(dataset.records.is_empty());
}

#[tokio::test]
async fn loader_falls_back_when_sheet_is_private() {
    let addr = spawn_sheet_host().await;
    let client = SheetsCsvClient::new(
        http_client(),
        &format!("http://{addr}"),
        "sheet-private",
        "0",
    );
    let loader = DashboardLoader::new(client, EmbeddedSample);

    let dataset = loader.load().await.expect("fallback dataset loads");
    assert_eq!(dataset.source, DataSource::Fallback);
    assert_eq!(dataset.records.len(), 67);
}

#[tokio::test]
async fn loader_falls_back_when_sheet_is_disabled() {
    let config = SheetsConfig {
        sheet_id: None,
        ..SheetsConfig::default()
    };
    let client = SheetClient::from_config(&config).expect("client");
    let loader = DashboardLoader::new(client, CountingFallback::default());

    let dataset = loader.load().await.expect("fallback dataset loads");
    assert_eq!(dataset.source, DataSource::Fallback);
    assert_eq!(
        dataset.records,
        vec![CandidateRecord::new("ATC", "Female", "FIT")]
    );
}

#[tokio::test]
async fn loader_reports_data_unavailable_when_fallback_fails() {
    let loader = DashboardLoader::new(
        SheetClient::Disabled,
        CsvFileFallback::new("./missing-fallback.csv"),
    );

    let error = loader.load().await.expect_err("nothing to load");
    assert!(matches!(error.primary, SheetImportError::NotConfigured));
    assert!(matches!(error.fallback, SheetImportError::Io(_)));
    assert!(error.to_string().contains("fallback dataset failed"));
}

#[tokio::test]
async fn loader_shares_across_tasks() {
    let loader = Arc::new(DashboardLoader::new(SheetClient::Disabled, EmbeddedSample));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let loader = loader.clone();
            tokio::spawn(async move { loader.load().await.map(|dataset| dataset.records.len()) })
        })
        .collect();

    for handle in handles {
        let count = handle.await.expect("task joins").expect("dataset loads");
        assert_eq!(count, 67);
    }
}

/// A local address nothing listens on.
fn closed_local_addr() -> SocketAddr {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    listener.local_addr().expect("local addr")
}

#[tokio::test]
async fn api_key_stays_out_of_errors_and_responses() {
    let addr = closed_local_addr();
    let client = SheetsApiClient::new(
        http_client(),
        &format!("http://{addr}"),
        "sheet",
        "Sheet1!A:C",
        "SUPERSECRETKEY",
    );

    let error = client
        .fetch_records()
        .await
        .expect_err("nothing listens on the port");
    assert!(matches!(error, SheetImportError::Fetch(_)));
    assert!(!error.to_string().contains("SUPERSECRETKEY"));

    let loader = DashboardLoader::new(client, CsvFileFallback::new("./missing-fallback.csv"));
    let response = dashboard_router(Arc::new(loader))
        .oneshot(
            Request::get("/api/v1/dashboard")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    let body = String::from_utf8_lossy(&body);
    assert!(body.contains("sheet request failed"));
    assert!(!body.contains("SUPERSECRETKEY"));
}
