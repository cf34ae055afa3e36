use crate::common::{brochure_with_links, grid_page, mount_page, product_page};
use brochure_scraper::config::Config;
use brochure_scraper::crawler::{discover_links, run, ProductRecord, RunOutcome};
use brochure_scraper::ScrapeError;
use tempfile::TempDir;
use wiremock::MockServer;

fn read_csv(path: &std::path::Path) -> Vec<ProductRecord> {
    let mut reader = csv::Reader::from_path(path).expect("Failed to open output");
    reader
        .deserialize()
        .collect::<Result<_, _>>()
        .expect("Failed to read records")
}

#[tokio::test]
async fn test_full_run_writes_spreadsheet() {
    let server = MockServer::start().await;
    let base_url = server.uri();

    mount_page(&server, "/p/single", product_page("SKU123", "19.99", "лв.")).await;
    mount_page(&server, "/promo", grid_page(&["/p/g1", "/p/g2"])).await;
    mount_page(&server, "/p/g1", product_page("G-1", "5.00", "лв.")).await;
    mount_page(&server, "/p/g2", product_page("G-2", "6.00", "лв.")).await;

    let pdf = brochure_with_links(&[
        format!("{}/promo", base_url),
        format!("{}/p/single", base_url),
    ]);
    let out_dir = TempDir::new().unwrap();
    let output = out_dir.path().join("prices.csv");

    let config = Config::new(pdf.path(), &output);
    let outcome = run(config).await.expect("Run failed");

    let RunOutcome::Saved { path, report } = outcome else {
        panic!("expected records to be saved");
    };
    assert_eq!(path, output);
    assert_eq!(report.records.len(), 3);
    assert!(report.finished_at.is_some());

    // Links are processed in sorted order: /p/single before /promo
    assert_eq!(
        read_csv(&path),
        vec![
            ProductRecord::new("SKU123", "19.99 лв."),
            ProductRecord::new("G-1", "5.00 лв."),
            ProductRecord::new("G-2", "6.00 лв."),
        ]
    );
}

#[tokio::test]
async fn test_run_keeps_discovery_order_when_unsorted() {
    let server = MockServer::start().await;
    let base_url = server.uri();

    mount_page(&server, "/z", product_page("Z", "1.00", "лв.")).await;
    mount_page(&server, "/a", product_page("A", "2.00", "лв.")).await;

    let pdf = brochure_with_links(&[format!("{}/z", base_url), format!("{}/a", base_url)]);
    let out_dir = TempDir::new().unwrap();
    let output = out_dir.path().join("prices.csv");

    let mut config = Config::new(pdf.path(), &output);
    config.fetch.sort_links = false;

    let outcome = run(config).await.expect("Run failed");
    let RunOutcome::Saved { path, .. } = outcome else {
        panic!("expected records to be saved");
    };

    let codes: Vec<String> = read_csv(&path).into_iter().map(|r| r.invcode).collect();
    assert_eq!(codes, vec!["Z", "A"]);
}

#[tokio::test]
async fn test_run_does_not_overwrite_existing_output() {
    let server = MockServer::start().await;
    mount_page(&server, "/p/1", product_page("ONE", "1.00", "лв.")).await;

    let pdf = brochure_with_links(&[format!("{}/p/1", server.uri())]);
    let out_dir = TempDir::new().unwrap();
    let output = out_dir.path().join("prices.xlsx");
    std::fs::write(&output, b"previous run").unwrap();

    let outcome = run(Config::new(pdf.path(), &output))
        .await
        .expect("Run failed");

    let RunOutcome::Saved { path, .. } = outcome else {
        panic!("expected records to be saved");
    };
    assert_eq!(path, out_dir.path().join("prices_1.xlsx"));
    assert_eq!(std::fs::read(&output).unwrap(), b"previous run");
}

#[tokio::test]
async fn test_brochure_without_links_extracts_nothing() {
    let pdf = brochure_with_links(&[]);
    let out_dir = TempDir::new().unwrap();
    let output = out_dir.path().join("prices.xlsx");

    let config = Config::new(pdf.path(), &output);
    assert!(discover_links(&config).unwrap().is_empty());

    let outcome = run(config).await.expect("Run failed");

    assert!(matches!(outcome, RunOutcome::NoProducts(_)));
    assert_eq!(outcome.report().links_discovered, 0);
    assert!(!output.exists());
}

#[tokio::test]
async fn test_all_pages_failing_extracts_nothing() {
    let server = MockServer::start().await;
    // No mocks mounted: every request gets a 404
    let pdf = brochure_with_links(&[format!("{}/missing", server.uri())]);
    let out_dir = TempDir::new().unwrap();
    let output = out_dir.path().join("prices.xlsx");

    let outcome = run(Config::new(pdf.path(), &output))
        .await
        .expect("Run failed");

    let RunOutcome::NoProducts(report) = outcome else {
        panic!("expected no products");
    };
    assert_eq!(report.page_failures.len(), 1);
    assert!(!output.exists());
}

#[tokio::test]
async fn test_missing_brochure_aborts_run() {
    let out_dir = TempDir::new().unwrap();
    let config = Config::new(
        out_dir.path().join("no-such-brochure.pdf"),
        out_dir.path().join("prices.xlsx"),
    );

    let result = run(config).await;
    assert!(matches!(result, Err(ScrapeError::Pdf { .. })));
}
