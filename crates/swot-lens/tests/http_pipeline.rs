//! End-to-end pipeline tests against a local HTTP server.

use swot_lens::{AnalysisError, Analyzer, Category, RankedToken};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const COMPANY_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>Acme Corp</title>
  <style>body { font-family: sans-serif; }</style>
  <script>window.analytics = { risk: "none", growth: 0 };</script>
</head>
<body>
  <h1>Acme: the leading innovative widget maker</h1>
  <p>Our innovative products deliver the best quality.</p>
  <p>New markets mean growth, and growth means expansion.</p>
  <p>Every competitor is a risk; supply is a challenge we must improve.</p>
</body>
</html>"#;

async fn serve(status: u16, body: &str) -> MockServer {
    serve_as(status, body, "text/html; charset=utf-8").await
}

async fn serve_as(status: u16, body: &str, content_type: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(status).set_body_raw(body, content_type))
        .mount(&server)
        .await;
    server
}

fn words(tokens: &[RankedToken]) -> Vec<&str> {
    tokens.iter().map(|t| t.word.as_str()).collect()
}

#[tokio::test]
async fn test_company_page() {
    let server = serve(200, COMPANY_PAGE).await;
    let analyzer = Analyzer::http("swot-lens-test");

    let analysis = analyzer.analyze(&format!("{}/", server.uri())).await.unwrap();

    assert_eq!(analysis.ranked.len(), 10);
    assert!(analysis.ranked.windows(2).all(|w| w[0].count >= w[1].count));
    // Ties keep first appearance: the title's "acme" comes first.
    assert_eq!(
        &analysis.ranked[..3],
        &[
            RankedToken::new("acme", 2),
            RankedToken::new("innovative", 2),
            RankedToken::new("growth", 2),
        ]
    );

    // Only the first ten tokens are categorized, so later keywords
    // ("quality", "risk", "challenge", ...) fall outside the ranking.
    assert_eq!(
        words(analysis.swot.get(Category::Strengths)),
        vec!["innovative", "leading", "best"]
    );
    assert_eq!(words(analysis.swot.get(Category::Opportunities)), vec!["growth"]);
    assert!(analysis.swot.get(Category::Weaknesses).is_empty());
    assert!(analysis.swot.get(Category::Threats).is_empty());
}

#[tokio::test]
async fn test_mislabeled_html_is_still_extracted() {
    let server = serve_as(200, COMPANY_PAGE, "text/plain").await;
    let analyzer = Analyzer::http("swot-lens-test");

    let analysis = analyzer.analyze(&format!("{}/", server.uri())).await.unwrap();

    assert!(analysis
        .ranked
        .iter()
        .all(|t| !["html", "body", "p", "script", "style"].contains(&t.word.as_str())));
    assert_eq!(
        words(&analysis.ranked[..3]),
        vec!["acme", "innovative", "growth"]
    );
}

#[tokio::test]
async fn test_http_error_is_reported() {
    let server = serve(404, "<h1>Not Found</h1>").await;
    let analyzer = Analyzer::http("swot-lens-test");

    let err = analyzer
        .analyze(&format!("{}/", server.uri()))
        .await
        .unwrap_err();

    match err {
        AnalysisError::Fetch(e) => {
            assert_eq!(e.status(), Some(404));
            assert!(e.to_string().contains("404"));
        }
        other => panic!("expected fetch error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_blank_page_is_empty_content() {
    let server = serve(200, "<html><body>   </body></html>").await;
    let analyzer = Analyzer::http("swot-lens-test");

    let err = analyzer
        .analyze(&format!("{}/", server.uri()))
        .await
        .unwrap_err();

    assert!(matches!(err, AnalysisError::EmptyContent { .. }));
    assert!(err.to_string().starts_with("unable to retrieve content"));
}

#[tokio::test]
async fn test_repeated_runs_agree() {
    let server = serve(200, COMPANY_PAGE).await;
    let analyzer = Analyzer::http("swot-lens-test");
    let url = format!("{}/", server.uri());

    let first = analyzer.analyze(&url).await.unwrap();
    let second = analyzer.analyze(&url).await.unwrap();

    assert_eq!(first.swot, second.swot);
    assert_eq!(first.ranked, second.ranked);
}
