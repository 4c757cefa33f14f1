use crate::common::context_for;
use algorhythm_client::application::pages::{Dashboard, NewsPage};
use algorhythm_client::application::state::AppState;
use mockito::{Matcher, Server, ServerGuard};

async fn backend() -> ServerGuard {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/live/NIFTY")
        .with_status(200)
        .with_body(r#"{"symbol":"NIFTY","price":24567.5,"change":-4.2,"note":"simulated"}"#)
        .create_async()
        .await;
    server
        .mock("GET", "/api/market-status")
        .with_status(200)
        .with_body(r#"{"is_open":true,"status":"OPEN"}"#)
        .create_async()
        .await;
    server
        .mock("GET", "/api/news")
        .with_status(200)
        .with_body(r#"[{"title":"Bare array headline"}]"#)
        .create_async()
        .await;
    server
}

#[tokio::test]
async fn test_dashboard_over_http() {
    let mut server = backend().await;
    let sentiment = server
        .mock("GET", "/api/news/market")
        .match_header("authorization", "Bearer jwt")
        .with_status(200)
        .with_body(r#"{"overall_sentiment":"neutral","sentiment_score":0.01}"#)
        .expect(1)
        .create_async()
        .await;
    let optimize = server
        .mock("GET", "/api/optimize")
        .with_status(200)
        .with_body(
            r#"{"strategy_name":"Hedge","alpha":"4.2","weights":[0.5,0.5],"reasoning":"Calm markets","suggestions":[]}"#,
        )
        .create_async()
        .await;

    let (ctx, _) = context_for(&server.url(), Some("jwt"));
    let dashboard = Dashboard::open(&ctx, AppState::default())
        .await
        .ready()
        .unwrap();

    let views = dashboard.views();
    assert!(views.quotes.get().await.unwrap().get("NIFTY").unwrap().is_simulated());
    assert_eq!(
        views.headlines.get().await.unwrap().articles[0].title,
        "Bare array headline"
    );

    let result = dashboard.optimize().await.unwrap();
    assert_eq!(result.alpha, 4.2);
    assert_eq!(
        views.reasoning.get().await.as_deref(),
        Some("\"Calm markets\"")
    );

    dashboard.close();
    sentiment.assert_async().await;
    optimize.assert_async().await;
}

#[tokio::test]
async fn test_news_page_requests_limit() {
    let mut server = Server::new_async().await;
    let feed = server
        .mock("GET", "/api/news/feed")
        .match_query(Matcher::UrlEncoded("limit".into(), "50".into()))
        .match_header("authorization", "Bearer jwt")
        .with_status(200)
        .with_body(r#"{"news":[{"title":"One"},{"title":"Two"}],"total_count":2}"#)
        .create_async()
        .await;
    server
        .mock("GET", "/api/news/market")
        .with_status(503)
        .create_async()
        .await;

    let (ctx, _) = context_for(&server.url(), Some("jwt"));
    let page = NewsPage::open(&ctx).await.ready().unwrap();

    assert_eq!(page.articles().await.len(), 2);
    assert_eq!(page.sentiment().await, None);
    page.close();
    feed.assert_async().await;
}
