use crate::common::{DEAD_BACKEND, context_for};
use algorhythm_client::application::pages::demo::{DEMO_NETWORK_ERROR, DEMO_REJECTED};
use algorhythm_client::application::pages::login::LOGIN_NETWORK_ERROR;
use algorhythm_client::application::pages::{DemoPage, LoginPage, Navigation, Route};
use algorhythm_client::session::store::TokenStore;
use mockito::Matcher;

#[tokio::test]
async fn test_login_posts_form_and_stores_token() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/auth/login")
        .match_header("content-type", "application/x-www-form-urlencoded")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("email".into(), "user@example.com".into()),
            Matcher::UrlEncoded("password".into(), "s3cret".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"access_token":"jwt-123","token_type":"bearer"}"#)
        .create_async()
        .await;

    let (ctx, store) = context_for(&server.url(), None);
    let mut page = LoginPage::new(&ctx);

    assert_eq!(
        page.submit("user@example.com", "s3cret").await,
        Navigation::GoTo(Route::Dashboard)
    );
    assert_eq!(store.token().as_deref(), Some("jwt-123"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_login_shows_fastapi_detail() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/api/auth/login")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"detail":"Incorrect email or password"}"#)
        .create_async()
        .await;

    let (ctx, store) = context_for(&server.url(), None);
    let mut page = LoginPage::new(&ctx);

    assert_eq!(page.submit("user@example.com", "wrong").await, Navigation::Stay);
    assert_eq!(
        page.form().error.as_deref(),
        Some("Incorrect email or password")
    );
    assert_eq!(store.token(), None);
}

#[tokio::test]
async fn test_login_unreachable_backend() {
    let (ctx, store) = context_for(DEAD_BACKEND, None);
    let mut page = LoginPage::new(&ctx);

    assert_eq!(page.submit("user@example.com", "pw").await, Navigation::Stay);
    assert_eq!(page.form().error.as_deref(), Some(LOGIN_NETWORK_ERROR));
    assert_eq!(store.token(), None);
}

#[tokio::test]
async fn test_demo_launch_messages() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/api/auth/login")
        .match_body(Matcher::UrlEncoded("email".into(), "mock@example.com".into()))
        .with_status(500)
        .create_async()
        .await;

    let (ctx, _) = context_for(&server.url(), None);
    let mut page = DemoPage::new(&ctx);
    page.launch().await;
    assert_eq!(page.form().error.as_deref(), Some(DEMO_REJECTED));

    let (ctx, _) = context_for(DEAD_BACKEND, None);
    let mut page = DemoPage::new(&ctx);
    page.launch().await;
    assert_eq!(page.form().error.as_deref(), Some(DEMO_NETWORK_ERROR));
}
