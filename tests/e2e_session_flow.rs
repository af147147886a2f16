//! End-to-end: sign in, pass the plan gate, sign out, get redirected

use std::sync::Arc;

use gabarita_api::{ApiClient, ApiConfig, RequestContext};
use gabarita_guard::{GuardView, PlanGuard, PlanTier};
use gabarita_session::{FileTokenStore, Session, SessionToken};
use mockito::Matcher;
use serde_json::json;
use tokio_util::sync::CancellationToken;

fn client_for(server: &mockito::ServerGuard) -> ApiClient {
    ApiClient::new(ApiConfig::with_base_url(server.url())).unwrap()
}

#[tokio::test]
async fn test_login_guard_logout_cycle() {
    let mut server = mockito::Server::new_async().await;
    let login = server
        .mock("POST", "/api/auth/login")
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_body(r#"{"success":true,"data":{"token":"tok-e2e","usuario":{"nome":"Ana"}}}"#)
        .create_async()
        .await;
    let plan = server
        .mock("GET", "/api/usuario/plano")
        .match_header("authorization", "Bearer tok-e2e")
        .with_status(200)
        .with_body(r#"{"plano":"premium"}"#)
        .expect(1)
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    let session = Session::new(Arc::new(FileTokenStore::new(&path)));
    let ctx = RequestContext::new(session);
    let client = client_for(&server);

    client
        .auth()
        .login(&ctx, "ana@example.com", "s3cret")
        .await
        .unwrap();
    login.assert_async().await;

    let mut guard = PlanGuard::new(&client, PlanTier::Basic);
    assert_eq!(
        guard.protect(&ctx, "dashboard").await,
        GuardView::Content("dashboard")
    );

    client.auth().logout(&ctx).unwrap();

    // A fresh store on the same file sees the logout too
    let reopened = Session::new(Arc::new(FileTokenStore::new(&path)));
    assert!(!reopened.is_authenticated());

    let mut guard = PlanGuard::new(&client, PlanTier::Basic);
    assert_eq!(
        guard.protect(&ctx, "dashboard").await,
        GuardView::Redirect("/login".to_string())
    );

    // Only the first guard reached the backend
    plan.assert_async().await;
}

#[tokio::test]
async fn test_logged_out_matches_never_logged_in() {
    let mut server = mockito::Server::new_async().await;
    let _login = server
        .mock("POST", "/api/auth/login")
        .with_status(200)
        .with_body(r#"{"success":true,"token":"tok-top-level"}"#)
        .create_async()
        .await;
    let plan = server
        .mock("GET", "/api/usuario/plano")
        .expect(0)
        .create_async()
        .await;

    let client = client_for(&server);

    let fresh = RequestContext::new(Session::in_memory());
    let used = RequestContext::new(Session::in_memory());
    client.auth().login(&used, "a@b.c", "x").await.unwrap();
    assert!(used.session().is_authenticated());
    client.auth().logout(&used).unwrap();

    for ctx in [&fresh, &used] {
        let mut guard = PlanGuard::new(&client, PlanTier::Free);
        assert_eq!(
            guard.protect(ctx, ()).await,
            GuardView::Redirect("/login".to_string())
        );
    }

    plan.assert_async().await;
}

#[tokio::test]
async fn test_page_data_loads_after_gate() {
    let mut server = mockito::Server::new_async().await;
    let _plan = server
        .mock("GET", "/api/usuario/plano")
        .with_status(200)
        .with_body(r#"{"plano":"basico"}"#)
        .create_async()
        .await;
    let stats = server
        .mock("GET", "/api/dashboard/estatisticas")
        .match_header("authorization", "Bearer tok")
        .with_status(200)
        .with_body(json!({ "success": true, "data": { "acertos": 7 } }).to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    let session = Session::in_memory();
    session.sign_in(SessionToken::new("tok").unwrap()).unwrap();
    let ctx = RequestContext::with_cancel(session, CancellationToken::new());

    let mut guard = PlanGuard::new(&client, PlanTier::Basic);
    match guard.protect(&ctx, ()).await {
        GuardView::Content(()) => {
            let body = client.dashboard().stats(&ctx).await.unwrap();
            assert_eq!(body["data"]["acertos"], 7);
        }
        other => panic!("basico user should reach the dashboard, got {:?}", other),
    }

    stats.assert_async().await;
}
