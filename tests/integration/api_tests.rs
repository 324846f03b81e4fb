//! API integration tests
//!
//! Tests the non-resource endpoints with real requests against the router.

use crate::common::{Caller, TestApp, ADMIN_EMAIL, USER_EMAIL};

#[tokio::test]
async fn test_health_endpoint_returns_ok() {
    let app = TestApp::new().await;
    let response = app.get(Caller::Anonymous, "/api/health").await;

    response.assert_ok();

    let json: serde_json::Value = response.json();
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn test_detailed_health_endpoint() {
    let app = TestApp::new().await;
    let response = app.get(Caller::Anonymous, "/api/health/detailed").await;

    response.assert_ok();

    let json: serde_json::Value = response.json();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["components"]["database"]["status"], "healthy");
}

#[tokio::test]
async fn test_detailed_health_reports_closed_database() {
    let app = TestApp::new().await;
    app.state.db.close().await;

    let response = app.get(Caller::Anonymous, "/api/health/detailed").await;
    response.assert_status(axum::http::StatusCode::SERVICE_UNAVAILABLE);

    let json: serde_json::Value = response.json();
    assert_eq!(json["components"]["database"]["status"], "unhealthy");
}

#[tokio::test]
async fn test_system_info_is_public() {
    let app = TestApp::new().await;
    let response = app.get(Caller::Anonymous, "/api/systemInfo").await;

    response.assert_ok();
    let json: serde_json::Value = response.json();
    assert_eq!(json["showSwaggerUILink"], false);
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_current_user_for_regular_user() {
    let app = TestApp::new().await;
    let response = app.get(Caller::User, "/api/currentUser").await;

    response.assert_ok();
    let json: serde_json::Value = response.json();
    assert_eq!(json["user"]["email"], USER_EMAIL);
    assert_eq!(json["roles"], serde_json::json!([{"authority": "ROLE_USER"}]));
}

#[tokio::test]
async fn test_current_user_for_admin() {
    let app = TestApp::new().await;
    let response = app.get(Caller::Admin, "/api/currentUser").await;

    response.assert_ok();
    let json: serde_json::Value = response.json();
    assert_eq!(json["user"]["email"], ADMIN_EMAIL);
    assert_eq!(
        json["roles"],
        serde_json::json!([{"authority": "ROLE_USER"}, {"authority": "ROLE_ADMIN"}])
    );
}

#[tokio::test]
async fn test_current_user_requires_login() {
    let app = TestApp::new().await;
    app.get(Caller::Anonymous, "/api/currentUser")
        .await
        .assert_forbidden()
        .assert_error("AccessDeniedException", "Access denied: Authentication required");
}

#[tokio::test]
async fn test_unknown_route_returns_json_404() {
    let app = TestApp::new().await;
    app.get(Caller::User, "/api/nope")
        .await
        .assert_not_found()
        .assert_error("NotFoundException", "Not found: /api/nope");
}
