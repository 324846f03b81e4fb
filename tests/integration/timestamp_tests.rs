//! Local date-time inputs
//!
//! Browser `datetime-local` fields submit minute precision; every timestamp
//! accepts that form and is echoed back with seconds.

use serde_json::{json, Value};

use crate::common::{
    ArticleFixtures, Caller, HelpRequestFixtures, RecommendationRequestFixtures, TestApp,
};

#[tokio::test]
async fn test_create_accepts_minute_precision_query() {
    let app = TestApp::new().await;
    let uri = format!(
        "{}/post?title=Pasta&url=https%3A%2F%2Fexample.com&explanation=Tasty\
         &email=cgaucho%40ucsb.edu&dateAdded=2022-02-02T00:00",
        ArticleFixtures::BASE
    );

    let created: Value = app.post(Caller::Admin, &uri).await.assert_ok().json();
    assert_eq!(created["dateAdded"], "2022-02-02T00:00:00");
}

#[tokio::test]
async fn test_create_accepts_minute_precision_form() {
    let app = TestApp::new().await;
    let uri = format!("{}/post", RecommendationRequestFixtures::BASE);
    let body = "requesterEmail=cgaucho%40ucsb.edu&professorEmail=phtcon%40ucsb.edu\
                &explanation=PhD&dateRequested=2022-04-20T09:15&dateNeeded=2022-05-01T17:30\
                &done=false";

    let created: Value = app
        .post_form(Caller::Admin, &uri, body)
        .await
        .assert_ok()
        .json();
    assert_eq!(created["dateRequested"], "2022-04-20T09:15:00");
    assert_eq!(created["dateNeeded"], "2022-05-01T17:30:00");
}

#[tokio::test]
async fn test_update_accepts_minute_precision_body() {
    let app = TestApp::new().await;
    let create = format!("{}/post?{}", HelpRequestFixtures::BASE, HelpRequestFixtures::params());
    app.post(Caller::Admin, &create).await.assert_ok();

    let body = json!({
        "requesterEmail": "student2@ucsb.edu",
        "teamId": "team12",
        "tableOrBreakoutRoom": "Breakout Room A",
        "requestTime": "2023-01-01T12:00",
        "explanation": "Having trouble with code implementation.",
        "solved": true
    });
    let key = format!("{}?id=1", HelpRequestFixtures::BASE);

    let updated: Value = app
        .put_json(Caller::Admin, &key, body)
        .await
        .assert_ok()
        .json();
    assert_eq!(updated["requestTime"], "2023-01-01T12:00:00");

    let fetched: Value = app.get(Caller::User, &key).await.json();
    assert_eq!(fetched["requestTime"], "2023-01-01T12:00:00");
}

#[tokio::test]
async fn test_date_without_time_is_bad_request() {
    let app = TestApp::new().await;
    let uri = format!(
        "{}/post?title=Pasta&url=u&explanation=e&email=cgaucho%40ucsb.edu&dateAdded=2022-02-02",
        ArticleFixtures::BASE
    );

    let response = app.post(Caller::Admin, &uri).await;
    response.assert_bad_request();
    let error: Value = response.json();
    assert_eq!(error["type"], "BadRequestException");
}
