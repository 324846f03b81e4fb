//! Shared CRUD contract tests
//!
//! Run the same lifecycle against every numerically keyed resource.

use rstest::rstest;
use serde_json::Value;

use crate::common::{
    ArticleFixtures, Caller, HelpRequestFixtures, MenuItemFixtures, MenuItemReviewFixtures,
    RecommendationRequestFixtures, TestApp,
};

/// One resource under test
#[derive(Clone, Copy)]
struct ResourceCase {
    base: &'static str,
    type_name: &'static str,
    params: fn() -> &'static str,
    expected: fn() -> Value,
    updated: fn() -> Value,
}

impl ResourceCase {
    fn create_uri(&self) -> String {
        format!("{}/post?{}", self.base, (self.params)())
    }

    fn key_uri(&self, id: i64) -> String {
        format!("{}?id={}", self.base, id)
    }

    fn all_uri(&self) -> String {
        format!("{}/all", self.base)
    }
}

fn help_requests() -> ResourceCase {
    ResourceCase {
        base: HelpRequestFixtures::BASE,
        type_name: "HelpRequest",
        params: HelpRequestFixtures::params,
        expected: HelpRequestFixtures::created,
        updated: HelpRequestFixtures::updated,
    }
}

fn menu_item_reviews() -> ResourceCase {
    ResourceCase {
        base: MenuItemReviewFixtures::BASE,
        type_name: "MenuItemReview",
        params: MenuItemReviewFixtures::params,
        expected: MenuItemReviewFixtures::created,
        updated: MenuItemReviewFixtures::updated,
    }
}

fn menu_items() -> ResourceCase {
    ResourceCase {
        base: MenuItemFixtures::BASE,
        type_name: "UCSBDiningCommonMenuItem",
        params: MenuItemFixtures::params,
        expected: MenuItemFixtures::created,
        updated: MenuItemFixtures::updated,
    }
}

fn articles() -> ResourceCase {
    ResourceCase {
        base: ArticleFixtures::BASE,
        type_name: "Articles",
        params: ArticleFixtures::params,
        expected: ArticleFixtures::created,
        updated: ArticleFixtures::updated,
    }
}

fn recommendation_requests() -> ResourceCase {
    ResourceCase {
        base: RecommendationRequestFixtures::BASE,
        type_name: "RecommendationRequest",
        params: RecommendationRequestFixtures::params,
        expected: RecommendationRequestFixtures::created,
        updated: RecommendationRequestFixtures::updated,
    }
}

/// Drop the generated key so records can be compared with fixtures
fn without_id(mut record: Value) -> Value {
    if let Some(obj) = record.as_object_mut() {
        obj.remove("id");
    }
    record
}

#[rstest]
#[case::help_requests(help_requests())]
#[case::menu_item_reviews(menu_item_reviews())]
#[case::menu_items(menu_items())]
#[case::articles(articles())]
#[case::recommendation_requests(recommendation_requests())]
#[tokio::test]
async fn test_list_empty_store(#[case] resource: ResourceCase) {
    let app = TestApp::new().await;
    let response = app.get(Caller::User, &resource.all_uri()).await;

    response.assert_ok();
    assert_eq!(response.text(), "[]");
}

#[rstest]
#[case::help_requests(help_requests())]
#[case::menu_item_reviews(menu_item_reviews())]
#[case::menu_items(menu_items())]
#[case::articles(articles())]
#[case::recommendation_requests(recommendation_requests())]
#[tokio::test]
async fn test_create_assigns_id_and_is_readable(#[case] resource: ResourceCase) {
    let app = TestApp::new().await;

    let created: Value = app
        .post(Caller::Admin, &resource.create_uri())
        .await
        .assert_ok()
        .json();
    let id = created["id"].as_i64().expect("created record has an id");
    assert_eq!(without_id(created.clone()), (resource.expected)());

    let fetched: Value = app
        .get(Caller::User, &resource.key_uri(id))
        .await
        .assert_ok()
        .json();
    assert_eq!(fetched, created);

    let all: Vec<Value> = app.get(Caller::User, &resource.all_uri()).await.json();
    assert_eq!(all, vec![created]);
}

#[rstest]
#[case::help_requests(help_requests())]
#[case::menu_item_reviews(menu_item_reviews())]
#[case::menu_items(menu_items())]
#[case::articles(articles())]
#[case::recommendation_requests(recommendation_requests())]
#[tokio::test]
async fn test_create_from_form_body(#[case] resource: ResourceCase) {
    let app = TestApp::new().await;
    let uri = format!("{}/post", resource.base);

    let from_form: Value = app
        .post_form(Caller::Admin, &uri, (resource.params)())
        .await
        .assert_ok()
        .json();
    let from_query: Value = app
        .post(Caller::Admin, &resource.create_uri())
        .await
        .assert_ok()
        .json();

    assert_ne!(from_form["id"], from_query["id"]);
    assert_eq!(without_id(from_form), (resource.expected)());
    assert_eq!(without_id(from_query), (resource.expected)());
}

#[rstest]
#[case::help_requests(help_requests())]
#[case::menu_item_reviews(menu_item_reviews())]
#[case::menu_items(menu_items())]
#[case::articles(articles())]
#[case::recommendation_requests(recommendation_requests())]
#[tokio::test]
async fn test_update_overwrites_every_field(#[case] resource: ResourceCase) {
    let app = TestApp::new().await;
    app.post(Caller::Admin, &resource.create_uri())
        .await
        .assert_ok();

    let updated: Value = app
        .put_json(Caller::Admin, &resource.key_uri(1), (resource.updated)())
        .await
        .assert_ok()
        .json();
    assert_eq!(updated["id"], 1);
    assert_eq!(without_id(updated), (resource.updated)());

    let fetched: Value = app.get(Caller::User, &resource.key_uri(1)).await.json();
    assert_eq!(without_id(fetched), (resource.updated)());
}

#[rstest]
#[case::help_requests(help_requests())]
#[case::menu_item_reviews(menu_item_reviews())]
#[case::menu_items(menu_items())]
#[case::articles(articles())]
#[case::recommendation_requests(recommendation_requests())]
#[tokio::test]
async fn test_update_ignores_id_in_body(#[case] resource: ResourceCase) {
    let app = TestApp::new().await;
    app.post(Caller::Admin, &resource.create_uri())
        .await
        .assert_ok();

    let mut body = (resource.updated)();
    body["id"] = serde_json::json!(42);

    let updated: Value = app
        .put_json(Caller::Admin, &resource.key_uri(1), body)
        .await
        .assert_ok()
        .json();
    assert_eq!(updated["id"], 1);
    app.get(Caller::User, &resource.key_uri(42))
        .await
        .assert_not_found();
}

#[rstest]
#[case::help_requests(help_requests())]
#[case::menu_item_reviews(menu_item_reviews())]
#[case::menu_items(menu_items())]
#[case::articles(articles())]
#[case::recommendation_requests(recommendation_requests())]
#[tokio::test]
async fn test_delete_then_get_is_not_found(#[case] resource: ResourceCase) {
    let app = TestApp::new().await;
    app.post(Caller::Admin, &resource.create_uri())
        .await
        .assert_ok();

    let deleted: Value = app
        .delete(Caller::Admin, &resource.key_uri(1))
        .await
        .assert_ok()
        .json();
    assert_eq!(
        deleted["message"],
        format!("{} with id 1 deleted", resource.type_name)
    );

    app.get(Caller::User, &resource.key_uri(1))
        .await
        .assert_not_found()
        .assert_error(
            "NotFoundException",
            &format!("{} with id 1 not found", resource.type_name),
        );
    app.delete(Caller::Admin, &resource.key_uri(1))
        .await
        .assert_not_found();
}

#[rstest]
#[case::help_requests(help_requests())]
#[case::menu_item_reviews(menu_item_reviews())]
#[case::menu_items(menu_items())]
#[case::articles(articles())]
#[case::recommendation_requests(recommendation_requests())]
#[tokio::test]
async fn test_missing_key_is_not_found(#[case] resource: ResourceCase) {
    let app = TestApp::new().await;
    let message = format!("{} with id 7 not found", resource.type_name);

    app.get(Caller::User, &resource.key_uri(7))
        .await
        .assert_not_found()
        .assert_error("NotFoundException", &message);
    app.put_json(Caller::Admin, &resource.key_uri(7), (resource.updated)())
        .await
        .assert_not_found()
        .assert_error("NotFoundException", &message);
    app.delete(Caller::Admin, &resource.key_uri(7))
        .await
        .assert_not_found()
        .assert_error("NotFoundException", &message);
}

#[rstest]
#[case::help_requests(help_requests())]
#[case::menu_items(menu_items())]
#[case::articles(articles())]
#[tokio::test]
async fn test_incomplete_update_body_is_bad_request(#[case] resource: ResourceCase) {
    let app = TestApp::new().await;
    app.post(Caller::Admin, &resource.create_uri())
        .await
        .assert_ok();

    let mut body = (resource.updated)();
    let first_field = body
        .as_object()
        .and_then(|o| o.keys().next().cloned())
        .unwrap();
    body.as_object_mut().unwrap().remove(&first_field);

    let response = app
        .put_json(Caller::Admin, &resource.key_uri(1), body)
        .await;
    response.assert_bad_request();
    let error: Value = response.json();
    assert_eq!(error["type"], "BadRequestException");
}

#[rstest]
#[case("/api/helprequest?id=abc")]
#[case("/api/menuitemreviews")]
#[case("/api/articles?identifier=1")]
#[tokio::test]
async fn test_malformed_key_is_bad_request(#[case] uri: &str) {
    let app = TestApp::new().await;
    app.get(Caller::User, uri).await.assert_bad_request();
}
