mod common;

use axum::http::StatusCode;
use common::{delete, get, post, put, test_app, As};
use serde_json::json;
use ucsb_api::entity::{Entity, UcsbOrganization};
use ucsb_api::Repository;

fn zpr() -> UcsbOrganization {
    UcsbOrganization {
        id: None,
        org_code: "ZPR".into(),
        org_translation_short: "ZETA PHI RHO".into(),
        org_translation: "ZETA PHI RHO".into(),
        inactive: false,
    }
}

#[tokio::test]
async fn delete_existing_then_get_is_not_found() {
    let (app, state) = test_app();
    state.organizations.save(zpr().with_id(Some(15))).await.unwrap();

    let (status, body) = delete(&app, "/api/ucsborganization?id=15", As::Admin).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "UCSBOrganization with id 15 deleted"}));

    let (status, body) = get(&app, "/api/ucsborganization?id=15", As::User).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["type"], "EntityNotFoundException");
    assert_eq!(body["message"], "UCSBOrganization with id 15 not found");
}

#[tokio::test]
async fn create_then_get_round_trips_fields() {
    let (app, _) = test_app();
    let (status, created) = post(
        &app,
        "/api/ucsborganization/post?orgCode=SKY&orgTranslationShort=SKYDIVING+CLUB\
&orgTranslation=SKYDIVING+CLUB+AT+UCSB&inactive=false",
        As::Admin,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(created["id"].is_i64());
    assert_eq!(created["orgTranslation"], "SKYDIVING CLUB AT UCSB");
    assert_eq!(created["inactive"], false);

    let uri = format!("/api/ucsborganization?id={}", created["id"]);
    let (status, fetched) = get(&app, &uri, As::User).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn update_flips_inactive_and_text() {
    let (app, state) = test_app();
    state.organizations.save(zpr().with_id(Some(67))).await.unwrap();

    let (status, body) = put(
        &app,
        "/api/ucsborganization?id=67",
        As::Admin,
        json!({
            "orgCode": "OSLI",
            "orgTranslationShort": "STUDENT LIFE",
            "orgTranslation": "OFFICE OF STUDENT LIFE",
            "inactive": true
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "id": 67,
            "orgCode": "OSLI",
            "orgTranslationShort": "STUDENT LIFE",
            "orgTranslation": "OFFICE OF STUDENT LIFE",
            "inactive": true
        })
    );
}

#[tokio::test]
async fn update_missing_id_is_not_found() {
    let (app, _) = test_app();
    let (status, body) = put(
        &app,
        "/api/ucsborganization?id=67",
        As::Admin,
        json!({
            "orgCode": "OSLI",
            "orgTranslationShort": "STUDENT LIFE",
            "orgTranslation": "OFFICE OF STUDENT LIFE",
            "inactive": true
        }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "UCSBOrganization with id 67 not found");
}

#[tokio::test]
async fn non_numeric_id_is_a_client_error() {
    let (app, _) = test_app();
    let (status, body) = get(&app, "/api/ucsborganization?id=seven", As::User).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["type"], "IllegalArgumentException");

    let (status, _) = get(&app, "/api/ucsborganization", As::User).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
