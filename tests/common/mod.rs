#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;
use ucsb_api::extractors::caller::{ROLES_HEADER, USER_HEADER};
use ucsb_api::{app, AppState, Settings};

/// Who is making the request.
#[derive(Clone, Copy, Debug)]
pub enum As {
    Anonymous,
    User,
    Admin,
}

pub fn test_app() -> (Router, AppState) {
    let state = AppState::in_memory();
    let router = app(state.clone(), &Settings::default());
    (router, state)
}

pub async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    caller: As,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    builder = match caller {
        As::Anonymous => builder,
        As::User => builder
            .header(USER_HEADER, "cgaucho@ucsb.edu")
            .header(ROLES_HEADER, "ROLE_USER"),
        As::Admin => builder
            .header(USER_HEADER, "admin@ucsb.edu")
            .header(ROLES_HEADER, "ROLE_USER,ROLE_ADMIN"),
    };
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

pub async fn get(router: &Router, uri: &str, caller: As) -> (StatusCode, Value) {
    send(router, Method::GET, uri, caller, None).await
}

pub async fn post(router: &Router, uri: &str, caller: As) -> (StatusCode, Value) {
    send(router, Method::POST, uri, caller, None).await
}

pub async fn put(router: &Router, uri: &str, caller: As, body: Value) -> (StatusCode, Value) {
    send(router, Method::PUT, uri, caller, Some(body)).await
}

pub async fn delete(router: &Router, uri: &str, caller: As) -> (StatusCode, Value) {
    send(router, Method::DELETE, uri, caller, None).await
}
