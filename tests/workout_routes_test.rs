// ABOUTME: Integration tests for the workout HTTP routes
// ABOUTME: Drives the full router with oneshot requests and checks envelopes and status codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Workout Log Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use axum::http::StatusCode;
use common::{
    create_test_database, send, test_router, test_router_with_frontend, FailingDatabase,
};
use serde_json::json;
use std::sync::Arc;
use workout_log::database_plugins::memory::MemoryDatabase;

const PUSH_DAY: &str = r#"{"date":"2025-05-26","wtype":"horiz_push_pull","data":"{\"bench\":[8,8,6]}"}"#;

#[tokio::test]
async fn test_add_get_conflict_remove_scenario() -> Result<()> {
    let router = test_router(create_test_database().await?);

    let added = send(&router, "POST", "/addworkout", Some(PUSH_DAY)).await?;
    assert_eq!(added.status, StatusCode::CREATED);
    assert_eq!(added.body, json!({"success": true, "data": "2025-05-26"}));

    let fetched = send(&router, "GET", "/workout/2025-05-26", None).await?;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(
        fetched.body,
        json!({
            "success": true,
            "data": {
                "date": "2025-05-26",
                "wtype": "horiz_push_pull",
                "data": "{\"bench\":[8,8,6]}"
            }
        })
    );

    let conflict = send(&router, "POST", "/addworkout", Some(PUSH_DAY)).await?;
    assert_eq!(conflict.status, StatusCode::CONFLICT);
    assert_eq!(conflict.body["success"], json!(false));
    assert!(conflict.body["error"]
        .as_str()
        .is_some_and(|e| e.contains("already exists")));
    assert!(conflict.body.get("data").is_none());

    let removed = send(&router, "DELETE", "/removeworkout/2025-05-26", None).await?;
    assert_eq!(removed.status, StatusCode::OK);
    assert_eq!(removed.body, json!({"success": true, "data": "2025-05-26"}));

    let gone = send(&router, "GET", "/workout/2025-05-26", None).await?;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
    assert_eq!(gone.body["success"], json!(false));
    Ok(())
}

#[tokio::test]
async fn test_list_returns_all_records() -> Result<()> {
    let router = test_router(MemoryDatabase::new_shared());

    let empty = send(&router, "GET", "/allworkouts", None).await?;
    assert_eq!(empty.status, StatusCode::OK);
    assert_eq!(empty.body, json!({"success": true, "data": []}));

    send(&router, "POST", "/addworkout", Some(PUSH_DAY)).await?;
    send(
        &router,
        "POST",
        "/addworkout",
        Some(r#"{"Date":"2025-05-25","Wtype":"legs","Data":"{}"}"#),
    )
    .await?;

    let listed = send(&router, "GET", "/allworkouts", None).await?;
    assert_eq!(listed.status, StatusCode::OK);
    let records = listed.body["data"].as_array().cloned().unwrap_or_default();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["date"], json!("2025-05-25"));
    assert_eq!(records[1]["date"], json!("2025-05-26"));
    Ok(())
}

#[tokio::test]
async fn test_update_returns_updated_record() -> Result<()> {
    let router = test_router(MemoryDatabase::new_shared());
    send(&router, "POST", "/addworkout", Some(PUSH_DAY)).await?;

    let updated = send(
        &router,
        "PATCH",
        "/updateworkout/2025-05-26",
        Some(r#"{"data":"{\"bench\":[5,5,5]}"}"#),
    )
    .await?;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["data"]["wtype"], json!("horiz_push_pull"));
    assert_eq!(updated.body["data"]["data"], json!("{\"bench\":[5,5,5]}"));
    Ok(())
}

#[tokio::test]
async fn test_update_missing_date_is_server_error() -> Result<()> {
    let router = test_router(MemoryDatabase::new_shared());

    let response = send(
        &router,
        "PATCH",
        "/updateworkout/2025-05-26",
        Some(r#"{"data":"{}"}"#),
    )
    .await?;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["success"], json!(false));
    Ok(())
}

#[tokio::test]
async fn test_remove_missing_date_is_not_found() -> Result<()> {
    let router = test_router(MemoryDatabase::new_shared());

    let response = send(&router, "DELETE", "/removeworkout/2025-05-26", None).await?;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["success"], json!(false));
    Ok(())
}

#[tokio::test]
async fn test_malformed_requests_are_bad_request() -> Result<()> {
    let router = test_router(MemoryDatabase::new_shared());

    let cases = [
        ("POST", "/addworkout", Some("{not json")),
        ("POST", "/addworkout", Some(r#"{"date":"2025-05-26"}"#)),
        (
            "POST",
            "/addworkout",
            Some(r#"{"date":"26/05/2025","wtype":"legs","data":"{}"}"#),
        ),
        ("POST", "/addworkout", Some(r#"{"date":"2025-05-26","wtype":"","data":"{}"}"#)),
        ("PATCH", "/updateworkout/2025-05-26", Some(r#"{"wtype":"legs"}"#)),
        ("GET", "/workout/yesterday", None),
        ("DELETE", "/removeworkout/2025-13-01", None),
    ];

    for (method, uri, body) in cases {
        let response = send(&router, method, uri, body).await?;
        assert_eq!(
            response.status,
            StatusCode::BAD_REQUEST,
            "{method} {uri} {body:?}"
        );
        assert_eq!(response.body["success"], json!(false));
        assert!(response.body["error"].is_string());
    }
    Ok(())
}

#[tokio::test]
async fn test_store_failures_are_server_errors() -> Result<()> {
    let router = test_router(Arc::new(FailingDatabase));

    let cases = [
        ("GET", "/allworkouts", None),
        ("GET", "/workout/2025-05-26", None),
        ("POST", "/addworkout", Some(PUSH_DAY)),
        ("PATCH", "/updateworkout/2025-05-26", Some(r#"{"data":"{}"}"#)),
        ("DELETE", "/removeworkout/2025-05-26", None),
    ];

    for (method, uri, body) in cases {
        let response = send(&router, method, uri, body).await?;
        assert_eq!(
            response.status,
            StatusCode::INTERNAL_SERVER_ERROR,
            "{method} {uri}"
        );
        assert_eq!(response.body["success"], json!(false));
        assert!(response.body.get("data").is_none());
    }
    Ok(())
}

#[tokio::test]
async fn test_health_and_readiness() -> Result<()> {
    let healthy = test_router(MemoryDatabase::new_shared());
    let live = send(&healthy, "GET", "/health", None).await?;
    assert_eq!(live.status, StatusCode::OK);
    assert_eq!(live.body["status"], json!("healthy"));

    let ready = send(&healthy, "GET", "/ready", None).await?;
    assert_eq!(ready.status, StatusCode::OK);
    assert_eq!(ready.body["backend"], json!("Memory"));

    let failing = test_router(Arc::new(FailingDatabase));
    let unavailable = send(&failing, "GET", "/ready", None).await?;
    assert_eq!(unavailable.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(unavailable.body["success"], json!(false));
    assert!(unavailable.body["error"]
        .as_str()
        .is_some_and(|e| e.contains("Failing store is not ready")));
    Ok(())
}

#[tokio::test]
async fn test_every_response_carries_request_id() -> Result<()> {
    let router = test_router(MemoryDatabase::new_shared());

    for (method, uri) in [
        ("GET", "/allworkouts"),
        ("GET", "/workout/2025-05-26"),
        ("GET", "/workout/not-a-date"),
        ("GET", "/health"),
    ] {
        let response = send(&router, method, uri, None).await?;
        assert!(response.request_id.is_some(), "{method} {uri}");
    }
    Ok(())
}

#[tokio::test]
async fn test_static_frontend_is_served_alongside_api() -> Result<()> {
    let dir = tempfile::tempdir()?;
    std::fs::write(
        dir.path().join("index.html"),
        "<!doctype html><title>Workout Log</title>",
    )?;
    std::fs::write(dir.path().join("script.js"), "console.log('lift');")?;
    let router = test_router_with_frontend(MemoryDatabase::new_shared(), dir.path());

    let index = send(&router, "GET", "/", None).await?;
    assert_eq!(index.status, StatusCode::OK);
    assert!(index.request_id.is_some());

    let script = send(&router, "GET", "/frontend/script.js", None).await?;
    assert_eq!(script.status, StatusCode::OK);

    let missing = send(&router, "GET", "/frontend/missing.js", None).await?;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);

    let api = send(&router, "GET", "/allworkouts", None).await?;
    assert_eq!(api.status, StatusCode::OK);
    assert_eq!(api.body, json!({"success": true, "data": []}));
    Ok(())
}
