mod common;

use anyhow::Result;
use axum::http::{Method, StatusCode};
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn create_returns_stored_note_with_defaults() -> Result<()> {
    let app = common::test_app();
    let token = common::bearer(Uuid::new_v4());

    let (status, note) = common::send(
        &app,
        Method::POST,
        "/api/notes/addnote",
        Some(&token),
        Some(json!({ "title": "Groceries", "description": "Buy milk" })),
    )
    .await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(note["title"], "Groceries");
    assert_eq!(note["description"], "Buy milk");
    assert_eq!(note["tag"], "General");
    assert!(note["id"].as_str().is_some());
    assert!(note["created_at"].as_str().is_some());
    Ok(())
}

#[tokio::test]
async fn create_honors_supplied_tag() -> Result<()> {
    let app = common::test_app();
    let token = common::bearer(Uuid::new_v4());

    let (status, note) = common::send(
        &app,
        Method::POST,
        "/api/notes/addnote",
        Some(&token),
        Some(json!({ "title": "Standup", "description": "Daily sync", "tag": "Work" })),
    )
    .await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(note["tag"], "Work");
    Ok(())
}

#[tokio::test]
async fn create_rejects_short_fields_listing_each_one() -> Result<()> {
    let app = common::test_app();
    let token = common::bearer(Uuid::new_v4());

    // title of 2 chars and description of 4 chars both fail
    let (status, body) = common::send(
        &app,
        Method::POST,
        "/api/notes/addnote",
        Some(&token),
        Some(json!({ "title": "ab", "description": "milk" })),
    )
    .await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let errors = body["errors"].as_array().expect("errors array");
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0]["field"], "title");
    assert_eq!(errors[1]["field"], "description");
    Ok(())
}

#[tokio::test]
async fn create_accepts_exact_minimum_lengths() -> Result<()> {
    let app = common::test_app();
    let token = common::bearer(Uuid::new_v4());

    let (status, _) = common::send(
        &app,
        Method::POST,
        "/api/notes/addnote",
        Some(&token),
        Some(json!({ "title": "abc", "description": "12345" })),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn list_returns_created_notes() -> Result<()> {
    let app = common::test_app();
    let token = common::bearer(Uuid::new_v4());

    for i in 0..3 {
        let (status, _) = common::send(
            &app,
            Method::POST,
            "/api/notes/addnote",
            Some(&token),
            Some(json!({ "title": format!("Note {}", i), "description": "something" })),
        )
        .await?;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) =
        common::send(&app, Method::GET, "/api/notes/fetchallnotes", Some(&token), None).await?;
    assert_eq!(status, StatusCode::OK);

    let notes = body.as_array().expect("array of notes");
    assert_eq!(notes.len(), 3);
    assert_eq!(notes[0]["title"], "Note 0");
    Ok(())
}

#[tokio::test]
async fn update_merges_only_supplied_fields() -> Result<()> {
    let app = common::test_app();
    let token = common::bearer(Uuid::new_v4());

    let (_, note) = common::send(
        &app,
        Method::POST,
        "/api/notes/addnote",
        Some(&token),
        Some(json!({ "title": "Groceries", "description": "Buy milk" })),
    )
    .await?;
    let id = note["id"].as_str().expect("id").to_string();

    let (status, body) = common::send(
        &app,
        Method::PUT,
        &format!("/api/notes/updatenote/{}", id),
        Some(&token),
        Some(json!({ "title": "Groceries v2" })),
    )
    .await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["note"]["title"], "Groceries v2");
    assert_eq!(body["note"]["description"], "Buy milk");
    assert_eq!(body["note"]["tag"], "General");
    Ok(())
}

#[tokio::test]
async fn update_rejects_present_but_empty_field() -> Result<()> {
    let app = common::test_app();
    let token = common::bearer(Uuid::new_v4());

    let (_, note) = common::send(
        &app,
        Method::POST,
        "/api/notes/addnote",
        Some(&token),
        Some(json!({ "title": "Groceries", "description": "Buy milk" })),
    )
    .await?;
    let id = note["id"].as_str().expect("id").to_string();

    let (status, body) = common::send(
        &app,
        Method::PUT,
        &format!("/api/notes/updatenote/{}", id),
        Some(&token),
        Some(json!({ "title": "" })),
    )
    .await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["field"], "title");

    // The record is unchanged
    let (_, body) =
        common::send(&app, Method::GET, "/api/notes/fetchallnotes", Some(&token), None).await?;
    assert_eq!(body[0]["title"], "Groceries");
    Ok(())
}

#[tokio::test]
async fn update_of_nonexistent_id_is_not_found() -> Result<()> {
    let app = common::test_app();
    let token = common::bearer(Uuid::new_v4());

    let (status, body) = common::send(
        &app,
        Method::PUT,
        &format!("/api/notes/updatenote/{}", Uuid::new_v4()),
        Some(&token),
        Some(json!({ "title": "whatever" })),
    )
    .await?;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Not found");
    Ok(())
}

#[tokio::test]
async fn update_with_malformed_id_is_bad_request() -> Result<()> {
    let app = common::test_app();
    let token = common::bearer(Uuid::new_v4());

    let (status, _) = common::send(
        &app,
        Method::PUT,
        "/api/notes/updatenote/not-a-uuid",
        Some(&token),
        Some(json!({ "title": "whatever" })),
    )
    .await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn delete_returns_prior_state_and_removes_note() -> Result<()> {
    let app = common::test_app();
    let token = common::bearer(Uuid::new_v4());

    let (_, note) = common::send(
        &app,
        Method::POST,
        "/api/notes/addnote",
        Some(&token),
        Some(json!({ "title": "Groceries", "description": "Buy milk" })),
    )
    .await?;
    let id = note["id"].as_str().expect("id").to_string();

    let (status, body) = common::send(
        &app,
        Method::DELETE,
        &format!("/api/notes/deletenote/{}", id),
        Some(&token),
        None,
    )
    .await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Success"], "Your note has been deleted");
    assert_eq!(body["note"]["title"], "Groceries");

    let (_, body) =
        common::send(&app, Method::GET, "/api/notes/fetchallnotes", Some(&token), None).await?;
    assert!(body.as_array().expect("array").is_empty());

    // A second delete finds nothing
    let (status, _) = common::send(
        &app,
        Method::DELETE,
        &format!("/api/notes/deletenote/{}", id),
        Some(&token),
        None,
    )
    .await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}
