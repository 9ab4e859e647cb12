mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

use common::TestServer;

async fn create_animal(server: &TestServer, token: &str, body: Value) -> Result<Value> {
    let res = server
        .client
        .post(server.url("/api/animals"))
        .bearer_auth(token)
        .json(&body)
        .send()
        .await?;
    anyhow::ensure!(res.status().is_success(), "create failed: {}", res.status());
    Ok(res.json().await?)
}

#[tokio::test]
async fn create_then_get_round_trips() -> Result<()> {
    let server = TestServer::spawn().await?;
    let token = server.token_for("mgr", "MANAGER").await?;

    let created = create_animal(
        &server,
        &token,
        json!({
            "name": "Leo",
            "species": "Lion",
            "healthStatus": "GOOD",
            "habitatId": "h1",
            "caretakerId": "c1",
        }),
    )
    .await?;
    let id = created["id"].as_str().expect("id assigned").to_string();

    // Reads are open: no token
    let fetched: Value = server
        .client
        .get(server.url(&format!("/api/animals/{}", id)))
        .send()
        .await?
        .json()
        .await?;

    assert_eq!(fetched, created);
    assert_eq!(fetched["name"], "Leo");
    assert_eq!(fetched["species"], "Lion");
    assert_eq!(fetched["habitatId"], "h1");
    Ok(())
}

#[tokio::test]
async fn get_unknown_animal_is_404() -> Result<()> {
    let server = TestServer::spawn().await?;

    let res = server
        .client
        .get(server.url("/api/animals/no-such-id"))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn mutations_require_a_manager_token() -> Result<()> {
    let server = TestServer::spawn().await?;

    // No token at all: 401
    let unauthenticated = server
        .client
        .post(server.url("/api/animals"))
        .json(&json!({"name": "Intruder"}))
        .send()
        .await?;
    assert_eq!(unauthenticated.status(), StatusCode::UNAUTHORIZED);

    // Authenticated but not a manager: 403
    let caretaker_token = server.token_for("keeper", "CARETAKER").await?;
    let forbidden = server
        .client
        .post(server.url("/api/animals"))
        .bearer_auth(&caretaker_token)
        .json(&json!({"name": "Intruder"}))
        .send()
        .await?;
    assert_eq!(forbidden.status(), StatusCode::FORBIDDEN);

    // Neither attempt created anything
    let listed: Value = server
        .client
        .get(server.url("/api/animals"))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(listed.as_array().map(Vec::len), Some(0));
    Ok(())
}

#[tokio::test]
async fn update_forces_the_path_id_and_upserts() -> Result<()> {
    let server = TestServer::spawn().await?;
    let token = server.token_for("mgr", "MANAGER").await?;

    let created = create_animal(&server, &token, json!({"name": "Leo"})).await?;
    let id = created["id"].as_str().unwrap().to_string();

    // Body carries a conflicting id; the path id must win
    let updated: Value = server
        .client
        .put(server.url(&format!("/api/animals/{}", id)))
        .bearer_auth(&token)
        .json(&json!({"id": "smuggled-id", "name": "Leonardo"}))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(updated["id"], id.as_str());
    assert_eq!(updated["name"], "Leonardo");

    // Updating an id that does not exist creates a record under it
    let upserted = server
        .client
        .put(server.url("/api/animals/ghost-id"))
        .bearer_auth(&token)
        .json(&json!({"name": "Ghost"}))
        .send()
        .await?;
    assert_eq!(upserted.status(), StatusCode::OK);

    let fetched = server
        .client
        .get(server.url("/api/animals/ghost-id"))
        .send()
        .await?;
    assert_eq!(fetched.status(), StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn delete_then_get_returns_404() -> Result<()> {
    let server = TestServer::spawn().await?;
    let token = server.token_for("mgr", "MANAGER").await?;

    let created = create_animal(&server, &token, json!({"name": "Leo"})).await?;
    let id = created["id"].as_str().unwrap().to_string();

    let deleted = server
        .client
        .delete(server.url(&format!("/api/animals/{}", id)))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(deleted.status(), StatusCode::OK);

    let fetched = server
        .client
        .get(server.url(&format!("/api/animals/{}", id)))
        .send()
        .await?;
    assert_eq!(fetched.status(), StatusCode::NOT_FOUND);

    // Deleting again is a quiet no-op, not a 404
    let deleted_again = server
        .client
        .delete(server.url(&format!("/api/animals/{}", id)))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(deleted_again.status(), StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn list_by_habitat_and_caretaker_filter_on_references() -> Result<()> {
    let server = TestServer::spawn().await?;
    let token = server.token_for("mgr", "MANAGER").await?;

    create_animal(
        &server,
        &token,
        json!({"name": "Leo", "habitatId": "savanna", "caretakerId": "jane"}),
    )
    .await?;
    create_animal(
        &server,
        &token,
        json!({"name": "Luna", "habitatId": "savanna", "caretakerId": "john"}),
    )
    .await?;
    create_animal(
        &server,
        &token,
        json!({"name": "Nemo", "habitatId": "reef", "caretakerId": "jane"}),
    )
    .await?;

    let in_savanna: Value = server
        .client
        .get(server.url("/api/animals/habitat/savanna"))
        .send()
        .await?
        .json()
        .await?;
    let names: Vec<&str> = in_savanna
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["name"].as_str().unwrap())
        .collect();
    assert_eq!(names.len(), 2);
    assert!(names.contains(&"Leo") && names.contains(&"Luna"));

    let janes: Value = server
        .client
        .get(server.url("/api/animals/caretaker/jane"))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(janes.as_array().map(Vec::len), Some(2));

    let nobody: Value = server
        .client
        .get(server.url("/api/animals/caretaker/nobody"))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(nobody.as_array().map(Vec::len), Some(0));
    Ok(())
}
