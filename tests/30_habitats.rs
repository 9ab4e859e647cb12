mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

use common::TestServer;

#[tokio::test]
async fn habitat_crud_round_trips() -> Result<()> {
    let server = TestServer::spawn().await?;
    let token = server.token_for("mgr", "MANAGER").await?;

    let created: Value = server
        .client
        .post(server.url("/api/habitats"))
        .bearer_auth(&token)
        .json(&json!({
            "name": "Savanna",
            "type": "grassland",
            "area": 500.0,
            "climate": "arid",
        }))
        .send()
        .await?
        .json()
        .await?;
    let id = created["id"].as_str().expect("id assigned").to_string();
    assert_eq!(created["type"], "grassland");
    assert_eq!(created["area"], 500.0);

    let fetched: Value = server
        .client
        .get(server.url(&format!("/api/habitats/{}", id)))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(fetched, created);

    let updated: Value = server
        .client
        .put(server.url(&format!("/api/habitats/{}", id)))
        .bearer_auth(&token)
        .json(&json!({"name": "Great Savanna", "area": 750.0}))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(updated["id"], id.as_str());
    assert_eq!(updated["name"], "Great Savanna");

    let deleted = server
        .client
        .delete(server.url(&format!("/api/habitats/{}", id)))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(deleted.status(), StatusCode::OK);

    let gone = server
        .client
        .get(server.url(&format!("/api/habitats/{}", id)))
        .send()
        .await?;
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn habitat_writes_require_a_manager_token() -> Result<()> {
    let server = TestServer::spawn().await?;

    let unauthenticated = server
        .client
        .post(server.url("/api/habitats"))
        .json(&json!({"name": "Swamp"}))
        .send()
        .await?;
    assert_eq!(unauthenticated.status(), StatusCode::UNAUTHORIZED);

    let caretaker_token = server.token_for("keeper", "CARETAKER").await?;
    let forbidden = server
        .client
        .delete(server.url("/api/habitats/any"))
        .bearer_auth(&caretaker_token)
        .send()
        .await?;
    assert_eq!(forbidden.status(), StatusCode::FORBIDDEN);
    Ok(())
}

#[tokio::test]
async fn with_animals_derives_the_animal_id_lists() -> Result<()> {
    let server = TestServer::spawn().await?;
    let token = server.token_for("mgr", "MANAGER").await?;

    let savanna: Value = server
        .client
        .post(server.url("/api/habitats"))
        .bearer_auth(&token)
        .json(&json!({"name": "Savanna", "area": 500.0}))
        .send()
        .await?
        .json()
        .await?;
    let savanna_id = savanna["id"].as_str().unwrap().to_string();

    let leo: Value = server
        .client
        .post(server.url("/api/animals"))
        .bearer_auth(&token)
        .json(&json!({"name": "Leo", "habitatId": savanna_id}))
        .send()
        .await?
        .json()
        .await?;
    let leo_id = leo["id"].as_str().unwrap();

    // An animal referencing some other habitat must not show up
    server
        .client
        .post(server.url("/api/animals"))
        .bearer_auth(&token)
        .json(&json!({"name": "Nemo", "habitatId": "reef"}))
        .send()
        .await?;

    let listed: Value = server
        .client
        .get(server.url("/api/habitats/with-animals"))
        .send()
        .await?
        .json()
        .await?;
    let entries = listed.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["id"], savanna_id.as_str());
    assert_eq!(entries[0]["animalIds"], json!([leo_id]));
    Ok(())
}

#[tokio::test]
async fn plain_reads_do_not_compute_animal_ids() -> Result<()> {
    let server = TestServer::spawn().await?;
    let token = server.token_for("mgr", "MANAGER").await?;

    let savanna: Value = server
        .client
        .post(server.url("/api/habitats"))
        .bearer_auth(&token)
        .json(&json!({"name": "Savanna", "area": 500.0}))
        .send()
        .await?
        .json()
        .await?;
    let savanna_id = savanna["id"].as_str().unwrap().to_string();

    server
        .client
        .post(server.url("/api/animals"))
        .bearer_auth(&token)
        .json(&json!({"name": "Leo", "habitatId": savanna_id}))
        .send()
        .await?;

    // The derived list only exists on the with-animals path
    let fetched: Value = server
        .client
        .get(server.url(&format!("/api/habitats/{}", savanna_id)))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(fetched["animalIds"], Value::Null);
    Ok(())
}
