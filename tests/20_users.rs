mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn user_create_requires_all_fields() -> Result<()> {
    if !common::database_available() {
        eprintln!("skipping: DATABASE_URL not set");
        return Ok(());
    }

    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/v1/user-auth/create", server.base_url))
        .json(&json!({ "name": "Hermione" }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await?;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Missing required fields");
    let missing: Vec<&str> = body["missingFields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert_eq!(missing, vec!["email", "plan"]);
    Ok(())
}

#[tokio::test]
async fn user_create_rejects_unknown_plan() -> Result<()> {
    if !common::database_available() {
        eprintln!("skipping: DATABASE_URL not set");
        return Ok(());
    }

    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/v1/user-auth/create", server.base_url))
        .json(&json!({
            "name": "Hermione",
            "email": common::unique("hermione") + "@example.com",
            "plan": "GOLD",
        }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await?;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Invalid plan value");
    assert_eq!(body["allowed"], json!(["FREE", "PRO", "PREMIUM"]));
    Ok(())
}

#[tokio::test]
async fn user_create_mints_an_api_key_once() -> Result<()> {
    if !common::database_available() {
        eprintln!("skipping: DATABASE_URL not set");
        return Ok(());
    }

    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let email = common::unique("ron") + "@example.com";
    let res = client
        .post(format!("{}/api/v1/user-auth/create", server.base_url))
        .json(&json!({ "name": "Ron", "email": email, "plan": "FREE" }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::CREATED);
    let body = res.json::<Value>().await?;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["email"], email.as_str());
    assert_eq!(body["data"]["plan"], "FREE");

    let api_key = body["data"]["apiKey"].as_str().unwrap();
    assert_eq!(api_key.len(), 64);
    assert!(api_key.chars().all(|c| c.is_ascii_hexdigit()));

    // Duplicate email never inserts a second row.
    let res = client
        .post(format!("{}/api/v1/user-auth/create", server.base_url))
        .json(&json!({ "name": "Ron again", "email": email, "plan": "PRO" }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await?;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "User with this email already exists");
    Ok(())
}
