mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

async fn create_user(
    client: &reqwest::Client,
    base_url: &str,
    plan: &str,
) -> Result<(String, String)> {
    let res = client
        .post(format!("{}/api/v1/user-auth/create", base_url))
        .json(&json!({
            "name": "meter test",
            "email": common::unique("meter") + "@example.com",
            "plan": plan,
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);

    let body = res.json::<Value>().await?;
    let id = body["data"]["id"].as_str().unwrap().to_string();
    let api_key = body["data"]["apiKey"].as_str().unwrap().to_string();
    Ok((id, api_key))
}

async fn admin_token(client: &reqwest::Client, base_url: &str) -> Result<String> {
    let email = common::unique("meter-admin") + "@example.com";
    let res = client
        .post(format!("{}/api/v1/admin/create", base_url))
        .json(&json!({ "email": email, "password": "caput draconis" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = client
        .post(format!("{}/api/v1/admin/login", base_url))
        .json(&json!({ "email": email, "password": "caput draconis" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body = res.json::<Value>().await?;
    Ok(body["token"].as_str().unwrap().to_string())
}

async fn usage_count(
    client: &reqwest::Client,
    base_url: &str,
    token: &str,
    user_id: &str,
) -> Result<i64> {
    let res = client
        .get(format!("{}/api/v1/admin/get-user/{}", base_url, user_id))
        .bearer_auth(token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body = res.json::<Value>().await?;
    Ok(body["data"]["usageCount"].as_i64().unwrap())
}

#[tokio::test]
async fn missing_api_key_is_unauthorized() -> Result<()> {
    if !common::database_available() {
        eprintln!("skipping: DATABASE_URL not set");
        return Ok(());
    }

    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/v1/spells", server.base_url))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body = res.json::<Value>().await?;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "API key missing");
    Ok(())
}

#[tokio::test]
async fn unknown_api_key_is_forbidden() -> Result<()> {
    if !common::database_available() {
        eprintln!("skipping: DATABASE_URL not set");
        return Ok(());
    }

    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/v1/spells", server.base_url))
        .header("x-api-key", "not-a-real-key")
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    let body = res.json::<Value>().await?;
    assert_eq!(body["message"], "Invalid API key");
    Ok(())
}

#[tokio::test]
async fn free_plan_hits_the_daily_cap_at_one_hundred() -> Result<()> {
    if !common::database_available() {
        eprintln!("skipping: DATABASE_URL not set");
        return Ok(());
    }

    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let (user_id, api_key) = create_user(&client, &server.base_url, "FREE").await?;

    // A fresh key has no usage today: all 100 admitted, each one metered.
    for i in 0..100 {
        let res = client
            .get(format!("{}/api/v1/spells", server.base_url))
            .header("x-api-key", &api_key)
            .send()
            .await?;
        assert_eq!(res.status(), StatusCode::OK, "request {} was rejected", i);
    }

    // The 101st is rejected and leaves no usage record behind.
    let res = client
        .get(format!("{}/api/v1/spells", server.base_url))
        .header("x-api-key", &api_key)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::TOO_MANY_REQUESTS);
    let body = res.json::<Value>().await?;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Daily API limit exceeded");

    let token = admin_token(&client, &server.base_url).await?;
    assert_eq!(
        usage_count(&client, &server.base_url, &token, &user_id).await?,
        100
    );

    // Still capped, still exactly 100 recorded.
    let res = client
        .get(format!("{}/api/v1/house", server.base_url))
        .header("x-api-key", &api_key)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(
        usage_count(&client, &server.base_url, &token, &user_id).await?,
        100
    );
    Ok(())
}

#[tokio::test]
async fn premium_plan_is_unmetered() -> Result<()> {
    if !common::database_available() {
        eprintln!("skipping: DATABASE_URL not set");
        return Ok(());
    }

    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let (user_id, api_key) = create_user(&client, &server.base_url, "PREMIUM").await?;

    for _ in 0..5 {
        let res = client
            .get(format!("{}/api/v1/spells", server.base_url))
            .header("x-api-key", &api_key)
            .send()
            .await?;
        assert_eq!(res.status(), StatusCode::OK);
    }

    // Unlimited plans are never counted, so no usage rows accumulate.
    let token = admin_token(&client, &server.base_url).await?;
    assert_eq!(
        usage_count(&client, &server.base_url, &token, &user_id).await?,
        0
    );
    Ok(())
}
