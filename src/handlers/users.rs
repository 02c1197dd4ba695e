use axum::{http::StatusCode, response::IntoResponse, response::Response, Json};
use serde::Deserialize;
use serde_json::json;

use crate::error::ApiError;
use crate::services::UserService;
use crate::types::Plan;
use crate::validation::validate_required;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub plan: Option<String>,
}

/// POST /api/v1/user-auth/create - self-service user signup
pub async fn create_user(Json(body): Json<CreateUserRequest>) -> Result<Response, ApiError> {
    validate_required(&[
        ("name", body.name.as_deref()),
        ("email", body.email.as_deref()),
        ("plan", body.plan.as_deref()),
    ])?;

    let name = body.name.unwrap_or_default();
    let email = body.email.unwrap_or_default();
    let plan_raw = body.plan.unwrap_or_default();

    let Some(plan) = Plan::parse(&plan_raw) else {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(json!({
                "success": false,
                "message": "Invalid plan value",
                "allowed": Plan::ALLOWED,
            })),
        )
            .into_response());
    };

    let service = UserService::new().await?;
    match service.create_user(&name, &email, plan).await {
        Ok(user) => Ok((
            StatusCode::CREATED,
            Json(json!({
                "success": true,
                "message": "User created successfully",
                "data": {
                    "id": user.id,
                    "name": user.name,
                    "email": user.email,
                    "plan": user.plan,
                    "apiKey": user.api_key,
                },
            })),
        )
            .into_response()),
        Err(err) => Ok((
            StatusCode::BAD_REQUEST,
            Json(json!({
                "success": false,
                "message": err.to_string(),
            })),
        )
            .into_response()),
    }
}
