use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::database::repositories::{UsageRepository, UserRepository};
use crate::database::DatabaseManager;
use crate::error::ApiError;
use crate::services::AdminService;
use crate::types::{PageQuery, Pagination};
use crate::validation::validate_required;

#[derive(Debug, Deserialize)]
pub struct AdminCredentials {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// POST /api/v1/admin/create
pub async fn create_admin(Json(body): Json<AdminCredentials>) -> Result<Response, ApiError> {
    validate_required(&[
        ("email", body.email.as_deref()),
        ("password", body.password.as_deref()),
    ])?;

    let email = body.email.unwrap_or_default();
    let password = body.password.unwrap_or_default();

    let service = AdminService::new().await?;
    match service.create_admin(&email, &password).await {
        Ok(admin) => Ok((
            StatusCode::CREATED,
            Json(json!({
                "success": true,
                "message": "Admin created successfully",
                "data": {
                    "id": admin.id,
                    "email": admin.email,
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

/// POST /api/v1/admin/login
pub async fn admin_login(Json(body): Json<AdminCredentials>) -> Result<Response, ApiError> {
    validate_required(&[
        ("email", body.email.as_deref()),
        ("password", body.password.as_deref()),
    ])?;

    let email = body.email.unwrap_or_default();
    let password = body.password.unwrap_or_default();

    let service = AdminService::new().await?;
    match service.login(&email, &password).await {
        Ok((admin, token)) => Ok((
            StatusCode::OK,
            Json(json!({
                "success": true,
                "message": "Admin logged in successfully",
                "data": {
                    "id": admin.id,
                    "email": admin.email,
                },
                "token": token,
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

/// GET /api/v1/admin/get-users - list users, optionally paginated
pub async fn get_users(Query(query): Query<PageQuery>) -> Result<Response, ApiError> {
    let pagination = Pagination::from_query(&query);

    let pool = DatabaseManager::pool().await?;
    let repo = UserRepository::new(pool);

    let users = repo.list(pagination.as_ref()).await?;
    let total = repo.count().await?;

    let mut body = json!({
        "success": true,
        "message": "Successfully fetched users",
        "data": users,
    });
    if let Some(p) = pagination {
        body["meta"] = p.meta(total);
    }

    Ok((StatusCode::OK, Json(body)).into_response())
}

/// GET /api/v1/admin/get-user/:id - user detail with nested usage history
pub async fn get_user_detail(
    Path(id): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<Response, ApiError> {
    let Ok(id) = Uuid::parse_str(&id) else {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(json!({
                "success": false,
                "message": "User ID is required",
            })),
        )
            .into_response());
    };

    let pool = DatabaseManager::pool().await?;

    let Some(user) = UserRepository::new(pool.clone()).find_by_id(id).await? else {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(json!({
                "success": false,
                "message": "User not found",
            })),
        )
            .into_response());
    };

    // The usage history is always windowed; an unqualified request gets the
    // newest ten events.
    let pagination = Pagination::from_query(&query).unwrap_or(Pagination {
        page: 1,
        take: 10,
        offset: None,
    });

    let usage_repo = UsageRepository::new(pool);
    let events = usage_repo.list_for_user(id, &pagination).await?;
    let usage_count = usage_repo.count_for_user(id).await?;

    Ok((
        StatusCode::OK,
        Json(json!({
            "success": true,
            "message": "Fetched user successfully",
            "data": {
                "id": user.id,
                "name": user.name,
                "email": user.email,
                "plan": user.plan,
                "apiKey": user.api_key,
                "createdAt": user.created_at,
                "usage": events,
                "usageCount": usage_count,
            },
            "meta": pagination.meta(usage_count),
        })),
    )
        .into_response())
}
