use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::database::repositories::{HousePatch, HouseRepository};
use crate::database::DatabaseManager;
use crate::error::ApiError;
use crate::types::{PageQuery, Pagination};
use crate::validation::{validate_required, validate_required_edit};

#[derive(Debug, Deserialize)]
pub struct HouseBody {
    pub name: Option<String>,
    pub logo: Option<String>,
    pub creator: Option<String>,
}

/// POST /api/v1/admin/house/create
pub async fn create_house(Json(body): Json<HouseBody>) -> Result<Response, ApiError> {
    validate_required(&[
        ("name", body.name.as_deref()),
        ("logo", body.logo.as_deref()),
        ("creator", body.creator.as_deref()),
    ])?;

    let name = body.name.unwrap_or_default();
    let logo = body.logo.unwrap_or_default();
    let creator = body.creator.unwrap_or_default();

    let pool = DatabaseManager::pool().await?;
    let repo = HouseRepository::new(pool);

    if repo.find_by_name(&name).await?.is_some() {
        // Long-standing wire behavior: the conflict response carries
        // success:true at 400.
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(json!({
                "success": true,
                "message": "House with this name already exist",
            })),
        )
            .into_response());
    }

    let house = repo.insert(&name, &logo, &creator).await?;

    Ok((
        StatusCode::OK,
        Json(json!({
            "success": true,
            "message": "House created successfully",
            "data": house,
        })),
    )
        .into_response())
}

/// GET /api/v1/house and GET /api/v1/admin/house - list houses
pub async fn get_houses(Query(query): Query<PageQuery>) -> Result<Response, ApiError> {
    let pagination = Pagination::from_query(&query);

    let pool = DatabaseManager::pool().await?;
    let repo = HouseRepository::new(pool);

    let houses = repo.list(pagination.as_ref()).await?;
    let total = repo.count().await?;

    let mut body = json!({
        "success": true,
        "message": "Successfully fetched House",
        "data": houses,
    });
    if let Some(p) = pagination {
        body["meta"] = p.meta(total);
    }

    Ok((StatusCode::OK, Json(body)).into_response())
}

/// GET /api/v1/admin/house/:id
pub async fn get_house_by_id(Path(id): Path<String>) -> Result<Response, ApiError> {
    let Ok(id) = Uuid::parse_str(&id) else {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(json!({
                "success": false,
                "message": "House ID is required",
            })),
        )
            .into_response());
    };

    let pool = DatabaseManager::pool().await?;

    let Some(house) = HouseRepository::new(pool).find_by_id(id).await? else {
        // Miss responds 200 with success:false here, unlike the user and
        // spell detail endpoints.
        return Ok((
            StatusCode::OK,
            Json(json!({
                "success": false,
                "message": "House not found",
            })),
        )
            .into_response());
    };

    Ok((
        StatusCode::OK,
        Json(json!({
            "success": true,
            "message": "Fetched house successfully",
            "data": house,
        })),
    )
        .into_response())
}

/// POST /api/v1/admin/house/edit/:id
pub async fn edit_house(
    Path(id): Path<String>,
    Json(body): Json<HouseBody>,
) -> Result<Response, ApiError> {
    let Ok(id) = Uuid::parse_str(&id) else {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(json!({
                "success": false,
                "message": "House ID is required",
            })),
        )
            .into_response());
    };

    validate_required_edit(&[
        ("name", body.name.as_deref()),
        ("logo", body.logo.as_deref()),
        ("creator", body.creator.as_deref()),
    ])?;

    let pool = DatabaseManager::pool().await?;
    let repo = HouseRepository::new(pool);

    let Some(existing) = repo.find_by_id(id).await? else {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(json!({
                "success": false,
                "message": "House not found",
            })),
        )
            .into_response());
    };

    let mut patch = HousePatch::default();
    if let Some(name) = body.name {
        if name != existing.name {
            patch.name = Some(name);
        }
    }
    if let Some(logo) = body.logo {
        if !logo.is_empty() {
            patch.logo = Some(logo);
        }
    }
    if let Some(creator) = body.creator {
        if !creator.is_empty() {
            patch.creator = Some(creator);
        }
    }

    let house = repo.update(id, &patch).await?;

    Ok((
        StatusCode::OK,
        Json(json!({
            "success": true,
            "message": "House edited successfully",
            "data": house,
        })),
    )
        .into_response())
}

/// DELETE /api/v1/admin/house/delete/:id
pub async fn delete_house(Path(id): Path<String>) -> Result<Response, ApiError> {
    let Ok(id) = Uuid::parse_str(&id) else {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(json!({
                "success": false,
                "message": "House ID is required",
            })),
        )
            .into_response());
    };

    let pool = DatabaseManager::pool().await?;
    let repo = HouseRepository::new(pool);

    if repo.find_by_id(id).await?.is_none() {
        // Deleting a missing row answers 200, not 404.
        return Ok((
            StatusCode::OK,
            Json(json!({
                "success": false,
                "message": "House not found",
            })),
        )
            .into_response());
    }

    repo.delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(json!({
            "success": true,
            "message": "House deleted successfully",
            "id": id,
        })),
    )
        .into_response())
}
