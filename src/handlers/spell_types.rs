use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::database::repositories::{SpellTypePatch, SpellTypeRepository};
use crate::database::DatabaseManager;
use crate::error::ApiError;
use crate::types::{PageQuery, Pagination};
use crate::validation::{validate_required, validate_required_edit};

#[derive(Debug, Deserialize)]
pub struct SpellTypeBody {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// POST /api/v1/admin/spell-type/create
pub async fn create_spell_type(Json(body): Json<SpellTypeBody>) -> Result<Response, ApiError> {
    validate_required(&[
        ("name", body.name.as_deref()),
        ("description", body.description.as_deref()),
    ])?;

    let name = body.name.unwrap_or_default();
    let description = body.description.unwrap_or_default();

    let pool = DatabaseManager::pool().await?;
    let repo = SpellTypeRepository::new(pool);

    if repo.find_by_name(&name).await?.is_some() {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(json!({
                "success": true,
                "message": "Spell Type with this name already exist",
            })),
        )
            .into_response());
    }

    let spell_type = repo.insert(&name, &description).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Spell Type created successfully",
            "data": spell_type,
        })),
    )
        .into_response())
}

/// GET /api/v1/spells/types and GET /api/v1/admin/spell-type - list types
pub async fn get_spell_types(Query(query): Query<PageQuery>) -> Result<Response, ApiError> {
    let pagination = Pagination::from_query(&query);

    let pool = DatabaseManager::pool().await?;
    let repo = SpellTypeRepository::new(pool);

    let spell_types = repo.list(pagination.as_ref()).await?;
    let total = repo.count().await?;

    // This list carries no message field.
    let mut body = json!({
        "success": true,
        "data": spell_types,
    });
    if let Some(p) = pagination {
        body["meta"] = p.meta(total);
    }

    Ok((StatusCode::OK, Json(body)).into_response())
}

/// GET /api/v1/spells/types/:id and GET /api/v1/admin/spell-type/:id
pub async fn get_spell_type_by_id(Path(id): Path<String>) -> Result<Response, ApiError> {
    let Ok(id) = Uuid::parse_str(&id) else {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(json!({
                "success": false,
                "message": "SpellType ID is required",
            })),
        )
            .into_response());
    };

    let pool = DatabaseManager::pool().await?;

    let Some(spell_type) = SpellTypeRepository::new(pool).find_by_id(id).await? else {
        return Ok((
            StatusCode::OK,
            Json(json!({
                "success": false,
                "message": "Spell not found",
            })),
        )
            .into_response());
    };

    Ok((
        StatusCode::OK,
        Json(json!({
            "success": true,
            "message": "Fetched spell Type successfully",
            "data": spell_type,
        })),
    )
        .into_response())
}

/// POST /api/v1/admin/spell-type/edit/:id
pub async fn edit_spell_type(
    Path(id): Path<String>,
    Json(body): Json<SpellTypeBody>,
) -> Result<Response, ApiError> {
    let Ok(id) = Uuid::parse_str(&id) else {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(json!({
                "success": false,
                "message": "Spell Type ID is required",
            })),
        )
            .into_response());
    };

    validate_required_edit(&[
        ("name", body.name.as_deref()),
        ("description", body.description.as_deref()),
    ])?;

    let pool = DatabaseManager::pool().await?;
    let repo = SpellTypeRepository::new(pool);

    let Some(existing) = repo.find_by_id(id).await? else {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(json!({
                "success": false,
                "message": "Spell type not found",
            })),
        )
            .into_response());
    };

    let mut patch = SpellTypePatch::default();
    if let Some(name) = body.name {
        if name != existing.name {
            patch.name = Some(name);
        }
    }
    if let Some(description) = body.description {
        if !description.is_empty() {
            patch.description = Some(description);
        }
    }

    let spell_type = repo.update(id, &patch).await?;

    Ok((
        StatusCode::OK,
        Json(json!({
            "success": true,
            "message": "Spell type edited successfully",
            "data": spell_type,
        })),
    )
        .into_response())
}

/// DELETE /api/v1/admin/spell-type/delete/:id
pub async fn delete_spell_type(Path(id): Path<String>) -> Result<Response, ApiError> {
    let Ok(id) = Uuid::parse_str(&id) else {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(json!({
                "success": false,
                "message": "SpellType ID is required",
            })),
        )
            .into_response());
    };

    let pool = DatabaseManager::pool().await?;
    let repo = SpellTypeRepository::new(pool);

    if repo.find_by_id(id).await?.is_none() {
        return Ok((
            StatusCode::OK,
            Json(json!({
                "success": false,
                "message": "Spell type not found",
            })),
        )
            .into_response());
    }

    repo.delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(json!({
            "success": true,
            "message": "Spell type deleted successfully",
            "id": id,
        })),
    )
        .into_response())
}
