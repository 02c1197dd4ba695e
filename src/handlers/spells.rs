use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::database::repositories::{SpellPatch, SpellRepository};
use crate::database::DatabaseManager;
use crate::error::ApiError;
use crate::types::{PageQuery, Pagination};
use crate::validation::{validate_required, validate_required_edit};

#[derive(Debug, Deserialize)]
pub struct SpellBody {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "typeId")]
    pub type_id: Option<String>,
}

/// POST /api/v1/admin/spell/create
pub async fn create_spell(Json(body): Json<SpellBody>) -> Result<Response, ApiError> {
    validate_required(&[
        ("name", body.name.as_deref()),
        ("description", body.description.as_deref()),
        ("typeId", body.type_id.as_deref()),
    ])?;

    let name = body.name.unwrap_or_default();
    let description = body.description.unwrap_or_default();
    let type_id = Uuid::parse_str(&body.type_id.unwrap_or_default())
        .map_err(|_| ApiError::bad_request("Invalid spell type id"))?;

    let pool = DatabaseManager::pool().await?;
    let repo = SpellRepository::new(pool);

    if repo.find_by_name(&name).await?.is_some() {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(json!({
                "success": true,
                "message": "Spell with this name already exist",
            })),
        )
            .into_response());
    }

    let spell = repo.insert(&name, &description, type_id).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Spell created successfully",
            "data": spell,
        })),
    )
        .into_response())
}

/// GET /api/v1/spells and GET /api/v1/admin/spell - list spells
pub async fn get_spells(Query(query): Query<PageQuery>) -> Result<Response, ApiError> {
    let pagination = Pagination::from_query(&query);

    let pool = DatabaseManager::pool().await?;
    let repo = SpellRepository::new(pool);

    let spells = repo.list(pagination.as_ref()).await?;
    let total = repo.count().await?;

    let mut body = json!({
        "success": true,
        "message": "Spell fetched successfully",
        "data": spells,
    });
    if let Some(p) = pagination {
        body["meta"] = p.meta(total);
    }

    Ok((StatusCode::OK, Json(body)).into_response())
}

/// GET /api/v1/spells/:id and GET /api/v1/admin/spell/:id - spell detail
pub async fn get_spell_by_id(Path(id): Path<String>) -> Result<Response, ApiError> {
    let Ok(id) = Uuid::parse_str(&id) else {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(json!({
                "success": false,
                "message": "Spell ID is required",
            })),
        )
            .into_response());
    };

    let pool = DatabaseManager::pool().await?;

    let Some(spell) = SpellRepository::new(pool).find_detail_by_id(id).await? else {
        return Ok((
            StatusCode::NOT_FOUND,
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
            "message": "Fetched spell successfully",
            "data": {
                "id": spell.id,
                "name": spell.name,
                "description": spell.description,
                "typeId": spell.type_id,
                "createdAt": spell.created_at,
                "type": { "name": spell.type_name },
            },
        })),
    )
        .into_response())
}

/// POST /api/v1/admin/spell/edit/:id
pub async fn edit_spell(
    Path(id): Path<String>,
    Json(body): Json<SpellBody>,
) -> Result<Response, ApiError> {
    let Ok(id) = Uuid::parse_str(&id) else {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(json!({
                "success": false,
                "message": "Spell ID is required",
            })),
        )
            .into_response());
    };

    validate_required_edit(&[
        ("name", body.name.as_deref()),
        ("description", body.description.as_deref()),
        ("typeId", body.type_id.as_deref()),
    ])?;

    let pool = DatabaseManager::pool().await?;
    let repo = SpellRepository::new(pool);

    let Some(existing) = repo.find_by_id(id).await? else {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(json!({
                "success": false,
                "message": "Spell not found",
            })),
        )
            .into_response());
    };

    let mut patch = SpellPatch::default();
    if let Some(name) = body.name {
        if name != existing.name {
            patch.name = Some(name);
        }
    }
    // Unlike the other edit endpoints, a supplied empty description is
    // applied as-is here.
    if let Some(description) = body.description {
        patch.description = Some(description);
    }
    if let Some(type_id) = body.type_id {
        let type_id = Uuid::parse_str(&type_id)
            .map_err(|_| ApiError::bad_request("Invalid spell type id"))?;
        patch.type_id = Some(type_id);
    }

    let spell = repo.update(id, &patch).await?;

    Ok((
        StatusCode::OK,
        Json(json!({
            "success": true,
            "message": "Spell type edited successfully",
            "data": spell,
        })),
    )
        .into_response())
}

/// DELETE /api/v1/admin/spell/delete/:id
pub async fn delete_spell(Path(id): Path<String>) -> Result<Response, ApiError> {
    let Ok(id) = Uuid::parse_str(&id) else {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(json!({
                "success": false,
                "message": "Spell ID is required",
            })),
        )
            .into_response());
    };

    let pool = DatabaseManager::pool().await?;
    let repo = SpellRepository::new(pool);

    if repo.find_by_id(id).await?.is_none() {
        return Ok((
            StatusCode::OK,
            Json(json!({
                "success": false,
                "message": "Spell not found",
            })),
        )
            .into_response());
    }

    repo.delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(json!({
            "success": true,
            "message": "Spell deleted successfully",
            "id": id,
        })),
    )
        .into_response())
}
