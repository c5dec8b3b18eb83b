// src/handlers/knowledge.rs

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use sqlx::PgPool;

use crate::{
    error::AppError,
    models::knowledge::{KnowledgeCard, KnowledgeCategory, KnowledgeTable},
};

/// Lists all knowledge categories for the knowledge home page.
pub async fn list_categories(State(pool): State<PgPool>) -> Result<impl IntoResponse, AppError> {
    let categories = sqlx::query_as::<_, KnowledgeCategory>(
        r#"
        SELECT id, title_fr, icon, created_at
        FROM categories
        ORDER BY id ASC
        "#,
    )
    .fetch_all(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to fetch knowledge categories: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?;

    Ok(Json(categories))
}

/// Lists the knowledge cards of a category in timeline order.
pub async fn list_cards(
    State(pool): State<PgPool>,
    Path(category_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let cards = sqlx::query_as::<_, KnowledgeCard>(
        r#"
        SELECT id, category_id, title_fr, content_fr, image_url, timeline_order, created_at
        FROM knowledge_cards
        WHERE category_id = $1
        ORDER BY timeline_order ASC
        "#,
    )
    .bind(category_id)
    .fetch_all(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to fetch knowledge cards: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?;

    Ok(Json(cards))
}

/// Retrieves the reference table of a category. A category has at most one
/// table; categories without one return 404.
pub async fn get_table(
    State(pool): State<PgPool>,
    Path(category_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let table = sqlx::query_as::<_, KnowledgeTable>(
        r#"
        SELECT id, category_id, title_fr, columns, rows
        FROM knowledge_tables
        WHERE category_id = $1
        "#,
    )
    .bind(category_id)
    .fetch_optional(&pool)
    .await?
    .ok_or(AppError::NotFound("No table for this category".to_string()))?;

    Ok(Json(table))
}
