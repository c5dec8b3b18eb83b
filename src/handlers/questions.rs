// src/handlers/questions.rs

use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use sqlx::PgPool;

use crate::{
    error::AppError,
    models::{module::Module, question::Question},
};

/// Query parameters for practice mode.
#[derive(Debug, Deserialize)]
pub struct PracticeParams {
    pub module_id: String,
}

/// Lists the questions of one thematic module in curriculum order, for
/// practice mode. Answers and explanations ship with the payload since the
/// client grades practice sessions locally.
pub async fn list_practice_questions(
    State(pool): State<PgPool>,
    Query(params): Query<PracticeParams>,
) -> Result<impl IntoResponse, AppError> {
    let questions = sqlx::query_as::<_, Question>(
        r#"
        SELECT id, module_id, exam_type, question_fr, question_en, question_es,
               options, answer, explanation, order_index, created_at
        FROM questions
        WHERE module_id = $1
        ORDER BY order_index ASC
        "#,
    )
    .bind(&params.module_id)
    .fetch_all(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to fetch practice questions: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?;

    Ok(Json(questions))
}

/// Query parameters for listing thematic modules.
#[derive(Debug, Deserialize)]
pub struct ModuleListParams {
    pub exam_type: String,
}

/// Lists the official thematic modules for an exam type.
pub async fn list_modules(
    State(pool): State<PgPool>,
    Query(params): Query<ModuleListParams>,
) -> Result<impl IntoResponse, AppError> {
    let modules = sqlx::query_as::<_, Module>(
        r#"
        SELECT id, exam_type, title_fr, description_fr, order_index, created_at
        FROM modules
        WHERE exam_type = $1
        ORDER BY order_index ASC
        "#,
    )
    .bind(&params.exam_type)
    .fetch_all(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to fetch modules: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?;

    Ok(Json(modules))
}

/// Retrieves a single module by its category key.
pub async fn get_module(
    State(pool): State<PgPool>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let module = sqlx::query_as::<_, Module>(
        r#"
        SELECT id, exam_type, title_fr, description_fr, order_index, created_at
        FROM modules
        WHERE id = $1
        "#,
    )
    .bind(&id)
    .fetch_optional(&pool)
    .await?
    .ok_or(AppError::NotFound("Module not found".to_string()))?;

    Ok(Json(module))
}
