// src/handlers/exam.rs

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use rand::thread_rng;
use serde::Deserialize;
use sqlx::PgPool;

use crate::{
    error::AppError,
    exam::{Blueprint, generate_exam_paper},
    models::question::Question,
};

/// Query parameters for exam generation.
#[derive(Debug, Deserialize)]
pub struct GenerateExamParams {
    pub exam_type: String,
}

/// Generates a mock exam paper for one exam type.
///
/// Loads the two candidate pools (knowledge and situational questions) and
/// hands them to the paper generator with the process RNG. The paper ships
/// with answers included, as the client grades mock exams locally.
pub async fn generate_paper(
    State(pool): State<PgPool>,
    State(blueprint): State<Arc<Blueprint>>,
    Query(params): Query<GenerateExamParams>,
) -> Result<impl IntoResponse, AppError> {
    // Reject unknown exam types before hitting the database.
    if blueprint.targets(&params.exam_type).is_none() {
        return Err(AppError::BadRequest(format!(
            "Unknown exam type: {}",
            params.exam_type
        )));
    }

    let knowledge_pool = fetch_pool(&pool, &params.exam_type, "knowledge").await?;
    let situational_pool = fetch_pool(&pool, &params.exam_type, "situation").await?;

    let paper = generate_exam_paper(
        &blueprint,
        &knowledge_pool,
        &situational_pool,
        &params.exam_type,
        &mut thread_rng(),
    )?;

    Ok(Json(paper))
}

/// Fetches one candidate pool: every question of the exam type offered in
/// the given form.
async fn fetch_pool(
    pool: &PgPool,
    exam_type: &str,
    kind: &str,
) -> Result<Vec<Question>, AppError> {
    sqlx::query_as::<_, Question>(
        r#"
        SELECT id, module_id, exam_type, question_fr, question_en, question_es,
               options, answer, explanation, order_index, created_at
        FROM questions
        WHERE exam_type = $1 AND kind = $2
        "#,
    )
    .bind(exam_type)
    .bind(kind)
    .fetch_all(pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to fetch {} pool: {:?}", kind, e);
        AppError::InternalServerError(e.to_string())
    })
}
