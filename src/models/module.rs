// src/models/module.rs

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;

/// Represents the 'modules' table: one thematic category of an exam type.
///
/// The id doubles as the category key referenced by `Question::module_id`
/// and by the exam blueprint (e.g. "CSP_01").
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Module {
    pub id: String,

    pub exam_type: String,

    pub title_fr: String,

    pub description_fr: Option<String>,

    /// Display position in the practice-mode module list.
    pub order_index: Option<i64>,

    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}
