// src/models/question.rs

use serde::{Deserialize, Serialize};
use sqlx::{prelude::FromRow, types::Json};

/// Represents the 'questions' table in the hosted database.
///
/// One table holds both candidate pools for exam generation; the `kind`
/// column ('knowledge' or 'situation') decides which pool a row is offered
/// in and is not part of the record itself.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,

    /// Thematic category key (e.g. "CSP_01"), matched against the exam
    /// blueprint and the 'modules' table.
    pub module_id: String,

    /// Exam type this question belongs to ("CSP" or "CR").
    pub exam_type: String,

    /// French statement. The translated columns are filled offline by the
    /// translation utility and may lag behind.
    pub question_fr: String,
    pub question_en: Option<String>,
    pub question_es: Option<String>,

    /// Answer options, stored as a JSON array.
    pub options: Json<Vec<AnswerOption>>,

    /// Key of the correct option.
    pub answer: String,

    pub explanation: Option<String>,

    /// Position within the module, used by practice mode ordering.
    pub order_index: Option<i64>,

    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// A single selectable option with its translations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerOption {
    pub key: String,
    pub text_fr: String,
    pub text_en: Option<String>,
    pub text_es: Option<String>,
}
