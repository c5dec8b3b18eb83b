// src/models/knowledge.rs

use serde::{Deserialize, Serialize};
use sqlx::{prelude::FromRow, types::Json};

/// Represents the 'categories' table of the knowledge base.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct KnowledgeCategory {
    pub id: i64,
    pub title_fr: String,
    /// Icon identifier shown on the knowledge home page.
    pub icon: Option<String>,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Represents the 'knowledge_cards' table: one card on a category's
/// timeline.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct KnowledgeCard {
    pub id: i64,
    pub category_id: i64,
    pub title_fr: String,
    pub content_fr: String,
    pub image_url: Option<String>,
    /// Position on the category timeline.
    pub timeline_order: Option<i64>,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Represents the 'knowledge_tables' table. A category has at most one
/// table of reference data.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct KnowledgeTable {
    pub id: i64,
    pub category_id: i64,
    pub title_fr: String,
    /// Column headers, stored as a JSON array.
    pub columns: Json<Vec<String>>,
    /// Row cells, stored as a JSON array of arrays.
    pub rows: Json<Vec<Vec<String>>>,
}
