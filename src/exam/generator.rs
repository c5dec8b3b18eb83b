// src/exam/generator.rs

use std::collections::HashSet;
use std::fmt;

use rand::Rng;
use serde::Serialize;

use crate::models::question::Question;

use super::blueprint::Blueprint;
use super::shuffle::shuffled;

/// How a question is used on one generated paper.
///
/// This is a per-paper marker, not a property of the question: pool
/// membership decides the form, and a knowledge question that backfills an
/// unfilled situational slot keeps the `Knowledge` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionForm {
    Knowledge,
    Situation,
}

/// A question placed on a generated paper, tagged with its effective form.
#[derive(Debug, Clone, Serialize)]
pub struct ExamQuestion {
    #[serde(flatten)]
    pub question: Question,
    pub question_form: QuestionForm,
}

/// Errors from exam paper generation.
#[derive(Debug)]
pub enum ExamError {
    /// The requested exam type has no entry in the blueprint table.
    UnknownExamType(String),
}

impl fmt::Display for ExamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExamError::UnknownExamType(exam_type) => {
                write!(f, "Unknown exam type: {}", exam_type)
            }
        }
    }
}

impl std::error::Error for ExamError {}

/// Assembles a mock exam paper from the two candidate pools.
///
/// For each category target, in blueprint order: take up to `situation`
/// shuffled situational questions of that category, then knowledge
/// questions of the same category up to `knowledge` plus however many
/// situational slots stayed unfilled. If the paper is still short of the
/// blueprint total afterwards, it is topped up from the remaining
/// knowledge questions of this exam type across all categories. The
/// finished paper is shuffled once more and truncated to the total.
///
/// Under-supply is not an error: when the pools cannot cover the full
/// paper the result is simply shorter. The only failure mode is an exam
/// type missing from the blueprint. Inputs are never mutated.
pub fn generate_exam_paper<R: Rng + ?Sized>(
    blueprint: &Blueprint,
    knowledge_pool: &[Question],
    situational_pool: &[Question],
    exam_type: &str,
    rng: &mut R,
) -> Result<Vec<ExamQuestion>, ExamError> {
    let targets = blueprint
        .targets(exam_type)
        .ok_or_else(|| ExamError::UnknownExamType(exam_type.to_string()))?;

    // The required paper size is derived from the table itself.
    let total: usize = targets.iter().map(|t| t.knowledge + t.situation).sum();

    let mut paper: Vec<ExamQuestion> = Vec::with_capacity(total);
    let mut used_ids: HashSet<i64> = HashSet::new();

    for target in targets {
        let cat_sit: Vec<&Question> = situational_pool
            .iter()
            .filter(|q| q.module_id == target.category)
            .collect();
        let cat_sit = shuffled(&cat_sit, rng);

        let cat_know: Vec<&Question> = knowledge_pool
            .iter()
            .filter(|q| q.module_id == target.category)
            .collect();
        let cat_know = shuffled(&cat_know, rng);

        let picked_sit = target.situation.min(cat_sit.len());
        for question in &cat_sit[..picked_sit] {
            used_ids.insert(question.id);
            paper.push(ExamQuestion {
                question: (*question).clone(),
                question_form: QuestionForm::Situation,
            });
        }

        // Unfilled situational slots raise the knowledge quota for the
        // same category; the backfill stays tagged as knowledge.
        let shortfall = target.situation - picked_sit;
        let quota = target.knowledge + shortfall;

        let picked_know = quota.min(cat_know.len());
        for question in &cat_know[..picked_know] {
            used_ids.insert(question.id);
            paper.push(ExamQuestion {
                question: (*question).clone(),
                question_form: QuestionForm::Knowledge,
            });
        }
    }

    // Cross-category fallback. Draws from the knowledge pool only, even
    // when the deficit came from missing situational questions.
    if paper.len() < total {
        let fallback: Vec<&Question> = knowledge_pool
            .iter()
            .filter(|q| q.exam_type == exam_type && !used_ids.contains(&q.id))
            .collect();
        let fallback = shuffled(&fallback, rng);

        for question in fallback.into_iter().take(total - paper.len()) {
            paper.push(ExamQuestion {
                question: question.clone(),
                question_form: QuestionForm::Knowledge,
            });
        }
    }

    let mut paper = shuffled(&paper, rng);
    paper.truncate(total);
    Ok(paper)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exam::CategoryTarget;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use sqlx::types::Json;
    use std::collections::HashMap;

    fn question(id: i64, module_id: &str, exam_type: &str) -> Question {
        Question {
            id,
            module_id: module_id.to_string(),
            exam_type: exam_type.to_string(),
            question_fr: format!("Question {}", id),
            question_en: None,
            question_es: None,
            options: Json(Vec::new()),
            answer: "A".to_string(),
            explanation: None,
            order_index: None,
            created_at: None,
        }
    }

    fn blueprint_of(exam_type: &str, targets: &[(&str, usize, usize)]) -> Blueprint {
        let mut exams = HashMap::new();
        exams.insert(
            exam_type.to_string(),
            targets
                .iter()
                .map(|(category, knowledge, situation)| CategoryTarget {
                    category: category.to_string(),
                    knowledge: *knowledge,
                    situation: *situation,
                })
                .collect(),
        );
        Blueprint::new(exams)
    }

    #[test]
    fn test_unknown_exam_type_fails() {
        let blueprint = Blueprint::default();
        let mut rng = StdRng::seed_from_u64(0);
        let result = generate_exam_paper(&blueprint, &[], &[], "DELF", &mut rng);
        assert!(matches!(result, Err(ExamError::UnknownExamType(t)) if t == "DELF"));
    }

    #[test]
    fn test_empty_pools_yield_empty_paper() {
        let blueprint = blueprint_of("CSP", &[("CSP_01", 4, 0)]);
        let mut rng = StdRng::seed_from_u64(0);
        let paper = generate_exam_paper(&blueprint, &[], &[], "CSP", &mut rng).unwrap();
        assert!(paper.is_empty());
    }

    #[test]
    fn test_situational_shortfall_is_backfilled_with_knowledge() {
        // Target asks for 5 knowledge + 6 situational, but only 2
        // situational questions exist: the 4 missing slots become extra
        // knowledge picks from the same category.
        let blueprint = blueprint_of("CSP", &[("X", 5, 6)]);
        let situational: Vec<Question> = (1..=2).map(|id| question(id, "X", "CSP")).collect();
        let knowledge: Vec<Question> = (10..=19).map(|id| question(id, "X", "CSP")).collect();

        let mut rng = StdRng::seed_from_u64(3);
        let paper =
            generate_exam_paper(&blueprint, &knowledge, &situational, "CSP", &mut rng).unwrap();

        let situation_count = paper
            .iter()
            .filter(|q| q.question_form == QuestionForm::Situation)
            .count();
        let knowledge_count = paper
            .iter()
            .filter(|q| q.question_form == QuestionForm::Knowledge)
            .count();
        assert_eq!(situation_count, 2);
        assert_eq!(knowledge_count, 9);
        assert_eq!(paper.len(), 11);
    }
}
