// src/exam/blueprint.rs

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Question quota for one thematic category: `knowledge` plain knowledge
/// questions plus `situation` situational ones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryTarget {
    pub category: String,
    pub knowledge: usize,
    pub situation: usize,
}

/// Exam composition table, keyed by exam type.
///
/// The required paper size of an exam type is the sum over its targets,
/// never a separate constant. The built-in table yields 40 questions
/// (28 knowledge + 12 situational) for both official exam types.
/// Deployments can swap the whole table via `BLUEPRINT_PATH` to support
/// additional exam types without touching the generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Blueprint {
    exams: HashMap<String, Vec<CategoryTarget>>,
}

impl Blueprint {
    pub fn new(exams: HashMap<String, Vec<CategoryTarget>>) -> Self {
        Self { exams }
    }

    /// Ordered category targets for an exam type, `None` for unknown keys.
    pub fn targets(&self, exam_type: &str) -> Option<&[CategoryTarget]> {
        self.exams.get(exam_type).map(Vec::as_slice)
    }
}

impl Default for Blueprint {
    /// The official composition for the 'CSP' and 'CR' exams.
    fn default() -> Self {
        let mut exams = HashMap::new();
        exams.insert(
            "CSP".to_string(),
            vec![
                target("CSP_01", 5, 6),
                target("CSP_02", 6, 0),
                target("CSP_03", 5, 6),
                target("CSP_04", 8, 0),
                target("CSP_05", 4, 0),
            ],
        );
        exams.insert(
            "CR".to_string(),
            vec![
                target("CR_001", 5, 6),
                target("CR_002", 6, 0),
                target("CR_003", 5, 6),
                target("CR_004", 8, 0),
                target("CR_005", 4, 0),
            ],
        );
        Self { exams }
    }
}

fn target(category: &str, knowledge: usize, situation: usize) -> CategoryTarget {
    CategoryTarget {
        category: category.to_string(),
        knowledge,
        situation,
    }
}
