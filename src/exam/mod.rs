// src/exam/mod.rs

pub mod blueprint;
pub mod generator;
pub mod shuffle;

pub use blueprint::{Blueprint, CategoryTarget};
pub use generator::{ExamError, ExamQuestion, QuestionForm, generate_exam_paper};
