use std::collections::BTreeMap;

use anyhow::Result as AnyResult;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod file_repository;

/// One quiz entry as it appears in the source YAML. Records are read-only
/// once constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizRecord {
    /// Prompt read to the players.
    pub question: String,
    /// Expected answer.
    pub answer: String,
    /// Optional phonetic or original-language form of the answer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spell: Option<String>,
    /// Free-form notes for the quizmaster.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,
    /// Categorized judgement lists (`ok` / `ng` / `repeat`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub criteria: Option<Criteria>,
}

/// Categorized answer lists attached to a record. The three recognized
/// categories keep their own fields; anything else lands in `extra` so the
/// validation pass can report it. Formatting never looks at `extra`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Criteria {
    /// Accepted alternate answers.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ok: Vec<String>,
    /// Rejected answers.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ng: Vec<String>,
    /// Answers that require the contestant to repeat.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub repeat: Vec<String>,
    /// Unrecognized category keys, preserved for validation.
    #[serde(flatten, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, Vec<String>>,
}

/// A single defect found while validating a record collection. `Display`
/// yields the human-readable description shown to the user.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationIssue {
    #[error("record {record}: question must not be blank")]
    BlankQuestion { record: usize },
    #[error("record {record}: answer must not be blank")]
    BlankAnswer { record: usize },
    #[error("record {record}: criteria.{category}[{position}] must not be blank")]
    BlankCriteriaEntry {
        record: usize,
        category: String,
        position: usize,
    },
    #[error("record {record}: unknown criteria key `{key}` (recognized: ok, ng, repeat)")]
    UnknownCriteriaKey { record: usize, key: String },
    #[error("record {record}: comments[{position}] must not be blank")]
    BlankComment { record: usize, position: usize },
    #[error("quiz file contains no records")]
    NoRecords,
}

/// Outcome of the on-demand validation pass. Informational only; validation
/// never fails.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub records: usize,
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn new(records: usize, issues: Vec<ValidationIssue>) -> Self {
        Self {
            is_valid: issues.is_empty(),
            records,
            issues,
        }
    }
}

impl QuizRecord {
    /// Collect every defect in this record without stopping at the first.
    /// `index` is the 1-based position used in issue descriptions.
    pub fn validate(&self, index: usize) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        if self.question.trim().is_empty() {
            issues.push(ValidationIssue::BlankQuestion { record: index });
        }
        if self.answer.trim().is_empty() {
            issues.push(ValidationIssue::BlankAnswer { record: index });
        }

        if let Some(criteria) = &self.criteria {
            let categories: [(&str, &[String]); 3] = [
                ("ok", &criteria.ok),
                ("ng", &criteria.ng),
                ("repeat", &criteria.repeat),
            ];
            for (category, items) in categories {
                for (position, item) in items.iter().enumerate() {
                    if item.trim().is_empty() {
                        issues.push(ValidationIssue::BlankCriteriaEntry {
                            record: index,
                            category: category.to_string(),
                            position,
                        });
                    }
                }
            }
            for key in criteria.extra.keys() {
                issues.push(ValidationIssue::UnknownCriteriaKey {
                    record: index,
                    key: key.clone(),
                });
            }
        }

        for (position, comment) in self.comments.iter().enumerate() {
            if comment.trim().is_empty() {
                issues.push(ValidationIssue::BlankComment {
                    record: index,
                    position,
                });
            }
        }

        issues
    }
}

/// Walk every record and accumulate all findings before returning.
pub fn validate_records(records: &[QuizRecord]) -> ValidationReport {
    let mut issues = Vec::new();
    for (idx, record) in records.iter().enumerate() {
        issues.extend(record.validate(idx + 1));
    }
    if records.is_empty() {
        issues.push(ValidationIssue::NoRecords);
    }
    ValidationReport::new(records.len(), issues)
}

/// Abstraction over record loading so different backends (files, embedded
/// fixtures) can be swapped transparently.
pub trait RecordRepository {
    /// Retrieve all records from the backing store.
    fn load_records(&self) -> AnyResult<Vec<QuizRecord>>;
}
