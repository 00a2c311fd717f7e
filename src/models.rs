use crate::catalog::{Role, Task};
use crate::progress::Progress;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The completion set for one calendar day, as persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CompletionRecord {
    pub steps: Vec<String>,
    pub date: String,
}

impl CompletionRecord {
    pub fn new(date: impl Into<String>, steps: &BTreeSet<String>) -> Self {
        Self {
            steps: steps.iter().cloned().collect(),
            date: date.into(),
        }
    }

    pub fn completed(&self) -> BTreeSet<String> {
        self.steps.iter().cloned().collect()
    }
}

#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProgressResponse {
    pub date: String,
    pub completed: Vec<String>,
    pub completed_count: usize,
    pub total: usize,
    pub is_fully_complete: bool,
    pub progress_percent: u32,
}

impl ProgressResponse {
    pub fn new(date: String, completed: &BTreeSet<String>, progress: Progress) -> Self {
        Self {
            date,
            completed: completed.iter().cloned().collect(),
            completed_count: progress.completed_count,
            total: progress.total,
            is_fully_complete: progress.is_fully_complete,
            progress_percent: progress.percent,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ToggleResponse {
    pub progress: ProgressResponse,
    /// True when the toggle marked the task complete.
    pub celebrate: bool,
}

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub tasks: &'static [Task],
    pub roles: &'static [Role],
}
