//! The task record and its partial-update form.
//!
//! A `Task` mirrors one element of the on-disk JSON array. Files written by
//! older tools may omit `priority_level` or `status`, so both are optional on
//! the wire; display code goes through the defaulting accessors instead of
//! touching the raw fields.

use serde::{Deserialize, Serialize};

use crate::fields::{Status, DEFAULT_PRIORITY};

/// A single tracked task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(default)]
    pub task_name: String,
    #[serde(default)]
    pub task_due_date: String,
    #[serde(default)]
    pub task_description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority_level: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Task {
    /// Build a record from already-validated parts. Records created this way
    /// always carry all five fields.
    pub fn new(
        name: impl Into<String>,
        due_date: impl Into<String>,
        description: impl Into<String>,
        priority_level: i64,
        status: Status,
    ) -> Self {
        Task {
            task_name: name.into(),
            task_due_date: due_date.into(),
            task_description: description.into(),
            priority_level: Some(priority_level),
            status: Some(status.as_str().to_string()),
        }
    }

    /// Status for display, defaulting records loaded without one.
    pub fn display_status(&self) -> &str {
        self.status.as_deref().unwrap_or(Status::ToBeStarted.as_str())
    }

    /// Priority for display, defaulting records loaded without one.
    pub fn display_priority(&self) -> i64 {
        self.priority_level.unwrap_or(DEFAULT_PRIORITY)
    }

    /// Exact-string finished check; a missing or garbled status never counts.
    pub fn is_finished(&self) -> bool {
        self.status.as_deref() == Some(Status::Finished.as_str())
    }

    /// Case-insensitive substring match against name or description.
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        let needle = keyword.to_lowercase();
        self.task_name.to_lowercase().contains(&needle)
            || self.task_description.to_lowercase().contains(&needle)
    }
}

/// Fields to change on an existing task; `None` leaves the current value.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub task_name: Option<String>,
    pub task_due_date: Option<String>,
    pub task_description: Option<String>,
    pub priority_level: Option<i64>,
    pub status: Option<Status>,
}

impl TaskPatch {
    pub fn is_empty(&self) -> bool {
        self.task_name.is_none()
            && self.task_due_date.is_none()
            && self.task_description.is_none()
            && self.priority_level.is_none()
            && self.status.is_none()
    }

    /// Overwrite exactly the fields present in the patch.
    pub fn apply_to(&self, task: &mut Task) {
        if let Some(name) = &self.task_name {
            task.task_name = name.clone();
        }
        if let Some(due) = &self.task_due_date {
            task.task_due_date = due.clone();
        }
        if let Some(desc) = &self.task_description {
            task.task_description = desc.clone();
        }
        if let Some(level) = self.priority_level {
            task.priority_level = Some(level);
        }
        if let Some(status) = self.status {
            task.status = Some(status.as_str().to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Task {
        Task::new("Write report", "2024-01-31", "Annual report", 5, Status::InProgress)
    }

    #[test]
    fn new_fills_all_fields() {
        let t = sample();
        assert_eq!(t.task_name, "Write report");
        assert_eq!(t.priority_level, Some(5));
        assert_eq!(t.status.as_deref(), Some("In progress"));
    }

    #[test]
    fn display_accessors_default_missing_fields() {
        let bare = Task {
            task_name: "Old record".to_string(),
            task_due_date: String::new(),
            task_description: String::new(),
            priority_level: None,
            status: None,
        };
        assert_eq!(bare.display_status(), "To be started");
        assert_eq!(bare.display_priority(), 5);
        assert!(!bare.is_finished());
    }

    #[test]
    fn finished_requires_exact_string() {
        let mut t = sample();
        t.status = Some("Finished".to_string());
        assert!(t.is_finished());
        t.status = Some("finished".to_string());
        assert!(!t.is_finished());
        t.status = Some("FINISHED".to_string());
        assert!(!t.is_finished());
    }

    #[test]
    fn keyword_match_is_case_insensitive_over_name_and_description() {
        let t = sample();
        assert!(t.matches_keyword("REPORT"));
        assert!(t.matches_keyword("annual"));
        assert!(!t.matches_keyword("slides"));
    }

    #[test]
    fn empty_keyword_matches_any_record() {
        assert!(sample().matches_keyword(""));
    }

    #[test]
    fn patch_applies_only_present_fields() {
        let mut t = sample();
        let patch = TaskPatch {
            status: Some(Status::Finished),
            ..TaskPatch::default()
        };
        patch.apply_to(&mut t);
        assert_eq!(t.status.as_deref(), Some("Finished"));
        assert_eq!(t.task_name, "Write report");
        assert_eq!(t.task_due_date, "2024-01-31");
        assert_eq!(t.task_description, "Annual report");
        assert_eq!(t.priority_level, Some(5));
    }

    #[test]
    fn missing_optionals_survive_a_round_trip_unchanged() {
        let json = r#"{"task_name":"Old record","task_due_date":"","task_description":""}"#;
        let t: Task = serde_json::from_str(json).unwrap();
        assert_eq!(t.priority_level, None);
        assert_eq!(t.status, None);
        let back = serde_json::to_string(&t).unwrap();
        assert!(!back.contains("priority_level"));
        assert!(!back.contains("status"));
    }
}
